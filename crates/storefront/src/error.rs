//! Unified error handling for the binding layer.
//!
//! Provides a unified `AppError` type for everything that can go wrong while
//! wiring behavior onto the page. Nothing here is fatal: callers report the
//! error to the console log and leave the affected feature inactive.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::cart::store::StoreError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A browser API call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// A required page global is missing (no `window`, no `document`).
    #[error("Missing browser global: {0}")]
    MissingGlobal(&'static str),

    /// Cart storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rendering a template failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Configuration was rejected.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Log the error against the feature it disabled.
    pub fn report(&self, feature: &str) {
        tracing::error!(error = %self, feature, "Feature disabled");
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(describe_js(&value))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Best-effort message for a thrown JS value.
fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
