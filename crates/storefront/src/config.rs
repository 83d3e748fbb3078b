//! Site configuration loaded from the page.
//!
//! The page may embed a JSON block that overrides any of the defaults:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   {"autoplay_interval_ms": 8000, "checkout_path": "/pay.html"}
//! </script>
//! ```
//!
//! # Keys
//!
//! - `storage_key` - `localStorage` key holding the cart (default: `cart`)
//! - `checkout_path` - Where checkout navigates (default: `./payment.html`)
//! - `autoplay_interval_ms` - Carousel autoplay period (default: 5000)
//! - `scroll_threshold_px` - Scroll offset that marks the header scrolled (default: 2)
//! - `reveal_threshold` - Visible fraction that triggers a reveal (default: 0.2)
//! - `empty_cart_message` - Alert shown on empty-cart checkout
//! - `contact_success_message` - Alert shown after a valid contact submission
//! - `log_filter` - `tracing` filter directives (default: `bistro_storefront=info`)

use serde::Deserialize;
use thiserror::Error;

/// Id of the `<script>` element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_STORAGE_KEY: &str = "cart";
pub const DEFAULT_CHECKOUT_PATH: &str = "./payment.html";
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 2.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_LOG_FILTER: &str = "bistro_storefront=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid config value {0}: {1}")]
    InvalidValue(String, String),
}

/// Site behavior configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `localStorage` key for the persisted cart
    pub storage_key: String,
    /// Relative path of the payment page
    pub checkout_path: String,
    /// Carousel autoplay period in milliseconds
    pub autoplay_interval_ms: u32,
    /// Scroll offset (px) above which the header is styled as scrolled
    pub scroll_threshold_px: f64,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Alert text for checkout with an empty cart
    pub empty_cart_message: String,
    /// Alert text after a successful contact submission
    pub contact_success_message: String,
    /// `tracing` filter directives for the console logger
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            checkout_path: DEFAULT_CHECKOUT_PATH.to_string(),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            empty_cart_message: "Your cart is empty.".to_string(),
            contact_success_message: "Thanks! Your message has been sent.".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate the embedded JSON configuration.
    ///
    /// Keys that are absent keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed, names an unknown key,
    /// or if a value fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the optional embedded block, falling back to defaults.
    ///
    /// The error is handed back alongside the defaults so the caller can log
    /// it once logging is initialized.
    #[must_use]
    pub fn load(json: Option<&str>) -> (Self, Option<ConfigError>) {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_non_empty("checkout_path", &self.checkout_path)?;

        if self.autoplay_interval_ms == 0 || i32::try_from(self.autoplay_interval_ms).is_err() {
            return Err(invalid(
                "autoplay_interval_ms",
                format!("must be between 1 and {} (got {})", i32::MAX, self.autoplay_interval_ms),
            ));
        }

        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(invalid(
                "scroll_threshold_px",
                format!("must be a non-negative number (got {})", self.scroll_threshold_px),
            ));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid(
                "reveal_threshold",
                format!("must be within 0..=1 (got {})", self.reveal_threshold),
            ));
        }

        Ok(())
    }

    /// Autoplay period in the form `setInterval` takes.
    #[must_use]
    pub fn autoplay_interval(&self) -> i32 {
        i32::try_from(self.autoplay_interval_ms).unwrap_or(i32::MAX)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue(key.to_string(), reason)
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(key, "must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.checkout_path, "./payment.html");
        assert_eq!(config.autoplay_interval(), 5000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"autoplay_interval_ms": 8000}"#).unwrap();
        assert_eq!(config.autoplay_interval_ms, 8000);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!((config.reveal_threshold - DEFAULT_REVEAL_THRESHOLD).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = SiteConfig::from_json(r#"{"autoplay_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "autoplay_interval_ms"));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "reveal_threshold"));

        let err = SiteConfig::from_json(r#"{"scroll_threshold_px": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "scroll_threshold_px"));
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        let err = SiteConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "storage_key"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"autoplay": 1}"#),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_falls_back_on_error() {
        let (config, err) = SiteConfig::load(Some("{not json"));
        assert_eq!(config, SiteConfig::default());
        assert!(matches!(err, Some(ConfigError::Malformed(_))));
    }

    #[test]
    fn test_load_absent_or_blank() {
        assert!(SiteConfig::load(None).1.is_none());
        assert!(SiteConfig::load(Some("   ")).1.is_none());
    }
}
