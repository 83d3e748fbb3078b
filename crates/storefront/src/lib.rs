//! Bistro storefront.
//!
//! Client-side behavior for the restaurant site, compiled to WebAssembly and
//! started automatically when the module loads. The page owns the markup;
//! this crate attaches behavior to it:
//!
//! - sticky header, mobile nav and smooth in-page anchors
//! - scroll-reveal animations
//! - the hero carousel
//! - contact form validation
//! - the cart drawer, persisted in `localStorage`
//!
//! State machines and validation live in plain modules ([`cart`],
//! [`carousel`], [`contact`], [`nav`], [`reveal`]) and are tested natively.
//! Only `bindings` and [`dom`] touch the browser.

pub mod cart;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod logging;
pub mod nav;
pub mod reveal;
pub mod state;

mod bindings;

use bistro_core::Catalog;

use crate::cart::LocalStore;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::dom::Hooks;
use crate::error::Result;
use crate::state::AppState;

/// Id of the `<script>` element carrying the menu catalog JSON.
pub const CATALOG_ELEMENT_ID: &str = "menu-data";

#[allow(unsafe_code)]
mod entry {
    use wasm_bindgen::prelude::*;

    /// WASM entry point, run once when the module is instantiated.
    ///
    /// # Errors
    ///
    /// Returns an error if the page has no `window` or `document`.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        super::boot().map_err(JsValue::from)
    }
}

/// Read configuration, restore the cart and bind every feature.
fn boot() -> Result<()> {
    let hooks = Hooks::bind()?;

    let (config, config_error) =
        SiteConfig::load(dom::data_block(&hooks.document, CONFIG_ELEMENT_ID).as_deref());
    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring site config, using defaults");
    }

    let catalog = load_catalog(&hooks);
    let store = LocalStore::open(&hooks.window, &config.storage_key);
    let state = AppState::new(config, catalog, store);

    let bound = bindings::bind_all(&state, &hooks);
    tracing::info!(
        features = bound,
        cart_units = state.cart().count(),
        "Storefront ready"
    );
    Ok(())
}

fn load_catalog(hooks: &Hooks) -> Catalog {
    let Some(json) = dom::data_block(&hooks.document, CATALOG_ELEMENT_ID) else {
        return Catalog::default();
    };

    match Catalog::from_json(&json) {
        Ok(catalog) => {
            tracing::debug!(items = catalog.len(), "Menu catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed menu catalog");
            Catalog::default()
        }
    }
}
