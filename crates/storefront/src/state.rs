//! Application state shared across event handlers.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use bistro_core::Catalog;

use crate::cart::{CartEngine, CartStore, CheckoutSettings, LocalStore};
use crate::config::SiteConfig;
use crate::nav::HeaderState;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Rc`; each handler clones it into its closure.
/// Handlers run one at a time on the UI thread and release every borrow
/// before returning, so the `RefCell`s are never contended.
#[derive(Debug)]
pub struct AppState<S = LocalStore> {
    inner: Rc<AppStateInner<S>>,
}

#[derive(Debug)]
struct AppStateInner<S> {
    config: SiteConfig,
    catalog: Catalog,
    cart: RefCell<CartEngine<S>>,
    header: RefCell<HeaderState>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: CartStore> AppState<S> {
    /// Create the state, loading the saved cart from `store`.
    pub fn new(config: SiteConfig, catalog: Catalog, store: S) -> Self {
        let cart = CartEngine::load(store, CheckoutSettings::from(&config));

        Self {
            inner: Rc::new(AppStateInner {
                config,
                catalog,
                cart: RefCell::new(cart),
                header: RefCell::new(HeaderState::default()),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the published menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Borrow the cart engine mutably.
    ///
    /// # Panics
    ///
    /// Panics if called while another cart borrow is alive in the same
    /// handler.
    #[must_use]
    pub fn cart(&self) -> RefMut<'_, CartEngine<S>> {
        self.inner.cart.borrow_mut()
    }

    /// Borrow the header state mutably.
    ///
    /// # Panics
    ///
    /// Panics if called while another header borrow is alive in the same
    /// handler.
    #[must_use]
    pub fn header(&self) -> RefMut<'_, HeaderState> {
        self.inner.header.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use bistro_core::MenuItem;
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::MemoryStore;

    #[test]
    fn test_clones_share_state() {
        let state = AppState::new(SiteConfig::default(), Catalog::default(), MemoryStore::new());
        let other = state.clone();

        state
            .cart()
            .add_to_cart(&MenuItem::new("Soda", Decimal::from(3), ""));
        assert_eq!(other.cart().count(), 1);

        other.header().toggle_nav();
        assert!(state.header().open);
    }

    #[test]
    fn test_checkout_settings_follow_config() {
        let config = SiteConfig {
            checkout_path: "/pay".to_string(),
            ..SiteConfig::default()
        };
        let state = AppState::new(config, Catalog::default(), MemoryStore::new());
        state
            .cart()
            .add_to_cart(&MenuItem::new("Soda", Decimal::from(3), ""));

        assert_eq!(
            state.cart().checkout(),
            vec![crate::cart::Effect::Navigate("/pay".to_string())]
        );
    }
}
