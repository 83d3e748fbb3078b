//! Integration tests for the Bistro site behavior layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart engine scenarios, persistence across reloads
//! - `contact_form` - Contact form validation scenarios
//! - `carousel` - Slide navigation and autoplay bookkeeping
//!
//! Everything here runs natively against in-memory stores; nothing touches a
//! browser.

use bistro_core::{Catalog, MenuItem};
use bistro_storefront::cart::{CartEngine, CheckoutSettings, MemoryStore};
use rust_decimal::Decimal;

/// A menu card as the home page renders it.
#[must_use]
pub fn veggie_pizza() -> MenuItem {
    MenuItem::new("Veggie Pizza", Decimal::new(1250, 2), "img/veggie-pizza.jpg")
}

/// A second dish for ordering checks.
#[must_use]
pub fn lemonade() -> MenuItem {
    MenuItem::new("Fresh Lemonade", Decimal::new(399, 2), "img/lemonade.jpg")
}

/// The published menu used by catalog-backed tests.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new([veggie_pizza(), lemonade()])
}

/// A cart engine over `store` with default checkout settings.
#[must_use]
pub fn engine_with(store: MemoryStore) -> CartEngine<MemoryStore> {
    CartEngine::load(store, CheckoutSettings::default())
}

/// Simulate a page reload: a fresh engine over the same storage slot.
#[must_use]
pub fn reload(engine: &CartEngine<MemoryStore>) -> CartEngine<MemoryStore> {
    engine_with(engine.store().clone())
}
