//! The cart engine.
//!
//! [`CartEngine`] owns the [`Cart`] ledger and the store it persists to. Every
//! mutation is saved immediately, and [`CartEngine::render`] saves again as it
//! builds the view, so storage always matches what is on screen.
//!
//! Stored data that cannot be read back is treated as an empty cart; the
//! fault is logged and never shown to the user.

pub mod command;
pub mod listing;
pub mod store;
pub mod view;

use bistro_core::{Cart, ItemId, MenuItem};
use rust_decimal::Decimal;
use tracing::instrument;

pub use command::{Adjust, Command, Effect};
pub use listing::CardListing;
pub use store::{CartStore, LocalStore, MemoryStore, StoreError};
pub use view::{CartItemView, CartView};

use crate::config::SiteConfig;

/// Checkout behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    /// Page the browser is sent to for payment.
    pub path: String,
    /// Notice shown instead when the cart is empty.
    pub empty_cart_message: String,
}

impl From<&SiteConfig> for CheckoutSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            path: config.checkout_path.clone(),
            empty_cart_message: config.empty_cart_message.clone(),
        }
    }
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

/// Cart state plus its persistence.
#[derive(Debug)]
pub struct CartEngine<S> {
    cart: Cart,
    store: S,
    checkout: CheckoutSettings,
}

impl<S: CartStore> CartEngine<S> {
    /// Load the saved cart from `store`.
    ///
    /// Missing, unreadable or malformed data yields an empty cart.
    pub fn load(store: S, checkout: CheckoutSettings) -> Self {
        let cart = match store.load() {
            Ok(Some(json)) => decode(&json),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved cart, starting empty");
                Cart::new()
            }
        };

        tracing::debug!(lines = cart.len(), units = cart.count(), "Cart loaded");
        Self {
            cart,
            store,
            checkout,
        }
    }

    /// The current ledger.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Total units in the cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.cart.count()
    }

    /// Total value of the cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Apply a command and return the page updates it calls for.
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Add(item) => self.add_to_cart(&item),
            Command::Adjust { id, action } => self.adjust(&id, action),
            Command::Clear => self.clear(),
            Command::Checkout => self.checkout(),
            Command::Open => vec![Effect::OpenPanel],
            Command::Close => vec![Effect::ClosePanel],
        }
    }

    /// Add one unit of `item` and open the panel.
    pub fn add_to_cart(&mut self, item: &MenuItem) -> Vec<Effect> {
        let qty = self.cart.add(item);
        tracing::debug!(item = %item.id, qty, "Added to cart");
        self.persist();
        vec![Effect::Render, Effect::OpenPanel]
    }

    /// Change the quantity of an existing line.
    ///
    /// Ids not in the cart are ignored: nothing is saved or repainted.
    pub fn adjust(&mut self, id: &ItemId, action: Adjust) -> Vec<Effect> {
        let changed = match action {
            Adjust::Increase => self.cart.increase(id).is_some(),
            Adjust::Decrease => self.cart.decrease(id).is_some(),
            Adjust::Remove => self.cart.remove(id).is_some(),
        };

        if !changed {
            tracing::debug!(item = %id, %action, "Ignoring adjustment for item not in cart");
            return Vec::new();
        }

        self.persist();
        vec![Effect::Render]
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Vec<Effect> {
        self.cart.clear();
        self.persist();
        vec![Effect::Render]
    }

    /// Send the user to payment, or tell them the cart is empty.
    pub fn checkout(&self) -> Vec<Effect> {
        if self.cart.is_empty() {
            return vec![Effect::Notify(self.checkout.empty_cart_message.clone())];
        }

        tracing::info!(
            units = self.cart.count(),
            total = %self.cart.total_price(),
            "Proceeding to checkout"
        );
        vec![Effect::Navigate(self.checkout.path.clone())]
    }

    /// Build the display data for the current cart, saving it as a side effect.
    pub fn render(&self) -> CartView {
        self.persist();
        CartView::from(&self.cart)
    }

    /// Write the cart to the store, logging failures.
    pub fn persist(&self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(crate::error::AppError::from)
            .and_then(|json| self.store.save(&json).map_err(Into::into));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to save cart");
        }
    }
}

/// Parse a saved cart, treating anything malformed as empty.
fn decode(json: &str) -> Cart {
    match serde_json::from_str::<Option<Cart>>(json) {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding malformed saved cart");
            Cart::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::new("Veggie Pizza", Decimal::new(1250, 2), "img/pizza.jpg")
    }

    fn engine() -> CartEngine<MemoryStore> {
        CartEngine::load(MemoryStore::new(), CheckoutSettings::default())
    }

    #[test]
    fn test_load_missing_is_empty() {
        assert!(engine().cart().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for stored in ["not json", "null", "[]", "42", r#"{"a":{"qty":"x"}}"#] {
            let engine =
                CartEngine::load(MemoryStore::with_value(stored), CheckoutSettings::default());
            assert!(engine.cart().is_empty(), "stored value {stored:?}");
        }
    }

    #[test]
    fn test_load_unreadable_store_is_empty() {
        struct Broken;
        impl CartStore for Broken {
            fn load(&self) -> Result<Option<String>, StoreError> {
                Err(StoreError::Unavailable)
            }
            fn save(&self, _: &str) -> Result<(), StoreError> {
                Err(StoreError::Unavailable)
            }
        }

        let mut engine = CartEngine::load(Broken, CheckoutSettings::default());
        assert!(engine.cart().is_empty());
        // Writes fail quietly and the in-memory cart still works
        engine.add_to_cart(&pizza());
        assert_eq!(engine.count(), 1);
    }

    #[test]
    fn test_add_persists_and_opens_panel() {
        let mut engine = engine();
        let effects = engine.add_to_cart(&pizza());

        assert_eq!(effects, vec![Effect::Render, Effect::OpenPanel]);
        let saved = engine.store().value().unwrap();
        assert!(saved.contains("\"veggie-pizza\""));
    }

    #[test]
    fn test_adjust_missing_id_is_noop() {
        let mut engine = engine();
        let effects = engine.adjust(&ItemId::new("ghost"), Adjust::Increase);
        assert!(effects.is_empty());
        assert_eq!(engine.store().value(), None);
    }

    #[test]
    fn test_adjust_decrease_to_zero_removes() {
        let mut engine = engine();
        engine.add_to_cart(&pizza());
        let id = ItemId::new("veggie-pizza");

        assert_eq!(engine.adjust(&id, Adjust::Decrease), vec![Effect::Render]);
        assert!(engine.cart().is_empty());
        assert_eq!(engine.store().value().as_deref(), Some("{}"));
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut engine = engine();
        engine.dispatch(Command::Add(pizza()));
        engine.dispatch(Command::Adjust {
            id: ItemId::new("veggie-pizza"),
            action: Adjust::Increase,
        });
        assert_eq!(engine.count(), 2);

        assert_eq!(engine.dispatch(Command::Open), vec![Effect::OpenPanel]);
        assert_eq!(engine.dispatch(Command::Close), vec![Effect::ClosePanel]);

        assert_eq!(engine.dispatch(Command::Clear), vec![Effect::Render]);
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_checkout_empty_notifies() {
        let effects = engine().checkout();
        assert_eq!(effects, vec![Effect::Notify("Your cart is empty.".to_string())]);
    }

    #[test]
    fn test_checkout_navigates() {
        let mut engine = engine();
        engine.add_to_cart(&pizza());
        assert_eq!(
            engine.checkout(),
            vec![Effect::Navigate("./payment.html".to_string())]
        );
    }

    #[test]
    fn test_render_persists() {
        let store = MemoryStore::new();
        let engine = CartEngine::load(store.clone(), CheckoutSettings::default());
        let view = engine.render();

        assert_eq!(view, CartView::empty());
        assert_eq!(store.value().as_deref(), Some("{}"));
    }
}
