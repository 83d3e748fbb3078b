//! Cart display data and row markup.

use askama::Template;
use bistro_core::{Cart, CartItem, Price};

use super::command::Adjust;

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Render the rows for the `.cart-items` container.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_items(&self) -> Result<String, askama::Error> {
        CartItemsTemplate {
            cart: self,
            increase: Adjust::Increase.tag(),
            decrease: Adjust::Decrease.tag(),
            remove: Adjust::Remove.tag(),
        }
        .render()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().map(CartItemView::from).collect(),
            subtotal: cart.total_price().display(),
            item_count: cart.count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            price: Price::usd(item.price).display(),
            quantity: item.qty,
        }
    }
}

/// Cart rows fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
    increase: &'static str,
    decrease: &'static str,
    remove: &'static str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::MenuItem;
    use rust_decimal::Decimal;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let pizza = MenuItem::new("Veggie Pizza", Decimal::new(1250, 2), "img/pizza.jpg");
        cart.add(&pizza);
        cart.add(&pizza);
        cart.add(&MenuItem::new("Soda", Decimal::from(3), ""));
        cart
    }

    #[test]
    fn test_view_from_cart() {
        let view = CartView::from(&sample_cart());
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$28.00");
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].price, "$12.50");
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[1].id, "soda");
    }

    #[test]
    fn test_empty_view_matches_empty_cart() {
        assert_eq!(CartView::from(&Cart::new()), CartView::empty());
    }

    #[test]
    fn test_render_items_markup() {
        let html = CartView::from(&sample_cart()).render_items().unwrap();
        assert_eq!(html.matches("class=\"cart-item\"").count(), 2);
        assert!(html.contains("data-act=\"inc\" data-id=\"veggie-pizza\""));
        assert!(html.contains("data-act=\"dec\" data-id=\"veggie-pizza\""));
        assert!(html.contains("data-act=\"remove\" data-id=\"soda\""));
        assert!(html.contains("<span>2</span>"));
        assert!(html.contains("$12.50"));
        assert!(html.contains("pizza.jpg"));
    }

    #[test]
    fn test_render_items_escapes_names() {
        let mut cart = Cart::new();
        cart.add(&MenuItem::new("<b>Fish & Chips</b>", Decimal::ONE, ""));
        let html = CartView::from(&cart).render_items().unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;Fish &amp; Chips"));
    }

    #[test]
    fn test_render_empty_cart() {
        let html = CartView::empty().render_items().unwrap();
        assert!(html.trim().is_empty());
    }
}
