//! Resolving what an add-to-cart control refers to.
//!
//! Menu cards may carry `data-item="<id>"` pointing into the published
//! [`Catalog`]. Cards without it (or with an id the catalog lacks) are read from
//! their markup: the `h3` title, the `.price` text and the `.card-media`
//! background image.

use std::sync::LazyLock;

use bistro_core::{Catalog, ItemId, MenuItem, Price};
use regex::Regex;

/// Title used when a card has no readable name.
pub const FALLBACK_NAME: &str = "Item";
/// Price text used when a card has no `.price` element.
pub const FALLBACK_PRICE_TEXT: &str = "$0.00";

static CSS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(["']?(.*?)["']?\)"#).expect("Invalid regex"));

/// What the DOM layer read off a menu card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardListing {
    /// `data-item` on the control or card.
    pub item_ref: Option<String>,
    /// Text content of the card title.
    pub title: Option<String>,
    /// Text content of the price element.
    pub price_text: Option<String>,
    /// Computed `background-image` of the card media.
    pub background_image: Option<String>,
}

impl CardListing {
    /// The dish this card lists.
    ///
    /// Catalog data wins; markup is the fallback.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> MenuItem {
        if let Some(item) = self
            .item_ref
            .as_deref()
            .and_then(|id| catalog.get(&ItemId::new(id)))
        {
            return item.clone();
        }

        if let Some(id) = &self.item_ref {
            tracing::debug!(item = %id, "Listing not in catalog, reading card markup");
        }
        self.markup_item()
    }

    /// Build the dish from card markup alone.
    #[must_use]
    pub fn markup_item(&self) -> MenuItem {
        let name = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME);

        let price = Price::parse_display(
            self.price_text
                .as_deref()
                .unwrap_or(FALLBACK_PRICE_TEXT),
        );

        let image = self
            .background_image
            .as_deref()
            .and_then(css_url)
            .unwrap_or_default();

        MenuItem::new(name, price.amount, image)
    }
}

/// Extract the target of a CSS `url(...)` value.
///
/// ```
/// use bistro_storefront::cart::listing::css_url;
///
/// assert_eq!(css_url(r#"url("img/pizza.jpg")"#).as_deref(), Some("img/pizza.jpg"));
/// assert_eq!(css_url("none"), None);
/// ```
#[must_use]
pub fn css_url(value: &str) -> Option<String> {
    CSS_URL_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn pizza_card() -> CardListing {
        CardListing {
            item_ref: None,
            title: Some("  Veggie Pizza \n".to_string()),
            price_text: Some("$12.50".to_string()),
            background_image: Some(r#"url("https://cdn.example/pizza.jpg")"#.to_string()),
        }
    }

    #[test]
    fn test_markup_item() {
        let item = pizza_card().markup_item();
        assert_eq!(item.id.as_str(), "veggie-pizza");
        assert_eq!(item.name, "Veggie Pizza");
        assert_eq!(item.price, Decimal::new(1250, 2));
        assert_eq!(item.image, "https://cdn.example/pizza.jpg");
    }

    #[test]
    fn test_markup_item_defaults() {
        let item = CardListing::default().markup_item();
        assert_eq!(item.name, "Item");
        assert_eq!(item.id.as_str(), "item");
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_blank_title_uses_fallback() {
        let card = CardListing {
            title: Some("   ".to_string()),
            ..CardListing::default()
        };
        assert_eq!(card.markup_item().name, FALLBACK_NAME);
    }

    #[test]
    fn test_resolve_prefers_catalog() {
        let catalog = Catalog::new([MenuItem::new(
            "Veggie Pizza",
            Decimal::from(14),
            "img/catalog.jpg",
        )]);
        let card = CardListing {
            item_ref: Some("veggie-pizza".to_string()),
            ..pizza_card()
        };

        let item = card.resolve(&catalog);
        assert_eq!(item.price, Decimal::from(14));
        assert_eq!(item.image, "img/catalog.jpg");
    }

    #[test]
    fn test_resolve_unknown_ref_reads_markup() {
        let card = CardListing {
            item_ref: Some("missing".to_string()),
            ..pizza_card()
        };
        let item = card.resolve(&Catalog::default());
        assert_eq!(item.id.as_str(), "veggie-pizza");
        assert_eq!(item.price, Decimal::new(1250, 2));
    }

    #[test]
    fn test_css_url_variants() {
        assert_eq!(css_url("url(img/a.jpg)").as_deref(), Some("img/a.jpg"));
        assert_eq!(css_url("url('img/a.jpg')").as_deref(), Some("img/a.jpg"));
        assert_eq!(
            css_url(r#"linear-gradient(red, blue), url("img/b.png")"#).as_deref(),
            Some("img/b.png")
        );
        assert_eq!(css_url(""), None);
    }
}
