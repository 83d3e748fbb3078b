//! Menu listing data.
//!
//! The menu page can publish its dishes as a JSON array so add-to-cart reads
//! structured data instead of scraping card markup:
//!
//! ```json
//! [{"name":"Veggie Pizza","price":12.5,"image":"img/pizza.jpg"}]
//! ```
//!
//! `id` is optional in the published data and defaults to the name slug.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ItemId;

/// A dish as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub image: String,
}

impl MenuItem {
    /// Create a listing whose id is the slug of `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, image: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: ItemId::from_name(&name),
            name,
            price,
            image: image.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawMenuItem {
    #[serde(default)]
    id: Option<ItemId>,
    name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
    #[serde(default)]
    image: String,
}

impl<'de> Deserialize<'de> for MenuItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMenuItem::deserialize(deserializer)?;
        let id = raw.id.unwrap_or_else(|| ItemId::from_name(&raw.name));
        Ok(Self {
            id,
            name: raw.name,
            price: raw.price,
            image: raw.image,
        })
    }
}

/// All dishes published by the menu page, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: IndexMap<ItemId, MenuItem>,
}

impl Catalog {
    /// Build a catalog from listings. Later duplicates replace earlier ones.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id.clone(), item))
                .collect(),
        }
    }

    /// Parse the JSON array published by the menu page.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an array of listings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
