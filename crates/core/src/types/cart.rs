//! The cart ledger.
//!
//! A [`Cart`] maps item ids to [`CartItem`]s in display order. Quantities are
//! always at least one: any operation that would bring an entry to zero
//! removes it instead.
//!
//! The serialized form is a JSON object keyed by id, matching what the site
//! keeps in browser storage:
//!
//! ```json
//! {"veggie-pizza":{"id":"veggie-pizza","name":"Veggie Pizza","price":12.50,"image":"img/pizza.jpg","qty":2}}
//! ```

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ItemId;
use super::menu::MenuItem;
use super::price::Price;

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    /// Unit price in currency units, stored as an exact JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Thumbnail URL, empty when the listing had none.
    #[serde(default)]
    pub image: String,
    pub qty: u32,
}

impl CartItem {
    /// Price of this line (`qty × price`), saturating at the `Decimal` range.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.qty))
    }
}

/// Cart contents keyed by item id, in display order.
///
/// Display order is first-insertion order: bumping the quantity of an
/// existing entry leaves it in place, while removing and re-adding an item
/// moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: IndexMap<ItemId, CartItem>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = IndexMap::<ItemId, CartItem>::deserialize(deserializer)?;
        Ok(Self::from_items(items.into_values()))
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from deserialized entries, dropping zero-quantity lines.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let items = items
            .into_iter()
            .filter(|item| item.qty > 0)
            .map(|item| (item.id.clone(), item))
            .collect();
        Self { items }
    }

    /// Add one unit of `item`.
    ///
    /// An existing entry only has its quantity bumped; its name, price and
    /// image stay as first recorded. Returns the new quantity.
    pub fn add(&mut self, item: &MenuItem) -> u32 {
        let entry = self
            .items
            .entry(item.id.clone())
            .or_insert_with(|| CartItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                image: item.image.clone(),
                qty: 0,
            });
        entry.qty = entry.qty.saturating_add(1);
        entry.qty
    }

    /// Increase the quantity of `id` by one.
    ///
    /// Returns `None` if the id is not in the cart.
    pub fn increase(&mut self, id: &ItemId) -> Option<u32> {
        let item = self.items.get_mut(id)?;
        item.qty = item.qty.saturating_add(1);
        Some(item.qty)
    }

    /// Decrease the quantity of `id` by one, removing the entry at zero.
    ///
    /// Returns the remaining quantity (0 when removed), or `None` if the id
    /// is not in the cart.
    pub fn decrease(&mut self, id: &ItemId) -> Option<u32> {
        let item = self.items.get_mut(id)?;
        item.qty = item.qty.saturating_sub(1);
        let qty = item.qty;
        if qty == 0 {
            self.items.shift_remove(id);
        }
        Some(qty)
    }

    /// Remove `id` regardless of quantity.
    pub fn remove(&mut self, id: &ItemId) -> Option<CartItem> {
        self.items.shift_remove(id)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.get(id)
    }

    /// Whether `id` has a line in the cart.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Lines in display order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units (sum of quantities), saturating at `u32::MAX`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .values()
            .fold(0, |sum, item| sum.saturating_add(item.qty))
    }

    /// Total value (sum of `qty × price`), saturating at the `Decimal` range.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .values()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()))
    }

    /// Total value as a display price.
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::usd(self.total())
    }
}
