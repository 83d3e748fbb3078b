//! Slug identifiers for menu and cart items.
//!
//! Items are keyed by a slug derived from their display name, so the same dish
//! added from two different listings lands on the same cart entry.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A slug identifying a menu item.
///
/// ## Derivation
///
/// [`ItemId::from_name`] lowercases the name and collapses every run of
/// characters outside `[a-z0-9]` into a single `-`. Leading and trailing
/// hyphens are kept exactly as the collapse produces them.
///
/// ## Examples
///
/// ```
/// use bistro_core::ItemId;
///
/// assert_eq!(ItemId::from_name("Veggie Pizza").as_str(), "veggie-pizza");
/// assert_eq!(ItemId::from_name("Mac & Cheese!").as_str(), "mac-cheese-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an already-derived slug without normalizing it.
    ///
    /// Used for ids read back from storage or from `data-id` attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the slug for a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut in_gap = false;

        for c in name.to_lowercase().chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                slug.push(c);
                in_gap = false;
            } else if !in_gap {
                slug.push('-');
                in_gap = true;
            }
        }

        Self(slug)
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
