//! Core types for Bistro.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod menu;
pub mod price;

pub use cart::{Cart, CartItem};
pub use email::{Email, EmailError};
pub use id::ItemId;
pub use menu::{Catalog, MenuItem};
pub use price::{CurrencyCode, Price, PriceError};
