//! Bistro Core - Shared types library.
//!
//! This crate provides the domain types used by the Bistro site behavior layer:
//! - `storefront` - Browser-side behavior (cart, carousel, contact form, navigation)
//! - `integration-tests` - Scenario tests driving the storefront engines
//!
//! # Architecture
//!
//! The core crate contains only types and their pure operations - no I/O, no
//! DOM access, no storage. This keeps it lightweight and testable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Item slugs, prices, emails, the cart ledger and the menu catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
