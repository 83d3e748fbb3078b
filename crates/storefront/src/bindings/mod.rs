//! Event wiring.
//!
//! Each feature binds independently. A feature whose elements are missing is
//! skipped; one that fails to bind is reported and the rest carry on.

mod cart;
mod contact;
mod header;
mod reveal;
mod slider;

use crate::dom::Hooks;
use crate::error::Result;
use crate::state::AppState;

type Binder = fn(&AppState, &Hooks) -> Result<()>;

const FEATURES: [(&str, Binder); 5] = [
    ("header", header::bind),
    ("reveal", reveal::bind),
    ("slider", slider::bind),
    ("contact", contact::bind),
    ("cart", cart::bind),
];

/// Bind every feature to the page. Returns how many bound cleanly.
pub fn bind_all(state: &AppState, hooks: &Hooks) -> usize {
    FEATURES
        .iter()
        .filter(|(feature, bind)| match bind(state, hooks) {
            Ok(()) => true,
            Err(e) => {
                e.report(feature);
                false
            }
        })
        .count()
}
