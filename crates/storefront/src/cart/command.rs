//! Cart commands and the effects they request.
//!
//! Clicks anywhere on the page are decoded into a [`Command`]; the engine
//! applies it and answers with [`Effect`]s for the DOM layer to carry out.

use core::fmt;
use core::str::FromStr;

use bistro_core::{ItemId, MenuItem};

/// Quantity adjustment carried by a cart row control (`data-act`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjust {
    Increase,
    Decrease,
    Remove,
}

impl Adjust {
    /// The `data-act` value written into rendered rows.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Increase => "inc",
            Self::Decrease => "dec",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Adjust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unrecognized `data-act` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cart action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Adjust {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inc" | "increase" => Ok(Self::Increase),
            "dec" | "decrease" => Ok(Self::Decrease),
            "remove" => Ok(Self::Remove),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Something the user asked the cart to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of a listed dish.
    Add(MenuItem),
    /// Change the quantity of a line already in the cart.
    Adjust { id: ItemId, action: Adjust },
    /// Empty the cart.
    Clear,
    /// Proceed to payment.
    Checkout,
    /// Show the cart panel.
    Open,
    /// Hide the cart panel.
    Close,
}

impl Command {
    /// Decode a row control from its `data-act` / `data-id` attributes.
    ///
    /// Returns `None` when either attribute is missing or the action is not
    /// one the cart knows.
    #[must_use]
    pub fn from_row_control(act: Option<&str>, id: Option<&str>) -> Option<Self> {
        let action = act?.parse().ok()?;
        let id = id.filter(|id| !id.is_empty())?;
        Some(Self::Adjust {
            id: ItemId::new(id),
            action,
        })
    }
}

/// Page update requested by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Repaint rows, count and total.
    Render,
    OpenPanel,
    ClosePanel,
    /// Blocking notice to the user.
    Notify(String),
    /// Leave the page.
    Navigate(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_tags_roundtrip() {
        for action in [Adjust::Increase, Adjust::Decrease, Adjust::Remove] {
            assert_eq!(action.tag().parse::<Adjust>().unwrap(), action);
        }
    }

    #[test]
    fn test_adjust_rejects_unknown() {
        assert_eq!(
            "explode".parse::<Adjust>(),
            Err(UnknownAction("explode".to_string()))
        );
    }

    #[test]
    fn test_from_row_control() {
        assert_eq!(
            Command::from_row_control(Some("dec"), Some("veggie-pizza")),
            Some(Command::Adjust {
                id: ItemId::new("veggie-pizza"),
                action: Adjust::Decrease,
            })
        );
        assert_eq!(Command::from_row_control(Some("dec"), None), None);
        assert_eq!(Command::from_row_control(Some("dec"), Some("")), None);
        assert_eq!(Command::from_row_control(None, Some("x")), None);
        assert_eq!(Command::from_row_control(Some("zap"), Some("x")), None);
    }
}
