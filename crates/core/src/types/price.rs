//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are shown on menu cards as free text (`"$12.50"`, `"12.50 USD"`).
//! [`Price::parse_display`] recovers the amount from such text the same lenient
//! way the menu markup has always been read: every character that is not a
//! digit or a decimal point is dropped, and anything unparseable is zero.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a price amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// No digits were left after stripping the display text.
    #[error("price contains no digits")]
    Empty,
    /// The remaining digits do not form a decimal number.
    #[error("invalid price amount: {0}")]
    Invalid(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency.
    #[must_use]
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Parse the amount out of display text such as `"$12.50"`.
    ///
    /// # Errors
    ///
    /// Returns an error if no digits remain after stripping, or if the
    /// remaining characters are not a single decimal number (`"1.2.3"`).
    pub fn parse_amount(text: &str) -> Result<Decimal, PriceError> {
        let mut digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if !digits.chars().any(|c| c.is_ascii_digit()) {
            return if digits.is_empty() {
                Err(PriceError::Empty)
            } else {
                Err(PriceError::Invalid(digits))
            };
        }

        // "12." and ".5" are valid numbers in listing text
        if digits.ends_with('.') {
            digits.pop();
        }
        if digits.starts_with('.') {
            digits.insert(0, '0');
        }

        Decimal::from_str(&digits).map_err(|_| PriceError::Invalid(digits))
    }

    /// Parse display text into a price, falling back to zero.
    ///
    /// ```
    /// use bistro_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Price::parse_display("$12.50").amount, Decimal::new(1250, 2));
    /// assert_eq!(Price::parse_display("market price").amount, Decimal::ZERO);
    /// ```
    #[must_use]
    pub fn parse_display(text: &str) -> Self {
        Self::usd(Self::parse_amount(text).unwrap_or(Decimal::ZERO))
    }

    /// Format for display with exactly two decimal places (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{rounded:.2}", self.currency_code.symbol())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_symbols() {
        assert_eq!(Price::parse_amount("$12.50").unwrap(), Decimal::new(1250, 2));
        assert_eq!(Price::parse_amount(" 9 USD").unwrap(), Decimal::from(9));
        assert_eq!(Price::parse_amount("$1,200.00").unwrap(), Decimal::new(120_000, 2));
    }

    #[test]
    fn test_parse_amount_loose_decimal_points() {
        assert_eq!(Price::parse_amount("12.").unwrap(), Decimal::from(12));
        assert_eq!(Price::parse_amount(".5").unwrap(), Decimal::new(5, 1));
    }

    #[test]
    fn test_parse_amount_errors() {
        assert_eq!(Price::parse_amount("free"), Err(PriceError::Empty));
        assert!(matches!(
            Price::parse_amount("."),
            Err(PriceError::Invalid(_))
        ));
        assert!(matches!(
            Price::parse_amount("1.2.3"),
            Err(PriceError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_display_defaults_to_zero() {
        assert_eq!(Price::parse_display("").amount, Decimal::ZERO);
        assert_eq!(Price::parse_display("1.2.3").amount, Decimal::ZERO);
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::usd(Decimal::from(25)).display(), "$25.00");
        assert_eq!(Price::usd(Decimal::new(125, 1)).display(), "$12.50");
        assert_eq!(Price::usd(Decimal::new(19_999, 3)).display(), "$20.00");
        assert_eq!(Price::usd(Decimal::ZERO).display(), "$0.00");
    }

    #[test]
    fn test_display_other_currency() {
        let price = Price::new(Decimal::new(450, 2), CurrencyCode::EUR);
        assert_eq!(price.to_string(), "€4.50");
    }
}
