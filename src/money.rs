//! Money
//!
//! The backend sends monetary amounts as decimal strings. They are parsed
//! into [`Decimal`] values, which preserve scale, so `"10.00"` stays
//! `"10.00"` rather than becoming a float. All totals shown to consumers
//! come from the backend's cost object; nothing in this crate re-derives a
//! total from line prices.

use std::fmt;

use rust_decimal::Decimal;

/// An amount in a specific currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Creates a money value from an already-parsed amount.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Parses a backend decimal string into a money value.
    ///
    /// # Errors
    ///
    /// Returns an error when `amount` is not a valid decimal string.
    pub fn parse(amount: &str, currency: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Self {
            amount: amount.parse()?,
            currency: currency.to_owned(),
        })
    }

    /// Returns the decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the ISO currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// The backend's authoritative monetary summary for a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartCost {
    /// Sum of line prices before tax.
    pub subtotal: Money,

    /// Tax, when the backend has calculated it.
    pub tax: Option<Money>,

    /// Amount the shopper will be charged.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_scale() -> testresult::TestResult {
        let money = Money::parse("10.00", "USD")?;

        assert_eq!(money.amount().to_string(), "10.00");
        assert_eq!(money.currency(), "USD");

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = Money::parse("ten dollars", "USD");

        assert!(result.is_err(), "expected a parse error");
    }

    #[test]
    fn zero_with_single_decimal_place_round_trips() -> testresult::TestResult {
        let money = Money::parse("0.0", "GBP")?;

        assert_eq!(money.amount().to_string(), "0.0");

        Ok(())
    }

    #[test]
    fn display_includes_currency() -> testresult::TestResult {
        let money = Money::parse("19.99", "EUR")?;

        assert_eq!(money.to_string(), "19.99 EUR");

        Ok(())
    }
}
