//! Money type for catalog prices.
//!
//! Uses a cents-based integer representation so that generated prices
//! round-trip exactly and compare without floating-point noise.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a USD value from cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use storefront_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Try to add another Money value, returning None if currencies don't match
    /// or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by an integer quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a decimal factor (e.g., a markup), rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Percentage saved going from `original` down to `self`, rounded.
    ///
    /// Returns None when `original` is not higher than `self`.
    pub fn discount_from(&self, original: &Money) -> Option<u32> {
        if original.currency != self.currency || original.amount_cents <= self.amount_cents {
            return None;
        }
        let savings = (original.amount_cents - self.amount_cents) as f64;
        Some((savings / original.amount_cents as f64 * 100.0).round() as u32)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount_cents.cmp(&other.amount_cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(29.9, Currency::USD).amount_cents, 2990);
        assert_eq!(Money::from_decimal(103.456, Currency::USD).amount_cents, 10346);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::usd(7).display(), "$0.07");
        assert_eq!(Money::new(1500, Currency::GBP).display(), "\u{00a3}15.00");
    }

    #[test]
    fn test_money_markup() {
        let price = Money::usd(10000);
        assert_eq!(price.multiply_decimal(1.3).amount_cents, 13000);
        assert_eq!(Money::usd(4999).multiply_decimal(1.3).amount_cents, 6499);
    }

    #[test]
    fn test_discount_from() {
        let price = Money::usd(7990);
        let original = Money::usd(19990);
        assert_eq!(price.discount_from(&original), Some(60));
        assert_eq!(original.discount_from(&price), None);
        assert_eq!(Money::usd(10000).discount_from(&Money::usd(13000)), Some(23));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::usd(100) < Money::usd(200));
        assert!(Money::usd(100)
            .partial_cmp(&Money::new(100, Currency::EUR))
            .is_none());
    }

    #[test]
    fn test_try_sum_and_multiply() {
        let values = [Money::usd(1000), Money::usd(250)];
        assert_eq!(
            Money::try_sum(values.iter(), Currency::USD),
            Some(Money::usd(1250))
        );
        assert_eq!(Money::usd(1250).try_multiply(3), Some(Money::usd(3750)));
        assert!(Money::usd(i64::MAX).try_multiply(2).is_none());
    }
}
