//! Money type for menu prices and cart totals.
//!
//! Amounts are kept exactly as the menu markup and previously stored carts
//! give them: a plain number in major units. Nothing is rounded on the way
//! in, so a stored cart reads back with the prices it was saved with.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A monetary amount in the menu's single currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money {
    amount: f64,
}

impl Money {
    /// Create a value from a whole number of major units.
    pub fn whole(amount: i64) -> Self {
        Self::from_major(amount as f64)
    }

    /// Create a value from a decimal amount, kept as given.
    ///
    /// ```
    /// use menu_core::money::Money;
    /// let price = Money::from_major(12.345);
    /// assert_eq!(price.to_major(), 12.345);
    /// ```
    pub const fn from_major(amount: f64) -> Self {
        Self { amount }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::from_major(0.0)
    }

    /// Amount in major units.
    pub fn to_major(&self) -> f64 {
        self.amount
    }

    /// Whether the amount has no fractional part.
    fn is_whole(&self) -> bool {
        self.amount.fract() == 0.0 && self.amount.abs() <= MAX_EXACT_INTEGER
    }

    /// Format with a currency label: `Rs 50`, `Rs 49.5`.
    pub fn display(&self, label: &str) -> String {
        format!("{} {}", label, self)
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_major(self.amount * f64::from(quantity))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_major(self.amount + other.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shortest form that reads back to the same value: `50`, `49.5`.
        write!(f, "{}", self.amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole amounts go out as integers so stored carts read `50`, not `50.0`.
        if self.is_whole() {
            serializer.serialize_i64(self.amount as i64)
        } else {
            serializer.serialize_f64(self.amount)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        Ok(Money::from_major(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keeps_every_digit() {
        assert_eq!(Money::from_major(12.345).to_major(), 12.345);
        assert_eq!(Money::whole(250), Money::from_major(250.0));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::whole(50).display("Rs"), "Rs 50");
        assert_eq!(Money::from_major(49.5).display("Rs"), "Rs 49.5");
        assert_eq!(Money::from_major(12.345).display("Rs"), "Rs 12.345");
        assert_eq!(Money::zero().display("Rs"), "Rs 0");
    }

    #[test]
    fn test_money_times_and_sum() {
        let total: Money = [Money::whole(100).times(2), Money::whole(50).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::whole(250));
    }

    #[test]
    fn test_money_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Money::whole(50)).unwrap(), "50");
        assert_eq!(serde_json::to_string(&Money::from_major(49.5)).unwrap(), "49.5");
        assert_eq!(serde_json::to_string(&Money::from_major(12.345)).unwrap(), "12.345");
    }

    #[test]
    fn test_money_deserializes_without_rounding() {
        let whole: Money = serde_json::from_str("120").unwrap();
        let fractional: Money = serde_json::from_str("12.345").unwrap();
        assert_eq!(whole, Money::whole(120));
        assert_eq!(fractional.to_major(), 12.345);
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
