//! Value Objects for the store

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identity. Zero marks a product the repository has not numbered yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const UNASSIGNED: ProductId = ProductId(0);

    pub fn new(value: u32) -> Self { Self(value) }
    pub fn value(&self) -> u32 { self.0 }
    pub fn is_unassigned(&self) -> bool { self.0 == 0 }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self { Self(value) }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Non-negative monetary amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() { return Err(MoneyError::Negative(amount)); }
        Ok(Self(amount))
    }
    pub fn zero() -> Self { Self(Decimal::ZERO) }
    pub fn amount(&self) -> Decimal { self.0 }
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0.checked_add(other.0).map(Money).ok_or(MoneyError::Overflow)
    }
    pub fn multiply(&self, qty: u32) -> Result<Money, MoneyError> {
        self.0.checked_mul(Decimal::from(qty)).map(Money).ok_or(MoneyError::Overflow)
    }

    /// Adds up `amounts`, failing instead of wrapping past `Decimal::MAX`.
    pub fn sum<I: IntoIterator<Item = Money>>(amounts: I) -> Result<Money, MoneyError> {
        amounts.into_iter().try_fold(Money::zero(), |acc, m| acc.add(&m))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;
    fn try_from(amount: Decimal) -> Result<Self, Self::Error> { Money::new(amount) }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self { money.0 }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "${:.2}", self.0) }
}

#[derive(Debug, Clone, PartialEq)] pub enum MoneyError { Negative(Decimal), Overflow }
impl std::error::Error for MoneyError {}
impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(amount) => write!(f, "Amount cannot be negative: {amount}"),
            Self::Overflow => write!(f, "Amount too large"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_product_id() {
        assert!(ProductId::UNASSIGNED.is_unassigned());
        assert_eq!(ProductId::from(7).to_string(), "7");
    }
    #[test]
    fn test_money_rejects_negative() {
        assert_eq!(Money::new(Decimal::new(-1, 2)), Err(MoneyError::Negative(Decimal::new(-1, 2))));
        assert!(Money::new(Decimal::ZERO).is_ok());
    }
    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(Decimal::new(1999, 2)).unwrap();
        assert_eq!(a.multiply(3).unwrap().amount(), Decimal::new(5997, 2));
        let total = Money::sum([a, a]).unwrap();
        assert_eq!(total.to_string(), "$39.98");
    }
    #[test]
    fn test_money_overflow() {
        let max = Money::new(Decimal::MAX).unwrap();
        assert_eq!(max.multiply(2), Err(MoneyError::Overflow));
        assert_eq!(max.add(&Money::new(Decimal::ONE).unwrap()), Err(MoneyError::Overflow));
        assert_eq!(Money::sum([max, max]), Err(MoneyError::Overflow));
        assert_eq!(max.multiply(1), Ok(max));
    }
    #[test]
    fn test_money_deserialize_checks_sign() {
        assert!(serde_json::from_str::<Money>("\"12.50\"").is_ok());
        assert!(serde_json::from_str::<Money>("\"-3\"").is_err());
    }
}
