use crate::types::errors::PriceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

/// A transaction amount.
///
/// The sign of the impact on the balance is carried by the transaction type, so
/// prices are stored as entered. Positivity is not enforced: form validation
/// stops at the numeric shape, so zero and negative amounts are kept as typed.
/// On the wire a price is a plain JSON number.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    pub fn checked_sub(self, rhs: Price) -> Option<Price> {
        self.0.checked_sub(rhs.0).map(Price)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price(Decimal::from(value))
    }
}

/// On overflow the value is left unchanged and the error is logged.
impl AddAssign<Price> for Price {
    fn add_assign(&mut self, rhs: Price) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Price AddAssign error: Overflow")
        }
    }
}

/// On overflow the value is left unchanged and the error is logged.
impl SubAssign<Price> for Price {
    fn sub_assign(&mut self, rhs: Price) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Price SubAssign error: Overflow")
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |mut total, price| {
            total += price;
            total
        })
    }
}

impl Display for Price {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.normalize())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Parses raw form input. Only the numeric shape is checked here.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(PriceError::Empty);
        }

        Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map(Price)
            .map_err(|_| PriceError::InvalidNumber(value.to_string()))
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::float::deserialize(deserializer).map(Price)
    }
}
