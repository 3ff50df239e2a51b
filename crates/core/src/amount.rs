//! Deposit/withdrawal amounts.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// A strictly positive, finite money amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// The input could not be turned into an [`Amount`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("amount must be a positive finite number")]
pub struct InvalidAmount;

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, InvalidAmount> {
        if value.is_sign_positive() && !value.is_zero() {
            Ok(Self(value))
        } else {
            Err(InvalidAmount)
        }
    }

    /// Convert a float through its shortest decimal text, so `0.1` is exactly `0.1`.
    ///
    /// Only values `Decimal` can hold are accepted: magnitudes above
    /// `Decimal::MAX` (about 7.9e28) fail to parse, and anything finer than
    /// 28 decimal places (e.g. `1e-30`) rounds to zero and is rejected as
    /// non-positive.
    pub fn from_f64(value: f64) -> Result<Self, InvalidAmount> {
        if !value.is_finite() {
            return Err(InvalidAmount);
        }
        let decimal = Decimal::from_str(&value.to_string()).map_err(|_| InvalidAmount)?;
        Self::new(decimal)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Anything the registry accepts as a deposit/withdrawal amount.
///
/// Conversion happens after the account lookup, so an unknown account is
/// reported before a bad amount.
pub trait AmountInput {
    fn into_amount(self) -> Result<Amount, InvalidAmount>;
}

impl AmountInput for Amount {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        Ok(self)
    }
}

impl AmountInput for Decimal {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        Amount::new(self)
    }
}

impl AmountInput for f64 {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        Amount::from_f64(self)
    }
}

impl AmountInput for i64 {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        Amount::new(Decimal::from(self))
    }
}

/// Only JSON numbers are amounts; strings, booleans, null and containers are not.
impl AmountInput for &serde_json::Value {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        match self {
            serde_json::Value::Number(n) => n.as_f64().ok_or(InvalidAmount)?.into_amount(),
            _ => Err(InvalidAmount),
        }
    }
}

impl<T: AmountInput> AmountInput for Option<T> {
    fn into_amount(self) -> Result<Amount, InvalidAmount> {
        self.ok_or(InvalidAmount)?.into_amount()
    }
}
