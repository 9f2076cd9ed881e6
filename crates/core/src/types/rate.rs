//! Percentage rates used for sales tax and tip options.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Rate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The input is not a decimal number.
    #[error("rate must be a decimal fraction (e.g. 0.08), got {0:?}")]
    NotADecimal(String),
    /// The rate is below zero.
    #[error("rate cannot be negative")]
    Negative,
    /// The rate is above 100%.
    #[error("rate cannot exceed 1 (100%)")]
    AboveOne,
}

/// A rate expressed as a fraction, so `0.08` is 8%.
///
/// ## Constraints
///
/// - `0 <= rate <= 1`
///
/// ## Examples
///
/// ```
/// use bistro_core::Rate;
/// use rust_decimal::Decimal;
///
/// let tax: Rate = "0.08".parse().unwrap();
/// assert_eq!(tax.to_string(), "8%");
/// assert_eq!(tax.apply(Decimal::new(1798, 2)), Decimal::new(14384, 4));
///
/// assert!("1.5".parse::<Rate>().is_err());
/// assert!("-0.1".parse::<Rate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Create a rate from a fraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is negative or greater than one.
    pub fn new(fraction: Decimal) -> Result<Self, RateError> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(RateError::Negative);
        }
        if fraction > Decimal::ONE {
            return Err(RateError::AboveOne);
        }
        Ok(Self(fraction))
    }

    /// Wrap a fraction already known to be within `0..=1`.
    pub(crate) const fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// Sales tax charged on every order unless configured otherwise.
    #[must_use]
    pub fn default_tax() -> Self {
        Self::from_fraction(Decimal::new(8, 2))
    }

    /// The rate as a fraction (`0.08`).
    #[must_use]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// The rate as a percentage without trailing zeros (`8`, `12.5`).
    #[must_use]
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Multiply an amount by this rate. The result is not rounded.
    #[must_use]
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for Rate {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let fraction =
            Decimal::from_str(trimmed).map_err(|_| RateError::NotADecimal(trimmed.to_owned()))?;
        Self::new(fraction)
    }
}
