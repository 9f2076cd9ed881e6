//! Tip selection.
//!
//! The customer picks one of the configured percentages by its 1-based
//! number, picks the option after the last percentage to enter an amount,
//! or enters nothing to skip the tip.

use core::str::FromStr;

use rust_decimal::Decimal;

use super::money::round_cents;
use super::rate::Rate;

/// Errors that can occur while choosing a tip.
///
/// The checkout flow treats every variant as "no tip" and carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TipError {
    /// The option number is not an integer.
    #[error("tip option must be a number, got {0:?}")]
    NotANumber(String),
    /// The option number is not listed.
    #[error("tip option {choice} is not between 1 and {max}")]
    OutOfRange {
        /// The option entered.
        choice: usize,
        /// Highest valid option.
        max: usize,
    },
    /// The custom amount is not a decimal number.
    #[error("custom tip must be an amount like 3.50, got {0:?}")]
    InvalidAmount(String),
    /// The custom amount is below zero.
    #[error("custom tip cannot be negative")]
    NegativeAmount,
    /// The tip pushes the total past what can be represented.
    #[error("tip is too large")]
    TooLarge,
}

/// What the customer picked from the tip menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipChoice {
    /// Empty input.
    Skip,
    /// One of the listed percentages.
    Percent(Rate),
    /// The customer will type an amount.
    Custom,
}

impl TipChoice {
    /// Tip amount for choices that need no further input.
    ///
    /// Percentages are rounded to cents. Returns `None` for [`TipChoice::Custom`].
    #[must_use]
    pub fn amount(self, subtotal: Decimal) -> Option<Decimal> {
        match self {
            Self::Skip => Some(Decimal::ZERO),
            Self::Percent(rate) => Some(round_cents(rate.apply(subtotal))),
            Self::Custom => None,
        }
    }
}

/// The list of tip percentages offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPolicy {
    options: Vec<Rate>,
}

impl TipPolicy {
    #[must_use]
    pub const fn new(options: Vec<Rate>) -> Self {
        Self { options }
    }

    /// Percentages in the order they are offered.
    #[must_use]
    pub fn options(&self) -> &[Rate] {
        &self.options
    }

    /// Option number that selects a custom amount (one past the last percentage).
    #[must_use]
    pub fn custom_option(&self) -> usize {
        self.options.len() + 1
    }

    /// Interpret the customer's answer to the tip menu.
    ///
    /// # Errors
    ///
    /// Returns [`TipError::NotANumber`] or [`TipError::OutOfRange`] for
    /// anything other than blank input or a listed option number.
    pub fn parse_choice(&self, input: &str) -> Result<TipChoice, TipError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(TipChoice::Skip);
        }

        let choice: usize = input
            .parse()
            .map_err(|_| TipError::NotANumber(input.to_owned()))?;

        if choice == self.custom_option() {
            return Ok(TipChoice::Custom);
        }

        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|rate| TipChoice::Percent(*rate))
            .ok_or(TipError::OutOfRange {
                choice,
                max: self.custom_option(),
            })
    }

    /// Parse a custom tip amount exactly as entered. The amount is not rounded.
    ///
    /// # Errors
    ///
    /// Returns [`TipError::InvalidAmount`] if the input is not a decimal number,
    /// or [`TipError::NegativeAmount`] if it is below zero.
    pub fn parse_custom_amount(input: &str) -> Result<Decimal, TipError> {
        let input = input.trim();
        let amount = Decimal::from_str(input)
            .or_else(|_| Decimal::from_scientific(input))
            .map_err(|_| TipError::InvalidAmount(input.to_owned()))?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(TipError::NegativeAmount);
        }
        Ok(amount)
    }
}

impl Default for TipPolicy {
    fn default() -> Self {
        Self::new(
            [10, 15, 20]
                .into_iter()
                .map(|pct| Rate::from_fraction(Decimal::new(pct, 2)))
                .collect(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let policy = TipPolicy::default();
        let labels: Vec<String> = policy.options().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["10%", "15%", "20%"]);
        assert_eq!(policy.custom_option(), 4);
    }

    #[test]
    fn test_blank_skips() {
        let policy = TipPolicy::default();
        assert_eq!(policy.parse_choice(""), Ok(TipChoice::Skip));
        assert_eq!(policy.parse_choice("   "), Ok(TipChoice::Skip));
        assert_eq!(TipChoice::Skip.amount(Decimal::TEN), Some(Decimal::ZERO));
    }

    #[test]
    fn test_percent_is_rounded_to_cents() {
        let policy = TipPolicy::default();
        let choice = policy.parse_choice("1").unwrap();
        assert_eq!(choice, TipChoice::Percent("0.10".parse().unwrap()));
        assert_eq!(choice.amount(Decimal::new(1798, 2)), Some(Decimal::new(180, 2)));

        let choice = policy.parse_choice(" 2 ").unwrap();
        assert_eq!(choice.amount(Decimal::new(1798, 2)), Some(Decimal::new(270, 2)));
    }

    #[test]
    fn test_custom_option() {
        let policy = TipPolicy::default();
        assert_eq!(policy.parse_choice("4"), Ok(TipChoice::Custom));
        assert_eq!(TipChoice::Custom.amount(Decimal::TEN), None);
    }

    #[test]
    fn test_out_of_range() {
        let policy = TipPolicy::default();
        assert_eq!(
            policy.parse_choice("0"),
            Err(TipError::OutOfRange { choice: 0, max: 4 })
        );
        assert_eq!(
            policy.parse_choice("5"),
            Err(TipError::OutOfRange { choice: 5, max: 4 })
        );
    }

    #[test]
    fn test_not_a_number() {
        let policy = TipPolicy::default();
        assert!(matches!(policy.parse_choice("ten"), Err(TipError::NotANumber(_))));
        assert!(matches!(policy.parse_choice("-1"), Err(TipError::NotANumber(_))));
        assert!(matches!(policy.parse_choice("1.5"), Err(TipError::NotANumber(_))));
    }

    #[test]
    fn test_custom_amount_is_not_rounded() {
        assert_eq!(TipPolicy::parse_custom_amount("3.50"), Ok(Decimal::new(350, 2)));
        assert_eq!(TipPolicy::parse_custom_amount("2.345"), Ok(Decimal::new(2345, 3)));
        assert_eq!(TipPolicy::parse_custom_amount(" 5 "), Ok(Decimal::new(5, 0)));
    }

    #[test]
    fn test_custom_amount_invalid() {
        assert!(matches!(
            TipPolicy::parse_custom_amount("lots"),
            Err(TipError::InvalidAmount(_))
        ));
        assert!(matches!(
            TipPolicy::parse_custom_amount(""),
            Err(TipError::InvalidAmount(_))
        ));
        assert_eq!(
            TipPolicy::parse_custom_amount("-1"),
            Err(TipError::NegativeAmount)
        );
    }

    #[test]
    fn test_empty_policy_only_offers_custom() {
        let policy = TipPolicy::new(Vec::new());
        assert_eq!(policy.parse_choice("1"), Ok(TipChoice::Custom));
        assert!(policy.parse_choice("2").is_err());
    }
}
