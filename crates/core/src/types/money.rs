//! Decimal money helpers.
//!
//! Amounts are carried as [`Decimal`] at full precision everywhere in the
//! domain. Rounding to cents happens in exactly two places: tip percentages
//! ([`round_cents`]) and display ([`Money`]).

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to two decimal places, halves away from zero.
///
/// ```
/// use bistro_core::round_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_cents(Decimal::new(1798, 3)), Decimal::new(180, 2));
/// assert_eq!(round_cents(Decimal::new(1125, 3)), Decimal::new(113, 2));
/// ```
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Display adapter for a dollar amount (e.g., `$1,234.56`).
///
/// The wrapped value is never modified; rounding only affects the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub Decimal);

impl Money {
    /// Wrap an amount for display.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = round_cents(self.0);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}${}.{cents}", group_thousands(whole))
    }
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
