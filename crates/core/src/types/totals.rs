//! Order totals.
//!
//! Subtotal and tax are kept at full precision. Nothing here rounds; see
//! [`round_cents`](super::money::round_cents) for where rounding happens.

use rust_decimal::Decimal;

use super::cart::Cart;
use super::menu::Menu;
use super::rate::Rate;

/// Errors that can occur while pricing a cart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A cart line names an item the menu does not list.
    #[error("no menu price for {0:?}")]
    UnknownItem(String),
    /// An amount does not fit in a decimal.
    #[error("amount is too large to price")]
    Overflow,
}

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTotal {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// `quantity * unit_price`
    pub line_total: Decimal,
}

/// Subtotal, tax and itemization for a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Priced lines in cart order.
    pub lines: Vec<LineTotal>,
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate`, unrounded.
    pub tax: Decimal,
    /// Rate the tax was computed with.
    pub tax_rate: Rate,
}

impl Totals {
    /// Price every cart line against the menu and apply sales tax.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownItem`] if a cart line is not on the menu.
    pub fn compute(cart: &Cart, menu: &Menu, tax_rate: Rate) -> Result<Self, PricingError> {
        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                let unit_price = menu
                    .price_of(line.name())
                    .ok_or_else(|| PricingError::UnknownItem(line.name().to_owned()))?;
                let line_total = unit_price
                    .checked_mul(Decimal::from(line.quantity()))
                    .ok_or(PricingError::Overflow)?;
                Ok(LineTotal {
                    name: line.name().to_owned(),
                    quantity: line.quantity(),
                    unit_price,
                    line_total,
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        let subtotal = lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, l| sum.checked_add(l.line_total))
            .ok_or(PricingError::Overflow)?;
        let tax = tax_rate.apply(subtotal);

        Ok(Self {
            lines,
            subtotal,
            tax,
            tax_rate,
        })
    }

    /// Amount due once a tip is added: `subtotal + tax + tip`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the sum does not fit in a decimal.
    pub fn total_with_tip(&self, tip: Decimal) -> Result<Decimal, PricingError> {
        self.subtotal
            .checked_add(self.tax)
            .and_then(|sum| sum.checked_add(tip))
            .ok_or(PricingError::Overflow)
    }
}
