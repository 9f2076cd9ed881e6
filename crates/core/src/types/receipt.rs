//! Completed checkouts.
//!
//! A [`Receipt`] is built once at checkout and never changes afterwards. The
//! serialized field names match the receipt file format:
//!
//! ```json
//! {
//!   "timestamp": "2026-10-19T12:30:00.000000",
//!   "server": "Sam",
//!   "items": [{ "name": "Pepperoni Pizza", "qty": 2, "price": 8.99 }],
//!   "subtotal": 17.98,
//!   "tax": 1.4384,
//!   "tip": 1.80,
//!   "total": 21.2184
//! }
//! ```
//!
//! Every field has a default so records missing fields still load.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_cents;
use super::totals::{PricingError, Totals};

/// ISO-8601 layout used for receipt timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

fn unknown_timestamp() -> String {
    "unknown".to_owned()
}

/// One itemized line on a receipt, copied from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qty: u32,
    /// Unit price at the time of checkout.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl ReceiptItem {
    /// `price * qty`, or `None` if it does not fit in a decimal.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.qty))
    }
}

/// A completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default = "unknown_timestamp")]
    timestamp: String,
    #[serde(default)]
    server: String,
    #[serde(default)]
    items: Vec<ReceiptItem>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    subtotal: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    tax: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    tip: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    total: Decimal,
}

impl Receipt {
    /// Assemble a receipt from priced cart totals.
    ///
    /// The total is always `subtotal + tax + tip`. A blank server name is
    /// stored as an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit in a decimal.
    pub fn from_checkout(
        totals: &Totals,
        tip: Decimal,
        server: &str,
        at: NaiveDateTime,
    ) -> Result<Self, PricingError> {
        let total = totals.total_with_tip(tip)?;
        Ok(Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            server: server.trim().to_owned(),
            items: totals
                .lines
                .iter()
                .map(|line| ReceiptItem {
                    name: line.name.clone(),
                    qty: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            tip,
            total,
        })
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Server name, if one was given.
    #[must_use]
    pub fn server(&self) -> Option<&str> {
        Some(self.server.as_str()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    #[must_use]
    pub const fn tax(&self) -> Decimal {
        self.tax
    }

    #[must_use]
    pub const fn tip(&self) -> Decimal {
        self.tip
    }

    /// Total as stored on the receipt.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// `subtotal + tax + tip`, recomputed from the components.
    ///
    /// `None` if the components add up past the decimal range.
    #[must_use]
    pub fn computed_total(&self) -> Option<Decimal> {
        self.subtotal
            .checked_add(self.tax)
            .and_then(|sum| sum.checked_add(self.tip))
    }

    /// Whether the stored total matches its components to the cent.
    ///
    /// Receipts written by other tools may carry binary floating point noise,
    /// so the comparison is made on rounded values.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.computed_total()
            .is_some_and(|computed| round_cents(self.total) == round_cents(computed))
    }
}
