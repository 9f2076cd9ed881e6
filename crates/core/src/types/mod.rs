//! Core types for the Bistro.
//!
//! This module provides the menu, cart, pricing and receipt types that the
//! ordering session is built from.

pub mod cart;
pub mod menu;
pub mod money;
pub mod rate;
pub mod receipt;
pub mod tip;
pub mod totals;

pub use cart::{Cart, CartError, CartLine, Removal};
pub use menu::{Category, Menu, MenuEntry, MenuError};
pub use money::{Money, round_cents};
pub use rate::{Rate, RateError};
pub use receipt::{Receipt, ReceiptItem, TIMESTAMP_FORMAT};
pub use tip::{TipChoice, TipError, TipPolicy};
pub use totals::{LineTotal, PricingError, Totals};
