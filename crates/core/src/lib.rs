//! Bistro Core - Ordering domain types.
//!
//! This crate provides the types behind the Bistro ordering session:
//! - the menu and the cart built from it
//! - totals, sales tax and tip selection
//! - receipts and the spending series charted from them
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! console prompts, no file access. The `bistro-cli` crate owns all of that.
//!
//! # Modules
//!
//! - [`types`] - Menu, cart, rates, totals, tips and receipts
//! - [`chart`] - Per-receipt totals for the spending chart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chart;
pub mod types;

pub use types::*;
