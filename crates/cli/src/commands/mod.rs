//! Command handlers for the ordering session.
//!
//! Each module extends [`Session`](crate::session::Session) with the
//! handlers for one group of commands.
//!
//! # Commands
//!
//! - `order` - adding and removing cart items
//! - `checkout` - pricing, tipping and recording a receipt
//! - `history` - viewing and charting saved receipts

mod checkout;
mod history;
mod order;
