//! Bistro CLI - Interactive restaurant ordering.
//!
//! This crate wires the `bistro-core` domain types to a console:
//! - [`session`] - the command loop and the state it owns
//! - [`commands`] - handlers for cart, checkout and history commands
//! - [`store`] - the JSON receipt history file
//! - [`render`] - everything printed to the console
//! - [`config`] - environment configuration
//! - [`menu_file`] - optional YAML menu
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use bistro_cli::session::{Session, SessionConfig};
//! use bistro_cli::store::ReceiptStore;
//! use bistro_core::Menu;
//!
//! let input = Cursor::new("coffee\ncart\nquit\n");
//! let mut session = Session::new(
//!     SessionConfig::default(),
//!     Menu::bistro(),
//!     ReceiptStore::empty("receipts.json"),
//!     input,
//!     Vec::new(),
//! );
//! session.run().unwrap();
//!
//! let transcript = String::from_utf8(session.output().clone()).unwrap();
//! assert!(transcript.contains("Coffee has been added to your cart."));
//! assert!(transcript.contains(" - Coffee x1"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu_file;
pub mod render;
pub mod session;
pub mod store;

pub use command::Command;
pub use config::BistroConfig;
pub use error::{AppError, Result};
pub use session::{Session, SessionConfig};
pub use store::{ReceiptStore, StoreError};
