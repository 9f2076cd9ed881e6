//! Integration tests for the Bistro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - cart to receipt, including failed saves
//! - `receipt_history` - history, view, chart and the receipt file
//! - `command_loop` - malformed input and end of input
//!
//! Each test drives a [`Session`] with a scripted input against a receipt
//! file in a temporary directory.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use bistro_cli::{Session, SessionConfig};
use bistro_core::Menu;
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

/// Session type used by every test: scripted input, captured output.
pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Fixed checkout time so receipts are reproducible.
#[must_use]
pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(19, 30, 0))
        .unwrap_or_default()
}

/// A temporary directory holding the receipt file under test.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of the receipt file (it may not exist yet).
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("receipts.json")
    }

    /// The temporary directory itself; usable as a store path that can
    /// never be read or written as a file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Run a full session over `script` against the receipt file at `store`.
    ///
    /// # Panics
    ///
    /// Panics if writing to the in-memory output fails.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn run_at(&self, store: &Path, script: &str) -> ScriptedSession {
        let mut session = Session::open(
            SessionConfig::default(),
            Menu::bistro(),
            store,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
        .expect("open session")
        .with_clock(fixed_clock);
        session.run().expect("run session");
        session
    }

    /// Run a full session over `script` against [`store_path`](Self::store_path).
    #[must_use]
    pub fn run(&self, script: &str) -> ScriptedSession {
        self.run_at(&self.store_path(), script)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the session printed.
#[must_use]
pub fn transcript(session: &ScriptedSession) -> String {
    String::from_utf8_lossy(session.output()).into_owned()
}
