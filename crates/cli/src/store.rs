//! Receipt history file.
//!
//! The whole history is read once when the session starts and rewritten in
//! full after every checkout. There is no locking; one session owns the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bistro_core::Receipt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors reading or writing the receipt file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of receipts.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The receipts could not be encoded.
    #[error("Failed to encode receipts: {0}")]
    Encode(#[source] serde_json::Error),

    /// The file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Receipt history backed by a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptStore {
    path: PathBuf,
    receipts: Vec<Receipt>,
}

impl ReceiptStore {
    /// An empty history that will be written to `path` on the next save.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            receipts: Vec::new(),
        }
    }

    /// Read the history from `path`.
    ///
    /// A missing file is not an error and yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file exists but cannot be read, or
    /// [`StoreError::Parse`] if its content is not a receipt array.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No receipt file yet, starting empty");
                return Ok(Self::empty(path));
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let receipts: Vec<Receipt> = match serde_json::from_str(&content) {
            Ok(receipts) => receipts,
            Err(source) => return Err(StoreError::Parse { path, source }),
        };

        for (i, receipt) in receipts.iter().enumerate() {
            if !receipt.is_consistent() {
                warn!(
                    receipt = i + 1,
                    stored_total = %receipt.total(),
                    computed_total = ?receipt.computed_total(),
                    "Receipt total does not match subtotal + tax + tip"
                );
            }
        }

        info!(path = %path.display(), count = receipts.len(), "Loaded receipts");
        Ok(Self { path, receipts })
    }

    /// Overwrite the file with the full history.
    ///
    /// Output is indented JSON with non-ASCII text kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the file cannot be written. The
    /// in-memory history is never modified by a failed save.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.receipts).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), count = self.receipts.len(), "Saved receipts");
        Ok(())
    }

    /// Append a receipt to the in-memory history. Call [`save`](Self::save) to persist it.
    pub fn push(&mut self, receipt: Receipt) {
        self.receipts.push(receipt);
    }

    /// Receipt at a 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Receipt> {
        self.receipts.get(index)
    }

    /// All receipts, oldest first.
    #[must_use]
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}
