//! Bistro configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BISTRO_RECEIPT_STORE` - Receipt history file (default: receipts.json)
//! - `BISTRO_MENU_FILE` - YAML menu replacing the house menu
//! - `BISTRO_TAX_RATE` - Sales tax as a fraction (default: 0.08)
//! - `BISTRO_TIP_OPTIONS` - Comma-separated tip fractions (default: 0.10,0.15,0.20)
//! - `BISTRO_NAME` - Restaurant name used in greetings (default: The Bistro)
//!
//! Command-line flags take precedence over the environment.

use std::path::PathBuf;

use bistro_core::{Rate, TipPolicy};
use thiserror::Error;

use crate::session::SessionConfig;

const DEFAULT_RECEIPT_STORE: &str = "receipts.json";
const DEFAULT_TAX_RATE: &str = "0.08";
const DEFAULT_TIP_OPTIONS: &str = "0.10,0.15,0.20";
const DEFAULT_NAME: &str = "The Bistro";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Bistro application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BistroConfig {
    /// Receipt history file, rewritten after every checkout
    pub receipt_store: PathBuf,
    /// Optional YAML menu file
    pub menu_file: Option<PathBuf>,
    /// Sales tax applied to every order
    pub tax_rate: Rate,
    /// Tip percentages offered at checkout, in order
    pub tip_options: Vec<Rate>,
    /// Restaurant name used in greetings
    pub restaurant: String,
}

impl BistroConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let receipt_store = PathBuf::from(get_or_default("BISTRO_RECEIPT_STORE", DEFAULT_RECEIPT_STORE));
        let menu_file = lookup("BISTRO_MENU_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let tax_rate = parse_rate("BISTRO_TAX_RATE", &get_or_default("BISTRO_TAX_RATE", DEFAULT_TAX_RATE))?;
        let tip_options = parse_tip_options(
            "BISTRO_TIP_OPTIONS",
            &get_or_default("BISTRO_TIP_OPTIONS", DEFAULT_TIP_OPTIONS),
        )?;
        let restaurant = lookup("BISTRO_NAME")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_owned());

        Ok(Self {
            receipt_store,
            menu_file,
            tax_rate,
            tip_options,
            restaurant,
        })
    }

    /// The parts of the configuration the ordering session needs.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            restaurant: self.restaurant.clone(),
            tax_rate: self.tax_rate,
            tips: TipPolicy::new(self.tip_options.clone()),
        }
    }
}

impl Default for BistroConfig {
    fn default() -> Self {
        Self {
            receipt_store: PathBuf::from(DEFAULT_RECEIPT_STORE),
            menu_file: None,
            tax_rate: Rate::default_tax(),
            tip_options: TipPolicy::default().options().to_vec(),
            restaurant: DEFAULT_NAME.to_owned(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a single rate, naming the variable in the error.
fn parse_rate(key: &str, value: &str) -> Result<Rate, ConfigError> {
    value
        .parse::<Rate>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a comma-separated list of tip rates.
fn parse_tip_options(key: &str, value: &str) -> Result<Vec<Rate>, ConfigError> {
    let options = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_rate(key, part))
        .collect::<Result<Vec<_>, _>>()?;

    if options.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must list at least one tip rate".to_string(),
        ));
    }
    Ok(options)
}
