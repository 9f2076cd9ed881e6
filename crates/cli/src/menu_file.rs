//! Loading a menu from a YAML file.
//!
//! # Format
//!
//! ```yaml
//! - name: Pepperoni Pizza
//!   price: "8.99"
//!   category: food
//! - name: Coffee
//!   price: 2.99
//!   category: drink
//! ```
//!
//! `category` defaults to `food`. Prices are read as exact decimals, quoted or not.

use std::path::{Path, PathBuf};

use bistro_core::{Menu, MenuEntry, MenuError};
use thiserror::Error;
use tracing::info;

/// Errors loading a menu file.
#[derive(Debug, Error)]
pub enum MenuFileError {
    #[error("Failed to read menu file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse menu file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid menu in {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: MenuError,
    },
}

/// Read and validate a menu file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a list of menu
/// entries, or fails menu validation (duplicates, negative prices).
pub fn load_menu(path: &Path) -> Result<Menu, MenuFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| MenuFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let menu = parse_menu(&content).map_err(|e| match e {
        ParseMenuError::Yaml(source) => MenuFileError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseMenuError::Menu(source) => MenuFileError::Invalid {
            path: path.to_path_buf(),
            source,
        },
    })?;

    info!(path = %path.display(), items = menu.len(), "Loaded menu file");
    Ok(menu)
}

enum ParseMenuError {
    Yaml(serde_yaml::Error),
    Menu(MenuError),
}

fn parse_menu(yaml: &str) -> Result<Menu, ParseMenuError> {
    let entries: Vec<MenuEntry> = serde_yaml::from_str(yaml).map_err(ParseMenuError::Yaml)?;
    Menu::new(entries).map_err(ParseMenuError::Menu)
}
