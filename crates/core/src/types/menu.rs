//! Menu reference data.
//!
//! The menu is immutable once built. Item identity is the name, compared
//! case-insensitively, so `"pepperoni pizza"` and `"Pepperoni Pizza"` refer
//! to the same entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Menu`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The menu has no entries.
    #[error("menu must contain at least one item")]
    Empty,
    /// An entry has a blank name.
    #[error("menu item names cannot be empty")]
    EmptyName,
    /// An entry has a negative price.
    #[error("menu item {0:?} has a negative price")]
    NegativePrice(String),
    /// Two entries share a name (ignoring case).
    #[error("menu item {0:?} is listed more than once")]
    Duplicate(String),
}

/// Section of the menu an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Food,
    Drink,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 2] = [Self::Food, Self::Drink];

    /// Section heading used when printing the menu.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Food => "FOOD MENU",
            Self::Drink => "DRINK MENU",
        }
    }
}

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub category: Category,
}

impl MenuEntry {
    /// Create a menu entry.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }
}

/// Case-insensitive item name comparison shared by the menu and the cart.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// The restaurant menu, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Build a menu from entries, validating names and prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a name is blank, a price is
    /// negative, or a name appears twice (ignoring case).
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuError> {
        if entries.is_empty() {
            return Err(MenuError::Empty);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(MenuError::EmptyName);
            }
            if entry.price.is_sign_negative() && !entry.price.is_zero() {
                return Err(MenuError::NegativePrice(entry.name.clone()));
            }
            if entries
                .iter()
                .take(i)
                .any(|earlier| names_match(&earlier.name, &entry.name))
            {
                return Err(MenuError::Duplicate(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The house menu served when no menu file is configured.
    #[must_use]
    pub fn bistro() -> Self {
        Self {
            entries: vec![
                MenuEntry::new("Chicken Alfredo Pasta", Decimal::new(799, 2), Category::Food),
                MenuEntry::new("Pepperoni Pizza", Decimal::new(899, 2), Category::Food),
                MenuEntry::new("Famous Salad", Decimal::new(699, 2), Category::Food),
                MenuEntry::new("Coffee", Decimal::new(299, 2), Category::Drink),
                MenuEntry::new("Tea", Decimal::new(399, 2), Category::Drink),
                MenuEntry::new("Juice", Decimal::new(399, 2), Category::Drink),
                MenuEntry::new("Soda", Decimal::new(299, 2), Category::Drink),
            ],
        }
    }

    /// Look up an entry by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| names_match(&e.name, name))
    }

    /// Price of an item, ignoring case.
    #[must_use]
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.find(name).map(|e| e.price)
    }

    /// All entries in listing order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entries listed under one category, in listing order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::bistro()
    }
}
