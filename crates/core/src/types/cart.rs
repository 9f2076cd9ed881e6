//! The in-progress order.

use serde::{Deserialize, Serialize};

use super::menu::{Menu, MenuEntry, names_match};

/// Errors returned by cart mutations.
///
/// None of these are fatal; they describe why a request left the cart unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested item is not on the menu.
    #[error("{0:?} is not on the menu")]
    NotOnMenu(String),
    /// There is nothing in the cart to remove.
    #[error("the cart is empty")]
    Empty,
    /// The requested item is not in the cart.
    #[error("{0:?} is not in the cart")]
    NotInCart(String),
}

/// One item in the cart. The quantity is always at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    name: String,
    quantity: u32,
}

impl CartLine {
    /// Canonical (menu-cased) item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Outcome of removing one unit of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Canonical name of the item that was decremented.
    pub name: String,
    /// Units left in the cart; zero means the line was deleted.
    pub remaining: u32,
}

/// Items ordered so far, keyed by canonical menu name in the order first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `name`, matched case-insensitively against the menu.
    ///
    /// Returns the matched menu entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotOnMenu`] if no menu entry matches; the cart is
    /// left unchanged.
    pub fn add<'m>(&mut self, name: &str, menu: &'m Menu) -> Result<&'m MenuEntry, CartError> {
        let entry = menu
            .find(name)
            .ok_or_else(|| CartError::NotOnMenu(name.to_owned()))?;

        match self.lines.iter_mut().find(|l| l.name == entry.name) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                name: entry.name.clone(),
                quantity: 1,
            }),
        }

        Ok(entry)
    }

    /// Remove one unit of `name`, matched case-insensitively against the cart.
    ///
    /// The line is deleted when its quantity reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] if the cart has no items, or
    /// [`CartError::NotInCart`] if no line matches. The cart is unchanged in
    /// both cases.
    pub fn remove(&mut self, name: &str) -> Result<Removal, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| names_match(&l.name, name))
            .ok_or_else(|| CartError::NotInCart(name.to_owned()))?;

        line.quantity = line.quantity.saturating_sub(1);
        let removal = Removal {
            name: line.name.clone(),
            remaining: line.quantity,
        };

        if removal.remaining == 0 {
            self.lines.retain(|l| l.quantity > 0);
        }

        Ok(removal)
    }

    /// Quantity of an item, matched case-insensitively. Zero if absent.
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| names_match(&l.name, name))
            .map_or(0, CartLine::quantity)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the cart after checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
