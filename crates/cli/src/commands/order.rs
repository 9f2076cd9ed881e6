//! Cart commands.

use std::io::{self, BufRead, Write};

use bistro_core::CartError;
use tracing::debug;

use crate::session::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Add one unit of a menu item by name.
    pub(crate) fn add_item(&mut self, name: &str) -> io::Result<()> {
        match self.cart.add(name, &self.menu) {
            Ok(entry) => {
                debug!(item = %entry.name, "Added to cart");
                writeln!(self.out, "{} has been added to your cart.", entry.name)
            }
            Err(e) => {
                debug!(error = %e, "Item not added");
                writeln!(self.out, "Sorry, that item is not on the menu.")
            }
        }
    }

    /// Ask which item to remove and take one unit of it out of the cart.
    pub(crate) fn remove_item(&mut self) -> io::Result<()> {
        if self.cart.is_empty() {
            return writeln!(self.out, "Nothing to remove.");
        }

        let name = self
            .prompt("Enter the item to remove: ")?
            .unwrap_or_default();

        match self.cart.remove(&name) {
            Ok(removal) => {
                debug!(item = %removal.name, remaining = removal.remaining, "Removed from cart");
                writeln!(self.out, "{} has been removed from your cart.", removal.name)
            }
            Err(CartError::Empty) => writeln!(self.out, "Nothing to remove."),
            Err(e) => {
                debug!(error = %e, "Item not removed");
                writeln!(self.out, "Item not found in your cart.")
            }
        }
    }
}
