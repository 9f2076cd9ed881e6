//! Checkout: price the cart, take a tip, record the receipt.

use std::io::{self, BufRead, Write};

use bistro_core::{PricingError, Receipt, TipError, TipPolicy, Totals};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::render;
use crate::session::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Turn the cart into a saved receipt.
    ///
    /// The cart is cleared once the receipt is recorded, even if writing the
    /// history file fails; the receipt then lives only in memory for the rest
    /// of the session.
    pub(crate) fn checkout(&mut self) -> io::Result<()> {
        if self.cart.is_empty() {
            return writeln!(self.out, "Nothing to checkout.");
        }

        let totals = match Totals::compute(&self.cart, &self.menu, self.config.tax_rate) {
            Ok(totals) => totals,
            Err(e) => return self.pricing_failed(&e),
        };

        let at = (self.clock)();
        render::bill(&mut self.out, at, &totals)?;

        let tip = self.choose_tip(&totals)?;
        let total = match totals.total_with_tip(tip) {
            Ok(total) => total,
            Err(e) => return self.pricing_failed(&e),
        };
        render::amount_due(&mut self.out, tip, total)?;

        let server = self
            .prompt("Enter server name (optional): ")?
            .unwrap_or_default();
        writeln!(self.out, "Thank you for dining at {}!", self.config.restaurant)?;

        let receipt = match Receipt::from_checkout(&totals, tip, &server, at) {
            Ok(receipt) => receipt,
            Err(e) => return self.pricing_failed(&e),
        };
        info!(
            items = receipt.items().len(),
            subtotal = %receipt.subtotal(),
            tip = %receipt.tip(),
            total = %receipt.total(),
            "Checkout complete"
        );

        self.store.push(receipt);
        if let Err(e) = self.store.save() {
            error!(error = %e, "Receipt kept in memory only");
            writeln!(self.out, "Error: failed to save receipts to disk.")?;
        }
        self.cart.clear();
        Ok(())
    }

    /// Report a cart that cannot be priced. The cart is left as it was.
    fn pricing_failed(&mut self, e: &PricingError) -> io::Result<()> {
        error!(error = %e, "Cart could not be priced");
        writeln!(self.out, "Error: {e}")
    }

    /// Ask for a tip. Invalid answers, and tips too large to add to the
    /// bill, mean no tip.
    fn choose_tip(&mut self, totals: &Totals) -> io::Result<Decimal> {
        render::tip_options(&mut self.out, &self.config.tips)?;
        let question = format!(
            "Select 1-{} (enter to skip tip): ",
            self.config.tips.custom_option()
        );
        let answer = self.prompt(&question)?.unwrap_or_default();

        let tip = match self.config.tips.parse_choice(&answer) {
            Ok(choice) => match choice.amount(totals.subtotal) {
                Some(amount) => Ok(amount),
                None => {
                    let raw = self
                        .prompt("Enter custom tip amount (e.g. 3.50): ")?
                        .unwrap_or_default();
                    TipPolicy::parse_custom_amount(&raw)
                }
            },
            Err(e) => Err(e),
        }
        .and_then(|amount| {
            totals
                .total_with_tip(amount)
                .map(|_| amount)
                .map_err(|_| TipError::TooLarge)
        });

        match tip {
            Ok(amount) => Ok(amount),
            Err(e) => {
                warn!(error = %e, "Invalid tip choice");
                writeln!(self.out, "Invalid tip choice; no tip will be added.")?;
                Ok(Decimal::ZERO)
            }
        }
    }
}
