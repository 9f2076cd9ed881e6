//! Receipt history commands.

use std::io::{self, BufRead, Write};

use bistro_core::chart::spending_series;

use crate::render;
use crate::session::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Show a saved receipt by its 1-based number from `history`.
    pub(crate) fn view_receipt(&mut self, number: usize) -> io::Result<()> {
        match number.checked_sub(1).and_then(|i| self.store.get(i)) {
            Some(receipt) => render::receipt_detail(&mut self.out, receipt),
            None => writeln!(self.out, "Receipt number not found."),
        }
    }

    pub(crate) fn show_chart(&mut self) -> io::Result<()> {
        let bars = spending_series(self.store.receipts());
        render::spending_chart(&mut self.out, &bars)
    }
}
