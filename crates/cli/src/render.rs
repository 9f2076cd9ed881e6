//! Console rendering.
//!
//! Every function writes to a caller-supplied writer so the session can be
//! driven against an in-memory buffer in tests.

use std::io::{self, Write};

use bistro_core::chart::ChartBar;
use bistro_core::{Cart, Category, Menu, Money, Receipt, TipPolicy, Totals};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const RULE: &str = "------------------";
const BANNER: &str = "------------------------------------------";
const CHART_WIDTH: u32 = 40;

pub fn welcome(out: &mut impl Write, restaurant: &str) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{:^42}", format!("Welcome to {restaurant}!"))?;
    writeln!(out, "{BANNER}\n")?;
    writeln!(out, "Type 'help' to see available commands.\n")
}

/// Print the menu grouped by category, numbered across sections.
pub fn menu(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    writeln!(out, "\n------ MENU ------")?;
    let mut number = 0;
    for category in Category::ALL {
        let mut entries = menu.in_category(category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        writeln!(out, "{}", category.heading())?;
        for entry in entries {
            number += 1;
            writeln!(out, "{number}. {} - {}", entry.name, Money(entry.price))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "-----------------------")
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n COMMANDS:")?;
    writeln!(out, " show    - Display the menu again")?;
    writeln!(out, " cart    - Show your current order")?;
    writeln!(out, " remove  - Remove an item from your cart")?;
    writeln!(out, " done    - Checkout")?;
    writeln!(out, " history - List saved receipts")?;
    writeln!(out, " view X  - View saved receipt number X")?;
    writeln!(out, " chart   - Show spending graph")?;
    writeln!(out, " help    - Show commands")?;
    writeln!(out, " quit    - Exit")?;
    writeln!(out, "\nAnything else is treated as an item name to add to your cart.")
}

pub fn cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is currently empty.");
    }
    writeln!(out, "YOUR CART")?;
    for line in cart.lines() {
        writeln!(out, " - {} x{}", line.name(), line.quantity())?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total items: {}", cart.total_quantity())
}

/// Itemized bill printed before the tip prompt.
pub fn bill(out: &mut impl Write, at: NaiveDateTime, totals: &Totals) -> io::Result<()> {
    writeln!(out, "\nReceipt")?;
    writeln!(out, "Date: {}", at.format("%Y-%m-%d %H:%M:%S"))?;
    for line in &totals.lines {
        writeln!(
            out,
            " - {} (x{}) @ {} = {}",
            line.name,
            line.quantity,
            Money(line.unit_price),
            Money(line.line_total)
        )?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "Subtotal: {}", Money(totals.subtotal))?;
    writeln!(out, "Sales tax ({}): {}", totals.tax_rate, Money(totals.tax))
}

pub fn tip_options(out: &mut impl Write, tips: &TipPolicy) -> io::Result<()> {
    writeln!(out, "Choose tip option:")?;
    for (i, rate) in tips.options().iter().enumerate() {
        writeln!(out, " {}. {rate}", i + 1)?;
    }
    writeln!(out, " {}. Custom amount", tips.custom_option())
}

/// Tip and amount due, printed after the tip is chosen.
pub fn amount_due(out: &mut impl Write, tip: Decimal, total: Decimal) -> io::Result<()> {
    writeln!(out, "Tip: {}", Money(tip))?;
    writeln!(out, "TOTAL DUE: {}", Money(total))?;
    writeln!(out, "{RULE}")
}

/// One line per receipt: `N. <timestamp> - $total[ - server: name]`.
pub fn receipt_list(out: &mut impl Write, receipts: &[Receipt]) -> io::Result<()> {
    if receipts.is_empty() {
        return writeln!(out, "No saved receipts.");
    }
    for (i, receipt) in receipts.iter().enumerate() {
        write!(out, "{}. {} - {}", i + 1, receipt.timestamp(), Money(receipt.total()))?;
        match receipt.server() {
            Some(server) => writeln!(out, " - server: {server}")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

pub fn receipt_detail(out: &mut impl Write, receipt: &Receipt) -> io::Result<()> {
    writeln!(out, "Saved Receipt")?;
    writeln!(out, "Date: {}", receipt.timestamp())?;
    if let Some(server) = receipt.server() {
        writeln!(out, "Server: {server}")?;
    }
    for item in receipt.items() {
        write!(out, " - {} x{} @ {} = ", item.name, item.qty, Money(item.price))?;
        match item.line_total() {
            Some(line_total) => writeln!(out, "{}", Money(line_total))?,
            None => writeln!(out, "n/a")?,
        }
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "Subtotal: {}", Money(receipt.subtotal()))?;
    writeln!(out, "Tax: {}", Money(receipt.tax()))?;
    writeln!(out, "Tip: {}", Money(receipt.tip()))?;
    writeln!(out, "TOTAL: {}", Money(receipt.total()))?;
    writeln!(out, "{RULE}")
}

/// Horizontal bar chart of receipt totals, scaled to the largest total.
pub fn spending_chart(out: &mut impl Write, bars: &[ChartBar]) -> io::Result<()> {
    if bars.is_empty() {
        return writeln!(out, "No receipts available to chart.");
    }

    let max = bars
        .iter()
        .map(|b| b.total)
        .max()
        .unwrap_or_default()
        .max(Decimal::ZERO);
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

    writeln!(out, "\nTotal Spending per Receipt")?;
    writeln!(out, "{RULE}")?;
    for bar in bars {
        let width = bar_width(bar.total, max);
        writeln!(
            out,
            "{:<label_width$} | {} {}",
            bar.label,
            "#".repeat(width),
            Money(bar.total)
        )?;
    }
    writeln!(out, "{RULE}")
}

/// Number of `#` cells for `value` when `max` fills the chart width.
fn bar_width(value: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    (value / max * Decimal::from(CHART_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
}
