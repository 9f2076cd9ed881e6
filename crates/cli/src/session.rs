//! The interactive ordering session.
//!
//! A [`Session`] owns everything a run of the program touches: the menu, the
//! cart, the receipt history and the console. Input is read line by line
//! from any [`BufRead`] and output goes to any [`Write`], which is how the
//! integration tests drive it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bistro_core::{Cart, Menu, Rate, TipPolicy};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::command::Command;
use crate::render;
use crate::store::ReceiptStore;

/// Settings the session is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Restaurant name used in greetings.
    pub restaurant: String,
    /// Sales tax applied at checkout.
    pub tax_rate: Rate,
    /// Tip percentages offered at checkout.
    pub tips: TipPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restaurant: "The Bistro".to_owned(),
            tax_rate: Rate::default_tax(),
            tips: TipPolicy::default(),
        }
    }
}

/// Whether the command loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Source of checkout timestamps.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A running ordering session.
pub struct Session<R, W> {
    pub(crate) config: SessionConfig,
    pub(crate) menu: Menu,
    pub(crate) cart: Cart,
    pub(crate) store: ReceiptStore,
    pub(crate) input: R,
    pub(crate) out: W,
    pub(crate) clock: Clock,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session around an already loaded receipt history.
    pub fn new(config: SessionConfig, menu: Menu, store: ReceiptStore, input: R, out: W) -> Self {
        Self {
            config,
            menu,
            cart: Cart::new(),
            store,
            input,
            out,
            clock: local_now,
        }
    }

    /// Create a session, loading the receipt history from `store_path`.
    ///
    /// An unreadable or corrupt history is replaced by an empty one and a
    /// warning is printed; a missing file is silently treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if the warning cannot be written to `out`.
    pub fn open(
        config: SessionConfig,
        menu: Menu,
        store_path: &Path,
        input: R,
        mut out: W,
    ) -> io::Result<Self> {
        let store = match ReceiptStore::load(store_path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "Could not load receipts, starting with an empty history");
                writeln!(out, "Warning: could not read saved receipts; starting fresh.")?;
                ReceiptStore::empty(store_path)
            }
        };
        Ok(Self::new(config, menu, store, input, out))
    }

    /// Replace the clock used to timestamp receipts.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Print the greeting, then read and handle commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        render::welcome(&mut self.out, &self.config.restaurant)?;
        render::menu(&mut self.out, &self.menu)?;
        render::help(&mut self.out)?;

        loop {
            let Some(line) = self.prompt("\nEnter command or item name: ")? else {
                debug!("End of input, closing session");
                writeln!(self.out)?;
                self.handle(Command::Quit)?;
                break;
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if self.handle(command)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()
    }

    /// Handle one parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn handle(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "Handling command");
        match command {
            Command::Help => render::help(&mut self.out)?,
            Command::ShowMenu => render::menu(&mut self.out, &self.menu)?,
            Command::Cart => render::cart(&mut self.out, &self.cart)?,
            Command::Remove => self.remove_item()?,
            Command::Checkout => self.checkout()?,
            Command::History => render::receipt_list(&mut self.out, self.store.receipts())?,
            Command::View(number) => self.view_receipt(number)?,
            Command::ViewUsage => writeln!(self.out, "Usage: view X")?,
            Command::Chart => self.show_chart()?,
            Command::Add(name) => self.add_item(&name)?,
            Command::Quit => {
                writeln!(self.out, "Thank you for visiting {}!", self.config.restaurant)?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `text` and read one trimmed line. `None` means end of input.
    pub(crate) fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn store(&self) -> &ReceiptStore {
        &self.store
    }

    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Everything written so far.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }
}
