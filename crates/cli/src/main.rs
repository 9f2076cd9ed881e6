//! Bistro - order from the menu, check out, and keep your receipts.
//!
//! # Usage
//!
//! ```bash
//! # Start a session with receipts in ./receipts.json
//! bistro
//!
//! # Keep receipts somewhere else
//! bistro --store ~/bistro/receipts.json
//!
//! # Serve a different menu
//! bistro --menu menu.yaml
//! ```
//!
//! See [`bistro_cli::config`] for the environment variables read at startup.
//! Set `RUST_LOG=bistro_cli=debug` to trace the session on stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use bistro_cli::{AppError, BistroConfig, Session, menu_file};
use bistro_core::Menu;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bistro")]
#[command(author, version, about = "Order from The Bistro and keep your receipts")]
struct Cli {
    /// Receipt history file (overrides `BISTRO_RECEIPT_STORE`)
    #[arg(short, long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// YAML menu file (overrides `BISTRO_MENU_FILE`)
    #[arg(short, long, value_name = "PATH")]
    menu: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so they never interleave with the session on stdout.
    // Defaults to warnings only if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bistro=warn,bistro_cli=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = BistroConfig::from_env()?;
    if let Some(store) = cli.store {
        config.receipt_store = store;
    }
    if let Some(menu) = cli.menu {
        config.menu_file = Some(menu);
    }
    tracing::debug!(?config, "Configuration loaded");

    let menu = match &config.menu_file {
        Some(path) => menu_file::load_menu(path)?,
        None => Menu::bistro(),
    };

    let mut session = Session::open(
        config.session_config(),
        menu,
        &config.receipt_store,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    session.run()?;
    Ok(())
}
