//! Contact Book - Main entry point
//!
//! Reads commands from stdin and prints replies to stdout. Logs go to
//! stderr so they never mix with command output.

use anyhow::Result;
use contact_book::{AddressBook, Config, Shell};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded, default book file: {}", config.book_file.display());

    let mut book = AddressBook::new();
    if config.autoload && config.book_file.exists() {
        match book.load(&config.book_file) {
            Ok(()) => info!("Autoloaded {} contacts", book.len()),
            Err(e) => warn!("Autoload from {} failed: {}", config.book_file.display(), e),
        }
    }

    let mut shell = Shell::new(book, &config);
    let stdin = io::stdin();
    if let Err(e) = shell.run(stdin.lock(), io::stdout()) {
        error!("Command loop aborted: {}", e);
        return Err(e.into());
    }

    info!("Contact book session ended");
    Ok(())
}
