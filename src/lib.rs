//! stockroom: interactive stock tracker for electronic components.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{JsonFileStore, TerminalConsole, TerminalOperator};
use app::{AppContext, config, session};

pub use app::commands::{FindOutcome, PruneOutcome, Resolution, StockChange, StockReport};
pub use domain::{AppError, Command, Component, StockOperation};

/// Run an interactive session against the inventory configured for the current directory.
pub fn run_interactive() -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let config = config::load_config(&root)?;
    let store = JsonFileStore::new(config::store_path(&root, &config));
    tracing::debug!(store = %store.path().display(), "starting session");

    let mut ctx = AppContext::new(store, TerminalOperator::new(), TerminalConsole::stdout());
    session::run(&mut ctx)
}
