//! Command handler modules for the actiontrack CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! Handlers that parse logs or open the database receive the resolved
//! configuration; `cfg` resolves it itself so it can report a broken one.

mod cfg;
mod hands;
mod import;
mod parse;
mod stats;

pub use cfg::handle_cfg_command;
pub use hands::handle_hands_command;
pub use import::handle_import_command;
pub use parse::handle_parse_command;
pub use stats::handle_stats_command;

use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ingest::{Ingested, ingest_path};
use crate::store::HandStore;
use crate::ui;
use actiontrack_engine::HandParser;
use std::io::Write;
use std::path::Path;

/// Parses `input` as the configured Hero and reports skipped files and blocks.
fn load_logs(
    cfg: &ConfigResolved,
    input: &str,
    err: &mut dyn Write,
) -> Result<Ingested, CliError> {
    let parser = HandParser::new(&cfg.config.hero)?;
    let ingested = ingest_path(&parser, input)?;
    for failure in &ingested.failures {
        ui::display_warning(err, &format!("Skipped {}", failure))?;
    }
    if ingested.dropped > 0 {
        ui::display_warning(
            err,
            &format!(
                "Skipped {} block(s) without a hand number",
                ingested.dropped
            ),
        )?;
    }
    Ok(ingested)
}

/// Opens a database that must already exist.
fn open_existing_store(db: &str) -> Result<HandStore, CliError> {
    let path = Path::new(db);
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!("Database not found: {}", db)));
    }
    Ok(HandStore::open(path)?)
}
