//! # actiontrack CLI Library
//!
//! Command-line interface over the `actiontrack-engine` hand-history parser.
//! It parses poker-room logs, stores the resulting records in SQLite and
//! reports Hero's HUD statistics.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["actiontrack", "parse", "--input", "logs/"];
//! let code = actiontrack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `parse`: Parse logs into JSON Lines of hand records
//! - `import`: Parse logs and store new hands in the database
//! - `hands`: List stored hands
//! - `stats`: Hero statistics from logs or the database
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod ingest;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod store;
pub mod ui;

use cli::{ActionTrackCli, Commands};
use commands::{
    handle_cfg_command, handle_hands_command, handle_import_command, handle_parse_command,
    handle_stats_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["parse", "import", "hands", "stats", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["actiontrack", "--help"];
/// let code = actiontrack_cli::run(args, &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ActionTrackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: actiontrack <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: actiontrack --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let hero = cli.hero;
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(hero, out),
        Commands::Parse { input, output } => resolve_config(hero)
            .and_then(|cfg| handle_parse_command(&cfg, &input, output.as_deref(), out, err)),
        Commands::Import { input, db } => resolve_config(hero)
            .and_then(|cfg| handle_import_command(&cfg, &input, db.as_deref(), out, err)),
        Commands::Hands { db, limit } => resolve_config(hero)
            .and_then(|cfg| handle_hands_command(&cfg, db.as_deref(), limit, out)),
        Commands::Stats {
            input,
            db,
            by_position,
        } => resolve_config(hero).and_then(|cfg| {
            handle_stats_command(
                &cfg,
                input.as_deref(),
                db.as_deref(),
                by_position,
                out,
                err,
            )
        }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Loads the layered configuration and applies the `--hero` flag.
fn resolve_config(hero: Option<String>) -> Result<config::ConfigResolved, CliError> {
    config::load_with_sources()
        .map(|resolved| resolved.with_hero_flag(hero))
        .map_err(|e| CliError::Config(e.to_string()))
}
