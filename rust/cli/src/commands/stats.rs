//! `stats`: Hero HUD statistics.
//!
//! Reads hands either from logs (`--input`) or from the database (`--db`, or
//! the configured database when neither is given). Log input is de-duplicated
//! by hand number first, as the database already is.

use super::{load_logs, open_existing_store};
use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ui;
use actiontrack_engine::ParsedHand;
use actiontrack_engine::stats::{dedup_by_game_no, hero_stats, positional_stats};
use std::io::Write;
use tracing::info;

/// Handle the stats command.
///
/// Prints the aggregate as JSON, or a map keyed by position with
/// `by_position`. No hands at all prints `{}`.
pub fn handle_stats_command(
    cfg: &ConfigResolved,
    input: Option<&str>,
    db: Option<&str>,
    by_position: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hands: Vec<ParsedHand> = match input {
        Some(path) => dedup_by_game_no(load_logs(cfg, path, err)?.hands),
        None => open_existing_store(&cfg.database_or(db))?
            .load_all()?
            .into_iter()
            .map(|stored| stored.hand)
            .collect(),
    };
    info!(hands = hands.len(), by_position, "computing statistics");

    if by_position {
        ui::write_json(out, &positional_stats(&hands))?;
    } else {
        match hero_stats(&hands) {
            Some(stats) => ui::write_json(out, &stats)?,
            None => ui::write_json(out, &serde_json::json!({}))?,
        }
    }
    Ok(())
}
