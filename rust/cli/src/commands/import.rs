//! `import`: parse logs and persist new hands.

use super::load_logs;
use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::store::HandStore;
use crate::ui;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Handle the import command.
///
/// Hands already stored under the same `game_no` are skipped. Prints
/// `{"count", "duplicates", "hand_ids"}` where `hand_ids` lists the newly
/// stored hand numbers.
pub fn handle_import_command(
    cfg: &ConfigResolved,
    input: &str,
    db: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let ingested = load_logs(cfg, input, err)?;
    let db_path = cfg.database_or(db);
    ensure_parent_dir(Path::new(&db_path)).map_err(CliError::InvalidInput)?;

    let mut store = HandStore::open(Path::new(&db_path))?;
    let summary = store.insert_new(&ingested.hands)?;
    info!(
        db = %db_path,
        inserted = summary.inserted.len(),
        duplicates = summary.duplicates,
        "imported hands"
    );

    ui::write_json(
        out,
        &serde_json::json!({
            "count": summary.inserted.len(),
            "duplicates": summary.duplicates,
            "hand_ids": summary.inserted,
        }),
    )?;
    Ok(())
}
