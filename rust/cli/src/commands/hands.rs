//! `hands`: list stored hands.

use super::open_existing_store;
use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the hands command.
///
/// Prints a JSON array of the `limit` newest hands. The raw hand text is left
/// out to keep the listing readable.
pub fn handle_hands_command(
    cfg: &ConfigResolved,
    db: Option<&str>,
    limit: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let store = open_existing_store(&cfg.database_or(db))?;
    let listed: Vec<serde_json::Value> = store
        .list(limit)?
        .into_iter()
        .map(|stored| -> Result<serde_json::Value, CliError> {
            let mut value = serde_json::to_value(&stored).map_err(std::io::Error::other)?;
            if let Some(obj) = value.as_object_mut() {
                obj.remove("raw_text");
            }
            Ok(value)
        })
        .collect::<Result<_, _>>()?;
    ui::write_json(out, &listed)?;
    Ok(())
}
