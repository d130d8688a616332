//! `parse`: hand-history logs to JSON Lines.

use super::load_logs;
use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use actiontrack_engine::ParsedHand;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Handle the parse command.
///
/// Writes one `ParsedHand` JSON object per line, to `output` when given and
/// to the output stream otherwise. Skipped files and blocks are reported as
/// warnings on the error stream.
pub fn handle_parse_command(
    cfg: &ConfigResolved,
    input: &str,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let ingested = load_logs(cfg, input, err)?;
    info!(
        input,
        hands = ingested.hands.len(),
        dropped = ingested.dropped,
        "parsed hand histories"
    );

    match output {
        Some(path) => {
            let path_ref = Path::new(path);
            ensure_parent_dir(path_ref).map_err(CliError::InvalidInput)?;
            let mut file = BufWriter::new(std::fs::File::create(path_ref)?);
            write_jsonl(&mut file, &ingested.hands)?;
            file.flush()?;
            writeln!(out, "Wrote {} hands to {}", ingested.hands.len(), path)?;
        }
        None => write_jsonl(out, &ingested.hands)?,
    }
    Ok(())
}

fn write_jsonl(w: &mut dyn Write, hands: &[ParsedHand]) -> Result<(), CliError> {
    for hand in hands {
        let line = serde_json::to_string(hand).map_err(std::io::Error::other)?;
        writeln!(w, "{}", line)?;
    }
    Ok(())
}
