//! Loading hand-history logs from a file or a directory of files.
//!
//! Shared by `parse`, `import` and `stats`. A single unreadable file is an
//! error; in directory mode unreadable files are collected as
//! [`BatchValidationError`]s and the remaining files are still parsed.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_log_files, read_text_auto};
use actiontrack_engine::{HandParser, ParsedHand};
use std::path::Path;
use tracing::{debug, warn};

/// Hands parsed from one input path.
#[derive(Debug, Default)]
pub struct Ingested {
    pub hands: Vec<ParsedHand>,
    /// Blocks that had no hand identifier
    pub dropped: usize,
    pub files: usize,
    pub failures: Vec<BatchValidationError<String>>,
}

pub fn ingest_path(parser: &HandParser, input: &str) -> Result<Ingested, CliError> {
    let path = Path::new(input);
    if path.is_dir() {
        let files = collect_log_files(path).map_err(CliError::InvalidInput)?;
        let mut ingested = Ingested::default();
        for file in files {
            let name = file.display().to_string();
            match read_text_auto(&name) {
                Ok(text) => ingested.absorb(parser, &name, &text),
                Err(message) => {
                    warn!(file = %name, %message, "skipping unreadable log");
                    ingested.failures.push(BatchValidationError {
                        item_context: name,
                        message,
                    });
                }
            }
        }
        Ok(ingested)
    } else if path.is_file() {
        let text = read_text_auto(input)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
        let mut ingested = Ingested::default();
        ingested.absorb(parser, input, &text);
        Ok(ingested)
    } else {
        Err(CliError::InvalidInput(format!("Input not found: {}", input)))
    }
}

impl Ingested {
    fn absorb(&mut self, parser: &HandParser, name: &str, text: &str) {
        let report = parser.parse_with_report(text);
        debug!(
            file = %name,
            hands = report.hands.len(),
            dropped = report.dropped,
            "parsed log"
        );
        self.files += 1;
        self.dropped += report.dropped;
        self.hands.extend(report.hands);
    }
}
