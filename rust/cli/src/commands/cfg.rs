//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, file, env or flag).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "hero": {
//!     "value": "Hero",
//!     "source": "default"
//!   },
//!   "database": {
//!     "value": "action_tracker.db",
//!     "source": "env"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// `hero_flag` is the global `--hero` option, reported with source `flag`.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(
    hero_flag: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .with_hero_flag(hero_flag);

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "hero": {
            "value": config.hero,
            "source": sources.hero,
        },
        "database": {
            "value": config.database,
            "source": sources.database,
        },
    });
    ui::write_json(out, &display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::remove_var(config::HERO_ENV);
            std::env::remove_var(config::DB_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_values_and_sources() {
        clear_env();
        let mut out = Vec::new();
        handle_cfg_command(None, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["hero"]["value"], "Hero");
        assert_eq!(json["hero"]["source"], "default");
        assert_eq!(json["database"]["value"], "action_tracker.db");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_flag_and_env_sources() {
        clear_env();
        unsafe {
            std::env::set_var(config::DB_ENV, "/tmp/at.db");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(Some("Alice".into()), &mut out);
        clear_env();
        result.unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["hero"]["value"], "Alice");
        assert_eq!(json["hero"]["source"], "flag");
        assert_eq!(json["database"]["source"], "env");
    }

    #[test]
    #[serial]
    fn test_cfg_missing_file_is_config_error() {
        clear_env();
        unsafe {
            std::env::set_var(config::CONFIG_ENV, "/definitely/missing/actiontrack.toml");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(None, &mut out);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
    }
}
