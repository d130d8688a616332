//! Layered configuration for the CLI.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `ACTIONTRACK_CONFIG`, then the `ACTIONTRACK_HERO` / `ACTIONTRACK_DB`
//! environment variables. Command-line flags are applied by the commands on
//! top of the resolved value.

use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "ACTIONTRACK_CONFIG";
pub const HERO_ENV: &str = "ACTIONTRACK_HERO";
pub const DB_ENV: &str = "ACTIONTRACK_DB";

pub const DEFAULT_DATABASE: &str = "action_tracker.db";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Player name whose behavior is analyzed
    pub hero: String,
    /// SQLite file used by `import`, `hands` and `stats --db`
    pub database: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub hero: ValueSource,
    pub database: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hero: ValueSource::Default,
            database: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies a `--hero` flag over whatever the layers resolved.
    pub fn with_hero_flag(mut self, hero: Option<String>) -> Self {
        if let Some(h) = hero {
            self.config.hero = h;
            self.sources.hero = ValueSource::Flag;
        }
        self
    }

    /// Database path, preferring an explicit `--db` flag.
    pub fn database_or(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .unwrap_or_else(|| self.config.database.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hero: actiontrack_engine::DEFAULT_HERO.into(),
            database: DEFAULT_DATABASE.into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.hero {
            cfg.hero = v;
            sources.hero = ValueSource::File;
        }
        if let Some(v) = f.database {
            cfg.database = v;
            sources.database = ValueSource::File;
        }
    }

    if let Ok(hero) = std::env::var(HERO_ENV)
        && !hero.is_empty()
    {
        cfg.hero = hero;
        sources.hero = ValueSource::Env;
    }
    if let Ok(db) = std::env::var(DB_ENV)
        && !db.is_empty()
    {
        cfg.database = db;
        sources.database = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    hero: Option<String>,
    #[serde(default)]
    database: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.hero.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hero must not be empty".into(),
        ));
    }
    if cfg.database.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: database must not be empty".into(),
        ));
    }
    Ok(())
}
