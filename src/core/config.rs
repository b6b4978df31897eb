//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub max_display_chars: Option<usize>,
    pub confirm_delete: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// List rows longer than this many characters are shown truncated with "...".
pub const DEFAULT_MAX_DISPLAY_CHARS: usize = 23;
pub const DEFAULT_LOG_FILE_NAME: &str = "tally.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_DATA_FILE: &str = "TALLY_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "TALLY_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub max_display_chars: usize,
    pub confirm_delete: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems noticed while resolving, logged once the logger is up.
    pub warnings: Vec<String>,
}

/// Overrides taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub verbose: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    store::data_dir().ok().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from.
///
/// Config is read before the logger exists (the log file path is itself a
/// setting), so loading reports what happened here and `main` logs it once
/// logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No config file existed; a commented-out default was written here.
    Generated(PathBuf),
    /// No config file existed and the default could not be written.
    GenerateFailed { path: PathBuf, reason: String },
    /// No home directory; built-in defaults apply.
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `path`, or from `~/.tally/config.toml` when `path` is None.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. An explicit path that doesn't exist is
/// an error. If the file exists but is malformed, returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<(TallyConfig, ConfigSource), ConfigError> {
    let path = match path {
        Some(p) => {
            let contents = fs::read_to_string(p).map_err(ConfigError::Io)?;
            return Ok((parse_config(&contents)?, ConfigSource::File(p.to_path_buf())));
        }
        None => match config_path() {
            Some(p) => p,
            None => return Ok((TallyConfig::default(), ConfigSource::NoHomeDir)),
        },
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed {
                path,
                reason: e.to_string(),
            },
        };
        return Ok((TallyConfig::default(), source));
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    Ok((parse_config(&contents)?, ConfigSource::File(path)))
}

fn parse_config(contents: &str) -> Result<TallyConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Tally Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "~/.tally/todo.json"   # Or set TALLY_DATA_FILE env var
# max_display_chars = 23             # Longer items are shown as "first 23 chars..."
# confirm_delete = true              # Ask before deleting an item

# [log]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "~/.tally/tally.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TallyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Like [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &TallyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let home_dir = store::data_dir().unwrap_or_else(|_| PathBuf::from(".tally"));
    let mut warnings = Vec::new();

    // Data file: CLI → env → config → default
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| env(ENV_DATA_FILE).map(|s| expand_home(&s)))
        .or_else(|| config.general.data_file.as_deref().map(expand_home))
        .unwrap_or_else(|| home_dir.join(store::FILE_NAME));

    // Log level: --verbose → env → config → default
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        env(ENV_LOG_LEVEL)
            .or_else(|| config.log.level.clone())
            .and_then(|s| {
                let level = parse_level(&s);
                if level.is_none() {
                    warnings.push(format!("Unknown log level {s:?}, using default"));
                }
                level
            })
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    let log_file = config
        .log
        .file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| home_dir.join(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        data_file,
        max_display_chars: config
            .general
            .max_display_chars
            .unwrap_or(DEFAULT_MAX_DISPLAY_CHARS),
        confirm_delete: config.general.confirm_delete.unwrap_or(true),
        log_level,
        log_file,
        warnings,
    }
}

/// Parses a log level name, ignoring case. Unknown names yield None.
fn parse_level(s: &str) -> Option<LevelFilter> {
    s.trim().parse::<LevelFilter>().ok()
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
