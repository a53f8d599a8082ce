//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menu-shell/config.toml`. A missing file is not an
//! error; every setting has a default.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::navigation::LaunchMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub launch_mode: Option<LaunchMode>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "menu :b";
pub const DEFAULT_LOG_FILE: &str = "menu-shell.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_PROFILE_NAME: &str = "Guest";
pub const DEFAULT_PROFILE_EMAIL: &str = "guest@example.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub launch_mode: LaunchMode,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub profile_name: String,
    pub profile_email: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&ShellConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub launch_mode: Option<LaunchMode>,
    pub log_level: Option<LevelFilter>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menu-shell/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menu-shell").join("config.toml"))
}

/// Load config from `~/.menu-shell/config.toml`.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ShellConfig::default())
        }
    }
}

/// Load config from an explicit path. Missing file → defaults.
pub fn load_config_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(ShellConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config: ShellConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShellConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Launch mode: CLI → env → config → default
    let launch_mode = cli
        .launch_mode
        .or_else(|| {
            std::env::var("MENU_SHELL_LAUNCH_MODE")
                .ok()
                .and_then(|v| parse_launch_mode(&v))
        })
        .or(config.general.launch_mode)
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            std::env::var("MENU_SHELL_LOG_LEVEL")
                .ok()
                .and_then(|v| parse_level(&v))
        })
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        launch_mode,
        log_level,
        log_file,
        profile_name: config
            .profile
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        profile_email: config
            .profile
            .email
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_EMAIL.to_string()),
    }
}

fn parse_launch_mode(value: &str) -> Option<LaunchMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "standard" => Some(LaunchMode::Standard),
        "single_top" | "single-top" | "singletop" => Some(LaunchMode::SingleTop),
        other => {
            warn!("Ignoring unknown launch mode {other:?}");
            None
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {value:?}");
            None
        }
    }
}
