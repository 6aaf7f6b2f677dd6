//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mesa/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::model::ViewMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MesaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Presentation mode at startup: "gallery", "list", or "map".
    pub start_view: Option<String>,
    pub dark_mode: Option<bool>,
    /// Log verbosity for mesa.log: "off", "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_view: ViewMode,
    pub dark_mode: bool,
    pub log_level: log::LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_view: ViewMode::default(),
            dark_mode: false,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
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

/// Returns the path to `~/.mesa/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mesa").join("config.toml"))
}

/// Load config from `~/.mesa/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MesaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MesaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MesaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MesaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MesaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mesa Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_view = "gallery"   # "gallery", "list", or "map"
# dark_mode = false
# log_level = "info"       # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_view` comes from the `--view` flag (None = not specified);
/// `cli_dark` from `--dark` (false = not specified, flags can only turn
/// the palette on).
pub fn resolve(config: &MesaConfig, cli_view: Option<ViewMode>, cli_dark: bool) -> ResolvedConfig {
    // Start view: CLI → env → config → default
    let start_view = cli_view
        .or_else(|| std::env::var("MESA_VIEW").ok().as_deref().and_then(parse_view))
        .or_else(|| config.general.start_view.as_deref().and_then(parse_view))
        .unwrap_or_default();

    // Dark mode: CLI → env → config → default
    let dark_mode = cli_dark
        || std::env::var("MESA_DARK_MODE")
            .ok()
            .map(|v| is_truthy(&v))
            .or(config.general.dark_mode)
            .unwrap_or(false);

    // Log level: env → config → default
    let log_level = std::env::var("MESA_LOG_LEVEL")
        .ok()
        .as_deref()
        .or(config.general.log_level.as_deref())
        .and_then(parse_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        start_view,
        dark_mode,
        log_level,
    }
}

/// Parse a view-mode name; unknown names warn and fall through.
pub fn parse_view(name: &str) -> Option<ViewMode> {
    match name.to_lowercase().as_str() {
        "gallery" => Some(ViewMode::Gallery),
        "list" => Some(ViewMode::List),
        "map" => Some(ViewMode::Map),
        other => {
            warn!("Unknown view mode {:?}, ignoring", other);
            None
        }
    }
}

fn parse_log_level(name: &str) -> Option<log::LevelFilter> {
    match name.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, ignoring", name);
            None
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MesaConfig::default();
        assert!(config.general.start_view.is_none());
        assert!(config.general.dark_mode.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MesaConfig::default();
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_view, ViewMode::Gallery);
        assert!(!resolved.dark_mode);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MesaConfig {
            general: GeneralConfig {
                start_view: Some("list".to_string()),
                dark_mode: Some(true),
                log_level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_view, ViewMode::List);
        assert!(resolved.dark_mode);
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_cli_view_wins() {
        let config = MesaConfig {
            general: GeneralConfig {
                start_view: Some("list".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some(ViewMode::Map), false);
        assert_eq!(resolved.start_view, ViewMode::Map);
    }

    #[test]
    fn test_resolve_cli_dark_flag_wins() {
        let config = MesaConfig {
            general: GeneralConfig {
                dark_mode: Some(false),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, true);
        assert!(resolved.dark_mode);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_view = "map"
dark_mode = true
log_level = "warn"
"#;
        let config: MesaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_view.as_deref(), Some("map"));
        assert_eq!(config.general.dark_mode, Some(true));
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
dark_mode = true
"#;
        let config: MesaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.dark_mode, Some(true));
        assert!(config.general.start_view.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_parse_view_accepts_any_case() {
        assert_eq!(parse_view("Gallery"), Some(ViewMode::Gallery));
        assert_eq!(parse_view("LIST"), Some(ViewMode::List));
        assert_eq!(parse_view("map"), Some(ViewMode::Map));
        assert_eq!(parse_view("globe"), None);
    }

    #[test]
    fn test_is_truthy() {
        for v in ["1", "true", "Yes", "ON"] {
            assert!(is_truthy(v), "{v} should be truthy");
        }
        for v in ["0", "false", "no", "off", ""] {
            assert!(!is_truthy(v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_unknown_log_level_falls_through() {
        let config = MesaConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }
}
