//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.noteme/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::model::DEFAULT_FOLDER;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotemeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
    pub default_folder: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DIR_NAME: &str = ".noteme";
pub const DEFAULT_LOG_FILE: &str = "noteme.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub default_folder: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems found while resolving, reported once a logger exists.
    pub warnings: Vec<String>,
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

/// Returns `~/.noteme`, or `./.noteme` when no home directory is known.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}

/// Returns the path to `~/.noteme/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DEFAULT_DIR_NAME).join("config.toml"))
}

/// Load config from `~/.noteme/config.toml`.
///
/// Runs before the logger is up, so problems go to stderr.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NotemeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NotemeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            eprintln!("noteme: could not determine home directory, using default config");
            return Ok(NotemeConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<NotemeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NotemeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NotemeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# noteme configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# data_dir = "~/.noteme"             # Or set NOTEME_DATA_DIR, or pass --data-dir
# default_folder = "general"         # Folder pre-filled for new notes

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "noteme.log"                # Relative paths live inside data_dir
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("noteme: failed to create config directory: {e}");
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        eprintln!("noteme: failed to write default config: {e}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_data_dir` and `cli_log_level` come from CLI flags (None = not specified).
pub fn resolve(
    config: &NotemeConfig,
    cli_data_dir: Option<&Path>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NOTEME_DATA_DIR").ok().map(|s| expand_home(&s)))
        .or_else(|| config.general.data_dir.as_deref().map(expand_home))
        .unwrap_or_else(default_data_dir);

    let default_folder = config
        .general
        .default_folder
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FOLDER)
        .to_string();

    // Log level: CLI → env → config → default
    let mut warnings = Vec::new();
    let requested_level = cli_log_level
        .map(str::to_string)
        .or_else(|| std::env::var("NOTEME_LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone());
    let log_level = match requested_level {
        Some(level) => parse_level(&level).unwrap_or_else(|| {
            warnings.push(format!(
                "unknown log level '{}', using {}",
                level.trim(),
                DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: relative paths are anchored in the data dir
    let log_file = match config.logging.file.as_deref() {
        Some(file) if Path::new(file).is_absolute() => PathBuf::from(file),
        Some(file) => data_dir.join(file),
        None => data_dir.join(DEFAULT_LOG_FILE),
    };

    ResolvedConfig {
        data_dir,
        default_folder,
        log_level,
        log_file,
        warnings,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(level.trim()).ok()
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = NotemeConfig::default();
        assert!(config.general.data_dir.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = NotemeConfig {
            general: GeneralConfig {
                data_dir: Some("/from/config".to_string()),
                default_folder: None,
            },
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: None,
            },
        };
        let resolved = resolve(&config, Some(Path::new("/from/cli")), Some("debug"));
        assert_eq!(resolved.data_dir, PathBuf::from("/from/cli"));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/from/cli/noteme.log"));
        assert_eq!(resolved.default_folder, "general");
    }

    #[test]
    fn test_resolve_config_values() {
        let config = NotemeConfig {
            general: GeneralConfig {
                data_dir: None,
                default_folder: Some("inbox".to_string()),
            },
            logging: LoggingConfig {
                level: None,
                file: Some("/var/log/noteme.log".to_string()),
            },
        };
        let resolved = resolve(&config, Some(Path::new("/data")), Some("trace"));
        assert_eq!(resolved.default_folder, "inbox");
        assert_eq!(resolved.log_file, PathBuf::from("/var/log/noteme.log"));
    }

    #[test]
    fn test_blank_default_folder_falls_back() {
        let config = NotemeConfig {
            general: GeneralConfig {
                data_dir: None,
                default_folder: Some("   ".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("/data")), Some("info"));
        assert_eq!(resolved.default_folder, DEFAULT_FOLDER);
    }

    #[test]
    fn test_unknown_level_is_reported_not_logged() {
        let resolved = resolve(&NotemeConfig::default(), Some(Path::new("/data")), Some("loud"));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.warnings,
            vec!["unknown log level 'loud', using INFO".to_string()]
        );

        let resolved = resolve(&NotemeConfig::default(), Some(Path::new("/data")), Some("warn"));
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_unknown_level_parses_to_none() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/tmp/notes"), PathBuf::from("/tmp/notes"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[logging]
level = "debug"
"#;
        let config: NotemeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.general.default_folder.is_none());
    }

    #[test]
    fn test_missing_config_generates_commented_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.data_dir.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [general]"));
        // The generated file is all comments, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.logging.file.is_none());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\ndata_dir = 1").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
