// Configuration loading and parsing (config/superteam.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::roster::DEFAULT_SUPER_TEAM_LABEL;

/// File name looked up under `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "superteam.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// superteam.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Season per-game CSV, relative to the working directory.
    pub season_csv: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Label for an unrestricted roster when the user supplies none.
    #[serde(default = "default_label")]
    pub default_label: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            default_label: default_label(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed. Omit for a fresh seed every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_filter(),
        }
    }
}

fn default_label() -> String {
    DEFAULT_SUPER_TEAM_LABEL.to_string()
}

fn default_filter() -> String {
    "superteam=info,warn".to_string()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/superteam.toml` relative to `base_dir`.
///
/// Does not copy defaults; prefer `load_config()` for normal startup.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Copy `defaults/superteam.toml` to `config/superteam.toml` when the latter
/// is missing. Returns whether a copy was made; an existing file is left alone.
pub fn ensure_config_file(base_dir: &Path) -> Result<bool, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(false);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither config/{CONFIG_FILE} nor defaults/{CONFIG_FILE} found in {}; \
                 run from the project root",
                base_dir.display()
            ),
        });
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", source.display()),
    })?;
    info!("Created {} from defaults", target.display());
    Ok(true)
}

/// Loads config relative to the current working directory, copying the
/// default config file first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.season_csv.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.season_csv".into(),
            message: "must not be empty".into(),
        });
    }

    if config.roster.default_label.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "roster.default_label".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Workspace root, where `defaults/` lives.
    fn project_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
    }

    /// Fresh scratch directory with an empty `config/`.
    fn scratch(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    #[test]
    fn load_valid_config_from_project_defaults() {
        let tmp = scratch("superteam_config_defaults");
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            tmp.join("config").join(CONFIG_FILE),
        )
        .unwrap();

        let config = load_config_from(&tmp).expect("should load valid config");
        assert_eq!(config.data.season_csv, "data/season.csv");
        assert_eq!(config.roster.default_label, "Superteam");
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.logging.filter, "superteam=info,warn");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn optional_sections_use_defaults() {
        let tmp = scratch("superteam_config_minimal");
        fs::write(
            tmp.join("config").join(CONFIG_FILE),
            "[data]\nseason_csv = \"stats.csv\"\n",
        )
        .unwrap();

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.data.season_csv, "stats.csv");
        assert_eq!(config.roster.default_label, DEFAULT_SUPER_TEAM_LABEL);
        assert!(config.simulation.seed.is_none());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seed_and_label_are_read() {
        let tmp = scratch("superteam_config_seed");
        fs::write(
            tmp.join("config").join(CONFIG_FILE),
            r#"
[data]
season_csv = "stats.csv"

[roster]
default_label = "Dream Team"

[simulation]
seed = 1992
"#,
        )
        .unwrap();

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.roster.default_label, "Dream Team");
        assert_eq!(config.simulation.seed, Some(1992));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_data_path() {
        let tmp = scratch("superteam_config_empty_path");
        fs::write(
            tmp.join("config").join(CONFIG_FILE),
            "[data]\nseason_csv = \"  \"\n",
        )
        .unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "data.season_csv"),
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_default_label() {
        let tmp = scratch("superteam_config_empty_label");
        fs::write(
            tmp.join("config").join(CONFIG_FILE),
            "[data]\nseason_csv = \"stats.csv\"\n[roster]\ndefault_label = \"\"\n",
        )
        .unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "roster.default_label")
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = scratch("superteam_config_missing");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = scratch("superteam_config_invalid");
        fs::write(tmp.join("config").join(CONFIG_FILE), "this is not valid [[[ toml").unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_data_section_is_parse_error() {
        let tmp = scratch("superteam_config_no_data");
        fs::write(
            tmp.join("config").join(CONFIG_FILE),
            "[roster]\ndefault_label = \"X\"\n",
        )
        .unwrap();

        assert!(matches!(
            load_config_from(&tmp),
            Err(ConfigError::ParseError { .. })
        ));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_file_copies_when_missing() {
        let tmp = std::env::temp_dir().join("superteam_config_ensure_copies");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            defaults_dir.join(CONFIG_FILE),
        )
        .unwrap();

        assert!(!tmp.join("config").exists());
        assert!(ensure_config_file(&tmp).expect("should succeed"));
        assert!(tmp.join("config").join(CONFIG_FILE).exists());

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.data.season_csv, "data/season.csv");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_file_keeps_existing() {
        let tmp = std::env::temp_dir().join("superteam_config_ensure_keeps");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            defaults_dir.join(CONFIG_FILE),
        )
        .unwrap();
        fs::write(config_dir.join(CONFIG_FILE), "# custom\n").unwrap();

        assert!(!ensure_config_file(&tmp).expect("should succeed"));
        let content = fs::read_to_string(config_dir.join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_file_without_existing_config_needs_defaults() {
        let tmp = std::env::temp_dir().join("superteam_config_no_defaults");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();

        let err = ensure_config_file(&tmp).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither config/superteam.toml"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
