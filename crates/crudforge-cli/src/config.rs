//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProjectSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CRUDFORGE_<SECTION>__<KEY>`,
//!    e.g. `CRUDFORGE_PROJECT__PORT=8080`
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crudforge_core::domain::{
    SyntaxProfile,
    entities::settings::{DEFAULT_DATABASE_URL, DEFAULT_PORT},
};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "CRUDFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for the entity being generated.
    pub defaults: Defaults,
    /// Defaults for the generated project.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub profile: SyntaxProfile,
    pub id_field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub port: u16,
    pub database_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            profile: SyntaxProfile::Typed,
            id_field: "id".into(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
        }
    }
}


impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.crudforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "crudforge", "crudforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".crudforge.toml"))
    }

    /// The config as a JSON tree, for dotted-key lookups.
    pub fn to_value(&self) -> CliResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_profile_is_typed() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.profile, SyntaxProfile::Typed);
        assert_eq!(cfg.defaults.id_field, "id");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.project.port, DEFAULT_PORT);
    }

    #[test]
    fn missing_required_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.toml"), true);
        assert!(matches!(result, Err(CliError::ConfigError { .. })));
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nprofile = \"untyped\"\n\n[project]\nport = 8080\n").unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.defaults.profile, SyntaxProfile::Untyped);
        assert_eq!(cfg.defaults.id_field, "id");
        assert_eq!(cfg.project.port, 8080);
        assert_eq!(cfg.project.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn invalid_value_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nprofile = \"cobol\"\n").unwrap();

        assert!(AppConfig::load_from(&path, true).is_err());
    }

    #[test]
    fn toml_round_trips_through_file_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load_from(&path, true).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
