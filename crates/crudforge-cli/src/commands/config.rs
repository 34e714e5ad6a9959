//! `crudforge config`: read and write configuration values.
//!
//! Keys are dotted paths into [`AppConfig`], e.g. `project.port`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = active_path(&global);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.wants_json() {
                let json = serde_json::to_string_pretty(&config.to_value()?)
                    .map_err(std::io::Error::from)?;
                output.data(&json)?;
            } else {
                output.header("Current Configuration:")?;
                output.data(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn active_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = config.to_value()?;
    match lookup(&root, key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Object(_)) | None => Err(CliError::UnknownConfigKey { key: key.into() }),
        Some(other) => Ok(other.to_string()),
    }
}

/// Update one key in the file at `path`, creating the file if needed.
///
/// The result must still deserialize as [`AppConfig`]; otherwise nothing
/// is written.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let defaults = AppConfig::default().to_value()?;
    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    };
    match lookup(&defaults, key) {
        Some(Value::Object(_)) | None => {
            return Err(CliError::UnknownConfigKey { key: key.into() });
        }
        Some(_) => {}
    }

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read config from '{}'", path.display()))?;
        text.parse::<toml::Table>().map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid TOML: {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let section_table = table
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section_table) = section_table else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), parse_scalar(raw));

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::InvalidInput {
        message: format!("'{raw}' is not a valid value for {key}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(())
}

fn parse_scalar(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        toml::Value::Integer(i)
    } else {
        toml::Value::String(raw.to_string())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
