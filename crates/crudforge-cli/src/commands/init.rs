//! `crudforge init`: create a default configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default configuration file at `--config` or the default
/// location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = global.config.unwrap_or_else(AppConfig::config_path);

    if write_default(&config_path, args.force)? {
        output.success(&format!(
            "Configuration created at {}",
            config_path.display()
        ))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    }

    Ok(())
}

/// Write the default config. Returns `false` if a file exists and `force`
/// is off.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/crudforge/config.toml");

        assert!(write_default(&path, false).unwrap());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[defaults]"));
        assert!(written.contains("profile = \"typed\""));
    }

    #[test]
    fn existing_file_kept_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert!(!write_default(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        assert!(write_default(&path, true).unwrap());
        assert_ne!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }
}
