//! CLI errors: one enum wrapping core errors and the CLI's own failures,
//! each with suggestions, a category, and an exit code.

use std::error::Error;
use std::fmt::Write as _;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use crudforge_core::{
    application::ApplicationError,
    domain::DomainError,
    error::{CrudforgeError, ErrorCategory as CoreCategory},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input that parsed but still makes no sense, such as a bad schema path.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// The output path has no usable last component.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// `config get` or `config set` with a key the config does not have.
    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Generation failed: {0}")]
    Core(#[from] CrudforgeError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The confirmation prompt was declined.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        Self::Core(err.into())
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run the command with --help to see accepted forms".into()],
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{name}' is not usable as a package name"),
                "End the path with a plain directory name, e.g. shop or ./out/inventory-api".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Inspect {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Regenerate it with: crudforge init --force".into(),
            ],
            Self::UnknownConfigKey { .. } => vec![
                "See every key with: crudforge config list".into(),
                "Keys are dotted, like defaults.profile or project.port".into(),
            ],
            Self::Core(inner) => inner.suggestions(),
            Self::IoError { .. } => vec!["Check that the target directory is writable".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidProjectName { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::Core(inner) => match inner.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for user errors, 3 for unknown keys, 4 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Message, optional cause chain, suggestions, and a `-v` hint when
    /// the chain was hidden.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_string() }
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{} {self}",
            paint("Error:", |t| t.red().bold().to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "  {}",
                    paint(&format!("Caused by: {err}"), |t| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            );
            for line in &suggestions {
                let _ = writeln!(out, "  {line}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            );
        }

        out
    }

    /// Emit one event at the category's severity.
    pub fn log(&self) {
        let cause = self.source().map(ToString::to_string);
        let cause = cause.as_deref();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), cause, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), cause, "{self}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Replaces an I/O error's message with what the CLI was doing at the time.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for io::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}
