//! Failures outside generation itself: reading schema files and writing
//! the project tree. Generation failures are [`crate::domain::DomainError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The target root exists and overwriting was not requested.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A writer panicked while holding the in-memory filesystem.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,

    #[error("Cannot load entity schema from {path}: {reason}")]
    SchemaSource { path: PathBuf, reason: String },
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        let mut hints = Vec::new();
        match self {
            Self::FilesystemError { path, .. } => {
                hints.push(format!("Could not write {}", path.display()));
                hints.push("Check permissions on the target directory".into());
            }
            Self::ProjectExists { path } => {
                hints.push(format!("{} is already there", path.display()));
                hints.push("Pass --force to generate into it".into());
                hints.push("Or pick another output path".into());
            }
            Self::SchemaSource { path, .. } => {
                hints.push(format!("Inspect {}", path.display()));
                hints.push("A schema file is .json or .toml with `name` and `fields`".into());
            }
            Self::LockPoisoned => hints.push("Run the command again".into()),
        }
        hints
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::SchemaSource { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
