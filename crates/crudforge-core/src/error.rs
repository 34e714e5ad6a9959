//! The single error type returned across the core crate's public API.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrudforgeError {
    /// Rejected input, or a plan that breaks its own invariants.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Reading schemas or writing the project failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CrudforgeError {
    /// Hints shown under the error message, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(inner) => inner.suggestions(),
            Self::Application(inner) => inner.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(inner) => inner.category().into(),
            Self::Application(inner) => inner.category(),
        }
    }
}

/// Coarse grouping the CLI maps onto exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

pub type CrudforgeResult<T> = Result<T, CrudforgeError>;
