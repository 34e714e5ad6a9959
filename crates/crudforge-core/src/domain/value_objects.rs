//! Domain value objects: LogicalType, SyntaxProfile, Layer.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO mapping logic. Type tokens live in `type_mapper.rs` and
//! layer content lives in `templates/`. This file defines the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LogicalType ──────────────────────────────────────────────────────────────

/// The closed set of attribute types an entity field may declare.
///
/// To add a type: add a variant here, then one `TypeDef` entry in
/// `type_mapper.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    String,
    Number,
    Boolean,
    Date,
    Id,
}

impl LogicalType {
    pub const ALL: [LogicalType; 5] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Date,
        Self::Id,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = DomainError;

    /// Parses a raw type name. The field name is unknown here, so the error
    /// carries an empty `field`; schema conversion re-attaches it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::domain::type_mapper::parse_type_name(s).ok_or_else(|| {
            DomainError::UnsupportedType {
                field: String::new(),
                type_name: s.to_string(),
            }
        })
    }
}

// ── SyntaxProfile ────────────────────────────────────────────────────────────

/// Target surface syntax for the generated tree.
///
/// One generator serves both profiles; the profile only changes how the
/// layer IR is rendered (annotations, module system, file extension).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxProfile {
    /// TypeScript with ES module syntax.
    #[default]
    Typed,
    /// Plain JavaScript with CommonJS modules.
    Untyped,
}

impl SyntaxProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Untyped => "untyped",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Typed => "ts",
            Self::Untyped => "js",
        }
    }

    pub const fn is_typed(self) -> bool {
        matches!(self, Self::Typed)
    }
}

impl fmt::Display for SyntaxProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntaxProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typed" | "ts" | "typescript" => Ok(Self::Typed),
            "untyped" | "js" | "javascript" => Ok(Self::Untyped),
            other => Err(format!("unknown syntax profile: {other}")),
        }
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// One architectural tier of the generated project.
///
/// Declaration order is dependency order: each layer only references
/// layers declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Model,
    Interface,
    Repository,
    Service,
    Controller,
    Router,
    Entry,
    PackageManifest,
    CompilerConfig,
}

impl Layer {
    pub const ALL: [Layer; 9] = [
        Self::Model,
        Self::Interface,
        Self::Repository,
        Self::Service,
        Self::Controller,
        Self::Router,
        Self::Entry,
        Self::PackageManifest,
        Self::CompilerConfig,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Interface => "interface",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Router => "router",
            Self::Entry => "entry",
            Self::PackageManifest => "package-manifest",
            Self::CompilerConfig => "compiler-config",
        }
    }

    /// Directory the layer's artifact lives in, relative to the project root.
    ///
    /// `None` means the project root itself.
    pub const fn directory(&self) -> Option<&'static str> {
        match self {
            Self::Model => Some("src/models"),
            Self::Interface => Some("src/interfaces"),
            Self::Repository => Some("src/repositories"),
            Self::Service => Some("src/services"),
            Self::Controller => Some("src/controllers"),
            Self::Router => Some("src/routes"),
            Self::Entry => Some("src"),
            Self::PackageManifest | Self::CompilerConfig => None,
        }
    }

    /// Whether the layer is emitted under the given profile.
    pub const fn applies_to(self, profile: SyntaxProfile) -> bool {
        match self {
            Self::CompilerConfig => profile.is_typed(),
            _ => true,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_type_parses_aliases() {
        assert_eq!("String".parse::<LogicalType>().unwrap(), LogicalType::String);
        assert_eq!("int".parse::<LogicalType>().unwrap(), LogicalType::Number);
        assert_eq!("objectid".parse::<LogicalType>().unwrap(), LogicalType::Id);
    }

    #[test]
    fn logical_type_rejects_unknown() {
        let err = "decimal".parse::<LogicalType>().unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedType { type_name, .. } if type_name == "decimal"));
    }

    #[test]
    fn profile_parses() {
        assert_eq!("ts".parse::<SyntaxProfile>().unwrap(), SyntaxProfile::Typed);
        assert_eq!("JavaScript".parse::<SyntaxProfile>().unwrap(), SyntaxProfile::Untyped);
        assert!("python".parse::<SyntaxProfile>().is_err());
    }

    #[test]
    fn compiler_config_only_for_typed() {
        assert!(Layer::CompilerConfig.applies_to(SyntaxProfile::Typed));
        assert!(!Layer::CompilerConfig.applies_to(SyntaxProfile::Untyped));
        assert!(Layer::Model.applies_to(SyntaxProfile::Untyped));
    }

    #[test]
    fn layers_are_in_dependency_order() {
        let mut sorted = Layer::ALL;
        sorted.sort();
        assert_eq!(sorted, Layer::ALL);
    }
}
