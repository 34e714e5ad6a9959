//! Entity schema files.
//!
//! A schema file describes one entity in JSON or TOML, selected by
//! extension:
//!
//! ```toml
//! name = "Product"
//! id_field = "sku"          # optional
//!
//! [[fields]]
//! name = "price"
//! type = "number"
//! ```
//!
//! Loading only parses. Type names and identifiers are checked when the
//! spec is turned into an `EntitySchema`.

use std::{fs, path::Path};

use tracing::{debug, instrument};

use crudforge_core::{application::ApplicationError, domain::EntitySpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Read and parse an entity spec from `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_entity_spec(path: &Path) -> Result<EntitySpec, ApplicationError> {
    let source_error = |reason: String| ApplicationError::SchemaSource {
        path: path.to_path_buf(),
        reason,
    };

    let format = SchemaFormat::from_path(path)
        .ok_or_else(|| source_error("expected a .json or .toml file".into()))?;

    let raw = fs::read_to_string(path).map_err(|e| source_error(format!("failed to read: {e}")))?;

    let spec = parse_entity_spec(&raw, format).map_err(source_error)?;
    debug!(entity = %spec.name, fields = spec.fields.len(), "schema loaded");
    Ok(spec)
}

fn parse_entity_spec(raw: &str, format: SchemaFormat) -> Result<EntitySpec, String> {
    match format {
        SchemaFormat::Json => {
            serde_json::from_str(raw).map_err(|e| format!("failed to parse JSON: {e}"))
        }
        SchemaFormat::Toml => toml::from_str(raw).map_err(|e| format!("failed to parse TOML: {e}")),
    }
}
