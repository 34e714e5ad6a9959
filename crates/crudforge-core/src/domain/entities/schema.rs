//! Entity schema: the single input of a generation run.
//!
//! Two forms exist:
//!
//! - [`EntitySpec`] is the raw, deserializable shape read from a schema file
//!   or assembled from CLI flags. Type names are plain strings.
//! - [`EntitySchema`] is the validated form. Every name is an identifier,
//!   field names are unique, and every type is a [`LogicalType`].
//!
//! Converting a spec into a schema is the only place raw type names are
//! resolved, so it is where `UnsupportedType` surfaces.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, type_mapper::TypeMapper, value_objects::LogicalType};

/// Identity field name used when the schema does not name one.
pub const DEFAULT_ID_FIELD: &str = "id";

/// One declared attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub logical_type: LogicalType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
        }
    }
}

/// Validated description of one entity to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    name: String,
    fields: Vec<FieldDef>,
    id_field: Option<String>,
}

impl EntitySchema {
    pub fn builder(name: impl Into<String>) -> EntitySchemaBuilder {
        EntitySchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
            id_field: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Identity field name, falling back to [`DEFAULT_ID_FIELD`].
    pub fn id_field(&self) -> &str {
        self.id_field.as_deref().unwrap_or(DEFAULT_ID_FIELD)
    }

    /// Whether the schema overrides the identity field name.
    pub fn has_custom_id_field(&self) -> bool {
        self.id_field() != DEFAULT_ID_FIELD
    }

    /// Check every schema invariant, reporting the first violation.
    ///
    /// Order: entity name, then each field in declaration order (name,
    /// uniqueness), then the identity field.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_identifier(&self.name)?;

        let mut seen = HashSet::new();
        for field in &self.fields {
            validate_identifier(&field.name)?;
            validate_field_name(&field.name)?;
            if field.name == DEFAULT_ID_FIELD && self.has_custom_id_field() {
                return Err(DomainError::invalid_identifier(
                    &field.name,
                    "'id' is the document's own identifier when the identity field is renamed",
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DomainError::DuplicateFieldName {
                    name: field.name.clone(),
                });
            }
        }

        let id_field = self.id_field();
        validate_identifier(id_field)?;
        validate_field_name(id_field)?;
        if seen.contains(id_field) {
            return Err(DomainError::DuplicateFieldName {
                name: id_field.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`EntitySchema`]; `build` validates.
#[derive(Debug, Clone)]
pub struct EntitySchemaBuilder {
    name: String,
    fields: Vec<FieldDef>,
    id_field: Option<String>,
}

impl EntitySchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, logical_type: LogicalType) -> Self {
        self.fields.push(FieldDef::new(name, logical_type));
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = Some(name.into());
        self
    }

    pub fn build(self) -> Result<EntitySchema, DomainError> {
        let schema = EntitySchema {
            name: self.name,
            fields: self.fields,
            id_field: self.id_field,
        };
        schema.validate()?;
        Ok(schema)
    }
}

// ── Raw input ────────────────────────────────────────────────────────────────

/// A field as written by the user: `{ name = "price", type = "number" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FromStr for FieldSpec {
    type Err = String;

    /// Parse the `name:type` shorthand used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, type_name) = s
            .split_once(':')
            .ok_or_else(|| format!("expected NAME:TYPE, got '{s}'"))?;
        let name = name.trim();
        let type_name = type_name.trim();
        if name.is_empty() || type_name.is_empty() {
            return Err(format!("expected NAME:TYPE, got '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

/// Unvalidated entity description, as read from JSON/TOML or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default, alias = "idFieldName")]
    pub id_field: Option<String>,
}

impl TryFrom<&EntitySpec> for EntitySchema {
    type Error = DomainError;

    /// Resolve raw type names and validate.
    ///
    /// The entity name is checked before any field so a bad name is always
    /// the reported error; fields are then checked in order, each for its
    /// name, its uniqueness and its type.
    fn try_from(spec: &EntitySpec) -> Result<Self, Self::Error> {
        validate_identifier(&spec.name)?;

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(spec.fields.len());
        for raw in &spec.fields {
            validate_identifier(&raw.name)?;
            if !seen.insert(raw.name.as_str()) {
                return Err(DomainError::DuplicateFieldName {
                    name: raw.name.clone(),
                });
            }
            let logical_type = TypeMapper::parse(&raw.name, &raw.type_name)?;
            fields.push(FieldDef::new(raw.name.clone(), logical_type));
        }

        let mut builder = EntitySchema::builder(spec.name.clone()).fields(fields);
        if let Some(id_field) = &spec.id_field {
            builder = builder.id_field(id_field.clone());
        }
        builder.build()
    }
}

impl TryFrom<EntitySpec> for EntitySchema {
    type Error = DomainError;

    fn try_from(spec: EntitySpec) -> Result<Self, Self::Error> {
        EntitySchema::try_from(&spec)
    }
}

// ── Identifier rules ─────────────────────────────────────────────────────────

/// Paths Mongoose reserves on a schema, plus the document members the typed
/// model interface would redeclare with a different type.
const RESERVED_FIELDS: &[&str] = &[
    "__v", "_id", "_posts", "_pres", "collection", "db", "deleteOne", "emit", "errors", "get",
    "init", "isModified", "isNew", "listeners", "markModified", "modelName", "on", "once",
    "populate", "populated", "prototype", "remove", "removeListener", "save", "schema", "set",
    "toJSON", "toObject", "updateOne", "validate",
];

fn validate_field_name(name: &str) -> Result<(), DomainError> {
    if RESERVED_FIELDS.contains(&name) {
        return Err(DomainError::invalid_identifier(
            name,
            "name is reserved by the generated Mongoose document",
        ));
    }
    Ok(())
}

/// ASCII letters, digits and underscore; must not start with a digit.
pub(crate) fn validate_identifier(value: &str) -> Result<(), DomainError> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Err(DomainError::invalid_identifier(value, "name cannot be empty"));
    };
    if first.is_ascii_digit() {
        return Err(DomainError::invalid_identifier(
            value,
            "name cannot start with a digit",
        ));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(DomainError::invalid_identifier(
            value,
            format!("character '{bad}' is not allowed"),
        ));
    }
    Ok(())
}
