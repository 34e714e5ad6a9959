//! Field type registry.
//!
//! Each [`LogicalType`] is described exactly once by a [`TypeDef`] in
//! [`TYPE_REGISTRY`]: the names users may write for it and the tokens each
//! syntax profile renders. The mapping is closed. Unknown type names are
//! rejected with [`DomainError::UnsupportedType`], never passed through as
//! text.
//!
//! # Adding a New Type
//!
//! 1. Add a variant to `LogicalType` in `value_objects.rs`
//! 2. Add one [`TypeDef`] entry to [`TYPE_REGISTRY`]

use crate::domain::{
    error::DomainError,
    value_objects::{LogicalType, SyntaxProfile},
};

/// Everything the generator needs to know about one logical type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDef {
    pub logical: LogicalType,

    /// Accepted spellings, matched case-insensitively.
    pub aliases: &'static [&'static str],

    /// Schema type token under the typed profile (`Schema` is imported).
    pub typed_schema: &'static str,

    /// Schema type token under the untyped profile (only `mongoose` is bound).
    pub untyped_schema: &'static str,

    /// Type annotation used in typed declarations.
    pub annotation: &'static str,

    /// Whether the typed model must import `Types` for the annotation.
    pub needs_types_import: bool,
}

/// Single source of truth for field types.
///
/// Entries are stored in `LogicalType` declaration order so lookup is an
/// index, not a search.
pub static TYPE_REGISTRY: [TypeDef; 5] = [
    TypeDef {
        logical: LogicalType::String,
        aliases: &["string", "str", "text"],
        typed_schema: "String",
        untyped_schema: "String",
        annotation: "string",
        needs_types_import: false,
    },
    TypeDef {
        logical: LogicalType::Number,
        aliases: &["number", "num", "int", "integer", "float"],
        typed_schema: "Number",
        untyped_schema: "Number",
        annotation: "number",
        needs_types_import: false,
    },
    TypeDef {
        logical: LogicalType::Boolean,
        aliases: &["boolean", "bool"],
        typed_schema: "Boolean",
        untyped_schema: "Boolean",
        annotation: "boolean",
        needs_types_import: false,
    },
    TypeDef {
        logical: LogicalType::Date,
        aliases: &["date", "datetime"],
        typed_schema: "Date",
        untyped_schema: "Date",
        annotation: "Date",
        needs_types_import: false,
    },
    TypeDef {
        logical: LogicalType::Id,
        aliases: &["id", "objectid", "ref"],
        typed_schema: "Schema.Types.ObjectId",
        untyped_schema: "mongoose.Schema.Types.ObjectId",
        annotation: "Types.ObjectId",
        needs_types_import: true,
    },
];

/// The rendered form of one logical type under one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeToken {
    /// Persistence schema type, e.g. `Number`.
    pub schema: &'static str,
    /// Declaration annotation, `None` under the untyped profile.
    pub annotation: Option<&'static str>,
}

/// Maps logical types to the target syntax's type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapper {
    profile: SyntaxProfile,
}

impl TypeMapper {
    pub const fn for_profile(profile: SyntaxProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> SyntaxProfile {
        self.profile
    }

    /// Map a logical type to its token.
    pub fn map(&self, logical: LogicalType) -> TypeToken {
        let def = definition(logical);
        match self.profile {
            SyntaxProfile::Typed => TypeToken {
                schema: def.typed_schema,
                annotation: Some(def.annotation),
            },
            SyntaxProfile::Untyped => TypeToken {
                schema: def.untyped_schema,
                annotation: None,
            },
        }
    }

    /// Resolve a raw type name for `field`.
    pub fn parse(field: &str, raw: &str) -> Result<LogicalType, DomainError> {
        parse_type_name(raw).ok_or_else(|| DomainError::UnsupportedType {
            field: field.to_string(),
            type_name: raw.to_string(),
        })
    }
}

/// Look up the registry entry for a logical type.
pub fn definition(logical: LogicalType) -> &'static TypeDef {
    &TYPE_REGISTRY[logical as usize]
}

pub(crate) fn parse_type_name(raw: &str) -> Option<LogicalType> {
    let needle = raw.trim().to_ascii_lowercase();
    TYPE_REGISTRY
        .iter()
        .find(|def| def.aliases.contains(&needle.as_str()))
        .map(|def| def.logical)
}
