//! Core domain layer.
//!
//! Pure generation logic: no filesystem, no async, no global state. Given
//! the same schema and settings every function here returns the same
//! output.
//!
//! - [`entities`]: schema, derived names, settings, the project plan
//! - [`type_mapper`]: the closed logical-type table
//! - [`templates`]: one renderer per generated layer

pub mod entities;
pub mod error;
pub mod templates;
pub mod type_mapper;
pub mod value_objects;

mod validation;

pub use entities::{
    DerivedNames, EntitySchema, EntitySpec, FieldDef, FieldSpec, LayerArtifact, ProjectPlan,
    ProjectSettings, common::RelativePath,
};
pub use error::{DomainError, ErrorCategory};
pub use type_mapper::{TypeMapper, TypeToken};
pub use validation::DomainValidator;
pub use value_objects::{Layer, LogicalType, SyntaxProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_reports_name_before_fields() {
        let spec = EntitySpec {
            name: "class".into(),
            fields: vec![FieldSpec {
                name: "a".into(),
                type_name: "string".into(),
            }],
            id_field: None,
        };
        let schema = EntitySchema::try_from(&spec).unwrap();

        assert!(matches!(
            DomainValidator::validate_schema(&schema),
            Err(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn validator_returns_names() {
        let schema = EntitySchema::builder("Invoice")
            .field("total", LogicalType::Number)
            .build()
            .unwrap();
        let names = DomainValidator::validate_schema(&schema).unwrap();
        assert_eq!(names.route_segment, "invoices");
    }
}
