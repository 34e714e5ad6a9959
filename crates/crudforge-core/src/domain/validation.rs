use crate::domain::{
    entities::{DerivedNames, EntitySchema, ProjectPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities check their own invariants; this is the single entry point the
/// application layer calls before and after building a plan.
pub struct DomainValidator;

impl DomainValidator {
    /// Entity name first (including derived-name checks), then fields.
    pub fn validate_schema(schema: &EntitySchema) -> Result<DerivedNames, DomainError> {
        let names = DerivedNames::derive(schema.name())?;
        schema.validate()?;
        Ok(names)
    }

    pub fn validate_plan(plan: &ProjectPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
