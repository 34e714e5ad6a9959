pub mod common;
pub mod names;
pub mod plan;
pub mod schema;
pub mod settings;

pub use crate::domain::DomainError;
pub use names::DerivedNames;
pub use plan::{LayerArtifact, ProjectPlan};
pub use schema::{EntitySchema, EntitySpec, FieldDef, FieldSpec};
pub use settings::ProjectSettings;
