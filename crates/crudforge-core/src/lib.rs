//! crudforge core: CRUD project generation.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │           crudforge-cli (CLI)            │
//! └──────────────────┬───────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │          Application Services            │
//! │      (PlanBuilder, ScaffoldService)      │
//! └──────────────────┬───────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │      Application Ports (Filesystem)      │
//! └──────────────────┬───────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │   crudforge-adapters (Infrastructure)    │
//! └──────────────────────────────────────────┘
//!
//!              Domain Layer (Pure Logic)
//!   (EntitySchema, DerivedNames, templates, ProjectPlan)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use crudforge_core::prelude::*;
//!
//! let schema = EntitySchema::builder("Product")
//!     .field("name", LogicalType::String)
//!     .field("price", LogicalType::Number)
//!     .build()
//!     .unwrap();
//!
//! let plan = build_plan(&schema).unwrap();
//! assert!(plan.artifact(Layer::Router).is_some());
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        EmitReport, PlanBuilder, ScaffoldService, build_plan, build_plan_from_spec,
        ports::Filesystem,
    };
    pub use crate::domain::{
        DerivedNames, EntitySchema, EntitySpec, FieldDef, FieldSpec, Layer, LayerArtifact,
        LogicalType, ProjectPlan, ProjectSettings, RelativePath, SyntaxProfile, TypeMapper,
    };
    pub use crate::error::{CrudforgeError, CrudforgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
