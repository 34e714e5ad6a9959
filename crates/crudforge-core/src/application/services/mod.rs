//! Application services - orchestrate use cases.

pub mod plan_builder;
pub mod scaffold_service;

pub use plan_builder::{PlanBuilder, build_plan, build_plan_from_spec};
pub use scaffold_service::{EmitReport, ScaffoldService};
