//! Application layer.
//!
//! - **Services**: plan building and plan emission
//! - **Ports**: traits for the filesystem the plan is written to
//! - **Errors**: orchestration failures
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. Naming, typing and templates live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    EmitReport, PlanBuilder, ScaffoldService, build_plan, build_plan_from_spec,
};

pub use ports::Filesystem;

pub use error::ApplicationError;
