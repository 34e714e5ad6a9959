//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented by
//! infrastructure in `crudforge-adapters`:
//!
//! - `Filesystem`: directory and file writes for plan emission

pub mod output;

pub use output::Filesystem;
