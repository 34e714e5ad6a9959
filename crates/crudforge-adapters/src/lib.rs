//! Infrastructure adapters for crudforge.
//!
//! Implements the ports defined in `crudforge_core::application::ports` and
//! reads entity schema files. All I/O lives here.

pub mod filesystem;
pub mod schema_loader;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema_loader::load_entity_spec;
