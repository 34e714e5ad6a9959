//! Ports the application drives and infrastructure implements.

use std::path::Path;

use crate::error::CrudforgeResult;

/// Where a [`ProjectPlan`](crate::domain::ProjectPlan) gets written.
///
/// `crudforge_adapters` ships a disk-backed and an in-memory implementation.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Like `mkdir -p`: succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> CrudforgeResult<()>;

    /// Creates or truncates `path`. The parent must exist.
    fn write_file(&self, path: &Path, content: &str) -> CrudforgeResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Used to undo a partially written project.
    fn remove_dir_all(&self, path: &Path) -> CrudforgeResult<()>;
}
