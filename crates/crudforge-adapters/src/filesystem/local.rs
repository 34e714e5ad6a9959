//! Disk-backed [`Filesystem`].

use std::fs;
use std::io;
use std::path::Path;

use crudforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrudforgeError, CrudforgeResult},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, dir: &Path) -> CrudforgeResult<()> {
        fs::create_dir_all(dir).map_err(|e| map_io_error(dir, e, "create directory"))
    }

    fn write_file(&self, file: &Path, content: &str) -> CrudforgeResult<()> {
        fs::write(file, content).map_err(|e| map_io_error(file, e, "write file"))
    }

    fn exists(&self, candidate: &Path) -> bool {
        candidate.try_exists().unwrap_or(false)
    }

    fn remove_dir_all(&self, dir: &Path) -> CrudforgeResult<()> {
        fs::remove_dir_all(dir).map_err(|e| map_io_error(dir, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudforgeError {
    ApplicationError::filesystem(path, format!("Failed to {operation}: {e}")).into()
}
