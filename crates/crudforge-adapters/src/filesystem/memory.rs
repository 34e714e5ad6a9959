//! In-memory filesystem adapter, used to exercise emission without touching disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CrudforgeResult,
};

/// In-memory filesystem. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directory paths, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    ApplicationError::filesystem(path, "Parent directory does not exist").into(),
                );
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> CrudforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/src/a.ts"), "x").is_err());

        fs.create_dir_all(Path::new("out/src")).unwrap();
        fs.write_file(Path::new("out/src/a.ts"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("out/src/a.ts")).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("out")));
    }

    #[test]
    fn remove_clears_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/src")).unwrap();
        fs.write_file(Path::new("out/src/a.ts"), "x").unwrap();

        fs.remove_dir_all(Path::new("out")).unwrap();
        assert!(!fs.exists(Path::new("out")));
        assert!(!fs.exists(Path::new("out/src")));
        assert!(fs.list_files().is_empty());
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(clone.exists(Path::new("a")));
        assert_eq!(clone.list_directories(), [PathBuf::from("a")]);
    }
}
