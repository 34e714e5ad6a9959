use super::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// A `/`-separated path guaranteed to be relative.
///
/// Invariant: never absolute, never empty, no `..` segments. Enforced at
/// construction. Stored as text so plans render identically on every
/// platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let escapes = path.split('/').any(|segment| segment == "..");
        if path.is_empty() || path.starts_with('/') || Path::new(&path).is_absolute() || escapes {
            return Err(DomainError::AbsolutePathNotAllowed { path });
        }
        Ok(Self(path.trim_end_matches('/').to_string()))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: &str) -> Result<Self, DomainError> {
        Self::try_new(format!("{}/{}", self.0, segment))
    }

    /// The containing directory, `None` when the path sits at the root.
    pub fn parent(&self) -> Option<RelativePath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| RelativePath(parent.to_string()))
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Number of `/`-separated segments.
    pub fn depth(&self) -> usize {
        self.0.split('/').count()
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relative() {
        let p = RelativePath::try_new("src/models/product.ts").unwrap();
        assert_eq!(p.as_path(), Path::new("src/models/product.ts"));
        assert_eq!(p.file_name(), "product.ts");
        assert_eq!(p.depth(), 3);
    }

    #[test]
    fn rejects_absolute_empty_and_escaping() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("").is_err());
        assert!(RelativePath::try_new("src/../../etc").is_err());
    }

    #[test]
    fn parent_walks_up_one_segment() {
        let p = RelativePath::try_new("src/routes/productRouter.ts").unwrap();
        assert_eq!(p.parent().unwrap().as_str(), "src/routes");
        assert_eq!(p.parent().unwrap().parent().unwrap().as_str(), "src");
        assert!(RelativePath::try_new("package.json").unwrap().parent().is_none());
    }

    #[test]
    fn join_keeps_invariant() {
        let base = RelativePath::try_new("src").unwrap();
        assert_eq!(base.join("index.ts").unwrap().as_str(), "src/index.ts");
        assert!(base.join("../x").is_err());
    }
}
