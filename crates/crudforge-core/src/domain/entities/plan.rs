use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError, value_objects::Layer};

/// Final project plan ready for materialization.
///
/// This is the output of plan building. It contains no business logic and
/// owns no external resources, only data: directories in creation order,
/// then artifacts in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub(crate) directories: Vec<RelativePath>,
    pub(crate) artifacts: Vec<LayerArtifact>,
}

impl ProjectPlan {
    pub fn new() -> Self {
        Self {
            directories: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.directories.push(path);
    }

    pub fn add_artifact(&mut self, layer: Layer, path: RelativePath, content: String) {
        self.artifacts.push(LayerArtifact {
            layer,
            path,
            content,
        });
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_artifact(mut self, layer: Layer, path: RelativePath, content: String) -> Self {
        self.add_artifact(layer, path, content);
        self
    }

    /// Check the ordering and uniqueness guarantees emission relies on.
    ///
    /// - the plan has at least one artifact
    /// - every directory's parent is the root or listed earlier
    /// - no path is listed twice
    /// - every artifact's directory is the root or listed
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut declared: HashSet<&RelativePath> = HashSet::new();
        for dir in &self.directories {
            if let Some(parent) = dir.parent() {
                if !declared.contains(&parent) {
                    return Err(DomainError::UndeclaredDirectory {
                        path: dir.to_string(),
                    });
                }
            }
            if !declared.insert(dir) {
                return Err(DomainError::PathCollision {
                    path: dir.to_string(),
                });
            }
        }

        let mut written = HashSet::new();
        for artifact in &self.artifacts {
            if declared.contains(&artifact.path) || !written.insert(&artifact.path) {
                return Err(DomainError::PathCollision {
                    path: artifact.path.to_string(),
                });
            }
            if let Some(parent) = artifact.path.parent() {
                if !declared.contains(&parent) {
                    return Err(DomainError::UndeclaredDirectory {
                        path: artifact.path.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &LayerArtifact> {
        self.artifacts.iter()
    }

    /// The artifact produced by `layer`, if the plan has one.
    pub fn artifact(&self, layer: Layer) -> Option<&LayerArtifact> {
        self.artifacts.iter().find(|a| a.layer == layer)
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// Total bytes of generated content.
    pub fn total_size(&self) -> usize {
        self.artifacts.iter().map(LayerArtifact::size).sum()
    }
}

impl Default for ProjectPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// One generated file, produced by exactly one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerArtifact {
    pub layer: Layer,
    pub path: RelativePath,
    pub content: String,
}

impl LayerArtifact {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
