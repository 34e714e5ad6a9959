//! Scaffold Service - writes a project plan to a filesystem.
//!
//! Emission order follows the plan: the root, then every directory in plan
//! order, then every artifact in plan order. If any write fails and the
//! root was created by this run, the root is removed again.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, PlanBuilder, ports::Filesystem},
    domain::{DomainValidator as validator, EntitySchema, ProjectPlan, ProjectSettings},
    error::CrudforgeResult,
};

/// What an emission wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitReport {
    pub directories: usize,
    pub files: usize,
    pub bytes: usize,
}

/// Materializes [`ProjectPlan`]s through a [`Filesystem`] port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    overwrite: bool,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            overwrite: false,
        }
    }

    /// Allow writing into an existing root. Existing files at plan paths are
    /// replaced; other files are left alone.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Build the plan for `schema` and write it under `root`.
    ///
    /// Returns the plan that was written.
    pub fn scaffold(
        &self,
        schema: &EntitySchema,
        settings: &ProjectSettings,
        root: &Path,
    ) -> CrudforgeResult<ProjectPlan> {
        let plan = PlanBuilder::new(settings.clone()).build(schema)?;
        self.emit(&plan, root)?;
        Ok(plan)
    }

    #[instrument(skip_all, fields(root = %root.display(), artifacts = plan.artifact_count()))]
    pub fn emit(&self, plan: &ProjectPlan, root: &Path) -> CrudforgeResult<EmitReport> {
        validator::validate_plan(plan)?;

        let existed = self.filesystem.exists(root);
        if existed && !self.overwrite {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(plan, root) {
            Ok(report) => {
                info!(
                    directories = report.directories,
                    files = report.files,
                    bytes = report.bytes,
                    "Project written"
                );
                Ok(report)
            }
            Err(e) => {
                if existed {
                    warn!("Write failed inside an existing directory, leaving it in place");
                } else {
                    warn!("Write failed, attempting rollback");
                    self.rollback(root);
                }
                Err(e)
            }
        }
    }

    fn write_all(&self, plan: &ProjectPlan, root: &Path) -> CrudforgeResult<EmitReport> {
        let mut report = EmitReport::default();

        self.filesystem.create_dir_all(root)?;

        for dir in plan.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
            report.directories += 1;
        }

        for artifact in plan.artifacts() {
            self.filesystem
                .write_file(&root.join(&artifact.path), &artifact.content)?;
            report.files += 1;
            report.bytes += artifact.size();
        }

        Ok(report)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
