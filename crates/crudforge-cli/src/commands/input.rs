//! Turning entity and project flags into core inputs.
//!
//! Precedence for every value: flag, then schema file, then config.

use std::path::Path;

use tracing::debug;

use crudforge_adapters::load_entity_spec;
use crudforge_core::domain::{EntitySchema, EntitySpec, ProjectSettings, SyntaxProfile};

use crate::{
    cli::{EntityArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Collect the raw entity description from flags or a schema file.
pub fn entity_spec(args: &EntityArgs, config: &AppConfig) -> CliResult<EntitySpec> {
    let mut spec = match (&args.schema, &args.entity) {
        (Some(path), _) => {
            debug!(path = %path.display(), "Loading entity schema");
            load_entity_spec(path)?
        }
        (None, Some(name)) => EntitySpec {
            name: name.clone(),
            fields: args.fields.clone(),
            id_field: None,
        },
        (None, None) => {
            return Err(CliError::InvalidInput {
                message: "either --entity or --schema is required".into(),
                source: None,
            });
        }
    };

    if let Some(id_field) = &args.id_field {
        spec.id_field = Some(id_field.clone());
    } else if spec.id_field.is_none() {
        spec.id_field = Some(config.defaults.id_field.clone());
    }

    Ok(spec)
}

/// Resolve and validate the entity.
pub fn entity_schema(args: &EntityArgs, config: &AppConfig) -> CliResult<EntitySchema> {
    let spec = entity_spec(args, config)?;
    Ok(EntitySchema::try_from(&spec)?)
}

/// Project settings for `project_name`.
pub fn project_settings(
    args: &ProjectArgs,
    config: &AppConfig,
    project_name: impl Into<String>,
) -> ProjectSettings {
    let profile = args
        .profile
        .map(SyntaxProfile::from)
        .unwrap_or(config.defaults.profile);

    ProjectSettings::new(project_name)
        .with_profile(profile)
        .with_port(args.port.unwrap_or(config.project.port))
        .with_database_url(
            args.database_url
                .clone()
                .unwrap_or_else(|| config.project.database_url.clone()),
        )
}

/// Package name for a project written to `path`: its last component.
pub fn project_name(path: &Path) -> CliResult<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: path.display().to_string(),
            reason: "cannot extract a directory name".into(),
        })?;

    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }

    Ok(name.to_string())
}
