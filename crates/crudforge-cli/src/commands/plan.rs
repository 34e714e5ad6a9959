//! Implementation of the `crudforge plan` command.
//!
//! Builds the same plan `new` would write and prints it.  Nothing touches
//! the filesystem.

use tracing::instrument;

use crudforge_core::{
    application::PlanBuilder,
    domain::{
        DerivedNames, EntitySchema, Layer, ProjectPlan, entities::settings::DEFAULT_PROJECT_NAME,
        templates::ir::route_table,
    },
};

use crate::{
    cli::{PlanArgs, PlanFormat},
    commands::input,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let schema = input::entity_schema(&args.entity, &config)?;
    let name = args.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME);
    let settings = input::project_settings(&args.project, &config, name);

    let plan = PlanBuilder::new(settings).build(&schema)?;

    let format = if output.wants_json() {
        PlanFormat::Json
    } else {
        args.format
    };

    match format {
        PlanFormat::Tree => print_tree(&plan, &schema, &output)?,
        PlanFormat::Paths => {
            for artifact in plan.artifacts() {
                output.data(&artifact.path.to_string())?;
            }
        }
        PlanFormat::Json => output.data(&to_json(&plan)?)?,
    }

    Ok(())
}

pub fn to_json(plan: &ProjectPlan) -> CliResult<String> {
    serde_json::to_string_pretty(plan).map_err(|e| CliError::IoError {
        message: "failed to serialise plan".into(),
        source: e.into(),
    })
}

/// Human summary: directories, files with sizes, and the HTTP routes.
pub fn print_tree(plan: &ProjectPlan, schema: &EntitySchema, out: &OutputManager) -> CliResult<()> {
    out.header(&format!(
        "{} directories, {} files, {} bytes",
        plan.directory_count(),
        plan.artifact_count(),
        plan.total_size()
    ))?;

    for dir in plan.directories() {
        out.print(&format!("  {dir}/"))?;
    }
    for artifact in plan.artifacts() {
        out.print(&format!(
            "  {:<40} {}",
            artifact.path.to_string(),
            out.dim(&format!("{} B", artifact.size()))
        ))?;
    }

    let names = DerivedNames::derive(schema.name())?;
    out.print("")?;
    out.header("Routes")?;
    for binding in route_table(&names.module_binding(Layer::Controller)) {
        out.print(&format!(
            "  {:<28} {}",
            binding.describe(&names),
            out.dim(&binding.handler)
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudforge_core::domain::{LogicalType, ProjectSettings};

    #[test]
    fn json_lists_artifacts_in_plan_order() {
        let schema = EntitySchema::builder("Product")
            .field("name", LogicalType::String)
            .build()
            .unwrap();
        let plan = PlanBuilder::new(ProjectSettings::new("shop"))
            .build(&schema)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&to_json(&plan).unwrap()).unwrap();
        let artifacts = json["artifacts"].as_array().unwrap();
        assert_eq!(artifacts.len(), 9);
        assert_eq!(artifacts[0]["layer"], "model");
        assert_eq!(artifacts[0]["path"], "src/models/product.ts");
        assert_eq!(json["directories"][0], "src");
    }
}
