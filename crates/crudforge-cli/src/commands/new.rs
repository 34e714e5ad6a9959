//! Implementation of the `crudforge new` command.
//!
//! Responsibility: translate CLI arguments into an entity schema and
//! project settings, call the core services, and display results.  No
//! generation logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use crudforge_adapters::LocalFilesystem;
use crudforge_core::{
    application::{PlanBuilder, ScaffoldService},
    domain::{EntitySchema, ProjectSettings, SyntaxProfile},
};

use crate::{
    cli::NewArgs,
    commands::{input, plan::print_tree},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudforge new` command.
///
/// 1. Derive the package name from the output path
/// 2. Resolve the entity and the project settings
/// 3. Build the plan (all validation happens here)
/// 4. Confirm with the user unless `--yes`, `--quiet` or `--dry-run`
/// 5. Print the plan and stop if `--dry-run`
/// 6. Write the plan through the local filesystem adapter
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project_name = input::project_name(&args.path)?;
    let schema = input::entity_schema(&args.entity, &config)?;
    let settings = input::project_settings(&args.project, &config, &project_name);

    debug!(
        entity = schema.name(),
        fields = schema.fields().len(),
        profile = %settings.profile,
        "Inputs resolved"
    );

    let plan = PlanBuilder::new(settings.clone()).build(&schema)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{project_name}' at {}",
            args.path.display()
        ))?;
        print_tree(&plan, &schema, &output)?;
        return Ok(());
    }

    if !output.is_quiet() && !args.yes {
        show_configuration(&schema, &settings, &args.path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, "Scaffold started");

    let report = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .with_overwrite(args.force)
        .emit(&plan, &args.path)?;

    output.success(&format!(
        "Project '{project_name}' created: {} files, {} bytes",
        report.files, report.bytes
    ))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.path.display()))?;
    output.print("  npm install")?;
    output.print("  npm run dev")?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    schema: &EntitySchema,
    settings: &ProjectSettings,
    path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let language = match settings.profile {
        SyntaxProfile::Typed => "TypeScript (ES modules)",
        SyntaxProfile::Untyped => "JavaScript (CommonJS)",
    };
    let fields = if schema.fields().is_empty() {
        "(none)".to_string()
    } else {
        schema
            .fields()
            .iter()
            .map(|f| format!("{}:{}", f.name, f.logical_type))
            .collect::<Vec<_>>()
            .join(", ")
    };

    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", settings.project_name))?;
    out.print(&format!("  Entity:    {}", schema.name()))?;
    out.print(&format!("  Fields:    {fields}"))?;
    out.print(&format!("  Id field:  {}", schema.id_field()))?;
    out.print(&format!("  Syntax:    {language}"))?;
    out.print(&format!("  Port:      {}", settings.port))?;
    out.print(&format!("  Database:  {}", settings.database_url))?;
    out.print(&format!("  Location:  {}", path.display()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    use crate::error::IntoCli;

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&input))
}

#[cfg(any(not(feature = "interactive"), test))]
fn is_yes(input: &str) -> bool {
    let input = input.trim().to_ascii_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

// ── Tests ─────────────────────────────────────────────────────────────────────
