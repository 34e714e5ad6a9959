//! Implementation of the `crudforge types` command.

use serde::Serialize;

use crudforge_core::domain::{
    SyntaxProfile, TypeMapper,
    type_mapper::{TYPE_REGISTRY, TypeDef},
};

use crate::{
    cli::{ListFormat, TypesArgs},
    error::CliResult,
    output::OutputManager,
};

/// One registry entry as shown to the user.
#[derive(Debug, Serialize)]
struct TypeRow {
    name: &'static str,
    aliases: &'static [&'static str],
    schema: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<&'static str>,
}

impl TypeRow {
    fn new(def: &TypeDef, mapper: TypeMapper) -> Self {
        let token = mapper.map(def.logical);
        Self {
            name: def.logical.as_str(),
            aliases: def.aliases,
            schema: token.schema,
            annotation: token.annotation,
        }
    }
}

pub fn execute(args: TypesArgs, output: OutputManager) -> CliResult<()> {
    let profile = SyntaxProfile::from(args.profile);
    let mapper = TypeMapper::for_profile(profile);
    let rows: Vec<TypeRow> = TYPE_REGISTRY
        .iter()
        .map(|def| TypeRow::new(def, mapper))
        .collect();

    let format = if output.wants_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Field types ({profile}):"))?;
            for row in &rows {
                let annotation = row
                    .annotation
                    .map(|a| format!("  : {a}"))
                    .unwrap_or_default();
                output.print(&format!(
                    "  {:<8} {:<32}{}  {}",
                    row.name,
                    row.schema,
                    annotation,
                    output.dim(&format!("aliases: {}", row.aliases.join(", ")))
                ))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.data(row.name)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
            output.data(&json)?;
        }
        ListFormat::Csv => {
            output.data("name,schema,annotation,aliases")?;
            for row in &rows {
                output.data(&format!(
                    "{},{},{},{}",
                    row.name,
                    row.schema,
                    row.annotation.unwrap_or(""),
                    row.aliases.join(" ")
                ))?;
            }
        }
    }

    Ok(())
}
