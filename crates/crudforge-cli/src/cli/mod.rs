//! Command-line surface of `crudforge`, declared with clap's derive API.
//!
//! Flags are turned into domain values here (`FieldSpec`, `SyntaxProfile`)
//! so command handlers never see raw strings.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crudforge_core::domain::{FieldSpec, SyntaxProfile};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name    = "crudforge",
    bin_name = "crudforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered CRUD project generator",
    long_about = "crudforge generates a complete model/repository/service/\
                  controller/router project for one entity.",
    after_help = "EXAMPLES:\n\
        \x20 crudforge new shop --entity Product --field name:string --field price:number\n\
        \x20 crudforge new shop --schema product.toml --profile untyped\n\
        \x20 crudforge plan --entity OrderItem --format paths\n\
        \x20 crudforge completions bash > /usr/share/bash-completion/completions/crudforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project for one entity.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 crudforge new shop --entity Product --field name:string --field price:number\n\
            \x20 crudforge new shop --entity Product --id-field sku --profile js\n\
            \x20 crudforge new shop --schema product.json --dry-run"
    )]
    New(NewArgs),

    /// Show the plan for an entity without writing anything.
    #[command(
        about = "Print the generation plan",
        after_help = "EXAMPLES:\n\
            \x20 crudforge plan --entity Product --field name:string\n\
            \x20 crudforge plan --schema product.toml --format json"
    )]
    Plan(PlanArgs),

    /// List supported field types.
    #[command(
        visible_alias = "ls",
        about = "List supported field types",
        after_help = "EXAMPLES:\n\
            \x20 crudforge types\n\
            \x20 crudforge types --profile untyped --format csv"
    )]
    Types(TypesArgs),

    /// Initialise a crudforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudforge init           # default location\n\
            \x20 crudforge init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudforge completions bash > ~/.local/share/bash-completion/completions/crudforge\n\
            \x20 crudforge completions zsh  > ~/.zfunc/_crudforge\n\
            \x20 crudforge completions fish > ~/.config/fish/completions/crudforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crudforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudforge config get defaults.profile\n\
            \x20 crudforge config set project.port 8080\n\
            \x20 crudforge config list"
    )]
    Config(ConfigCommands),
}

/// Where the entity description comes from: flags or a schema file.
#[derive(Debug, Clone, Args)]
pub struct EntityArgs {
    /// Entity name, e.g. `Product` or `order_item`.
    #[arg(
        short = 'e',
        long = "entity",
        value_name = "NAME",
        required_unless_present = "schema",
        help = "Entity name"
    )]
    pub entity: Option<String>,

    /// One field as `name:type`; repeat for more fields.
    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE",
        value_parser = parse_field,
        conflicts_with = "schema",
        help = "Field as name:type (repeatable)"
    )]
    pub fields: Vec<FieldSpec>,

    /// Read the entity from a `.json` or `.toml` file.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        conflicts_with = "entity",
        help = "Entity schema file (.json or .toml)"
    )]
    pub schema: Option<PathBuf>,

    /// Identity field name (default `id`).
    #[arg(long = "id-field", value_name = "NAME", help = "Identity field name")]
    pub id_field: Option<String>,
}

/// Entity-independent project knobs. Unset flags fall back to config.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Output syntax.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        value_enum,
        help = "Output syntax profile"
    )]
    pub profile: Option<Profile>,

    /// Default port of the generated server.
    #[arg(long = "port", value_name = "PORT", help = "Default server port")]
    pub port: Option<u16>,

    /// Default database connection string of the generated server.
    #[arg(long = "database-url", value_name = "URL", help = "Default database URL")]
    pub database_url: Option<String>,
}

fn parse_field(raw: &str) -> Result<FieldSpec, String> {
    raw.parse()
}

/// Arguments for `crudforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Output directory.  Its last component becomes the package name.
    #[arg(value_name = "PATH", help = "Project directory to create")]
    pub path: PathBuf,

    #[command(flatten)]
    pub entity: EntityArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Write without asking for confirmation"
    )]
    pub yes: bool,

    /// Write into an existing directory.
    #[arg(long = "force", help = "Write into an existing directory")]
    pub force: bool,

    #[arg(long = "dry-run", help = "Print the plan instead of writing it")]
    pub dry_run: bool,
}

/// Arguments for `crudforge plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub entity: EntityArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Package name used in the manifest.
    #[arg(long = "name", value_name = "NAME", help = "Package name")]
    pub name: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Directories and files with sizes.
    Tree,
    /// One path per line.
    Paths,
    /// The full plan, including contents, as JSON.
    Json,
}

/// Arguments for `crudforge types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Show tokens for this profile.
    #[arg(short = 'p', long = "profile", value_enum, default_value = "typed")]
    pub profile: Profile,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns.
    Table,
    /// Logical type names only.
    List,
    /// Array of objects.
    Json,
    /// Header row then one row per type.
    Csv,
}

/// Arguments for `crudforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Replace a config file that already exists")]
    pub force: bool,
}

/// Arguments for `crudforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to emit a completion script for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Subcommands for `crudforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show one value, e.g. `project.port`.
    Get {
        /// Dotted key path, e.g. `defaults.profile`.
        key: String,
    },
    /// Write one value into the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Show the effective configuration.
    List,
    /// Show where the config file lives.
    Path,
}

/// Output syntax profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Profile {
    /// TypeScript with ES modules. Also accepted as `ts`.
    #[value(alias = "ts", alias = "typescript")]
    Typed,
    /// JavaScript with CommonJS. Also accepted as `js`.
    #[value(alias = "js", alias = "javascript")]
    Untyped,
}

impl From<Profile> for SyntaxProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Typed => SyntaxProfile::Typed,
            Profile::Untyped => SyntaxProfile::Untyped,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        SyntaxProfile::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_with_fields() {
        let cli = Cli::parse_from([
            "crudforge", "new", "shop", "--entity", "Product", "-f", "name:string", "-f",
            "price:number",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.entity.entity.as_deref(), Some("Product"));
        assert_eq!(args.entity.fields.len(), 2);
        assert_eq!(args.entity.fields[1].type_name, "number");
        assert!(args.project.profile.is_none());
    }

    #[test]
    fn profile_aliases() {
        let cli = Cli::parse_from(["crudforge", "plan", "-e", "Tag", "-p", "js"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected Plan command");
        };
        assert_eq!(args.project.profile, Some(Profile::Untyped));
        assert_eq!(args.format, PlanFormat::Tree);
    }

    #[test]
    fn malformed_field_is_rejected() {
        let result = Cli::try_parse_from(["crudforge", "plan", "-e", "Tag", "-f", "nocolon"]);
        assert!(result.is_err());
    }

    #[test]
    fn entity_or_schema_is_required() {
        assert!(Cli::try_parse_from(["crudforge", "plan"]).is_err());
        assert!(Cli::try_parse_from(["crudforge", "plan", "--schema", "x.json"]).is_ok());
    }

    #[test]
    fn schema_conflicts_with_inline_entity() {
        let result =
            Cli::try_parse_from(["crudforge", "plan", "-e", "Tag", "--schema", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn profile_display() {
        assert_eq!(Profile::Typed.to_string(), "typed");
        assert_eq!(Profile::Untyped.to_string(), "untyped");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["crudforge", "--quiet", "--verbose", "types"]);
        assert!(result.is_err());
    }
}
