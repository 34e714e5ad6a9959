//! `crudforge`: generate a layered CRUD project for one entity.
//!
//! Exit codes: 0 success, 1 internal, 2 bad input, 3 unknown config key,
//! 4 configuration. Argument errors use clap's own code (2).

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Also reached for --help and --version, which exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("crudforge: {e}");
        return ExitCode::FAILURE;
    }

    let report = ErrorReport::from(&cli.global);
    let config = AppConfig::load(cli.global.config.as_ref());
    match config.and_then(|config| run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report.emit(&err),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(&cli.global, &config);
    debug!(command = ?cli.command, "Dispatching");

    match cli.command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Plan(args) => commands::plan::execute(args, config, output),
        Commands::Types(args) => commands::types::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(sub) => commands::config::execute(sub, cli.global, config, output),
    }
}

/// How a failed run is shown on stderr.
struct ErrorReport {
    verbose: bool,
    colored: bool,
}

impl From<&GlobalArgs> for ErrorReport {
    fn from(args: &GlobalArgs) -> Self {
        use std::io::IsTerminal as _;
        Self {
            verbose: args.verbose > 0,
            colored: !args.no_color && std::io::stderr().is_terminal(),
        }
    }
}

impl ErrorReport {
    fn emit(&self, err: &CliError) -> ExitCode {
        err.log();
        eprint!("{}", err.render(self.verbose, self.colored));
        ExitCode::from(err.exit_code())
    }
}
