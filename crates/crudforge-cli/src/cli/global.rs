//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG` overrides.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors and requested data reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and command results"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colors")]
    pub no_color: bool,

    /// Config file to load instead of the platform default. Must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Use this config file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render output"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level selected by `-q` / `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering mode for messages and results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colors and symbols.
    Human,
    /// No ANSI escapes.
    Plain,
    /// `plan`, `types` and `config list` print JSON.
    Json,
}
