//! Output management and formatting.
//!
//! Human-facing messages go through the styled helpers and respect
//! `--quiet`. Machine-readable results (`plan --format json`, `types`)
//! go through [`OutputManager::data`], which always writes to stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
    Header,
}

impl Tone {
    fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("\u{2713}"),
            Self::Warning => Some("\u{26a0}"),
            Self::Info => Some("\u{2139}"),
            Self::Header => None,
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().to_string(),
            Self::Warning => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
            Self::Header => text.cyan().bold().to_string(),
        }
    }
}

/// Writes messages according to quiet mode, color, and output format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format` from config; `Auto`
    /// resolves to `Human` on a TTY and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            config.output.format
        } else {
            args.output_format
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn line(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = match (tone.symbol(), self.no_color) {
            (None, true) => msg.to_owned(),
            (None, false) => tone.paint(msg),
            (Some(symbol), true) => format!("{symbol} {msg}"),
            (Some(symbol), false) => format!("{} {}", tone.paint(symbol).bold(), tone.paint(msg)),
        };
        match tone {
            Tone::Warning => self.err_term.write_line(&text),
            _ => self.term.write_line(&text),
        }
    }

    /// Unstyled message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command result meant for pipes; never suppressed.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload.trim_end_matches('\n'))
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.line(Tone::Success, msg)
    }

    /// Goes to stderr.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.line(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.line(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.line(Tone::Header, text)
    }

    /// Dimmed secondary text, e.g. sizes next to paths.
    pub fn dim(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `true` when the caller asked for JSON.
    pub fn wants_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
