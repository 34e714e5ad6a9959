//! Tracing subscriber setup.
//!
//! The library crates only emit events; this is the single place a
//! subscriber is installed. Events go to stderr so stdout stays clean for
//! `plan --format json` and friends.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const CRATES: [&str; 3] = ["crudforge", "crudforge_core", "crudforge_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(args.verbose >= 2)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

/// `crudforge=info,crudforge_core=info,...`
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        let d = directives(LevelFilter::DEBUG);
        assert_eq!(
            d,
            "crudforge=debug,crudforge_core=debug,crudforge_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_filter() {
        assert!(EnvFilter::try_new(directives(LevelFilter::WARN)).is_ok());
    }
}
