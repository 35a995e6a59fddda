use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Config;

/// Where tracing output goes for a given run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The TUI owns the terminal, so without a log file nothing is written
    Discard,
}

pub fn log_target(config: &Config, interactive: bool) -> LogTarget {
    match &config.log_file {
        Some(path) => LogTarget::File(path.clone()),
        None if interactive => LogTarget::Discard,
        None => LogTarget::Stderr,
    }
}

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "project_search=debug"
    } else {
        "project_search=info"
    }
}

pub fn init_tracing(config: &Config, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config.verbose).into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_target(config, interactive) {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()?;
        }
        LogTarget::Stderr => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogTarget::Discard => {
            registry.try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_wins_in_both_modes() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/project-search.log")),
            ..Config::default()
        };

        let expected = LogTarget::File(PathBuf::from("/tmp/project-search.log"));
        assert_eq!(log_target(&config, true), expected);
        assert_eq!(log_target(&config, false), expected);
    }

    #[test]
    fn test_interactive_without_file_discards() {
        let config = Config::default();

        assert_eq!(log_target(&config, true), LogTarget::Discard);
        assert_eq!(log_target(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "project_search=info");
        assert_eq!(default_directive(true), "project_search=debug");
    }
}
