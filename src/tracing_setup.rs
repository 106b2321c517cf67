//! Tracing setup.
//!
//! The interactive viewer owns the terminal, so its logs go to a file or
//! nowhere. The `build` subcommand logs to stderr. `RUST_LOG` overrides the
//! level either way.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Use debug level unless RUST_LOG says otherwise
    pub debug: bool,
    pub target: LogTarget,
}

fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

pub fn init_tracing(config: &TracingConfig) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.debug)));

    match &config.target {
        LogTarget::Discard => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.debug)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .map_err(|e| -> Box<dyn Error> { e }),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(config.debug)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| -> Box<dyn Error> { e })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "info");
    }

    #[test]
    fn test_discard_installs_nothing() {
        let config = TracingConfig {
            debug: false,
            target: LogTarget::Discard,
        };
        assert!(init_tracing(&config).is_ok());
    }
}
