// SPDX-License-Identifier: PMPL-1.0-or-later

//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary. Logs go to stderr so they never mix with lookup output.
//!
//! # Log Levels
//!
//! - `warn`: default, effectively silent for normal lookups
//! - `info`: configuration sources
//! - `debug`: resolution decisions (unknown category keys, env overrides)
//! - `trace`: which matcher stage accepted or rejected a description

use anyhow::{anyhow, Result};
use std::io;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level: none is warn, then info, debug, trace.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| anyhow!("initializing logging: {err}"))
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,http_status_meaning={level},http_status={level}"
        ))
    })
}
