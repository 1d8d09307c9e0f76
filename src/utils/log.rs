// src/utils/log.rs

//! Logging initialisation.
//!
//! Library code only talks to the `log` facade. Binaries call
//! [`init_logging`] once to install a `tracing-subscriber` formatter, which
//! also picks up `log` records through its `tracing-log` bridge.

use crate::utils::error::Result;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Initializes the logging system.
///
/// Diagnostics always go to stderr; stdout belongs to the transcoded stream.
/// Colour is only used when stderr is a terminal. A second call keeps the
/// subscriber already installed and returns `Ok`.
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .is_ok();

    if !installed {
        log::debug!("logging already initialised, keeping existing subscriber");
    }
    Ok(())
}
