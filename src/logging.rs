//! Tracing subscriber initialization for the stepviz binary.
//!
//! Wires the `-v`/`-q` flags and the `STEPVIZ_LOG`/`RUST_LOG` environment
//! variables into a single `tracing-subscriber` stack writing to stderr.
//!
//! # Priority (highest to lowest)
//!
//! 1. `STEPVIZ_LOG` env var (per-target directives, e.g. `stepviz::engine=trace`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` → debug, `-q` → error)
//! 4. Default level: `warn`
//!
//! While the TUI owns the terminal, log lines written to a terminal stderr would
//! tear the screen, so they are discarded unless stderr is redirected.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "STEPVIZ_LOG";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `-q`: only errors.
    Quiet,
    /// Default: warnings and above.
    Normal,
    /// `-v`: debug-level output.
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from the parsed CLI flags; verbose wins over quiet.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, early in `main`. `interactive` is true when the TUI will take over
/// the terminal.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_subscriber(verbosity: Verbosity, interactive: bool) {
    let filter = build_env_filter(verbosity);

    let stderr_is_tty = std::io::stderr().is_terminal();
    let writer = if interactive && stderr_is_tty {
        BoxMakeWriter::new(std::io::sink)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(stderr_is_tty)
        .with_target(true)
        .with_level(true);

    if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time().compact())
            .init();
    }
}

/// Build an `EnvFilter` respecting `STEPVIZ_LOG` > `RUST_LOG` > CLI verbosity.
///
/// Unparseable directives fall through to the next source.
pub fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    let directive = if verbosity == Verbosity::Verbose {
        format!("{level},stepviz=debug")
    } else {
        level.to_string()
    };

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}
