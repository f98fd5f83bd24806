//! Structured logging initialization for the snippets CLI.
//!
//! Records go to an append-only log file by default so that stdout and stderr
//! stay reserved for command output. `--log-stderr` switches to the terminal.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogTarget;
use crate::error::{Result, SnipError};

/// Filter directive used when `RUST_LOG` is not set.
///
/// | Target | quiet | -v count | Directive |
/// |--------|-------|----------|-----------|
/// | any | yes | any | `snippets=error` |
/// | File | no | 0-2 | `snippets=debug` |
/// | File | no | 3+ | `snippets=trace` |
/// | Stderr | no | 0 | `snippets=warn` |
/// | Stderr | no | 1 | `snippets=info` |
/// | Stderr | no | 2 | `snippets=debug` |
/// | Stderr | no | 3+ | `snippets=trace` |
pub const fn default_directive(target: &LogTarget, verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "snippets=error";
    }
    match (target, verbose) {
        (LogTarget::File(_), 0..=2) | (LogTarget::Stderr, 2) => "snippets=debug",
        (LogTarget::Stderr, 0) => "snippets=warn",
        (LogTarget::Stderr, 1) => "snippets=info",
        _ => "snippets=trace",
    }
}

/// Initialize the tracing subscriber.
///
/// # Arguments
///
/// * `target` - Log file or stderr
/// * `robot_mode` - If true, stderr records are JSON lines
/// * `verbose` - Number of `-v` flags
/// * `quiet` - If true, only errors are recorded
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "snippets=trace")
pub fn init_logging(target: &LogTarget, robot_mode: bool, verbose: u8, quiet: bool) -> Result<()> {
    let default = default_directive(target, verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    SnipError::Other(format!("Failed to open log file {}: {e}", path.display()))
                })?;

            let fmt_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_span_events(FmtSpan::NONE)
                .with_writer(Mutex::new(file));

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogTarget::Stderr if robot_mode => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .with_writer(io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogTarget::Stderr if io::stderr().is_terminal() => {
            let fmt_layer = fmt::layer()
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .with_writer(io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogTarget::Stderr => {
            let fmt_layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .compact()
                .with_writer(io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
    }

    Ok(())
}
