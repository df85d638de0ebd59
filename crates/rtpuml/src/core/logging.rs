//! Tracing setup for the generator and the `rtpuml` binary
//!
//! Events are emitted with `tracing` throughout the crate: an `info` span
//! per generation run, `debug` spans per package and capsule, `debug!` per
//! written document, and `warn!` when a model refers to an element that
//! has no token or a part type that cannot be found. [`init_logging`]
//! installs a subscriber writing them to stderr.
//!
//! `RTPUML_LOG_LEVEL` (or `RUST_LOG`) and `RTPUML_LOG_FORMAT` apply when no
//! explicit value is passed:
//!
//! ```bash
//! RUST_LOG="info,rtpuml::plugins::state=trace" rtpuml generate -i model.json -o out
//! RTPUML_LOG_FORMAT=json rtpuml generate -i model.json -o out 2> log.jsonl
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Output layout of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, no targets
    Compact,
    /// Multi-line with targets, source locations and span activity
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Names accepted by [`FromStr`]
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Level filter and format name after applying environment fallbacks
///
/// An explicit value wins, then `RTPUML_LOG_LEVEL`, then `RUST_LOG`, then
/// `info`; for the format, `RTPUML_LOG_FORMAT`, then `compact`.
fn effective_settings(
    level: Option<&str>,
    format: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> (String, String) {
    let level = level
        .map(str::to_string)
        .or_else(|| env("RTPUML_LOG_LEVEL"))
        .or_else(|| env("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string());
    let format = format
        .map(str::to_string)
        .or_else(|| env("RTPUML_LOG_FORMAT"))
        .unwrap_or_else(|| "compact".to_string());
    (level, format)
}

/// Install the global subscriber
///
/// `None` for `level` defers to `RTPUML_LOG_LEVEL`, then `RUST_LOG`, then
/// `info`; `None` for `format` defers to `RTPUML_LOG_FORMAT`, then
/// `compact`. An unparsable level filter falls back to `info`.
///
/// Returns an error if the format is unknown or a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (log_level, log_format) =
        effective_settings(level, format, |key| std::env::var(key).ok());

    // Checked before the global subscriber is touched
    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so generated text on stdout stays clean
    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
