//! Logging and tracing initialization for the risk evaluator.
//!
//! Provides [`init_tracing`] to configure structured logging with two modes:
//! - **JSON mode** (`json = true`): machine-readable output with nanosecond
//!   timestamps, suitable for production log aggregation.
//! - **Pretty mode** (`json = false`): human-readable colored output for
//!   local development.
//!
//! Both modes respect the `RUST_LOG` environment variable for filtering
//! (e.g., `RUST_LOG=rev_risk=debug,rev_service=info`).
//!
//! Span closings are logged, so the `Evaluate` span carries its recorded
//! `evaluation.email` and `client.id` fields into the output. Exporting
//! spans to a tracing backend is left to the deployment.

use std::fmt;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Timestamp layout used by the JSON formatter.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `json` - When `true`, emit structured JSON logs with nanosecond timestamps
///   (production mode). When `false`, emit pretty-printed logs with ANSI colors
///   (development mode).
///
/// # Panics
///
/// Panics if the global subscriber has already been set.
///
/// # Examples
///
/// ```
/// // Development mode
/// rev_core::logging::init_tracing(false);
/// ```
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(NanosecondTimer)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE);

        registry.with(json_layer).init();
    } else {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_span_events(FmtSpan::CLOSE);

        registry.with(pretty_layer).init();
    }
}

/// Custom timer that emits nanosecond-precision UTC timestamps.
#[derive(Debug, Clone)]
struct NanosecondTimer;

impl NanosecondTimer {
    fn render(now: chrono::DateTime<chrono::Utc>) -> String {
        now.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl tracing_subscriber::fmt::time::FormatTime for NanosecondTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", Self::render(chrono::Utc::now()))
    }
}
