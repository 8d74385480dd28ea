//! Observability sinks for evaluation outcomes.
//!
//! The evaluator reports every outcome to an [`EvaluationSink`]. Recording is
//! best effort: the evaluator isolates sink panics and the reply never
//! depends on what a sink does.

use rev_core::types::{RiskLevel, Score};

/// Name of the event emitted for each evaluation; also its metadata name.
pub const RISK_RESULT_EVENT: &str = "RiskResult";

/// Result metadata handed to a sink after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationOutcome<'a> {
    /// Email of the evaluated request.
    pub email: &'a str,
    /// Client identifier propagated via baggage, if any.
    pub client_id: Option<&'a str>,
    /// Aggregate score, saturated to the `i64` range.
    pub score: Score,
    /// Classification returned to the caller.
    pub level: RiskLevel,
}

/// Receives evaluation outcomes for observability purposes.
pub trait EvaluationSink: Send + Sync {
    fn record(&self, outcome: &EvaluationOutcome<'_>);
}

/// Annotates the current tracing span and emits a `RiskResult` event.
///
/// The span fields `evaluation.email` and `client.id` are only recorded if
/// the enclosing span declared them (see the service's `Evaluate` span);
/// otherwise recording is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EvaluationSink for TracingSink {
    fn record(&self, outcome: &EvaluationOutcome<'_>) {
        let span = tracing::Span::current();
        span.record("evaluation.email", outcome.email);
        if let Some(client_id) = outcome.client_id {
            span.record("client.id", client_id);
        }

        tracing::event!(
            name: RISK_RESULT_EVENT,
            tracing::Level::INFO,
            risk.score = outcome.score,
            risk.level = outcome.level.as_str()
        );
    }
}

/// Discards every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EvaluationSink for NoopSink {
    fn record(&self, _outcome: &EvaluationOutcome<'_>) {}
}
