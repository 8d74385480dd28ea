//! Risk evaluator.
//!
//! Every request is scored by all registered [`Rule`] implementations. The
//! contributions are summed and the total is classified into a
//! [`RiskLevel`]. Unlike a reject-on-first-failure pipeline, no rule can
//! short-circuit evaluation: a rule that panics is isolated and counts as a
//! zero contribution.

use std::panic::{self, AssertUnwindSafe};

use rev_core::types::{
    Baggage, RiskEvaluationReply, RiskEvaluationRequest, RiskLevel, Score,
};

use crate::rule::Rule;
use crate::sink::{EvaluationOutcome, EvaluationSink, TracingSink};

/// Scores requests against a fixed rule set.
///
/// Rules are registered at startup; once the evaluator is shared (typically
/// behind an `Arc`) it is only read, so concurrent evaluations need no
/// locking.
pub struct Evaluator {
    rules: Vec<Box<dyn Rule>>,
    sink: Box<dyn EvaluationSink>,
}

impl Evaluator {
    /// Create an evaluator over `rules` that reports to [`TracingSink`].
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the observability sink.
    pub fn with_sink(mut self, sink: impl EvaluationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Append a rule to the rule set.
    pub fn add_rule(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the registered rules, in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Aggregate score of `request`, saturated to the `i64` range.
    pub fn score(&self, request: &RiskEvaluationRequest) -> Score {
        saturate(self.exact_score(request))
    }

    /// Evaluate a request and classify it.
    ///
    /// Always returns a reply. The outcome is reported to the sink after
    /// classification; nothing the sink does can change the reply.
    pub fn evaluate(
        &self,
        request: &RiskEvaluationRequest,
        baggage: &Baggage,
    ) -> RiskEvaluationReply {
        let client_id = baggage.client_id();
        tracing::info!(
            email = %request.email,
            client_id = client_id.unwrap_or(""),
            "evaluating risk"
        );

        let total = self.exact_score(request);
        let level = RiskLevel::from_score(total);
        let score = saturate(total);

        tracing::info!(
            email = %request.email,
            score,
            level = %level,
            "risk level computed"
        );

        let outcome = EvaluationOutcome {
            email: &request.email,
            client_id,
            score,
            level,
        };
        if panic::catch_unwind(AssertUnwindSafe(|| self.sink.record(&outcome))).is_err() {
            tracing::warn!("evaluation sink panicked, annotation dropped");
        }

        RiskEvaluationReply::new(level)
    }

    /// Exact sum of all rule contributions.
    ///
    /// Accumulating in `i128` keeps the sum free of overflow, so the result
    /// does not depend on rule order.
    fn exact_score(&self, request: &RiskEvaluationRequest) -> i128 {
        self.rules
            .iter()
            .map(|rule| contribution(rule.as_ref(), request) as i128)
            .sum()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Run one rule, degrading a panic to a neutral contribution.
fn contribution(rule: &dyn Rule, request: &RiskEvaluationRequest) -> Score {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(request))) {
        Ok(score) => {
            tracing::debug!(rule = rule.name(), score, "rule evaluated");
            score
        }
        Err(_) => {
            tracing::warn!(rule = rule.name(), "rule panicked, contributing zero");
            0
        }
    }
}

fn saturate(total: i128) -> Score {
    Score::try_from(total).unwrap_or(if total > 0 { Score::MAX } else { Score::MIN })
}
