//! The [`Rule`] capability.
//!
//! A rule is one independent piece of scoring logic: it looks at a request
//! and returns how much it raises (or, if negative, lowers) the aggregate
//! risk score. The [`Evaluator`](crate::evaluator::Evaluator) sums the
//! contributions of every registered rule.

use rev_core::types::{RiskEvaluationRequest, Score};

/// Trait for individual scoring rules.
///
/// Implementations must be pure: the same request content always yields the
/// same contribution, and no state is kept between calls. A rule that cannot
/// reach a decision (missing attribute, unparseable value) returns `0`
/// instead of failing, so the remaining rules still get to vote.
pub trait Rule: Send + Sync {
    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Contribution of this rule to the aggregate score.
    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score;
}

impl<F> Rule for (&'static str, F)
where
    F: Fn(&RiskEvaluationRequest) -> Score + Send + Sync,
{
    fn name(&self) -> &str {
        self.0
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        (self.1)(request)
    }
}

/// Case-insensitive membership test used by list-based rules.
pub(crate) fn contains_ignore_case(list: &[String], needle: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(needle))
}
