//! Generated-looking local part rule.
//!
//! Mass-registered accounts often use addresses like `user83920174@...`.
//! The rule counts ASCII digits in the local part and fires once the count
//! reaches `min_digits`.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::Rule;

/// Adds `weight` when the local part contains at least `min_digits` digits.
pub struct NumericLocalPartRule {
    pub min_digits: usize,
    pub weight: Score,
}

impl Rule for NumericLocalPartRule {
    fn name(&self) -> &str {
        "numeric_local_part"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        let Some(local) = request.email_local_part() else {
            return 0;
        };
        let digits = local.chars().filter(char::is_ascii_digit).count();
        if digits >= self.min_digits {
            self.weight
        } else {
            0
        }
    }
}
