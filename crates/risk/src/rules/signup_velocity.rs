//! Sign-up velocity rule.
//!
//! The caller reports how many accounts were created from the same origin in
//! the last hour via the `signups_last_hour` attribute. Each sign-up above
//! `threshold` adds `weight_per_signup`, up to `cap`. The rule keeps no
//! counters of its own; it only reads the attribute.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::Rule;

/// Request attribute carrying the recent sign-up count.
pub const SIGNUPS_ATTRIBUTE: &str = "signups_last_hour";

/// Scores a recent sign-up burst reported by the caller.
pub struct SignupVelocityRule {
    pub threshold: u32,
    pub weight_per_signup: Score,
    pub cap: Score,
}

impl Rule for SignupVelocityRule {
    fn name(&self) -> &str {
        "signup_velocity"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        // Absent or unparseable counts are neutral.
        let Some(count) = request
            .attribute(SIGNUPS_ATTRIBUTE)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
        else {
            return 0;
        };

        let excess = Score::from(count.saturating_sub(self.threshold));
        excess.saturating_mul(self.weight_per_signup).min(self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> SignupVelocityRule {
        SignupVelocityRule {
            threshold: 3,
            weight_per_signup: 2,
            cap: 20,
        }
    }

    fn with_count(count: &str) -> RiskEvaluationRequest {
        RiskEvaluationRequest::new("a@b.c").with_attribute(SIGNUPS_ATTRIBUTE, count)
    }

    #[test]
    fn test_at_threshold_neutral() {
        assert_eq!(rule().evaluate(&with_count("3")), 0);
        assert_eq!(rule().evaluate(&with_count("0")), 0);
    }

    #[test]
    fn test_above_threshold_scales() {
        assert_eq!(rule().evaluate(&with_count("4")), 2);
        assert_eq!(rule().evaluate(&with_count("8")), 10);
    }

    #[test]
    fn test_contribution_is_capped() {
        assert_eq!(rule().evaluate(&with_count("100")), 20);
        assert_eq!(rule().evaluate(&with_count("4294967295")), 20);
    }

    #[test]
    fn test_unparseable_count_neutral() {
        assert_eq!(rule().evaluate(&with_count("many")), 0);
        assert_eq!(rule().evaluate(&with_count("-4")), 0);
        assert_eq!(rule().evaluate(&with_count("")), 0);
    }

    #[test]
    fn test_missing_attribute_neutral() {
        assert_eq!(rule().evaluate(&RiskEvaluationRequest::new("a@b.c")), 0);
    }
}
