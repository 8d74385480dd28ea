//! High-risk top-level domain rule.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::{contains_ignore_case, Rule};

/// Adds `weight` when the email domain ends in a listed TLD.
pub struct HighRiskTldRule {
    /// TLDs without the leading dot (e.g. `"xyz"`).
    pub tlds: Vec<String>,
    pub weight: Score,
}

impl HighRiskTldRule {
    fn tld(domain: &str) -> Option<&str> {
        let (_, tld) = domain.trim_end_matches('.').rsplit_once('.')?;
        if tld.is_empty() {
            None
        } else {
            Some(tld)
        }
    }
}

impl Rule for HighRiskTldRule {
    fn name(&self) -> &str {
        "high_risk_tld"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        match request.email_domain().and_then(Self::tld) {
            Some(tld) if contains_ignore_case(&self.tlds, tld) => self.weight,
            _ => 0,
        }
    }
}
