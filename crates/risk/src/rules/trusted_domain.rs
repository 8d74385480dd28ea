//! Trusted domain rule, the only built-in rule that lowers the score.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::{contains_ignore_case, Rule};

/// Applies `credit` (zero or negative) for domains of vetted clients.
pub struct TrustedDomainRule {
    pub domains: Vec<String>,
    pub credit: Score,
}

impl Rule for TrustedDomainRule {
    fn name(&self) -> &str {
        "trusted_domain"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        match request.email_domain() {
            Some(domain) if contains_ignore_case(&self.domains, domain) => self.credit,
            _ => 0,
        }
    }
}
