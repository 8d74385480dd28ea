//! Disposable mailbox rule.
//!
//! Throwaway mailbox providers are a common ingredient of fake sign-ups, so
//! an address hosted on one of them raises the score by a fixed weight.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::{contains_ignore_case, Rule};

/// Adds `weight` when the email domain is a known disposable provider.
pub struct DisposableDomainRule {
    /// Provider domains, compared case-insensitively.
    pub domains: Vec<String>,
    /// Contribution on a match.
    pub weight: Score,
}

impl Rule for DisposableDomainRule {
    fn name(&self) -> &str {
        "disposable_domain"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        match request.email_domain() {
            Some(domain) if contains_ignore_case(&self.domains, domain) => self.weight,
            // No domain to judge: neutral.
            _ => 0,
        }
    }
}
