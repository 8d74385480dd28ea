//! Country attribute rule.

use rev_core::types::{RiskEvaluationRequest, Score};

use crate::rule::{contains_ignore_case, Rule};

/// Request attribute holding the client's ISO 3166-1 alpha-2 country code.
pub const COUNTRY_ATTRIBUTE: &str = "country";

/// Adds `weight` when the client's `country` attribute is listed.
pub struct CountryRule {
    /// ISO country codes, compared case-insensitively.
    pub countries: Vec<String>,
    pub weight: Score,
}

impl Rule for CountryRule {
    fn name(&self) -> &str {
        "country"
    }

    fn evaluate(&self, request: &RiskEvaluationRequest) -> Score {
        match request.attribute(COUNTRY_ATTRIBUTE).map(str::trim) {
            Some(code) if contains_ignore_case(&self.countries, code) => self.weight,
            _ => 0,
        }
    }
}
