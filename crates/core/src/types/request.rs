//! Request and reply messages of the `Evaluate` operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::level::RiskLevel;

/// One client record submitted for evaluation.
///
/// The email is carried as-is; its format is never validated here, and a
/// record without one is still evaluated (rules treat it as neutral). Any
/// other client data travels in `attributes`, which rules read by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEvaluationRequest {
    /// Client email address; empty when the caller omits it.
    #[serde(default)]
    pub email: String,
    /// Additional client attributes (e.g. `country`, `signups_last_hour`).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl RiskEvaluationRequest {
    /// Create a request with only an email and no attributes.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a client attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Domain part of the email: everything after the last `@`.
    ///
    /// Returns `None` if there is no `@` or nothing follows it.
    pub fn email_domain(&self) -> Option<&str> {
        let (_, domain) = self.email.trim().rsplit_once('@')?;
        if domain.is_empty() {
            None
        } else {
            Some(domain)
        }
    }

    /// Local part of the email: everything before the last `@`.
    pub fn email_local_part(&self) -> Option<&str> {
        let (local, _) = self.email.trim().rsplit_once('@')?;
        if local.is_empty() {
            None
        } else {
            Some(local)
        }
    }
}

/// Outcome of one evaluation. Only the classification is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvaluationReply {
    /// Risk classification for the evaluated request.
    pub risk_level: RiskLevel,
}

impl RiskEvaluationReply {
    pub fn new(risk_level: RiskLevel) -> Self {
        Self { risk_level }
    }
}
