//! Message and classification types shared by the rule engine and the
//! service boundary.

pub mod context;
pub mod level;
pub mod request;

// Re-export primary types for convenient access via `rev_core::types::*`.
pub use context::{Baggage, CLIENT_ID_KEY};
pub use level::{RiskLevel, Score, UnknownRiskLevel, LOW_MAX_SCORE, MEDIUM_MAX_SCORE};
pub use request::{RiskEvaluationReply, RiskEvaluationRequest};
