//! Risk level classification and the score type rules contribute to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric contribution of a single rule, and the aggregate of all of them.
///
/// Contributions may be negative: a rule can lower the overall risk.
pub type Score = i64;

/// Highest aggregate score still classified as [`RiskLevel::Low`].
pub const LOW_MAX_SCORE: Score = 5;

/// Highest aggregate score still classified as [`RiskLevel::Medium`].
pub const MEDIUM_MAX_SCORE: Score = 20;

/// Discrete risk classification, ordered by increasing severity.
///
/// The discriminants are the wire ordinals and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum RiskLevel {
    /// Aggregate score of 5 or less.
    Low = 0,
    /// Aggregate score in `6..=20`.
    Medium = 1,
    /// Aggregate score above 20.
    High = 2,
}

impl RiskLevel {
    /// Classify an aggregate score using the fixed thresholds.
    ///
    /// Boundary values belong to the lower band: 5 is `Low`, 20 is `Medium`.
    /// Takes `i128` so an exact, unsaturated sum can be classified.
    pub fn from_score(score: impl Into<i128>) -> Self {
        let score = score.into();
        if score <= LOW_MAX_SCORE as i128 {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX_SCORE as i128 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Stable wire ordinal (`Low = 0`, `Medium = 1`, `High = 2`).
    #[inline]
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Symbolic name, as used in span events and JSON replies.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a wire ordinal does not name a [`RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown risk level ordinal: {0}")]
pub struct UnknownRiskLevel(pub i32);

impl TryFrom<i32> for RiskLevel {
    type Error = UnknownRiskLevel;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskLevel::Low),
            1 => Ok(RiskLevel::Medium),
            2 => Ok(RiskLevel::High),
            other => Err(UnknownRiskLevel(other)),
        }
    }
}

impl From<RiskLevel> for i32 {
    fn from(level: RiskLevel) -> Self {
        level.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(RiskLevel::from_score(0i64), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5i64), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(6i64), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(20i64), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(21i64), RiskLevel::High);
    }

    #[test]
    fn test_negative_scores_are_low() {
        assert_eq!(RiskLevel::from_score(-1i64), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(i64::MIN), RiskLevel::Low);
    }

    #[test]
    fn test_extreme_scores() {
        assert_eq!(RiskLevel::from_score(i64::MAX), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(i128::MAX), RiskLevel::High);
    }

    #[test]
    fn test_order_follows_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_wire_ordinals_are_stable() {
        assert_eq!(RiskLevel::Low.ordinal(), 0);
        assert_eq!(RiskLevel::Medium.ordinal(), 1);
        assert_eq!(RiskLevel::High.ordinal(), 2);
        assert_eq!(i32::from(RiskLevel::High), 2);
    }

    #[test]
    fn test_try_from_ordinal() {
        assert_eq!(RiskLevel::try_from(1), Ok(RiskLevel::Medium));
        assert_eq!(RiskLevel::try_from(3), Err(UnknownRiskLevel(3)));
        assert_eq!(RiskLevel::try_from(-1), Err(UnknownRiskLevel(-1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RiskLevel::Low), "Low");
        assert_eq!(format!("{}", RiskLevel::Medium), "Medium");
        assert_eq!(format!("{}", RiskLevel::High), "High");
    }

    #[test]
    fn test_serde_uses_symbolic_names() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let level: RiskLevel = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(level, RiskLevel::High);
    }
}
