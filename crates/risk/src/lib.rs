//! # rev-risk
//!
//! Rule-based risk scoring. Every request is scored by an ordered, fixed set
//! of independent [`Rule`]s; the [`Evaluator`] sums their contributions,
//! classifies the total into a risk level, and reports the outcome to an
//! [`EvaluationSink`].

pub mod evaluator;
pub mod rule;
pub mod rules;
pub mod sink;

pub use evaluator::Evaluator;
pub use rule::Rule;
pub use sink::{EvaluationOutcome, EvaluationSink, NoopSink, TracingSink};
