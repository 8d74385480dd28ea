//! # rev-core
//!
//! Shared types and utilities for the risk evaluator.
//!
//! This crate provides the building blocks used by the other crates in the
//! workspace: the `Evaluate` request/reply messages, the [`RiskLevel`]
//! classification, the call-scoped [`Baggage`] context, layered
//! configuration, and the logging setup.
//!
//! [`RiskLevel`]: types::RiskLevel
//! [`Baggage`]: types::Baggage

pub mod config;
pub mod logging;
pub mod types;
