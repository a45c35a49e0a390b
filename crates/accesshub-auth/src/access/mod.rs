//! Role-module access evaluation.

pub mod evaluator;

pub use evaluator::{AccessDecision, AccessEvaluator, DenyReason};
