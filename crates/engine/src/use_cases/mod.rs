//! Use cases - the engine's application logic.

pub mod validation;

pub use validation::{RuleEvaluationError, RuleRegistry, ValidationEngine};
