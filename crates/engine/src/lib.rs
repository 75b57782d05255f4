//! CaseWright engine - storage, repositories, and the validation engine.
//!
//! The engine reads and writes world/case snapshots through the storage
//! ports and checks them with a rule-based validation engine. Validation
//! is pure and synchronous over an in-memory snapshot; only the
//! repositories perform I/O.


pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use infrastructure::persistence::{JsonCaseStore, JsonWorldStore};
pub use infrastructure::ports::{CaseBatch, CaseStore, SkippedRecord, StorageError, WorldStore};
pub use repositories::{CaseRepository, WorldLoadOutcome, WorldRepository};
pub use use_cases::validation::{
    Evaluator, RegisteredRule, RuleEvaluationError, RuleRegistry, ValidationEngine,
};
