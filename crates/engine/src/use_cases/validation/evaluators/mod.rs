//! Rule evaluators - one pure function per registered rule.
//!
//! Evaluators share no mutable state and perform no I/O, so they can run
//! in any order (or in parallel) and are unit-tested one rule at a time.

pub mod deception;
pub mod ground_truth;
pub mod playability;
pub mod referential;
