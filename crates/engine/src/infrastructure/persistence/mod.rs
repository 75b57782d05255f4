//! Concrete storage implementations.

pub mod json_store;

pub use json_store::{JsonCaseStore, JsonWorldStore};
