//! Repository modules - Data access wrappers around the storage ports.
//!
//! Each repository wraps a port trait and owns the recovery policy at that
//! boundary (fallback-to-empty for the world, skip-and-report for cases).

pub mod cases;
pub mod world;

pub use cases::CaseRepository;
pub use world::{WorldLoadOutcome, WorldRepository};
