//! CaseWright domain layer - pure data, no I/O.
//!
//! Holds the world and case entity model, identifier newtypes, and the
//! validation value objects (rules and findings). Everything here is
//! constructible in any state; referential integrity is checked after the
//! fact by the engine crate, never at construction time.

pub mod entities;
pub mod error;
pub mod ids;
pub mod named;
pub mod validation;

pub use entities::{
    CaseFile, CaseLocation, Character, Clue, District, Faction, GroundTruth, Interview, Item,
    Location, Sleuth, Suspect, Witness, WorldData,
};
pub use error::DomainError;
pub use ids::{
    CaseId, CharacterId, ClueId, DistrictId, FactionId, ItemId, LocationId, SleuthId,
};
pub use named::NamedEntity;
pub use validation::{Finding, Rule, RuleCategory, Severity};
