//! Entity modules - world assets and case assets
//!
//! All entities are plain serde records. Cross-references are held as
//! identifiers (see `crate::ids`), never as embedded entities, and
//! construction never checks referential integrity.

pub mod case_file;
pub mod character;
pub mod clue;
pub mod district;
pub mod faction;
pub mod interview;
pub mod item;
pub mod location;
pub mod sleuth;
pub mod world;

pub use case_file::{CaseFile, CaseLocation, GroundTruth};
pub use character::Character;
pub use clue::Clue;
pub use district::District;
pub use faction::Faction;
pub use interview::{Interview, Suspect, Witness};
pub use item::Item;
pub use location::Location;
pub use sleuth::Sleuth;
pub use world::WorldData;
