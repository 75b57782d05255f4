//! Clue records - the evidence a case is solved with

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ClueId, ItemId, LocationId};

/// One piece of evidence in a case
///
/// `clue_id` is unique within its case; ground truth and interviews point
/// at clues by this id. Associations are optional and resolve against the
/// world collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    pub clue_id: ClueId,
    /// One-line description shown in the clue list
    pub summary: String,
    /// Where or how the sleuth obtains it
    pub source: String,
    pub item: Option<ItemId>,
    pub location: Option<LocationId>,
    pub character: Option<CharacterId>,
    /// Character whose lie this clue exposes, if it is debunking evidence
    pub debunks_character: Option<CharacterId>,
}

impl Clue {
    pub fn new(clue_id: ClueId, summary: impl Into<String>) -> Self {
        Self {
            clue_id,
            summary: summary.into(),
            source: String::new(),
            item: None,
            location: None,
            character: None,
            debunks_character: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_location(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_character(mut self, character: CharacterId) -> Self {
        self.character = Some(character);
        self
    }

    pub fn debunking(mut self, character: CharacterId) -> Self {
        self.debunks_character = Some(character);
        self
    }
}
