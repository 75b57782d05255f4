//! WorldData aggregate - every world entity, keyed by identifier
//!
//! Entities reference each other by identifier only, never by embedding.
//! That keeps the collections independently editable and makes
//! dangling-reference validation meaningful.
//!
//! Collections are `BTreeMap` so that walking a world always visits
//! entities in the same order. The validation engine's idempotence
//! guarantee (identical input, byte-identical report) rests on this.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Character, District, Faction, Item, Location, Sleuth};
use crate::ids::{CharacterId, DistrictId, FactionId, ItemId, LocationId};

/// Aggregate root holding all world entities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldData {
    pub districts: BTreeMap<DistrictId, District>,
    pub locations: BTreeMap<LocationId, Location>,
    pub factions: BTreeMap<FactionId, Faction>,
    pub characters: BTreeMap<CharacterId, Character>,
    pub items: BTreeMap<ItemId, Item>,
    /// The single detective, if one has been authored yet
    pub sleuth: Option<Sleuth>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for WorldData {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            districts: BTreeMap::new(),
            locations: BTreeMap::new(),
            factions: BTreeMap::new(),
            characters: BTreeMap::new(),
            items: BTreeMap::new(),
            sleuth: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl WorldData {
    /// Create an empty world (first-run state)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_district(&mut self, district: District) {
        self.districts.insert(district.id.clone(), district);
    }

    pub fn insert_location(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    pub fn insert_faction(&mut self, faction: Faction) {
        self.factions.insert(faction.id.clone(), faction);
    }

    pub fn insert_character(&mut self, character: Character) {
        self.characters.insert(character.id.clone(), character);
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn has_character(&self, id: &CharacterId) -> bool {
        self.characters.contains_key(id)
    }

    pub fn has_location(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    pub fn has_item(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Total number of entities across all collections
    pub fn entity_count(&self) -> usize {
        self.districts.len()
            + self.locations.len()
            + self.factions.len()
            + self.characters.len()
            + self.items.len()
            + usize::from(self.sleuth.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }
}
