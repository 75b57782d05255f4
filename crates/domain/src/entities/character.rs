//! Character entity - the people of the world
//!
//! Characters are the most heavily cross-referenced entity kind: factions,
//! districts, other characters, and items are all held by identifier.
//! Cases reference characters (victim, culprit, suspects, witnesses) by the
//! same identifiers, so a character record is shared across every case that
//! mentions it.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, DistrictId, FactionId, ItemId};
use crate::named::NamedEntity;

/// A person in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub full_name: String,
    pub description: String,
    pub occupation: Option<String>,
    /// Faction membership, if any
    pub faction: Option<FactionId>,
    /// Home district
    pub district: Option<DistrictId>,
    pub allies: Vec<CharacterId>,
    pub enemies: Vec<CharacterId>,
    /// Items this character carries or owns
    pub items: Vec<ItemId>,
}

impl Character {
    pub fn new(id: CharacterId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            description: String::new(),
            occupation: None,
            faction: None,
            district: None,
            allies: Vec::new(),
            enemies: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn with_faction(mut self, faction: FactionId) -> Self {
        self.faction = Some(faction);
        self
    }

    pub fn with_district(mut self, district: DistrictId) -> Self {
        self.district = Some(district);
        self
    }
}

impl NamedEntity for Character {
    fn display_name(&self) -> &str {
        &self.full_name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "Character"
    }
}
