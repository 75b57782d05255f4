//! Location entity - places where scenes, crimes, and interviews happen

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, DistrictId, FactionId, ItemId, LocationId};
use crate::named::NamedEntity;

/// A place in the world
///
/// All relationships to other entities are held as identifiers, never as
/// embedded records. A location may reference a district, faction,
/// character, or item that does not (yet) exist; editing is allowed to pass
/// through transiently-invalid states and the validation engine reports
/// them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    /// District this location sits in
    pub district: Option<DistrictId>,
    /// Faction that owns or controls the premises
    pub owning_faction: Option<FactionId>,
    /// Characters strongly associated with this place
    pub key_characters: Vec<CharacterId>,
    /// Items usually found here
    pub associated_items: Vec<ItemId>,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            district: None,
            owning_faction: None,
            key_characters: Vec::new(),
            associated_items: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_district(mut self, district: DistrictId) -> Self {
        self.district = Some(district);
        self
    }

    pub fn with_owning_faction(mut self, faction: FactionId) -> Self {
        self.owning_faction = Some(faction);
        self
    }
}

impl NamedEntity for Location {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "Location"
    }
}
