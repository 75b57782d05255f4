//! Faction entity - organizations with allies, enemies, and members

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, FactionId, LocationId};
use crate::named::NamedEntity;

/// An organization in the world (gang, guild, police, church, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub description: String,
    /// Base of operations
    pub headquarters: Option<LocationId>,
    pub ally_factions: Vec<FactionId>,
    pub enemy_factions: Vec<FactionId>,
    /// Known members
    pub members: Vec<CharacterId>,
}

impl Faction {
    pub fn new(id: FactionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            headquarters: None,
            ally_factions: Vec::new(),
            enemy_factions: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_headquarters(mut self, location: LocationId) -> Self {
        self.headquarters = Some(location);
        self
    }
}

impl NamedEntity for Faction {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "Faction"
    }
}
