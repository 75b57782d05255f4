//! District entity - a named quarter of the city

use serde::{Deserialize, Serialize};

use crate::ids::{DistrictId, FactionId, LocationId};
use crate::named::NamedEntity;

/// A district of the city, referenced by locations and characters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: DistrictId,
    pub name: String,
    pub description: String,
    /// Faction that effectively runs this district, if any
    pub dominant_faction: Option<FactionId>,
    /// Notable locations inside the district
    pub key_locations: Vec<LocationId>,
}

impl District {
    pub fn new(id: DistrictId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            dominant_faction: None,
            key_locations: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dominant_faction(mut self, faction: FactionId) -> Self {
        self.dominant_faction = Some(faction);
        self
    }
}

impl NamedEntity for District {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "District"
    }
}
