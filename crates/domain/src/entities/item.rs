//! Item entity - objects that can serve as evidence or murder weapons

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ItemId, LocationId};
use crate::named::NamedEntity;

/// An object in the world
///
/// A data-carrying struct with no invariants to protect. All fields are
/// public because any combination of values is a valid authoring state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Where the item normally rests
    pub default_location: Option<LocationId>,
    /// Who normally holds it
    pub default_owner: Option<CharacterId>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            default_location: None,
            default_owner: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default_location(mut self, location: LocationId) -> Self {
        self.default_location = Some(location);
        self
    }

    pub fn with_default_owner(mut self, owner: CharacterId) -> Self {
        self.default_owner = Some(owner);
        self
    }
}

impl NamedEntity for Item {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "Item"
    }
}
