//! Sleuth entity - the world's single player-facing detective

use serde::{Deserialize, Serialize};

use crate::ids::{LocationId, SleuthId};
use crate::named::NamedEntity;

/// The detective. A world holds at most one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sleuth {
    pub id: SleuthId,
    pub name: String,
    pub description: String,
    /// Office, flat, or favorite bar the sleuth operates from
    pub home_base: Option<LocationId>,
}

impl Sleuth {
    pub fn new(id: SleuthId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            home_base: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_home_base(mut self, location: LocationId) -> Self {
        self.home_base = Some(location);
        self
    }
}

impl NamedEntity for Sleuth {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn kind(&self) -> &'static str {
        "Sleuth"
    }
}
