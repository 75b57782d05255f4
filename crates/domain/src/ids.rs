use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        /// Opaque string identifier. Once assigned to an entity it never
        /// changes for that entity's lifetime.
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh identifier backed by a v4 UUID.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// World entity IDs
define_id!(DistrictId);
define_id!(LocationId);
define_id!(FactionId);
define_id!(CharacterId);
define_id!(ItemId);
define_id!(SleuthId);

// Case content IDs
define_id!(CaseId);
define_id!(ClueId);

impl CaseId {
    /// Derive a case identifier from the victim's display name, slugged to
    /// lowercase-and-hyphens. Names that slug down to nothing fall back to a
    /// generated identifier.
    pub fn for_victim(victim_name: &str) -> Self {
        let mut slug = String::with_capacity(victim_name.len());
        let mut last_was_hyphen = true;
        for ch in victim_name.chars() {
            if ch.is_alphanumeric() {
                slug.extend(ch.to_lowercase());
                last_was_hyphen = false;
            } else if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() {
            Self::generate()
        } else {
            Self(slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner_string() {
        let id = CharacterId::new("c1");
        assert_eq!(id.to_string(), "c1");
        assert_eq!(id.as_str(), "c1");
    }

    #[test]
    fn test_generate_produces_unique_ids() {
        let a = ClueId::generate();
        let b = ClueId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent_round_trip() {
        let id = LocationId::new("docks");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"docks\"");
        let back: LocationId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_case_id_for_victim_slugs_name() {
        assert_eq!(CaseId::for_victim("Edwin Blackwood").as_str(), "edwin-blackwood");
        assert_eq!(CaseId::for_victim("  Mme. d'Arcy  ").as_str(), "mme-d-arcy");
    }

    #[test]
    fn test_case_id_for_victim_falls_back_when_empty() {
        let id = CaseId::for_victim("---");
        assert!(!id.as_str().is_empty());
        assert_ne!(id.as_str(), "---");
    }

    #[test]
    fn test_ids_order_lexicographically() {
        let a = DistrictId::new("alpha");
        let b = DistrictId::new("beta");
        assert!(a < b);
    }
}
