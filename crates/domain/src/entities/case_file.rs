//! CaseFile aggregate - one murder mystery
//!
//! A case references world entities (characters, locations, items) by
//! identifier and owns its case-local content: ground truth, suspects,
//! witnesses, clues, and staged locations. Like the world, a case is freely
//! editable through invalid intermediate states; the validation engine
//! reports what is broken afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Clue, Suspect, Witness};
use crate::ids::{CaseId, CharacterId, ClueId, ItemId, LocationId};

/// The case's hidden solution: who, how, why, where
///
/// Every field is optional by construction. Missing-versus-dangling is a
/// real distinction: an unset clue id is a missing fact (its own rule), a
/// set-but-unresolvable one is a dangling reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundTruth {
    pub victim_id: Option<CharacterId>,
    pub perpetrator_id: Option<CharacterId>,
    pub crime_scene_id: Option<LocationId>,
    pub murder_weapon: Option<ItemId>,
    pub motive_clue_id: Option<ClueId>,
    pub means_clue_id: Option<ClueId>,
    pub opportunity_clue_id: Option<ClueId>,
    /// Narrative note on why the perpetrator did it
    pub motive_summary: Option<String>,
}

/// A location staged into a case, with the witnesses found there
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLocation {
    pub location_id: LocationId,
    pub witnesses: Vec<Witness>,
}

impl CaseLocation {
    pub fn new(location_id: LocationId) -> Self {
        Self {
            location_id,
            witnesses: Vec::new(),
        }
    }

    pub fn with_witness(mut self, witness: Witness) -> Self {
        self.witnesses.push(witness);
        self
    }
}

/// Aggregate root for one mystery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFile {
    pub id: CaseId,
    pub title: String,
    pub synopsis: String,
    pub ground_truth: GroundTruth,
    pub suspects: Vec<Suspect>,
    pub witnesses: Vec<Witness>,
    pub clues: Vec<Clue>,
    pub locations: Vec<CaseLocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CaseFile {
    pub fn new(id: CaseId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            synopsis: String::new(),
            ground_truth: GroundTruth::default(),
            suspects: Vec::new(),
            witnesses: Vec::new(),
            clues: Vec::new(),
            locations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a case whose identifier has not been assigned yet. The
    /// repository assigns one on first save (victim name, or generated).
    pub fn draft(title: impl Into<String>) -> Self {
        Self::new(CaseId::new(String::new()), title)
    }

    /// True if `clue_id` appears in this case's clue list
    pub fn has_clue(&self, clue_id: &ClueId) -> bool {
        self.clues.iter().any(|c| &c.clue_id == clue_id)
    }

    /// Every interview in the case, paired with the interviewee's character
    /// id, in authored order: suspects first, then top-level witnesses,
    /// then per-location witnesses.
    pub fn all_interviews(&self) -> impl Iterator<Item = (&CharacterId, &crate::entities::Interview)> {
        let suspect_interviews = self
            .suspects
            .iter()
            .flat_map(|s| s.interviews.iter().map(move |i| (&s.character_id, i)));
        let witness_interviews = self
            .witnesses
            .iter()
            .flat_map(|w| w.interviews.iter().map(move |i| (&w.character_id, i)));
        let location_interviews = self.locations.iter().flat_map(|loc| {
            loc.witnesses
                .iter()
                .flat_map(|w| w.interviews.iter().map(move |i| (&w.character_id, i)))
        });
        suspect_interviews
            .chain(witness_interviews)
            .chain(location_interviews)
    }
}
