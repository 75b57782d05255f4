//! Interview records - what suspects and witnesses say, and which of it is a lie

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ClueId};

/// One question/answer exchange with a suspect or witness
///
/// A lying answer should name the clue that can expose it; the pairing is
/// enforced by validation, not construction, so authors can record the lie
/// first and write the clue later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub question: String,
    pub answer: String,
    pub is_lie: bool,
    /// Clue that debunks the answer, required (by rule) when `is_lie`
    pub debunking_clue: Option<ClueId>,
}

impl Interview {
    pub fn truthful(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            is_lie: false,
            debunking_clue: None,
        }
    }

    pub fn lie(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            is_lie: true,
            debunking_clue: None,
        }
    }

    pub fn debunked_by(mut self, clue: ClueId) -> Self {
        self.debunking_clue = Some(clue);
        self
    }
}

/// A suspect in a case: a character reference plus their interviews
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspect {
    pub character_id: CharacterId,
    pub interviews: Vec<Interview>,
}

impl Suspect {
    pub fn new(character_id: CharacterId) -> Self {
        Self {
            character_id,
            interviews: Vec::new(),
        }
    }

    pub fn with_interview(mut self, interview: Interview) -> Self {
        self.interviews.push(interview);
        self
    }
}

/// A witness: same shape as a suspect, distinct type so the two lists
/// cannot be mixed up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub character_id: CharacterId,
    pub interviews: Vec<Interview>,
}

impl Witness {
    pub fn new(character_id: CharacterId) -> Self {
        Self {
            character_id,
            interviews: Vec::new(),
        }
    }

    pub fn with_interview(mut self, interview: Interview) -> Self {
        self.interviews.push(interview);
        self
    }
}
