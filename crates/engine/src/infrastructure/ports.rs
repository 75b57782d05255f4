//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Ports exist for storage
//! access so the JSON file stores can be swapped (or mocked in tests)
//! without touching repositories or use cases.

use std::collections::BTreeMap;

use async_trait::async_trait;

use casewright_domain::{CaseFile, CaseId, WorldData};

// =============================================================================
// Error Types
// =============================================================================

/// Failure at the storage boundary.
///
/// `Io` covers filesystem failures; `MalformedRecord` covers a single
/// record that fails structural decoding. The distinction matters because
/// callers recover from them differently: I/O failures fall back to an
/// empty state, malformed records are skipped one at a time.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },
    #[error("Malformed record {path}: {reason}")]
    MalformedRecord { path: String, reason: String },
}

impl StorageError {
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Batch results
// =============================================================================

/// A case record that failed to decode and was skipped.
#[derive(Debug)]
pub struct SkippedRecord {
    pub path: String,
    pub error: StorageError,
}

/// Result of loading every case: the well-formed cases keyed by id, plus
/// one entry per record that was skipped. A single corrupt record is never
/// fatal to the batch.
#[derive(Debug, Default)]
pub struct CaseBatch {
    pub cases: BTreeMap<CaseId, CaseFile>,
    pub skipped: Vec<SkippedRecord>,
}

// =============================================================================
// Storage Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldStore: Send + Sync {
    /// Load the persisted world. `Ok(None)` means no world has ever been
    /// saved; an unreadable or undecodable file is an error.
    async fn load(&self) -> Result<Option<WorldData>, StorageError>;

    /// Persist the full world snapshot.
    async fn save(&self, world: &WorldData) -> Result<(), StorageError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Load every case record, skipping (and reporting) malformed ones.
    async fn load_all(&self) -> Result<CaseBatch, StorageError>;

    /// Persist one case under its identifier.
    async fn save(&self, case: &CaseFile) -> Result<(), StorageError>;
}
