//! Case file operations.

use std::sync::Arc;

use chrono::Utc;

use casewright_domain::{CaseFile, CaseId, WorldData};

use crate::infrastructure::ports::{CaseBatch, CaseStore, StorageError};

/// Case persistence operations.
pub struct CaseRepository {
    store: Arc<dyn CaseStore>,
}

impl CaseRepository {
    pub fn new(store: Arc<dyn CaseStore>) -> Self {
        Self { store }
    }

    /// Load every case record. Malformed records arrive in
    /// `CaseBatch::skipped`, one entry each, already logged by the store;
    /// only a failure to read the batch as a whole is an `Err`.
    pub async fn load_all(&self) -> Result<CaseBatch, StorageError> {
        let batch = self.store.load_all().await?;
        if !batch.skipped.is_empty() {
            tracing::warn!(
                loaded = batch.cases.len(),
                skipped = batch.skipped.len(),
                "Some case records could not be read"
            );
        }
        Ok(batch)
    }

    /// Persist one case, assigning its identifier on first save.
    ///
    /// A draft case (empty id) is keyed by the victim's display name when
    /// the victim is set and resolvable in `world`; otherwise it gets a
    /// generated id. An already-assigned id is never changed.
    pub async fn save(
        &self,
        case: &mut CaseFile,
        world: &WorldData,
    ) -> Result<CaseId, StorageError> {
        if case.id.as_str().is_empty() {
            case.id = Self::assign_id(case, world);
            tracing::info!(case_id = %case.id, "Assigned case identifier");
        }
        case.updated_at = Utc::now();
        self.store.save(case).await?;
        Ok(case.id.clone())
    }

    fn assign_id(case: &CaseFile, world: &WorldData) -> CaseId {
        case.ground_truth
            .victim_id
            .as_ref()
            .and_then(|victim| world.characters.get(victim))
            .filter(|victim| !victim.full_name.trim().is_empty())
            .map(|victim| CaseId::for_victim(&victim.full_name))
            .unwrap_or_else(CaseId::generate)
    }
}
