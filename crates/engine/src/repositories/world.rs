//! World entity operations.

use std::sync::Arc;

use chrono::Utc;

use casewright_domain::WorldData;

use crate::infrastructure::ports::{StorageError, WorldStore};

/// Result of loading the world with fallback-to-empty recovery.
///
/// `world` is always usable; `error` carries the storage failure (if any)
/// so the caller can decide whether to notify. An error with a non-empty
/// world never occurs.
#[derive(Debug)]
pub struct WorldLoadOutcome {
    pub world: WorldData,
    pub error: Option<StorageError>,
}

/// World persistence operations.
///
/// The sole mutation point for persisted world state: nothing else in the
/// engine touches the world store.
pub struct WorldRepository {
    store: Arc<dyn WorldStore>,
}

impl WorldRepository {
    pub fn new(store: Arc<dyn WorldStore>) -> Self {
        Self { store }
    }

    /// Load the persisted world, recovering to an empty world on failure.
    ///
    /// A missing record is the normal first-run state and produces an empty
    /// world with no error. A corrupt or unreadable record also produces an
    /// empty world, logged here and reported through the outcome, so the
    /// failure never propagates past this boundary.
    pub async fn load_or_default(&self) -> WorldLoadOutcome {
        match self.store.load().await {
            Ok(Some(world)) => WorldLoadOutcome {
                world,
                error: None,
            },
            Ok(None) => {
                tracing::info!("No persisted world found, starting empty");
                WorldLoadOutcome {
                    world: WorldData::new(),
                    error: None,
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load world, falling back to empty state");
                WorldLoadOutcome {
                    world: WorldData::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// Persist the full snapshot, bumping `updated_at` first.
    pub async fn save(&self, world: &mut WorldData) -> Result<(), StorageError> {
        world.updated_at = Utc::now();
        self.store.save(world).await?;
        tracing::info!(entities = world.entity_count(), "Saved world");
        Ok(())
    }
}
