//! JSON file persistence for the world and for cases.
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/world.json        one record for the whole world
//! <data_dir>/cases/<id>.json   one record per case
//! ```
//!
//! Records are pretty-printed JSON. Optional fields serialize as explicit
//! `null` so the null-versus-absent distinction survives a round trip.
//! Saves write to a temporary sibling file and rename over the target, so
//! an interrupted save never truncates the previous snapshot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use casewright_domain::{CaseFile, CaseId, WorldData};

use crate::infrastructure::ports::{CaseBatch, CaseStore, SkippedRecord, StorageError, WorldStore};

const WORLD_FILE: &str = "world.json";
const CASES_DIR: &str = "cases";

/// File-backed store for the single world record.
pub struct JsonWorldStore {
    path: PathBuf,
}

impl JsonWorldStore {
    /// `data_dir` is created on first save if it does not exist.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(WORLD_FILE),
        }
    }
}

#[async_trait]
impl WorldStore for JsonWorldStore {
    async fn load(&self) -> Result<Option<WorldData>, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::io(self.path.display().to_string(), &err)),
        };
        let world = serde_json::from_str(&text).map_err(|err| {
            StorageError::malformed(self.path.display().to_string(), err.to_string())
        })?;
        Ok(Some(world))
    }

    async fn save(&self, world: &WorldData) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(world).map_err(|err| {
            StorageError::malformed(self.path.display().to_string(), err.to_string())
        })?;
        write_atomically(&self.path, &json).await
    }
}

/// File-backed store keeping one JSON record per case.
pub struct JsonCaseStore {
    dir: PathBuf,
}

impl JsonCaseStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().join(CASES_DIR),
        }
    }

    fn case_path(&self, id: &CaseId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl CaseStore for JsonCaseStore {
    async fn load_all(&self) -> Result<CaseBatch, StorageError> {
        let mut batch = CaseBatch::default();

        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            // No cases directory yet means no cases, not a failure.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(batch),
            Err(err) => return Err(StorageError::io(self.dir.display().to_string(), &err)),
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| StorageError::io(self.dir.display().to_string(), &err))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        // Directory iteration order is platform-dependent; sort for a
        // deterministic batch.
        paths.sort();

        for path in paths {
            let display_path = path.display().to_string();
            let outcome = match fs::read_to_string(&path).await {
                Ok(text) => serde_json::from_str::<CaseFile>(&text)
                    .map_err(|err| StorageError::malformed(display_path.clone(), err.to_string())),
                Err(err) => Err(StorageError::io(display_path.clone(), &err)),
            };
            match outcome {
                Ok(case) => {
                    batch.cases.insert(case.id.clone(), case);
                }
                Err(error) => {
                    tracing::warn!(path = %display_path, error = %error, "Skipping unreadable case record");
                    batch.skipped.push(SkippedRecord {
                        path: display_path,
                        error,
                    });
                }
            }
        }

        Ok(batch)
    }

    async fn save(&self, case: &CaseFile) -> Result<(), StorageError> {
        let path = self.case_path(&case.id);
        let json = serde_json::to_string_pretty(case).map_err(|err| {
            StorageError::malformed(path.display().to_string(), err.to_string())
        })?;
        write_atomically(&path, &json).await
    }
}

/// Write `contents` to `path` via a temporary sibling + rename.
async fn write_atomically(path: &Path, contents: &str) -> Result<(), StorageError> {
    let display = path.display().to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| StorageError::io(parent.display().to_string(), &err))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)
        .await
        .map_err(|err| StorageError::io(tmp.display().to_string(), &err))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|err| StorageError::io(display, &err))?;
    Ok(())
}
