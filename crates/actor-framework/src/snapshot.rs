//! # Snapshot Persistence
//!
//! An actor can mirror its store to a JSON file. The file is written after every
//! successful mutation (write to a sibling temp file, then rename) and read back when
//! the actor is constructed, so state survives restarts.
//!
//! File layout:
//!
//! ```json
//! { "next_id": 3, "records": [ { "id": 1, "entity": { ... }, "deleted_at": null } ] }
//! ```

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::record::{Record, Store};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Serialize, Deserialize)]
struct SnapshotFile<I, T> {
    next_id: u32,
    records: Vec<StoredRecord<I, T>>,
}

#[derive(Serialize, Deserialize)]
struct StoredRecord<I, T> {
    id: I,
    entity: T,
    deleted_at: Option<DateTime<Utc>>,
}

type EncodeFn<T> = Box<dyn Fn(&Store<T>, u32) -> Result<Vec<u8>, serde_json::Error> + Send + Sync>;

/// Handle to the snapshot file of one actor.
pub struct Snapshot<T: ActorEntity> {
    path: PathBuf,
    encode: EncodeFn<T>,
}

/// State recovered from a snapshot file.
pub struct Restored<T: ActorEntity> {
    pub store: Store<T>,
    pub next_id: u32,
}

impl<T> Snapshot<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    /// Opens the snapshot at `path`, loading its contents if the file exists.
    ///
    /// A missing file yields an empty store with ids starting at 1.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Restored<T>), FrameworkError> {
        let path = path.into();
        let restored = if path.exists() {
            let raw = fs::read(&path).map_err(|e| storage(&path, e))?;
            let file: SnapshotFile<T::Id, T> =
                serde_json::from_slice(&raw).map_err(|e| storage(&path, e))?;
            let mut store = Store::<T>::with_capacity(file.records.len());
            for record in file.records {
                store.insert(
                    record.id,
                    Record {
                        entity: record.entity,
                        deleted_at: record.deleted_at,
                    },
                );
            }
            info!(path = %path.display(), records = store.len(), "Snapshot loaded");
            Restored {
                store,
                next_id: file.next_id.max(1),
            }
        } else {
            debug!(path = %path.display(), "No snapshot yet");
            Restored {
                store: Store::<T>::new(),
                next_id: 1,
            }
        };

        let snapshot = Self {
            path,
            encode: Box::new(encode_snapshot::<T>),
        };
        Ok((snapshot, restored))
    }
}

impl<T: ActorEntity> Snapshot<T> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the store to a sibling temp file, then renames it over the snapshot.
    pub async fn save(&self, store: &Store<T>, next_id: u32) -> Result<(), FrameworkError> {
        let path = self.path.as_path();
        let json = (self.encode)(store, next_id).map_err(|e| storage(path, e))?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| storage(path, e))?;
        }
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| storage(&tmp, e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| storage(path, e))?;
        Ok(())
    }
}

fn encode_snapshot<T>(store: &Store<T>, next_id: u32) -> Result<Vec<u8>, serde_json::Error>
where
    T: ActorEntity + Serialize,
    T::Id: Serialize,
{
    let file = SnapshotFile {
        next_id,
        records: store
            .iter()
            .map(|(id, record)| StoredRecord {
                id,
                entity: &record.entity,
                deleted_at: record.deleted_at,
            })
            .collect(),
    };
    serde_json::to_vec_pretty(&file)
}

fn storage(path: &Path, e: impl std::fmt::Display) -> FrameworkError {
    FrameworkError::Storage(format!("{}: {}", path.display(), e))
}
