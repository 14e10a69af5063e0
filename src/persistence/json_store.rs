use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::utils::error::PersistenceError;

/// Durable record of message ids whose handshake has completed.
///
/// The full id set is held in memory and rewritten to a single JSON array
/// on every change, so the file stays readable with any text editor. Ids
/// are never removed: the record grows for the life of the deployment.
///
/// Loading tolerates a missing, unreadable, or corrupt file by starting
/// from the empty set, and a failed rewrite only degrades durability: the
/// in-memory set remains authoritative until the process exits, so a crash
/// before a successful flush can at worst reprocess the ids completed
/// since the last good write.
#[derive(Debug)]
pub struct DedupStore {
    path: PathBuf,
    completed: BTreeSet<String>,
}

impl DedupStore {
    /// Opens the store, loading any previously persisted ids from `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let completed = Self::load(&path);
        debug!(
            "dedup store opened with {} completed id(s) from {}",
            completed.len(),
            path.display()
        );
        Self { path, completed }
    }

    fn load(path: &Path) -> BTreeSet<String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeSet::new(),
            Err(e) => {
                warn!("failed to read state file {}: {e}", path.display());
                return BTreeSet::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!(
                    "state file {} is not a valid id array, starting empty: {e}",
                    path.display()
                );
                BTreeSet::new()
            }
        }
    }

    /// Returns true if `id` has already completed its handshake.
    pub fn contains(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Records `id` as completed and rewrites the backing file.
    ///
    /// Idempotent; returns true only when the id was newly inserted. A
    /// flush failure is logged and the insertion stands.
    pub fn add(&mut self, id: &str) -> bool {
        if !self.completed.insert(id.to_string()) {
            return false;
        }
        if let Err(e) = self.flush() {
            warn!("failed to persist completed id {id}: {e}");
        }
        true
    }

    /// Rewrites the whole id set to the backing file.
    pub fn flush(&self) -> Result<(), PersistenceError> {
        let serialized = serde_json::to_string(&self.completed)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
