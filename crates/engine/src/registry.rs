//! Posted-question registry — the single piece of mutable state.
//!
//! Persisted as one JSON object `{ "date": "YYYY-MM-DD", "posted": [...] }`.
//! The key set empties when the stored date differs from the run date, so
//! "don't repeat today's questions" is the dedup horizon and the set stays
//! bounded. Persistence is an atomic replace: a run interrupted mid-write
//! leaves the previous registry intact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use studycast_core::{DedupKey, RegistryError};
use tracing::{debug, info};

/// The in-memory registry: a reset date plus the set of keys confirmed
/// delivered since that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    date: NaiveDate,
    posted: BTreeSet<String>,
}

impl Registry {
    /// An empty registry anchored at the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            posted: BTreeSet::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn len(&self) -> usize {
        self.posted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posted.is_empty()
    }

    /// Empty the key set and advance the date iff the stored date differs
    /// from `today`. Pure transformation, applied once at run start.
    pub fn reset_if_stale(self, today: NaiveDate) -> Self {
        if self.date == today {
            return self;
        }
        info!(stale = %self.date, today = %today, dropped = self.posted.len(), "Registry reset");
        Self::new(today)
    }

    pub fn contains(&self, key: &DedupKey) -> bool {
        self.posted.contains(key.as_str())
    }

    /// Add a key. Returns `false` when it was already present (idempotent).
    pub fn insert(&mut self, key: DedupKey) -> bool {
        self.posted.insert(key.into_string())
    }
}

/// File-backed load/persist for the registry.
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the registry from disk.
    ///
    /// An absent file yields an empty registry anchored at `today`. A file
    /// that exists but cannot be read or parsed is an error — guessing at
    /// dedup state would either re-spam or silently drop questions.
    pub fn load(&self, today: NaiveDate) -> Result<Registry, RegistryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No registry file, starting empty");
                return Ok(Registry::new(today));
            }
            Err(e) => {
                return Err(RegistryError::ReadFailed {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let registry: Registry =
            serde_json::from_str(&content).map_err(|e| RegistryError::Corrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), date = %registry.date, count = registry.len(), "Registry loaded");
        Ok(registry)
    }

    /// Write the registry to disk with an atomic replace
    /// (write-to-temp-then-rename in the registry's own directory).
    pub fn persist(&self, registry: &Registry) -> Result<(), RegistryError> {
        let write_err = |reason: String| RegistryError::WriteFailed {
            path: self.path.display().to_string(),
            reason,
        };

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;

        let content =
            serde_json::to_string_pretty(registry).map_err(|e| write_err(e.to_string()))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| write_err(e.to_string()))?;
        std::io::Write::write_all(&mut tmp, content.as_bytes())
            .map_err(|e| write_err(e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| write_err(e.to_string()))?;

        debug!(path = %self.path.display(), count = registry.len(), "Registry persisted");
        Ok(())
    }
}
