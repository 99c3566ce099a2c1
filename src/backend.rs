pub mod draft_backend;

use crate::constant::MAX_HISTORY_ENTRIES;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const HISTORY_DIR: &str = "history";

/// Custom error types for the backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No history entry at position {0}")]
    OutOfRange(usize),
}

/// A stored result plus when it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Bounded, de-duplicated, most-recent-first list persisted as one JSON file
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store for `key` under `data_dir`, loading any saved entries
    pub fn open(data_dir: &Path, key: &str) -> Result<Self, BackendError> {
        let history_dir = data_dir.join(HISTORY_DIR);
        fs::create_dir_all(&history_dir)?;

        let path = history_dir.join(format!("{}.json", key));
        let entries = Self::load(&path)?;
        info!("Loaded {} history entries from {:?}", entries.len(), path);

        Ok(Self { path, entries })
    }

    fn load(path: &Path) -> Result<Vec<HistoryEntry>, BackendError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let mut entries: Vec<HistoryEntry> = serde_json::from_str(&content)?;
        entries.truncate(MAX_HISTORY_ENTRIES);
        Ok(entries)
    }

    fn persist(path: &Path, entries: &[HistoryEntry]) -> Result<(), BackendError> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Prepend `content` unless an identical entry already exists.
    /// Returns whether the list changed. Nothing changes in memory if the
    /// write fails.
    pub fn record(&mut self, content: &str) -> Result<bool, BackendError> {
        if self.entries.iter().any(|e| e.content == content) {
            debug!("Skipping duplicate history entry");
            return Ok(false);
        }

        let mut entries = Vec::with_capacity(MAX_HISTORY_ENTRIES);
        entries.push(HistoryEntry {
            content: content.to_string(),
            timestamp: Utc::now(),
        });
        entries.extend(self.entries.iter().take(MAX_HISTORY_ENTRIES - 1).cloned());

        Self::persist(&self.path, &entries)?;
        self.entries = entries;
        Ok(true)
    }

    /// Remove the entry at `index` (0 is the most recent)
    pub fn delete(&mut self, index: usize) -> Result<HistoryEntry, BackendError> {
        if index >= self.entries.len() {
            return Err(BackendError::OutOfRange(index));
        }

        let mut entries = self.entries.clone();
        let removed = entries.remove(index);
        Self::persist(&self.path, &entries)?;
        self.entries = entries;
        Ok(removed)
    }

    /// Drop every entry and the persisted file
    pub fn clear(&mut self) -> Result<(), BackendError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.entries.clear();
        info!("Cleared history at {:?}", self.path);
        Ok(())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// Tests
// ============================================================================
