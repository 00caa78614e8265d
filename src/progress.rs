//! Page-wide progress: cumulative score and discoveries
//!
//! Persisted to local storage after every change and loaded once on
//! construction. Bad or missing data never reaches the caller; it degrades to
//! zero-valued progress.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level_for_score;
use crate::platform::{KeyValueStore, StorageError};

/// Storage key for the persisted record
pub const STORAGE_KEY: &str = "retro-gaming-progress";

/// Discoveries needed for 100% completion
pub const TOTAL_DISCOVERIES: u32 = 10;

/// Receiver for scoring events raised by the game and content sections
pub trait ProgressSink {
    fn on_score_update(&mut self, points: u64);
    fn on_discovery(&mut self);
}

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid progress record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persisted record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProgressRecord {
    total_score: u64,
    discoveries: u32,
}

/// Read-only view handed to achievements and the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total_score: u64,
    pub discoveries: u32,
    pub level: u32,
}

impl ProgressSnapshot {
    /// Share completion, capped at 100
    pub fn completion_percent(&self) -> u32 {
        (self.discoveries.min(TOTAL_DISCOVERIES) * 100) / TOTAL_DISCOVERIES
    }

    /// Text shared via the share button (or shown when sharing fails)
    pub fn share_text(&self) -> String {
        format!(
            "🎮 J'ai marqué {} points et découvert {}/{} faits sur les femmes dans le gaming! #NuitDeLInfo #WomenInGaming",
            self.total_score, self.discoveries, TOTAL_DISCOVERIES
        )
    }
}

pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    record: ProgressRecord,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Create the store and load any saved progress
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            record: ProgressRecord::default(),
        };
        store.reload();
        store
    }

    /// Re-read progress from storage, falling back to zero on any problem
    pub fn reload(&mut self) {
        self.record = match self.read_record() {
            Ok(Some(record)) => {
                log::info!(
                    "Loaded progress: {} points, {} discoveries",
                    record.total_score,
                    record.discoveries
                );
                record
            }
            Ok(None) => ProgressRecord::default(),
            Err(e) => {
                log::warn!("Failed to load progress, starting fresh: {}", e);
                ProgressRecord::default()
            }
        };
    }

    fn read_record(&self) -> Result<Option<ProgressRecord>, ProgressError> {
        match self.storage.get_item(STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write_record(&mut self) -> Result<(), ProgressError> {
        let json = serde_json::to_string(&self.record)?;
        self.storage.set_item(STORAGE_KEY, &json)?;
        Ok(())
    }

    /// Persist current progress
    pub fn save(&mut self) {
        if let Err(e) = self.write_record() {
            log::warn!("Failed to save progress: {}", e);
        }
    }

    pub fn update_score(&mut self, points: u64) {
        self.record.total_score = self.record.total_score.saturating_add(points);
        self.save();
    }

    pub fn add_discovery(&mut self) {
        self.record.discoveries = self.record.discoveries.saturating_add(1);
        self.save();
    }

    /// Zero everything and drop the persisted entry
    pub fn reset_progress(&mut self) {
        self.record = ProgressRecord::default();
        if let Err(e) = self.storage.remove_item(STORAGE_KEY) {
            log::warn!("Failed to clear progress: {}", e);
        }
        log::info!("Progress reset");
    }

    pub fn total_score(&self) -> u64 {
        self.record.total_score
    }

    pub fn discoveries(&self) -> u32 {
        self.record.discoveries
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.record.total_score)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total_score: self.total_score(),
            discoveries: self.discoveries(),
            level: self.level(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend (e.g. to reload it in another store)
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStore> ProgressSink for ProgressStore<S> {
    fn on_score_update(&mut self, points: u64) {
        self.update_score(points);
    }

    fn on_discovery(&mut self) {
        self.add_discovery();
    }
}
