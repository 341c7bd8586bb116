/// Storage layer for persisting habit data
///
/// This module handles reading and writing the habits data file. It provides
/// a small interface for loading and saving both collections, and the
/// fail-open policy used by the rest of the app.

pub mod json;
pub mod migrations;

// Re-export the main storage types
pub use json::*;

use std::cell::Cell;

use chrono::NaiveDate;
use thiserror::Error;
use crate::domain::HabitCollections;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid habits data: {0}")]
    DataFormat(String),
}

/// Trait defining the storage interface for habits
///
/// The whole state is read and written at once; there is no partial update.
pub trait HabitStorage {
    /// Read both collections from storage
    ///
    /// A store that has never been written loads as two empty collections.
    fn load(&self) -> Result<HabitCollections, StorageError>;

    /// Overwrite storage with both collections
    fn save(&self, collections: &HabitCollections) -> Result<(), StorageError>;
}

/// Storage wrapper that remembers whether the latest save failed
///
/// While a save is outstanding the in-memory collections are the only copy
/// of the latest changes, so re-reading storage would lose them.
#[derive(Debug)]
pub struct SaveTracking<S> {
    inner: S,
    unsaved: Cell<bool>,
}

impl<S: HabitStorage> SaveTracking<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, unsaved: Cell::new(false) }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Whether the latest save attempt failed
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved.get()
    }
}

impl<S: HabitStorage> HabitStorage for SaveTracking<S> {
    fn load(&self) -> Result<HabitCollections, StorageError> {
        self.inner.load()
    }

    fn save(&self, collections: &HabitCollections) -> Result<(), StorageError> {
        let result = self.inner.save(collections);
        self.unsaved.set(result.is_err());
        result
    }
}

/// Load both collections, degrading to empty ones on any failure
///
/// Load errors never reach the caller: they are logged and the app starts
/// with nothing. Stale daily completions are reset for `today`.
pub fn load_collections<S: HabitStorage>(storage: &S, today: NaiveDate) -> HabitCollections {
    let mut collections = match storage.load() {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!("Error loading habits: {}", e);
            return HabitCollections::default();
        }
    };

    let reset = collections.normalize_stale(today);
    tracing::debug!(
        "Loaded {} each-time and {} daily habits ({} stale completions reset)",
        collections.each_time_habits.len(),
        collections.daily_habits.len(),
        reset
    );

    collections
}

/// Save both collections, logging instead of failing
///
/// The in-memory state stays authoritative; a failed save only means the
/// latest changes are not on disk until the next successful one.
pub fn persist<S: HabitStorage>(storage: &S, collections: &HabitCollections) -> bool {
    match storage.save(collections) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Error saving habits: {}", e);
            false
        }
    }
}
