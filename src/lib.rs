/// Public library interface for the habit tracker
///
/// This module exports the session object that view layers drive, along with
/// the domain types, storage backends and statistics they display.

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod engine;
pub mod console;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    load_collections, migrations, persist, HabitStorage, JsonFileStorage, SaveTracking, StorageError,
};
pub use analytics::{
    AnalyticsEngine, DayCell, DayCount, DayStatus, HabitStats, HabitSummary, ModeSummary,
    MonthlyGrid, WeeklyFrequency,
};

/// Errors that can occur while running the app
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A habit tracking session
///
/// Holds the storage, both habit collections, the active tracking mode and
/// the clock. Every interactive surface goes through these methods; there is
/// no other shared state.
pub struct HabitTracker<S: HabitStorage = JsonFileStorage> {
    storage: SaveTracking<S>,
    collections: HabitCollections,
    mode: TrackingMode,
    clock: Clock,
    analytics: AnalyticsEngine,
}

impl<S: HabitStorage> HabitTracker<S> {
    /// Open a session on the given storage using the system clock
    ///
    /// Loading never fails: unreadable or invalid data is logged and the
    /// session starts with empty collections.
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, Clock::System)
    }

    /// Open a session with an explicit clock
    pub fn open_with_clock(storage: S, clock: Clock) -> Self {
        let collections = load_collections(&storage, clock.today());
        tracing::info!(
            "Habit tracker opened with {} each-time and {} daily habits",
            collections.each_time_habits.len(),
            collections.daily_habits.len()
        );

        Self {
            storage: SaveTracking::new(storage),
            collections,
            mode: TrackingMode::default(),
            clock,
            analytics: AnalyticsEngine::new(),
        }
    }

    /// Start in the given tracking mode instead of daily
    pub fn with_mode(mut self, mode: TrackingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a habit to the active collection
    pub fn add_habit(&mut self, text: &str) -> Result<Habit, DomainError> {
        engine::add_habit(&self.storage, &mut self.collections, self.mode, text)
    }

    /// Record a completion for a habit in the active collection
    ///
    /// Returns the updated habit, or `None` if the id is not in the active
    /// collection.
    pub fn toggle_completion(&mut self, id: &HabitId) -> Option<Habit> {
        let today = self.clock.today();
        engine::toggle_completion(&self.storage, &mut self.collections, self.mode, id, today)
    }

    /// Delete a habit from the active collection
    pub fn delete_habit(&mut self, id: &HabitId) -> bool {
        engine::delete_habit(&self.storage, &mut self.collections, self.mode, id)
    }

    /// Switch between each-time and daily mode
    pub fn toggle_mode(&mut self) -> TrackingMode {
        self.mode = self.mode.toggled();
        tracing::info!("Switched to mode: {}", self.mode);
        self.mode
    }

    /// Habits of the active mode, in display order
    pub fn list_active(&self) -> &[Habit] {
        engine::list_active(&self.collections, self.mode)
    }

    /// Id of the habit at a 1-based position in the active list
    pub fn id_at_position(&self, position: usize) -> Option<HabitId> {
        engine::id_at_position(&self.collections, self.mode, position)
    }

    /// Stats for a habit in either collection
    pub fn stats_for(&self, id: &HabitId) -> Option<HabitStats> {
        self.analytics.stats_for(&self.collections, id, self.clock.today())
    }

    /// Completion summary of both collections
    pub fn summary(&self) -> Vec<ModeSummary> {
        self.analytics.summarize(&self.collections)
    }

    /// Re-read storage, resetting completions that are no longer for today
    ///
    /// If the latest save failed, the in-memory collections are written out
    /// first. When that fails again they are kept and only normalized, so
    /// unsaved changes are never replaced by older data from storage.
    pub fn reload(&mut self) {
        let today = self.clock.today();

        if self.storage.has_unsaved_changes() && !persist(&self.storage, &self.collections) {
            tracing::warn!("Keeping unsaved habits in memory instead of reloading");
            self.collections.normalize_stale(today);
            return;
        }

        self.collections = load_collections(&self.storage, today);
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn collections(&self) -> &HabitCollections {
        &self.collections
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        self.storage.inner()
    }

    /// Whether the latest save failed and changes exist only in memory
    pub fn has_unsaved_changes(&self) -> bool {
        self.storage.has_unsaved_changes()
    }
}
