/// Habit entity and its state transitions
///
/// This module defines the Habit struct as it is persisted in the data file,
/// along with validation and the completion rules for both tracking modes.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{HabitId, DomainError};

/// A habit represents something the user wants to do regularly
///
/// The same shape is used by both collections. `completed` and
/// `last_completed` only carry meaning for daily habits; each-time habits
/// treat `completion_dates` as an append-only log of completion events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display label (e.g., "Drink water")
    pub text: String,
    /// Whether a daily habit is done for today
    #[serde(default)]
    pub completed: bool,
    /// Day the daily flag was last set, cleared on undo or when stale
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    /// Number of recorded completions
    #[serde(default)]
    pub completion_count: u32,
    /// Dates of recorded completions, in insertion order
    #[serde(default)]
    pub completion_dates: Vec<NaiveDate>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The label is trimmed; a label that is empty after trimming is rejected.
    /// Counters start at zero and the habit starts incomplete.
    pub fn new(text: &str) -> Result<Self, DomainError> {
        let text = Self::validate_text(text)?;

        Ok(Self {
            id: HabitId::new(),
            text,
            completed: false,
            last_completed: None,
            completion_count: 0,
            completion_dates: Vec::new(),
        })
    }

    /// Record one more completion event (each-time mode)
    ///
    /// This never toggles off: every call appends `today` to the log and bumps
    /// the counter.
    pub fn log_completion(&mut self, today: NaiveDate) {
        self.completion_count = self.completion_count.saturating_add(1);
        self.completion_dates.push(today);
    }

    /// Flip the daily completion flag for `today` (daily mode)
    ///
    /// Completing counts today at most once; undoing removes one occurrence
    /// of today if it was counted. Past days are never touched.
    pub fn toggle_daily(&mut self, today: NaiveDate) {
        self.completed = !self.completed;

        if self.completed {
            self.last_completed = Some(today);
            if !self.completion_dates.contains(&today) {
                self.completion_dates.push(today);
                self.completion_count = self.completion_count.saturating_add(1);
            }
        } else {
            self.last_completed = None;
            if let Some(pos) = self.completion_dates.iter().position(|d| *d == today) {
                self.completion_dates.remove(pos);
                self.completion_count = self.completion_count.saturating_sub(1);
            }
        }
    }

    /// Reset a completion flag left over from an earlier day
    ///
    /// Returns true when the habit was changed. Counters and the date log are
    /// left alone.
    pub fn normalize_stale(&mut self, today: NaiveDate) -> bool {
        if self.last_completed == Some(today) {
            return false;
        }

        let changed = self.completed || self.last_completed.is_some();
        self.completed = false;
        self.last_completed = None;
        changed
    }

    /// Whether today has been counted for this habit
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completion_dates.contains(&date)
    }

    /// Number of log entries recorded on `date`
    pub fn completions_on(&self, date: NaiveDate) -> usize {
        self.completion_dates.iter().filter(|d| **d == date).count()
    }

    /// Distinct completion dates, oldest first
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        let mut dates = self.completion_dates.clone();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Validate habit text according to business rules
    fn validate_text(text: &str) -> Result<String, DomainError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(DomainError::EmptyHabitText);
        }

        Ok(trimmed.to_string())
    }
}
