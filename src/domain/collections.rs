/// The two mode-specific habit collections
///
/// Insertion order is display order. A habit lives in exactly one of the two
/// lists for its whole lifetime.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{Habit, HabitId, TrackingMode};

/// Both habit lists, in the shape they are written to the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitCollections {
    #[serde(default)]
    pub each_time_habits: Vec<Habit>,
    #[serde(default)]
    pub daily_habits: Vec<Habit>,
}

impl HabitCollections {
    pub fn new(each_time_habits: Vec<Habit>, daily_habits: Vec<Habit>) -> Self {
        Self {
            each_time_habits,
            daily_habits,
        }
    }

    /// The collection that belongs to `mode`
    pub fn for_mode(&self, mode: TrackingMode) -> &[Habit] {
        match mode {
            TrackingMode::EachTime => &self.each_time_habits,
            TrackingMode::SameDay => &self.daily_habits,
        }
    }

    pub fn for_mode_mut(&mut self, mode: TrackingMode) -> &mut Vec<Habit> {
        match mode {
            TrackingMode::EachTime => &mut self.each_time_habits,
            TrackingMode::SameDay => &mut self.daily_habits,
        }
    }

    /// Find a habit in either collection, along with the mode that owns it
    pub fn find(&self, id: &HabitId) -> Option<(TrackingMode, &Habit)> {
        self.each_time_habits
            .iter()
            .find(|h| &h.id == id)
            .map(|h| (TrackingMode::EachTime, h))
            .or_else(|| {
                self.daily_habits
                    .iter()
                    .find(|h| &h.id == id)
                    .map(|h| (TrackingMode::SameDay, h))
            })
    }

    /// Clear completion flags that are not from `today`, in both collections
    ///
    /// Returns how many habits were changed.
    pub fn normalize_stale(&mut self, today: NaiveDate) -> usize {
        self.each_time_habits
            .iter_mut()
            .chain(self.daily_habits.iter_mut())
            .map(|h| h.normalize_stale(today))
            .filter(|changed| *changed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.each_time_habits.len() + self.daily_habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
