/// Operation for recording habit completions

use chrono::NaiveDate;
use crate::domain::{Habit, HabitCollections, HabitId, TrackingMode};
use crate::storage::{persist, HabitStorage};

/// Record a completion for habit `id` in the collection of `mode`
///
/// In each-time mode this appends to the completion log. In daily mode it
/// flips today's completed flag, first clearing a flag left over from an
/// earlier day. An unknown id is ignored and nothing is
/// written. Returns the habit as it is after the change.
pub fn toggle_completion<S: HabitStorage>(
    storage: &S,
    collections: &mut HabitCollections,
    mode: TrackingMode,
    id: &HabitId,
    today: NaiveDate,
) -> Option<Habit> {
    let habit = match collections.for_mode_mut(mode).iter_mut().find(|h| &h.id == id) {
        Some(habit) => habit,
        None => {
            tracing::debug!("Ignoring completion for unknown {} habit {}", mode, id);
            return None;
        }
    };

    match mode {
        TrackingMode::EachTime => habit.log_completion(today),
        TrackingMode::SameDay => {
            // A flag set before midnight belongs to yesterday
            habit.normalize_stale(today);
            habit.toggle_daily(today);
        }
    }

    let updated = habit.clone();
    persist(storage, collections);

    tracing::debug!(
        "Updated habit '{}': completed={}, count={}",
        updated.text,
        updated.completed,
        updated.completion_count
    );
    Some(updated)
}
