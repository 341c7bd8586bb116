/// Operation for adding new habits

use crate::domain::{DomainError, Habit, HabitCollections, TrackingMode};
use crate::storage::{persist, HabitStorage};

/// Append a new habit to the collection of `mode` and persist
///
/// Fails when the text is empty after trimming; the collections are left
/// untouched in that case.
pub fn add_habit<S: HabitStorage>(
    storage: &S,
    collections: &mut HabitCollections,
    mode: TrackingMode,
    text: &str,
) -> Result<Habit, DomainError> {
    let habit = Habit::new(text)?;

    collections.for_mode_mut(mode).push(habit.clone());
    persist(storage, collections);

    tracing::debug!("Added {} habit '{}' ({})", mode, habit.text, habit.id);
    Ok(habit)
}
