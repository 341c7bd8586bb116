/// Operation for deleting habits

use crate::domain::{HabitCollections, HabitId, TrackingMode};
use crate::storage::{persist, HabitStorage};

/// Remove habit `id` from the collection of `mode`
///
/// Returns whether a habit was removed. Deleting an unknown id is not an
/// error and leaves storage untouched.
pub fn delete_habit<S: HabitStorage>(
    storage: &S,
    collections: &mut HabitCollections,
    mode: TrackingMode,
    id: &HabitId,
) -> bool {
    let habits = collections.for_mode_mut(mode);
    let Some(pos) = habits.iter().position(|h| &h.id == id) else {
        tracing::debug!("Ignoring delete for unknown {} habit {}", mode, id);
        return false;
    };

    let removed = habits.remove(pos);
    persist(storage, collections);

    tracing::debug!("Deleted {} habit '{}' ({})", mode, removed.text, removed.id);
    true
}
