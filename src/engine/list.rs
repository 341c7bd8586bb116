/// Read-only views over the active collection

use crate::domain::{Habit, HabitCollections, HabitId, TrackingMode};

/// Habits of the active mode, in display order
pub fn list_active(collections: &HabitCollections, mode: TrackingMode) -> &[Habit] {
    collections.for_mode(mode)
}

/// Resolve a 1-based position in the active list to a habit id
///
/// This is how numbered menus refer to habits; the id is what gets passed on
/// to the mutating operations.
pub fn id_at_position(
    collections: &HabitCollections,
    mode: TrackingMode,
    position: usize,
) -> Option<HabitId> {
    position
        .checked_sub(1)
        .and_then(|index| collections.for_mode(mode).get(index))
        .map(|h| h.id.clone())
}
