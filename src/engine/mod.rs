/// Habit engine operations
///
/// Each operation acts on the collection of the active tracking mode and
/// persists after a successful mutation. Persistence is best-effort: a failed
/// save is logged and the in-memory change stands.

pub mod add;
pub mod toggle;
pub mod delete;
pub mod list;

// Re-export operation functions for easy access
pub use add::*;
pub use toggle::*;
pub use delete::*;
pub use list::*;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::{Cell, RefCell};

    use crate::domain::HabitCollections;
    use crate::storage::{HabitStorage, StorageError};

    /// Storage that records saves in memory, optionally failing them
    #[derive(Default)]
    pub struct RecordingStorage {
        pub saved: RefCell<Option<HabitCollections>>,
        pub saves: Cell<usize>,
        pub fail: bool,
    }

    impl HabitStorage for RecordingStorage {
        fn load(&self) -> Result<HabitCollections, StorageError> {
            Ok(self.saved.borrow().clone().unwrap_or_default())
        }

        fn save(&self, collections: &HabitCollections) -> Result<(), StorageError> {
            self.saves.set(self.saves.get() + 1);
            if self.fail {
                return Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            *self.saved.borrow_mut() = Some(collections.clone());
            Ok(())
        }
    }
}
