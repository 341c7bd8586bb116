/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity, the two mode-specific collections
/// that hold habits, and the per-habit state transitions for each tracking
/// mode. Nothing in here touches the filesystem.

pub mod habit;
pub mod collections;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use collections::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Habit cannot be empty")]
    EmptyHabitText,

    #[error("Invalid tracking mode: {0}")]
    InvalidMode(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
