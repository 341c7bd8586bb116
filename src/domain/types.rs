/// Core types used throughout the domain layer
///
/// This module defines the habit identifier, the tracking mode enum and the
/// clock that decides what "today" means for every state transition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// New habits get a random UUID, but the identifier is stored as an opaque
/// string so that data files written by older versions (or edited by hand)
/// keep whatever ids they already carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub String);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which collection the engine operates on
///
/// Each mode owns its own list of habits; a habit never moves between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Every completion is logged as an independent event
    EachTime,
    /// One completed/incomplete flag per calendar day
    SameDay,
}

impl TrackingMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            TrackingMode::EachTime => TrackingMode::SameDay,
            TrackingMode::SameDay => TrackingMode::EachTime,
        }
    }

    /// Get the display name for this mode
    pub fn display_name(&self) -> &'static str {
        match self {
            TrackingMode::EachTime => "Each Time",
            TrackingMode::SameDay => "Daily",
        }
    }

    /// Identifier used in logs and console messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingMode::EachTime => "each_time",
            TrackingMode::SameDay => "same_day",
        }
    }
}

impl Default for TrackingMode {
    fn default() -> Self {
        TrackingMode::SameDay
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "each_time" | "each-time" | "eachtime" => Ok(TrackingMode::EachTime),
            "same_day" | "same-day" | "daily" => Ok(TrackingMode::SameDay),
            other => Err(DomainError::InvalidMode(other.to_string())),
        }
    }
}

/// Source of the current calendar date
///
/// All completion bookkeeping is keyed on local calendar dates. A fixed clock
/// makes day-dependent behavior reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Read the local date from the system on every call
    #[default]
    System,
    /// Always report the same date
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", s.trim())))
}
