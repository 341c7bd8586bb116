/// Data file format handling
///
/// This module turns the raw JSON document into habit collections. Two layouts
/// exist on disk:
///
/// - the current layout, an object with `each_time_habits` and `daily_habits`
///   lists, which is validated strictly;
/// - the legacy layout, a flat list of daily habits, where unusable entries are
///   dropped and the rest migrated into `daily_habits`.

use chrono::NaiveDate;
use serde_json::Value;
use crate::domain::{parse_iso_date, Habit, HabitCollections, HabitId};
use crate::storage::StorageError;

/// Key of the each-time list in the current layout
pub const EACH_TIME_KEY: &str = "each_time_habits";
/// Key of the daily list in the current layout
pub const DAILY_KEY: &str = "daily_habits";

/// Convert a parsed data file into collections
pub fn collections_from_document(document: Value) -> Result<HabitCollections, StorageError> {
    match document {
        Value::Array(entries) => Ok(migrate_legacy(entries)),
        Value::Object(mut map) => {
            let each_time_habits = read_strict_list(map.remove(EACH_TIME_KEY), EACH_TIME_KEY)?;
            let daily_habits = read_strict_list(map.remove(DAILY_KEY), DAILY_KEY)?;
            Ok(HabitCollections::new(each_time_habits, daily_habits))
        }
        other => Err(StorageError::DataFormat(format!(
            "expected a list or an object at the top level, found {}",
            value_kind(&other)
        ))),
    }
}

/// Migrate a legacy flat list into the daily collection
///
/// Entries without an `id` or `text` are skipped with a warning.
pub fn migrate_legacy(entries: Vec<Value>) -> HabitCollections {
    let total = entries.len();
    let daily_habits: Vec<Habit> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match read_entry(entry) {
            Ok(habit) => Some(habit),
            Err(reason) => {
                tracing::warn!("Dropping legacy habit entry {}: {}", index, reason);
                None
            }
        })
        .collect();

    tracing::info!(
        "Migrated legacy habits file: kept {} of {} entries as daily habits",
        daily_habits.len(),
        total
    );

    HabitCollections::new(Vec::new(), daily_habits)
}

/// Read one named list of the current layout; any bad entry fails the load
fn read_strict_list(value: Option<Value>, key: &str) -> Result<Vec<Habit>, StorageError> {
    let entries = match value {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(StorageError::DataFormat(format!(
                "'{}' must be a list, found {}",
                key,
                value_kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            read_entry(entry).map_err(|reason| {
                StorageError::DataFormat(format!("invalid habit entry {} in '{}': {}", index, key, reason))
            })
        })
        .collect()
}

/// Build a habit from one stored entry
///
/// Only `id` and `text` are required. A non-string `id` or `text` is kept in
/// its JSON text form. Optional fields that are missing, null or malformed
/// fall back to their defaults; undated completion entries are dropped.
fn read_entry(entry: Value) -> Result<Habit, String> {
    let mut map = match entry {
        Value::Object(map) => map,
        other => return Err(format!("expected an object, found {}", value_kind(&other))),
    };
    let (Some(id), Some(text)) = (map.remove("id"), map.remove("text")) else {
        return Err("missing id or text".to_string());
    };

    let completed = map.get("completed").and_then(Value::as_bool).unwrap_or(false);
    let last_completed = map.get("lastCompleted").and_then(as_date);
    let completion_count = map
        .get("completionCount")
        .and_then(Value::as_u64)
        .and_then(|count| u32::try_from(count).ok())
        .unwrap_or(0);
    let completion_dates = match map.get("completionDates") {
        Some(Value::Array(dates)) => dates.iter().filter_map(as_date).collect(),
        _ => Vec::new(),
    };

    Ok(Habit {
        id: HabitId(into_text(id)),
        text: into_text(text),
        completed,
        last_completed,
        completion_count,
        completion_dates,
    })
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn as_date(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(|s| parse_iso_date(s).ok())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
