/// Integration tests covering persistence across sessions
use habit_tracker::*;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn open(path: &Path, today: NaiveDate) -> HabitTracker {
        HabitTracker::open_with_clock(JsonFileStorage::new(path.to_path_buf()), Clock::Fixed(today))
    }

    #[test]
    fn test_changes_survive_reopen() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");

        let mut tracker = open(&path, date(3));
        assert_eq!(tracker.storage().path(), path.as_path());
        let daily = tracker.add_habit("Meditate").unwrap();
        tracker.toggle_completion(&daily.id);
        tracker.toggle_mode();
        let each = tracker.add_habit("Push-ups").unwrap();
        tracker.toggle_completion(&each.id);
        tracker.toggle_completion(&each.id);

        let reopened = open(&path, date(3));
        let collections = reopened.collections();
        assert_eq!(collections.daily_habits.len(), 1);
        assert!(collections.daily_habits[0].completed);
        assert_eq!(collections.daily_habits[0].last_completed, Some(date(3)));
        assert_eq!(collections.each_time_habits[0].completion_count, 2);
        // Sessions always start in daily mode
        assert_eq!(reopened.mode(), TrackingMode::SameDay);
    }

    #[test]
    fn test_stale_completion_reset_on_next_day() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");

        let mut tracker = open(&path, date(2));
        let habit = tracker.add_habit("Meditate").unwrap();
        tracker.toggle_completion(&habit.id);

        let next_day = open(&path, date(3));
        let loaded = &next_day.collections().daily_habits[0];
        assert!(!loaded.completed);
        assert_eq!(loaded.last_completed, None);
        assert_eq!(loaded.completion_count, 1);
        assert_eq!(loaded.completion_dates, vec![date(2)]);
    }

    #[test]
    fn test_stale_completion_from_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");
        fs::write(
            &path,
            r#"{
                "each_time_habits": [],
                "daily_habits": [{
                    "id": "abc",
                    "text": "Stretch",
                    "completed": true,
                    "lastCompleted": "2025-05-02",
                    "completionCount": 4,
                    "completionDates": ["2025-04-29", "2025-04-30", "2025-05-01", "2025-05-02"]
                }]
            }"#,
        )
        .unwrap();

        let tracker = open(&path, date(3));
        let habit = &tracker.collections().daily_habits[0];
        assert_eq!(habit.id, HabitId::from_string("abc"));
        assert!(!habit.completed);
        assert_eq!(habit.last_completed, None);
        assert_eq!(habit.completion_count, 4);
        assert_eq!(habit.completion_dates.len(), 4);
    }

    #[test]
    fn test_legacy_file_is_migrated() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");
        fs::write(
            &path,
            r#"[
                {"id": "1", "text": "Drink water", "completed": false, "lastCompleted": null},
                {"id": "2", "text": "Read", "completed": true, "lastCompleted": "2025-05-03"},
                {"id": "3", "text": "Walk"},
                {"id": "4", "completed": false}
            ]"#,
        )
        .unwrap();

        let mut tracker = open(&path, date(3));
        assert_eq!(tracker.collections().daily_habits.len(), 3);
        assert!(tracker.collections().each_time_habits.is_empty());
        assert!(tracker.collections().daily_habits[1].completed);

        // The first save rewrites the file in the current layout
        tracker.add_habit("Stretch").unwrap();
        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["daily_habits"].as_array().unwrap().len(), 4);
        assert!(raw["each_time_habits"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_file_starts_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");
        fs::write(&path, r#"{"each_time_habits": [], "daily_habits": [{"id": "1"}]}"#).unwrap();

        let tracker = open(&path, date(3));
        assert!(tracker.collections().is_empty());

        fs::write(&path, "not json at all").unwrap();
        let tracker = open(&path, date(3));
        assert!(tracker.collections().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_in_memory_state() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // A directory where the data file should be makes every save fail
        let path = dir.path().join("habits.json");
        fs::create_dir(&path).unwrap();

        let mut tracker = open(&path, date(3));
        let habit = tracker.add_habit("Read").unwrap();
        assert!(tracker.toggle_completion(&habit.id).is_some());
        assert_eq!(tracker.list_active()[0].completion_count, 1);
        assert!(tracker.has_unsaved_changes());
    }

    #[test]
    fn test_reload_after_failed_save_keeps_changes() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");
        fs::create_dir(&path).unwrap();

        let mut tracker = open(&path, date(3));
        tracker.add_habit("Read").unwrap();
        tracker.reload();

        assert_eq!(tracker.list_active().len(), 1);
        assert_eq!(tracker.list_active()[0].text, "Read");

        // Once the file is writable again the pending changes reach it
        fs::remove_dir(&path).unwrap();
        tracker.reload();
        assert!(!tracker.has_unsaved_changes());
        assert_eq!(tracker.list_active().len(), 1);
        assert_eq!(open(&path, date(3)).list_active()[0].text, "Read");
    }

    #[test]
    fn test_reload_applies_new_day() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("habits.json");

        let mut tracker = open(&path, date(3));
        let habit = tracker.add_habit("Meditate").unwrap();
        tracker.toggle_completion(&habit.id);
        tracker.reload();

        assert!(tracker.list_active()[0].completed);
        assert_eq!(tracker.today(), date(3));
    }
}
