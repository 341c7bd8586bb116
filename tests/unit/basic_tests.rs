/// Basic unit tests to verify core functionality through the public API
use habit_tracker::*;
use chrono::NaiveDate;
use tempfile::TempDir;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()
    }

    fn tracker(dir: &TempDir) -> HabitTracker {
        let storage = JsonFileStorage::new(dir.path().join("habits.json"));
        HabitTracker::open_with_clock(storage, Clock::Fixed(today()))
    }

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit");

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.text, "Test Habit");
        assert_eq!(habit.completion_count, 0);
        assert!(!habit.completed);
        assert!(habit.completion_dates.is_empty());
    }

    #[test]
    fn test_open_fresh_store() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = HabitTracker::open(JsonFileStorage::new(dir.path().join("habits.json")));

        assert!(tracker.collections().is_empty());
        assert!(tracker.list_active().is_empty());
        assert_eq!(tracker.mode(), TrackingMode::SameDay);
    }

    #[test]
    fn test_add_habit_rejects_blank_text() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = tracker(&dir);

        assert_eq!(tracker.add_habit("").unwrap_err(), DomainError::EmptyHabitText);
        assert_eq!(tracker.add_habit("   ").unwrap_err(), DomainError::EmptyHabitText);
        assert!(tracker.collections().is_empty());
    }

    #[test]
    fn test_drink_water_scenario() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = tracker(&dir);
        assert_eq!(tracker.mode(), TrackingMode::SameDay);

        let habit = tracker.add_habit("Drink water").unwrap();

        let on = tracker.toggle_completion(&habit.id).unwrap();
        assert!(on.completed);
        assert_eq!(on.completion_count, 1);
        assert_eq!(on.completion_dates, vec![today()]);

        let off = tracker.toggle_completion(&habit.id).unwrap();
        assert!(!off.completed);
        assert_eq!(off.completion_count, 0);
        assert!(off.completion_dates.is_empty());
    }

    #[test]
    fn test_each_time_mode_counts_every_completion() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = tracker(&dir);
        assert_eq!(tracker.toggle_mode(), TrackingMode::EachTime);

        let habit = tracker.add_habit("Push-ups").unwrap();
        for _ in 0..3 {
            tracker.toggle_completion(&habit.id);
        }

        let logged = &tracker.list_active()[0];
        assert_eq!(logged.completion_count, 3);
        assert_eq!(logged.completion_dates, vec![today(); 3]);
        assert!(tracker.collections().daily_habits.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = tracker(&dir);
        tracker.add_habit("Read").unwrap();
        let before = tracker.collections().clone();

        assert!(!tracker.delete_habit(&HabitId::new()));
        assert_eq!(tracker.collections(), &before);
    }

    #[test]
    fn test_stats_for_each_collection() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut tracker = tracker(&dir);
        let daily = tracker.add_habit("Meditate").unwrap();
        tracker.toggle_mode();
        let each = tracker.add_habit("Push-ups").unwrap();

        // Stats are available regardless of the active mode
        match tracker.stats_for(&daily.id) {
            Some(HabitStats::Monthly(grid)) => assert_eq!(grid.days.len(), 31),
            other => panic!("expected monthly grid, got {:?}", other),
        }
        match tracker.stats_for(&each.id) {
            Some(HabitStats::Weekly(weekly)) => assert_eq!(weekly.days.len(), 7),
            other => panic!("expected weekly frequency, got {:?}", other),
        }
    }
}
