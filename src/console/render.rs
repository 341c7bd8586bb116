/// Text rendering for the console surface

use crate::analytics::{DayStatus, HabitStats, ModeSummary, MonthlyGrid, WeeklyFrequency};
use crate::domain::{Habit, TrackingMode};

/// The active list with completion markers
///
/// The check mark is only shown for daily habits; each-time habits have no
/// per-day flag.
pub fn habit_list(habits: &[Habit], mode: TrackingMode) -> String {
    if habits.is_empty() {
        return "No habits found.\n".to_string();
    }

    habits
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let status = if h.completed && mode == TrackingMode::SameDay { "✔" } else { " " };
            format!("{}. {} [{}]\n", i + 1, h.text, status)
        })
        .collect()
}

/// Plain numbered list used when picking a habit
pub fn numbered(habits: &[Habit]) -> String {
    habits
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{}. {}\n", i + 1, h.text))
        .collect()
}

/// Completion counts and dates of both collections
pub fn summary(summaries: &[ModeSummary]) -> String {
    let mut text = String::from("\nHabit Completion Stats:\n");

    for summary in summaries {
        text.push_str(&format!("{} Mode:\n", summary.mode.display_name()));
        if summary.habits.is_empty() {
            text.push_str("  No habits\n");
        }
        for (i, habit) in summary.habits.iter().enumerate() {
            text.push_str(&format!("  {}. {}: {} times\n", i + 1, habit.text, habit.completion_count));
            if !habit.dates.is_empty() {
                let dates: Vec<String> = habit.dates.iter().map(|d| d.to_string()).collect();
                text.push_str(&format!("    Dates: {}\n", dates.join(", ")));
            }
        }
    }

    text
}

pub fn habit_stats(stats: &HabitStats) -> String {
    match stats {
        HabitStats::Weekly(weekly) => weekly_chart(weekly),
        HabitStats::Monthly(grid) => monthly_grid(grid),
    }
}

/// Horizontal bar chart of this week's completions
pub fn weekly_chart(weekly: &WeeklyFrequency) -> String {
    let mut text = format!("\n{} (this week)\n", weekly.text);
    for day in &weekly.days {
        text.push_str(&format!("  {} | {} {}\n", day.label, "#".repeat(day.count), day.count));
    }
    text
}

/// Calendar grid of the current month, seven days per row
pub fn monthly_grid(grid: &MonthlyGrid) -> String {
    let mut text = format!("\n{} ({} {})\n", grid.text, grid.month_name, grid.year);
    for week in grid.days.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let symbol = match cell.status {
                    DayStatus::Completed => "✅",
                    DayStatus::Missed => "❌",
                    DayStatus::Pending => "⬜",
                };
                format!("{:>2}{}", cell.day, symbol)
            })
            .collect();
        text.push_str(&format!("  {}\n", row.join(" ")));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::analytics::AnalyticsEngine;
    use crate::domain::HabitCollections;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()
    }

    #[test]
    fn test_list_marks_only_daily_completions() {
        let mut habit = Habit::new("Meditate").unwrap();
        habit.completed = true;
        let habits = vec![habit, Habit::new("Walk").unwrap()];

        assert_eq!(habit_list(&habits, TrackingMode::SameDay), "1. Meditate [✔]\n2. Walk [ ]\n");
        assert_eq!(habit_list(&habits, TrackingMode::EachTime), "1. Meditate [ ]\n2. Walk [ ]\n");
        assert_eq!(habit_list(&[], TrackingMode::SameDay), "No habits found.\n");
    }

    #[test]
    fn test_summary_text() {
        let mut each = Habit::new("Push-ups").unwrap();
        each.log_completion(today());
        each.log_completion(today());
        let collections = HabitCollections::new(vec![each], Vec::new());

        let text = summary(&AnalyticsEngine::new().summarize(&collections));

        assert!(text.contains("Each Time Mode:\n  1. Push-ups: 2 times\n    Dates: 2025-05-03\n"));
        assert!(text.contains("Daily Mode:\n  No habits\n"));
    }

    #[test]
    fn test_monthly_grid_rows() {
        let mut habit = Habit::new("Meditate").unwrap();
        habit.toggle_daily(today());

        let grid = AnalyticsEngine::new().monthly_grid(&habit, today());
        let text = monthly_grid(&grid);

        assert!(text.starts_with("\nMeditate (May 2025)\n"));
        assert!(text.contains(" 1❌  2❌  3✅  4⬜"));
        assert_eq!(text.lines().count(), 2 + 5);
    }

    #[test]
    fn test_weekly_chart_bars() {
        let mut habit = Habit::new("Push-ups").unwrap();
        habit.log_completion(today());
        habit.log_completion(today());

        let text = weekly_chart(&AnalyticsEngine::new().weekly_frequency(&habit, today()));

        assert!(text.contains("Sat 05-03 | ## 2\n"));
        assert!(text.contains("Mon 04-28 |  0\n"));
    }
}
