/// Analytics engine for completion statistics
///
/// This module provides the read-only aggregations that views display:
/// a Monday-to-Sunday frequency chart for each-time habits, a month grid for
/// daily habits, and a plain per-collection summary.

use chrono::{Datelike, Duration, Month, NaiveDate};
use serde::Serialize;

use crate::domain::{Habit, HabitCollections, HabitId, TrackingMode};

/// Completion count for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    /// Axis label, weekday and date (e.g. "Mon 05-12")
    pub label: String,
    pub count: usize,
}

/// Per-day completion counts for the week containing today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyFrequency {
    pub habit_id: HabitId,
    pub text: String,
    /// Seven buckets, Monday first
    pub days: Vec<DayCount>,
}

impl WeeklyFrequency {
    pub fn max_count(&self) -> usize {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.days.iter().map(|d| d.count).sum()
    }
}

/// How a calendar day looks for a daily habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The habit was done that day
    Completed,
    /// An earlier day without a completion
    Missed,
    /// Today or a later day without a completion
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Completion status of every day in the current month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyGrid {
    pub habit_id: HabitId,
    pub text: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub days: Vec<DayCell>,
}

impl MonthlyGrid {
    pub fn count(&self, status: DayStatus) -> usize {
        self.days.iter().filter(|d| d.status == status).count()
    }
}

/// Stats for one habit, shaped by the collection that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HabitStats {
    Weekly(WeeklyFrequency),
    Monthly(MonthlyGrid),
}

/// Summary line for one habit in the stats listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub habit_id: HabitId,
    pub text: String,
    pub completion_count: u32,
    /// Distinct completion dates, oldest first
    pub dates: Vec<NaiveDate>,
}

/// Summary of one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSummary {
    pub mode: TrackingMode,
    pub habits: Vec<HabitSummary>,
}

/// Analytics engine for processing habit data
///
/// Stateless; every method takes "today" explicitly so results do not depend
/// on when they are computed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Count completions per day for the Monday-to-Sunday week containing `today`
    pub fn weekly_frequency(&self, habit: &Habit, today: NaiveDate) -> WeeklyFrequency {
        let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));

        let days = (0..7)
            .map(|offset| {
                let date = week_start + Duration::days(offset);
                DayCount {
                    date,
                    label: date.format("%a %m-%d").to_string(),
                    count: habit.completions_on(date),
                }
            })
            .collect();

        WeeklyFrequency {
            habit_id: habit.id.clone(),
            text: habit.text.clone(),
            days,
        }
    }

    /// Classify every day of the month containing `today`
    pub fn monthly_grid(&self, habit: &Habit, today: NaiveDate) -> MonthlyGrid {
        let (year, month) = (today.year(), today.month());

        let days = (1..=days_in_month(year, month))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day).map(|date| (day, date)))
            .map(|(day, date)| {
                let status = if habit.is_completed_on(date) {
                    DayStatus::Completed
                } else if day < today.day() {
                    DayStatus::Missed
                } else {
                    DayStatus::Pending
                };
                DayCell { day, date, status }
            })
            .collect();

        MonthlyGrid {
            habit_id: habit.id.clone(),
            text: habit.text.clone(),
            year,
            month,
            month_name: month_name(month),
            days,
        }
    }

    /// Stats for habit `id`, looked up across both collections
    pub fn stats_for(
        &self,
        collections: &HabitCollections,
        id: &HabitId,
        today: NaiveDate,
    ) -> Option<HabitStats> {
        collections.find(id).map(|(mode, habit)| match mode {
            TrackingMode::EachTime => HabitStats::Weekly(self.weekly_frequency(habit, today)),
            TrackingMode::SameDay => HabitStats::Monthly(self.monthly_grid(habit, today)),
        })
    }

    /// Completion counts and distinct dates for both collections
    pub fn summarize(&self, collections: &HabitCollections) -> Vec<ModeSummary> {
        [TrackingMode::EachTime, TrackingMode::SameDay]
            .into_iter()
            .map(|mode| ModeSummary {
                mode,
                habits: collections
                    .for_mode(mode)
                    .iter()
                    .map(|h| HabitSummary {
                        habit_id: h.id.clone(),
                        text: h.text.clone(),
                        completion_count: h.completion_count,
                        dates: h.distinct_dates(),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}
