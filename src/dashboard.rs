//! Dashboard figures computed from the activity history
//!
//! Everything here is a pure function of (activities, goal, now); the view
//! recomputes on every change.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::badges::current_streak;
use crate::model::{Activity, ActivityCategory};

/// Number of most recent activities listed on the dashboard
pub const RECENT_ACTIVITY_COUNT: usize = 5;

/// One bar of the 7-day chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal {
    pub day: NaiveDate,
    /// Short weekday, e.g. "Mon"
    pub name: String,
    /// e.g. "Oct 5"
    pub label: String,
    pub co2e: f64,
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: ActivityCategory,
    pub co2e: f64,
}

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_today: f64,
    pub total_this_week: f64,
    pub total_last_week: f64,
    /// Week-over-week change in percent; `None` when last week is empty
    pub weekly_change_percent: Option<f64>,
    pub average_daily: f64,
    pub total_eco_points: u64,
    pub current_streak: u32,
    pub daily_goal: f64,
    pub goal_met: bool,
    /// Today's total as a percentage of the goal, capped at 100
    pub goal_progress: f64,
    pub weekly_chart: Vec<DayTotal>,
    pub by_category: Vec<CategoryTotal>,
    pub recent: Vec<Activity>,
}

impl DashboardStats {
    pub fn compute(activities: &[Activity], daily_goal: f64, now: NaiveDateTime) -> Self {
        let today = now.date();
        let days_ago = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN);

        let total_today = total_between(activities, today, today);
        let total_this_week = total_between(activities, days_ago(6), today);
        let total_last_week = total_between(activities, days_ago(13), days_ago(7));

        let weekly_change_percent = (total_last_week > 0.0)
            .then(|| (total_this_week - total_last_week) / total_last_week * 100.0);

        let total_all: f64 = activities.iter().map(|a| a.co2e).sum();
        let active_days = distinct_days(activities).max(1);

        let goal_progress = if daily_goal > 0.0 {
            (total_today / daily_goal * 100.0).min(100.0)
        } else {
            100.0
        };

        let weekly_chart = (0..7)
            .rev()
            .map(|n| {
                let day = days_ago(n);
                DayTotal {
                    day,
                    name: day.format("%a").to_string(),
                    label: day.format("%b %-d").to_string(),
                    co2e: total_between(activities, day, day),
                }
            })
            .collect();

        let by_category = ActivityCategory::ALL
            .into_iter()
            .map(|category| CategoryTotal {
                category,
                co2e: activities
                    .iter()
                    .filter(|a| a.category == category)
                    .map(|a| a.co2e)
                    .sum(),
            })
            .filter(|c| c.co2e > 0.0)
            .collect();

        Self {
            total_today,
            total_this_week,
            total_last_week,
            weekly_change_percent,
            average_daily: total_all / active_days as f64,
            total_eco_points: activities.iter().map(|a| a.eco_points as u64).sum(),
            current_streak: current_streak(activities, today),
            daily_goal,
            goal_met: total_today <= daily_goal,
            goal_progress,
            weekly_chart,
            by_category,
            recent: activities.iter().take(RECENT_ACTIVITY_COUNT).cloned().collect(),
        }
    }

    /// Human summary of the week-over-week trend
    pub fn trend_text(&self) -> String {
        match self.weekly_change_percent {
            Some(p) => format!(
                "{:.0}% {} than last week",
                p.abs(),
                if p >= 0.0 { "more" } else { "less" }
            ),
            None => "Log more for weekly trends.".to_string(),
        }
    }
}

/// Sum of CO2e for activities on days in `[first, last]`
pub fn total_between(activities: &[Activity], first: NaiveDate, last: NaiveDate) -> f64 {
    activities
        .iter()
        .filter(|a| (first..=last).contains(&a.day()))
        .map(|a| a.co2e)
        .sum()
}

fn distinct_days(activities: &[Activity]) -> usize {
    let mut days: Vec<NaiveDate> = activities.iter().map(Activity::day).collect();
    days.sort_unstable();
    days.dedup();
    days.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 16)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(18, 30, 0).unwrap())
    }

    fn activity(id: u64, category: ActivityCategory, co2e: f64, days_ago: u64, points: u32) -> Activity {
        Activity {
            id,
            category,
            description: format!("activity {id}"),
            co2e,
            date: now().checked_sub_days(Days::new(days_ago)).unwrap(),
            eco_points: points,
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = DashboardStats::compute(&[], 5.0, now());
        assert_eq!(stats.total_today, 0.0);
        assert_eq!(stats.average_daily, 0.0);
        assert_eq!(stats.current_streak, 0);
        assert!(stats.goal_met);
        assert_eq!(stats.weekly_change_percent, None);
        assert_eq!(stats.trend_text(), "Log more for weekly trends.");
        assert_eq!(stats.weekly_chart.len(), 7);
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn test_totals_and_goal() {
        let activities = vec![
            activity(1, ActivityCategory::Transportation, 4.0, 0, 10),
            activity(2, ActivityCategory::Food, 3.0, 0, 10),
            activity(3, ActivityCategory::Energy, 2.0, 3, 10),
            activity(4, ActivityCategory::Energy, 1.0, 8, 10),
        ];
        let stats = DashboardStats::compute(&activities, 5.0, now());
        assert_eq!(stats.total_today, 7.0);
        assert_eq!(stats.total_this_week, 9.0);
        assert_eq!(stats.total_last_week, 1.0);
        assert_eq!(stats.weekly_change_percent, Some(800.0));
        assert_eq!(stats.trend_text(), "800% more than last week");
        assert!(!stats.goal_met);
        assert_eq!(stats.goal_progress, 100.0);
        assert_eq!(stats.total_eco_points, 40);
        // 10 kg over 3 distinct days
        assert!((stats.average_daily - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_chart_runs_oldest_to_today() {
        let activities = vec![activity(1, ActivityCategory::Food, 0.5, 6, 25)];
        let stats = DashboardStats::compute(&activities, 5.0, now());
        assert_eq!(stats.weekly_chart[0].co2e, 0.5);
        assert_eq!(stats.weekly_chart[6].day, now().date());
        assert_eq!(stats.weekly_chart[6].name, "Wed");
        assert_eq!(stats.weekly_chart[6].label, "Oct 16");
    }

    #[test]
    fn test_category_breakdown_skips_zero() {
        let activities = vec![
            activity(1, ActivityCategory::Transportation, 0.0, 0, 50),
            activity(2, ActivityCategory::Food, 3.0, 1, 10),
        ];
        let stats = DashboardStats::compute(&activities, 5.0, now());
        assert_eq!(
            stats.by_category,
            vec![CategoryTotal {
                category: ActivityCategory::Food,
                co2e: 3.0
            }]
        );
    }

    #[test]
    fn test_recent_is_first_five() {
        let activities: Vec<_> = (0..8)
            .map(|i| activity(i, ActivityCategory::Energy, 1.0, i, 10))
            .collect();
        let stats = DashboardStats::compute(&activities, 5.0, now());
        assert_eq!(stats.recent.len(), RECENT_ACTIVITY_COUNT);
        assert_eq!(stats.recent[0].id, 0);
    }
}
