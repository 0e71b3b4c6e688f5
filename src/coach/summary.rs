//! Plain-text summary of a user's history, used as coach context

use chrono::NaiveDate;

use crate::badges::Badge;
use crate::dashboard::total_between;
use crate::model::{Activity, ActivityCategory};

/// Summarise activities, badges and the daily goal in a few sentences
pub fn summarize_activities(
    activities: &[Activity],
    unlocked_badges: &[&Badge],
    daily_goal: f64,
    today: NaiveDate,
) -> String {
    if activities.is_empty() {
        return format!(
            "The user has not logged any activities yet. Their daily goal is {daily_goal:.2} kg CO2e."
        );
    }

    let mut summary: Vec<String> = Vec::new();

    let total_today = total_between(activities, today, today);
    summary.push(format!(
        "User's daily emissions goal: {daily_goal:.2} kg CO2e. Today's total: {total_today:.2} kg CO2e."
    ));
    if total_today > daily_goal {
        summary.push("They have exceeded their goal for today.".to_string());
    } else {
        summary.push("They are on track to meet their goal.".to_string());
    }

    let mut totals: Vec<(ActivityCategory, f64)> = ActivityCategory::ALL
        .into_iter()
        .map(|c| {
            let sum = activities
                .iter()
                .filter(|a| a.category == c)
                .map(|a| a.co2e)
                .sum();
            (c, sum)
        })
        .collect();
    // Stable: ties keep category order
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (top, top_total) = totals[0];
    summary.push(format!(
        "Highest emissions are from {top} ({top_total:.2} kg CO2e)."
    ));
    let (next, next_total) = totals[1];
    if next_total > 0.0 {
        summary.push(format!(
            "Next highest is {next} ({next_total:.2} kg CO2e)."
        ));
    }

    let zero_emission = activities.iter().filter(|a| a.co2e == 0.0).count();
    if zero_emission > 0 {
        summary.push(format!(
            "User has logged {zero_emission} zero-emission activities. Great job!"
        ));
    }

    if unlocked_badges.is_empty() {
        summary.push("No badges unlocked yet.".to_string());
    } else {
        let names: Vec<&str> = unlocked_badges.iter().map(|b| b.name).collect();
        summary.push(format!("Unlocked badges: {}.", names.join(", ")));
    }

    summary.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::{Badge, BadgeId};
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn activity(category: ActivityCategory, co2e: f64) -> Activity {
        Activity {
            id: 1,
            category,
            description: String::new(),
            co2e,
            date: today().and_time(NaiveTime::MIN),
            eco_points: 10,
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            summarize_activities(&[], &[], 5.0, today()),
            "The user has not logged any activities yet. Their daily goal is 5.00 kg CO2e."
        );
    }

    #[test]
    fn test_summary_mentions_categories_and_badges() {
        let activities = vec![
            activity(ActivityCategory::Transportation, 0.0),
            activity(ActivityCategory::Food, 3.0),
            activity(ActivityCategory::Energy, 2.375),
        ];
        let badges = [Badge::get(BadgeId::FirstLog)];
        let text = summarize_activities(&activities, &badges, 5.0, today());
        assert_eq!(
            text,
            "User's daily emissions goal: 5.00 kg CO2e. Today's total: 5.38 kg CO2e. \
             They have exceeded their goal for today. \
             Highest emissions are from Food (3.00 kg CO2e). \
             Next highest is Energy (2.38 kg CO2e). \
             User has logged 1 zero-emission activities. Great job! \
             Unlocked badges: First Step."
        );
    }
}
