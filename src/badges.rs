//! Badge registry and streak calculation
//!
//! Badges have no stored unlock state: every read re-evaluates the predicate
//! over the full activity list, so removing activities can re-lock a badge.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{Activity, ActivityCategory};

/// Vegan food logs needed for Plant Power
pub const PLANT_POWER_MEALS: usize = 5;
/// Energy logs under this many kg CO2e unlock Energy Saver
pub const ENERGY_SAVER_LIMIT: f64 = 2.0;

/// Badge identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeId {
    FirstLog,
    EcoCommuter,
    PlantPower,
    EnergySaver,
    ConsciousConsumer,
    Globetrotter,
    Streak3,
    Streak7,
}

/// Static badge definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: BadgeId,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed registry
pub const BADGES: [Badge; 8] = [
    Badge {
        id: BadgeId::FirstLog,
        key: "first_log",
        name: "First Step",
        description: "Log your very first activity.",
    },
    Badge {
        id: BadgeId::EcoCommuter,
        key: "eco_commuter",
        name: "Eco-Commuter",
        description: "Log a zero-emission commute (e.g., biking).",
    },
    Badge {
        id: BadgeId::PlantPower,
        key: "plant_power",
        name: "Plant Power",
        description: "Log 5 vegan meals.",
    },
    Badge {
        id: BadgeId::EnergySaver,
        key: "energy_saver",
        name: "Energy Saver",
        description: "Log an energy usage below 2 kg CO2e.",
    },
    Badge {
        id: BadgeId::ConsciousConsumer,
        key: "conscious_consumer",
        name: "Conscious Consumer",
        description: "Log an activity in Goods & Services.",
    },
    Badge {
        id: BadgeId::Globetrotter,
        key: "globetrotter",
        name: "Globetrotter",
        description: "You logged a flight. Consider offsetting!",
    },
    Badge {
        id: BadgeId::Streak3,
        key: "streak_3",
        name: "On a Roll",
        description: "Log an activity for 3 days in a row.",
    },
    Badge {
        id: BadgeId::Streak7,
        key: "streak_7",
        name: "Habit Builder",
        description: "Log an activity for 7 days in a row.",
    },
];

impl Badge {
    /// Look up a badge definition by id
    pub fn get(id: BadgeId) -> &'static Badge {
        // Registry order matches enum order
        &BADGES[id as usize]
    }

    /// Evaluate this badge's predicate against the full history
    pub fn is_unlocked(&self, activities: &[Activity], today: NaiveDate) -> bool {
        match self.id {
            BadgeId::FirstLog => !activities.is_empty(),
            BadgeId::EcoCommuter => activities
                .iter()
                .any(|a| a.category == ActivityCategory::Transportation && a.co2e == 0.0),
            BadgeId::PlantPower => {
                activities
                    .iter()
                    .filter(|a| {
                        a.category == ActivityCategory::Food
                            && a.description.to_lowercase().contains("vegan")
                    })
                    .count()
                    >= PLANT_POWER_MEALS
            }
            BadgeId::EnergySaver => activities
                .iter()
                .any(|a| a.category == ActivityCategory::Energy && a.co2e < ENERGY_SAVER_LIMIT),
            BadgeId::ConsciousConsumer => activities
                .iter()
                .any(|a| a.category == ActivityCategory::GoodsServices),
            BadgeId::Globetrotter => activities
                .iter()
                .any(|a| a.description.to_lowercase().contains("flight")),
            BadgeId::Streak3 => current_streak(activities, today) >= 3,
            BadgeId::Streak7 => current_streak(activities, today) >= 7,
        }
    }

    /// Text offered when sharing an unlocked badge
    pub fn share_text(&self) -> String {
        format!(
            "I just unlocked the \"{}\" badge on Enviro-Lytix for {}! Join me in reducing our carbon footprint. #EnviroLytix #ClimateAction",
            self.name,
            self.description.to_lowercase()
        )
    }
}

/// A badge paired with its current lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStatus {
    pub badge: &'static Badge,
    pub unlocked: bool,
}

/// Evaluate every badge, in registry order
pub fn evaluate(activities: &[Activity], today: NaiveDate) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| BadgeStatus {
            badge,
            unlocked: badge.is_unlocked(activities, today),
        })
        .collect()
}

/// Only the unlocked badges, in registry order
pub fn unlocked(activities: &[Activity], today: NaiveDate) -> Vec<&'static Badge> {
    evaluate(activities, today)
        .into_iter()
        .filter(|s| s.unlocked)
        .map(|s| s.badge)
        .collect()
}

/// Consecutive calendar days with at least one log, anchored to today or
/// yesterday. Zero when the latest active day is older than yesterday.
pub fn current_streak(activities: &[Activity], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = activities.iter().map(Activity::day).collect();

    // Most recent first
    let mut iter = days.iter().rev();
    let Some(&latest) = iter.next() else {
        return 0;
    };

    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    if latest < yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut expected = latest.pred_opt();
    for &day in iter {
        if Some(day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn activity(category: ActivityCategory, description: &str, co2e: f64, days_ago: u64) -> Activity {
        let day = today().checked_sub_days(Days::new(days_ago)).unwrap();
        Activity {
            id: days_ago,
            category,
            description: description.to_string(),
            co2e,
            date: day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            eco_points: 10,
        }
    }

    fn on_days(days: &[u64]) -> Vec<Activity> {
        days.iter()
            .map(|d| activity(ActivityCategory::Energy, "Used electricity (1 kWh)", 0.475, *d))
            .collect()
    }

    #[test]
    fn test_streak_three_days() {
        assert_eq!(current_streak(&on_days(&[0, 1, 2]), today()), 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        assert_eq!(current_streak(&on_days(&[0, 1, 2, 4, 5]), today()), 3);
    }

    #[test]
    fn test_streak_anchored_to_yesterday() {
        assert_eq!(current_streak(&on_days(&[1, 2]), today()), 2);
    }

    #[test]
    fn test_streak_zero_when_stale() {
        assert_eq!(current_streak(&on_days(&[2, 3, 4]), today()), 0);
        assert_eq!(current_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_counts_days_not_logs() {
        assert_eq!(current_streak(&on_days(&[0, 0, 0, 1]), today()), 2);
    }

    #[test]
    fn test_plant_power_needs_five_vegan_food_logs() {
        let mut activities: Vec<Activity> = (0..4)
            .map(|i| activity(ActivityCategory::Food, "Ate 1 VEGAN meal(s)", 0.5, i))
            .collect();
        // Wrong category does not count
        activities.push(activity(ActivityCategory::GoodsServices, "vegan cookbook", 10.0, 0));
        assert!(!Badge::get(BadgeId::PlantPower).is_unlocked(&activities, today()));

        activities.push(activity(ActivityCategory::Food, "Dinner (Vegan)", 0.5, 5));
        assert!(Badge::get(BadgeId::PlantPower).is_unlocked(&activities, today()));
    }

    #[test]
    fn test_badges_relock_when_history_shrinks() {
        let mut activities = vec![activity(
            ActivityCategory::Transportation,
            "Short-haul flight (300 km)",
            76.5,
            0,
        )];
        let names: Vec<_> = unlocked(&activities, today()).iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["First Step", "Globetrotter"]);

        activities.clear();
        assert!(unlocked(&activities, today()).is_empty());
    }

    #[test]
    fn test_registry_lookup_matches_ids() {
        for badge in &BADGES {
            assert_eq!(Badge::get(badge.id), badge);
        }
    }

    #[test]
    fn test_share_text() {
        let text = Badge::get(BadgeId::FirstLog).share_text();
        assert!(text.starts_with("I just unlocked the \"First Step\" badge on Enviro-Lytix for log your very first activity."));
    }
}
