//! Application root
//!
//! One owned `App` holds the activity list, daily goal, theme and current
//! page. Screens never mutate it directly; they send an `AppAction`.

use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::badges::{self, BadgeStatus};
use crate::carbon::ActivityKind;
use crate::consts::DEFAULT_DAILY_GOAL;
use crate::dashboard::DashboardStats;
use crate::error::InputError;
use crate::model::{Activity, ActivityCategory};
use crate::persistence::Storage;
use crate::settings::{Settings, Theme};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Dashboard,
    LogActivity,
    Achievements,
    Leaderboard,
    Resources,
    Game,
    TripPlanner,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::LogActivity,
        Page::Achievements,
        Page::Leaderboard,
        Page::Resources,
        Page::Game,
        Page::TripPlanner,
    ];

    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::LogActivity => "Log Activity",
            Page::Achievements => "Achievements",
            Page::Leaderboard => "Leaderboard",
            Page::Resources => "Resources",
            Page::Game => "EcoQuiz",
            Page::TripPlanner => "Trip Planner",
        }
    }
}

/// Everything that can change the root state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// A new activity from the log form or a finished quiz
    AddActivity(Activity),
    /// Goal text as typed into the dashboard
    SetGoal(String),
    ToggleTheme,
    Navigate(Page),
}

/// Root state changes the host must act on
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Theme flipped; persist it and restyle the document
    ThemeChanged(Theme),
}

/// Marker in quiz reward descriptions
const QUIZ_MARKER: &str = "EcoQuiz";

/// Root application state
#[derive(Debug, Clone)]
pub struct App {
    /// Newest first
    activities: Vec<Activity>,
    pub daily_goal: f64,
    pub settings: Settings,
    pub page: Page,
    next_id: u64,
    events: Vec<AppEvent>,
}

impl App {
    /// Empty app with the default goal
    pub fn new(settings: Settings) -> Self {
        Self {
            activities: Vec::new(),
            daily_goal: DEFAULT_DAILY_GOAL,
            settings,
            page: Page::Dashboard,
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// App seeded with the demo history relative to `now`
    pub fn with_sample_data(settings: Settings, now: NaiveDateTime) -> Self {
        let mut app = Self::new(settings);
        for activity in sample_activities(now) {
            app.next_id = app.next_id.max(activity.id + 1);
            app.insert(activity);
        }
        log::info!("Loaded {} sample activities", app.activities.len());
        app
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Reserve an id for a new activity
    pub fn next_activity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply an action. Only goal edits can be rejected.
    pub fn dispatch(&mut self, action: AppAction) -> Result<(), InputError> {
        match action {
            AppAction::AddActivity(activity) => {
                self.page = if activity.description.contains(QUIZ_MARKER) {
                    Page::Game
                } else {
                    Page::LogActivity
                };
                self.next_id = self.next_id.max(activity.id + 1);
                log::info!(
                    "Logged activity {}: {} ({:.2} kg CO2e)",
                    activity.id,
                    activity.description,
                    activity.co2e
                );
                self.insert(activity);
            }
            AppAction::SetGoal(text) => {
                self.daily_goal = parse_goal(&text)?;
                log::info!("Daily goal set to {:.2} kg CO2e", self.daily_goal);
            }
            AppAction::ToggleTheme => {
                let theme = self.settings.toggle_theme();
                self.events.push(AppEvent::ThemeChanged(theme));
            }
            AppAction::Navigate(page) => self.page = page,
        }
        Ok(())
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain events and write what needs persisting
    pub fn persist(&mut self, storage: &mut dyn Storage) {
        for event in self.drain_events() {
            match event {
                AppEvent::ThemeChanged(_) => self.settings.save(storage),
            }
        }
    }

    pub fn dashboard(&self, now: NaiveDateTime) -> DashboardStats {
        DashboardStats::compute(&self.activities, self.daily_goal, now)
    }

    pub fn badges(&self, now: NaiveDateTime) -> Vec<BadgeStatus> {
        badges::evaluate(&self.activities, now.date())
    }

    /// Total eco points earned
    pub fn eco_points(&self) -> u64 {
        self.activities.iter().map(|a| u64::from(a.eco_points)).sum()
    }

    fn insert(&mut self, activity: Activity) {
        // Newest first; equal dates keep insertion order
        let at = self
            .activities
            .iter()
            .position(|a| a.date < activity.date)
            .unwrap_or(self.activities.len());
        self.activities.insert(at, activity);
    }
}

/// Parse a goal as typed; it must be a positive number
pub fn parse_goal(text: &str) -> Result<f64, InputError> {
    match text.trim().parse::<f64>() {
        Ok(goal) if goal.is_finite() && goal > 0.0 => Ok(goal),
        _ => Err(InputError::InvalidGoal),
    }
}

/// Demo history spread over the last six days
pub fn sample_activities(now: NaiveDateTime) -> Vec<Activity> {
    let days_ago = |n: u64| now.checked_sub_days(Days::new(n)).unwrap_or(now);
    let entry = |id: u64,
                 category: ActivityCategory,
                 description: &str,
                 co2e: f64,
                 ago: u64,
                 eco_points: u32| Activity {
        id,
        category,
        description: description.to_string(),
        co2e,
        date: days_ago(ago),
        eco_points,
    };

    vec![
        entry(
            1,
            ActivityCategory::Transportation,
            "Commute by petrol car (15 km)",
            15.0 * ActivityKind::CarPetrol.factor(),
            1,
            10,
        ),
        entry(
            2,
            ActivityCategory::Food,
            "Lunch (Meat)",
            ActivityKind::MealMeat.factor(),
            1,
            10,
        ),
        entry(
            3,
            ActivityCategory::Energy,
            "Home electricity (5 kWh)",
            5.0 * ActivityKind::Electricity.factor(),
            2,
            10,
        ),
        entry(
            4,
            ActivityCategory::Transportation,
            "Cycled to shops (5 km)",
            0.0,
            3,
            50,
        ),
        entry(
            5,
            ActivityCategory::Food,
            "Dinner (Vegan)",
            ActivityKind::MealVegan.factor(),
            4,
            25,
        ),
        entry(
            6,
            ActivityCategory::GoodsServices,
            "Bought new headphones",
            ActivityKind::Electronics.factor(),
            5,
            10,
        ),
        entry(
            7,
            ActivityCategory::Transportation,
            "Bus ride (10 km)",
            10.0 * ActivityKind::Bus.factor(),
            6,
            10,
        ),
    ]
}
