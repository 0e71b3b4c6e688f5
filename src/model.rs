//! Core domain records shared across screens

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    Transportation,
    Energy,
    Food,
    GoodsServices,
}

impl ActivityCategory {
    /// All categories in display order
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Transportation,
        ActivityCategory::Energy,
        ActivityCategory::Food,
        ActivityCategory::GoodsServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Transportation => "Transportation",
            ActivityCategory::Energy => "Energy",
            ActivityCategory::Food => "Food",
            ActivityCategory::GoodsServices => "Goods & Services",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "transportation" | "transport" => Some(ActivityCategory::Transportation),
            "energy" => Some(ActivityCategory::Energy),
            "food" => Some(ActivityCategory::Food),
            "goods & services" | "goods" | "goods_services" => {
                Some(ActivityCategory::GoodsServices)
            }
            _ => None,
        }
    }

    /// Chart colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            ActivityCategory::Transportation => "#3b82f6",
            ActivityCategory::Energy => "#f97316",
            ActivityCategory::Food => "#10b981",
            ActivityCategory::GoodsServices => "#8b5cf6",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged activity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub category: ActivityCategory,
    pub description: String,
    /// Emissions in kg CO2e
    pub co2e: f64,
    /// Local wall-clock time the activity happened
    pub date: NaiveDateTime,
    pub eco_points: u32,
}

impl Activity {
    /// Local calendar day of the activity
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// A leaderboard entry (static display data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub avatar_url: String,
    pub eco_points: u64,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}
