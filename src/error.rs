//! Error types
//!
//! The calculators and the game never fail; these cover user input guards
//! and the native file store.

use thiserror::Error;

use crate::model::ActivityCategory;

/// A rejected user action, carrying the alert text shown to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("Please enter a valid, positive number for your goal.")]
    InvalidGoal,
    #[error("Please enter both an origin and a destination.")]
    MissingTripEndpoint,
    #[error("Unknown activity type '{kind}' for {category}.")]
    UnknownActivityType {
        category: ActivityCategory,
        kind: String,
    },
    #[error("Unknown transport mode '{0}'.")]
    UnknownTransportMode(String),
}

/// Durable storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}
