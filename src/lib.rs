//! Enviro-Lytix - personal carbon-footprint tracking
//!
//! Core modules:
//! - `carbon`: Emission factors and the footprint calculator
//! - `badges`: Achievement registry and streak calculation
//! - `dashboard`, `activity_log`, `quiz`, `leaderboard`, `trip`: Screen models
//! - `coach`, `weather`: Mocked advisory services
//! - `sim`: Deterministic Eco Jumper mini-game (physics, collisions, state)
//! - `driver`: Animation-frame host for the game loop
//! - `renderer`: Draw data built from game state
//! - `persistence`: Key-value storage for the high score and theme
//! - `platform`: Clock, storage and preference lookups per target
//! - `app`: Root application state and reducer

pub mod activity_log;
pub mod app;
pub mod badges;
pub mod carbon;
pub mod coach;
pub mod dashboard;
pub mod driver;
pub mod error;
pub mod highscores;
pub mod leaderboard;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod quiz;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod trip;
pub mod weather;

pub use app::{App, AppAction, Page};
pub use carbon::{Footprint, calculate_footprint};
pub use error::{InputError, StorageError};
pub use highscores::HighScore;
pub use model::{Activity, ActivityCategory};
pub use settings::{Settings, Theme};

/// Game and app configuration constants
pub mod consts {
    /// Playfield dimensions (SVG-style coordinates, y grows downward)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 200.0;
    pub const GROUND_Y: f32 = GAME_HEIGHT - 30.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 42.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 28.0;
    pub const PLAYER_X: f32 = 50.0;

    /// Upward impulse applied on jump (units per reference frame)
    pub const PLAYER_JUMP_VELOCITY: f32 = 14.0;
    pub const GRAVITY: f32 = 0.6;
    /// Gravity multiplier once the jump button is released on the way up
    pub const SHORT_HOP_GRAVITY_MULTIPLIER: f32 = 3.0;
    /// Gravity multiplier while ducking in the air (fast-fall)
    pub const DUCK_GRAVITY_MULTIPLIER: f32 = 4.0;

    /// Obstacle spacing, drawn uniformly per obstacle
    pub const OBSTACLE_MIN_GAP: f32 = 300.0;
    pub const OBSTACLE_MAX_GAP: f32 = 700.0;

    pub const INITIAL_GAME_SPEED: f32 = 5.0;
    /// Speed added per reference frame, no upper bound
    pub const GAME_SPEED_INCREMENT: f32 = 0.001;

    /// Reference frame interval (ms) that all per-frame rates are tuned to
    pub const REFERENCE_FRAME_MS: f32 = 16.0;
    /// Running animation flips every this many frames
    pub const ANIMATION_FRAME_PERIOD: u64 = 6;
    /// Clouds scroll at a quarter of the ground speed
    pub const CLOUD_SPEED_RATIO: f32 = 0.25;
    /// Score gained per reference frame is speed / this
    pub const SCORE_SPEED_DIVISOR: f32 = 10.0;

    /// Longest frame the host will forward to the simulation (ms)
    pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

    /// Default daily emissions goal (kg CO2e)
    pub const DEFAULT_DAILY_GOAL: f64 = 5.0;
}
