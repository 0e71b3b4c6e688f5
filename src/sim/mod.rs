//! Deterministic simulation module
//!
//! All Eco Jumper gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time enters only through `GameAction::Tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, hits_any};
pub use state::{GameEvent, GameState, GameStatus, Obstacle, ObstacleKind, Parallax, Player};
pub use tick::{GameAction, apply, tick};
