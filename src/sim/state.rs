//! Game state and core simulation types
//!
//! Everything needed to resume or replay a run lives here, including the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Title screen, nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; only a start input leaves this state
    GameOver,
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top edge (y grows downward)
    pub y: f32,
    /// Vertical velocity, negative is up
    pub vy: f32,
    /// Current hitbox height (shrinks while ducking)
    pub height: f32,
    /// Two-phase running cycle, 0 while airborne
    pub animation_frame: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: GROUND_Y - PLAYER_HEIGHT,
            vy: 0.0,
            height: PLAYER_HEIGHT,
            animation_frame: 0,
        }
    }
}

impl Player {
    /// y at which the player stands on the ground for the current height
    pub fn ground_position(&self) -> f32 {
        GROUND_Y - self.height
    }

    pub fn is_grounded(&self) -> bool {
        self.y >= self.ground_position()
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Smokestack,
    Barrel,
    Trash,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Smokestack,
        ObstacleKind::Barrel,
        ObstacleKind::Trash,
    ];

    /// Fixed (width, height) of each type
    pub fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Smokestack => (25.0, 60.0),
            ObstacleKind::Barrel => (30.0, 40.0),
            ObstacleKind::Trash => (50.0, 35.0),
        }
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    /// Distance from the right edge this obstacle must travel before the next spawns
    pub next_gap: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, next_gap: f32) -> Self {
        let (width, height) = kind.size();
        Self {
            x,
            width,
            height,
            kind,
            next_gap,
        }
    }

    /// Top edge; obstacles stand on the ground line
    pub fn y(&self) -> f32 {
        GROUND_Y - self.height
    }
}

/// A horizontally looping background layer drawn twice side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallax {
    pub x1: f32,
    pub x2: f32,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            x1: 0.0,
            x2: GAME_WIDTH,
        }
    }
}

impl Parallax {
    /// Scroll left by `distance`, wrapping each copy back to the right edge
    pub fn scroll(&mut self, distance: f32) {
        self.x1 = wrap(self.x1 - distance);
        self.x2 = wrap(self.x2 - distance);
    }
}

fn wrap(x: f32) -> f32 {
    if x <= -GAME_WIDTH { GAME_WIDTH } else { x }
}

/// Events emitted by the simulation for the host to act on
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A fresh run began
    RunStarted,
    /// The player hit an obstacle
    GameOver { score: u64 },
    /// The final score beat the stored best; the host persists it
    NewHighScore(u64),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub player: Player,
    /// Ordered left to right by spawn time
    pub obstacles: Vec<Obstacle>,
    /// Fractional; displayed floored
    pub score: f32,
    pub high_score: u64,
    pub speed: f32,
    pub is_jumping: bool,
    pub is_ducking: bool,
    /// Ticks since the run started
    pub frame_count: u64,
    /// City and ground backdrop
    pub background: Parallax,
    pub clouds: Parallax,
    /// Obstacle RNG, carried across restarts
    pub rng: Pcg32,
    /// Pending events (drained by the host)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle game with the given seed and stored best score
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), high_score)
    }

    fn with_rng(rng: Pcg32, high_score: u64) -> Self {
        Self {
            status: GameStatus::Idle,
            player: Player::default(),
            obstacles: Vec::new(),
            score: 0.0,
            high_score,
            speed: INITIAL_GAME_SPEED,
            is_jumping: false,
            is_ducking: false,
            frame_count: 0,
            background: Parallax::default(),
            clouds: Parallax::default(),
            rng,
            events: Vec::new(),
        }
    }

    /// Throw away the run and start a new one, keeping the best score and RNG stream
    pub fn restart(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::with_rng(self.rng.clone(), self.high_score);
        self.events = events;
        self.status = GameStatus::Running;
        self.events.push(GameEvent::RunStarted);
        log::info!("Eco Jumper run started");
    }

    /// Score as shown in the HUD
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_on_ground() {
        let state = GameState::new(7, 12);
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.high_score, 12);
        assert_eq!(state.player.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(state.player.is_grounded());
        assert_eq!(state.background, Parallax { x1: 0.0, x2: 800.0 });
        assert_eq!(state.speed, INITIAL_GAME_SPEED);
    }

    #[test]
    fn test_parallax_wraps_to_right_edge() {
        let mut layer = Parallax::default();
        layer.scroll(799.0);
        assert_eq!(layer.x1, -799.0);
        assert_eq!(layer.x2, 1.0);
        layer.scroll(1.0);
        assert_eq!(layer.x1, GAME_WIDTH);
        assert_eq!(layer.x2, 0.0);
    }

    #[test]
    fn test_obstacle_sizes() {
        let o = Obstacle::new(ObstacleKind::Trash, 800.0, 300.0);
        assert_eq!((o.width, o.height), (50.0, 35.0));
        assert_eq!(o.y(), GROUND_Y - 35.0);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(3, 0);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"status\":\"idle\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player, state.player);
    }
}
