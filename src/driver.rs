//! Animation-frame host for Eco Jumper
//!
//! Turns frame timestamps into ticks, forwards inputs and persists new
//! high scores. The loop only needs to run while the game is running.

use crate::consts::MAX_FRAME_DELTA_MS;
use crate::highscores::HighScore;
use crate::persistence::Storage;
use crate::sim::{GameAction, GameEvent, GameState, apply};

/// What the host loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another animation frame
    Continue,
    /// The run is over (or never started); stop requesting frames
    Stop,
}

/// Owns a game and the storage its high score lives in
pub struct GameDriver<S: Storage> {
    state: GameState,
    storage: S,
    best: HighScore,
    last_time: Option<f64>,
}

impl<S: Storage> GameDriver<S> {
    /// Load the stored high score and build an idle game
    pub fn new(seed: u64, storage: S) -> Self {
        let best = HighScore::load(&storage);
        log::info!("Game initialized with seed: {seed}");
        Self {
            state: GameState::new(seed, best.value()),
            storage,
            best,
            last_time: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Best score known to storage
    pub fn best(&self) -> HighScore {
        self.best
    }

    /// Forward a player input. Returns true when a run just started and the
    /// host should begin requesting frames.
    pub fn input(&mut self, action: GameAction) -> bool {
        let was_running = self.state.is_running();
        apply(&mut self.state, action);
        self.handle_events();
        let started = !was_running && self.state.is_running();
        if started {
            // First frame of a new run has zero delta
            self.last_time = None;
        }
        started
    }

    /// Advance to the animation-frame timestamp `time_ms`
    pub fn frame(&mut self, time_ms: f64) -> LoopControl {
        if !self.state.is_running() {
            self.last_time = None;
            return LoopControl::Stop;
        }

        let delta = match self.last_time {
            Some(last) => (time_ms - last).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_time = Some(time_ms);

        apply(
            &mut self.state,
            GameAction::Tick {
                delta_ms: delta as f32,
            },
        );
        self.handle_events();

        if self.state.is_running() {
            LoopControl::Continue
        } else {
            self.last_time = None;
            LoopControl::Stop
        }
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::NewHighScore(score) => log::info!("New high score: {score}"),
                GameEvent::GameOver { score } => {
                    log::debug!("Run ended at {score}");
                    if self.best.submit(score) {
                        self.best.save(&mut self.storage);
                    }
                }
                GameEvent::RunStarted => log::debug!("Run started"),
            }
        }
    }
}
