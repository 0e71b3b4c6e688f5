//! Game reducer
//!
//! Every change to `GameState` goes through `apply`. Rates are tuned per
//! 16 ms reference frame and scaled by the real elapsed time.

use rand::Rng;

use super::collision::hits_any;
use super::state::{GameEvent, GameState, GameStatus, Obstacle, ObstacleKind};
use crate::consts::*;

/// Discrete inputs to the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Jump key / pointer down: starts a run or jumps
    InputStart,
    /// Jump key / pointer up: ends the jump boost
    InputEnd,
    DuckStart,
    DuckEnd,
    /// Advance time by the given milliseconds
    Tick { delta_ms: f32 },
}

/// Apply one action to the game state
pub fn apply(state: &mut GameState, action: GameAction) {
    match action {
        GameAction::InputStart => input_start(state),
        GameAction::InputEnd => {
            if state.is_running() {
                state.is_jumping = false;
            }
        }
        GameAction::DuckStart => {
            if state.is_running() && !state.is_jumping {
                state.is_ducking = true;
                state.player.height = PLAYER_DUCK_HEIGHT;
            }
        }
        GameAction::DuckEnd => {
            if state.is_running() {
                state.is_ducking = false;
                state.player.height = PLAYER_HEIGHT;
            }
        }
        GameAction::Tick { delta_ms } => tick(state, delta_ms),
    }
}

fn input_start(state: &mut GameState) {
    match state.status {
        GameStatus::Idle | GameStatus::GameOver => state.restart(),
        GameStatus::Running => {
            if state.player.is_grounded() && !state.is_ducking {
                state.player.vy = -PLAYER_JUMP_VELOCITY;
                state.is_jumping = true;
            }
        }
    }
}

/// Advance the running game by `delta_ms` milliseconds
pub fn tick(state: &mut GameState, delta_ms: f32) {
    if !state.is_running() {
        return;
    }

    // Negative or non-finite deltas freeze the frame
    let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
    let scale = delta_ms / REFERENCE_FRAME_MS;

    step_player(state, scale);

    state.frame_count += 1;
    state.player.animation_frame = if state.player.is_grounded() {
        ((state.frame_count / ANIMATION_FRAME_PERIOD) % 2) as u8
    } else {
        0
    };

    let distance = state.speed * scale;
    for obstacle in &mut state.obstacles {
        obstacle.x -= distance;
    }
    state.obstacles.retain(|o| o.x > -o.width);
    maybe_spawn_obstacle(state);

    let crashed = hits_any(&state.player, &state.obstacles);

    state.score += state.speed / SCORE_SPEED_DIVISOR * scale;

    if crashed {
        state.status = GameStatus::GameOver;
        let final_score = state.display_score();
        log::info!("Eco Jumper game over, score {final_score}");
        state.events.push(GameEvent::GameOver { score: final_score });
        if final_score > state.high_score {
            state.high_score = final_score;
            state.events.push(GameEvent::NewHighScore(final_score));
        }
    }

    state.background.scroll(distance);
    state.clouds.scroll(distance * CLOUD_SPEED_RATIO);

    state.speed += GAME_SPEED_INCREMENT * scale;
}

fn step_player(state: &mut GameState, scale: f32) {
    let player = &mut state.player;

    let mut gravity = GRAVITY;
    if player.vy < 0.0 && !state.is_jumping {
        gravity *= SHORT_HOP_GRAVITY_MULTIPLIER;
    }
    if state.is_ducking && !player.is_grounded() {
        gravity *= DUCK_GRAVITY_MULTIPLIER;
    }

    // Semi-implicit Euler
    player.vy += gravity * scale;
    player.y += player.vy * scale;

    let ground = player.ground_position();
    if player.y >= ground {
        player.y = ground;
        player.vy = 0.0;
    }
}

fn maybe_spawn_obstacle(state: &mut GameState) {
    let due = match state.obstacles.last() {
        None => true,
        Some(last) => GAME_WIDTH - last.x > last.next_gap,
    };
    if !due {
        return;
    }

    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    let next_gap = state.rng.random_range(OBSTACLE_MIN_GAP..OBSTACLE_MAX_GAP);
    log::debug!("Spawning {kind:?}, next gap {next_gap:.0}");
    state.obstacles.push(Obstacle::new(kind, GAME_WIDTH, next_gap));
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: GameAction = GameAction::Tick { delta_ms: 16.0 };

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        apply(&mut state, GameAction::InputStart);
        state.drain_events();
        state
    }

    /// Tick while keeping the track clear so only the player moves
    fn tick_clear(state: &mut GameState, frames: usize) {
        for _ in 0..frames {
            state.obstacles.clear();
            apply(state, FRAME);
        }
    }

    #[test]
    fn test_start_input_begins_run() {
        let mut state = GameState::new(1, 9);
        apply(&mut state, GameAction::Tick { delta_ms: 16.0 });
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.frame_count, 0);

        apply(&mut state, GameAction::InputStart);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.high_score, 9);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_first_tick_spawns_at_right_edge() {
        let mut state = running(5);
        apply(&mut state, FRAME);
        assert_eq!(state.obstacles.len(), 1);
        let o = state.obstacles[0];
        assert_eq!(o.x, GAME_WIDTH);
        assert!((OBSTACLE_MIN_GAP..OBSTACLE_MAX_GAP).contains(&o.next_gap));

        apply(&mut state, FRAME);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles[0].x < GAME_WIDTH);
    }

    #[test]
    fn test_jump_and_land() {
        let mut state = running(2);
        apply(&mut state, GameAction::InputStart);
        assert!(state.is_jumping);
        assert_eq!(state.player.vy, -PLAYER_JUMP_VELOCITY);

        // Second press mid-air does nothing
        tick_clear(&mut state, 3);
        let vy = state.player.vy;
        apply(&mut state, GameAction::InputStart);
        assert_eq!(state.player.vy, vy);
        assert!(!state.player.is_grounded());
        assert_eq!(state.player.animation_frame, 0);

        tick_clear(&mut state, 60);
        assert!(state.player.is_grounded());
        assert_eq!(state.player.y, GROUND_Y - PLAYER_HEIGHT);
        assert_eq!(state.player.vy, 0.0);
    }

    fn apex(release_after: Option<usize>) -> f32 {
        let mut state = running(3);
        apply(&mut state, GameAction::InputStart);
        let mut highest = state.player.y;
        for frame in 0..60 {
            if release_after == Some(frame) {
                apply(&mut state, GameAction::InputEnd);
            }
            tick_clear(&mut state, 1);
            highest = highest.min(state.player.y);
        }
        highest
    }

    #[test]
    fn test_short_hop_is_lower() {
        let full = apex(None);
        let short = apex(Some(2));
        assert!(short > full, "short hop apex {short} should sit below {full}");
    }

    #[test]
    fn test_duck_shrinks_and_fast_falls() {
        let mut state = running(4);
        apply(&mut state, GameAction::DuckStart);
        assert!(state.is_ducking);
        assert_eq!(state.player.height, PLAYER_DUCK_HEIGHT);

        tick_clear(&mut state, 10);
        assert_eq!(state.player.y, GROUND_Y - PLAYER_DUCK_HEIGHT);

        apply(&mut state, GameAction::DuckEnd);
        assert_eq!(state.player.height, PLAYER_HEIGHT);
        tick_clear(&mut state, 1);
        assert_eq!(state.player.y, GROUND_Y - PLAYER_HEIGHT);
    }

    #[test]
    fn test_spawn_waits_for_trailing_gap() {
        let mut state = running(12);
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Barrel, GAME_WIDTH - 600.0, 650.0));

        let mut spawned = false;
        for _ in 0..30 {
            apply(&mut state, FRAME);
            assert_eq!(state.status, GameStatus::Running);
            let distance = GAME_WIDTH - state.obstacles[0].x;
            if state.obstacles.len() == 1 {
                assert!(distance <= 650.0, "should have spawned at distance {distance}");
                continue;
            }
            assert_eq!(state.obstacles.len(), 2);
            assert!(distance > 650.0 && distance < 650.0 + 2.0 * state.speed);
            assert_eq!(state.obstacles[1].x, GAME_WIDTH);
            spawned = true;
            break;
        }
        assert!(spawned);
    }

    #[test]
    fn test_airborne_duck_quadruples_gravity() {
        let mut state = running(4);
        apply(&mut state, GameAction::DuckStart);
        state.player.y = 40.0;
        tick_clear(&mut state, 1);
        assert!((state.player.vy - DUCK_GRAVITY_MULTIPLIER * GRAVITY).abs() < 1e-5);

        let mut upright = running(4);
        upright.player.y = 40.0;
        tick_clear(&mut upright, 1);
        assert!((upright.player.vy - GRAVITY).abs() < 1e-5);
    }

    #[test]
    fn test_released_jump_and_duck_gravity_stack() {
        let mut state = running(4);
        apply(&mut state, GameAction::InputStart);
        tick_clear(&mut state, 1);
        apply(&mut state, GameAction::InputEnd);
        apply(&mut state, GameAction::DuckStart);
        assert!(state.is_ducking);

        let vy = state.player.vy;
        assert!(vy < 0.0);
        tick_clear(&mut state, 1);
        let expected = SHORT_HOP_GRAVITY_MULTIPLIER * DUCK_GRAVITY_MULTIPLIER * GRAVITY;
        assert!((state.player.vy - vy - expected).abs() < 1e-5);
    }

    #[test]
    fn test_cannot_duck_mid_jump_or_jump_while_ducking() {
        let mut state = running(4);
        apply(&mut state, GameAction::InputStart);
        apply(&mut state, GameAction::DuckStart);
        assert!(!state.is_ducking);

        let mut state = running(4);
        apply(&mut state, GameAction::DuckStart);
        tick_clear(&mut state, 10);
        apply(&mut state, GameAction::InputStart);
        assert!(!state.is_jumping);
        assert_eq!(state.player.vy, 0.0);
    }

    #[test]
    fn test_zero_delta_moves_nothing() {
        let mut state = running(6);
        apply(&mut state, FRAME);
        let before = state.clone();

        apply(&mut state, GameAction::Tick { delta_ms: 0.0 });
        assert_eq!(state.player.y, before.player.y);
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.score, before.score);
        assert_eq!(state.background, before.background);

        apply(&mut state, GameAction::Tick { delta_ms: f32::NAN });
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.speed, before.speed);
    }

    #[test]
    fn test_collision_ends_run_once() {
        let mut state = running(8);
        state.score = 42.7;
        state.obstacles.push(Obstacle::new(ObstacleKind::Barrel, 60.0, 500.0));
        apply(&mut state, GameAction::Tick { delta_ms: 0.0 });

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 42);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver { score: 42 }, GameEvent::NewHighScore(42)]
        );

        let frozen = state.clone();
        apply(&mut state, FRAME);
        apply(&mut state, GameAction::DuckStart);
        assert_eq!(state.score, frozen.score);
        assert_eq!(state.obstacles, frozen.obstacles);
        assert_eq!(state.player, frozen.player);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut state = GameState::new(8, 100);
        apply(&mut state, GameAction::InputStart);
        state.drain_events();
        state.obstacles.push(Obstacle::new(ObstacleKind::Trash, 40.0, 500.0));
        apply(&mut state, FRAME);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 100);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::NewHighScore(_)))
        );
    }

    #[test]
    fn test_restart_resets_run_but_keeps_best() {
        let mut state = running(9);
        state.score = 77.0;
        state.obstacles.push(Obstacle::new(ObstacleKind::Smokestack, 55.0, 400.0));
        apply(&mut state, FRAME);
        assert_eq!(state.status, GameStatus::GameOver);

        apply(&mut state, GameAction::InputStart);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.high_score, 77);
        assert_eq!(state.score, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.y, GROUND_Y - PLAYER_HEIGHT);
        assert_eq!(state.speed, INITIAL_GAME_SPEED);
        assert_eq!(state.frame_count, 0);
    }

    #[test]
    fn test_speed_and_score_ramp() {
        let mut state = running(10);
        tick_clear(&mut state, 100);
        assert!((state.speed - (INITIAL_GAME_SPEED + 0.1)).abs() < 1e-4);
        // 100 frames at ~5 speed → ~50 points
        assert_eq!(state.display_score(), 50);
        assert!((state.clouds.x1 - state.background.x1 * CLOUD_SPEED_RATIO).abs() < 1e-2);
    }

    #[test]
    fn test_running_animation_cycles() {
        let mut state = running(11);
        let mut frames = Vec::new();
        for _ in 0..12 {
            tick_clear(&mut state, 1);
            frames.push(state.player.animation_frame);
        }
        assert_eq!(frames, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_determinism() {
        let mut a = running(99999);
        let mut b = running(99999);
        for i in 0..400 {
            let action = if i % 37 == 0 { GameAction::InputStart } else { FRAME };
            apply(&mut a, action);
            apply(&mut b, action);
        }
        assert_eq!(a.status, b.status);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.score, b.score);
    }

    fn action_strategy() -> impl proptest::strategy::Strategy<Value = GameAction> {
        use proptest::prelude::*;
        prop_oneof![
            Just(GameAction::InputStart),
            Just(GameAction::InputEnd),
            Just(GameAction::DuckStart),
            Just(GameAction::DuckEnd),
            (0.0f32..80.0).prop_map(|delta_ms| GameAction::Tick { delta_ms }),
        ]
    }

    proptest::proptest! {
        #[test]
        fn prop_reducer_invariants(
            seed in proptest::prelude::any::<u64>(),
            actions in proptest::collection::vec(action_strategy(), 0..300),
        ) {
            let mut state = GameState::new(seed, 0);
            for action in actions {
                let before = state.clone();
                apply(&mut state, action);

                if before.status == GameStatus::GameOver && action != GameAction::InputStart {
                    proptest::prop_assert_eq!(state.score, before.score);
                    proptest::prop_assert_eq!(&state.obstacles, &before.obstacles);
                    proptest::prop_assert_eq!(state.player, before.player);
                }
                if let GameAction::Tick { .. } = action {
                    proptest::prop_assert!(state.player.y <= state.player.ground_position());
                    if before.status == GameStatus::Running {
                        proptest::prop_assert!(state.score >= before.score);
                        proptest::prop_assert!(state.speed >= before.speed);
                    }
                }
                proptest::prop_assert!(state.high_score >= before.high_score);
                proptest::prop_assert!(state.obstacles.iter().all(|o| o.x > -o.width));
            }
        }
    }
}
