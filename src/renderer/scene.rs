//! Draw list for one Eco Jumper frame
//!
//! Pure function of the game state, in playfield coordinates (800 x 200,
//! y down). Painters draw `rects` in order, then `texts`.

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{GameState, GameStatus, Obstacle, ObstacleKind, Player};

/// Filled axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: [f32; 4],
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        Self { x, y, w, h, color }
    }

    fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Canvas `textAlign` value
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "center",
            TextAnchor::End => "end",
        }
    }
}

/// A line of text on the baseline at (x, y)
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub color: [f32; 4],
}

/// Everything needed to paint a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub rects: Vec<Rect>,
    pub texts: Vec<TextItem>,
}

/// City skyline blocks (x, top, width)
const BUILDINGS: [(f32, f32, f32); 16] = [
    (50.0, 120.0, 40.0),
    (100.0, 100.0, 30.0),
    (140.0, 130.0, 50.0),
    (200.0, 110.0, 25.0),
    (230.0, 90.0, 40.0),
    (280.0, 140.0, 30.0),
    (320.0, 100.0, 50.0),
    (380.0, 125.0, 20.0),
    (410.0, 95.0, 40.0),
    (460.0, 135.0, 30.0),
    (500.0, 115.0, 25.0),
    (550.0, 105.0, 40.0),
    (600.0, 120.0, 30.0),
    (640.0, 100.0, 50.0),
    (700.0, 130.0, 40.0),
    (750.0, 110.0, 30.0),
];

/// Wind turbine towers, solar panels and trees along the skyline (x)
const TURBINES: [f32; 3] = [120.0, 420.0, 680.0];
const SOLAR_PANELS: [f32; 3] = [20.0, 300.0, 580.0];
const TREES: [f32; 3] = [180.0, 480.0, 740.0];
const FLOWERS: [f32; 6] = [50.0, 200.0, 350.0, 500.0, 650.0, 750.0];

/// Cloud puffs (x, y, w, h); two overlapping rects per cloud
const CLOUDS: [(f32, f32, f32, f32); 8] = [
    (100.0, 40.0, 50.0, 20.0),
    (110.0, 35.0, 30.0, 30.0),
    (250.0, 60.0, 80.0, 25.0),
    (270.0, 50.0, 40.0, 45.0),
    (450.0, 30.0, 60.0, 20.0),
    (460.0, 25.0, 40.0, 30.0),
    (650.0, 50.0, 70.0, 25.0),
    (660.0, 40.0, 50.0, 45.0),
];

/// Build the draw list for the current state
pub fn build_scene(state: &GameState) -> Scene {
    let mut scene = Scene::default();

    for x in [state.clouds.x1, state.clouds.x2] {
        push_clouds(&mut scene.rects, x);
    }
    for x in [state.background.x1, state.background.x2] {
        push_backdrop(&mut scene.rects, x);
    }

    if state.status != GameStatus::Idle {
        push_player(&mut scene.rects, &state.player, state.is_ducking);
        for obstacle in &state.obstacles {
            push_obstacle(&mut scene.rects, obstacle);
        }
    }

    scene.texts.push(TextItem {
        text: hud_text(state),
        x: GAME_WIDTH - 10.0,
        y: 20.0,
        size: 18.0,
        bold: true,
        anchor: TextAnchor::End,
        color: colors::HUD_TEXT,
    });

    if state.status != GameStatus::Running {
        push_overlay(&mut scene, state);
    }

    scene
}

/// `HI 00042 00017`
pub fn hud_text(state: &GameState) -> String {
    format!("HI {:05} {:05}", state.high_score, state.display_score())
}

fn push_clouds(rects: &mut Vec<Rect>, dx: f32) {
    for (x, y, w, h) in CLOUDS {
        rects.push(Rect::new(x + dx, y, w, h, colors::CLOUD));
    }
}

fn push_backdrop(rects: &mut Vec<Rect>, dx: f32) {
    rects.push(Rect::new(dx, 0.0, GAME_WIDTH, GROUND_Y, colors::SKY));
    for (x, top, w) in BUILDINGS {
        rects.push(Rect::new(x + dx, top, w, GROUND_Y - top, colors::CITY));
    }
    for x in TURBINES {
        rects.push(Rect::new(x + dx, 60.0, 4.0, 60.0, colors::TURBINE));
    }
    for x in SOLAR_PANELS {
        rects.push(Rect::new(x + dx, 160.0, 30.0, 10.0, colors::SOLAR_PANEL));
    }
    for x in TREES {
        rects.push(Rect::new(x + dx, 130.0, 8.0, 20.0, colors::TREE_TRUNK));
        rects.push(Rect::new(x + dx - 10.0, 110.0, 28.0, 20.0, colors::GRASS));
    }
    rects.push(Rect::new(
        dx,
        GROUND_Y,
        GAME_WIDTH,
        GAME_HEIGHT - GROUND_Y,
        colors::GROUND,
    ));
    rects.push(Rect::new(dx, GROUND_Y, GAME_WIDTH, 10.0, colors::GRASS));
    for x in FLOWERS {
        rects.push(Rect::new(x + dx, GROUND_Y - 5.0, 2.0, 5.0, colors::FLOWER));
    }
}

fn push_player(rects: &mut Vec<Rect>, player: &Player, ducking: bool) {
    let (ox, oy) = (PLAYER_X, player.y);
    let parts: Vec<Rect> = if ducking {
        vec![
            Rect::new(6.0, 8.0, 30.0, 14.0, colors::PLAYER),
            Rect::new(28.0, 2.0, 12.0, 10.0, colors::PLAYER_SHADE),
            Rect::new(34.0, 4.0, 2.0, 2.0, colors::PLAYER_EYE),
            Rect::new(10.0, 22.0, 6.0, 6.0, colors::PLAYER_SHADE),
            Rect::new(26.0, 22.0, 6.0, 6.0, colors::PLAYER_SHADE),
        ]
    } else {
        // Legs swap height each animation phase
        let (left, right) = if player.animation_frame == 0 {
            (13.0, 10.0)
        } else {
            (10.0, 13.0)
        };
        vec![
            Rect::new(12.0, 14.0, 16.0, 21.0, colors::PLAYER),
            Rect::new(14.0, 6.0, 12.0, 8.0, colors::PLAYER),
            Rect::new(16.0, 0.0, 8.0, 6.0, colors::PLAYER_SHADE),
            Rect::new(17.0, 9.0, 2.0, 2.0, colors::PLAYER_EYE),
            Rect::new(21.0, 9.0, 2.0, 2.0, colors::PLAYER_EYE),
            Rect::new(7.0, 16.0, 5.0, 6.0, colors::PLAYER),
            Rect::new(28.0, 19.0, 5.0, 6.0, colors::PLAYER),
            Rect::new(12.0, 35.0, 6.0, left, colors::PLAYER_SHADE),
            Rect::new(21.0, 35.0, 6.0, right, colors::PLAYER_SHADE),
        ]
    };
    rects.extend(parts.into_iter().map(|r| r.offset(ox, oy)));
}

fn push_obstacle(rects: &mut Vec<Rect>, obstacle: &Obstacle) {
    let (ox, oy) = (obstacle.x, obstacle.y());
    let (w, h) = (obstacle.width, obstacle.height);
    let parts = match obstacle.kind {
        ObstacleKind::Smokestack => vec![
            Rect::new(2.0, 30.0, w - 4.0, h - 30.0, colors::SMOKESTACK),
            Rect::new(5.0, 5.0, 10.0, 25.0, colors::SMOKESTACK_TOP),
            Rect::new(15.0, 0.0, 4.0, 4.0, colors::TRASH),
        ],
        ObstacleKind::Barrel => vec![
            Rect::new(2.0, 0.0, w - 4.0, h, colors::BARREL),
            Rect::new(2.0, 8.0, w - 4.0, 3.0, colors::BARREL_BAND),
            Rect::new(2.0, h - 11.0, w - 4.0, 3.0, colors::BARREL_BAND),
        ],
        ObstacleKind::Trash => vec![
            Rect::new(2.0, 15.0, 23.0, h - 15.0, colors::TRASH),
            Rect::new(20.0, 10.0, 20.0, h - 10.0, colors::SMOKESTACK),
            Rect::new(40.0, 25.0, 8.0, 3.0, colors::TRASH_BOTTLE),
        ],
    };
    rects.extend(parts.into_iter().map(|r| r.offset(ox, oy)));
}

fn push_overlay(scene: &mut Scene, state: &GameState) {
    scene.rects.push(Rect::new(
        0.0,
        0.0,
        GAME_WIDTH,
        GAME_HEIGHT,
        colors::OVERLAY,
    ));

    let game_over = state.status == GameStatus::GameOver;
    let (title, subtitle) = if game_over {
        ("Game Over".to_string(), format!("Score: {}", state.display_score()))
    } else {
        ("Eco Jumper".to_string(), format!("High Score: {}", state.high_score))
    };
    let center = GAME_WIDTH / 2.0;
    let middle = GAME_HEIGHT / 2.0;

    scene.texts.push(TextItem {
        text: title,
        x: center,
        y: middle - 20.0,
        size: 36.0,
        bold: true,
        anchor: TextAnchor::Middle,
        color: colors::TITLE_TEXT,
    });
    scene.texts.push(TextItem {
        text: subtitle,
        x: center,
        y: middle + 20.0,
        size: 18.0,
        bold: false,
        anchor: TextAnchor::Middle,
        color: colors::HUD_TEXT,
    });
    scene.texts.push(TextItem {
        text: "Press Space or Tap to Play".to_string(),
        x: center,
        y: middle + 50.0,
        size: 16.0,
        bold: false,
        anchor: TextAnchor::Middle,
        color: colors::HUD_TEXT,
    });
}
