//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert a 0xRRGGBB literal to RGBA floats
pub const fn rgb(hex: u32) -> [f32; 4] {
    rgba(hex, 1.0)
}

pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::{rgb, rgba};

    pub const SKY: [f32; 4] = rgb(0xa0e0ff);
    pub const CITY: [f32; 4] = rgb(0xc0d0e0);
    pub const TURBINE: [f32; 4] = rgb(0xf0f0f0);
    pub const SOLAR_PANEL: [f32; 4] = rgb(0x4a90e2);
    pub const TREE_TRUNK: [f32; 4] = rgb(0x6d4c22);
    pub const GROUND: [f32; 4] = rgb(0xb9936c);
    pub const GRASS: [f32; 4] = rgb(0x78ab2c);
    pub const FLOWER: [f32; 4] = rgb(0xff6b6b);
    pub const CLOUD: [f32; 4] = rgb(0xffffff);
    pub const PLAYER: [f32; 4] = rgb(0x78ab2c);
    pub const PLAYER_SHADE: [f32; 4] = rgb(0x5c8a22);
    pub const PLAYER_EYE: [f32; 4] = rgb(0xffffff);
    pub const SMOKESTACK: [f32; 4] = rgb(0xbdbdbd);
    pub const SMOKESTACK_TOP: [f32; 4] = rgb(0xe0e0e0);
    pub const BARREL: [f32; 4] = rgb(0xa1887f);
    pub const BARREL_BAND: [f32; 4] = rgb(0x6d4c41);
    pub const TRASH: [f32; 4] = rgb(0x424242);
    pub const TRASH_BOTTLE: [f32; 4] = rgb(0x81c784);
    pub const OVERLAY: [f32; 4] = rgba(0xf3f4f6, 0.7);
    pub const HUD_TEXT: [f32; 4] = rgb(0x6b7280);
    pub const TITLE_TEXT: [f32; 4] = rgb(0x1f2937);
}
