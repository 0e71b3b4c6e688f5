//! Eco Jumper rendering
//!
//! `scene` turns a `GameState` into coloured rectangles and HUD text; `shapes`
//! and `vertex` flatten those into triangle lists for a vertex buffer.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Rect, Scene, TextAnchor, TextItem, build_scene};
pub use vertex::Vertex;
