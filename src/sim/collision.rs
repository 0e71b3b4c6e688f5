//! Axis-aligned hitboxes

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::{PLAYER_WIDTH, PLAYER_X};

/// Axis-aligned box, `min` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; boxes that only touch edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Player hitbox at its fixed column
pub fn player_box(player: &Player) -> Aabb {
    Aabb::new(PLAYER_X, player.y, PLAYER_WIDTH, player.height)
}

/// Obstacle hitbox anchored to the ground line
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(obstacle.x, obstacle.y(), obstacle.width, obstacle.height)
}

/// Check whether the player touches any obstacle
pub fn hits_any(player: &Player, obstacles: &[Obstacle]) -> bool {
    let hitbox = player_box(player);
    obstacles.iter().any(|o| hitbox.overlaps(&obstacle_box(o)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_Y;
    use crate::sim::state::ObstacleKind;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_grounded_player_hits_obstacle_in_column() {
        let player = Player::default();
        let barrel = Obstacle::new(ObstacleKind::Barrel, 60.0, 300.0);
        assert!(hits_any(&player, &[barrel]));

        let far = Obstacle::new(ObstacleKind::Barrel, 200.0, 300.0);
        assert!(!hits_any(&player, &[far]));
    }

    #[test]
    fn test_high_jump_clears_obstacle() {
        let player = Player {
            y: GROUND_Y - 60.0 - 48.0,
            ..Player::default()
        };
        let stack = Obstacle::new(ObstacleKind::Smokestack, 60.0, 300.0);
        assert!(!hits_any(&player, &[stack]));
    }
}
