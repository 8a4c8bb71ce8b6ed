//! Collision detection between the player and ground obstacles
//!
//! Plain axis-aligned boxes with strict overlap, so touching edges never count
//! as a hit.

use glam::Vec2;

use super::field::Obstacle;
use super::player::Player;

/// Axis-aligned bounding box (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

pub fn player_box(player: &Player) -> Aabb {
    Aabb::from_pos_size(player.pos, player.size)
}

/// Obstacles stand on the ground line and extend `height` upward
pub fn obstacle_box(obstacle: &Obstacle, ground_y: f32) -> Aabb {
    Aabb {
        min: Vec2::new(obstacle.x, ground_y - obstacle.height),
        max: Vec2::new(obstacle.right_edge(), ground_y),
    }
}

/// Index of the first obstacle the player overlaps, if any
pub fn first_collision(player: &Player, obstacles: &[Obstacle], ground_y: f32) -> Option<usize> {
    let player = player_box(player);
    obstacles
        .iter()
        .position(|o| player.overlaps(&obstacle_box(o, ground_y)))
}
