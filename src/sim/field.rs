//! Obstacle field: spawn, scroll and cull
//!
//! Obstacles are appended at the right edge and all scroll at the same speed,
//! so the vector stays sorted left-to-right without re-sorting.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Source of spawn randomness. `roll` samples uniformly in [0, 1).
///
/// Tests plug in scripted sequences to pin exact spawn geometry.
pub trait SpawnRoll {
    fn roll(&mut self) -> f32;
}

impl SpawnRoll for Pcg32 {
    fn roll(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// A ground obstacle. Only `x` changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Trailing edge at or past the left boundary
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() <= 0.0
    }
}

#[inline]
fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}

/// Live obstacles in spawn order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Spawn a new obstacle at the right edge with randomized dimensions
    pub fn spawn(&mut self, rng: &mut impl SpawnRoll, tuning: &Tuning) -> Obstacle {
        let width = lerp(tuning.obstacle_min_width, tuning.obstacle_max_width, rng.roll());
        let height = lerp(tuning.obstacle_min_height, tuning.obstacle_max_height, rng.roll());
        let obstacle = Obstacle {
            x: tuning.field_width,
            width,
            height,
        };
        log::debug!("Spawned obstacle {}x{} ({} live)", width, height, self.obstacles.len() + 1);
        self.push(obstacle);
        obstacle
    }

    /// Append an already-built obstacle. It must not sit left of the current
    /// rightmost one, or spawn order would stop matching position order.
    pub fn push(&mut self, obstacle: Obstacle) {
        debug_assert!(self.obstacles.last().is_none_or(|last| last.x <= obstacle.x));
        self.obstacles.push(obstacle);
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop fully offscreen obstacles. Returns how many were removed.
    pub fn cull(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("Culled {} obstacle(s)", removed);
        }
        removed
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Replays a fixed sequence of rolls, cycling when exhausted
    pub(crate) struct Scripted {
        rolls: Vec<f32>,
        next: usize,
    }

    impl Scripted {
        pub(crate) fn new(rolls: &[f32]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl SpawnRoll for Scripted {
        fn roll(&mut self) -> f32 {
            let value = self.rolls[self.next % self.rolls.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn test_spawn_geometry_from_rolls() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut rng = Scripted::new(&[0.5, 0.25]);

        let obstacle = field.spawn(&mut rng, &tuning);
        assert_eq!(obstacle.x, 800.0);
        assert_eq!(obstacle.width, 30.0);
        assert_eq!(obstacle.height, 40.0);
        assert_eq!(field.obstacles(), &[obstacle]);
    }

    #[test]
    fn test_spawn_bounds_with_real_rng() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..500 {
            let o = field.spawn(&mut rng, &tuning);
            assert!((20.0..40.0).contains(&o.width), "width {}", o.width);
            assert!((30.0..70.0).contains(&o.height), "height {}", o.height);
            field.clear();
        }
    }

    #[test]
    fn test_obstacle_removed_after_exact_ticks() {
        let speed = 5.0;
        for width in [20.0_f32, 23.0, 37.0] {
            let mut field = ObstacleField::new();
            field.push(Obstacle { x: 800.0, width, height: 40.0 });

            let mut ticks = 0;
            while !field.is_empty() {
                field.advance(speed);
                field.cull();
                ticks += 1;
            }

            let expected = ((800.0 + width) / speed).ceil() as u32;
            assert_eq!(ticks, expected, "width {}", width);
        }
    }

    #[test]
    fn test_cull_keeps_partially_visible() {
        let mut field = ObstacleField::new();
        field.push(Obstacle { x: -20.0, width: 20.0, height: 30.0 });
        field.push(Obstacle { x: -19.0, width: 20.0, height: 30.0 });
        field.push(Obstacle { x: 400.0, width: 20.0, height: 30.0 });

        assert_eq!(field.cull(), 1);
        assert_eq!(field.len(), 2);
        assert_eq!(field.obstacles()[0].x, -19.0);
    }

    #[test]
    fn test_advance_preserves_order() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut rng = Scripted::new(&[0.1, 0.9, 0.4]);

        for _ in 0..5 {
            field.spawn(&mut rng, &tuning);
            for _ in 0..30 {
                field.advance(5.0);
                field.cull();
            }
        }

        let xs: Vec<f32> = field.obstacles().iter().map(|o| o.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "{:?}", xs);
    }
}
