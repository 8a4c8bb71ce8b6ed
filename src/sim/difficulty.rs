//! Difficulty scaling: scroll speed and spawn cadence from score

use crate::tuning::Tuning;

/// `base_speed + floor(score / score_per_speed_step)`, a step function
pub fn speed_for_score(score: u64, tuning: &Tuning) -> f32 {
    tuning.base_speed + (score / tuning.score_per_speed_step) as f32
}

/// Ticks between spawns: `max(min, base - floor(speed * per_speed))`
pub fn spawn_interval(speed: f32, tuning: &Tuning) -> u64 {
    let shortening = (speed * tuning.spawn_interval_per_speed).floor().max(0.0) as u64;
    tuning
        .base_spawn_interval
        .saturating_sub(shortening)
        .max(tuning.min_spawn_interval)
}

/// Whether an obstacle spawns on this (already incremented) frame
pub fn should_spawn(frame: u64, speed: f32, tuning: &Tuning) -> bool {
    frame > 0 && frame.is_multiple_of(spawn_interval(speed, tuning))
}
