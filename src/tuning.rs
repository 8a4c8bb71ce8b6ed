//! Data-driven game balance
//!
//! Every physics, geometry and difficulty knob lives here. Defaults come from
//! [`crate::consts`]; JSON overrides may be partial.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    /// Negative = upward
    pub jump_impulse: f32,

    // === Difficulty ===
    pub base_speed: f32,
    pub score_per_speed_step: u64,
    pub base_spawn_interval: u64,
    pub spawn_interval_per_speed: f32,
    pub min_spawn_interval: u64,

    // === Obstacles ===
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,

    // === HUD ===
    pub score_publish_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            base_speed: BASE_SPEED,
            score_per_speed_step: SCORE_PER_SPEED_STEP,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            spawn_interval_per_speed: SPAWN_INTERVAL_PER_SPEED,
            min_spawn_interval: MIN_SPAWN_INTERVAL,

            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,

            score_publish_interval: SCORE_PUBLISH_INTERVAL,
        }
    }
}

impl Tuning {
    /// Parse (possibly partial) overrides; missing keys keep their defaults.
    /// The result is sanitized before it is returned.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Ground line the player's top edge rests on
    #[inline]
    pub fn player_rest_y(&self) -> f32 {
        self.ground_y - self.player_height
    }

    /// Clamp values that would break simulation invariants (non-finite
    /// numbers, non-positive speed or gravity, a downward jump, zero cadences,
    /// inverted ranges). Offending fields fall back to defaults.
    pub fn sanitized(mut self) -> Self {
        let d = Tuning::default();

        ensure(&mut self.field_width, d.field_width, "field_width", |v| v > 0.0);
        ensure(&mut self.field_height, d.field_height, "field_height", |v| v > 0.0);
        ensure(&mut self.ground_y, d.ground_y, "ground_y", |_| true);
        ensure(&mut self.player_x, d.player_x, "player_x", |_| true);
        ensure(&mut self.player_width, d.player_width, "player_width", |v| v > 0.0);
        ensure(&mut self.player_height, d.player_height, "player_height", |v| v > 0.0);
        ensure(&mut self.gravity, d.gravity, "gravity", |v| v > 0.0);
        ensure(&mut self.jump_impulse, d.jump_impulse, "jump_impulse", |v| v < 0.0);
        ensure(&mut self.base_speed, d.base_speed, "base_speed", |v| v > 0.0);
        ensure(
            &mut self.spawn_interval_per_speed,
            d.spawn_interval_per_speed,
            "spawn_interval_per_speed",
            |v| v >= 0.0,
        );

        if self.score_per_speed_step == 0 {
            log::warn!("score_per_speed_step must be >= 1, using {}", d.score_per_speed_step);
            self.score_per_speed_step = d.score_per_speed_step;
        }
        if self.min_spawn_interval == 0 {
            log::warn!("min_spawn_interval must be >= 1, using {}", d.min_spawn_interval);
            self.min_spawn_interval = d.min_spawn_interval;
        }

        let widths_ok = self.obstacle_min_width.is_finite()
            && self.obstacle_max_width.is_finite()
            && self.obstacle_min_width > 0.0
            && self.obstacle_max_width >= self.obstacle_min_width;
        if !widths_ok {
            log::warn!("Invalid obstacle width range, using defaults");
            self.obstacle_min_width = d.obstacle_min_width;
            self.obstacle_max_width = d.obstacle_max_width;
        }
        let heights_ok = self.obstacle_min_height.is_finite()
            && self.obstacle_max_height.is_finite()
            && self.obstacle_min_height > 0.0
            && self.obstacle_max_height >= self.obstacle_min_height;
        if !heights_ok {
            log::warn!("Invalid obstacle height range, using defaults");
            self.obstacle_min_height = d.obstacle_min_height;
            self.obstacle_max_height = d.obstacle_max_height;
        }

        if self.score_publish_interval == 0 {
            self.score_publish_interval = 1;
        }

        self
    }
}

/// Reset `value` to `default` if it is non-finite or fails `valid`
fn ensure(value: &mut f32, default: f32, name: &str, valid: impl Fn(f32) -> bool) {
    if !value.is_finite() || !valid(*value) {
        log::warn!("Invalid {}: {}, using {}", name, value, default);
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "base_speed": 7.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.base_speed, 7.0);
        assert_eq!(tuning.ground_y, GROUND_Y);
        assert_eq!(tuning.min_spawn_interval, MIN_SPAWN_INTERVAL);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_sanitize_rejects_degenerate_values() {
        let tuning = Tuning::from_json(
            r#"{ "min_spawn_interval": 0, "score_per_speed_step": 0,
                 "obstacle_min_width": 50.0, "obstacle_max_width": 10.0 }"#,
        )
        .unwrap();
        assert_eq!(tuning.min_spawn_interval, MIN_SPAWN_INTERVAL);
        assert_eq!(tuning.score_per_speed_step, SCORE_PER_SPEED_STEP);
        assert_eq!(tuning.obstacle_min_width, OBSTACLE_MIN_WIDTH);
        assert_eq!(tuning.obstacle_max_width, OBSTACLE_MAX_WIDTH);
    }

    #[test]
    fn test_sanitize_rejects_broken_motion() {
        let tuning = Tuning::from_json(
            r#"{ "base_speed": -1.0, "gravity": 0.0, "jump_impulse": 15.0,
                 "spawn_interval_per_speed": -1e30 }"#,
        )
        .unwrap();
        assert_eq!(tuning.base_speed, BASE_SPEED);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.spawn_interval_per_speed, SPAWN_INTERVAL_PER_SPEED);

        let stopped = Tuning::from_json(r#"{ "base_speed": 0.0 }"#).unwrap();
        assert_eq!(stopped.base_speed, BASE_SPEED);
    }

    #[test]
    fn test_sanitize_rejects_non_finite() {
        let tuning = Tuning {
            gravity: f32::NAN,
            base_speed: f32::INFINITY,
            field_width: f32::NAN,
            obstacle_max_height: f32::NAN,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_sanitized_tuning_keeps_simulation_sane() {
        use crate::sim::{GamePhase, GameState, on_jump_intent, tick};

        let tuning = Tuning::from_json(r#"{ "base_speed": -1.0, "gravity": 0.0 }"#).unwrap();
        let mut state = GameState::with_tuning(tuning, 5);
        on_jump_intent(&mut state);
        on_jump_intent(&mut state);

        for _ in 0..90 {
            tick(&mut state);
        }
        // The jump came back down
        assert!(!state.player().airborne);
        assert_eq!(state.player().pos.y, state.tuning().player_rest_y());

        for _ in 0..30 {
            tick(&mut state);
        }
        // Spawned on frame 95 and scrolled left at the default speed since
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.obstacles().len(), 1);
        assert_eq!(state.obstacles()[0].x, 800.0 - 5.0 * 26.0);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }

    #[test]
    fn test_player_rest_y() {
        assert_eq!(Tuning::default().player_rest_y(), 250.0);
    }
}
