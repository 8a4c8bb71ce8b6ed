//! Game state and core simulation types
//!
//! `GameState` owns everything a run needs. Only [`super::tick`] and
//! [`super::on_jump_intent`] mutate it; collaborators read [`Snapshot`]s.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::speed_for_score;
use super::field::{Obstacle, ObstacleField, SpawnRoll};
use super::player::Player;
use crate::highscores::{HighScores, RunRecord};
use crate::tuning::Tuning;

/// Lifecycle of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Title screen, waiting for the first jump
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Run ended; last frame stays frozen until the next jump
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) phase: GamePhase,
    pub(crate) player: Player,
    pub(crate) field: ObstacleField,
    /// Authoritative score (+1 per playing tick)
    pub(crate) score: u64,
    /// Current scroll speed (pixels/tick)
    pub(crate) speed: f32,
    /// Ticks since the run started
    pub(crate) frame: u64,
    pub(crate) high_scores: HighScores,
    /// Board position of the run that just ended
    pub(crate) last_rank: Option<usize>,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// Default balance, seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: SpawnRoll> GameState<R> {
    /// Fresh state in the menu with the given spawn randomness
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let tuning = tuning.sanitized();
        Self {
            player: Player::at_rest(&tuning),
            field: ObstacleField::new(),
            score: 0,
            speed: speed_for_score(0, &tuning),
            frame: 0,
            phase: GamePhase::Menu,
            high_scores: HighScores::new(),
            last_rank: None,
            rng,
            tuning,
        }
    }

    /// Reset run state (player, field, speed, frame, score).
    /// The session high score and the lifecycle phase are untouched.
    pub(crate) fn reset_run(&mut self) {
        self.player = Player::at_rest(&self.tuning);
        self.field.clear();
        self.score = 0;
        self.speed = speed_for_score(0, &self.tuning);
        self.frame = 0;
        self.last_rank = None;
    }

    /// Reset and enter Playing
    pub(crate) fn start_run(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Playing;
        log::info!("Run started");
    }

    /// Enter GameOver and fold the final score into the high score
    pub(crate) fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.last_rank = self.high_scores.record(RunRecord {
            score: self.score,
            frames: self.frame,
            peak_speed: self.speed,
        });
        log::info!(
            "Game over: score {} after {} ticks at speed {} (best {}, rank {:?})",
            self.score,
            self.frame,
            self.speed,
            self.high_scores.best(),
            self.last_rank
        );
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.best()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Immutable view for renderers and HUD widgets
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: PlayerView {
                x: self.player.pos.x,
                y: self.player.pos.y,
                width: self.player.size.x,
                height: self.player.size.y,
                airborne: self.player.airborne,
            },
            obstacles: self.field.obstacles().to_vec(),
            score: self.score,
            speed: self.speed,
            high_score: self.high_scores.best(),
            board_rank: self.last_rank,
            frame: self.frame,
            field_width: self.tuning.field_width,
            field_height: self.tuning.field_height,
            ground_y: self.tuning.ground_y,
        }
    }
}

/// Player as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub airborne: bool,
}

/// Read-only copy of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Left-to-right
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub speed: f32,
    pub high_score: u64,
    /// Set on game over when the run made the session board
    pub board_rank: Option<usize>,
    pub frame: u64,
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_menu_at_rest() {
        let state = GameState::new(1);
        assert_eq!(state.phase(), GamePhase::Menu);
        assert_eq!(state.score(), 0);
        assert_eq!(state.speed(), 5.0);
        assert_eq!(state.player().pos.y, 250.0);
        assert!(state.obstacles().is_empty());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = GameState::new(1);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "menu");
        assert_eq!(json["player"]["x"], 80.0);
        assert_eq!(json["player"]["height"], 50.0);
        assert_eq!(json["speed"], 5.0);
        assert!(json["obstacles"].as_array().is_some_and(|a| a.is_empty()));
        assert!(json["board_rank"].is_null());
    }

    #[test]
    fn test_end_run_ranks_on_board() {
        let mut state = GameState::new(1);
        state.start_run();
        state.score = 40;
        state.frame = 40;
        state.end_run();
        assert_eq!(state.snapshot().board_rank, Some(1));
        assert_eq!(state.high_scores().runs()[0].frames, 40);

        state.start_run();
        state.score = 10;
        state.frame = 10;
        state.end_run();
        assert_eq!(state.snapshot().board_rank, Some(2));
        assert_eq!(state.high_score(), 40);

        state.start_run();
        assert_eq!(state.snapshot().board_rank, None);
    }
}
