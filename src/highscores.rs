//! Session high score
//!
//! Lives for the process lifetime only; nothing is written to storage.
//! Besides the best score it keeps a small board of the top finished runs,
//! which the game-over screen and the demo driver show.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep on the board
pub const MAX_RUNS: usize = 10;

/// A finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Final score
    pub score: u64,
    /// Ticks survived
    pub frames: u64,
    /// Scroll speed at the moment of collision
    pub peak_speed: f32,
}

/// Best score plus the top runs of this session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    best: u64,
    /// Sorted descending by score; ties keep arrival order
    runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// High score: max over every recorded final score
    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Fold a finished run in. The best score becomes `max(best, run.score)`.
    /// Returns the 1-indexed board position, or None for zero-score runs and
    /// runs that fall off the bottom of a full board.
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        if run.score > self.best {
            log::info!("New high score: {} (was {})", run.score, self.best);
            self.best = run.score;
        }
        if run.score == 0 {
            return None;
        }

        let slot = self.runs.partition_point(|r| r.score >= run.score);
        if slot >= MAX_RUNS {
            return None;
        }
        self.runs.insert(slot, run);
        self.runs.truncate(MAX_RUNS);
        Some(slot + 1)
    }
}
