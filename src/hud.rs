//! HUD helpers for the presentation layer
//!
//! The simulation score is always exact; widgets only need a refresh every
//! few frames, so `ScoreFeed` decides when the displayed value changes.

use crate::sim::{GamePhase, Snapshot};

/// Throttled copy of the score for display widgets
#[derive(Debug, Clone, Default)]
pub struct ScoreFeed {
    displayed: u64,
    last_phase: Option<GamePhase>,
}

impl ScoreFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score currently shown
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// Feed the latest snapshot. Returns the new value when the display should
    /// refresh: on any phase change, and every `interval` frames while playing.
    pub fn update(&mut self, snapshot: &Snapshot, interval: u64) -> Option<u64> {
        let phase_changed = self.last_phase != Some(snapshot.phase);
        self.last_phase = Some(snapshot.phase);

        let due = snapshot.phase == GamePhase::Playing
            && snapshot.frame.is_multiple_of(interval.max(1));

        if (phase_changed || due) && self.displayed != snapshot.score {
            self.displayed = snapshot.score;
            return Some(self.displayed);
        }
        None
    }
}
