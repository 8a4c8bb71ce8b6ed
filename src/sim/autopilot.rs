//! Demo mode: a simple AI that jumps over obstacles
//!
//! Times each jump so the apex lands over the centre of the next obstacle.

use super::field::SpawnRoll;
use super::state::{GamePhase, GameState};

/// Whether the AI would press jump before the next tick
pub fn should_jump<R: SpawnRoll>(state: &GameState<R>) -> bool {
    if state.phase != GamePhase::Playing || state.player.airborne {
        return false;
    }

    let tuning = &state.tuning;
    let player = &state.player;
    let player_center = player.pos.x + player.size.x / 2.0;

    // Ticks from takeoff to apex (gravity is applied before each move)
    let apex_ticks = -tuning.jump_impulse / tuning.gravity;
    let lead = state.speed * apex_ticks;

    state
        .field
        .obstacles()
        .iter()
        .find(|o| o.right_edge() > player.pos.x)
        .is_some_and(|o| o.x + o.width / 2.0 - player_center <= lead)
}
