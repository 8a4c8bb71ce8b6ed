//! Per-frame simulation step and jump intent routing
//!
//! Order inside a playing tick: player physics, obstacle field
//! (spawn, scroll, cull), collision, then score and speed.

use super::collision::first_collision;
use super::difficulty::{should_spawn, speed_for_score};
use super::field::SpawnRoll;
use super::state::{GamePhase, GameState};

/// Route a jump request: starts a run from Menu/GameOver, jumps while Playing
pub fn on_jump_intent<R: SpawnRoll>(state: &mut GameState<R>) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => state.start_run(),
        GamePhase::Playing => {
            state.player.jump(state.tuning.jump_impulse);
        }
    }
}

/// Advance the game state by one frame. No-op outside Playing.
pub fn tick<R: SpawnRoll>(state: &mut GameState<R>) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    let rest_y = state.tuning.player_rest_y();
    state.player.step(state.tuning.gravity, rest_y);

    state.frame += 1;
    if should_spawn(state.frame, state.speed, &state.tuning) {
        state.field.spawn(&mut state.rng, &state.tuning);
    }
    state.field.advance(state.speed);
    state.field.cull();

    if let Some(index) =
        first_collision(&state.player, state.field.obstacles(), state.tuning.ground_y)
    {
        log::debug!("Collision with obstacle {} at frame {}", index, state.frame);
        state.end_run();
        return;
    }

    state.score += 1;
    state.speed = speed_for_score(state.score, &state.tuning);
}
