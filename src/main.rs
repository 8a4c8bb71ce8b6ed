//! Infinite Runner entry point
//!
//! The browser build is driven from JavaScript through `web::Runner`. The
//! native binary runs a headless autopilot demo and logs the outcome.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use infinite_runner::hud::ScoreFeed;
    use infinite_runner::sim::{GamePhase, GameState, autopilot, on_jump_intent, tick};

    /// Five minutes of play at 60 Hz per run
    const DEMO_FRAME_CAP: u64 = 60 * 60 * 5;
    /// Runs per demo session
    const DEMO_RUNS: usize = 3;

    env_logger::init();
    log::info!("Infinite Runner (native) starting...");
    log::info!("Native mode is a headless demo - serve the wasm build for the playable version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    let mut state = GameState::new(seed);
    let mut feed = ScoreFeed::new();
    let interval = state.tuning().score_publish_interval;

    for run in 1..=DEMO_RUNS {
        // Leaves the menu on the first run, restarts after game over
        on_jump_intent(&mut state);

        while state.phase() == GamePhase::Playing && state.frame() < DEMO_FRAME_CAP {
            if autopilot::should_jump(&state) {
                on_jump_intent(&mut state);
            }
            tick(&mut state);

            if let Some(score) = feed.update(&state.snapshot(), interval) {
                if score % 500 == 0 {
                    log::info!("Score {} - speed {}", score, state.speed());
                }
            }
        }

        let snapshot = state.snapshot();
        println!(
            "Run {} finished ({:?}): score {}, speed {}, {} ticks, board rank {:?}",
            run, snapshot.phase, snapshot.score, snapshot.speed, snapshot.frame, snapshot.board_rank
        );
        if snapshot.phase == GamePhase::Playing {
            // Hit the frame cap; nothing more to learn from this seed
            break;
        }
    }

    println!("High score: {}", state.high_score());
    for (rank, run) in state.high_scores().runs().iter().enumerate() {
        println!(
            "  #{:<2} {:>6} pts  {:>6} ticks  top speed {}",
            rank + 1,
            run.score,
            run.frames,
            run.peak_speed
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
