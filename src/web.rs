//! WebAssembly binding
//!
//! The browser side owns the canvas, the input listeners and the
//! `requestAnimationFrame` loop; it calls `jump()` on input, `tick()` once per
//! frame and draws from `snapshot_json()`.

use wasm_bindgen::prelude::*;

use crate::hud::ScoreFeed;
use crate::sim::{GameState, autopilot, on_jump_intent, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Infinite Runner core loaded");
}

/// Game instance handed to JavaScript
#[wasm_bindgen]
pub struct Runner {
    state: GameState,
    feed: ScoreFeed,
    autopilot: bool,
}

impl Runner {
    fn from_state(state: GameState) -> Runner {
        log::info!("Game initialized");
        Runner {
            state,
            feed: ScoreFeed::new(),
            autopilot: false,
        }
    }
}

#[wasm_bindgen]
impl Runner {
    /// New game in the menu. Pass e.g. `Date.now()` as the seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Runner {
        Self::from_state(GameState::new(seed as u64))
    }

    /// Like `new`, with balance overrides as JSON
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(seed: f64, tuning_json: &str) -> Result<Runner, JsValue> {
        let tuning = Tuning::from_json(tuning_json).map_err(|e| {
            log::warn!("Rejected tuning: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self::from_state(GameState::with_tuning(tuning, seed as u64)))
    }

    /// Jump intent from keyboard/pointer
    pub fn jump(&mut self) {
        on_jump_intent(&mut self.state);
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if self.autopilot && autopilot::should_jump(&self.state) {
            on_jump_intent(&mut self.state);
        }
        tick(&mut self.state);

        let interval = self.state.tuning().score_publish_interval;
        self.feed.update(&self.state.snapshot(), interval);
    }

    /// Demo mode: the AI jumps for the player
    #[wasm_bindgen(js_name = setAutopilot)]
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Current frame as JSON (phase, player, obstacles, score, speed, ...)
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.state.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                String::from("{}")
            }
        }
    }

    /// Throttled score for the HUD widget
    #[wasm_bindgen(js_name = displayedScore)]
    pub fn displayed_score(&self) -> f64 {
        self.feed.displayed() as f64
    }

    /// Session board (top runs, best first) as JSON
    #[wasm_bindgen(js_name = runsJson)]
    pub fn runs_json(&self) -> String {
        match serde_json::to_string(self.state.high_scores().runs()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Board serialization failed: {}", e);
                String::from("[]")
            }
        }
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> f64 {
        self.state.high_score() as f64
    }
}
