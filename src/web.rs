//! Browser bindings
//!
//! Exposes the four host entry points to JavaScript. Frames cross the
//! boundary as JSON strings; the page owns the timer, input and drawing.

use wasm_bindgen::prelude::*;

use crate::config::{GameConfig, Preset};
use crate::game::{Frame, Game};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialized by an earlier module instance
        return;
    }
    log::info!("Flappy Sim starting...");
}

fn frame_json(frame: Option<Frame>) -> Option<String> {
    frame.and_then(|f| serde_json::to_string(&f).ok())
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    /// AI plays (attract/demo mode)
    idle_mode: bool,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config_json` may be empty for defaults; `preset` is applied on top
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, preset: &str) -> Result<WasmGame, JsValue> {
        let mut config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        if let Some(preset) = Preset::from_str(preset) {
            config.apply_preset(preset);
        }

        let seed = js_sys::Date::now() as u64;
        let game = Game::with_seed(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame {
            game,
            idle_mode: false,
        })
    }

    /// Host timer callback; returns the frame as JSON (undefined after quit)
    pub fn on_tick(&mut self) -> Option<String> {
        if self.idle_mode && self.game.autopilot_wants_jump() {
            self.game.on_jump();
        }
        frame_json(self.game.on_tick())
    }

    pub fn on_jump(&mut self) -> bool {
        self.game.on_jump()
    }

    pub fn on_restart(&mut self) -> Option<String> {
        frame_json(self.game.on_restart())
    }

    pub fn on_quit(&mut self) {
        self.game.on_quit();
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
        log::info!("Idle mode: {}", idle);
    }

    pub fn snapshot_json(&self) -> Option<String> {
        self.game
            .snapshot()
            .and_then(|s| serde_json::to_string(&s).ok())
    }

    /// Timer period the page should use, in milliseconds
    pub fn tick_interval_ms(&self) -> u32 {
        self.game
            .session()
            .map(|s| s.config.tick_interval_ms)
            .unwrap_or(crate::consts::TICK_INTERVAL_MS)
    }
}
