//! Browser bindings
//!
//! The page owns the canvas, the input handlers and the animation-frame loop.
//! Each animation frame it forwards paddle positions, calls `frame()`, and
//! draws from `snapshot()`.

use wasm_bindgen::prelude::*;

use super::{FrameDriver, TickInput};
use crate::config::Config;
use crate::sim::Engine;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Volley Pong starting...");
}

/// Game instance exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver,
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsError> {
        let config = match config_json {
            Some(json) => Config::from_json(&json)?,
            None => Config::default(),
        };
        Ok(Self {
            driver: FrameDriver::new(Engine::new(config)?),
            input: TickInput::default(),
        })
    }

    pub fn move_p1(&mut self, y: f32) {
        self.input.p1 = Some(y);
    }

    pub fn move_p2(&mut self, y: f32) {
        self.input.p2 = Some(y);
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn paused(&self) -> bool {
        self.driver.phase() == super::DriverPhase::Paused
    }

    /// Advance one frame, returning the frame's events as JSON
    pub fn frame(&mut self) -> Result<String, JsError> {
        let input = std::mem::take(&mut self.input);
        let events = self.driver.frame(&input);
        Ok(serde_json::to_string(&events)?)
    }

    /// Current ball/paddle/score state as JSON
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.driver.engine().snapshot())?)
    }
}
