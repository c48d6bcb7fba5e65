//! Browser bindings
//!
//! Levels cross the boundary as plain JS objects in the `LevelSchema` shape.

use wasm_bindgen::prelude::*;

use crate::level::LevelSchema;
use crate::sim::{Difficulty, generate_level};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Arrow Escape level generator ready");
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `generateLevel(difficulty, levelNumber, seedModifier?)`
#[wasm_bindgen(js_name = generateLevel)]
pub async fn generate_level_js(
    difficulty: String,
    level_number: u32,
    seed_modifier: Option<i32>,
) -> Result<JsValue, JsValue> {
    let difficulty: Difficulty = difficulty.parse().map_err(to_js_error)?;
    let level = generate_level(difficulty, level_number, i64::from(seed_modifier.unwrap_or(0))).await;
    let json = LevelSchema::from_config(&level).to_json().map_err(to_js_error)?;
    js_sys::JSON::parse(&json)
}

/// Campaign tier for a level number ("easy" | "medium" | "hard")
#[wasm_bindgen(js_name = difficultyForLevel)]
pub fn difficulty_for_level(level_number: u32) -> String {
    Difficulty::for_level(level_number).as_str().to_string()
}
