//! Game configuration
//!
//! Defaults come from [`crate::consts`]. In the browser an optional JSON
//! override can be placed in LocalStorage; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Image locations by role, relative to the served page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub player: String,
    pub target: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "./sat.png".to_string(),
            player: "./plane1.png".to_string(),
            target: "./favicon.png".to_string(),
        }
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Surface ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Round ===
    /// Countdown length in seconds
    pub round_duration_secs: u32,

    // === Sprites ===
    /// Player speed in pixels/second
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub target_width: f32,
    pub target_height: f32,
    /// Background scroll speed in pixels/second
    pub background_speed: f32,
    /// Distance of the wrap limits from the canvas edge
    pub wrap_inset: f32,

    // === Tickers ===
    pub frame_interval_ms: i32,
    pub round_tick_ms: i32,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            round_duration_secs: ROUND_DURATION_SECS,
            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            background_speed: BACKGROUND_SPEED,
            wrap_inset: WRAP_INSET,
            frame_interval_ms: FRAME_INTERVAL_MS,
            round_tick_ms: ROUND_TICK_MS,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bird_strike_config";

    /// Parse a JSON override. Unknown or missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load configuration from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring malformed config override: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
