//! Bird Strike - a scrolling-sky arcade mini-game
//!
//! Core modules:
//! - `sim`: Game state, input, round timer and per-frame simulation
//! - `assets`: Ready flags and native sizes of the three sprite images
//! - `renderer`: Frame composition onto a 2D drawing surface
//! - `scoreboard`: Timer / score / best-score formatting
//! - `game`: Frame driver and event dispatch tying it all together
//! - `platform`: Browser glue (timers, keyboard, image loading)
//! - `settings`: Tunable game configuration

pub mod assets;
pub mod error;
pub mod game;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use assets::{AssetRole, AssetStore};
pub use error::GameError;
pub use game::{FrameOutcome, Game, GameEvent, TimerCommand};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Drawing surface size
    pub const CANVAS_WIDTH: f32 = 850.0;
    pub const CANVAS_HEIGHT: f32 = 510.0;

    /// Length of one round in seconds
    pub const ROUND_DURATION_SECS: u32 = 50;

    /// Player (plane) defaults
    pub const PLAYER_SPEED: f32 = 300.0; // pixels/second
    pub const PLAYER_WIDTH: f32 = 180.0;
    pub const PLAYER_HEIGHT: f32 = 280.0;

    /// Target (bird) defaults
    pub const TARGET_WIDTH: f32 = 60.0;
    pub const TARGET_HEIGHT: f32 = 60.0;

    /// Background scroll speed (pixels/second)
    pub const BACKGROUND_SPEED: f32 = 100.0;

    /// How far inside the canvas edge the wrap limits sit
    pub const WRAP_INSET: f32 = 10.0;

    /// Frame ticker period (~60 Hz)
    pub const FRAME_INTERVAL_MS: i32 = 16;
    /// Round countdown ticker period
    pub const ROUND_TICK_MS: i32 = 1000;
}
