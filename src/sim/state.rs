//! Game state and core simulation types
//!
//! Everything the frame loop, key handlers and round ticker mutate lives in
//! [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::round::{RoundState, RoundTick};
use crate::settings::GameConfig;

/// An axis-aligned sprite: top-left position plus drawn size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Sprite {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Half of the sprite's size, used as its "reach" in the hit test
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// The player's plane
#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
    /// Pixels per second
    pub speed: f32,
}

/// The bird the player tries to hit
#[derive(Debug, Clone)]
pub struct Target {
    pub sprite: Sprite,
}

/// The scrolling sky
#[derive(Debug, Clone)]
pub struct Background {
    /// Pixels per second
    pub speed: f32,
}

/// Playing-field dimensions and wrap-around limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Distance of the wrap limits from the canvas edge
    pub wrap_inset: f32,
}

impl Field {
    /// Right-hand wrap limit
    #[inline]
    pub fn width_limit(&self) -> f32 {
        self.width - self.wrap_inset
    }

    /// Bottom wrap limit
    #[inline]
    pub fn height_limit(&self) -> f32 {
        self.height - self.wrap_inset
    }

    /// How far past the left/top edge a sprite may travel before wrapping.
    /// Both axes use the sprite width.
    #[inline]
    pub fn near_limit(&self, sprite: &Sprite) -> f32 {
        sprite.size.x - self.wrap_inset
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub player: Player,
    pub target: Target,
    pub background: Background,
    pub round: RoundState,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state: player centered, target placed at random
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut state = Self {
            field: Field {
                width: config.canvas_width,
                height: config.canvas_height,
                wrap_inset: config.wrap_inset,
            },
            player: Player {
                sprite: Sprite::new(
                    Vec2::ZERO,
                    Vec2::new(config.player_width, config.player_height),
                ),
                speed: config.player_speed,
            },
            target: Target {
                sprite: Sprite::new(
                    Vec2::ZERO,
                    Vec2::new(config.target_width, config.target_height),
                ),
            },
            background: Background {
                speed: config.background_speed,
            },
            round: RoundState::new(config.round_duration_secs),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.reset_positions();
        state
    }

    /// Whether a round is counting down
    #[inline]
    pub fn round_active(&self) -> bool {
        self.round.is_running()
    }

    /// Recenter the player (only between rounds) and move the target somewhere new
    pub fn reset_positions(&mut self) {
        if !self.round_active() {
            self.center_player();
        }
        self.reposition_target();
    }

    /// One-second countdown tick; a finished round also resets positions
    pub fn round_tick(&mut self) -> RoundTick {
        let tick = self.round.tick();
        if let RoundTick::Ended { .. } = tick {
            self.reset_positions();
        }
        tick
    }

    pub fn center_player(&mut self) {
        let size = self.player.sprite.size;
        self.player.sprite.pos = Vec2::new(
            self.field.width / 2.0 - size.x / 2.0,
            self.field.height / 2.0 - size.y / 2.0,
        );
    }

    /// Place the target uniformly at random, whole pixels, fully on the canvas
    pub fn reposition_target(&mut self) {
        let size = self.target.sprite.size;
        let max_x = (self.field.width - size.x).max(0.0);
        let max_y = (self.field.height - size.y).max(0.0);

        let x = (self.rng.random::<f32>() * max_x).round();
        let y = (self.rng.random::<f32>() * max_y).round();
        self.target.sprite.pos = Vec2::new(x, y);
        log::debug!("Target moved to ({}, {})", x, y);
    }
}
