//! Frame driver and event dispatch
//!
//! [`Game`] owns every piece of mutable state. Browser callbacks (key events,
//! image loads, the one-second ticker) become [`GameEvent`]s; the 16 ms ticker
//! calls [`Game::frame`]. Ticker arming and cancelling is handed back to the
//! caller as [`TimerCommand`]s so this module never touches the platform.

use crate::assets::{AssetRole, AssetStore};
use crate::error::GameError;
use crate::renderer::{self, Surface};
use crate::scoreboard::{self, ScoreDisplay};
use crate::settings::GameConfig;
use crate::sim::{GameState, InputState, KeyDown, RoundTick, step};

/// Something that happened outside the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    KeyDown(u32),
    KeyUp(u32),
    /// One second of the round countdown elapsed
    RoundTick,
    /// An image finished decoding at its native size
    AssetLoaded {
        role: AssetRole,
        width: f32,
        height: f32,
    },
}

/// Work for whoever owns the round ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    ArmRoundTicker,
    CancelRoundTicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Assets still loading; nothing ran
    Skipped,
    Ran { hit: bool },
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub assets: AssetStore,
    /// Timestamp (ms) of the last frame that ran
    last_frame_ms: f64,
}

impl Game {
    pub fn new(config: &GameConfig, seed: u64, now_ms: f64) -> Self {
        let state = GameState::new(config, seed);
        Self {
            state,
            input: InputState::new(),
            assets: AssetStore::new(),
            last_frame_ms: now_ms,
        }
    }

    /// Apply one event. Returns a ticker command when the round starts or ends.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<Option<TimerCommand>, GameError> {
        match event {
            GameEvent::KeyDown(code) => match self.input.on_key_down(code, &mut self.state.round)? {
                KeyDown::RoundStarted(_) => Ok(Some(TimerCommand::ArmRoundTicker)),
                KeyDown::Held(_) | KeyDown::Ignored => Ok(None),
            },
            GameEvent::KeyUp(code) => {
                self.input.on_key_up(code);
                Ok(None)
            }
            GameEvent::RoundTick => match self.state.round_tick() {
                RoundTick::Ended { .. } => Ok(Some(TimerCommand::CancelRoundTicker)),
                RoundTick::Inactive => {
                    log::warn!("Round tick with no round running");
                    Ok(None)
                }
                RoundTick::Counted { .. } => Ok(None),
            },
            GameEvent::AssetLoaded {
                role,
                width,
                height,
            } => {
                self.assets.mark_ready(role, width, height);
                Ok(None)
            }
        }
    }

    /// Run one frame: simulate, render, present. Skipped until all assets are ready.
    pub fn frame<S: Surface, D: ScoreDisplay>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
        display: &mut D,
    ) -> FrameOutcome {
        if !self.assets.all_ready() {
            return FrameOutcome::Skipped;
        }

        let elapsed = ((now_ms - self.last_frame_ms) / 1000.0) as f32;

        let outcome = step(&mut self.state, &self.input, elapsed);
        renderer::render(surface, &mut self.state, &self.assets, elapsed);
        let round = &self.state.round;
        scoreboard::present(display, round.seconds_remaining, round.score, round.best_score);

        self.last_frame_ms = now_ms;
        FrameOutcome::Ran { hit: outcome.hit }
    }

    /// Push the load-time scoreboard
    pub fn present_initial<D: ScoreDisplay>(&self, display: &mut D) {
        let round = &self.state.round;
        scoreboard::present_initial(display, round.seconds_remaining, round.score, round.best_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::test_support::RecordingSurface;
    use crate::scoreboard::test_support::RecordingDisplay;
    use glam::Vec2;

    const UP: u32 = 38;
    const RIGHT: u32 = 39;

    fn loaded_game() -> Game {
        let mut game = Game::new(&GameConfig::default(), 2024, 0.0);
        for (role, w, h) in [
            (AssetRole::Background, 850.0, 510.0),
            (AssetRole::Player, 180.0, 280.0),
            (AssetRole::Target, 60.0, 60.0),
        ] {
            game.dispatch(GameEvent::AssetLoaded {
                role,
                width: w,
                height: h,
            })
            .unwrap();
        }
        game
    }

    #[test]
    fn test_frame_skipped_until_assets_ready() {
        let mut game = Game::new(&GameConfig::default(), 1, 0.0);
        let mut surface = RecordingSurface::default();
        let mut display = RecordingDisplay::default();

        assert_eq!(game.frame(16.0, &mut surface, &mut display), FrameOutcome::Skipped);
        assert!(surface.calls.is_empty());
        assert_eq!(display.updates, 0);
    }

    #[test]
    fn test_skipped_frames_do_not_advance_clock() {
        let mut game = Game::new(&GameConfig::default(), 1, 0.0);
        let mut surface = RecordingSurface::default();
        let mut display = RecordingDisplay::default();
        game.state.target.sprite.pos = Vec2::new(790.0, 450.0);
        game.dispatch(GameEvent::KeyDown(UP)).unwrap();
        game.state.player.sprite.pos = Vec2::new(335.0, 400.0);

        game.frame(500.0, &mut surface, &mut display);

        for (role, w, h) in [
            (AssetRole::Background, 850.0, 510.0),
            (AssetRole::Player, 180.0, 280.0),
            (AssetRole::Target, 60.0, 60.0),
        ] {
            game.dispatch(GameEvent::AssetLoaded {
                role,
                width: w,
                height: h,
            })
            .unwrap();
        }

        // Elapsed is measured from creation: 1s at 300 px/s
        assert_eq!(
            game.frame(1000.0, &mut surface, &mut display),
            FrameOutcome::Ran { hit: false }
        );
        assert_eq!(game.state.player.sprite.pos.y, 100.0);
    }

    #[test]
    fn test_first_arrow_arms_ticker_once() {
        let mut game = loaded_game();
        assert_eq!(game.dispatch(GameEvent::KeyDown(32)), Ok(None));
        assert_eq!(
            game.dispatch(GameEvent::KeyDown(UP)),
            Ok(Some(TimerCommand::ArmRoundTicker))
        );
        assert_eq!(game.dispatch(GameEvent::KeyDown(RIGHT)), Ok(None));
        game.dispatch(GameEvent::KeyUp(UP)).unwrap();
        assert_eq!(game.dispatch(GameEvent::KeyDown(UP)), Ok(None));
    }

    #[test]
    fn test_no_input_keeps_timer_frozen() {
        let mut game = loaded_game();
        for _ in 0..5 {
            assert_eq!(game.dispatch(GameEvent::RoundTick), Ok(None));
        }
        assert_eq!(game.state.round.seconds_remaining, 50);
    }

    #[test]
    fn test_round_end_cancels_ticker_and_rearms_on_next_press() {
        let mut game = loaded_game();
        game.dispatch(GameEvent::KeyDown(UP)).unwrap();
        game.state.round.score = 9;

        for _ in 0..50 {
            assert_eq!(game.dispatch(GameEvent::RoundTick), Ok(None));
        }
        assert_eq!(
            game.dispatch(GameEvent::RoundTick),
            Ok(Some(TimerCommand::CancelRoundTicker))
        );
        assert_eq!(game.state.round.best_score, 9);
        assert_eq!(game.state.round.score, 0);
        assert!(!game.state.round_active());

        // Key still held from the last round; a fresh press starts a new one
        assert_eq!(
            game.dispatch(GameEvent::KeyDown(UP)),
            Ok(Some(TimerCommand::ArmRoundTicker))
        );
    }

    #[test]
    fn test_frame_order_and_scoreboard() {
        let mut game = loaded_game();
        let mut surface = RecordingSurface::default();
        let mut display = RecordingDisplay::default();

        game.dispatch(GameEvent::KeyDown(UP)).unwrap();
        game.dispatch(GameEvent::RoundTick).unwrap();
        game.state.player.sprite.pos = Vec2::new(300.0, 200.0);
        game.state.target.sprite.pos = Vec2::new(320.0, 180.0);

        // 16ms up: player y 195.2, within the bird's reach
        let outcome = game.frame(16.0, &mut surface, &mut display);
        assert_eq!(outcome, FrameOutcome::Ran { hit: true });

        // Presented after the hit
        assert_eq!(display.timer, "Timer : 49");
        assert_eq!(display.score, "Score: 1");
        assert_eq!(display.best, "Highest: 0");
        assert!(!surface.calls.is_empty());
    }

    #[test]
    fn test_initial_scoreboard() {
        let game = loaded_game();
        let mut display = RecordingDisplay::default();
        game.present_initial(&mut display);
        assert_eq!(display.timer, "Timer : 50");
    }
}
