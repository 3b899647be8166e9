//! Platform layer (browser only)
//!
//! Owns everything the core treats as external:
//! - Canvas creation and the scoreboard elements
//! - Image loading
//! - Keyboard listeners
//! - The frame ticker and the round countdown ticker

pub mod images;
pub mod interval;
pub mod keyboard;

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use crate::error::GameError;
use crate::game::{FrameOutcome, Game, GameEvent, TimerCommand};
use crate::renderer::CanvasSurface;
use crate::scoreboard::DomScoreboard;
use crate::settings::GameConfig;

use interval::Interval;

/// Game plus the browser objects it draws into
pub struct Runtime {
    pub game: Game,
    pub surface: CanvasSurface,
    pub scoreboard: DomScoreboard,
}

/// Shared by every callback. The browser never runs two callbacks at once,
/// so each borrow lasts for one event only.
pub type Shared = Rc<RefCell<Runtime>>;

/// The one-second countdown ticker, filled in once at startup
pub type RoundTicker = Rc<OnceCell<Interval>>;

/// Execute a ticker command from the core
pub fn apply(command: TimerCommand, ticker: &RoundTicker) -> Result<(), GameError> {
    let ticker = ticker.get().ok_or(GameError::RoundTickerMissing)?;
    match command {
        TimerCommand::ArmRoundTicker => ticker.start(),
        TimerCommand::CancelRoundTicker => {
            ticker.cancel();
            Ok(())
        }
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Build the game, wire the page, start the frame loop
pub fn run() -> Result<(), GameError> {
    let config = GameConfig::load();
    let window = web_sys::window().ok_or(GameError::NoWindow)?;
    let document = window.document().ok_or(GameError::NoDocument)?;

    let seed = now_ms() as u64;
    let game = Game::new(&config, seed, now_ms());
    log::info!("Game initialized with seed: {}", seed);

    let surface = CanvasSurface::create(
        &document,
        "board",
        config.canvas_width as u32,
        config.canvas_height as u32,
        images::create()?,
    )?;
    let mut scoreboard = DomScoreboard::new(&document)?;
    game.present_initial(&mut scoreboard);

    let runtime: Shared = Rc::new(RefCell::new(Runtime {
        game,
        surface,
        scoreboard,
    }));

    images::start_loading(&runtime, &config.assets);

    // Round countdown: armed by the first arrow key, cancels itself at zero
    let round_ticker: RoundTicker = Rc::new(OnceCell::new());
    {
        let runtime = runtime.clone();
        let ticker = round_ticker.clone();
        let interval = Interval::new("round", config.round_tick_ms, move || {
            let result = runtime.borrow_mut().game.dispatch(GameEvent::RoundTick);
            match result {
                Ok(Some(command)) => {
                    if let Err(e) = apply(command, &ticker) {
                        log::error!("Round ticker command failed: {}", e);
                    }
                }
                Ok(None) => {}
                Err(e) => log::error!("Round tick failed: {}", e),
            }
        });
        let _ = round_ticker.set(interval);
    }

    keyboard::install(&runtime, &round_ticker)?;

    // Frame loop
    let frame_runtime = runtime.clone();
    let mut waiting_logged = false;
    let frame_ticker = Interval::new("frame", config.frame_interval_ms, move || {
        let mut rt = frame_runtime.borrow_mut();
        let Runtime {
            game,
            surface,
            scoreboard,
        } = &mut *rt;
        if game.frame(now_ms(), surface, scoreboard) == FrameOutcome::Skipped && !waiting_logged {
            log::info!("Waiting for assets...");
            waiting_logged = true;
        }
    });
    frame_ticker.start()?;
    // Runs for the lifetime of the page
    std::mem::forget(frame_ticker);

    log::info!("Bird Strike running!");
    Ok(())
}
