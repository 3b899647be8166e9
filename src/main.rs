//! Bird Strike entry point
//!
//! In the browser this wires the page and starts the tickers. Natively it
//! plays one scripted round headless and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {e}").into());
    }

    log::info!("Bird Strike starting...");
    bird_strike::platform::run().map_err(JsValue::from)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bird Strike (native) starting...");
    log::info!("Native mode is headless - serve the web build to play");

    match headless::play_scripted_round() {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            log::error!("Headless round failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bird_strike::renderer::Surface;
    use bird_strike::scoreboard::ScoreDisplay;
    use bird_strike::{AssetRole, FrameOutcome, Game, GameConfig, GameError, GameEvent, TimerCommand};

    const LEFT: u32 = 37;
    const UP: u32 = 38;
    const RIGHT: u32 = 39;

    /// Counts draw calls instead of drawing
    #[derive(Default)]
    struct CountingSurface {
        images: usize,
    }

    impl Surface for CountingSurface {
        fn draw_image(&mut self, _image: AssetRole, _x: f32, _y: f32) {
            self.images += 1;
        }
        fn draw_image_scaled(&mut self, _image: AssetRole, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.images += 1;
        }
        fn translate(&mut self, _dx: f32, _dy: f32) {}
        fn save(&mut self) {}
        fn restore(&mut self) {}
    }

    /// Keeps the latest labels
    #[derive(Default)]
    struct LabelBoard {
        timer: String,
        score: String,
        best: String,
    }

    impl ScoreDisplay for LabelBoard {
        fn show_timer(&mut self, label: &str) {
            self.timer = label.to_string();
        }
        fn show_score(&mut self, label: &str) {
            self.score = label.to_string();
        }
        fn show_best(&mut self, label: &str) {
            self.best = label.to_string();
        }
    }

    /// Key script: which arrow to hold during each second of the round
    fn key_for_second(second: u32) -> u32 {
        match (second / 3) % 3 {
            0 => RIGHT,
            1 => UP,
            _ => LEFT,
        }
    }

    pub fn play_scripted_round() -> Result<String, GameError> {
        let config = GameConfig::load();
        let frame_ms = config.frame_interval_ms as f64;
        let tick_ms = config.round_tick_ms as f64;
        let mut game = Game::new(&config, 0xB12D, 0.0);
        let mut surface = CountingSurface::default();
        let mut board = LabelBoard::default();

        game.present_initial(&mut board);
        for (role, w, h) in [
            (AssetRole::Background, 1200.0, 510.0),
            (AssetRole::Player, 180.0, 280.0),
            (AssetRole::Target, 60.0, 60.0),
        ] {
            game.dispatch(GameEvent::AssetLoaded {
                role,
                width: w,
                height: h,
            })?;
        }

        let mut ticker_armed = game.dispatch(GameEvent::KeyDown(RIGHT))? == Some(TimerCommand::ArmRoundTicker);
        let mut held = RIGHT;
        let mut now = 0.0;
        let mut next_tick = tick_ms;
        let mut second = 0;
        let mut hits = 0;
        let mut frames = 0;

        while ticker_armed {
            now += frame_ms;
            if let FrameOutcome::Ran { hit } = game.frame(now, &mut surface, &mut board) {
                frames += 1;
                hits += hit as u32;
            }

            if now >= next_tick {
                next_tick += tick_ms;
                second += 1;
                if game.dispatch(GameEvent::RoundTick)? == Some(TimerCommand::CancelRoundTicker) {
                    ticker_armed = false;
                    continue;
                }

                let key = key_for_second(second);
                if key != held {
                    game.dispatch(GameEvent::KeyUp(held))?;
                    game.dispatch(GameEvent::KeyDown(key))?;
                    held = key;
                }
            }
        }

        log::info!(
            "Round finished after {} frames, {} draw calls",
            frames,
            surface.images
        );
        Ok(format!(
            "{} hits | last frame: {} / {} / {} | best after round: {}",
            hits, board.timer, board.score, board.best, game.state.round.best_score
        ))
    }
}
