//! Window-level arrow key listeners

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use super::{RoundTicker, Shared, apply};
use crate::error::GameError;
use crate::game::GameEvent;

#[allow(deprecated)]
fn key_code(event: &KeyboardEvent) -> u32 {
    event.key_code()
}

/// Listen for keydown/keyup in the capture phase
pub fn install(runtime: &Shared, round_ticker: &RoundTicker) -> Result<(), GameError> {
    let window = web_sys::window().ok_or(GameError::NoWindow)?;

    // Key down
    {
        let runtime = runtime.clone();
        let ticker = round_ticker.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let result = runtime
                .borrow_mut()
                .game
                .dispatch(GameEvent::KeyDown(key_code(&event)));
            match result {
                Ok(Some(command)) => {
                    if let Err(e) = apply(command, &ticker) {
                        log::error!("Round ticker command failed: {}", e);
                    }
                }
                Ok(None) => {}
                Err(e) => log::warn!("Key down rejected: {}", e),
            }
        });
        window.add_event_listener_with_callback_and_bool(
            "keydown",
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        closure.forget();
    }

    // Key up
    {
        let runtime = runtime.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let _ = runtime
                .borrow_mut()
                .game
                .dispatch(GameEvent::KeyUp(key_code(&event)));
        });
        window.add_event_listener_with_callback_and_bool(
            "keyup",
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        closure.forget();
    }

    Ok(())
}
