//! Repeating browser timers
//!
//! The callback closure lives as long as the [`Interval`]; starting and
//! cancelling only swap the `setInterval` handle, so a callback may cancel
//! its own interval safely.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::GameError;

pub struct Interval {
    name: &'static str,
    period_ms: i32,
    callback: Closure<dyn FnMut()>,
    handle: Cell<Option<i32>>,
}

impl Interval {
    pub fn new(name: &'static str, period_ms: i32, callback: impl FnMut() + 'static) -> Self {
        Self {
            name,
            period_ms,
            callback: Closure::<dyn FnMut()>::new(callback),
            handle: Cell::new(None),
        }
    }

    /// Begin ticking. Any live handle is cleared first so at most one runs.
    pub fn start(&self) -> Result<(), GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;

        if let Some(old) = self.handle.take() {
            log::warn!("{} ticker re-armed while running; clearing old handle", self.name);
            window.clear_interval_with_handle(old);
        }

        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.period_ms,
        )?;
        self.handle.set(Some(id));
        log::debug!("{} ticker started ({} ms)", self.name, self.period_ms);
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
            log::debug!("{} ticker cancelled", self.name);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
