//! Error type shared by the core and the browser bootstrap

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A round countdown is already ticking
    #[error("round timer is already running")]
    RoundTimerAlreadyRunning,
    /// A ticker command arrived before the round ticker was created
    #[error("round ticker not initialised")]
    RoundTickerMissing,
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    /// Exception thrown by a browser API
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
