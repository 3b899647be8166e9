//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of browser types:
//! - Time arrives as elapsed seconds
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod round;
pub mod state;
pub mod step;

pub use collision::collides;
pub use input::{Direction, InputState, KeyDown};
pub use round::{RoundState, RoundTick, TimerPhase};
pub use state::{Background, Field, GameState, Player, Sprite, Target};
pub use step::{StepOutcome, step};
