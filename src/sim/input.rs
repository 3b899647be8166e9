//! Held-direction tracking
//!
//! Only the four arrow keys are recognized; every other key code is dropped
//! before it touches any state.

use super::round::RoundState;
use crate::error::GameError;

/// Arrow-key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Map a DOM `keyCode` to a direction
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }
}

/// Result of a key-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDown {
    /// Not an arrow key
    Ignored,
    /// Direction now held; round already running
    Held(Direction),
    /// Direction now held and this press started a new round
    RoundStarted(Direction),
}

/// Set of currently held directions
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. The first arrow key while no round runs starts one.
    pub fn on_key_down(&mut self, code: u32, round: &mut RoundState) -> Result<KeyDown, GameError> {
        let Some(dir) = Direction::from_key_code(code) else {
            return Ok(KeyDown::Ignored);
        };

        let started = if round.is_running() {
            false
        } else {
            round.start()?;
            true
        };

        self.held[dir.index()] = true;

        Ok(if started {
            KeyDown::RoundStarted(dir)
        } else {
            KeyDown::Held(dir)
        })
    }

    /// Handle a key release; no-op for keys that are not held
    pub fn on_key_up(&mut self, code: u32) {
        if let Some(dir) = Direction::from_key_code(code) {
            self.held[dir.index()] = false;
        }
    }

    #[inline]
    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }

    /// Held directions in Left, Up, Right, Down order
    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_held(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: u32 = 37;
    const UP: u32 = 38;
    const SPACE: u32 = 32;

    #[test]
    fn test_unrecognized_key_ignored() {
        let mut input = InputState::new();
        let mut round = RoundState::new(50);

        assert_eq!(input.on_key_down(SPACE, &mut round), Ok(KeyDown::Ignored));
        assert_eq!(input.held().count(), 0);
        // No round start from a non-arrow key
        assert!(!round.is_running());

        input.on_key_up(SPACE);
        assert_eq!(input.held().count(), 0);
    }

    #[test]
    fn test_first_press_starts_round() {
        let mut input = InputState::new();
        let mut round = RoundState::new(50);

        assert_eq!(
            input.on_key_down(UP, &mut round),
            Ok(KeyDown::RoundStarted(Direction::Up))
        );
        assert!(round.is_running());
        assert_eq!(round.seconds_remaining, 50);

        // Second press only marks the key
        assert_eq!(
            input.on_key_down(LEFT, &mut round),
            Ok(KeyDown::Held(Direction::Left))
        );
        assert!(input.is_held(Direction::Up));
        assert!(input.is_held(Direction::Left));
    }

    #[test]
    fn test_key_up_releases() {
        let mut input = InputState::new();
        let mut round = RoundState::new(50);

        input.on_key_down(UP, &mut round).unwrap();
        input.on_key_up(UP);
        assert!(!input.is_held(Direction::Up));

        // Releasing again is harmless
        input.on_key_up(UP);
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code(37), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(38), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(39), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(40), Some(Direction::Down));
        assert_eq!(Direction::from_key_code(41), None);
        assert_eq!(Direction::from_key_code(0), None);
    }
}
