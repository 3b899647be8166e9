//! Per-frame simulation step
//!
//! Moves the plane from the held keys, wraps it around the field edges, then
//! checks for a hit on the bird.

use super::collision::collides;
use super::input::{Direction, InputState};
use super::state::GameState;

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The player hit the target this step
    pub hit: bool,
}

/// Move toward the near edge; past `near_limit` the sprite reappears at `far_limit`
#[inline]
fn move_toward_near(pos: f32, distance: f32, near_limit: f32, far_limit: f32) -> f32 {
    if pos > -near_limit {
        pos - distance
    } else {
        far_limit
    }
}

/// Move toward the far edge; past `far_limit` the sprite reappears at `-near_limit`
#[inline]
fn move_toward_far(pos: f32, distance: f32, near_limit: f32, far_limit: f32) -> f32 {
    if pos < far_limit {
        pos + distance
    } else {
        -near_limit
    }
}

/// Advance the game by `elapsed` seconds
pub fn step(state: &mut GameState, input: &InputState, elapsed: f32) -> StepOutcome {
    // distance (pixels) = (pixels/second) * seconds
    let distance = state.player.speed * elapsed;
    let near = state.field.near_limit(&state.player.sprite);
    let width_limit = state.field.width_limit();
    let height_limit = state.field.height_limit();

    let pos = &mut state.player.sprite.pos;
    for dir in input.held() {
        match dir {
            Direction::Up => pos.y = move_toward_near(pos.y, distance, near, height_limit),
            Direction::Down => pos.y = move_toward_far(pos.y, distance, near, height_limit),
            Direction::Right => pos.x = move_toward_far(pos.x, distance, near, width_limit),
            Direction::Left => pos.x = move_toward_near(pos.x, distance, near, width_limit),
        }
    }

    if collides(&state.player.sprite, &state.target.sprite) {
        state.round.score += 1;
        log::debug!("Hit! score {}", state.round.score);
        state.reset_positions();
        return StepOutcome { hit: true };
    }

    StepOutcome::default()
}
