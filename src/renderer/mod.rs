//! Frame composition
//!
//! Draws the sky, the plane and the bird onto any [`Surface`]. The browser
//! build uses a Canvas 2D context (see `canvas`).

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::assets::{AssetRole, AssetStore};
use crate::sim::GameState;

/// Minimal 2D drawing surface
pub trait Surface {
    /// Draw an image at its native size
    fn draw_image(&mut self, image: AssetRole, x: f32, y: f32);
    /// Draw an image stretched to `w` x `h`
    fn draw_image_scaled(&mut self, image: AssetRole, x: f32, y: f32, w: f32, h: f32);
    fn translate(&mut self, dx: f32, dy: f32);
    fn save(&mut self);
    fn restore(&mut self);
}

/// Number of background copies needed to cover the canvas while scrolling
#[inline]
pub fn tile_count(canvas_width: f32, image_width: f32) -> usize {
    (canvas_width / image_width).ceil() as usize + 1
}

/// Horizontal scroll offset in `[0, image_width)`
#[inline]
pub fn scroll_offset(scroll_seconds: f32, speed: f32, image_width: f32) -> f32 {
    (scroll_seconds * speed) % image_width
}

/// Paint one frame. Mutates only the background scroll clock.
pub fn render<S: Surface>(surface: &mut S, state: &mut GameState, assets: &AssetStore, elapsed: f32) {
    let (bg_width, bg_height) = assets.background_size();

    if !state.round_active() {
        // Still between rounds: static sky at the origin
        surface.draw_image_scaled(AssetRole::Background, 0.0, 0.0, bg_width, bg_height);
        state.round.scroll_seconds = 0.0;
    } else if bg_width > 0.0 {
        state.round.scroll_seconds += elapsed;

        let offset = scroll_offset(state.round.scroll_seconds, state.background.speed, bg_width);
        let count = tile_count(state.field.width, bg_width);

        surface.save();
        surface.translate(-offset, 0.0);
        for i in 0..count {
            surface.draw_image(AssetRole::Background, i as f32 * bg_width, 0.0);
        }
        surface.restore();
    } else {
        log::warn!("Background image has no width; sky not drawn");
    }

    let player = &state.player.sprite;
    surface.draw_image_scaled(
        AssetRole::Player,
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
    );
    let target = &state.target.sprite;
    surface.draw_image_scaled(
        AssetRole::Target,
        target.pos.x,
        target.pos.y,
        target.size.x,
        target.size.y,
    );
}
