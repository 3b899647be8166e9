//! Sprite image loading

use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use super::Shared;
use crate::assets::AssetRole;
use crate::error::GameError;
use crate::game::GameEvent;
use crate::renderer::canvas::SpriteImages;
use crate::settings::AssetPaths;

/// Create the three (not yet loading) image elements
pub fn create() -> Result<SpriteImages, GameError> {
    Ok(SpriteImages {
        background: HtmlImageElement::new()?,
        player: HtmlImageElement::new()?,
        target: HtmlImageElement::new()?,
    })
}

/// Attach onload handlers, then point each image at its source
pub fn start_loading(runtime: &Shared, paths: &AssetPaths) {
    let rt = runtime.borrow();
    let images = rt.surface.images();
    for (role, path) in [
        (AssetRole::Background, &paths.background),
        (AssetRole::Player, &paths.player),
        (AssetRole::Target, &paths.target),
    ] {
        let image = images.get(role).clone();
        let runtime = runtime.clone();
        let loaded = image.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let event = GameEvent::AssetLoaded {
                role,
                width: loaded.natural_width() as f32,
                height: loaded.natural_height() as f32,
            };
            if let Err(e) = runtime.borrow_mut().game.dispatch(event) {
                log::error!("Asset load dispatch failed: {}", e);
            }
        });
        image.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();

        log::info!("Loading {} from {}", role.as_str(), path);
        image.set_src(path);
    }
}
