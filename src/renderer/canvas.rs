//! Canvas 2D implementation of [`Surface`]

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::Surface;
use crate::assets::AssetRole;
use crate::error::GameError;

/// The three sprite images, keyed by role
pub struct SpriteImages {
    pub background: HtmlImageElement,
    pub player: HtmlImageElement,
    pub target: HtmlImageElement,
}

impl SpriteImages {
    pub fn get(&self, role: AssetRole) -> &HtmlImageElement {
        match role {
            AssetRole::Background => &self.background,
            AssetRole::Player => &self.player,
            AssetRole::Target => &self.target,
        }
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: SpriteImages,
}

impl CanvasSurface {
    /// Create a `width` x `height` canvas and append it to the element with id `container`
    pub fn create(
        document: &Document,
        container: &str,
        width: u32,
        height: u32,
        images: SpriteImages,
    ) -> Result<Self, GameError> {
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| GameError::Js("created element is not a canvas".to_string()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(GameError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| GameError::ContextUnavailable)?;

        document
            .get_element_by_id(container)
            .ok_or_else(|| GameError::MissingElement(container.to_string()))?
            .append_child(&canvas)?;

        log::info!("Canvas {}x{} attached to #{}", width, height, container);
        Ok(Self { ctx, images })
    }

    pub fn images(&self) -> &SpriteImages {
        &self.images
    }
}

impl Surface for CanvasSurface {
    fn draw_image(&mut self, image: AssetRole, x: f32, y: f32) {
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element(self.images.get(image), x as f64, y as f64)
        {
            log::warn!("draw_image({}) failed: {:?}", image.as_str(), e);
        }
    }

    fn draw_image_scaled(&mut self, image: AssetRole, x: f32, y: f32, w: f32, h: f32) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.images.get(image),
            x as f64,
            y as f64,
            w as f64,
            h as f64,
        ) {
            log::warn!("draw_image_scaled({}) failed: {:?}", image.as_str(), e);
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let _ = self.ctx.translate(dx as f64, dy as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
