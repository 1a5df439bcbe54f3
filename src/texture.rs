use egui::{Context, TextureHandle, TextureId, TextureOptions};
use log::debug;

use crate::surface::DrawingSurface;

/// GPU copy of the drawing surface, re-uploaded only when the raster changed
#[derive(Default)]
pub struct SurfaceTexture {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for SurfaceTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceTexture")
            .field("has_handle", &self.handle.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl SurfaceTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the surface differs from what was last uploaded
    pub fn is_stale(&self, surface: &DrawingSurface) -> bool {
        self.handle.is_none() || self.uploaded_version != Some(surface.version())
    }

    /// Make sure the texture reflects `surface` and return its id
    pub fn sync(&mut self, ctx: &Context, surface: &DrawingSurface) -> TextureId {
        // Nearest keeps the logical pixels crisp when the canvas is scaled up
        let options = TextureOptions::NEAREST;

        if self.is_stale(surface) {
            let image = surface.to_color_image();
            match &mut self.handle {
                Some(handle) => handle.set(image, options),
                None => self.handle = Some(ctx.load_texture("drawing_surface", image, options)),
            }
            debug!("Uploaded drawing surface v{}", surface.version());
            self.uploaded_version = Some(surface.version());
        }

        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }
}
