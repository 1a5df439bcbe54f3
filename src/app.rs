use log::{info, warn};

use crate::config::CanvasConfig;
use crate::engine::{ClearTrigger, StrokeEngine};
use crate::error::SurfaceError;
use crate::input::{self, GestureTracker, SurfaceMapping};
use crate::panels;
use crate::settings::{MemoryStore, SettingChange, Settings};
use crate::surface::DrawingSurface;
use crate::texture::SurfaceTexture;

/// Stroke-order practice pad: one canvas, a few controls, persisted settings.
pub struct KanjiApp {
    config: CanvasConfig,
    settings: Settings,
    engine: StrokeEngine,
    tracker: GestureTracker,
    texture: SurfaceTexture,
    clear: ClearTrigger,
    // Used when eframe has no storage backend
    fallback_store: MemoryStore,
}

impl KanjiApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SurfaceError> {
        let settings = cc
            .storage
            .map(|storage| Settings::load(storage))
            .unwrap_or_default();

        Self::with_settings(CanvasConfig::default(), settings)
    }

    pub fn with_settings(config: CanvasConfig, settings: Settings) -> Result<Self, SurfaceError> {
        let surface = DrawingSurface::new(config.logical_width, config.logical_height)?;
        let engine = StrokeEngine::with_guide(surface, config.guide_style());
        info!(
            "🖌️ Canvas ready at {}x{}",
            config.logical_width, config.logical_height
        );

        Ok(Self {
            config,
            settings,
            engine,
            tracker: GestureTracker::new(),
            texture: SurfaceTexture::new(),
            clear: ClearTrigger::default(),
            fallback_store: MemoryStore::new(),
        })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine(&self) -> &StrokeEngine {
        &self.engine
    }

    pub fn request_clear(&mut self) {
        self.clear.fire();
    }

    /// Feed this frame's pointer input through the gesture tracker into the engine
    pub fn handle_pointer(&mut self, ctx: &egui::Context, mapping: &SurfaceMapping) {
        let style = self.settings.stroke_style();
        for sample in input::collect_pointer_samples(ctx, self.tracker.pointer_down()) {
            if let Some(event) = self.tracker.process(sample, mapping) {
                event.apply(&mut self.engine, &style);
            }
        }
    }

    /// Upload the raster if needed and return the texture to paint
    pub fn surface_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.texture.sync(ctx, self.engine.canvas())
    }

    /// Apply a settings edit and persist it right away
    pub fn change_setting(&mut self, change: SettingChange, frame: &mut eframe::Frame) {
        let result = match frame.storage_mut() {
            Some(storage) => self.settings.apply(change, storage),
            None => self.settings.apply(change, &mut self.fallback_store),
        };
        if let Err(err) = result {
            warn!("Failed to persist {:?}: {}", change, err);
        }
    }

    fn apply_pending_clear(&mut self, ctx: &egui::Context) {
        if self.engine.apply_clear(&mut self.clear) {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for KanjiApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = self.settings.persist(storage) {
            warn!("Failed to save settings: {}", err);
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ctx.set_visuals(self.settings.theme.visuals());

        panels::central_panel(self, ctx, frame);

        self.apply_pending_clear(ctx);
    }
}
