#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod guide;
pub mod input;
pub mod panels;
pub mod settings;
pub mod style;
pub mod surface;
pub mod texture;

pub use app::KanjiApp;
pub use config::CanvasConfig;
pub use engine::{ClearTrigger, GestureState, StrokeEngine};
pub use error::{SettingsError, SurfaceError};
pub use geometry::{CubicSegment, catmull_rom_segment};
pub use guide::draw_guide;
pub use input::{GestureEvent, GestureTracker, PointerSample, SurfaceMapping};
pub use settings::{JsonFileStore, KeyValueStore, MemoryStore, Settings};
pub use style::StrokeStyle;
pub use surface::{Canvas, DrawingSurface};
