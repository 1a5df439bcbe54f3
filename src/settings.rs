use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use log::{info, warn};

use crate::error::{SettingsError, SettingsResult};
use crate::style::{self, StrokeStyle};

pub const WIDTH_KEY: &str = "lineWidth";
pub const COLOR_KEY: &str = "color";
pub const THEME_KEY: &str = "theme";

/// Minimal durable key-value store for user settings
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, making it durable before returning
    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()>;
}

/// Volatile store, useful for tests and when no storage backend is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings kept as a flat JSON object in a single file, rewritten on every change.
///
/// A library-level backend for hosts that run without eframe's storage.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let json = fs::read_to_string(&path)
                .map_err(|e| SettingsError::ReadError(e.to_string()))?;
            serde_json::from_str(&json)?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}

/// eframe's storage: localStorage on the web, a file in the data dir natively
impl KeyValueStore for dyn eframe::Storage + '_ {
    fn get(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.set_string(key, value.to_string());
        self.flush();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

/// A single user edit to one of the settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingChange {
    Width(u32),
    Color(Color32),
    Theme(Theme),
}

/// The persisted user preferences: stroke width, stroke colour and theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub color: Color32,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: style::DEFAULT_STROKE_WIDTH,
            color: Color32::BLACK,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Read all settings, falling back to defaults for missing or invalid values
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = store.get(WIDTH_KEY) {
            match style::parse_width(&raw) {
                Ok(width) => settings.width = width,
                Err(err) => warn!("Ignoring stored width: {}", err),
            }
        }

        if let Some(raw) = store.get(COLOR_KEY) {
            match style::parse_color(&raw) {
                Ok(color) => settings.color = color,
                Err(err) => warn!("Ignoring stored color: {}", err),
            }
        }

        if let Some(raw) = store.get(THEME_KEY) {
            match Theme::parse(&raw) {
                Some(theme) => settings.theme = theme,
                None => warn!("Ignoring stored theme: {:?}", raw),
            }
        }

        info!(
            "⚙️ Loaded settings: width={} color={} theme={}",
            settings.width,
            style::format_color(settings.color),
            settings.theme.as_str()
        );
        settings
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.width as f32, self.color)
    }

    pub fn set_width<S: KeyValueStore + ?Sized>(
        &mut self,
        width: u32,
        store: &mut S,
    ) -> SettingsResult<()> {
        if !(style::MIN_STROKE_WIDTH..=style::MAX_STROKE_WIDTH).contains(&width) {
            return Err(SettingsError::InvalidWidth(width.to_string()));
        }
        self.width = width;
        store.set(WIDTH_KEY, &width.to_string())
    }

    pub fn set_color<S: KeyValueStore + ?Sized>(
        &mut self,
        color: Color32,
        store: &mut S,
    ) -> SettingsResult<()> {
        self.color = color;
        store.set(COLOR_KEY, &style::format_color(color))
    }

    pub fn set_theme<S: KeyValueStore + ?Sized>(
        &mut self,
        theme: Theme,
        store: &mut S,
    ) -> SettingsResult<()> {
        self.theme = theme;
        store.set(THEME_KEY, theme.as_str())
    }

    /// Apply one change and write it through to `store`
    pub fn apply<S: KeyValueStore + ?Sized>(
        &mut self,
        change: SettingChange,
        store: &mut S,
    ) -> SettingsResult<()> {
        match change {
            SettingChange::Width(width) => self.set_width(width, store),
            SettingChange::Color(color) => self.set_color(color, store),
            SettingChange::Theme(theme) => self.set_theme(theme, store),
        }
    }

    /// Write every setting to `store`
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> SettingsResult<()> {
        store.set(WIDTH_KEY, &self.width.to_string())?;
        store.set(COLOR_KEY, &style::format_color(self.color))?;
        store.set(THEME_KEY, self.theme.as_str())
    }
}
