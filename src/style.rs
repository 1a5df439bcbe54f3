use egui::Color32;

use crate::error::{SettingsError, SettingsResult};

pub const MIN_STROKE_WIDTH: u32 = 1;
pub const MAX_STROKE_WIDTH: u32 = 30;
pub const DEFAULT_STROKE_WIDTH: u32 = 3;
pub const DEFAULT_STROKE_COLOR: &str = "black";

const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("red", Color32::from_rgb(0xff, 0x00, 0x00)),
    ("green", Color32::from_rgb(0x00, 0x80, 0x00)),
    ("blue", Color32::from_rgb(0x00, 0x00, 0xff)),
    ("orange", Color32::from_rgb(0xff, 0xa5, 0x00)),
    ("gray", Color32::from_rgb(0x80, 0x80, 0x80)),
    ("grey", Color32::from_rgb(0x80, 0x80, 0x80)),
];

/// Thickness and colour applied to the next segment drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color32,
}

impl StrokeStyle {
    /// Create a style with the width clamped to the supported range
    pub fn new(width: f32, color: Color32) -> Self {
        Self {
            width: width.clamp(MIN_STROKE_WIDTH as f32, MAX_STROKE_WIDTH as f32),
            color,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_STROKE_WIDTH as f32, Color32::BLACK)
    }
}

/// Parse a persisted stroke width, rejecting values outside `1..=30`
pub fn parse_width(value: &str) -> SettingsResult<u32> {
    let width: u32 = value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidWidth(value.to_string()))?;
    if (MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(SettingsError::InvalidWidth(value.to_string()))
    }
}

/// Parse a CSS-like colour: a known name, `#rgb` or `#rrggbb`
pub fn parse_color(value: &str) -> SettingsResult<Color32> {
    let trimmed = value.trim();
    let invalid = || SettingsError::InvalidColor(value.to_string());

    if let Some(&(_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(color);
    }

    let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            Ok(Color32::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Format a colour as `#rrggbb`, dropping alpha
pub fn format_color(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(StrokeStyle::new(0.0, Color32::BLACK).width, 1.0);
        assert_eq!(StrokeStyle::new(45.0, Color32::BLACK).width, 30.0);
        assert_eq!(StrokeStyle::new(7.0, Color32::BLACK).width, 7.0);
    }

    #[test]
    fn test_default_style() {
        let style = StrokeStyle::default();
        assert_eq!(style.width, 3.0);
        assert_eq!(style.color, Color32::BLACK);
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("3").unwrap(), 3);
        assert_eq!(parse_width(" 30 ").unwrap(), 30);
        assert!(parse_width("0").is_err());
        assert!(parse_width("31").is_err());
        assert!(parse_width("thick").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("black").unwrap(), Color32::BLACK);
        assert_eq!(parse_color("Orange").unwrap(), Color32::from_rgb(255, 165, 0));
        assert_eq!(parse_color("#ff8000").unwrap(), Color32::from_rgb(255, 128, 0));
        assert_eq!(parse_color("#f80").unwrap(), Color32::from_rgb(255, 136, 0));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("ff0000").is_err());
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(Color32::from_rgb(255, 128, 0)), "#ff8000");
        assert_eq!(format_color(Color32::BLACK), "#000000");
    }
}
