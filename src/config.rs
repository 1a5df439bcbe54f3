use egui::{Color32, Vec2};

use crate::guide::{GUIDE_COLOR, GUIDE_WIDTH};
use crate::style::StrokeStyle;

/// Fixed layout and resolution parameters for the drawing canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Logical raster width in pixels, independent of the displayed size
    pub logical_width: u32,
    /// Logical raster height in pixels
    pub logical_height: u32,
    /// Colour of the center cross
    pub guide_color: Color32,
    pub guide_width: f32,
    /// Upper bound for the displayed canvas edge, in points
    pub max_display_size: f32,
    /// Share of the available width the canvas may take up
    pub display_fraction: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            logical_width: 300,
            logical_height: 300,
            guide_color: GUIDE_COLOR,
            guide_width: GUIDE_WIDTH,
            max_display_size: 400.0,
            display_fraction: 0.8,
        }
    }
}

impl CanvasConfig {
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.logical_width as f32, self.logical_height as f32)
    }

    pub fn guide_style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.guide_width,
            color: self.guide_color,
        }
    }

    /// Edge length of the square canvas for the given available width
    pub fn display_edge(&self, available_width: f32) -> f32 {
        (available_width * self.display_fraction).min(self.max_display_size).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_edge_is_capped() {
        let config = CanvasConfig::default();
        assert_eq!(config.display_edge(200.0), 160.0);
        assert_eq!(config.display_edge(2000.0), 400.0);
    }
}
