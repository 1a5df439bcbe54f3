use egui::{ColorImage, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use crate::error::SurfaceError;
use crate::geometry::{self, CubicSegment};
use crate::style::StrokeStyle;

/// Raster target the stroke engine and guide renderer draw onto.
///
/// Strokes always use round caps and round joins and are composited over the
/// existing pixels; nothing short of [`Canvas::wipe`] removes ink.
pub trait Canvas {
    /// Logical resolution in pixels
    fn size(&self) -> Vec2;

    /// Reset every pixel to blank
    fn wipe(&mut self);

    /// Stroke a set of straight lines as a single path
    fn stroke_lines(&mut self, lines: &[(Pos2, Pos2)], style: &StrokeStyle);

    /// Stroke one cubic Bezier segment
    fn stroke_cubic(&mut self, segment: &CubicSegment, style: &StrokeStyle);
}

/// Fixed-resolution bitmap that accumulates the guide and all drawn segments.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    image: RgbaImage,
    // Bumped on every mutation so displays know when to re-upload
    version: u64,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// RGBA value of a pixel, `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn is_blank(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y).is_some_and(|p| p[3] == 0)
    }

    /// Number of pixels carrying any ink
    pub fn inked_pixel_count(&self) -> usize {
        self.image.pixels().filter(|p| p.0[3] != 0).count()
    }

    pub fn raw_pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Copy the raster into an egui image for display
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    /// Rasterize polylines with round caps and joins.
    ///
    /// Coverage of each pixel is taken from its distance to the nearest point
    /// on any of the paths, so overlapping pieces of the same call never
    /// double up alpha.
    fn stroke_polylines(&mut self, paths: &[&[Pos2]], style: &StrokeStyle) {
        let all_points: Vec<Pos2> = paths.iter().flat_map(|p| p.iter().copied()).collect();
        if all_points.is_empty() {
            return;
        }

        let radius = style.width / 2.0;
        let bounds = geometry::calculate_bounds(&all_points, radius + 1.0);

        let max_x = self.image.width() as f32;
        let max_y = self.image.height() as f32;
        let x0 = bounds.min.x.floor().clamp(0.0, max_x) as u32;
        let x1 = bounds.max.x.ceil().clamp(0.0, max_x) as u32;
        let y0 = bounds.min.y.floor().clamp(0.0, max_y) as u32;
        let y1 = bounds.max.y.ceil().clamp(0.0, max_y) as u32;

        let source = style.color.to_srgba_unmultiplied();

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = paths
                    .iter()
                    .map(|path| distance_to_polyline(center, path))
                    .fold(f32::INFINITY, f32::min);

                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let pixel = self.image.get_pixel_mut(x, y);
                    *pixel = blend_over(*pixel, source, coverage);
                }
            }
        }

        self.version += 1;
    }
}

impl Canvas for DrawingSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn wipe(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.version += 1;
    }

    fn stroke_lines(&mut self, lines: &[(Pos2, Pos2)], style: &StrokeStyle) {
        let paths: Vec<[Pos2; 2]> = lines.iter().map(|&(from, to)| [from, to]).collect();
        let slices: Vec<&[Pos2]> = paths.iter().map(|p| p.as_slice()).collect();
        self.stroke_polylines(&slices, style);
    }

    fn stroke_cubic(&mut self, segment: &CubicSegment, style: &StrokeStyle) {
        let path = segment.flatten();
        self.stroke_polylines(&[path.as_slice()], style);
    }
}

fn distance_to_polyline(point: Pos2, path: &[Pos2]) -> f32 {
    match path {
        [] => f32::INFINITY,
        [single] => (point - *single).length(),
        _ => path
            .windows(2)
            .map(|w| geometry::distance_to_line_segment(point, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Source-over compositing of an unmultiplied colour scaled by `coverage`
fn blend_over(dst: Rgba<u8>, src: [u8; 4], coverage: f32) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0 * coverage;
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return dst;
    }

    let channel = |i: usize| {
        let s = src[i] as f32;
        let d = dst.0[i] as f32;
        ((s * src_a + d * dst_a * (1.0 - src_a)) / out_a).round() as u8
    };

    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}
