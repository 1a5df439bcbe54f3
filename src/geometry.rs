use egui::{Pos2, Rect};

/// Flattening never uses more pieces than this for a single segment
const MAX_FLATTEN_STEPS: usize = 64;
/// Target length of one flattened piece, in logical pixels
const FLATTEN_TOLERANCE: f32 = 1.5;

/// A cubic Bezier piece of a stroke, from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Pos2,
    pub ctrl1: Pos2,
    pub ctrl2: Pos2,
    pub to: Pos2,
}

/// Convert the middle span `p1 -> p2` of a Catmull-Rom window into a cubic Bezier.
///
/// The resulting curve passes through `p1` and `p2`, and its tangents at both
/// ends match those of the neighbouring spans, so consecutive segments join
/// without a visible kink.
pub fn catmull_rom_segment(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2) -> CubicSegment {
    CubicSegment {
        from: p1,
        ctrl1: p1 + (p2 - p0) / 6.0,
        ctrl2: p2 - (p3 - p1) / 6.0,
        to: p2,
    }
}

impl CubicSegment {
    /// Evaluate the curve at `t` in `0.0..=1.0`
    pub fn point_at(&self, t: f32) -> Pos2 {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;

        Pos2::new(
            a * self.from.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.to.x,
            a * self.from.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.to.y,
        )
    }

    /// Length of the control polygon, an upper bound of the arc length
    pub fn control_net_length(&self) -> f32 {
        (self.ctrl1 - self.from).length()
            + (self.ctrl2 - self.ctrl1).length()
            + (self.to - self.ctrl2).length()
    }

    /// Approximate the curve with a polyline.
    ///
    /// The first and last vertices are exactly `from` and `to`.
    pub fn flatten(&self) -> Vec<Pos2> {
        let steps = ((self.control_net_length() / FLATTEN_TOLERANCE).ceil() as usize)
            .clamp(1, MAX_FLATTEN_STEPS);

        let mut points = Vec::with_capacity(steps + 1);
        points.push(self.from);
        for i in 1..steps {
            points.push(self.point_at(i as f32 / steps as f32));
        }
        points.push(self.to);
        points
    }
}

/// Calculate distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Calculate the bounding box for a set of points
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}
