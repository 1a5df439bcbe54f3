use egui::{Color32, Pos2, Vec2, pos2};
use kanji_pad::{
    Canvas, CubicSegment, DrawingSurface, GestureState, StrokeEngine, StrokeStyle,
    catmull_rom_segment,
};

/// Canvas that remembers what was drawn instead of rasterizing it
#[derive(Debug, Default)]
struct RecordingCanvas {
    wipes: usize,
    guide_lines: usize,
    segments: Vec<(CubicSegment, StrokeStyle)>,
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(300.0, 300.0)
    }

    fn wipe(&mut self) {
        self.wipes += 1;
        self.segments.clear();
    }

    fn stroke_lines(&mut self, lines: &[(Pos2, Pos2)], _style: &StrokeStyle) {
        self.guide_lines += lines.len();
    }

    fn stroke_cubic(&mut self, segment: &CubicSegment, style: &StrokeStyle) {
        self.segments.push((*segment, *style));
    }
}

fn recording_engine() -> StrokeEngine<RecordingCanvas> {
    StrokeEngine::new(RecordingCanvas::default())
}

fn surface_engine() -> StrokeEngine {
    StrokeEngine::new(DrawingSurface::new(300, 300).unwrap())
}

fn zigzag(n: usize) -> Vec<Pos2> {
    (0..n)
        .map(|i| pos2(20.0 + i as f32 * 7.0, if i % 2 == 0 { 40.0 } else { 55.0 }))
        .collect()
}

fn draw_gesture<C: Canvas>(engine: &mut StrokeEngine<C>, points: &[Pos2], style: &StrokeStyle) {
    engine.on_gesture_start(points[0]);
    for point in &points[1..] {
        engine.on_gesture_move(*point, style);
    }
}

#[test]
fn test_construction_paints_guide() {
    let engine = recording_engine();
    assert_eq!(engine.canvas().wipes, 1);
    assert_eq!(engine.canvas().guide_lines, 2);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn test_fewer_than_four_points_draw_nothing() {
    let style = StrokeStyle::default();
    for n in 1..=3 {
        let mut engine = recording_engine();
        draw_gesture(&mut engine, &zigzag(n), &style);
        assert!(engine.canvas().segments.is_empty(), "{} points drew a segment", n);

        let mut engine = surface_engine();
        let guide_only = engine.canvas().raw_pixels().to_vec();
        draw_gesture(&mut engine, &zigzag(n), &style);
        engine.on_gesture_end();
        assert_eq!(engine.canvas().raw_pixels(), guide_only.as_slice());
    }
}

#[test]
fn test_one_segment_per_move_from_fourth_point() {
    let style = StrokeStyle::default();
    let points = zigzag(12);
    let mut engine = recording_engine();
    draw_gesture(&mut engine, &points, &style);

    // p0..p11 is n = 11, so n - 2 segments
    let segments = &engine.canvas().segments;
    assert_eq!(segments.len(), 9);

    // Each segment is built from the sliding window of the four newest points
    for (i, (segment, _)) in segments.iter().enumerate() {
        let expected = catmull_rom_segment(points[i], points[i + 1], points[i + 2], points[i + 3]);
        assert_eq!(*segment, expected);
    }
}

#[test]
fn test_control_points_for_literal_window() {
    let mut engine = recording_engine();
    draw_gesture(
        &mut engine,
        &[pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 10.0), pos2(30.0, 10.0)],
        &StrokeStyle::default(),
    );

    let (segment, _) = engine.canvas().segments[0];
    assert_eq!(segment.from, pos2(10.0, 0.0));
    assert_eq!(segment.to, pos2(20.0, 10.0));
    assert!((segment.ctrl1.x - 11.67).abs() < 0.01 && (segment.ctrl1.y - 1.67).abs() < 0.01);
    assert!((segment.ctrl2.x - 18.33).abs() < 0.01 && (segment.ctrl2.y - 8.33).abs() < 0.01);
}

#[test]
fn test_new_gesture_does_not_bridge_previous_one() {
    let style = StrokeStyle::default();
    let mut engine = recording_engine();
    draw_gesture(&mut engine, &zigzag(5), &style);
    engine.on_gesture_end();
    let drawn = engine.canvas().segments.len();

    // Three points of a new gesture are not enough for a segment
    let fresh = [pos2(200.0, 200.0), pos2(210.0, 200.0), pos2(220.0, 205.0)];
    draw_gesture(&mut engine, &fresh, &style);
    assert_eq!(engine.canvas().segments.len(), drawn);
}

#[test]
fn test_move_after_end_is_noop() {
    let style = StrokeStyle::default();
    let mut engine = surface_engine();
    draw_gesture(&mut engine, &zigzag(6), &style);
    engine.on_gesture_end();
    let before = engine.canvas().raw_pixels().to_vec();

    engine.on_gesture_move(pos2(150.0, 150.0), &style);
    engine.on_gesture_move(pos2(160.0, 170.0), &style);

    assert_eq!(engine.canvas().raw_pixels(), before.as_slice());
    assert!(engine.buffered_points().is_empty());
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn test_clear_leaves_only_guide_in_either_state() {
    let style = StrokeStyle::new(6.0, Color32::BLACK);
    let guide_only = surface_engine().canvas().raw_pixels().to_vec();

    // Idle
    let mut engine = surface_engine();
    draw_gesture(&mut engine, &zigzag(8), &style);
    engine.on_gesture_end();
    assert_ne!(engine.canvas().raw_pixels(), guide_only.as_slice());
    engine.clear();
    assert_eq!(engine.canvas().raw_pixels(), guide_only.as_slice());
    assert_eq!(engine.gesture_state(), GestureState::Idle);

    // Mid-gesture
    let mut engine = surface_engine();
    draw_gesture(&mut engine, &zigzag(8), &style);
    engine.clear();
    assert_eq!(engine.canvas().raw_pixels(), guide_only.as_slice());
    assert_eq!(engine.gesture_state(), GestureState::Drawing);
}

#[test]
fn test_gesture_continues_onto_cleared_surface() {
    let style = StrokeStyle::default();
    let mut engine = recording_engine();
    draw_gesture(&mut engine, &zigzag(6), &style);
    engine.clear();
    assert!(engine.canvas().segments.is_empty());

    // History survives the clear, so the very next move draws again
    engine.on_gesture_move(pos2(70.0, 40.0), &style);
    assert_eq!(engine.canvas().segments.len(), 1);
    assert_eq!(engine.buffered_points().len(), 7);
}

#[test]
fn test_style_change_applies_to_later_segments_only() {
    let red = StrokeStyle::new(6.0, Color32::from_rgb(255, 0, 0));
    let blue = StrokeStyle::new(6.0, Color32::from_rgb(0, 0, 255));
    let mut engine = surface_engine();

    engine.on_gesture_start(pos2(10.0, 50.0));
    for x in [20.0, 30.0, 40.0, 50.0] {
        engine.on_gesture_move(pos2(x, 50.0), &red);
    }
    let red_pixel = engine.canvas().pixel(25, 50);
    assert_eq!(red_pixel, Some([255, 0, 0, 255]));

    for x in [60.0, 70.0] {
        engine.on_gesture_move(pos2(x, 50.0), &blue);
    }

    assert_eq!(engine.canvas().pixel(25, 50), red_pixel);
    assert_eq!(engine.canvas().pixel(35, 50), red_pixel);
    assert_eq!(engine.canvas().pixel(55, 50), Some([0, 0, 255, 255]));
}

#[test]
fn test_style_is_recorded_per_segment() {
    let thin = StrokeStyle::new(2.0, Color32::BLACK);
    let thick = StrokeStyle::new(20.0, Color32::BLACK);
    let points = zigzag(6);
    let mut engine = recording_engine();

    engine.on_gesture_start(points[0]);
    for point in &points[1..4] {
        engine.on_gesture_move(*point, &thin);
    }
    for point in &points[4..] {
        engine.on_gesture_move(*point, &thick);
    }

    let widths: Vec<f32> = engine.canvas().segments.iter().map(|(_, s)| s.width).collect();
    assert_eq!(widths, vec![2.0, 20.0, 20.0]);
}

#[test]
fn test_rendering_is_deterministic() {
    let style = StrokeStyle::new(9.0, Color32::from_rgb(30, 60, 200));
    let points = zigzag(10);

    let mut first = surface_engine();
    let mut second = surface_engine();
    draw_gesture(&mut first, &points, &style);
    draw_gesture(&mut second, &points, &style);

    assert_eq!(first.canvas().raw_pixels(), second.canvas().raw_pixels());
}

#[test]
fn test_engine_is_reusable_across_gestures() {
    let style = StrokeStyle::default();
    let mut engine = recording_engine();
    for _ in 0..3 {
        draw_gesture(&mut engine, &zigzag(5), &style);
        engine.on_gesture_end();
    }
    // 5 points give 2 segments per gesture
    assert_eq!(engine.canvas().segments.len(), 6);
}
