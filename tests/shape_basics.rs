use egui::{Color32, Pos2, Rect, Vec2, pos2};
use shape_canvas::error::ShapeError;
use shape_canvas::shape::{self, Ellipse, Fillable, Line, QuadCurve, Rectangle, Shape, ShapeBase, ShapeKind, ShapeStyle, ShapeType};
use shape_canvas::surface::{Paint, Surface};

/// Counts the primitives a shape asks for
#[derive(Default)]
struct Recorder {
    fills: usize,
    strokes: usize,
    dashed: usize,
    rects: usize,
}

impl Surface for Recorder {
    fn fill_polygon(&mut self, _points: &[Pos2], _paint: &Paint) {
        self.fills += 1;
    }

    fn stroke_path(&mut self, _points: &[Pos2], _closed: bool, _paint: &Paint) {
        self.strokes += 1;
    }

    fn stroke_dashed(&mut self, _points: &[Pos2], _closed: bool, _paint: &Paint, _dash: f32, _gap: f32) {
        self.dashed += 1;
    }

    fn stroke_rect(&mut self, _rect: Rect, _paint: &Paint) {
        self.rects += 1;
    }
}

/// Minimal variant that leaves every optional capability at its default
struct Marker {
    base: ShapeBase,
    at: Pos2,
}

impl Shape for Marker {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.stroke_path(&[self.at], false, paint);
    }

    fn location(&self) -> Pos2 {
        self.at
    }

    fn update_shape(&mut self, point: Pos2) {
        self.at = point;
    }
}

fn all_kinds(p1: Pos2, p2: Pos2) -> Vec<ShapeType> {
    let style = ShapeStyle::default();
    vec![
        shape::factory::create_line(style, p1, p2),
        shape::factory::create_rectangle(style, false, p1, p2),
        shape::factory::create_ellipse(style, true, p1, p2),
        shape::factory::create_curve(style, p1, p2, p2),
    ]
}

#[test]
fn test_new_shapes_contain_their_location() {
    let p = pos2(25.0, 40.0);
    for shape in all_kinds(p, p) {
        assert!(shape.contains(shape.location()).unwrap(), "{} at a point", shape.kind().name());
    }
}

#[test]
fn test_press_then_drag_builds_the_same_shape() {
    let (press, corner) = (pos2(10.0, 10.0), pos2(60.0, 35.0));
    for (mut pressed, built) in all_kinds(press, press).into_iter().zip(all_kinds(press, corner)) {
        assert!(pressed.contains(pressed.location()).unwrap(), "{} before drag", pressed.kind().name());
        pressed.update_shape(corner);
        assert_eq!(pressed.bounds().unwrap(), built.bounds().unwrap(), "{}", pressed.kind().name());
    }
}

#[test]
fn test_line_hit_uses_perpendicular_distance() {
    let line = Line::new(ShapeStyle::default(), pos2(0.0, 0.0), pos2(100.0, 0.0));
    assert!(line.contains(pos2(50.0, 1.5)).unwrap());
    assert!(line.contains(pos2(50.0, -2.0)).unwrap());
    assert!(!line.contains(pos2(50.0, 3.0)).unwrap());

    // past the end point, still next to the line's extension
    assert!(line.contains(pos2(105.0, 0.0)).unwrap());
    assert!(line.contains(pos2(-40.0, 1.0)).unwrap());
    assert!(!line.contains(pos2(105.0, 2.5)).unwrap());

    let short = Line::new(ShapeStyle::default(), pos2(10.0, 10.0), pos2(40.0, 10.0));
    assert!(short.contains(pos2(90.0, 11.0)).unwrap());
}

#[test]
fn test_degenerate_line_hit_is_distance_to_point() {
    let line = Line::new(ShapeStyle::default(), pos2(10.0, 10.0), pos2(10.0, 10.0));
    assert!(line.is_degenerate());
    assert!(line.contains(pos2(11.0, 11.0)).unwrap());
    assert!(!line.contains(pos2(13.0, 10.0)).unwrap());
}

#[test]
fn test_line_set_location_keeps_vector() {
    let mut line = Line::new(ShapeStyle::default(), pos2(10.0, 10.0), pos2(40.0, 30.0));
    line.set_location(pos2(0.0, 5.0)).unwrap();
    assert_eq!(line.p1(), pos2(0.0, 5.0));
    assert_eq!(line.p2(), pos2(30.0, 25.0));
}

#[test]
fn test_rectangle_frame_flips_around_anchor() {
    let mut rect = Rectangle::new(ShapeStyle::default(), false, pos2(50.0, 50.0), pos2(50.0, 50.0));
    rect.update_shape(pos2(80.0, 90.0));
    assert_eq!(rect.rect(), Rect::from_min_max(pos2(50.0, 50.0), pos2(80.0, 90.0)));

    rect.update_shape(pos2(20.0, 80.0));
    assert_eq!(rect.rect(), Rect::from_min_max(pos2(20.0, 50.0), pos2(50.0, 80.0)));
    assert_eq!(rect.location(), pos2(20.0, 50.0));
}

#[test]
fn test_rectangle_set_location_preserves_size_and_keeps_anchor() {
    let mut rect = Rectangle::new(ShapeStyle::default(), false, pos2(10.0, 10.0), pos2(30.0, 40.0));
    rect.set_location(pos2(50.0, 60.0)).unwrap();
    assert_eq!(rect.rect().min, pos2(50.0, 60.0));
    assert_eq!(rect.rect().size(), Vec2::new(20.0, 30.0));
    assert_eq!(rect.frame().anchor(), pos2(10.0, 10.0));

    // a later resize rebuilds from the press point
    rect.update_shape(pos2(100.0, 100.0));
    assert_eq!(rect.rect(), Rect::from_min_max(pos2(10.0, 10.0), pos2(100.0, 100.0)));
}

#[test]
fn test_ellipse_set_location_preserves_size() {
    let mut ellipse = Ellipse::new(ShapeStyle::default(), true, pos2(70.0, 20.0), pos2(10.0, 45.0));
    let size = ellipse.rect().size();
    ellipse.set_location(pos2(-5.0, 100.0)).unwrap();

    assert_eq!(ellipse.location(), pos2(-5.0, 100.0));
    assert_eq!(ellipse.rect().size(), size);
    assert_eq!(ellipse.frame().anchor(), pos2(70.0, 20.0));
    assert!(ellipse.contains(ellipse.rect().center()).unwrap());
}

#[test]
fn test_rectangle_contains_is_inclusive() {
    let rect = Rectangle::new(ShapeStyle::default(), false, pos2(10.0, 10.0), pos2(50.0, 50.0));
    assert!(rect.contains(pos2(10.0, 10.0)).unwrap());
    assert!(rect.contains(pos2(50.0, 30.0)).unwrap());
    assert!(!rect.contains(pos2(50.5, 30.0)).unwrap());
}

#[test]
fn test_ellipse_contains_interior_only() {
    let ellipse = Ellipse::new(ShapeStyle::default(), false, pos2(0.0, 0.0), pos2(100.0, 50.0));
    assert!(ellipse.contains(pos2(50.0, 25.0)).unwrap());
    assert!(ellipse.contains(pos2(0.0, 25.0)).unwrap());
    // inside the frame, outside the ellipse
    assert!(!ellipse.contains(pos2(3.0, 3.0)).unwrap());
}

#[test]
fn test_fill_flag_controls_fill_pass() {
    let mut ellipse = Ellipse::new(ShapeStyle::default(), false, pos2(0.0, 0.0), pos2(40.0, 40.0));
    let mut surface = Recorder::default();
    ellipse.render(&mut surface);
    assert_eq!((surface.fills, surface.strokes), (0, 1));

    ellipse.set_filled(true);
    let mut surface = Recorder::default();
    ellipse.render(&mut surface);
    assert_eq!((surface.fills, surface.strokes), (1, 1));
}

#[test]
fn test_curve_phases() {
    let mut curve = QuadCurve::new(ShapeStyle::default(), pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
    curve.update_shape(pos2(100.0, 0.0));
    assert_eq!(curve.end(), pos2(100.0, 0.0));
    assert_eq!(curve.control(), pos2(100.0, 0.0));

    curve.set_control_phase(true);
    curve.update_shape(pos2(50.0, 100.0));
    assert_eq!(curve.end(), pos2(100.0, 0.0));
    assert_eq!(curve.control(), pos2(50.0, 100.0));
    assert_eq!(curve.start(), pos2(0.0, 0.0));
}

#[test]
fn test_curve_contains_area_under_chord() {
    let curve = QuadCurve::new(ShapeStyle::default(), pos2(0.0, 0.0), pos2(100.0, 0.0), pos2(50.0, 100.0));
    assert!(curve.contains(pos2(50.0, 20.0)).unwrap());
    assert!(curve.contains(pos2(50.0, 1.0)).unwrap());
    assert!(!curve.contains(pos2(50.0, -10.0)).unwrap());
    assert!(!curve.contains(pos2(50.0, 80.0)).unwrap());
}

#[test]
fn test_curve_set_location_moves_all_points() {
    let mut curve = QuadCurve::new(ShapeStyle::default(), pos2(10.0, 10.0), pos2(50.0, 10.0), pos2(30.0, 60.0));
    curve.set_location(pos2(20.0, 0.0)).unwrap();
    assert_eq!(curve.start(), pos2(20.0, 0.0));
    assert_eq!(curve.end(), pos2(60.0, 0.0));
    assert_eq!(curve.control(), pos2(40.0, 50.0));
}

#[test]
fn test_default_capabilities_report_unsupported() {
    let mut marker = Marker {
        base: ShapeBase::new(ShapeStyle::default()),
        at: pos2(1.0, 1.0),
    };
    let expected = |operation| ShapeError::Unsupported { shape: "line", operation };

    assert_eq!(marker.contains(pos2(1.0, 1.0)).unwrap_err(), expected("contains"));
    assert_eq!(marker.bounds().unwrap_err(), expected("bounds"));
    assert_eq!(marker.set_location(pos2(0.0, 0.0)).unwrap_err(), expected("set_location"));

    let mut surface = Recorder::default();
    assert!(marker.draw(&mut surface).is_ok());

    marker.set_selected(true);
    let mut surface = Recorder::default();
    assert_eq!(marker.draw(&mut surface).unwrap_err(), expected("bounds"));
    assert_eq!(surface.strokes, 0);
}

#[test]
fn test_selection_overlay_only_when_selected() {
    let mut rect: ShapeType = Rectangle::new(ShapeStyle::default(), false, pos2(10.0, 10.0), pos2(50.0, 50.0)).into();

    // the outline itself is one rect
    let mut surface = Recorder::default();
    rect.draw(&mut surface).unwrap();
    assert_eq!((surface.dashed, surface.rects), (0, 1));

    rect.set_selected(true);
    let mut surface = Recorder::default();
    rect.draw(&mut surface).unwrap();
    assert_eq!(surface.dashed, 1);
    assert_eq!(surface.rects, 1 + 4);

    // baking path never decorates
    let mut surface = Recorder::default();
    rect.render(&mut surface);
    assert_eq!((surface.dashed, surface.rects), (0, 1));
}

#[test]
fn test_transparent_style_halves_opacity() {
    let style = ShapeStyle {
        color: Color32::RED,
        transparent: true,
        ..Default::default()
    };
    let paint = style.paint();
    assert_eq!(paint.opacity, shape::TRANSPARENT_OPACITY);
    assert_eq!(paint.width, 5.0);
}

#[test]
fn test_fillable_view_only_for_framed_shapes() {
    let mut shapes = all_kinds(pos2(0.0, 0.0), pos2(10.0, 10.0));
    let fillable: Vec<bool> = shapes.iter().map(|s| s.as_fillable().is_some()).collect();
    assert_eq!(fillable, vec![false, true, true, false]);

    if let Some(rect) = shapes[1].as_fillable_mut() {
        rect.set_filled(true);
    }
    assert!(shapes[1].as_fillable().is_some_and(|f| f.is_filled()));
}
