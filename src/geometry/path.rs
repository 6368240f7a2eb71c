use egui::{Pos2, Rect};

const ELLIPSE_SEGMENTS: usize = 64;
const CURVE_SEGMENTS: usize = 32;

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

/// Corners of a rectangle, clockwise from the top-left
pub fn rect_corners(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

/// Flatten the ellipse inscribed in `frame` into a closed polygon (first point not repeated)
pub fn ellipse_points(frame: Rect) -> Vec<Pos2> {
    let center = frame.center();
    let (rx, ry) = (frame.width() / 2.0, frame.height() / 2.0);
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
            Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// Flatten a quadratic Bézier into an open polyline from `start` to `end`
pub fn quadratic_points(start: Pos2, control: Pos2, end: Pos2) -> Vec<Pos2> {
    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            Pos2::new(
                u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
                u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
            )
        })
        .collect()
}

/// Split a path into the "on" pieces of a dash pattern
pub fn dash_segments(points: &[Pos2], closed: bool, dash: f32, gap: f32) -> Vec<Vec<Pos2>> {
    let mut path = points.to_vec();
    if closed && points.len() > 2 {
        path.push(points[0]);
    }

    let mut dashes = Vec::new();
    if path.len() < 2 || dash <= 0.0 {
        return dashes;
    }
    let gap = gap.max(0.0);

    let mut drawing = true;
    let mut remaining = dash;
    let mut current = vec![path[0]];

    for pair in path.windows(2) {
        let (mut start, end) = (pair[0], pair[1]);
        let mut seg_len = start.distance(end);

        while seg_len > 0.0 {
            let step = remaining.min(seg_len);
            let next = start + (end - start) * (step / seg_len);
            if drawing {
                current.push(next);
            }
            seg_len -= step;
            remaining -= step;
            start = next;

            if remaining <= 0.0 {
                if drawing {
                    dashes.push(std::mem::take(&mut current));
                    remaining = gap;
                } else {
                    current = vec![start];
                    remaining = dash;
                }
                drawing = !drawing;
            }
        }
    }

    if drawing && current.len() > 1 {
        dashes.push(current);
    }
    dashes
}
