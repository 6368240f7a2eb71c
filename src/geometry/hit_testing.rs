use egui::Pos2;

/// Maximum distance at which a pointer still hits a stroke-only shape
pub const HIT_TOLERANCE: f32 = 2.0;

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

/// Perpendicular distance from a point to the infinite line through two points.
/// Coincident points fall back to the distance to that point.
pub fn distance_to_line(point: Pos2, through: Pos2, toward: Pos2) -> f32 {
    let dir = toward - through;
    let len = dir.length();
    if len == 0.0 {
        return point.distance(through);
    }
    let offset = point - through;
    (dir.x * offset.y - dir.y * offset.x).abs() / len
}

/// Smallest distance from a point to any segment of an open polyline.
/// A single-point path degenerates to the distance to that point.
pub fn distance_to_path(point: Pos2, path: &[Pos2]) -> f32 {
    match path {
        [] => f32::INFINITY,
        [only] => point.distance(*only),
        _ => path
            .windows(2)
            .map(|w| distance_to_line_segment(point, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Even-odd containment test against a closed polygon
pub fn point_in_polygon(point: Pos2, polygon: &[Pos2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
