pub mod hit_testing;
pub mod path;

pub use hit_testing::{HIT_TOLERANCE, distance_to_line, distance_to_line_segment, distance_to_path, point_in_polygon};
pub use path::{calculate_bounds, dash_segments, ellipse_points, quadratic_points, rect_corners};
