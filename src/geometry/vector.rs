use egui::{Pos2, Vec2};

/// Rotate `v` by `angle` radians.
///
/// Positive angles turn counter-clockwise as seen on screen. egui's y axis
/// points down, so this is the mirror image of the textbook y-up formula:
/// rotating `(1, 0)` by 90° gives `(0, -1)`, which is "up" on the canvas.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Same as [`rotate`] with the angle given in degrees
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    rotate(v, degrees.to_radians())
}

/// `v` rescaled to `length`, keeping its direction.
///
/// Returns `None` for zero-length or non-finite vectors, which have no
/// direction to keep.
pub fn with_length(v: Vec2, length: f32) -> Option<Vec2> {
    let current = v.length();
    if !current.is_finite() || current <= 0.0 || !length.is_finite() {
        return None;
    }
    Some(v * (length / current))
}

/// Point halfway between `point` and `point - delta`
pub fn midpoint_behind(point: Pos2, delta: Vec2) -> Pos2 {
    point - delta / 2.0
}

pub fn is_finite_pos(p: Pos2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
