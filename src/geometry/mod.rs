mod vector;

pub use vector::{is_finite_pos, is_finite_vec, midpoint_behind, rotate, rotate_degrees, with_length};
