//! Core/common math for working with points, complex amplitudes and circles in 2D space.
mod base_math;
mod complex;
mod vector2;

pub use base_math::*;
pub use complex::Complex;
pub use vector2::{vec2, Vector2};
