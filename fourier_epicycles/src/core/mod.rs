//! Core module has the shared numeric traits and the 2D/complex math value types.
pub mod math;
pub mod traits;
