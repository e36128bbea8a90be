//! This crate turns a user drawn closed curve into a truncated discrete Fourier series and
//! evaluates it as a chain of rotating vectors ("epicycles") that trace the curve.
//!
//! Pipeline: [path::prepare_path] (uniform spacing) → [fourier::calculate_coefficients] (direct
//! discrete Fourier sums) → [fourier::calculate_fourier_paths] (coefficients ranked by magnitude
//! and one precomputed path per circle count) → [fourier::SortedCoefficients::epicycles] every
//! animation frame. [fourier::fourierize] runs the whole pipeline, [animation::Animator] owns the
//! per-frame state and [render] holds the renderer interface and SVG export.
#[macro_use]
mod macros;
pub mod animation;
pub mod core;
mod error;
pub mod fourier;
pub mod path;
pub mod render;

pub use error::FourierError;
pub use static_aabb2d_index;
