//! This module has the discrete Fourier series computation: coefficients of a resampled closed
//! path, ranking by magnitude, precomputed partial sum paths and per frame epicycle evaluation.
mod coefficients;
mod epicycles;
mod series;
mod synthesis;

pub use coefficients::*;
pub use epicycles::*;
pub use series::*;
pub use synthesis::*;
