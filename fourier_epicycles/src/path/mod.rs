//! This module has the path type shared by every stage of the pipeline and the resampling step
//! that evens out point spacing of a freehand drawing.
mod points;
mod resample;

pub use points::*;
pub use resample::*;
