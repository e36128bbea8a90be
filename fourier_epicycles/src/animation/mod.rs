//! Per frame animation state: phase accumulator, user controls, and the view box that follows
//! the chosen reference point.
mod animator;
mod controls;
mod viewport;

pub use animator::*;
pub use controls::*;
pub use viewport::*;
