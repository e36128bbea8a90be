#![allow(dead_code)]
mod metrics;
mod shapes;

pub use metrics::*;
pub use shapes::*;
