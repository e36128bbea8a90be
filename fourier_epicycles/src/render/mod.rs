//! Renderer interface consumed by the animator plus an SVG implementation and the SVG document
//! export of a synthesized path.
mod color;
mod svg;

pub use color::*;
pub use svg::*;

use crate::{
    core::{math::Vector2, traits::Real},
    path::Path,
};
use static_aabb2d_index::AABB;

/// Stroke/fill style for drawn circles and paths.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle<T = f64> {
    /// Stroke color (any SVG color string), `None` for no stroke.
    pub stroke: Option<String>,
    /// Fill color, `None` for no fill.
    pub fill: Option<String>,
    /// Stroke width in drawing units.
    pub stroke_width: T,
}

impl<T> DrawStyle<T>
where
    T: Real,
{
    /// Outline only.
    pub fn stroke(color: impl Into<String>, width: T) -> Self {
        Self {
            stroke: Some(color.into()),
            fill: None,
            stroke_width: width,
        }
    }

    /// Filled only.
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            stroke: None,
            fill: Some(color.into()),
            stroke_width: T::zero(),
        }
    }

    /// Add a fill to the style.
    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }
}

/// Drawing surface the animator draws onto. Only consumes positions and paths so the core stays
/// free of any concrete drawing surface.
pub trait EpicycleRenderer<T>
where
    T: Real,
{
    /// Called at the start of every rendered frame, dynamic elements of the previous frame should
    /// be discarded.
    fn begin_frame(&mut self) {}

    /// Visible region in drawing coordinates.
    fn set_view_box(&mut self, _view_box: &AABB<T>) {}

    fn draw_circle(&mut self, center: Vector2<T>, radius: T, style: &DrawStyle<T>);

    /// Filled marker at the end of a rotating vector, drawn as a filled circle by default.
    fn draw_point(&mut self, position: Vector2<T>, radius: T, color: &str) {
        self.draw_circle(position, radius, &DrawStyle::fill(color));
    }

    fn draw_path(&mut self, path: &Path<T>, style: &DrawStyle<T>);
}
