use crate::core::{math::clamp_real, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point the view box is centered on.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ReferencePoint {
    /// Center of the screen, matching drawing coordinates one to one at zoom 1.
    #[default]
    Default,
    /// Centroid of the curve (`k = 0` term).
    Center,
    /// Tip of the epicycle chain, followed every frame.
    Tip,
    /// Center set by panning.
    Mouse,
}

/// Fixed animation parameters.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationOptions<T = f64> {
    /// Seconds for one full phase turn at speed 1.
    pub period: T,
    pub min_speed: T,
    pub max_speed: T,
    pub min_zoom: T,
    pub max_zoom: T,
}

impl<T> AnimationOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            period: T::from(30.0).unwrap(),
            min_speed: T::from(0.05).unwrap(),
            max_speed: T::from(5.0).unwrap(),
            min_zoom: T::from(0.5).unwrap(),
            max_zoom: T::from(500.0).unwrap(),
        }
    }

    /// Phase increment for `dt` seconds at `speed`: `speed * 2PI * dt / period`.
    #[inline]
    pub fn phase_delta(&self, speed: T, dt: T) -> T {
        speed * T::tau() * dt / self.period
    }
}

impl<T> Default for AnimationOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// User adjustable controls of the visualization.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationControls<T = f64> {
    /// Number of rotating terms drawn.
    pub n_circles: usize,
    /// Phase speed multiplier.
    pub speed: T,
    pub circles_visible: bool,
    pub points_visible: bool,
    /// Show the raw drawing underneath the animation.
    pub drawing_visible: bool,
    /// Show the precomputed curve for `n_circles`.
    pub show_curve: bool,
    /// Fill the precomputed curve.
    pub fill_curve: bool,
    pub reference_point: ReferencePoint,
    pub zoom: T,
    pub paused: bool,
}

impl<T> AnimationControls<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            n_circles: 5,
            speed: T::one(),
            circles_visible: true,
            points_visible: true,
            drawing_visible: true,
            show_curve: true,
            fill_curve: false,
            reference_point: ReferencePoint::Default,
            zoom: T::one(),
            paused: false,
        }
    }

    /// Clamp speed and zoom to the limits in `options` and `n_circles` to `max_circles`.
    pub fn clamped(mut self, options: &AnimationOptions<T>, max_circles: usize) -> Self {
        self.speed = clamp_real(self.speed, options.min_speed, options.max_speed);
        self.zoom = clamp_real(self.zoom, options.min_zoom, options.max_zoom);
        self.n_circles = self.n_circles.min(max_circles);
        self
    }

    /// Returns true if a change from `other` to `self` requires redrawing a paused frame.
    pub fn frame_changed(&self, other: &Self) -> bool {
        self.n_circles != other.n_circles
            || self.circles_visible != other.circles_visible
            || self.points_visible != other.points_visible
            || self.reference_point != other.reference_point
            || self.zoom != other.zoom
    }
}

impl<T> Default for AnimationControls<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
