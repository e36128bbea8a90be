use super::Vector2;
use crate::core::traits::Real;

/// Squared distance between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Distance between the points `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::core::math::*;
/// # use fourier_epicycles::core::traits::*;
/// assert!(dist(vec2(0.0, 0.0), vec2(3.0, 4.0)).fuzzy_eq(5.0));
/// ```
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Returns the point on the circle with `radius`, `center`, and `angle` in radians given.
///
/// Angle is measured counter clockwise from the positive x axis.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::core::math::*;
/// use std::f64::consts::PI;
/// let p = point_on_circle(2.0, vec2(1.0, 1.0), PI / 2.0);
/// assert!(p.fuzzy_eq(vec2(1.0, 3.0)));
/// ```
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Clamp `value` to be within `[min, max]`.
#[inline]
pub fn clamp_real<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(value, min), max)
}
