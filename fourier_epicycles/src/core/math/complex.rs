use super::Vector2;
use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal complex number value type used for Fourier amplitudes and rotating terms.
///
/// Path points are read as complex numbers `x + iy`, see [Complex::from_vector2].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex<T = f64> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T>
where
    T: Real,
{
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    #[inline]
    pub fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    /// Construct from polar form `r * (cos(angle), sin(angle))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::core::math::*;
    /// # use fourier_epicycles::core::traits::*;
    /// use std::f64::consts::PI;
    /// let c = Complex::from_polar(2.0, PI / 2.0);
    /// assert!(c.re.fuzzy_eq(0.0));
    /// assert!(c.im.fuzzy_eq(2.0));
    /// ```
    #[inline]
    pub fn from_polar(r: T, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Complex::new(r * c, r * s)
    }

    /// Read a 2D point as the complex number `x + iy`.
    #[inline]
    pub fn from_vector2(v: Vector2<T>) -> Self {
        Complex::new(v.x, v.y)
    }

    /// Return as a 2D point `(re, im)`.
    #[inline]
    pub fn to_vector2(&self) -> Vector2<T> {
        Vector2::new(self.re, self.im)
    }

    /// Magnitude (`sqrt(re^2 + im^2)`), the radius of the circle drawn for a term.
    #[inline]
    pub fn magnitude(&self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Plain arctangent `atan(im / re)`.
    ///
    /// This is NOT a four quadrant angle: arguments in the second and third quadrant are reported
    /// rotated by PI, and `re == 0` yields `+/-PI/2` or NaN following floating point division
    /// semantics. Nothing in the Fourier pipeline depends on it, use [Complex::arg] when the
    /// quadrant matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::core::math::*;
    /// # use fourier_epicycles::core::traits::*;
    /// use std::f64::consts::PI;
    /// assert!(Complex::new(1.0, 1.0).angle().fuzzy_eq(PI / 4.0));
    /// // second quadrant folds onto the fourth
    /// assert!(Complex::new(-1.0, 1.0).angle().fuzzy_eq(-PI / 4.0));
    /// assert!(Complex::new(0.0_f64, 0.0).angle().is_nan());
    /// ```
    #[inline]
    pub fn angle(&self) -> T {
        (self.im / self.re).atan()
    }

    /// Four quadrant argument `atan2(im, re)`.
    #[inline]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Uniformly scale both parts by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Complex::new(self.re * scale_factor, self.im * scale_factor)
    }

    /// Fuzzy equal comparison with another complex number using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.re.fuzzy_eq_eps(other.re, fuzzy_epsilon)
            && self.im.fuzzy_eq_eps(other.im, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another complex number using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T: Real> ops::Add for Complex<T> {
    type Output = Complex<T>;
    #[inline]
    fn add(self, rhs: Complex<T>) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Real> ops::AddAssign for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Complex<T>) {
        self.re = self.re + rhs.re;
        self.im = self.im + rhs.im;
    }
}

impl<T: Real> ops::Mul for Complex<T> {
    type Output = Complex<T>;
    #[inline]
    fn mul(self, rhs: Complex<T>) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}
