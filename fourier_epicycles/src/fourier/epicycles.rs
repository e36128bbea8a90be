use super::SortedCoefficients;
use crate::core::{math::Vector2, traits::Real};

/// One rotating vector of an evaluated chain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Epicycle<T = f64> {
    /// Frequency of the term.
    pub k: i64,
    /// Circle center (sum of all the terms before this one).
    pub center: Vector2<T>,
    /// Circle radius (magnitude of the coefficient).
    pub radius: T,
    /// End point of the rotating vector (center of the next circle).
    pub end: Vector2<T>,
}

/// Positions of a chain of rotating vectors at one phase.
///
/// `positions()[0]` is the centroid and `positions()[i]` is the cumulative position after adding
/// the `i`-th sorted term, so the last position is the tip tracing the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleChain<T = f64> {
    positions: Vec<Vector2<T>>,
    radii: Vec<T>,
    frequencies: Vec<i64>,
}

impl<T> EpicycleChain<T>
where
    T: Real,
{
    /// All cumulative positions starting with the centroid.
    #[inline]
    pub fn positions(&self) -> &[Vector2<T>] {
        &self.positions
    }

    /// Number of circles in the chain.
    #[inline]
    pub fn circle_count(&self) -> usize {
        self.radii.len()
    }

    /// Position of the tip (last cumulative position).
    #[inline]
    pub fn tip(&self) -> Vector2<T> {
        self.positions
            .last()
            .copied()
            .unwrap_or_else(Vector2::zero)
    }

    /// Iterate the circles of the chain in drawing order.
    pub fn circles(&self) -> impl Iterator<Item = Epicycle<T>> + '_ {
        self.positions
            .windows(2)
            .zip(self.radii.iter().zip(self.frequencies.iter()))
            .map(|(w, (&radius, &k))| Epicycle {
                k,
                center: w[0],
                radius,
                end: w[1],
            })
    }
}

impl<T> SortedCoefficients<T>
where
    T: Real,
{
    /// Evaluate the chain of the first `n_circles` rotating vectors at `phase` (radians).
    ///
    /// Starts at the `k = 0` position and for `i` in `1..=n_circles` adds
    /// `coefficient[i].c * e^(i * k_i * phase)`, recording the cumulative position after each
    /// term. `n_circles` is clamped to [SortedCoefficients::max_circles].
    ///
    /// At `phase = i * 2PI / n_samples` the tip with all circles equals sample `i` of the last
    /// path from [calculate_fourier_paths](super::calculate_fourier_paths).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::fourier::*;
    /// # use fourier_epicycles::core::math::*;
    /// use std::f64::consts::PI;
    /// let coeffs = FourierCoefficients::from_amplitudes([
    ///     Complex::new(0.0, 0.0), // k = 0
    ///     Complex::new(2.0, 0.0), // k = 1
    ///     Complex::new(0.0, 0.0), // k = -1
    /// ]);
    /// let sorted = SortedCoefficients::from_coefficients(&coeffs);
    /// let chain = sorted.epicycles(10, PI / 2.0);
    /// assert_eq!(chain.circle_count(), 2);
    /// assert!(chain.tip().fuzzy_eq(vec2(0.0, 2.0)));
    /// ```
    pub fn epicycles(&self, n_circles: usize, phase: T) -> EpicycleChain<T> {
        let n_circles = n_circles.min(self.max_circles());
        let mut positions = Vec::with_capacity(n_circles + 1);
        let mut radii = Vec::with_capacity(n_circles);
        let mut frequencies = Vec::with_capacity(n_circles);

        let mut pos = self.center();
        positions.push(pos);
        for fc in self.iter().skip(1).take(n_circles) {
            pos += fc.eval(phase).to_vector2();
            positions.push(pos);
            radii.push(fc.magnitude());
            frequencies.push(fc.k);
        }

        EpicycleChain {
            positions,
            radii,
            frequencies,
        }
    }
}
