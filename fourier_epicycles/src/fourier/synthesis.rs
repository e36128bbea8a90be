use super::{FourierCoefficient, FourierCoefficients};
use crate::{
    core::{
        math::{Complex, Vector2},
        traits::Real,
    },
    path::Path,
    FourierError,
};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of samples in each synthesized path.
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;

/// Coefficients ordered for drawing: `k = 0` first, the rest by descending magnitude with ties
/// broken by ascending `k`. Position `i` is "the i-th most significant circle".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct SortedCoefficients<T = f64> {
    coeffs: Vec<FourierCoefficient<T>>,
}

impl<T> SortedCoefficients<T>
where
    T: Real,
{
    /// Rank the coefficients of `coeffs` (see type level documentation for the order).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::fourier::*;
    /// # use fourier_epicycles::core::math::Complex;
    /// let coeffs = FourierCoefficients::from_amplitudes([
    ///     Complex::new(5.0, 5.0),  // k = 0
    ///     Complex::new(1.0, 0.0),  // k = 1
    ///     Complex::new(0.0, 3.0),  // k = -1
    ///     Complex::new(0.0, -1.0), // k = 2
    /// ]);
    /// let sorted = SortedCoefficients::from_coefficients(&coeffs);
    /// let ks: Vec<i64> = sorted.iter().map(|fc| fc.k).collect();
    /// assert_eq!(ks, vec![0, -1, 1, 2]);
    /// ```
    pub fn from_coefficients(coeffs: &FourierCoefficients<T>) -> Self {
        let mut rest: Vec<FourierCoefficient<T>> =
            coeffs.iter().filter(|fc| fc.k != 0).copied().collect();

        rest.sort_by(|a, b| {
            b.magnitude()
                .partial_cmp(&a.magnitude())
                .unwrap_or(Ordering::Equal)
                .then(a.k.cmp(&b.k))
        });

        let mut sorted = Vec::with_capacity(coeffs.len());
        if let Some(c0) = coeffs.get(0) {
            sorted.push(FourierCoefficient::new(0, c0));
        }
        sorted.extend(rest);

        SortedCoefficients { coeffs: sorted }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&FourierCoefficient<T>> {
        self.coeffs.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FourierCoefficient<T>> {
        self.coeffs.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[FourierCoefficient<T>] {
        &self.coeffs
    }

    /// Largest circle count that can be drawn (every term but the centroid).
    #[inline]
    pub fn max_circles(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Position of the `k = 0` term (centroid), origin if empty.
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.coeffs
            .first()
            .map(|fc| fc.c.to_vector2())
            .unwrap_or_else(Vector2::zero)
    }
}

/// Family of closed paths, one per circle count: entry `n` is the curve traced by the partial sum
/// of the first `n + 1` sorted coefficients, sampled at the same angles for every entry.
///
/// Entry 0 sits on the centroid for every sample, the last entry is the full truncated series.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedPaths<T = f64> {
    paths: Vec<Path<T>>,
}

impl<T> SynthesizedPaths<T>
where
    T: Real,
{
    /// Number of paths (equal to the number of coefficients).
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path for the circle count `n_circles`.
    #[inline]
    pub fn get(&self, n_circles: usize) -> Option<&Path<T>> {
        self.paths.get(n_circles)
    }

    /// Path using all coefficients.
    #[inline]
    pub fn last(&self) -> Option<&Path<T>> {
        self.paths.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Path<T>> {
        self.paths.iter()
    }

    /// Number of samples in every path.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.paths.first().map(|p| p.len()).unwrap_or(0)
    }
}

/// Sample angle step for `n_samples` samples around a full turn.
#[inline]
pub fn sample_angle_step<T>(n_samples: usize) -> T
where
    T: Real,
{
    T::tau() / T::from_usize(n_samples)
}

/// Rank `coeffs` by magnitude and build the path traced by the partial sum for every circle count.
///
/// Path 0 is `n_samples` copies of the `k = 0` position. Path `n` is path `n - 1` plus the `n`-th
/// sorted coefficient evaluated at the angles `k * i * (2PI / n_samples)` for `i` in
/// `0..n_samples`. Returns [FourierError::NoCoefficients] if `coeffs` is empty or has no `k = 0`
/// term and [FourierError::NoSamples] if `n_samples` is 0.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::fourier::*;
/// # use fourier_epicycles::core::math::*;
/// // unit circle around (1, 1)
/// let coeffs = FourierCoefficients::from_amplitudes([Complex::new(1.0, 1.0), Complex::new(1.0, 0.0)]);
/// let (sorted, paths) = calculate_fourier_paths(&coeffs, 4).unwrap();
/// assert_eq!(sorted.len(), 2);
/// assert_eq!(paths.len(), 2);
/// assert!(paths.get(0).unwrap().iter().all(|p| p.fuzzy_eq(vec2(1.0, 1.0))));
/// assert!(paths.get(1).unwrap()[1].fuzzy_eq(vec2(1.0, 2.0)));
/// ```
pub fn calculate_fourier_paths<T>(
    coeffs: &FourierCoefficients<T>,
    n_samples: usize,
) -> Result<(SortedCoefficients<T>, SynthesizedPaths<T>), FourierError>
where
    T: Real,
{
    if coeffs.centroid().is_none() {
        return Err(FourierError::NoCoefficients);
    }

    if n_samples == 0 {
        return Err(FourierError::NoSamples);
    }

    let sorted = SortedCoefficients::from_coefficients(coeffs);
    let d_theta = sample_angle_step::<T>(n_samples);

    let mut paths = Vec::with_capacity(sorted.len());
    paths.push(Path::from_points(vec![sorted.center(); n_samples]));

    for fc in sorted.iter().skip(1) {
        let k = T::from_i64(fc.k);
        let next = {
            let prev = &paths[paths.len() - 1];
            prev.iter()
                .enumerate()
                .map(|(i, p)| {
                    let theta = k * T::from_usize(i) * d_theta;
                    let term = fc.c * Complex::from_polar(T::one(), theta);
                    *p + term.to_vector2()
                })
                .collect::<Path<T>>()
        };
        paths.push(next);
    }

    log::debug!(
        "synthesized {} paths of {} samples",
        paths.len(),
        n_samples
    );

    Ok((sorted, SynthesizedPaths { paths }))
}
