use crate::{
    core::{math::Complex, traits::Real},
    path::Path,
    FourierError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex Fourier coefficient `c` for the integer frequency `k`.
///
/// `k = 0` is the mean (centroid) term, positive and negative `k` rotate counter clockwise and
/// clockwise respectively.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FourierCoefficient<T = f64> {
    /// Frequency index.
    pub k: i64,
    /// Complex amplitude.
    pub c: Complex<T>,
}

impl<T> FourierCoefficient<T>
where
    T: Real,
{
    #[inline]
    pub fn new(k: i64, c: Complex<T>) -> Self {
        FourierCoefficient { k, c }
    }

    /// Magnitude of the amplitude (radius of the circle drawn for this term).
    #[inline]
    pub fn magnitude(&self) -> T {
        self.c.magnitude()
    }

    /// Value of this term at the shared `phase`: `c * e^(i * k * phase)`.
    #[inline]
    pub fn eval(&self, phase: T) -> Complex<T> {
        self.c * Complex::from_polar(T::one(), T::from_i64(self.k) * phase)
    }
}

/// Frequency assigned to the coefficient generated at `index`: `0, 1, -1, 2, -2, 3, -3, ...`.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::fourier::frequency_for_index;
/// let ks: Vec<i64> = (0..7).map(frequency_for_index).collect();
/// assert_eq!(ks, vec![0, 1, -1, 2, -2, 3, -3]);
/// ```
#[inline]
pub fn frequency_for_index(index: usize) -> i64 {
    let magnitude = ((index + 1) / 2) as i64;
    if index % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// Inverse of [frequency_for_index].
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::fourier::{frequency_for_index, index_for_frequency};
/// for i in 0..50 {
///     assert_eq!(index_for_frequency(frequency_for_index(i)), i);
/// }
/// ```
#[inline]
pub fn index_for_frequency(k: i64) -> usize {
    if k > 0 {
        (2 * k - 1) as usize
    } else {
        (-2 * k) as usize
    }
}

/// Coefficient set of a truncated discrete Fourier series, dense over the frequencies
/// `0, 1, -1, 2, -2, ...` up to the requested count. Stored in generation order so the entry for
/// frequency `k` is found by [index_for_frequency].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FourierCoefficients<T = f64> {
    coeffs: Vec<FourierCoefficient<T>>,
}

impl<T> FourierCoefficients<T>
where
    T: Real,
{
    /// Construct from complex amplitudes given in generation order (amplitude at position `i` is
    /// for frequency [frequency_for_index]`(i)`).
    pub fn from_amplitudes<I>(amplitudes: I) -> Self
    where
        I: IntoIterator<Item = Complex<T>>,
    {
        FourierCoefficients {
            coeffs: amplitudes
                .into_iter()
                .enumerate()
                .map(|(i, c)| FourierCoefficient::new(frequency_for_index(i), c))
                .collect(),
        }
    }

    /// Number of coefficients.
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Amplitude for the frequency `k`, `None` if `k` is outside the truncation.
    #[inline]
    pub fn get(&self, k: i64) -> Option<Complex<T>> {
        self.coeffs.get(index_for_frequency(k)).map(|fc| fc.c)
    }

    /// The `k = 0` amplitude, which is the arithmetic centroid of the path points.
    #[inline]
    pub fn centroid(&self) -> Option<Complex<T>> {
        self.get(0)
    }

    /// Iterate in generation order (`k = 0, 1, -1, 2, -2, ...`).
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FourierCoefficient<T>> {
        self.coeffs.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[FourierCoefficient<T>] {
        &self.coeffs
    }
}

/// Compute `n_coeffs` complex Fourier coefficients of the closed `path` by direct summation.
///
/// Each point is read as `x + iy` and for each frequency `k` (see [frequency_for_index]):
///
/// `c_k = (1/N) * sum_{n=0}^{N-1} point[n] * e^(-i * k * 2PI * n / N)`
///
/// Total cost is `O(N * n_coeffs)`. Returns [FourierError::EmptyPath] if `path` has no points and
/// [FourierError::NoCoefficients] if `n_coeffs` is 0.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::fourier::calculate_coefficients;
/// # use fourier_epicycles::core::math::Complex;
/// let square = path![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
/// let coeffs = calculate_coefficients(&square, 3).unwrap();
/// assert_eq!(coeffs.len(), 3);
/// assert!(coeffs.centroid().unwrap().fuzzy_eq(Complex::new(1.0, 1.0)));
/// assert!(coeffs.get(2).is_none());
/// ```
pub fn calculate_coefficients<T>(
    path: &Path<T>,
    n_coeffs: usize,
) -> Result<FourierCoefficients<T>, FourierError>
where
    T: Real,
{
    if path.is_empty() {
        return Err(FourierError::EmptyPath);
    }

    if n_coeffs == 0 {
        return Err(FourierError::NoCoefficients);
    }

    let n = T::from_usize(path.len());
    let points: Vec<Complex<T>> = path.iter().map(|p| Complex::from_vector2(*p)).collect();

    let amplitudes = (0..n_coeffs).map(|i| {
        let k = T::from_i64(frequency_for_index(i));
        let sum = points
            .iter()
            .enumerate()
            .fold(Complex::zero(), |acc, (j, p)| {
                let angle = -k * (T::from_usize(j) / n) * T::tau();
                acc + *p * Complex::from_polar(T::one(), angle)
            });
        sum.scale(T::one() / n)
    });

    let result = FourierCoefficients::from_amplitudes(amplitudes);
    log::debug!(
        "calculated {} coefficients from {} path points",
        result.len(),
        path.len()
    );

    Ok(result)
}
