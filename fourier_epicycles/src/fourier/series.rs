use super::{
    calculate_coefficients, calculate_fourier_paths, FourierCoefficients, SortedCoefficients,
    SynthesizedPaths, DEFAULT_SAMPLE_COUNT,
};
use crate::{
    core::traits::Real,
    path::{prepare_path, Path, DEFAULT_TARGET_SPACING},
    render::export_svg,
    FourierError,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for [fourierize].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FourierOptions<T = f64> {
    /// Spacing passed to [prepare_path] for the drawn path.
    pub target_spacing: T,
    /// Maximum number of circles (rotating terms besides the centroid) that can be drawn.
    /// `max_circles + 1` coefficients are computed.
    pub max_circles: usize,
    /// Samples in each synthesized path (animation/render smoothness, independent of the drawing).
    pub n_samples: usize,
    /// Minimum number of raw drawing points, shorter drawings are rejected.
    pub min_drawing_points: usize,
}

impl<T> FourierOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            target_spacing: T::from(DEFAULT_TARGET_SPACING).unwrap(),
            max_circles: 100,
            n_samples: DEFAULT_SAMPLE_COUNT,
            min_drawing_points: 5,
        }
    }
}

impl<T> Default for FourierOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Everything derived from one finished drawing. Immutable once built; a new drawing builds a new
/// series.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries<T = f64> {
    /// Drawing as it was received.
    pub drawing: Path<T>,
    /// Drawing after closing and resampling (input of the transform).
    pub resampled: Path<T>,
    /// Coefficients in generation order.
    pub coefficients: FourierCoefficients<T>,
    /// Coefficients in drawing order.
    pub sorted: SortedCoefficients<T>,
    /// Precomputed path for every circle count.
    pub paths: SynthesizedPaths<T>,
}

impl<T> FourierSeries<T>
where
    T: Real,
{
    /// Largest circle count available.
    #[inline]
    pub fn max_circles(&self) -> usize {
        self.sorted.max_circles()
    }

    /// Precomputed path drawn with `n_circles` circles (clamped to [FourierSeries::max_circles]).
    #[inline]
    pub fn path_for_circles(&self, n_circles: usize) -> Option<&Path<T>> {
        self.paths.get(n_circles.min(self.max_circles()))
    }

    /// Standalone SVG document with the path for `n_circles`, see [export_svg]. `None` if there is
    /// no path.
    pub fn export_svg(&self, n_circles: usize, view_box: &AABB<T>) -> Option<String> {
        self.path_for_circles(n_circles)
            .map(|path| export_svg(path, view_box))
    }
}

/// Run the full pipeline on a raw drawing.
///
/// The drawing must have at least `options.min_drawing_points` points
/// ([FourierError::TooFewPoints] otherwise). It is closed back to its first point, resampled with
/// `options.target_spacing`, `options.max_circles + 1` coefficients are computed and
/// `options.n_samples` samples are synthesized for every circle count.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::fourier::*;
/// # use fourier_epicycles::core::math::*;
/// let drawing = path![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)];
/// let options = FourierOptions { max_circles: 8, n_samples: 100, ..Default::default() };
/// let series = fourierize(&drawing, &options).unwrap();
/// assert_eq!(series.sorted.len(), 9);
/// assert_eq!(series.paths.len(), 9);
/// assert_eq!(series.paths.sample_count(), 100);
/// assert!(series.resampled.is_closed());
/// ```
pub fn fourierize<T>(
    drawing: &Path<T>,
    options: &FourierOptions<T>,
) -> Result<FourierSeries<T>, FourierError>
where
    T: Real,
{
    if drawing.len() < options.min_drawing_points || drawing.is_empty() {
        return Err(FourierError::TooFewPoints {
            count: drawing.len(),
            min: options.min_drawing_points.max(1),
        });
    }

    let mut closed = drawing.clone();
    closed.close();

    let resampled = prepare_path(&closed, options.target_spacing)?;
    let coefficients = calculate_coefficients(&resampled, options.max_circles + 1)?;
    let (sorted, paths) = calculate_fourier_paths(&coefficients, options.n_samples)?;

    log::debug!(
        "fourierized drawing of {} points: {} resampled points, {} circles",
        drawing.len(),
        resampled.len(),
        sorted.max_circles()
    );

    Ok(FourierSeries {
        drawing: drawing.clone(),
        resampled,
        coefficients,
        sorted,
        paths,
    })
}
