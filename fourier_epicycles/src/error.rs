use thiserror::Error;

/// Invalid input detected by the Fourier pipeline.
///
/// The computation itself is total for well formed input, so every variant describes a
/// precondition the caller did not meet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FourierError {
    /// Path given has no points (coefficients are a mean over the points).
    #[error("path is empty")]
    EmptyPath,
    /// Drawing has fewer points than required to be turned into a Fourier series.
    #[error("path has {count} points, at least {min} are required")]
    TooFewPoints { count: usize, min: usize },
    /// Coefficient count requested was zero.
    #[error("coefficient count must be at least 1")]
    NoCoefficients,
    /// Sample count requested for path synthesis was zero.
    #[error("sample count must be at least 1")]
    NoSamples,
    /// Resample spacing must be positive and finite.
    #[error("target spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),
    /// A segment of the path needs more interpolated points than can be counted.
    #[error("segment of length {length} cannot be split into steps of {target_spacing}")]
    SegmentTooLong { length: f64, target_spacing: f64 },
}
