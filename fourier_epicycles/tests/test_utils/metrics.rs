use fourier_epicycles::{core::math::dist, path::Path};

/// Root mean square of pointwise distances between paths of equal length.
pub fn rms_dist(a: &Path, b: &Path) -> f64 {
    assert_eq!(a.len(), b.len(), "paths must have equal length");
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| {
            let d = dist(*p, *q);
            d * d
        })
        .sum();
    (sum / a.len() as f64).sqrt()
}

/// Distances between consecutive points.
pub fn segment_lengths(path: &Path) -> Vec<f64> {
    path.as_slice()
        .windows(2)
        .map(|w| dist(w[0], w[1]))
        .collect()
}
