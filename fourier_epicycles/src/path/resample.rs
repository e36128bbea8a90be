use super::Path;
use crate::{
    core::{math::dist, traits::Real},
    FourierError,
};

/// Default spacing between consecutive resampled points (drawing space units, i.e. pixels).
pub const DEFAULT_TARGET_SPACING: f64 = 5.0;

/// Resample `path` so consecutive points are spaced close to `target_spacing`.
///
/// Walks the input in order keeping the last accepted point. The first point is always accepted.
/// For each following point at distance `d` from the last accepted point:
/// * `d < target_spacing`: the point is dropped (too dense),
/// * `d < 2 * target_spacing`: the point is accepted as is,
/// * otherwise `floor(d / target_spacing)` evenly spaced points are inserted between the last
///   accepted point (exclusive) and the point (inclusive).
///
/// The coefficient computation treats point index as the curve parameter, so uneven spacing
/// (fast vs. slow strokes) would bias the fit toward densely sampled stretches. This is an
/// approximation of resampling by arc length without any smoothing or reordering.
///
/// Paths with fewer than 2 points are returned unchanged. [FourierError::InvalidSpacing] is
/// returned if `target_spacing` is not positive and finite and [FourierError::SegmentTooLong] if
/// a segment would need more steps than fit in a `usize` (including non finite coordinates).
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::path::prepare_path;
/// # use fourier_epicycles::core::math::vec2;
/// let edge = path![(0.0, 0.0), (1.0, 0.0), (10.0, 0.0)];
/// let resampled = prepare_path(&edge, 5.0).unwrap();
/// // (1, 0) is too close to the start, (10, 0) is split in two steps of 5
/// assert_eq!(resampled.points, vec![vec2(0.0, 0.0), vec2(5.0, 0.0), vec2(10.0, 0.0)]);
/// ```
pub fn prepare_path<T>(path: &Path<T>, target_spacing: T) -> Result<Path<T>, FourierError>
where
    T: Real,
{
    let max_spacing = <T as num_traits::Bounded>::max_value();
    if !(target_spacing > T::zero() && target_spacing <= max_spacing) {
        return Err(FourierError::InvalidSpacing(
            target_spacing.to_f64().unwrap_or(f64::NAN),
        ));
    }

    if path.len() < 2 {
        return Ok(path.clone());
    }

    let double_spacing = T::two() * target_spacing;
    let mut result = Path::with_capacity(path.len());
    let mut last = path[0];
    result.add_point(last);

    for &p in path.iter().skip(1) {
        let d = dist(p, last);
        if d < target_spacing {
            continue;
        }

        if d < double_spacing {
            result.add_point(p);
        } else {
            let step_count = (d / target_spacing).floor();
            let n = step_count
                .to_usize()
                .ok_or_else(|| FourierError::SegmentTooLong {
                    length: d.to_f64().unwrap_or(f64::NAN),
                    target_spacing: target_spacing.to_f64().unwrap_or(f64::NAN),
                })?;
            let delta = (p - last).scale(T::one() / step_count);
            for i in 1..=n {
                result.add_point(last + delta.scale(T::from_usize(i)));
            }
        }

        // last accepted point is always the last one appended
        last = result.last().unwrap_or(p);
    }

    log::trace!(
        "resampled path from {} to {} points",
        path.len(),
        result.len()
    );

    Ok(result)
}
