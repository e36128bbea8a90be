mod test_utils;

use fourier_epicycles::{
    core::{
        math::{vec2, Complex},
        traits::*,
    },
    fourier::*,
    path,
    path::prepare_path,
    FourierError,
};
use test_utils::*;

#[test]
fn sorted_order() {
    let input = heart_drawing();
    let coeffs = calculate_coefficients(&input, 31).unwrap();
    let (sorted, _) = calculate_fourier_paths(&coeffs, 50).unwrap();

    assert_eq!(sorted.len(), coeffs.len());
    assert_eq!(sorted.max_circles(), 30);
    assert_eq!(sorted.get(0).unwrap().k, 0);
    assert!(sorted.center().fuzzy_eq(coeffs.centroid().unwrap().to_vector2()));

    for w in sorted.as_slice()[1..].windows(2) {
        assert!(
            w[0].magnitude() >= w[1].magnitude(),
            "k = {} ({}) before k = {} ({})",
            w[0].k,
            w[0].magnitude(),
            w[1].k,
            w[1].magnitude()
        );
    }

    // every coefficient is present exactly once
    let mut ks: Vec<i64> = sorted.iter().map(|fc| fc.k).collect();
    ks.sort_unstable();
    assert_eq!(ks, (-15..=15).collect::<Vec<_>>());
}

#[test]
fn equal_magnitudes_ordered_by_frequency() {
    let coeffs = FourierCoefficients::from_amplitudes([
        Complex::new(0.0, 0.0),  // k = 0
        Complex::new(0.0, 2.0),  // k = 1
        Complex::new(2.0, 0.0),  // k = -1
        Complex::new(-2.0, 0.0), // k = 2
        Complex::new(0.0, 4.0),  // k = -2
    ]);
    let (sorted, _) = calculate_fourier_paths(&coeffs, 8).unwrap();
    let ks: Vec<i64> = sorted.iter().map(|fc| fc.k).collect();
    assert_eq!(ks, vec![0, -2, -1, 1, 2]);
}

#[test]
fn path_family_shape() {
    let input = star_path(80);
    let coeffs = calculate_coefficients(&input, 11).unwrap();
    let (sorted, paths) = calculate_fourier_paths(&coeffs, 123).unwrap();

    assert_eq!(paths.len(), 11);
    assert_eq!(paths.sample_count(), 123);
    assert!(paths.iter().all(|p| p.len() == 123));

    let center = sorted.center();
    assert!(center.fuzzy_eq_eps(vec2(200.0, 150.0), 1e-9));
    assert!(paths.get(0).unwrap().iter().all(|p| p.fuzzy_eq(center)));
    assert!(paths.get(11).is_none());
    assert_eq!(paths.last(), paths.get(10));
}

#[test]
fn each_path_adds_one_term() {
    let input = heart_drawing();
    let coeffs = calculate_coefficients(&input, 9).unwrap();
    let n_samples = 37;
    let (sorted, paths) = calculate_fourier_paths(&coeffs, n_samples).unwrap();
    let d_theta = sample_angle_step::<f64>(n_samples);

    for n in 1..paths.len() {
        let fc = sorted.get(n).unwrap();
        let prev = paths.get(n - 1).unwrap();
        let curr = paths.get(n).unwrap();
        for i in 0..n_samples {
            let theta = fc.k as f64 * i as f64 * d_theta;
            let term = (fc.c * Complex::from_polar(1.0, theta)).to_vector2();
            assert!(
                (curr[i] - prev[i]).fuzzy_eq_eps(term, 1e-9),
                "path {} sample {}",
                n,
                i
            );
        }
    }
}

#[test]
fn more_circles_never_worse() {
    // star_path has exactly three rotating terms (k = 1, -4, 6)
    let n = 61;
    let input = star_path(n);
    let coeffs = calculate_coefficients(&input, n).unwrap();
    let (sorted, paths) = calculate_fourier_paths(&coeffs, n).unwrap();

    assert_eq!(sorted.get(1).unwrap().k, 1);
    let mut next_two: Vec<i64> = sorted.iter().skip(2).take(2).map(|fc| fc.k).collect();
    next_two.sort_unstable();
    assert_eq!(next_two, vec![-4, 6]);

    let mut prev_err = f64::INFINITY;
    for k in [1, 2, 5, 20] {
        let err = rms_dist(paths.get(k).unwrap(), &input);
        assert!(err <= prev_err + 1e-9, "K = {}: {} > {}", k, err, prev_err);
        prev_err = err;
    }

    assert!(rms_dist(paths.get(1).unwrap(), &input).fuzzy_eq_eps(450.0f64.sqrt(), 1e-6));
    assert!(rms_dist(paths.get(2).unwrap(), &input).fuzzy_eq_eps(15.0, 1e-6));

    let full = paths.last().unwrap();
    assert!(full.max_pointwise_dist(&input).unwrap() < 1e-6);
}

#[test]
fn polygon_error_shrinks_with_circles() {
    let drawn = regular_polygon(6, 100.0, vec2(200.0, 150.0), 10);
    let input = prepare_path(&drawn, 5.0).unwrap();
    let n = input.len();
    assert!(n > 40, "resampled hexagon has {} points", n);

    // one sample per resampled point so partial sums line up with the input
    let coeffs = calculate_coefficients(&input, n).unwrap();
    let (_, paths) = calculate_fourier_paths(&coeffs, n).unwrap();

    let errors: Vec<f64> = [1, 2, 5, 20]
        .iter()
        .map(|&k| rms_dist(paths.get(k).unwrap(), &input))
        .collect();
    for (w, k) in errors.windows(2).zip([2, 5, 20]) {
        assert!(w[1] <= w[0] + 1e-9, "K = {}: {} > {}", k, w[1], w[0]);
    }
    // corners need higher harmonics than the first few circles
    assert!(errors[3] < errors[0]);
    assert!(paths.last().unwrap().max_pointwise_dist(&input).unwrap() < 1e-6);
}

#[test]
fn full_series_reproduces_resampled_path() {
    let input = heart_drawing();
    let n = input.len();
    let coeffs = calculate_coefficients(&input, n).unwrap();
    let (_, paths) = calculate_fourier_paths(&coeffs, n).unwrap();
    assert!(paths.last().unwrap().max_pointwise_dist(&input).unwrap() < 1e-6);
}

#[test]
fn single_coefficient() {
    let coeffs = calculate_coefficients(&path![(2.0, 3.0), (4.0, 5.0)], 1).unwrap();
    let (sorted, paths) = calculate_fourier_paths(&coeffs, 10).unwrap();
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted.max_circles(), 0);
    assert_eq!(paths.len(), 1);
    assert!(paths
        .get(0)
        .unwrap()
        .iter()
        .all(|p| p.fuzzy_eq(vec2(3.0, 4.0))));
}

#[test]
fn invalid_input() {
    let coeffs = calculate_coefficients(&star_path(10), 3).unwrap();
    assert_eq!(
        calculate_fourier_paths(&coeffs, 0),
        Err(FourierError::NoSamples)
    );

    let empty = FourierCoefficients::<f64>::from_amplitudes([]);
    assert_eq!(
        calculate_fourier_paths(&empty, 100),
        Err(FourierError::NoCoefficients)
    );
}

#[test]
fn fourierize_is_deterministic() {
    let drawing = heart_drawing();
    let options = FourierOptions {
        max_circles: 24,
        n_samples: 300,
        ..Default::default()
    };
    let a = fourierize(&drawing, &options).unwrap();
    let b = fourierize(&drawing, &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fourierize_pipeline() {
    let drawing = heart_drawing();
    let options = FourierOptions::new();
    let series = fourierize(&drawing, &options).unwrap();

    assert!(series.resampled.is_closed());
    assert_eq!(series.coefficients.len(), 101);
    assert_eq!(series.max_circles(), 100);
    assert_eq!(series.paths.len(), 101);
    assert_eq!(series.paths.sample_count(), DEFAULT_SAMPLE_COUNT);
    assert_eq!(series.path_for_circles(5), series.paths.get(5));
    assert_eq!(series.path_for_circles(1000), series.paths.last());

    let center = series.sorted.center();
    assert!(series
        .path_for_circles(0)
        .unwrap()
        .iter()
        .all(|p| p.fuzzy_eq(center)));
    assert!(center.fuzzy_eq_eps(series.resampled.centroid().unwrap(), 1e-9));
}

#[test]
fn fourierize_rejects_short_drawings() {
    let drawing = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    assert_eq!(
        fourierize(&drawing, &FourierOptions::new()),
        Err(FourierError::TooFewPoints { count: 4, min: 5 })
    );

    let options = FourierOptions {
        min_drawing_points: 0,
        ..Default::default()
    };
    assert_eq!(
        fourierize(&fourier_epicycles::path::Path::new(), &options),
        Err(FourierError::TooFewPoints { count: 0, min: 1 })
    );
    assert!(fourierize(&drawing, &options).is_ok());
}
