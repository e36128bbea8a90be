mod test_utils;

use fourier_epicycles::{
    core::{math::vec2, traits::*},
    fourier::*,
};
use test_utils::*;

fn heart_series() -> FourierSeries {
    let options = FourierOptions {
        max_circles: 40,
        n_samples: 400,
        ..Default::default()
    };
    fourierize(&heart_drawing(), &options).unwrap()
}

#[test]
fn tip_follows_synthesized_path() {
    let series = heart_series();
    let n_samples = series.paths.sample_count();
    let full = series.paths.last().unwrap();
    let d_theta = sample_angle_step::<f64>(n_samples);

    for i in (0..n_samples).step_by(7) {
        let chain = series
            .sorted
            .epicycles(series.max_circles(), i as f64 * d_theta);
        assert!(
            chain.tip().fuzzy_eq_eps(full[i], 1e-6),
            "sample {}: {:?} != {:?}",
            i,
            chain.tip(),
            full[i]
        );
    }
}

#[test]
fn partial_chain_follows_partial_path() {
    let series = heart_series();
    let n_samples = series.paths.sample_count();
    let d_theta = sample_angle_step::<f64>(n_samples);

    for n in [1, 3, 10] {
        let path = series.path_for_circles(n).unwrap();
        for i in [0, 50, 333] {
            let chain = series.sorted.epicycles(n, i as f64 * d_theta);
            assert!(chain.tip().fuzzy_eq_eps(path[i], 1e-6));
        }
    }
}

#[test]
fn chain_structure() {
    let series = heart_series();
    let chain = series.sorted.epicycles(5, 1.234);

    assert_eq!(chain.circle_count(), 5);
    assert_eq!(chain.positions().len(), 6);
    assert!(chain.positions()[0].fuzzy_eq(series.sorted.center()));
    assert!(chain.tip().fuzzy_eq(chain.positions()[5]));

    let circles: Vec<_> = chain.circles().collect();
    assert_eq!(circles.len(), 5);
    for (i, c) in circles.iter().enumerate() {
        let fc = series.sorted.get(i + 1).unwrap();
        assert_eq!(c.k, fc.k);
        assert!(c.radius.fuzzy_eq(fc.magnitude()));
        assert!(c.center.fuzzy_eq(chain.positions()[i]));
        assert!(c.end.fuzzy_eq(chain.positions()[i + 1]));
        // every vector ends on its own circle
        assert!(fourier_epicycles::core::math::dist(c.center, c.end).fuzzy_eq_eps(c.radius, 1e-9));
    }

    // circles are chained end to center
    for w in circles.windows(2) {
        assert!(w[0].end.fuzzy_eq(w[1].center));
    }
}

#[test]
fn zero_circles_is_centroid() {
    let series = heart_series();
    for phase in [0.0, 1.0, 4.0] {
        let chain = series.sorted.epicycles(0, phase);
        assert_eq!(chain.circle_count(), 0);
        assert_eq!(chain.positions().len(), 1);
        assert!(chain.tip().fuzzy_eq(series.sorted.center()));
        assert_eq!(chain.circles().count(), 0);
    }
}

#[test]
fn circle_count_clamped() {
    let series = heart_series();
    let chain = series.sorted.epicycles(1000, 0.5);
    assert_eq!(chain.circle_count(), 40);
    assert_eq!(chain, series.sorted.epicycles(40, 0.5));
}

#[test]
fn chain_is_periodic() {
    let series = heart_series();
    let a = series.sorted.epicycles(12, 0.7);
    let b = series.sorted.epicycles(12, 0.7 + std::f64::consts::TAU);
    for (p, q) in a.positions().iter().zip(b.positions()) {
        assert!(p.fuzzy_eq_eps(*q, 1e-9));
    }
}

#[test]
fn single_term_rotates() {
    let coeffs = FourierCoefficients::from_amplitudes([
        fourier_epicycles::core::math::Complex::new(1.0, 1.0),
        fourier_epicycles::core::math::Complex::new(0.0, 0.0),
        fourier_epicycles::core::math::Complex::new(3.0, 0.0),
    ]);
    let sorted = SortedCoefficients::from_coefficients(&coeffs);
    // k = -1 rotates clockwise
    let chain = sorted.epicycles(1, std::f64::consts::FRAC_PI_2);
    assert!(chain.tip().fuzzy_eq(vec2(1.0, -2.0)));
}
