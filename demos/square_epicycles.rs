use fourier_epicycles::{
    core::math::vec2,
    fourier::{calculate_coefficients, calculate_fourier_paths, sample_angle_step},
    path,
    path::prepare_path,
};

fn main() {
    env_logger::init(); // Log to stderr (if you run with RUST_LOG=debug).

    let square = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
    let resampled = prepare_path(&square, 5.0).unwrap();
    assert_eq!(
        resampled.len(),
        9,
        "Every 10 unit edge should be split in two steps of 5"
    );
    log::info!("resampled square: {:?}", resampled.points);

    let coeffs = calculate_coefficients(&resampled, 5).unwrap();
    let centroid = coeffs.centroid().unwrap().to_vector2();
    assert!(
        centroid.fuzzy_eq(resampled.centroid().unwrap()),
        "k = 0 term should be the centroid of the resampled points"
    );
    assert!(centroid.fuzzy_eq_eps(vec2(5.0, 5.0), 1.0));
    for fc in coeffs.iter() {
        log::info!("k = {:>2}: {:?} (|c| = {:.4})", fc.k, fc.c, fc.magnitude());
    }

    let n_samples = 64;
    let (sorted, paths) = calculate_fourier_paths(&coeffs, n_samples).unwrap();
    assert_eq!(sorted.get(0).unwrap().k, 0, "Centroid term should come first");

    for n in 0..paths.len() {
        let path = paths.get(n).unwrap();
        let extents = path.extents().unwrap();
        log::info!(
            "{} circles: extents ({:.2}, {:.2}) to ({:.2}, {:.2})",
            n,
            extents.min_x,
            extents.min_y,
            extents.max_x,
            extents.max_y
        );
    }

    // the live chain agrees with the precomputed path at every sample angle
    let full = paths.last().unwrap();
    let d_theta = sample_angle_step::<f64>(n_samples);
    for i in 0..n_samples {
        let tip = sorted.epicycles(sorted.max_circles(), i as f64 * d_theta).tip();
        assert!(tip.fuzzy_eq_eps(full[i], 1e-9));
    }
}
