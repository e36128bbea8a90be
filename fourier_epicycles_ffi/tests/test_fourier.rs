#[macro_use]
mod macros;

use fourier_epicycles_ffi::*;
use std::{ffi::CStr, ptr};

const SQUARE: [(f64, f64); 5] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 5.0)];

fn default_options() -> fes_fourier_o {
    let mut options = fes_fourier_o {
        target_spacing: 0.0,
        max_circles: 0,
        n_samples: 0,
        min_drawing_points: 0,
    };
    assert_eq!(unsafe { fes_fourier_o_init(&mut options) }, 0);
    options
}

fn create_series(points: &[(f64, f64)], options: Option<&fes_fourier_o>) -> *mut fes_series {
    let buffer: Vec<fes_point> = points.iter().map(|&(x, y)| fes_point::new(x, y)).collect();
    let options_ptr = options.map_or(ptr::null(), |o| o as *const _);
    let mut result = ptr::null();
    let err = unsafe {
        fes_fourierize(
            buffer.as_ptr(),
            buffer.len() as u32,
            options_ptr,
            &mut result,
        )
    };
    assert_eq!(err, 0);
    assert!(!result.is_null());

    result as *mut _
}

#[test]
fn options_init() {
    let options = default_options();
    assert_eq!(options.target_spacing, 5.0);
    assert_eq!(options.max_circles, 100);
    assert_eq!(options.n_samples, 2000);
    assert_eq!(options.min_drawing_points, 5);
    assert_eq!(unsafe { fes_fourier_o_init(ptr::null_mut()) }, 1);
}

#[test]
fn series_data() {
    let mut options = default_options();
    options.max_circles = 4;
    options.n_samples = 16;
    let series = create_series(&SQUARE, Some(&options));
    let null_ptr = ptr::null();

    unsafe {
        let mut count: u32 = 0;
        assert_eq!(fes_series_get_coeff_count(series, &mut count), 0);
        assert_eq!(count, 5);
        assert_eq!(fes_series_get_coeff_count(null_ptr, &mut count), 1);

        let mut coeff = fes_coefficient::new(99, 0.0, 0.0);
        assert_eq!(fes_series_get_coeff(series, 0, &mut coeff), 0);
        assert_eq!(coeff.k, 0);
        // closing point (0, 0) is counted twice
        assert_fuzzy_eq!(coeff.re, 40.0 / 9.0);
        assert_fuzzy_eq!(coeff.im, 40.0 / 9.0);
        let center = coeff;

        let mut prev_magnitude = f64::INFINITY;
        for i in 1..count {
            assert_eq!(fes_series_get_coeff(series, i, &mut coeff), 0);
            let magnitude = (coeff.re * coeff.re + coeff.im * coeff.im).sqrt();
            assert!(magnitude <= prev_magnitude);
            prev_magnitude = magnitude;
        }
        assert_eq!(fes_series_get_coeff(series, count, &mut coeff), 2);
        assert_eq!(fes_series_get_coeff(null_ptr, 0, &mut coeff), 1);

        assert_eq!(fes_series_get_path_count(series, &mut count), 0);
        assert_eq!(count, 5);
        assert_eq!(fes_series_get_path_count(null_ptr, &mut count), 1);

        let mut sample_count: u32 = 0;
        assert_eq!(fes_series_get_sample_count(series, &mut sample_count), 0);
        assert_eq!(sample_count, 16);
        assert_eq!(fes_series_get_sample_count(null_ptr, &mut sample_count), 1);

        let mut path_data = vec![fes_point::new(-1.0, -1.0); sample_count as usize];
        assert_eq!(fes_series_get_path_data(series, 0, path_data.as_mut_ptr()), 0);
        for p in &path_data {
            assert_fuzzy_eq!(p.x, center.re);
            assert_fuzzy_eq!(p.y, center.im);
        }
        assert_eq!(fes_series_get_path_data(series, 4, path_data.as_mut_ptr()), 0);
        assert_eq!(fes_series_get_path_data(series, 5, path_data.as_mut_ptr()), 2);
        assert_eq!(fes_series_get_path_data(null_ptr, 0, path_data.as_mut_ptr()), 1);

        assert_eq!(fes_series_get_resampled_count(series, &mut count), 0);
        assert_eq!(count, 9);
        assert_eq!(fes_series_get_resampled_count(null_ptr, &mut count), 1);
        let mut resampled = vec![fes_point::new(-1.0, -1.0); count as usize];
        assert_eq!(fes_series_get_resampled_data(series, resampled.as_mut_ptr()), 0);
        assert_fuzzy_eq!(resampled[1].x, 5.0);
        assert_fuzzy_eq!(resampled[1].y, 0.0);
        assert_fuzzy_eq!(resampled[8].x, 0.0);
        assert_fuzzy_eq!(resampled[8].y, 0.0);
        assert_eq!(fes_series_get_resampled_data(null_ptr, resampled.as_mut_ptr()), 1);

        fes_series_f(series);
    }
}

#[test]
fn eval_epicycles() {
    let mut options = default_options();
    options.max_circles = 6;
    options.n_samples = 12;
    let series = create_series(&SQUARE, Some(&options));

    unsafe {
        let mut sample_count: u32 = 0;
        assert_eq!(fes_series_get_sample_count(series, &mut sample_count), 0);
        let mut full = vec![fes_point::new(0.0, 0.0); sample_count as usize];
        assert_eq!(fes_series_get_path_data(series, 6, full.as_mut_ptr()), 0);

        // tip at sample 3 matches the precomputed path
        let phase = 3.0 * std::f64::consts::TAU / sample_count as f64;
        let mut positions = vec![fes_point::new(0.0, 0.0); 7];
        let mut count: u32 = 0;
        assert_eq!(
            fes_series_eval_epicycles(series, 6, phase, positions.as_mut_ptr(), &mut count),
            0
        );
        assert_eq!(count, 7);
        assert_fuzzy_eq!(positions[6].x, full[3].x, 1e-9);
        assert_fuzzy_eq!(positions[6].y, full[3].y, 1e-9);

        // circle count is clamped
        assert_eq!(
            fes_series_eval_epicycles(series, 50, phase, positions.as_mut_ptr(), &mut count),
            0
        );
        assert_eq!(count, 7);

        assert_eq!(
            fes_series_eval_epicycles(series, 0, phase, positions.as_mut_ptr(), &mut count),
            0
        );
        assert_eq!(count, 1);

        assert_eq!(
            fes_series_eval_epicycles(ptr::null(), 2, phase, positions.as_mut_ptr(), &mut count),
            1
        );

        fes_series_f(series);
    }
}

#[test]
fn default_options_when_null() {
    let drawing: Vec<(f64, f64)> = (0..40)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 40.0;
            (100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect();
    let series = create_series(&drawing, None);
    unsafe {
        let mut count: u32 = 0;
        assert_eq!(fes_series_get_coeff_count(series, &mut count), 0);
        assert_eq!(count, 101);
        assert_eq!(fes_series_get_sample_count(series, &mut count), 0);
        assert_eq!(count, 2000);
        fes_series_f(series);
    }
}

#[test]
fn rejected_input_sets_last_error() {
    let points = [fes_point::new(0.0, 0.0), fes_point::new(1.0, 1.0)];
    let mut result = ptr::null();
    unsafe {
        assert_eq!(
            fes_fourierize(points.as_ptr(), points.len() as u32, ptr::null(), &mut result),
            2
        );
        assert!(result.is_null());

        let msg = fes_last_error_msg();
        assert!(!msg.is_null());
        let msg = CStr::from_ptr(msg).to_str().unwrap();
        assert!(msg.contains("2"), "{}", msg);
        let function = CStr::from_ptr(fes_last_error_function()).to_str().unwrap();
        assert_eq!(function, "fes_fourierize");

        let mut options = default_options();
        options.target_spacing = -1.0;
        let square: Vec<fes_point> = SQUARE.iter().map(|&(x, y)| fes_point::new(x, y)).collect();
        assert_eq!(
            fes_fourierize(square.as_ptr(), square.len() as u32, &options, &mut result),
            2
        );
        assert!(!fes_last_error_msg().is_null());

        // success clears the error
        let series = create_series(&SQUARE, None);
        assert!(fes_last_error_msg().is_null());
        fes_series_f(series);

        assert_eq!(fes_fourierize(ptr::null(), 5, ptr::null(), &mut result), 1);
    }
}

#[test]
fn free_null_is_noop() {
    unsafe {
        fes_series_f(ptr::null_mut());
    }
}
