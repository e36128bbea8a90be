//! This module contains the C foreign function interface for fourier_epicycles.
#![allow(non_camel_case_types)]
mod error_handling;

use core::slice;
use error_handling::{clear_last_error, last_error_function_ptr, last_error_msg_ptr, set_last_error};
use fourier_epicycles::{
    core::math::Vector2,
    fourier::{fourierize, FourierCoefficient, FourierOptions, FourierSeries},
    path::Path,
};
use std::{convert::TryFrom, os::raw::c_char, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct fes_point {
    pub x: f64,
    pub y: f64,
}

impl fes_point {
    pub fn new(x: f64, y: f64) -> Self {
        fes_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        fes_point::new(v.x, v.y)
    }
}

/// Represents a Fourier coefficient: integer frequency `k` and complex amplitude `re + i * im`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct fes_coefficient {
    pub k: i64,
    pub re: f64,
    pub im: f64,
}

impl fes_coefficient {
    pub fn new(k: i64, re: f64, im: f64) -> Self {
        fes_coefficient { k, re, im }
    }

    pub fn from_internal(c: &FourierCoefficient<f64>) -> Self {
        fes_coefficient::new(c.k, c.c.re, c.c.im)
    }
}

/// FFI representation of [FourierOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct fes_fourier_o {
    pub target_spacing: f64,
    pub max_circles: u32,
    pub n_samples: u32,
    pub min_drawing_points: u32,
}

impl fes_fourier_o {
    /// Convert FFI options type to internal type.
    pub fn to_internal(&self) -> FourierOptions<f64> {
        FourierOptions {
            target_spacing: self.target_spacing,
            max_circles: self.max_circles as usize,
            n_samples: self.n_samples as usize,
            min_drawing_points: self.min_drawing_points as usize,
        }
    }
}

impl Default for fes_fourier_o {
    fn default() -> Self {
        let d = FourierOptions::<f64>::default();
        Self {
            target_spacing: d.target_spacing,
            max_circles: d.max_circles as u32,
            n_samples: d.n_samples as u32,
            min_drawing_points: d.min_drawing_points as u32,
        }
    }
}

/// Write default option values to a [fes_fourier_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_fourier_o_init(options: *mut fes_fourier_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

/// Opaque type that wraps a [FourierSeries].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct fes_series(pub FourierSeries<f64>);

/// Run the full pipeline on a raw drawing and create a new series object.
///
/// `points` is an array of [fes_point] holding the drawing (not closed, the pipeline closes it).
/// `n_points` contains the number of points in the array.
/// `options` is the options to use, defaults are used if null.
/// `series` is an out parameter to hold the created series.
///
/// ## Specific Error Codes
/// * 1 = `points` is null and `n_points` is not 0.
/// * 2 = input was rejected (too few points, invalid spacing, a segment too long to resample or
///   zero samples), call [fes_last_error_msg] for the reason.
///
/// # Safety
///
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [fes_point] with length of at least `n_points`.
/// `options` must be null or point to a valid [fes_fourier_o].
/// `series` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_fourierize(
    points: *const fes_point,
    n_points: u32,
    options: *const fes_fourier_o,
    series: *mut *const fes_series,
) -> i32 {
    ffi_catch_unwind!({
        if points.is_null() && n_points != 0 {
            return 1;
        }

        let mut drawing = Path::with_capacity(n_points as usize);
        if n_points != 0 {
            for p in slice::from_raw_parts(points, n_points as usize) {
                drawing.add(p.x, p.y);
            }
        }

        let options = options
            .as_ref()
            .map_or_else(FourierOptions::default, fes_fourier_o::to_internal);

        match fourierize(&drawing, &options) {
            Ok(result) => {
                clear_last_error();
                series.write(Box::into_raw(Box::new(fes_series(result))));
                0
            }
            Err(e) => {
                set_last_error(e.to_string(), "fes_fourierize".to_string());
                2
            }
        }
    })
}

/// Free an existing [fes_series] object.
///
/// Nothing happens if `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn fes_series_f(series: *mut fes_series) {
    if !series.is_null() {
        drop(Box::from_raw(series))
    }
}

/// Get the number of coefficients in the series (circle count + 1 for the centroid term).
///
/// `count` used as out parameter to hold the coefficient count.
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_coeff_count(
    series: *const fes_series,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        count.write(u32::try_from((*series).0.sorted.len()).unwrap());
        0
    })
}

/// Get a coefficient in drawing order (index 0 is the centroid term, the rest by descending
/// magnitude).
///
/// `coeff` used as out parameter to hold the coefficient.
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
/// * 2 = `index` is out of range.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `coeff` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_coeff(
    series: *const fes_series,
    index: u32,
    coeff: *mut fes_coefficient,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        match (*series).0.sorted.get(index as usize) {
            Some(c) => {
                coeff.write(fes_coefficient::from_internal(c));
                0
            }
            None => 2,
        }
    })
}

/// Get the number of precomputed paths (one per circle count, starting at 0 circles).
///
/// `count` used as out parameter to hold the path count.
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_path_count(
    series: *const fes_series,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        count.write(u32::try_from((*series).0.paths.len()).unwrap());
        0
    })
}

/// Get the number of samples in every precomputed path.
///
/// `count` used as out parameter to hold the sample count.
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_sample_count(
    series: *const fes_series,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        count.write(u32::try_from((*series).0.paths.sample_count()).unwrap());
        0
    })
}

/// Fills the buffer given with the points of the precomputed path for `n_circles` circles.
///
/// You must use [fes_series_get_sample_count] to ensure the buffer given has adequate length
/// to be filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
/// * 2 = `n_circles` is out of range (greater than or equal to the path count).
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the samples or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_path_data(
    series: *const fes_series,
    n_circles: u32,
    point_data: *mut fes_point,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        let path = match (*series).0.paths.get(n_circles as usize) {
            Some(p) => p,
            None => return 2,
        };

        let buffer = slice::from_raw_parts_mut(point_data, path.len());
        for (i, p) in path.iter().enumerate() {
            buffer[i] = fes_point::from_internal(*p);
        }
        0
    })
}

/// Get the number of points in the resampled drawing.
///
/// `count` used as out parameter to hold the point count.
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_resampled_count(
    series: *const fes_series,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        count.write(u32::try_from((*series).0.resampled.len()).unwrap());
        0
    })
}

/// Fills the buffer given with the points of the resampled drawing.
///
/// You must use [fes_series_get_resampled_count] to ensure the buffer given has adequate length
/// to be filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the points or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_get_resampled_data(
    series: *const fes_series,
    point_data: *mut fes_point,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        let resampled = &(*series).0.resampled;
        let buffer = slice::from_raw_parts_mut(point_data, resampled.len());
        for (i, p) in resampled.iter().enumerate() {
            buffer[i] = fes_point::from_internal(*p);
        }
        0
    })
}

/// Evaluate the chain of rotating vectors at `phase` (radians).
///
/// `n_circles` is clamped to the coefficient count - 1. `positions` is filled with the centroid
/// followed by the end point of every rotating vector, the last position is the tip. `count` is
/// an out parameter holding the number of positions written (clamped `n_circles` + 1).
///
/// ## Specific Error Codes
/// * 1 = `series` is null.
///
/// # Safety
///
/// `series` must be null or a valid fes_series object that was created with [fes_fourierize] and
/// has not been freed.
/// `positions` must point to a buffer that can hold at least `min(n_circles + 1, coefficient
/// count)` points or a buffer overrun will happen.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn fes_series_eval_epicycles(
    series: *const fes_series,
    n_circles: u32,
    phase: f64,
    positions: *mut fes_point,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if series.is_null() {
            return 1;
        }

        let chain = (*series).0.sorted.epicycles(n_circles as usize, phase);
        let buffer = slice::from_raw_parts_mut(positions, chain.positions().len());
        for (i, p) in chain.positions().iter().enumerate() {
            buffer[i] = fes_point::from_internal(*p);
        }
        count.write(u32::try_from(chain.positions().len()).unwrap());
        0
    })
}

/// Get the last error message set on this thread, null if the last call that can set an error
/// succeeded.
///
/// The string is owned by the library and valid until the next call that sets or clears the
/// error on the same thread.
#[no_mangle]
pub extern "C" fn fes_last_error_msg() -> *const c_char {
    last_error_msg_ptr()
}

/// Get the name of the function that set the last error on this thread, null if no error is set.
#[no_mangle]
pub extern "C" fn fes_last_error_function() -> *const c_char {
    last_error_function_ptr()
}
