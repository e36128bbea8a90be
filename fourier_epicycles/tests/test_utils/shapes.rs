use fourier_epicycles::{
    core::math::{point_on_circle, vec2, Vector2},
    path::Path,
};
use std::f64::consts::TAU;

/// `n` points on a circle, counter clockwise if `ccw` (not closed, first point at angle 0).
pub fn circle_path(n: usize, radius: f64, center: Vector2, ccw: bool) -> Path {
    let sign = if ccw { 1.0 } else { -1.0 };
    (0..n)
        .map(|i| point_on_circle(radius, center, sign * TAU * i as f64 / n as f64))
        .collect()
}

/// Closed regular polygon with `sides` sides, every side split into `points_per_side` steps.
pub fn regular_polygon(sides: usize, radius: f64, center: Vector2, points_per_side: usize) -> Path {
    let corners: Vec<Vector2> = (0..=sides)
        .map(|i| point_on_circle(radius, center, TAU * i as f64 / sides as f64))
        .collect();

    let mut result = Path::new();
    for w in corners.windows(2) {
        for j in 0..points_per_side {
            let t = j as f64 / points_per_side as f64;
            result.add_point(w[0].lerp(w[1], t));
        }
    }
    result.add_point(corners[0]);
    result
}

/// Star like curve with `n` samples (radius modulated by 5 lobes), not closed.
pub fn star_path(n: usize) -> Path {
    (0..n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            let r = 100.0 + 30.0 * (5.0 * a).cos();
            point_on_circle(r, vec2(200.0, 150.0), a)
        })
        .collect()
}

/// Freehand like heart drawing with uneven point spacing (as if drawn with varying mouse speed),
/// not closed.
pub fn heart_drawing() -> Path {
    let n = 240;
    (0..n)
        .map(|i| {
            // uneven parametrization: faster in the middle of the stroke
            let u = i as f64 / n as f64;
            let t = TAU * (u + 0.08 * (TAU * u).sin());
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            vec2(300.0 + 10.0 * x, 250.0 - 10.0 * y)
        })
        .collect()
}

/// Open zig-zag stroke with a mix of very short and very long segments.
pub fn uneven_stroke() -> Path {
    let steps = [0.3, 1.0, 7.5, 12.0, 2.2, 0.1, 31.7, 5.0, 9.99, 10.0, 4.9, 55.5, 0.0, 18.25];
    let mut result = Path::new();
    let mut p = vec2(0.0, 0.0);
    result.add_point(p);
    for (i, step) in steps.iter().enumerate() {
        let dir = if i % 2 == 0 { vec2(1.0, 0.3) } else { vec2(0.2, -1.0) };
        p = p + dir.scale(step / dir.length());
        result.add_point(p);
    }
    result
}
