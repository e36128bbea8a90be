//! Fourierize a drawing and write the curve for a circle count as a standalone SVG document.
//!
//! Usage: `export_svg [drawing.json] [n_circles] [output.svg]`, the drawing is a JSON array of
//! `{"x": .., "y": ..}` points. A built in heart drawing is used if no file is given.
use fourier_epicycles::{
    core::math::vec2,
    fourier::{fourierize, FourierOptions},
    path::Path,
    static_aabb2d_index::AABB,
};
use std::{env, fs, process};

fn heart_drawing() -> Path {
    (0..200)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / 200.0;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            vec2(300.0 + 10.0 * x, 250.0 - 10.0 * y)
        })
        .collect()
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with RUST_LOG=debug).

    let args: Vec<String> = env::args().skip(1).collect();
    let drawing = match args.first() {
        Some(file) => {
            let json = fs::read_to_string(file).unwrap_or_else(|e| {
                log::error!("failed to read {}: {}", file, e);
                process::exit(1);
            });
            serde_json::from_str::<Path>(&json).unwrap_or_else(|e| {
                log::error!("{} is not a JSON point array: {}", file, e);
                process::exit(1);
            })
        }
        None => heart_drawing(),
    };
    let n_circles: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);

    let series = match fourierize(&drawing, &FourierOptions::new()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("drawing rejected: {}", e);
            process::exit(1);
        }
    };
    log::info!(
        "drawing of {} points resampled to {}, exporting {} of {} circles",
        drawing.len(),
        series.resampled.len(),
        n_circles.min(series.max_circles()),
        series.max_circles()
    );

    // pad the drawing extents so the stroke is not clipped
    let extents = series.resampled.extents().unwrap_or(AABB::new(0.0, 0.0, 1.0, 1.0));
    let view_box = AABB::new(
        extents.min_x - 10.0,
        extents.min_y - 10.0,
        extents.max_x + 10.0,
        extents.max_y + 10.0,
    );

    let svg = series.export_svg(n_circles, &view_box).unwrap_or_default();
    match args.get(2) {
        Some(out) => {
            if let Err(e) = fs::write(out, &svg) {
                log::error!("failed to write {}: {}", out, e);
                process::exit(1);
            }
            log::info!("wrote {}", out);
        }
        None => println!("{}", svg),
    }
}
