//! Drive the animator with a fixed time step and write every frame as an SVG document.
//!
//! Usage: `animate_frames [output_dir] [frame_count]`. Controls may be given as JSON in the
//! `EPICYCLE_CONTROLS` environment variable, e.g. `{"nCircles": 30, "referencePoint": "tip"}`.
use fourier_epicycles::{
    animation::{AnimationControls, Animator},
    core::math::vec2,
    fourier::{fourierize, FourierOptions},
    path::Path,
    render::SvgRenderer,
};
use std::{env, fs, path::PathBuf, process};

const FRAME_DT: f64 = 1.0 / 30.0;

fn star_drawing() -> Path {
    (0..300)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / 300.0;
            let r = 150.0 + 60.0 * (5.0 * a).cos();
            vec2(400.0 + r * a.cos(), 300.0 + r * a.sin())
        })
        .collect()
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with RUST_LOG=debug).

    let args: Vec<String> = env::args().skip(1).collect();
    let out_dir = PathBuf::from(args.first().map_or("frames", |s| s.as_str()));
    let frame_count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(90);

    let controls = match env::var("EPICYCLE_CONTROLS") {
        Ok(json) => serde_json::from_str::<AnimationControls>(&json).unwrap_or_else(|e| {
            log::error!("invalid EPICYCLE_CONTROLS: {}", e);
            process::exit(1);
        }),
        Err(_) => AnimationControls::default(),
    };

    let options = FourierOptions {
        max_circles: 50,
        ..Default::default()
    };
    let series = fourierize(&star_drawing(), &options).unwrap_or_else(|e| {
        log::error!("drawing rejected: {}", e);
        process::exit(1);
    });

    let mut animator = Animator::new(series, 800.0, 600.0);
    animator.set_controls(controls);
    log::info!("animating with {:?}", animator.controls());

    if let Err(e) = fs::create_dir_all(&out_dir) {
        log::error!("failed to create {}: {}", out_dir.display(), e);
        process::exit(1);
    }

    let mut renderer = SvgRenderer::new().precision(3);
    animator.render_background(&mut renderer);

    let mut written = 0;
    for i in 0..frame_count {
        if !animator.render(FRAME_DT, &mut renderer) {
            continue;
        }

        let file = out_dir.join(format!("frame_{:04}.svg", i));
        if let Err(e) = fs::write(&file, renderer.document()) {
            log::error!("failed to write {}: {}", file.display(), e);
            process::exit(1);
        }
        written += 1;
    }

    log::info!(
        "wrote {} frames to {}, final phase {:.3} rad",
        written,
        out_dir.display(),
        animator.phase()
    );
}
