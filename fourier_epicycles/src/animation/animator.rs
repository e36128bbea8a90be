use super::{AnimationControls, AnimationOptions, ReferencePoint, Viewport};
use crate::{
    core::traits::Real,
    fourier::{EpicycleChain, FourierSeries},
    render::{gradient_color_hex, DrawStyle, EpicycleRenderer},
};
use static_aabb2d_index::AABB;

const CIRCLE_COLOR: &str = "grey";
const CURVE_COLOR: &str = "black";
const CURVE_FILL_COLOR: &str = "orange";
const DRAWING_COLOR: &str = "rgba(0,0,255,0.3)";
const CURVE_WIDTH: f64 = 2.0;
const DRAWING_WIDTH: f64 = 3.0;
const POINT_RADIUS: f64 = 4.0;
const TIP_RADIUS: f64 = 5.0;

/// Result of evaluating one animation frame.
#[derive(Debug, Clone)]
pub struct EpicycleFrame<T = f64> {
    /// Phase the chain was evaluated at.
    pub phase: T,
    /// Evaluated chain, `None` if neither circles nor points are visible.
    pub chain: Option<EpicycleChain<T>>,
    /// View box after following the reference point.
    pub view_box: AABB<T>,
}

/// Owns the per frame state of the visualization of one [FourierSeries]: the phase accumulator,
/// the controls, the controls of the last rendered frame and the viewport.
///
/// Driven by an external clock, [Animator::frame] is called once per display refresh with the
/// elapsed seconds since the previous call.
#[derive(Debug, Clone)]
pub struct Animator<T = f64> {
    series: FourierSeries<T>,
    options: AnimationOptions<T>,
    controls: AnimationControls<T>,
    last_controls: Option<AnimationControls<T>>,
    phase: T,
    viewport: Viewport<T>,
}

impl<T> Animator<T>
where
    T: Real,
{
    /// Create an animator for `series` on a screen of `width` by `height` pixels with default
    /// options and controls.
    pub fn new(series: FourierSeries<T>, width: T, height: T) -> Self {
        Self::with_options(
            series,
            AnimationOptions::default(),
            AnimationControls::default(),
            width,
            height,
        )
    }

    pub fn with_options(
        series: FourierSeries<T>,
        options: AnimationOptions<T>,
        controls: AnimationControls<T>,
        width: T,
        height: T,
    ) -> Self {
        let controls = controls.clamped(&options, series.max_circles());
        Self {
            series,
            options,
            controls,
            last_controls: None,
            phase: T::zero(),
            viewport: Viewport::new(width, height),
        }
    }

    #[inline]
    pub fn series(&self) -> &FourierSeries<T> {
        &self.series
    }

    #[inline]
    pub fn controls(&self) -> &AnimationControls<T> {
        &self.controls
    }

    #[inline]
    pub fn options(&self) -> &AnimationOptions<T> {
        &self.options
    }

    /// Accumulated phase in radians.
    #[inline]
    pub fn phase(&self) -> T {
        self.phase
    }

    /// Replace the controls (speed, zoom and circle count are clamped).
    pub fn set_controls(&mut self, controls: AnimationControls<T>) {
        self.controls = controls.clamped(&self.options, self.series.max_circles());
    }

    /// Pan the view by a screen space drag, switching the reference point to
    /// [ReferencePoint::Mouse].
    pub fn pan(&mut self, dx: T, dy: T) {
        if self.controls.reference_point != ReferencePoint::Mouse {
            // continue from whatever the view is currently centered on
            self.viewport.center = self.view_center();
            self.controls.reference_point = ReferencePoint::Mouse;
        }
        self.viewport.pan(dx, dy, self.controls.zoom);
    }

    /// Resize the screen.
    pub fn resize(&mut self, width: T, height: T) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    fn view_center(&self) -> crate::core::math::Vector2<T> {
        match self.controls.reference_point {
            ReferencePoint::Default => {
                Viewport::screen_center(self.viewport.width, self.viewport.height)
            }
            ReferencePoint::Center => self.series.sorted.center(),
            ReferencePoint::Tip | ReferencePoint::Mouse => self.viewport.center,
        }
    }

    /// Current view box.
    pub fn view_box(&self) -> AABB<T> {
        Viewport {
            center: self.view_center(),
            ..self.viewport
        }
        .view_box(self.controls.zoom)
    }

    /// Evaluate one frame `dt` seconds after the previous one.
    ///
    /// While paused the phase does not advance and a frame is only produced if a control affecting
    /// the frame changed since the last produced frame, otherwise `None` is returned.
    pub fn frame(&mut self, dt: T) -> Option<EpicycleFrame<T>> {
        let changed = self
            .last_controls
            .as_ref()
            .map_or(true, |last| self.controls.frame_changed(last));

        if self.controls.paused && !changed {
            log::trace!("animation paused, frame skipped");
            return None;
        }
        self.last_controls = Some(self.controls);

        if !self.controls.paused {
            self.phase = self.phase + self.options.phase_delta(self.controls.speed, dt);
        }

        let chain = if self.controls.circles_visible || self.controls.points_visible {
            let chain = self
                .series
                .sorted
                .epicycles(self.controls.n_circles, self.phase);
            if self.controls.reference_point == ReferencePoint::Tip {
                self.viewport.center = chain.tip();
            }
            Some(chain)
        } else {
            None
        };

        Some(EpicycleFrame {
            phase: self.phase,
            chain,
            view_box: self.view_box(),
        })
    }

    /// Draw the static layer: the raw drawing and the precomputed curve for the current circle
    /// count.
    pub fn render_background<R>(&self, renderer: &mut R)
    where
        R: EpicycleRenderer<T>,
    {
        let zoom = self.controls.zoom;
        if self.controls.drawing_visible {
            let style = DrawStyle::stroke(DRAWING_COLOR, T::from(DRAWING_WIDTH).unwrap() / zoom);
            renderer.draw_path(&self.series.drawing, &style);
        }

        if self.controls.show_curve || self.controls.fill_curve {
            if let Some(path) = self.series.path_for_circles(self.controls.n_circles) {
                let mut style = if self.controls.show_curve {
                    DrawStyle::stroke(CURVE_COLOR, T::from(CURVE_WIDTH).unwrap() / zoom)
                } else {
                    DrawStyle::fill(CURVE_FILL_COLOR)
                };
                if self.controls.fill_curve {
                    style = style.with_fill(CURVE_FILL_COLOR);
                }
                renderer.draw_path(path, &style);
            }
        }
    }

    /// Evaluate a frame (see [Animator::frame]) and draw it. Returns false if no frame was drawn.
    pub fn render<R>(&mut self, dt: T, renderer: &mut R) -> bool
    where
        R: EpicycleRenderer<T>,
    {
        let frame = match self.frame(dt) {
            Some(f) => f,
            None => return false,
        };

        renderer.begin_frame();
        renderer.set_view_box(&frame.view_box);

        let chain = match &frame.chain {
            Some(c) => c,
            None => return true,
        };

        let zoom = self.controls.zoom;
        let circle_style = DrawStyle::stroke(CIRCLE_COLOR, T::one() / zoom);
        let count = chain.circle_count();
        for (i, epicycle) in chain.circles().enumerate() {
            if self.controls.circles_visible {
                renderer.draw_circle(epicycle.center, epicycle.radius, &circle_style);
            }

            if self.controls.points_visible {
                let radius = if i + 1 == count {
                    TIP_RADIUS
                } else {
                    POINT_RADIUS
                };
                renderer.draw_point(
                    epicycle.end,
                    T::from(radius).unwrap() / zoom,
                    &gradient_color_hex(i),
                );
            }
        }

        true
    }
}
