use super::{DrawStyle, EpicycleRenderer};
use crate::{
    core::{math::Vector2, traits::Real},
    path::Path,
};
use static_aabb2d_index::AABB;
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_HEADER: &str = r#"<?xml version="1.0" standalone="no"?>"#;

/// SVG path data for `path`: move to the first point, line to every following point and an
/// explicit line back to the first point. Empty string for an empty path.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::render::svg_path_data;
/// let square = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// assert_eq!(svg_path_data(&square), "M0,0 L10,0 L10,10 L0,10 L0,0");
/// ```
pub fn svg_path_data<T>(path: &Path<T>) -> String
where
    T: Real,
{
    let first = match path.first() {
        Some(p) => p,
        None => return String::new(),
    };

    let mut data = String::with_capacity(path.len() * 16);
    let _ = write!(data, "M{},{}", first.x, first.y);
    for p in path.iter().skip(1) {
        let _ = write!(data, " L{},{}", p.x, p.y);
    }
    let _ = write!(data, " L{},{}", first.x, first.y);
    data
}

/// SVG `viewBox` attribute value (`min_x min_y width height`) for `view_box`.
pub fn svg_view_box<T>(view_box: &AABB<T>) -> String
where
    T: Real,
{
    format!(
        "{} {} {} {}",
        view_box.min_x,
        view_box.min_y,
        view_box.max_x - view_box.min_x,
        view_box.max_y - view_box.min_y
    )
}

fn style_attributes<T>(style: &DrawStyle<T>) -> String
where
    T: Real,
{
    format!(
        r#"stroke="{}" stroke-width="{}px" fill="{}""#,
        style.stroke.as_deref().unwrap_or("none"),
        style.stroke_width,
        style.fill.as_deref().unwrap_or("none")
    )
}

fn path_element<T>(path: &Path<T>, style: &DrawStyle<T>) -> String
where
    T: Real,
{
    format!(
        r#"<path d="{}" fill-rule="evenodd" {}/>"#,
        svg_path_data(path),
        style_attributes(style)
    )
}

/// Standalone SVG document holding a single black stroked `path` scoped by `view_box`.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::render::export_svg;
/// # use fourier_epicycles::static_aabb2d_index::AABB;
/// let tri = path![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
/// let svg = export_svg(&tri, &AABB::new(-1.0, -1.0, 5.0, 4.0));
/// assert!(svg.starts_with(r#"<?xml version="1.0" standalone="no"?><svg"#));
/// assert!(svg.contains(r#"viewBox="-1 -1 6 5""#));
/// assert!(svg.contains(r#"d="M0,0 L4,0 L0,3 L0,0""#));
/// assert!(svg.ends_with("</svg>"));
/// ```
pub fn export_svg<T>(path: &Path<T>, view_box: &AABB<T>) -> String
where
    T: Real,
{
    let style = DrawStyle::stroke("black", T::two());
    format!(
        r#"{}<svg xmlns="{}" viewBox="{}">{}</svg>"#,
        XML_HEADER,
        SVG_NS,
        svg_view_box(view_box),
        path_element(path, &style)
    )
}

/// [EpicycleRenderer] that records frames as SVG markup.
///
/// Static paths (drawing, precomputed curve) drawn before the first frame persist across frames,
/// circles drawn after [EpicycleRenderer::begin_frame] are replaced every frame.
#[derive(Debug, Clone)]
pub struct SvgRenderer<T = f64> {
    view_box: Option<AABB<T>>,
    background: Vec<String>,
    frame: Vec<String>,
    in_frame: bool,
    precision: Option<usize>,
}

impl<T> Default for SvgRenderer<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SvgRenderer<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            view_box: None,
            background: Vec::new(),
            frame: Vec::new(),
            in_frame: false,
            precision: None,
        }
    }

    /// Round circle coordinates to `digits` decimal places (smaller documents).
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Set the initial view box.
    pub fn view_box(mut self, view_box: AABB<T>) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Number of elements in the current frame.
    pub fn frame_element_count(&self) -> usize {
        self.frame.len()
    }

    /// Number of persistent elements.
    pub fn background_element_count(&self) -> usize {
        self.background.len()
    }

    fn fmt_num(&self, v: T) -> String {
        match self.precision {
            Some(digits) => format!("{:.*}", digits, v),
            None => format!("{}", v),
        }
    }

    /// Full SVG document with the persistent elements followed by the current frame.
    pub fn document(&self) -> String {
        let mut doc = String::new();
        doc.push_str(XML_HEADER);
        match &self.view_box {
            Some(vb) => {
                let _ = write!(
                    doc,
                    r#"<svg xmlns="{}" viewBox="{}">"#,
                    SVG_NS,
                    svg_view_box(vb)
                );
            }
            None => {
                let _ = write!(doc, r#"<svg xmlns="{}">"#, SVG_NS);
            }
        }

        for e in self.background.iter().chain(self.frame.iter()) {
            doc.push_str(e);
        }
        doc.push_str("</svg>");
        doc
    }

    fn push(&mut self, element: String) {
        if self.in_frame {
            self.frame.push(element);
        } else {
            self.background.push(element);
        }
    }
}

impl<T> EpicycleRenderer<T> for SvgRenderer<T>
where
    T: Real,
{
    fn begin_frame(&mut self) {
        self.frame.clear();
        self.in_frame = true;
    }

    fn set_view_box(&mut self, view_box: &AABB<T>) {
        self.view_box = Some(*view_box);
    }

    fn draw_circle(&mut self, center: Vector2<T>, radius: T, style: &DrawStyle<T>) {
        let element = format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            self.fmt_num(center.x),
            self.fmt_num(center.y),
            self.fmt_num(radius),
            style_attributes(style)
        );
        self.push(element);
    }

    fn draw_path(&mut self, path: &Path<T>, style: &DrawStyle<T>) {
        let element = path_element(path, style);
        self.push(element);
    }
}
