use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Screen sized window into drawing coordinates.
///
/// Drawing coordinates are screen pixels at zoom 1, so the view box has the screen size divided by
/// the zoom and is centered on `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport<T = f64> {
    /// Screen width in pixels.
    pub width: T,
    /// Screen height in pixels.
    pub height: T,
    /// Center of the view in drawing coordinates.
    pub center: Vector2<T>,
}

impl<T> Viewport<T>
where
    T: Real,
{
    /// Viewport of `width` by `height` centered on the screen center.
    pub fn new(width: T, height: T) -> Self {
        Self {
            width,
            height,
            center: Self::screen_center(width, height),
        }
    }

    #[inline]
    pub fn screen_center(width: T, height: T) -> Vector2<T> {
        Vector2::new(width / T::two(), height / T::two())
    }

    /// Move the center by a screen space drag of `(dx, dy)` pixels at `zoom`.
    pub fn pan(&mut self, dx: T, dy: T, zoom: T) {
        self.center.x = self.center.x - dx / zoom;
        self.center.y = self.center.y - dy / zoom;
    }

    /// View box for `zoom`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::animation::Viewport;
    /// let vp = Viewport::new(800.0, 600.0);
    /// let vb = vp.view_box(2.0);
    /// assert_eq!((vb.min_x, vb.min_y, vb.max_x, vb.max_y), (200.0, 150.0, 600.0, 450.0));
    /// ```
    pub fn view_box(&self, zoom: T) -> AABB<T> {
        let half_w = self.width / zoom / T::two();
        let half_h = self.height / zoom / T::two();
        AABB::new(
            self.center.x - half_w,
            self.center.y - half_h,
            self.center.x + half_w,
            self.center.y + half_h,
        )
    }
}
