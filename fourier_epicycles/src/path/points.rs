use crate::core::{
    math::{dist, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered sequence of points. Order is the parametrization around the curve and is used as the
/// independent variable of the Fourier transform.
///
/// By convention paths handed to the pipeline are closed: the last point coincides with the first
/// (see [Path::close]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path<T = f64> {
    /// Contiguous sequence of points.
    pub points: Vec<Vector2<T>>,
}

impl<T> Path<T>
where
    T: Real,
{
    /// Create a new empty [Path].
    #[inline]
    pub fn new() -> Self {
        Path { points: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Path { points }
    }

    /// Add a point to the end of the path.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn add_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<T>> {
        self.points.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<T>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<T>> {
        self.points.last().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Returns true if the path has at least 2 points and the last point fuzzy equals the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => first.fuzzy_eq(*last),
            _ => false,
        }
    }

    /// Join the path back to its start by appending the first point. Nothing happens if the path
    /// is empty or already closed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::path;
    /// let mut stroke = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
    /// assert!(!stroke.is_closed());
    /// stroke.close();
    /// assert!(stroke.is_closed());
    /// assert_eq!(stroke.len(), 4);
    /// stroke.close();
    /// assert_eq!(stroke.len(), 4);
    /// ```
    pub fn close(&mut self) {
        if let Some(first) = self.first() {
            if !self.is_closed() {
                self.points.push(first);
            }
        }
    }

    /// Arithmetic mean of all the points, `None` if the path is empty.
    pub fn centroid(&self) -> Option<Vector2<T>> {
        if self.points.is_empty() {
            return None;
        }

        let sum = self
            .points
            .iter()
            .fold(Vector2::zero(), |acc: Vector2<T>, p| acc + p);
        Some(sum.scale(T::one() / T::from_usize(self.points.len())))
    }

    /// Total length of the segments joining consecutive points.
    pub fn path_length(&self) -> T {
        self.points
            .windows(2)
            .fold(T::zero(), |acc, w| acc + dist(w[0], w[1]))
    }

    /// Axis aligned bounding box of all the points, `None` if the path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fourier_epicycles::path;
    /// # use fourier_epicycles::path::Path;
    /// # use fourier_epicycles::core::traits::*;
    /// assert_eq!(Path::<f64>::new().extents(), None);
    /// let p = path![(1.0, 2.0), (-3.0, 5.0), (4.0, -1.0)];
    /// let extents = p.extents().unwrap();
    /// assert!(extents.min_x.fuzzy_eq(-3.0));
    /// assert!(extents.min_y.fuzzy_eq(-1.0));
    /// assert!(extents.max_x.fuzzy_eq(4.0));
    /// assert!(extents.max_y.fuzzy_eq(5.0));
    /// ```
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Maximum pointwise distance to `other`, comparing points at the same index. `None` if the
    /// paths differ in length or are empty.
    pub fn max_pointwise_dist(&self, other: &Path<T>) -> Option<T> {
        if self.len() != other.len() || self.is_empty() {
            return None;
        }

        Some(
            self.points
                .iter()
                .zip(other.points.iter())
                .map(|(a, b)| dist(*a, *b))
                .fold(T::zero(), num_traits::real::Real::max),
        )
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a Vector2<T>;
    type IntoIter = std::slice::Iter<'a, Vector2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<Vector2<T>> for Path<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Path {
            points: iter.into_iter().collect(),
        }
    }
}
