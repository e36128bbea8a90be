/// Approximate equality for floating point values.
///
/// Coefficients and synthesized positions come out of long sums of trigonometric terms so values
/// that are equal in exact arithmetic usually differ in the last few bits.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::core::traits::*;
/// let sum: f64 = (0..10).map(|_| 0.1).sum();
/// assert_ne!(sum, 1.0);
/// assert!(sum.fuzzy_eq(1.0));
/// assert!(!1.1f64.fuzzy_eq(1.0));
/// assert!(1.1f64.fuzzy_eq_eps(1.0, 0.2));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Epsilon used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `|self - other| < fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

/// Ordering comparisons that treat values within an epsilon as equal.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::core::traits::*;
/// // resampled segment lengths are expected within [spacing, 2 * spacing]
/// assert!(4.9999999999f64.fuzzy_in_range_eps(5.0, 10.0, 1e-8));
/// assert!(7.5f64.fuzzy_in_range_eps(5.0, 10.0, 1e-8));
/// assert!(!10.5f64.fuzzy_in_range_eps(5.0, 10.0, 1e-8));
/// ```
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other` allowing `self` to fall short by up to `fuzzy_epsilon`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self < other` allowing `self` to overshoot by up to `fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }
}

macro_rules! impl_fuzzy {
    ($($ty:ty => $eps:expr),*) => {
        $(
            impl FuzzyEq for $ty {
                #[inline]
                fn fuzzy_epsilon() -> Self {
                    $eps
                }

                #[inline]
                fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    (*self - other).abs() < fuzzy_epsilon
                }
            }

            impl FuzzyOrd for $ty {
                #[inline]
                fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    *self + fuzzy_epsilon > other
                }

                #[inline]
                fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    *self < other + fuzzy_epsilon
                }
            }
        )*
    };
}

impl_fuzzy!(f32 => 1.0e-5, f64 => 1.0e-8);
