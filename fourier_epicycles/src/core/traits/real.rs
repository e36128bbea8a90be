use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Floating point number type the whole pipeline is generic over (`f64` and `f32`).
///
/// `Display` is required because path data and SVG attributes are written with it. The
/// conversion helpers exist because counts and frequencies appear as factors in every Fourier
/// sum.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    /// Full turn in radians (2PI).
    fn tau() -> Self;

    fn two() -> Self;

    /// Convert a count or sample index.
    fn from_usize(n: usize) -> Self;

    /// Convert a signed frequency index.
    fn from_i64(n: i64) -> Self;
}

macro_rules! impl_real {
    ($($ty:ident),*) => {
        $(
            impl Real for $ty {
                #[inline]
                fn tau() -> Self {
                    std::$ty::consts::TAU
                }

                #[inline]
                fn two() -> Self {
                    2.0
                }

                #[inline]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }

                #[inline]
                fn from_i64(n: i64) -> Self {
                    n as $ty
                }
            }
        )*
    };
}

impl_real!(f32, f64);
