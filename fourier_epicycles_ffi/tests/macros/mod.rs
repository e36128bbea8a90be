/// Same as `fourier_epicycles::assert_fuzzy_eq` with the trait brought into scope, the FFI
/// tests only compare plain `f64` values.
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr $(,)?) => {{
        use fourier_epicycles::core::traits::FuzzyEq;
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            left.fuzzy_eq(right),
            "fuzzy assertion failed\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr $(,)?) => {{
        use fourier_epicycles::core::traits::FuzzyEq;
        let (left, right, eps): (f64, f64, f64) = ($left, $right, $eps);
        assert!(
            left.fuzzy_eq_eps(right, eps),
            "fuzzy assertion failed\n  left: {:?}\n right: {:?}\n   eps: {:?}",
            left,
            right,
            eps
        );
    }};
}
