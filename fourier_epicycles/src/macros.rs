/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            left.fuzzy_eq(*right),
            "fuzzy assertion failed\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr $(,)?) => {{
        let (left, right, eps) = (&$left, &$right, $eps);
        assert!(
            left.fuzzy_eq_eps(*right, eps),
            "fuzzy assertion failed\n  left: {:?}\n right: {:?}\n   eps: {:?}",
            left,
            right,
            eps
        );
    }};
}

/// Macro used for implementing the path macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a path with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use fourier_epicycles::path;
/// # use fourier_epicycles::core::math::*;
/// let square = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// assert_eq!(square.len(), 4);
/// assert_eq!(square[2], vec2(10.0, 10.0));
/// ```
#[macro_export]
macro_rules! path {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut p = $crate::path::Path::with_capacity(size);
            $(
                p.add($x.0, $x.1);
            )*
            p
        }
    };
}
