//! Macros for writing vertex configurations.

/// Build a [`Vertices`](crate::core::Vertices) array from `(re, im)` pairs.
///
/// The result is a fixed-size array, so assigning it to `Vertices` with
/// the wrong number of pairs fails to compile.
///
/// # Example
///
/// ```
/// use pentagon::core::{Vertices, INITIAL_VERTICES};
/// use pentagon::vertices;
///
/// let start: Vertices = vertices![(2, 4), (2, 0), (2, 2), (3, 4), (1, 3)];
/// assert_eq!(start, INITIAL_VERTICES);
/// ```
#[macro_export]
macro_rules! vertices {
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        [$($crate::Complex64::new(($re) as f64, ($im) as f64)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Vertices;
    use crate::Complex64;

    #[test]
    fn vertices_macro_builds_complex_array() {
        let values: Vertices = vertices![(1, -1), (0.5, 2), (-3, 0), (0, 0), (4, 4.25)];

        assert_eq!(values[0], Complex64::new(1.0, -1.0));
        assert_eq!(values[1], Complex64::new(0.5, 2.0));
        assert_eq!(values[2], Complex64::new(-3.0, 0.0));
        assert_eq!(values[4], Complex64::new(4.0, 4.25));
    }

    #[test]
    fn vertices_macro_accepts_trailing_comma() {
        let values: Vertices = vertices![(0, 0), (0, 0), (0, 0), (0, 0), (0, 1),];
        assert_eq!(values[4], Complex64::new(0.0, 1.0));
    }
}
