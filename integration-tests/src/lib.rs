use approx::assert_relative_eq;

use equations_core::tolerance::EPSILON;

/// Asserts that two root sequences match to relative tolerance.
///
/// Root order is unspecified, so both sequences are sorted ascending
/// before element-wise comparison.
///
/// # Panics
///
/// Panics if the sequences differ in length or any pair of elements
/// differs by more than the relative tolerance.
pub fn assert_roots(expected: &[f64], actual: &[f64]) {
    let mut expected = expected.to_vec();
    let mut actual = actual.to_vec();
    expected.sort_by(f64::total_cmp);
    actual.sort_by(f64::total_cmp);

    assert_eq!(
        expected.len(),
        actual.len(),
        "expected roots {expected:?}, actual roots {actual:?}"
    );
    for (e, a) in expected.iter().zip(&actual) {
        assert_relative_eq!(*e, *a, max_relative = EPSILON);
    }
}
