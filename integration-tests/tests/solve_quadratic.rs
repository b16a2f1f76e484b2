use equations_core::{Roots, tolerance::EPSILON};
use equations_solve::quadratic::{self, Error};
use integration_tests::assert_roots;

#[test]
fn no_solution() {
    let roots = quadratic::solve(1.0, 0.0, 1.0).expect("should solve");
    assert!(roots.to_vec().is_empty());
}

#[test]
fn two_roots() {
    let roots = quadratic::solve(1.0, 0.0, -1.0).expect("should solve");
    assert_eq!(roots.count(), 2);
    assert_roots(&[-1.0, 1.0], &roots.to_vec());
}

#[test]
fn double_root() {
    let roots = quadratic::solve(1.0, 2.0, 1.0).expect("should solve");
    assert_eq!(roots.count(), 2);
    assert_roots(&[-1.0, -1.0], &roots.to_vec());
}

#[test]
fn not_square() {
    let result = quadratic::solve(0.0, 1.0, 1.0);
    assert!(matches!(result, Err(Error::NotQuadratic { .. })));

    let result = quadratic::solve(EPSILON, 1.0, 1.0);
    assert!(matches!(result, Err(Error::NotQuadratic { .. })));
}

#[test]
fn double_root_near_epsilon() {
    let diff = EPSILON / 4.0;
    let roots =
        quadratic::solve(1.0 + diff, 2.0 + 2.0 * diff, 1.0 + diff).expect("should solve");
    assert_eq!(roots.count(), 2);
    assert_roots(&[-1.0, -1.0], &roots.to_vec());
}

#[test]
fn huge_coefficients() {
    // The largest i64, as a double. The discriminant overflows neither
    // validation nor the double-root classification.
    #[allow(clippy::cast_precision_loss)]
    let max = i64::MAX as f64;

    let roots = quadratic::solve(max, 2.0 * max, max).expect("should solve");
    assert_eq!(roots.count(), 2);
    assert_roots(&[-1.0, -1.0], &roots.to_vec());
}

#[test]
fn not_a_number() {
    let result = quadratic::solve(f64::INFINITY, 1.0, 0.0);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let result = quadratic::solve(1.0, f64::INFINITY, 0.0);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let result = quadratic::solve(1.0, 0.0, f64::NAN);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn non_finite_inputs_win_over_shape_errors() {
    // NaN in the leading coefficient reports InvalidInput even though
    // the shape check would otherwise run first on a.
    let result = quadratic::solve(f64::NAN, 1.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn typed_roots_match_sequence_form() {
    let roots = quadratic::solve(1.0, -3.0, 2.0).expect("should solve");
    assert!(matches!(roots, Roots::Distinct(_)));
    assert_roots(&[1.0, 2.0], &roots.to_vec());
}
