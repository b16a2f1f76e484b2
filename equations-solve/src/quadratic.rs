mod error;

pub use error::Error;

use equations_core::{Coefficients, Roots, tolerance};

/// Solves the quadratic equation `ax² + bx + c = 0` for its real roots.
///
/// Coefficients may be arbitrary doubles; non-finite values are rejected
/// before any numeric work, and the leading coefficient must be farther
/// than the tolerance from zero.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any coefficient is `NaN` or
/// infinite, or [`Error::NotQuadratic`] if the leading coefficient is
/// within tolerance of zero. Finiteness is checked first.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Roots, Error> {
    let coefficients = Coefficients::new(a, b, c)?;
    solve_coefficients(coefficients)
}

/// Solves the equation for coefficients that are already validated.
///
/// # Errors
///
/// Returns [`Error::NotQuadratic`] if the leading coefficient is within
/// tolerance of zero.
pub fn solve_coefficients(coefficients: Coefficients) -> Result<Roots, Error> {
    if !coefficients.is_quadratic() {
        return Err(Error::NotQuadratic {
            a: coefficients.a(),
        });
    }

    let d = coefficients.discriminant();

    // A slightly negative discriminant within tolerance of zero is a
    // double root, so this check must precede the sign test.
    if tolerance::in_epsilon(d, 0.0) {
        let x = -coefficients.b() / (2.0 * coefficients.a());
        return Ok(Roots::Double(x));
    }

    if d < 0.0 {
        return Ok(Roots::None);
    }

    let x1 = (-coefficients.b() + d.sqrt()) / (2.0 * coefficients.a());
    let x2 = (-coefficients.b() - d.sqrt()) / (2.0 * coefficients.a());
    Ok(Roots::Distinct([x1, x2]))
}
