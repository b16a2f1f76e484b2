use thiserror::Error;

use equations_core::{CoefficientsError, tolerance::EPSILON};

/// Errors that can occur when solving a quadratic equation.
///
/// The two kinds are mutually exclusive and checked in this order:
/// coefficient finiteness first, then the quadratic-shape check.
#[derive(Debug, Error)]
pub enum Error {
    /// A coefficient was `NaN` or infinite.
    #[error(transparent)]
    InvalidInput(#[from] CoefficientsError),

    /// The leading coefficient is within tolerance of zero.
    #[error("not a square equation: a = {a} is within {EPSILON} of zero")]
    NotQuadratic { a: f64 },
}
