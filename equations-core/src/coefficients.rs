use std::convert::TryFrom;

use thiserror::Error;

use crate::tolerance;

/// The coefficients of a quadratic equation `ax² + bx + c = 0`.
///
/// Construction validates that all three values are finite, so a
/// `Coefficients` never holds a `NaN` or an infinity.
///
/// # Examples
/// ```
/// use equations_core::Coefficients;
///
/// // Using `new`
/// let q = Coefficients::new(1.0, -3.0, 2.0).unwrap();
/// assert_eq!(q.b(), -3.0);
/// assert_eq!(q.discriminant(), 1.0);
///
/// // Using `TryFrom<[f64; 3]>`
/// let q: Coefficients = [1.0, 0.0, -1.0].try_into().unwrap();
/// assert_eq!(q.discriminant(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// Creates `Coefficients` if `a`, `b`, and `c` are all finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientsError::NotFinite`] with the first value that
    /// is `NaN` or infinite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, CoefficientsError> {
        for value in [a, b, c] {
            if !value.is_finite() {
                return Err(CoefficientsError::NotFinite(value));
            }
        }
        Ok(Self { a, b, c })
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn a(self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient.
    #[must_use]
    pub fn b(self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(self) -> f64 {
        self.c
    }

    /// Returns the discriminant `b² - 4ac`.
    #[must_use]
    pub fn discriminant(self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns `true` when the leading coefficient is farther than the
    /// tolerance from zero, i.e. the equation is actually quadratic.
    #[must_use]
    pub fn is_quadratic(self) -> bool {
        !tolerance::in_epsilon(self.a, 0.0)
    }
}

impl TryFrom<[f64; 3]> for Coefficients {
    type Error = CoefficientsError;
    fn try_from([a, b, c]: [f64; 3]) -> Result<Self, Self::Error> {
        Coefficients::new(a, b, c)
    }
}

/// Errors that can occur when constructing [`Coefficients`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoefficientsError {
    /// A coefficient was `NaN` or infinite.
    #[error("a, b, and c must be numbers: {0} is not finite")]
    NotFinite(f64),
}
