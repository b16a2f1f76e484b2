/// The real roots of a quadratic equation.
///
/// A double root is a single value with multiplicity two, so the
/// sequence forms below always yield zero or two entries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Roots {
    /// The discriminant is negative: no real roots.
    None,
    /// The discriminant is within tolerance of zero: one doubled root.
    Double(f64),
    /// The discriminant is positive: two distinct roots.
    Distinct([f64; 2]),
}

impl Roots {
    /// Returns the roots as a freshly allocated sequence.
    ///
    /// The sequence has length 0 or 2; a double root appears twice.
    #[must_use]
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            Self::None => Vec::new(),
            Self::Double(x) => vec![x, x],
            Self::Distinct([x1, x2]) => vec![x1, x2],
        }
    }

    /// Returns both roots, or `None` when the equation has no real solution.
    ///
    /// A double root is repeated, so `Some` always holds two values.
    #[must_use]
    pub fn as_array(self) -> Option<[f64; 2]> {
        match self {
            Self::None => None,
            Self::Double(x) => Some([x, x]),
            Self::Distinct(pair) => Some(pair),
        }
    }

    /// Returns the number of roots counted with multiplicity: 0 or 2.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Double(_) | Self::Distinct(_) => 2,
        }
    }

    /// Returns `true` when the equation has no real roots.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::None)
    }
}
