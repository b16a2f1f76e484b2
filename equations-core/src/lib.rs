mod coefficients;
mod roots;

pub mod tolerance;

pub use coefficients::{Coefficients, CoefficientsError};
pub use roots::Roots;
