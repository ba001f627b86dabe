//! # Floating point numbers
//!
//! Assumed to have a better performance than rational numbers in the simplex algorithm. Correctness
//! guarantees are impossible to give due to (accumulating) rounding errors, so all sign decisions
//! are made with an absolute tolerance.
use crate::data::number_types::traits::OrderedField;

/// Values closer to each other than this are considered equal by `is_less_than`.
pub const EPSILON: f64 = 1e-9;

impl OrderedField for f64 {
    const EXACT: bool = false;

    fn is_less_than(&self, other: &Self) -> bool {
        *self < *other - EPSILON
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}
