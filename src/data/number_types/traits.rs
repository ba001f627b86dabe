//! # Traits
//!
//! The algorithms in this crate are defined over ordered fields. The contract is "mathematically
//! exact", but the implementations aren't all exact: floating point types only approximate a field
//! and compare with a tolerance. That difference is captured by the `is_less_than` comparator,
//! which every algorithm uses instead of the `<` operator whenever a sign decision is made.
use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{Num, NumAssign, RefNum};

/// The simplex algorithm is defined over the ordered fields.
///
/// All methods containing algorithmic logic should be defined to work over an ordered field. The
/// comparison used to make decisions is injected through `is_less_than`, so that the same code can
/// run with exact equality for rational numbers and with a tolerance for floating point numbers.
pub trait OrderedField:
    Num +
    NumAssign +
    Neg<Output=Self> +
    PartialOrd +
    Clone +
    Display +
    Debug +
    Sized +
{
    /// Whether computations with this type are free of rounding errors.
    const EXACT: bool;

    /// Strict comparison used by all algorithmic decisions.
    ///
    /// For exact types, this is the usual `<`. Inexact types may treat values that are close as
    /// equal.
    fn is_less_than(&self, other: &Self) -> bool;

    /// Whether this value represents a finite number.
    ///
    /// Types that can't represent infinity are always finite.
    fn is_finite(&self) -> bool {
        true
    }

    /// Whether this value should be considered different from zero.
    fn is_nonzero(&self) -> bool {
        let zero = Self::zero();
        self.is_less_than(&zero) || zero.is_less_than(self)
    }
}

/// A reference to an ordered field.
///
/// Used as a higher ranked bound, `for<'r> &'r OF: OrderedFieldRef<OF>`, such that arithmetic
/// can be done on references without cloning.
pub trait OrderedFieldRef<Deref>: RefNum<Deref> {}
impl<T: RefNum<Deref>, Deref> OrderedFieldRef<Deref> for T {}

/// Inner product of two equally long slices.
pub fn inner_product<OF>(left: &[OF], right: &[OF]) -> OF
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right)
        .fold(OF::zero(), |total, (l, r)| total + l * r)
}
