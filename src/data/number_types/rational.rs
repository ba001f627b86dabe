//! # Rational numbers
//!
//! Rational numbers allow the algorithms to be run without any rounding error. Fixed size variants
//! are faster but may overflow; `RationalBig` can't.
pub use num_bigint::BigInt;
use num_rational::Ratio;

use crate::data::number_types::traits::OrderedField;

/// Arbitrary precision rational number.
pub type RationalBig = Ratio<BigInt>;
/// Rational number with 64 bit numerator and denominator.
pub type Rational64 = Ratio<i64>;

macro_rules! impl_rational {
    ($in_t:ty) => {
        /// Except for the finiteness of the fixed size types, this is exact.
        impl OrderedField for Ratio<$in_t> {
            const EXACT: bool = true;

            fn is_less_than(&self, other: &Self) -> bool {
                self < other
            }
        }
    }
}
impl_rational!(i32);
impl_rational!(i64);
impl_rational!(i128);
impl_rational!(BigInt);

/// Shorthand for creating a `Rational64`.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::from_integer($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational64::new($numer as i64, $denom as i64)
    };
}

/// Shorthand for creating a `RationalBig`.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from_integer(
            $crate::data::number_types::rational::BigInt::from($value as i64),
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new(
            $crate::data::number_types::rational::BigInt::from($numer as i64),
            $crate::data::number_types::rational::BigInt::from($denom as i64),
        )
    };
}
