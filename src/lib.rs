//! # An exact linear program solver
//!
//! Linear programs are built in general form, with bounds on both variables and constraints, and
//! solved using the two phase Simplex Method as described in the book Combinatorial Optimization
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! All algorithms are generic over the number type. With rational numbers, such as `RationalBig`,
//! problems are solved without any rounding error. With `f64`, comparisons use a small tolerance.
//!
//! ```
//! use exact_lp::data::linear_program::elements::Objective;
//! use exact_lp::data::number_types::rational::RationalBig;
//! use exact_lp::program::LinearProgram;
//! use exact_lp::RB;
//!
//! // max x + y s.t. x + 2y <= 4, 0 <= x <= 2, y >= 0
//! let mut program = LinearProgram::<RationalBig>::new(Objective::Maximize);
//! let x = program.make_variable(Some(RB!(0)), Some(RB!(2)));
//! let y = program.make_non_negative_variable();
//! let constraint = program.make_constraint(None, Some(RB!(4))).unwrap();
//! program.set_constraint_coefficient(constraint, x, RB!(1), false).unwrap();
//! program.set_constraint_coefficient(constraint, y, RB!(2), false).unwrap();
//! program.set_objective_coefficient(x, RB!(1), false).unwrap();
//! program.set_objective_coefficient(y, RB!(1), false).unwrap();
//!
//! assert_eq!(program.solve(), Ok(true));
//! assert_eq!(program.solution(), Ok(&[RB!(2), RB!(1)][..]));
//! assert_eq!(program.objective_value(), Ok(&RB!(3)));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
pub mod program;

#[cfg(test)]
mod tests;
