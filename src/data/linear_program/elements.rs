//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::Display;

/// A `Constraint` is a type of (in)equality.
///
/// Only used when building a problem from a matrix; constraints in a `GeneralForm` are represented
/// by a lower and an upper bound.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ConstraintType {
    Equal,
    Greater,
    #[default]
    Less,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

/// Outcome of a solve.
///
/// Only `Optimal` comes with a solution. Some backends can't always tell an infeasible problem from
/// an unbounded one, in which case they report `InfeasibleOrUnbounded`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    InfeasibleOrUnbounded,
    Error,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::InfeasibleOrUnbounded => "infeasible_or_unbounded",
            Status::Error => "error",
        })
    }
}
