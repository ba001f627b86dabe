//! # Algorithms
//!
//! Solvers take a problem in general form and report an `OptimizationResult` in the variables of
//! that problem. The `two_phase` module contains the exact solver of this crate, `external`
//! contains adapters for floating point solvers from other crates.
use std::fmt;
use std::fmt::Display;

use crate::data::linear_program::elements::Status;
use crate::data::linear_program::general_form::GeneralForm;
use crate::error::LinearProgramError;

pub mod two_phase;
#[cfg(feature = "microlp")]
pub mod external;

/// Something that can solve linear programs.
///
/// Implementations are interchangeable: each of them receives the problem as it was built and
/// expresses any solution in its variables.
pub trait Solver<F> {
    /// Solve a linear program.
    ///
    /// The problem is not modified.
    ///
    /// # Errors
    ///
    /// When the configuration can't be honored by this solver, or the problem is malformed. An
    /// infeasible or unbounded problem is not an error.
    fn solve(
        &self,
        problem: &GeneralForm<F>,
        configuration: &Configuration,
    ) -> Result<OptimizationResult<F>, LinearProgramError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Vec<F>),
    Unbounded,
    /// The solver could only determine that there is no finite optimum.
    InfeasibleOrUnbounded,
    /// The solver failed for a reason other than the problem itself.
    Error,
}

impl<F> OptimizationResult<F> {
    /// The status corresponding to this result.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::Infeasible => Status::Infeasible,
            OptimizationResult::FiniteOptimum(_) => Status::Optimal,
            OptimizationResult::Unbounded => Status::Unbounded,
            OptimizationResult::InfeasibleOrUnbounded => Status::InfeasibleOrUnbounded,
            OptimizationResult::Error => Status::Error,
        }
    }
}

/// Options passed to a `Solver`.
///
/// Not every solver supports every option, see the documentation of the implementations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Configuration {
    /// Algorithm to use.
    pub method: Method,
    /// Whether to simplify the problem before solving it.
    pub presolve: bool,
    /// How much the solver should report through the `log` facade.
    pub message_level: MessageLevel,
}

/// Solution algorithm.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Method {
    #[default]
    PrimalSimplex,
    DualSimplex,
    InteriorPoint,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::PrimalSimplex => "primal_simplex",
            Method::DualSimplex => "dual_simplex",
            Method::InteriorPoint => "interior_point",
        })
    }
}

/// Verbosity of a solver.
///
/// Levels are ordered: each level reports everything the previous one does.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum MessageLevel {
    /// Report nothing.
    #[default]
    Off,
    /// Only report failures.
    Error,
    /// Also report the outcome of each solve.
    Normal,
    /// Also report phases and iterations.
    Verbose,
}

impl Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MessageLevel::Off => "off",
            MessageLevel::Error => "error",
            MessageLevel::Normal => "normal",
            MessageLevel::Verbose => "verbose",
        })
    }
}
