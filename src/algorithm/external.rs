//! # Floating point solvers from other crates
//!
//! Adapters that map a `GeneralForm` onto the problem representation of another solver, and its
//! outcome back onto an `OptimizationResult`. These solvers work with floating point numbers only.
use log::{error, info};
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::algorithm::{Configuration, MessageLevel, OptimizationResult, Solver};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::GeneralForm;
use crate::error::LinearProgramError;

/// The simplex solver of the `microlp` crate.
///
/// The method and presolve options of the configuration are ignored.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MicroLp;

impl Solver<f64> for MicroLp {
    fn solve(
        &self,
        problem: &GeneralForm<f64>,
        configuration: &Configuration,
    ) -> Result<OptimizationResult<f64>, LinearProgramError> {
        problem.check_dimensions()?;

        let direction = match problem.objective() {
            Objective::Maximize => OptimizationDirection::Maximize,
            Objective::Minimize => OptimizationDirection::Minimize,
        };
        let mut external = Problem::new(direction);

        let variables = problem.variables()
            .map(|variable| {
                let bounds = problem.variable_bounds(variable);
                external.add_var(
                    problem.cost()[variable.index()],
                    (bounds.lower.unwrap_or(f64::NEG_INFINITY), bounds.upper.unwrap_or(f64::INFINITY)),
                )
            })
            .collect::<Vec<_>>();

        for constraint in problem.constraints() {
            let row = problem.iter_row(constraint)
                .map(|(variable, &value)| (variables[variable.index()], value))
                .collect::<Vec<_>>();

            let bounds = problem.constraint_bounds(constraint);
            match (bounds.lower, bounds.upper) {
                (Some(lower), Some(upper)) if lower == upper => {
                    external.add_constraint(row.as_slice(), ComparisonOp::Eq, lower);
                },
                (lower, upper) => {
                    if let Some(lower) = lower {
                        external.add_constraint(row.as_slice(), ComparisonOp::Ge, lower);
                    }
                    if let Some(upper) = upper {
                        external.add_constraint(row.as_slice(), ComparisonOp::Le, upper);
                    }
                },
            }
        }

        let result = match external.solve() {
            Ok(solution) => OptimizationResult::FiniteOptimum(
                variables.iter().map(|&variable| *solution.var_value(variable)).collect(),
            ),
            Err(microlp::Error::Infeasible) => OptimizationResult::Infeasible,
            Err(microlp::Error::Unbounded) => OptimizationResult::Unbounded,
            Err(other) => {
                if configuration.message_level >= MessageLevel::Error {
                    error!("microlp failed: {}", other);
                }
                OptimizationResult::Error
            },
        };

        if configuration.message_level >= MessageLevel::Normal {
            info!(
                "microlp solve of {} variables and {} constraints: {}",
                problem.nr_variables(), problem.nr_constraints(), result.status(),
            );
        }
        Ok(result)
    }
}
