//! # The two phase Simplex method
//!
//! This module contains the exact solver of this crate: a dense revised Simplex method. The problem
//! is first rewritten in canonical form. In the first phase, a basic feasible solution is found by
//! minimizing the sum of artificial variables, one for each row. In the second phase, the cost
//! function of the problem is minimized starting from that solution.
//!
//! The algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a
//! book by Christos H. Papadimitriou and Kenneth Steiglitz.
use log::{debug, error, info, trace};

use crate::algorithm::{Configuration, MessageLevel, Method, OptimizationResult, Solver};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::general_form::canonical_form::CanonicalForm;
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::error::LinearProgramError;

pub mod tableau;
pub mod strategy;

/// Solver using the two phase Simplex method.
///
/// Arithmetic is done in the number type of the problem, so rational problems are solved without
/// any rounding error. Only `Method::PrimalSimplex` without presolve is supported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TwoPhase;

impl<OF> Solver<OF> for TwoPhase
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    fn solve(
        &self,
        problem: &GeneralForm<OF>,
        configuration: &Configuration,
    ) -> Result<OptimizationResult<OF>, LinearProgramError> {
        if configuration.method != Method::PrimalSimplex {
            return Err(LinearProgramError::UnsupportedOperation(format!(
                "the two phase solver only implements the primal simplex method, not {}",
                configuration.method,
            )));
        }
        if configuration.presolve {
            return Err(LinearProgramError::UnsupportedOperation(
                "the two phase solver has no presolve".to_string(),
            ));
        }

        let canonical = problem.canonical_form()?;
        let result = solve_canonical::<OF>(&canonical, configuration.message_level);
        if configuration.message_level >= MessageLevel::Normal {
            info!(
                "Two phase solve of {} variables and {} constraints: {}",
                problem.nr_variables(), problem.nr_constraints(), result.status(),
            );
        }

        match result {
            OptimizationResult::FiniteOptimum(_) => {
                canonical.reconstruct_solution(&result).map(OptimizationResult::FiniteOptimum)
            },
            other => Ok(other),
        }
    }
}

/// Solve a problem in canonical form.
///
/// # Return value
///
/// The outcome, any solution is expressed in the variables of the canonical problem.
pub fn solve_canonical<OF>(
    canonical: &CanonicalForm<OF>,
    message_level: MessageLevel,
) -> OptimizationResult<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let problem = canonical.problem();
    let mut matrix = vec![vec![OF::zero(); problem.nr_variables()]; problem.nr_constraints()];
    for entry in problem.entries() {
        matrix[entry.constraint.index()][entry.variable.index()] = entry.value.clone();
    }
    let mut tableau = Tableau::<OF>::new(matrix, canonical.b(), problem.cost().to_vec());

    match artificial_primal::<OF, FirstProfitable>(&mut tableau, message_level) {
        FeasibilityResult::Feasible { redundant_rows } => {
            if message_level >= MessageLevel::Verbose {
                debug!("Phase one found a feasible basis, {} redundant rows", redundant_rows.len());
            }
            tableau.start_phase_two();
            primal::<OF, FirstProfitable>(&mut tableau, message_level)
        },
        FeasibilityResult::Infeasible => OptimizationResult::Infeasible,
        FeasibilityResult::Failed => {
            if message_level >= MessageLevel::Error {
                error!("Phase one cost became unbounded, the artificial problem was solved incorrectly");
            }
            OptimizationResult::Error
        },
    }
}

/// Outcome of the first phase.
#[derive(Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// A basic feasible solution was found.
    ///
    /// The basis contains artificial variables only in the rows that are redundant.
    Feasible {
        /// Rows that are linear combinations of other rows, sorted.
        redundant_rows: Vec<usize>,
    },
    /// The problem is not feasible.
    Infeasible,
    /// The artificial cost function decreased without bound, which can only happen through
    /// rounding errors.
    Failed,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the canonical linear program is found.
///
/// # Arguments
///
/// * `tableau`: Tableau in phase one, typically with a basis of only artificial variables.
pub(crate) fn artificial_primal<OF, PR>(
    tableau: &mut Tableau<OF>,
    message_level: MessageLevel,
) -> FeasibilityResult
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
    PR: PivotRule,
{
    match iterate::<OF, PR>(tableau, message_level) {
        Termination::Optimal if tableau.has_positive_artificial() => FeasibilityResult::Infeasible,
        Termination::Optimal => FeasibilityResult::Feasible {
            redundant_rows: remove_artificial_basis_variables::<OF>(tableau),
        },
        Termination::Unbounded => FeasibilityResult::Failed,
    }
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Return value
///
/// Indices of rows that are redundant, sorted. Their artificial variable stays in the basis at
/// value zero.
fn remove_artificial_basis_variables<OF>(tableau: &mut Tableau<OF>) -> Vec<usize>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let mut rows_to_remove = Vec::new();

    for pivot_row in tableau.artificial_basis_rows() {
        let pivot_column = tableau.entering_candidates()
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| tableau.generate_element(pivot_row, j).is_nonzero());

        if let Some(pivot_column) = pivot_column {
            let column = tableau.generate_column(pivot_column);
            tableau.bring_into_basis(pivot_column, pivot_row, &column);
        } else {
            rows_to_remove.push(pivot_row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, the tableau should be in phase two with a feasible basis.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<OF, PR>(
    tableau: &mut Tableau<OF>,
    message_level: MessageLevel,
) -> OptimizationResult<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
    PR: PivotRule,
{
    match iterate::<OF, PR>(tableau, message_level) {
        Termination::Optimal => OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        Termination::Unbounded => OptimizationResult::Unbounded,
    }
}

/// How the iteration of a single phase ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Termination {
    Optimal,
    Unbounded,
}

/// Pivot until no column has a negative relative cost, or until a column can be increased without
/// bound.
fn iterate<OF, PR>(tableau: &mut Tableau<OF>, message_level: MessageLevel) -> Termination
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
    PR: PivotRule,
{
    let verbose = message_level >= MessageLevel::Verbose;
    let mut rule = PR::new();
    let mut iterations = 0_usize;

    let termination = loop {
        debug_assert!(is_in_basic_feasible_solution_state::<OF>(tableau));

        match rule.select_primal_pivot_column::<OF>(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column) {
                    Some(row_index) => {
                        if verbose {
                            trace!(
                                "Pivot on column {} (relative cost {}), leaving column {} in row {}",
                                column_index, cost, tableau.basis_index(row_index), row_index,
                            );
                        }
                        tableau.bring_into_basis(column_index, row_index, &column);
                        iterations += 1;
                    },
                    None => break Termination::Unbounded,
                }
            },
            None => break Termination::Optimal,
        }
    };

    if verbose {
        debug!(
            "Phase {:?} ended {:?} after {} iterations, objective value {}",
            tableau.phase(), termination, iterations, tableau.objective_function_value(),
        );
    }
    termination
}

#[cfg(test)]
mod test;
