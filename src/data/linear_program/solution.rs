//! # Representation of solutions
//!
//! A solution of a problem in canonical form is expressed in the variables of that form. Using the
//! reconstruction records saved during the transformation, it is mapped back to the variables of
//! the problem as it was built.
use crate::algorithm::OptimizationResult;
use crate::data::linear_program::general_form::canonical_form::Reconstruction;
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::error::LinearProgramError;

/// An optimal solution of a linear program, in terms of the variables as they were created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function, in the direction of the original problem.
    pub objective_value: F,
    /// One value per variable, indexed by `Variable::index`.
    pub values: Vec<F>,
}

impl<OF> Solution<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Evaluate the objective function of `problem` at `values`.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if there is not a value for each variable of the problem.
    pub fn new(problem: &GeneralForm<OF>, values: Vec<OF>) -> Result<Self, LinearProgramError> {
        let objective_value = problem.objective_function_value(&values)?;

        Ok(Self { objective_value, values })
    }
}

/// Map the optimum of a canonical problem to the variables of the original problem.
///
/// # Arguments
///
/// * `result`: Outcome of solving the canonical problem.
/// * `reconstruction`: The records of all original variables, as returned by
///   `GeneralForm::to_canonical_form`.
///
/// # Return value
///
/// The value of each original variable, in order of creation.
///
/// # Errors
///
/// A `MissingSolution` if the result is not a finite optimum, a `DimensionMismatch` if the
/// solution doesn't fit the records.
pub fn recover_original_solution<OF>(
    result: &OptimizationResult<OF>,
    reconstruction: &[Reconstruction<OF>],
) -> Result<Vec<OF>, LinearProgramError>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    match result {
        OptimizationResult::FiniteOptimum(canonical_solution) => reconstruction.iter()
            .enumerate()
            .map(|(variable, record)| record.original_value(variable, canonical_solution))
            .collect(),
        _ => Err(LinearProgramError::MissingSolution),
    }
}
