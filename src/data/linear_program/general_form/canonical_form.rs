//! # Linear programs in "canonical form"
//!
//! A linear program in canonical form is like a linear program in general form, but it is a
//! minimization problem, has only nonnegative variables without upper bounds and has only equality
//! constraints. Moreover, the constraint vector `b` is non-negative:
//!
//! ```text
//! min  <c, x>
//! s.t. Ax = b
//!      x >= 0
//!      b >= 0
//! ```
//!
//! Any `GeneralForm` can be rewritten in this form. While rewriting, a `Reconstruction` is saved
//! for each original variable, such that solutions of the canonical problem can be mapped back.
use std::mem;

use log::debug;

use crate::algorithm::OptimizationResult;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::{Bounds, Constraint, GeneralForm, Variable};
use crate::data::linear_program::solution::recover_original_solution;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::error::LinearProgramError;

/// How to compute the value of an original variable from a solution of the canonical problem.
///
/// The value of original variable `v` is
///
/// ```text
/// x_v * scale + offset - x_w
/// ```
///
/// where `x` is the canonical solution and the last term is only present if there is a paired
/// variable `w`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reconstruction<F> {
    /// Negative part of a free variable that was split in two.
    pub paired_variable: Option<Variable>,
    /// Factor of the canonical value, `-1` if the variable was reflected.
    pub scale: F,
    /// Constant that the variable was shifted by.
    pub offset: F,
}

impl<OF> Reconstruction<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Compute the value of the original variable.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the original variable this record belongs to.
    /// * `canonical_solution`: Values of all variables of the canonical problem.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the solution is too short for the variables referenced.
    pub fn original_value(
        &self,
        variable: usize,
        canonical_solution: &[OF],
    ) -> Result<OF, LinearProgramError> {
        let value_of = |index: usize| canonical_solution.get(index).ok_or_else(|| {
            LinearProgramError::DimensionMismatch(format!(
                "canonical solution has {} values, variable {} was requested",
                canonical_solution.len(), index,
            ))
        });

        let value = value_of(variable)? * &self.scale + self.offset.clone();
        match self.paired_variable {
            Some(negative_part) => Ok(value - value_of(negative_part.index())?.clone()),
            None => Ok(value),
        }
    }
}

/// A linear program that was rewritten into canonical form, together with the information needed
/// to express its solutions in terms of the variables of the problem it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm<F> {
    problem: GeneralForm<F>,
    reconstruction: Vec<Reconstruction<F>>,
}

impl<OF> CanonicalForm<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// The rewritten problem.
    pub fn problem(&self) -> &GeneralForm<OF> {
        &self.problem
    }

    /// One record per variable of the original problem.
    pub fn reconstruction(&self) -> &[Reconstruction<OF>] {
        &self.reconstruction
    }

    /// Number of variables in the problem this canonical form was derived from.
    pub fn nr_original_variables(&self) -> usize {
        self.reconstruction.len()
    }

    /// The constraint vector `b`.
    ///
    /// All constraints are equalities, so this is the lower (and upper) bound of each constraint.
    pub fn b(&self) -> Vec<OF> {
        self.problem.constraint_bounds.iter()
            .map(|bounds| bounds.lower.clone().unwrap_or_else(OF::zero))
            .collect()
    }

    /// Map the result of solving the canonical problem to a solution of the original problem.
    ///
    /// # Errors
    ///
    /// A `MissingSolution` if the result is not a finite optimum.
    pub fn reconstruct_solution(
        &self,
        result: &OptimizationResult<OF>,
    ) -> Result<Vec<OF>, LinearProgramError> {
        recover_original_solution::<OF>(result, &self.reconstruction)
    }
}

impl<OF> GeneralForm<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Derive the canonical form of this problem.
    ///
    /// The problem is copied first, `self` is not modified.
    ///
    /// # Errors
    ///
    /// See `to_canonical_form`.
    pub fn canonical_form(&self) -> Result<CanonicalForm<OF>, LinearProgramError> {
        let mut problem = self.clone();
        let reconstruction = problem.to_canonical_form()?;

        Ok(CanonicalForm { problem, reconstruction })
    }

    /// Rewrite this problem in canonical form.
    ///
    /// This involves:
    ///
    /// * Making this a minimization problem.
    /// * Splitting free variables, reflecting variables that are only bounded from above and
    ///   shifting all other variables such that their lower bound is zero. Upper bounds of those
    ///   variables become new constraints.
    /// * Splitting range constraints in a lower and an upper bounded constraint.
    /// * Introducing a slack variable for each inequality.
    /// * Multiplying rows by `-1` such that the constraint values are non-negative.
    ///
    /// The variable rewriting happens first, because it can introduce new constraints.
    ///
    /// # Return value
    ///
    /// A record for each variable that was in the problem before the transformation, in the same
    /// order.
    ///
    /// # Errors
    ///
    /// `AlreadyTransformed` if this method was called before on this problem, and
    /// `DimensionMismatch` if the problem is inconsistent.
    pub fn to_canonical_form(&mut self) -> Result<Vec<Reconstruction<OF>>, LinearProgramError> {
        if self.transformed {
            return Err(LinearProgramError::AlreadyTransformed);
        }
        self.check_dimensions()?;

        let (nr_original_variables, nr_original_constraints) = (self.nr_variables(), self.nr_constraints());

        self.make_minimization_problem();
        let reconstruction = self.transform_variables();
        let nr_ranges = self.split_range_constraints();
        let nr_slacks = self.insert_slacks()?;
        self.make_b_non_negative();
        self.transformed = true;

        debug!(
            "Canonical form: {} -> {} variables ({} slacks), {} -> {} constraints ({} ranges split)",
            nr_original_variables, self.nr_variables(), nr_slacks,
            nr_original_constraints, self.nr_constraints(), nr_ranges,
        );
        debug_assert!(self.is_canonical());

        Ok(reconstruction)
    }

    /// Make this a minimization problem by multiplying the cost function by `-1`.
    fn make_minimization_problem(&mut self) {
        if self.objective == Objective::Maximize {
            self.objective = Objective::Minimize;

            for cost in &mut self.cost {
                *cost *= -OF::one();
            }
        }
    }

    /// Make all original variables nonnegative and remove their upper bounds.
    ///
    /// Only the variables present at the start are transformed; the variables introduced here are
    /// nonnegative already.
    fn transform_variables(&mut self) -> Vec<Reconstruction<OF>> {
        (0..self.nr_variables())
            .map(|j| {
                let variable = Variable(j);
                let Bounds { lower, upper } = mem::replace(
                    &mut self.variable_bounds[j],
                    Bounds { lower: Some(OF::zero()), upper: None },
                );

                match (lower, upper) {
                    (None, None) => self.split_free_variable(variable),
                    (None, Some(upper)) => self.reflect_variable(variable, upper),
                    (Some(lower), upper) => self.shift_variable(variable, lower, upper),
                }
            })
            .collect()
    }

    /// Split a free variable `x` in `x+ - x-`, reusing `x` as `x+`.
    ///
    /// The column of `x-` is the negated column of `x`.
    fn split_free_variable(&mut self, variable: Variable) -> Reconstruction<OF> {
        let negated_column = self.iter_column(variable)
            .map(|(constraint, value)| (constraint, -value.clone()))
            .collect::<Vec<_>>();

        let negative_part = self.make_non_negative_variable();
        self.cost[negative_part.0] = -self.cost[variable.0].clone();
        for (constraint, value) in negated_column {
            self.insert_entry(constraint, negative_part, value, false);
        }

        Reconstruction {
            paired_variable: Some(negative_part),
            scale: OF::one(),
            offset: OF::zero(),
        }
    }

    /// Substitute `x = upper - x'` for a variable that is only bounded from above.
    fn reflect_variable(&mut self, variable: Variable, upper: OF) -> Reconstruction<OF> {
        self.cost[variable.0] *= -OF::one();

        for entry in self.entries.iter_mut().filter(|entry| entry.variable == variable) {
            subtract_from_bounds::<OF>(&mut self.constraint_bounds[entry.constraint.0], &entry.value * &upper);
            entry.value *= -OF::one();
        }

        Reconstruction {
            paired_variable: None,
            scale: -OF::one(),
            offset: upper,
        }
    }

    /// Substitute `x = x' + lower`.
    ///
    /// If there is also an upper bound, it becomes the new constraint `x' <= upper - lower`.
    fn shift_variable(&mut self, variable: Variable, lower: OF, upper: Option<OF>) -> Reconstruction<OF> {
        if !lower.is_zero() {
            for entry in self.entries.iter().filter(|entry| entry.variable == variable) {
                subtract_from_bounds::<OF>(&mut self.constraint_bounds[entry.constraint.0], &entry.value * &lower);
            }
        }

        if let Some(upper) = upper {
            self.constraint_bounds.push(Bounds { lower: None, upper: Some(&upper - &lower) });
            let constraint = Constraint(self.constraint_bounds.len() - 1);
            self.insert_entry(constraint, variable, OF::one(), false);
        }

        Reconstruction {
            paired_variable: None,
            scale: OF::one(),
            offset: lower,
        }
    }

    /// Split each constraint `l <= <a, x> <= u` with `l != u` in `l <= <a, x>` and `<a, x> <= u`.
    ///
    /// # Return value
    ///
    /// The number of constraints that were split.
    fn split_range_constraints(&mut self) -> usize {
        let mut nr_split = 0;

        for i in 0..self.nr_constraints() {
            let is_range = match &self.constraint_bounds[i] {
                Bounds { lower: Some(lower), upper: Some(upper) } => lower != upper,
                _ => false,
            };
            if !is_range {
                continue;
            }

            let upper = self.constraint_bounds[i].upper.take();
            let row = self.iter_row(Constraint(i))
                .map(|(variable, value)| (variable, value.clone()))
                .collect::<Vec<_>>();

            self.constraint_bounds.push(Bounds { lower: None, upper });
            let upper_part = Constraint(self.constraint_bounds.len() - 1);
            for (variable, value) in row {
                self.insert_entry(upper_part, variable, value, false);
            }
            nr_split += 1;
        }

        nr_split
    }

    /// Introduce a slack variable for every inequality, making it an equality.
    ///
    /// A positive slack for `<a, x> <= u`, a negative slack for `<a, x> >= l`.
    ///
    /// # Return value
    ///
    /// The number of slack variables added.
    ///
    /// # Errors
    ///
    /// An `InvalidConstraint` when a constraint has no bounds at all.
    fn insert_slacks(&mut self) -> Result<usize, LinearProgramError> {
        let mut nr_slacks = 0;

        for i in 0..self.nr_constraints() {
            let bounds = &mut self.constraint_bounds[i];
            let coefficient = match (&bounds.lower, &bounds.upper) {
                (Some(_), Some(_)) => continue,
                (None, Some(_)) => {
                    bounds.lower = bounds.upper.clone();
                    OF::one()
                },
                (Some(_), None) => {
                    bounds.upper = bounds.lower.clone();
                    -OF::one()
                },
                (None, None) => return Err(LinearProgramError::InvalidConstraint),
            };

            let slack = self.make_non_negative_variable();
            self.insert_entry(Constraint(i), slack, coefficient, false);
            nr_slacks += 1;
        }

        Ok(nr_slacks)
    }

    /// Multiply the constraints by `-1` where needed such that the constraint value is >= 0.
    fn make_b_non_negative(&mut self) {
        let zero = OF::zero();
        let rows_to_negate = self.constraint_bounds.iter()
            .map(|bounds| bounds.lower.as_ref().is_some_and(|value| value.is_less_than(&zero)))
            .collect::<Vec<_>>();

        for (bounds, _) in self.constraint_bounds.iter_mut().zip(&rows_to_negate).filter(|(_, negate)| **negate) {
            let Bounds { lower, upper } = mem::replace(bounds, Bounds { lower: None, upper: None });
            // Negating swaps the role of the bounds
            *bounds = Bounds { lower: upper.map(|value| -value), upper: lower.map(|value| -value) };
        }
        for entry in self.entries.iter_mut().filter(|entry| rows_to_negate[entry.constraint.0]) {
            entry.value *= -OF::one();
        }
    }

    /// Whether the problem satisfies all requirements of the canonical form.
    fn is_canonical(&self) -> bool {
        let zero = OF::zero();

        let minimization = self.objective == Objective::Minimize;
        let variables = self.variable_bounds.iter()
            .all(|bounds| bounds.lower.as_ref() == Some(&zero) && bounds.upper.is_none());
        let constraints = self.constraint_bounds.iter()
            .all(|bounds| match bounds {
                Bounds { lower: Some(lower), upper: Some(upper) } => lower == upper && !lower.is_less_than(&zero),
                _ => false,
            });

        [minimization, variables, constraints].iter().all(|v| *v)
    }
}

/// Subtract an amount from all bounds that are present.
fn subtract_from_bounds<OF>(bounds: &mut Bounds<OF>, amount: OF)
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    if let Some(lower) = &mut bounds.lower {
        *lower -= amount.clone();
    }
    if let Some(upper) = &mut bounds.upper {
        *upper -= amount;
    }
}
