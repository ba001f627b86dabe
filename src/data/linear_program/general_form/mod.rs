//! # Linear programs in "general form"
//!
//! Data structure for building and inspecting linear programs. Variables and constraints are both
//! described by a lower and an upper bound, either of which may be absent. The constraint matrix is
//! stored as a list of coefficient entries.
use std::collections::HashMap;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef, inner_product};
use crate::error::LinearProgramError;

pub mod canonical_form;

/// Reference to a variable of a `GeneralForm`.
///
/// Only meaningful for the problem that created it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(usize);

impl Variable {
    /// Position of this variable in the problem, and in any solution vector of the problem.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reference to a constraint of a `GeneralForm`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Constraint(usize);

impl Constraint {
    /// Position of this constraint in the problem.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A lower and an upper bound, `None` meaning that there is no bound in that direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounds<F> {
    /// Bound from below, `None` for minus infinity.
    pub lower: Option<F>,
    /// Bound from above, `None` for plus infinity.
    pub upper: Option<F>,
}

/// A single coefficient of the constraint matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoefficientEntry<F> {
    /// Row of the coefficient.
    pub constraint: Constraint,
    /// Column of the coefficient.
    pub variable: Variable,
    /// Value of the coefficient.
    pub value: F,
}

/// A linear program in general form.
///
/// The problem is
///
/// ```text
/// {min|max} <c, x>
/// s.t.      lower_i <= <a_i, x> <= upper_i   for all constraints i
///           lower_j <=    x_j   <= upper_j   for all variables j
/// ```
///
/// where any of the bounds might be absent, except that each constraint has at least one bound.
///
/// Can be checked for consistency by the `check_dimensions` method in this module. That method can
/// be viewed as documentation for the requirements on the fields in this data structure.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralForm<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Whether variables created from a matrix are nonnegative, or free.
    non_negative_default: bool,

    // Variable related
    /// Coefficient of each variable in the objective function.
    cost: Vec<F>,
    /// Bounds of each variable, same length as `cost`.
    variable_bounds: Vec<Bounds<F>>,

    // Constraint related
    /// Bounds of each constraint.
    constraint_bounds: Vec<Bounds<F>>,
    /// All nonzero coefficients, in order of creation.
    entries: Vec<CoefficientEntry<F>>,
    /// Position in `entries` of each (constraint, variable) pair, such that no pair is stored
    /// twice.
    entry_index: HashMap<(usize, usize), usize>,

    /// Whether this problem was rewritten into canonical form.
    transformed: bool,
}

impl<OF> GeneralForm<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Create a new, empty linear program.
    ///
    /// Variables created from a matrix will be nonnegative, see `set_non_negative_default`.
    #[must_use]
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            non_negative_default: true,
            cost: Vec::new(),
            variable_bounds: Vec::new(),
            constraint_bounds: Vec::new(),
            entries: Vec::new(),
            entry_index: HashMap::new(),
            transformed: false,
        }
    }

    /// Create a linear program from a dense matrix representation.
    ///
    /// The problem is `{min|max} <c, x>` subject to `A x {<=|=|>=} b`.
    ///
    /// # Arguments
    ///
    /// * `objective`: Direction of optimization.
    /// * `non_negative`: Whether all variables are bounded below by zero. If not, they are free.
    /// * `a`: Rows of the constraint matrix. Only nonzero values are stored.
    /// * `b`: Right-hand side, one value per row of `a`.
    /// * `c`: Cost function, one value per column of `a`.
    /// * `relations`: Relation of each row. Rows without a relation are `ConstraintType::Less`.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the shape of `a` doesn't match `b` and `c`, or if there are more
    /// relations than rows.
    pub fn from_matrix(
        objective: Objective,
        non_negative: bool,
        a: &[Vec<OF>],
        b: &[OF],
        c: &[OF],
        relations: &[ConstraintType],
    ) -> Result<Self, LinearProgramError> {
        if a.len() != b.len() {
            return Err(LinearProgramError::DimensionMismatch(format!(
                "the matrix has {} rows, but the right-hand side has {} values", a.len(), b.len(),
            )));
        }
        if let Some((i, row)) = a.iter().enumerate().find(|(_, row)| row.len() != c.len()) {
            return Err(LinearProgramError::DimensionMismatch(format!(
                "row {} of the matrix has {} columns, but the cost function has {} values",
                i, row.len(), c.len(),
            )));
        }
        if relations.len() > a.len() {
            return Err(LinearProgramError::DimensionMismatch(format!(
                "{} relations were given for {} rows", relations.len(), a.len(),
            )));
        }

        let mut general_form = Self::new(objective);
        general_form.non_negative_default = non_negative;

        let variables = c.iter()
            .map(|cost| {
                let lower = if non_negative { Some(OF::zero()) } else { None };
                let variable = general_form.make_variable(lower, None);
                general_form.cost[variable.0] = cost.clone();
                variable
            })
            .collect::<Vec<_>>();

        for (i, (row, rhs)) in a.iter().zip(b).enumerate() {
            let relation = relations.get(i).copied().unwrap_or_default();
            let (lower, upper) = match relation {
                ConstraintType::Less => (None, Some(rhs.clone())),
                ConstraintType::Equal => (Some(rhs.clone()), Some(rhs.clone())),
                ConstraintType::Greater => (Some(rhs.clone()), None),
            };
            let constraint = general_form.make_constraint(lower, upper)?;
            for (&variable, value) in variables.iter().zip(row) {
                if !value.is_zero() {
                    general_form.set_constraint_coefficient(constraint, variable, value.clone(), false)?;
                }
            }
        }

        Ok(general_form)
    }

    /// Add a variable to the problem.
    ///
    /// Non-finite bound values, such as floating point infinities, are treated as absent bounds.
    /// The objective coefficient of the new variable is zero.
    ///
    /// # Arguments
    ///
    /// * `lower`: Lower bound, `None` for minus infinity.
    /// * `upper`: Upper bound, `None` for plus infinity.
    pub fn make_variable(&mut self, lower: Option<OF>, upper: Option<OF>) -> Variable {
        self.cost.push(OF::zero());
        self.variable_bounds.push(Bounds {
            lower: lower.filter(OrderedField::is_finite),
            upper: upper.filter(OrderedField::is_finite),
        });

        Variable(self.cost.len() - 1)
    }

    /// Add a variable with the default bounds `[0, +inf)`.
    pub fn make_non_negative_variable(&mut self) -> Variable {
        self.make_variable(Some(OF::zero()), None)
    }

    /// Add `n` variables with identical bounds.
    pub fn make_variables(&mut self, n: usize, lower: Option<OF>, upper: Option<OF>) -> Vec<Variable> {
        (0..n).map(|_| self.make_variable(lower.clone(), upper.clone())).collect()
    }

    /// Add an `n` by `m` grid of variables with identical bounds.
    ///
    /// Variables are created row by row.
    pub fn make_variables_2d(
        &mut self,
        n: usize,
        m: usize,
        lower: Option<OF>,
        upper: Option<OF>,
    ) -> Vec<Vec<Variable>> {
        (0..n).map(|_| self.make_variables(m, lower.clone(), upper.clone())).collect()
    }

    /// Add a constraint `lower <= <a, x> <= upper` with, for now, no coefficients.
    ///
    /// Non-finite bound values are treated as absent bounds.
    ///
    /// # Errors
    ///
    /// An `InvalidConstraint` if neither bound is present: such a constraint doesn't constrain.
    pub fn make_constraint(
        &mut self,
        lower: Option<OF>,
        upper: Option<OF>,
    ) -> Result<Constraint, LinearProgramError> {
        let lower = lower.filter(OrderedField::is_finite);
        let upper = upper.filter(OrderedField::is_finite);
        if lower.is_none() && upper.is_none() {
            return Err(LinearProgramError::InvalidConstraint);
        }

        self.constraint_bounds.push(Bounds { lower, upper });
        Ok(Constraint(self.constraint_bounds.len() - 1))
    }

    /// Set the coefficient of a variable in the objective function.
    ///
    /// # Arguments
    ///
    /// * `variable`: Variable of this problem.
    /// * `value`: New coefficient, or the value to add to the current coefficient.
    /// * `add`: Whether to accumulate into the existing coefficient instead of replacing it.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the variable doesn't belong to this problem.
    pub fn set_objective_coefficient(
        &mut self,
        variable: Variable,
        value: OF,
        add: bool,
    ) -> Result<(), LinearProgramError> {
        self.check_variable(variable)?;

        let coefficient = &mut self.cost[variable.0];
        if add {
            *coefficient += value;
        } else {
            *coefficient = value;
        }

        Ok(())
    }

    /// Set the coefficient of a variable in a constraint.
    ///
    /// A (constraint, variable) pair is stored at most once. If it is already present, the value
    /// either replaces the existing coefficient or, if `add` is set, is accumulated into it.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the constraint or variable doesn't belong to this problem.
    pub fn set_constraint_coefficient(
        &mut self,
        constraint: Constraint,
        variable: Variable,
        value: OF,
        add: bool,
    ) -> Result<(), LinearProgramError> {
        self.check_constraint(constraint)?;
        self.check_variable(variable)?;

        self.insert_entry(constraint, variable, value, add);
        Ok(())
    }

    /// Insert or update a coefficient without checking the indices.
    fn insert_entry(&mut self, constraint: Constraint, variable: Variable, value: OF, add: bool) {
        match self.entry_index.get(&(constraint.0, variable.0)) {
            Some(&position) => {
                let existing = &mut self.entries[position].value;
                if add {
                    *existing += value;
                } else {
                    *existing = value;
                }
            },
            None => {
                self.entry_index.insert((constraint.0, variable.0), self.entries.len());
                self.entries.push(CoefficientEntry { constraint, variable, value });
            },
        }
    }

    /// Check whether the sizes of all fields are consistent.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` describing the first inconsistency found.
    pub fn check_dimensions(&self) -> Result<(), LinearProgramError> {
        if self.cost.len() != self.variable_bounds.len() {
            return Err(LinearProgramError::DimensionMismatch(format!(
                "{} objective coefficients for {} variables", self.cost.len(), self.variable_bounds.len(),
            )));
        }
        if self.entry_index.len() != self.entries.len() {
            return Err(LinearProgramError::DimensionMismatch(format!(
                "{} indexed coefficients for {} entries", self.entry_index.len(), self.entries.len(),
            )));
        }
        for entry in &self.entries {
            self.check_constraint(entry.constraint)?;
            self.check_variable(entry.variable)?;
        }

        Ok(())
    }

    fn check_variable(&self, variable: Variable) -> Result<(), LinearProgramError> {
        if variable.0 < self.nr_variables() {
            Ok(())
        } else {
            Err(LinearProgramError::DimensionMismatch(format!(
                "variable {} doesn't exist, there are {} variables", variable.0, self.nr_variables(),
            )))
        }
    }

    fn check_constraint(&self, constraint: Constraint) -> Result<(), LinearProgramError> {
        if constraint.0 < self.nr_constraints() {
            Ok(())
        } else {
            Err(LinearProgramError::DimensionMismatch(format!(
                "constraint {} doesn't exist, there are {} constraints", constraint.0, self.nr_constraints(),
            )))
        }
    }

    /// Value of the objective function for a solution.
    ///
    /// Only the explicit cost coefficients are used, there is no constant term.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the solution doesn't have a value for each variable.
    pub fn objective_function_value(&self, solution: &[OF]) -> Result<OF, LinearProgramError> {
        self.check_solution_length(solution)?;
        Ok(inner_product::<OF>(&self.cost, solution))
    }

    /// Value of `<a_i, x>` for a constraint `i` and solution `x`.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the constraint doesn't exist or the solution has the wrong length.
    pub fn constraint_activity(
        &self,
        constraint: Constraint,
        solution: &[OF],
    ) -> Result<OF, LinearProgramError> {
        self.check_constraint(constraint)?;
        self.check_solution_length(solution)?;

        Ok(self.iter_row(constraint)
            .fold(OF::zero(), |total, (variable, value)| total + value * &solution[variable.0]))
    }

    /// Whether a solution satisfies all variable bounds and constraints.
    ///
    /// Comparisons use `OrderedField::is_less_than`, so floating point solutions are accepted up to
    /// the tolerance of that type.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the solution doesn't have a value for each variable.
    pub fn is_feasible(&self, solution: &[OF]) -> Result<bool, LinearProgramError> {
        self.check_solution_length(solution)?;

        let within = |bounds: &Bounds<OF>, value: &OF| {
            let above_lower = bounds.lower.as_ref().is_none_or(|lower| !value.is_less_than(lower));
            let below_upper = bounds.upper.as_ref().is_none_or(|upper| !upper.is_less_than(value));
            above_lower && below_upper
        };

        let variables_ok = self.variable_bounds.iter().zip(solution)
            .all(|(bounds, value)| within(bounds, value));
        if !variables_ok {
            return Ok(false);
        }

        for constraint in self.constraints() {
            let activity = self.constraint_activity(constraint, solution)?;
            if !within(&self.constraint_bounds[constraint.0], &activity) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn check_solution_length(&self, solution: &[OF]) -> Result<(), LinearProgramError> {
        if solution.len() == self.nr_variables() {
            Ok(())
        } else {
            Err(LinearProgramError::DimensionMismatch(format!(
                "solution has {} values for {} variables", solution.len(), self.nr_variables(),
            )))
        }
    }
}

impl<F> GeneralForm<F> {
    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Change the direction of optimization.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    /// Whether variables created from a matrix are bounded below by zero.
    pub fn non_negative_default(&self) -> bool {
        self.non_negative_default
    }

    /// See `non_negative_default`.
    pub fn set_non_negative_default(&mut self, non_negative: bool) {
        self.non_negative_default = non_negative;
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraint_bounds.len()
    }

    /// All variables, in order of creation.
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        (0..self.nr_variables()).map(Variable)
    }

    /// All constraints, in order of creation.
    pub fn constraints(&self) -> impl Iterator<Item = Constraint> {
        (0..self.nr_constraints()).map(Constraint)
    }

    /// Objective function coefficients, indexed by variable.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Bounds of a variable.
    ///
    /// # Panics
    ///
    /// If the variable doesn't belong to this problem.
    pub fn variable_bounds(&self, variable: Variable) -> &Bounds<F> {
        &self.variable_bounds[variable.0]
    }

    /// Bounds of a constraint.
    ///
    /// # Panics
    ///
    /// If the constraint doesn't belong to this problem.
    pub fn constraint_bounds(&self, constraint: Constraint) -> &Bounds<F> {
        &self.constraint_bounds[constraint.0]
    }

    /// All coefficients of the constraint matrix, in order of creation.
    pub fn entries(&self) -> &[CoefficientEntry<F>] {
        &self.entries
    }

    /// The coefficient of a variable in a constraint, if it was set.
    pub fn coefficient(&self, constraint: Constraint, variable: Variable) -> Option<&F> {
        self.entry_index.get(&(constraint.0, variable.0))
            .map(|&position| &self.entries[position].value)
    }

    /// Whether this problem was rewritten into canonical form.
    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Iterate over the coefficients of a single constraint.
    ///
    /// This is a scan over all entries.
    pub fn iter_row(&self, constraint: Constraint) -> impl Iterator<Item = (Variable, &F)> {
        self.entries.iter()
            .filter(move |entry| entry.constraint == constraint)
            .map(|entry| (entry.variable, &entry.value))
    }

    /// Iterate over the coefficients of a single variable.
    ///
    /// This is a scan over all entries.
    pub fn iter_column(&self, variable: Variable) -> impl Iterator<Item = (Constraint, &F)> {
        self.entries.iter()
            .filter(move |entry| entry.variable == variable)
            .map(|entry| (entry.constraint, &entry.value))
    }
}
