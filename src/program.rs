//! # Building and solving linear programs
//!
//! `LinearProgram` bundles a problem in general form with a solver configuration and the outcome
//! of the last solve.
use log::debug;

use crate::algorithm::{Configuration, OptimizationResult, Solver};
use crate::algorithm::two_phase::TwoPhase;
use crate::data::linear_program::elements::{ConstraintType, Objective, Status};
use crate::data::linear_program::general_form::{Constraint, GeneralForm, Variable};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::error::LinearProgramError;

/// A linear program together with the result of solving it.
///
/// Solving never modifies the problem: the solver works on a copy. Changing the problem discards
/// the result of the last solve.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    problem: GeneralForm<F>,
    configuration: Configuration,
    /// Outcome of the last solve, `None` if the problem wasn't solved since it last changed.
    status: Option<Status>,
    solution: Option<Solution<F>>,
}

impl<OF> LinearProgram<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Create an empty linear program with the default configuration.
    #[must_use]
    pub fn new(objective: Objective) -> Self {
        Self::from_problem(GeneralForm::<OF>::new(objective))
    }

    /// Wrap an existing problem.
    #[must_use]
    pub fn from_problem(problem: GeneralForm<OF>) -> Self {
        Self {
            problem,
            configuration: Configuration::default(),
            status: None,
            solution: None,
        }
    }

    /// Create a linear program from a dense matrix representation.
    ///
    /// See `GeneralForm::from_matrix`.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` if the sizes of the arguments are inconsistent.
    pub fn from_matrix(
        objective: Objective,
        non_negative: bool,
        a: &[Vec<OF>],
        b: &[OF],
        c: &[OF],
        relations: &[ConstraintType],
    ) -> Result<Self, LinearProgramError> {
        GeneralForm::<OF>::from_matrix(objective, non_negative, a, b, c, relations).map(Self::from_problem)
    }

    /// Add a variable, see `GeneralForm::make_variable`.
    pub fn make_variable(&mut self, lower: Option<OF>, upper: Option<OF>) -> Variable {
        self.invalidate();
        self.problem.make_variable(lower, upper)
    }

    /// Add a variable with bounds `[0, +inf)`.
    pub fn make_non_negative_variable(&mut self) -> Variable {
        self.invalidate();
        self.problem.make_non_negative_variable()
    }

    /// Add `n` variables with identical bounds.
    pub fn make_variables(&mut self, n: usize, lower: Option<OF>, upper: Option<OF>) -> Vec<Variable> {
        self.invalidate();
        self.problem.make_variables(n, lower, upper)
    }

    /// Add an `n` by `m` grid of variables with identical bounds.
    pub fn make_variables_2d(
        &mut self,
        n: usize,
        m: usize,
        lower: Option<OF>,
        upper: Option<OF>,
    ) -> Vec<Vec<Variable>> {
        self.invalidate();
        self.problem.make_variables_2d(n, m, lower, upper)
    }

    /// Add a constraint, see `GeneralForm::make_constraint`.
    ///
    /// # Errors
    ///
    /// An `InvalidConstraint` if neither bound is present.
    pub fn make_constraint(
        &mut self,
        lower: Option<OF>,
        upper: Option<OF>,
    ) -> Result<Constraint, LinearProgramError> {
        self.invalidate();
        self.problem.make_constraint(lower, upper)
    }

    /// Set or accumulate an objective coefficient.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` for a variable of another problem.
    pub fn set_objective_coefficient(
        &mut self,
        variable: Variable,
        value: OF,
        add: bool,
    ) -> Result<(), LinearProgramError> {
        self.invalidate();
        self.problem.set_objective_coefficient(variable, value, add)
    }

    /// Set or accumulate a constraint coefficient.
    ///
    /// # Errors
    ///
    /// A `DimensionMismatch` for a variable or constraint of another problem.
    pub fn set_constraint_coefficient(
        &mut self,
        constraint: Constraint,
        variable: Variable,
        value: OF,
        add: bool,
    ) -> Result<(), LinearProgramError> {
        self.invalidate();
        self.problem.set_constraint_coefficient(constraint, variable, value, add)
    }

    /// Change the direction of optimization.
    pub fn set_objective(&mut self, objective: Objective) {
        self.invalidate();
        self.problem.set_objective(objective);
    }

    /// Solve with the exact two phase solver.
    ///
    /// # Return value
    ///
    /// Whether an optimal solution was found. The precise outcome is available through `status`.
    ///
    /// # Errors
    ///
    /// When the configuration isn't supported or the problem is inconsistent.
    pub fn solve(&mut self) -> Result<bool, LinearProgramError> {
        self.solve_with(&TwoPhase)
    }

    /// Solve with the given solver.
    ///
    /// # Errors
    ///
    /// See `Solver::solve`.
    pub fn solve_with<S: Solver<OF>>(&mut self, solver: &S) -> Result<bool, LinearProgramError> {
        self.invalidate();

        let result = solver.solve(&self.problem, &self.configuration)?;
        let status = result.status();
        debug!("Solved linear program: {}", status);

        if let OptimizationResult::FiniteOptimum(values) = result {
            self.solution = Some(Solution::<OF>::new(&self.problem, values)?);
        }
        self.status = Some(status);

        Ok(status == Status::Optimal)
    }

    /// Outcome of the last solve, `None` if the problem wasn't solved since it last changed.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Values of the variables in the optimal solution, indexed by `Variable::index`.
    ///
    /// # Errors
    ///
    /// A `MissingSolution` if the last solve didn't end with an optimum.
    pub fn solution(&self) -> Result<&[OF], LinearProgramError> {
        self.solution.as_ref()
            .map(|solution| solution.values.as_slice())
            .ok_or(LinearProgramError::MissingSolution)
    }

    /// Value of the objective function at the optimal solution.
    ///
    /// # Errors
    ///
    /// A `MissingSolution` if the last solve didn't end with an optimum.
    pub fn objective_value(&self) -> Result<&OF, LinearProgramError> {
        self.solution.as_ref()
            .map(|solution| &solution.objective_value)
            .ok_or(LinearProgramError::MissingSolution)
    }

    /// Remove all variables and constraints.
    ///
    /// The direction of optimization, the default sign of variables and the configuration are
    /// kept.
    pub fn clear(&mut self) {
        let mut problem = GeneralForm::<OF>::new(self.problem.objective());
        problem.set_non_negative_default(self.problem.non_negative_default());
        self.problem = problem;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.status = None;
        self.solution = None;
    }
}

impl<F> LinearProgram<F> {
    /// The problem as it was built.
    pub fn problem(&self) -> &GeneralForm<F> {
        &self.problem
    }

    /// Solver configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Change the solver configuration.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }
}
