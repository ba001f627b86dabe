//! max 0.6 x1 + 0.5 x2 s.t. x1 + 2 x2 <= 1, 3 x1 + x2 <= 2, x >= 0.
use approx::assert_abs_diff_eq;

use crate::algorithm::{Configuration, OptimizationResult, Solver};
use crate::algorithm::two_phase::{solve_canonical, TwoPhase};
use crate::algorithm::MessageLevel;
use crate::data::linear_program::elements::{ConstraintType, Objective, Status};
use crate::data::linear_program::general_form::{Bounds, GeneralForm};
use crate::data::number_types::float::EPSILON;
use crate::data::number_types::rational::RationalBig;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::program::LinearProgram;
use crate::RB;

type T = RationalBig;

pub fn general_form<OF>(coefficients: [OF; 8]) -> GeneralForm<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let [a11, a12, a21, a22, b1, b2, c1, c2] = coefficients;

    GeneralForm::<OF>::from_matrix(
        Objective::Maximize,
        true,
        &[vec![a11, a12], vec![a21, a22]],
        &[b1, b2],
        &[c1, c2],
        &[ConstraintType::Less, ConstraintType::Less],
    ).unwrap()
}

fn rational() -> GeneralForm<T> {
    general_form::<T>([RB!(1), RB!(2), RB!(3), RB!(1), RB!(1), RB!(2), RB!(3, 5), RB!(1, 2)])
}

fn float() -> GeneralForm<f64> {
    general_form::<f64>([1.0, 2.0, 3.0, 1.0, 1.0, 2.0, 0.6, 0.5])
}

#[test]
fn canonical_form() {
    let canonical = rational().canonical_form().unwrap();
    let problem = canonical.problem();

    assert_eq!(problem.objective(), Objective::Minimize);
    assert_eq!(problem.cost(), &[RB!(-3, 5), RB!(-1, 2), RB!(0), RB!(0)]);
    assert_eq!(canonical.b(), vec![RB!(1), RB!(2)]);
    let rows = problem.constraints()
        .map(|constraint| problem.variables()
            .map(|variable| problem.coefficient(constraint, variable).cloned().unwrap_or(RB!(0)))
            .collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![
        vec![RB!(1), RB!(2), RB!(1), RB!(0)],
        vec![RB!(3), RB!(1), RB!(0), RB!(1)],
    ]);
    for variable in problem.variables() {
        assert_eq!(problem.variable_bounds(variable), &Bounds { lower: Some(RB!(0)), upper: None });
    }

    assert_eq!(
        solve_canonical::<T>(&canonical, MessageLevel::Off),
        OptimizationResult::FiniteOptimum(vec![RB!(3, 5), RB!(1, 5), RB!(0), RB!(0)]),
    );
}

#[test]
fn solution() {
    let result = Solver::<T>::solve(&TwoPhase, &rational(), &Configuration::default());
    assert_eq!(result, Ok(OptimizationResult::FiniteOptimum(vec![RB!(3, 5), RB!(1, 5)])));

    let mut program = LinearProgram::<T>::from_problem(rational());
    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.objective_value(), Ok(&RB!(23, 50)));
}

#[test]
fn solution_float() {
    let mut program = LinearProgram::<f64>::from_problem(float());

    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.status(), Some(Status::Optimal));
    let solution = program.solution().unwrap();
    assert_abs_diff_eq!(solution[0], 0.6, epsilon = EPSILON);
    assert_abs_diff_eq!(solution[1], 0.2, epsilon = EPSILON);
    assert_abs_diff_eq!(*program.objective_value().unwrap(), 0.46, epsilon = EPSILON);
}
