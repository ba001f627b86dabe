use approx::assert_abs_diff_eq;

use exact_lp::data::linear_program::elements::{ConstraintType, Objective, Status};
use exact_lp::data::number_types::rational::RationalBig;
use exact_lp::error::LinearProgramError;
use exact_lp::program::LinearProgram;
use exact_lp::RB;

type T = RationalBig;

fn rational(
    objective: Objective,
    a: &[&[(i64, i64)]],
    b: &[i64],
    c: &[(i64, i64)],
    relations: &[ConstraintType],
) -> LinearProgram<T> {
    let a = a.iter()
        .map(|row| row.iter().map(|&(numerator, denominator)| RB!(numerator, denominator)).collect::<Vec<T>>())
        .collect::<Vec<_>>();
    let b = b.iter().map(|&value| RB!(value)).collect::<Vec<_>>();
    let c = c.iter().map(|&(numerator, denominator)| RB!(numerator, denominator)).collect::<Vec<_>>();

    LinearProgram::<T>::from_matrix(objective, true, &a, &b, &c, relations).unwrap()
}

#[test]
fn maximize_two_inequalities() {
    let mut program = rational(
        Objective::Maximize,
        &[&[(1, 1), (2, 1)], &[(3, 1), (1, 1)]],
        &[1, 2],
        &[(3, 5), (1, 2)],
        &[],
    );

    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.status(), Some(Status::Optimal));
    assert_eq!(program.solution(), Ok(&[RB!(3, 5), RB!(1, 5)][..]));
    assert_eq!(program.objective_value(), Ok(&RB!(23, 50)));
}

#[test]
fn maximize_equalities() {
    let mut program = rational(
        Objective::Maximize,
        &[&[(1, 1), (1, 1), (0, 1)], &[(0, 1), (1, 1), (1, 1)]],
        &[1, 1],
        &[(1, 1), (2, 1), (-1, 1)],
        &[ConstraintType::Equal, ConstraintType::Equal],
    );

    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.solution(), Ok(&[RB!(0), RB!(1), RB!(0)][..]));
    assert_eq!(program.objective_value(), Ok(&RB!(2)));
}

#[test]
fn minimize_mixed() {
    let mut program = rational(
        Objective::Minimize,
        &[&[(3, 1), (-4, 1)], &[(1, 1), (2, 1)], &[(1, 1), (0, 1)]],
        &[12, 4, 1],
        &[(3, 1), (4, 1)],
        &[ConstraintType::Less, ConstraintType::Greater, ConstraintType::Greater],
    );

    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.solution(), Ok(&[RB!(1), RB!(3, 2)][..]));
    assert_eq!(program.objective_value(), Ok(&RB!(9)));
}

#[test]
fn shifted_variable() {
    let mut program = LinearProgram::<T>::new(Objective::Minimize);
    let x = program.make_variable(Some(RB!(-5)), None);
    program.set_objective_coefficient(x, RB!(1), false).unwrap();

    assert_eq!(program.solve(), Ok(true));
    assert_eq!(program.objective_value(), Ok(&RB!(-5)));
}

#[test]
fn infeasible() {
    let mut program = rational(
        Objective::Minimize,
        &[&[(1, 1), (1, 1)], &[(1, 1), (1, 1)]],
        &[3, 2],
        &[(1, 1), (0, 1)],
        &[ConstraintType::Greater, ConstraintType::Less],
    );

    assert_eq!(program.solve(), Ok(false));
    assert_eq!(program.status(), Some(Status::Infeasible));
    assert_eq!(program.solution(), Err(LinearProgramError::MissingSolution));
}

#[test]
fn unbounded() {
    let mut program = rational(Objective::Minimize, &[&[(1, 1)]], &[2], &[(-1, 1)], &[ConstraintType::Greater]);

    assert_eq!(program.solve(), Ok(false));
    assert_eq!(program.status(), Some(Status::Unbounded));
}

#[test]
fn float() {
    let mut program = LinearProgram::<f64>::from_matrix(
        Objective::Maximize,
        true,
        &[vec![1.0, 2.0], vec![3.0, 1.0]],
        &[1.0, 2.0],
        &[0.6, 0.5],
        &[],
    ).unwrap();

    assert_eq!(program.solve(), Ok(true));
    let solution = program.solution().unwrap().to_vec();
    assert_abs_diff_eq!(solution[0], 0.6, epsilon = 1e-9);
    assert_abs_diff_eq!(solution[1], 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(*program.objective_value().unwrap(), 0.46, epsilon = 1e-9);
    assert!(program.problem().is_feasible(&solution).unwrap());
}

#[test]
fn invalid_constraint() {
    let mut program = LinearProgram::<f64>::new(Objective::Minimize);

    assert_eq!(
        program.make_constraint(Some(f64::NEG_INFINITY), None),
        Err(LinearProgramError::InvalidConstraint),
    );
}
