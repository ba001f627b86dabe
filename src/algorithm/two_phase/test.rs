use crate::algorithm::{Configuration, MessageLevel, Method, OptimizationResult, Solver};
use crate::algorithm::two_phase::{artificial_primal, FeasibilityResult, primal, solve_canonical, TwoPhase};
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::{Phase, Tableau};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::number_types::rational::{Rational64, RationalBig};
use crate::error::LinearProgramError;
use crate::{R64, RB};

/// x0 + x1 + x2 = 3, x0 + 2 x1 + x3 = 4, minimize -x0 - x1.
fn tableau() -> Tableau<Rational64> {
    Tableau::<Rational64>::new(
        vec![
            vec![R64!(1), R64!(1), R64!(1), R64!(0)],
            vec![R64!(1), R64!(2), R64!(0), R64!(1)],
        ],
        vec![R64!(3), R64!(4)],
        vec![R64!(-1), R64!(-1), R64!(0), R64!(0)],
    )
}

#[test]
fn initial_basis() {
    let tableau = tableau();

    assert_eq!(tableau.phase(), Phase::One);
    assert_eq!(tableau.nr_rows(), 2);
    assert_eq!(tableau.nr_columns(), 6);
    assert_eq!(tableau.artificial_basis_rows(), vec![0, 1]);
    assert_eq!(tableau.objective_function_value(), R64!(7));
    assert_eq!(tableau.dual_values(), vec![R64!(1), R64!(1)]);
    assert_eq!(tableau.relative_cost(1, &tableau.dual_values()), R64!(-3));
    assert!(tableau.has_positive_artificial());
}

#[test]
fn pivot() {
    let mut tableau = tableau();

    let column = tableau.generate_column(1);
    assert_eq!(tableau.select_primal_pivot_row(&column), Some(1));
    tableau.bring_into_basis(1, 1, &column);

    assert!(tableau.is_in_basis(1));
    assert!(!tableau.is_in_basis(5));
    assert_eq!(tableau.basis_index(1), 1);
    assert_eq!(tableau.current_bfs(), vec![R64!(0), R64!(2), R64!(0), R64!(0)]);
    assert_eq!(tableau.objective_function_value(), R64!(1));
    assert_eq!(tableau.generate_column(1), vec![R64!(0), R64!(1)]);
    assert_eq!(tableau.generate_element(0, 0), R64!(1, 2));
}

#[test]
fn ratio_test_ties() {
    let tableau = Tableau::<Rational64>::new(
        vec![vec![R64!(1)], vec![R64!(2)], vec![R64!(-1)]],
        vec![R64!(1), R64!(2), R64!(0)],
        vec![R64!(1)],
    );

    // Rows 0 and 1 have the same ratio, row 2 has a negative coefficient
    assert_eq!(tableau.select_primal_pivot_row(&tableau.generate_column(0)), Some(0));
    // Artificial columns only have a positive entry in their own row
    assert_eq!(tableau.select_primal_pivot_row(&[R64!(0), R64!(0), R64!(-1)]), None);
}

#[test]
fn both_phases() {
    let mut tableau = tableau();

    let feasibility = artificial_primal::<Rational64, FirstProfitable>(&mut tableau, MessageLevel::Off);
    assert_eq!(feasibility, FeasibilityResult::Feasible { redundant_rows: vec![] });
    assert_eq!(tableau.objective_function_value(), R64!(0));
    assert!(tableau.artificial_basis_rows().is_empty());

    tableau.start_phase_two();
    let result = primal::<Rational64, FirstProfitable>(&mut tableau, MessageLevel::Verbose);
    assert_eq!(result, OptimizationResult::FiniteOptimum(vec![R64!(2), R64!(1), R64!(0), R64!(0)]));
    assert_eq!(tableau.objective_function_value(), R64!(-3));
}

#[test]
fn infeasible_phase_one() {
    // x0 + x1 = 1, x0 + x1 = 2
    let mut tableau = Tableau::<Rational64>::new(
        vec![vec![R64!(1), R64!(1)], vec![R64!(1), R64!(1)]],
        vec![R64!(1), R64!(2)],
        vec![R64!(0), R64!(0)],
    );

    let feasibility = artificial_primal::<Rational64, FirstProfitable>(&mut tableau, MessageLevel::Off);
    assert_eq!(feasibility, FeasibilityResult::Infeasible);
}

#[test]
fn redundant_row() {
    // x0 + x1 = 1, 2 x0 + 2 x1 = 2, and an empty row 0 = 0
    let mut tableau = Tableau::<Rational64>::new(
        vec![
            vec![R64!(1), R64!(1)],
            vec![R64!(2), R64!(2)],
            vec![R64!(0), R64!(0)],
        ],
        vec![R64!(1), R64!(2), R64!(0)],
        vec![R64!(1), R64!(0)],
    );

    let feasibility = artificial_primal::<Rational64, FirstProfitable>(&mut tableau, MessageLevel::Off);
    assert_eq!(feasibility, FeasibilityResult::Feasible { redundant_rows: vec![1, 2] });

    tableau.start_phase_two();
    let result = primal::<Rational64, FirstProfitable>(&mut tableau, MessageLevel::Off);
    assert_eq!(result, OptimizationResult::FiniteOptimum(vec![R64!(0), R64!(1)]));
}

#[test]
fn canonical() {
    // max x0 s.t. x0 <= 5
    let mut problem = GeneralForm::<RationalBig>::new(Objective::Maximize);
    let x = problem.make_non_negative_variable();
    let c = problem.make_constraint(None, Some(RB!(5))).unwrap();
    problem.set_objective_coefficient(x, RB!(1), false).unwrap();
    problem.set_constraint_coefficient(c, x, RB!(1), false).unwrap();

    let canonical = problem.canonical_form().unwrap();
    // Canonical variables: x0, slack
    assert_eq!(
        solve_canonical::<RationalBig>(&canonical, MessageLevel::Off),
        OptimizationResult::FiniteOptimum(vec![RB!(5), RB!(0)]),
    );
}

#[test]
fn no_constraints() {
    let mut problem = GeneralForm::<RationalBig>::new(Objective::Minimize);
    let x = problem.make_variable(Some(RB!(1)), None);
    let y = problem.make_variable(Some(RB!(-2)), Some(RB!(3)));
    problem.set_objective_coefficient(x, RB!(1), false).unwrap();
    problem.set_objective_coefficient(y, RB!(-1), false).unwrap();

    let result = Solver::<RationalBig>::solve(&TwoPhase, &problem, &Configuration::default());
    assert_eq!(result, Ok(OptimizationResult::FiniteOptimum(vec![RB!(1), RB!(3)])));

    problem.set_objective(Objective::Maximize);
    assert_eq!(Solver::<RationalBig>::solve(&TwoPhase, &problem, &Configuration::default()), Ok(OptimizationResult::Unbounded));
}

#[test]
fn empty_rows() {
    let mut problem = GeneralForm::<RationalBig>::new(Objective::Minimize);
    problem.make_non_negative_variable();
    problem.make_constraint(Some(RB!(0)), Some(RB!(0))).unwrap();
    assert_eq!(
        Solver::<RationalBig>::solve(&TwoPhase, &problem, &Configuration::default()),
        Ok(OptimizationResult::FiniteOptimum(vec![RB!(0)])),
    );

    problem.make_constraint(Some(RB!(1)), Some(RB!(1))).unwrap();
    assert_eq!(Solver::<RationalBig>::solve(&TwoPhase, &problem, &Configuration::default()), Ok(OptimizationResult::Infeasible));
}

#[test]
fn unsupported_configuration() {
    let problem = GeneralForm::<RationalBig>::from_matrix(
        Objective::Minimize, true, &[vec![RB!(1)]], &[RB!(1)], &[RB!(1)], &[ConstraintType::Greater],
    ).unwrap();

    for method in [Method::DualSimplex, Method::InteriorPoint] {
        let configuration = Configuration { method, ..Configuration::default() };
        assert!(matches!(
            Solver::<RationalBig>::solve(&TwoPhase, &problem, &configuration),
            Err(LinearProgramError::UnsupportedOperation(_)),
        ));
    }

    let configuration = Configuration { presolve: true, ..Configuration::default() };
    assert!(matches!(
        Solver::<RationalBig>::solve(&TwoPhase, &problem, &configuration),
        Err(LinearProgramError::UnsupportedOperation(_)),
    ));

    let configuration = Configuration { message_level: MessageLevel::Verbose, ..Configuration::default() };
    assert_eq!(Solver::<RationalBig>::solve(&TwoPhase, &problem, &configuration), Ok(OptimizationResult::FiniteOptimum(vec![RB!(1)])));
}

#[test]
fn float() {
    let problem = GeneralForm::<f64>::from_matrix(
        Objective::Maximize, true, &[vec![1.0, 1.0]], &[0.3], &[1.0, 2.0], &[],
    ).unwrap();

    match Solver::<f64>::solve(&TwoPhase, &problem, &Configuration::default()) {
        Ok(OptimizationResult::FiniteOptimum(solution)) => {
            approx::assert_abs_diff_eq!(solution[0], 0.0);
            approx::assert_abs_diff_eq!(solution[1], 0.3);
        },
        other => panic!("unexpected result {:?}", other),
    }
}
