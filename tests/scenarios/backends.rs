use approx::assert_abs_diff_eq;

use exact_lp::algorithm::{Configuration, OptimizationResult, Solver};
use exact_lp::algorithm::external::MicroLp;
use exact_lp::algorithm::two_phase::TwoPhase;
use exact_lp::data::linear_program::elements::{ConstraintType, Objective, Status};
use exact_lp::data::linear_program::general_form::GeneralForm;
use exact_lp::program::LinearProgram;

fn problems() -> Vec<GeneralForm<f64>> {
    vec![
        GeneralForm::<f64>::from_matrix(
            Objective::Maximize, true,
            &[vec![1.0, 2.0], vec![3.0, 1.0]], &[1.0, 2.0], &[0.6, 0.5], &[],
        ).unwrap(),
        GeneralForm::<f64>::from_matrix(
            Objective::Minimize, true,
            &[vec![3.0, -4.0], vec![1.0, 2.0], vec![1.0, 0.0]], &[12.0, 4.0, 1.0], &[3.0, 4.0],
            &[ConstraintType::Less, ConstraintType::Greater, ConstraintType::Greater],
        ).unwrap(),
        GeneralForm::<f64>::from_matrix(
            Objective::Minimize, false,
            &[vec![1.0, 1.0], vec![-1.0, 1.0]], &[1.0, -3.0], &[1.0, 2.0],
            &[ConstraintType::Equal, ConstraintType::Greater],
        ).unwrap(),
        GeneralForm::<f64>::from_matrix(
            Objective::Minimize, true, &[vec![1.0]], &[2.0], &[-1.0], &[ConstraintType::Greater],
        ).unwrap(),
    ]
}

#[test]
fn same_outcome() {
    for problem in problems() {
        let exact = Solver::<f64>::solve(&TwoPhase, &problem, &Configuration::default()).unwrap();
        let external = MicroLp.solve(&problem, &Configuration::default()).unwrap();

        assert_eq!(exact.status(), external.status());
        if let (OptimizationResult::FiniteOptimum(left), OptimizationResult::FiniteOptimum(right)) = (exact, external) {
            for (left, right) in left.into_iter().zip(right) {
                assert_abs_diff_eq!(left, right, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn facade() {
    let mut program = LinearProgram::<f64>::from_problem(problems().remove(0));

    assert_eq!(program.solve_with(&MicroLp), Ok(true));
    assert_eq!(program.status(), Some(Status::Optimal));
    assert_abs_diff_eq!(*program.objective_value().unwrap(), 0.46, epsilon = 1e-6);
}
