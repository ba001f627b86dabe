use exact_lp::data::linear_program::elements::Objective;
use exact_lp::data::linear_program::general_form::GeneralForm;
use exact_lp::data::number_types::rational::Rational64;
use exact_lp::error::LinearProgramError;
use exact_lp::io::mps::export;
use exact_lp::R64;

#[test]
fn float() {
    let mut problem = GeneralForm::<f64>::new(Objective::Minimize);
    let x = problem.make_variable(Some(1.0), None);
    let c = problem.make_constraint(None, Some(3.0)).unwrap();
    problem.set_objective_coefficient(x, 2.0, false).unwrap();
    problem.set_constraint_coefficient(c, x, 1.5, false).unwrap();

    assert_eq!(export::<f64>(&problem).unwrap(), "\
NAME PROG
ROWS
 N  OBJ
 L  ROW1
COLUMNS
 X1 OBJ 2
 X1 ROW1 1.5
RHS
 RHS ROW1 3
BOUNDS
 LO BND X1 1
ENDATA
");
}

#[test]
fn rational() {
    let mut problem = GeneralForm::<Rational64>::new(Objective::Maximize);
    problem.make_variable(Some(R64!(1, 2)), None);

    assert!(matches!(export::<Rational64>(&problem), Err(LinearProgramError::UnsupportedOperation(_))));
}
