//! # Writing MPS files
//!
//! Writing of linear programs in the free format of the Mathematical Programming System. Rows are
//! named `ROW1`, `ROW2`, ..., columns `X1`, `X2`, ..., in order of creation.
use itertools::Itertools;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::{Bounds, GeneralForm};
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};
use crate::error::LinearProgramError;

/// Name of the problem in the `NAME` section.
const PROBLEM_NAME: &str = "PROG";
/// Name of the objective function row.
const OBJECTIVE_ROW: &str = "OBJ";

/// Write a linear program as text in the MPS format.
///
/// # Errors
///
/// An `UnsupportedOperation` for exact number types, whose values can't be written as decimal
/// numbers without losing precision. A `DimensionMismatch` if the problem is inconsistent.
pub fn export<OF>(problem: &GeneralForm<OF>) -> Result<String, LinearProgramError>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    if OF::EXACT {
        return Err(LinearProgramError::UnsupportedOperation(
            "exporting exact numbers in the MPS format".to_string(),
        ));
    }
    problem.check_dimensions()?;

    let mut lines = vec![format!("NAME {}", PROBLEM_NAME)];
    if problem.objective() == Objective::Maximize {
        lines.push("OBJSENSE".to_string());
        lines.push("    MAX".to_string());
    }

    lines.push("ROWS".to_string());
    lines.push(format!(" N  {}", OBJECTIVE_ROW));
    for constraint in problem.constraints() {
        let row_type = match problem.constraint_bounds(constraint) {
            Bounds { lower: Some(lower), upper: Some(upper) } if lower == upper => "E",
            Bounds { lower: Some(_), .. } => "G",
            Bounds { lower: None, .. } => "L",
        };
        lines.push(format!(" {}  {}", row_type, row_name(constraint.index())));
    }

    lines.push("COLUMNS".to_string());
    let mut columns = problem.entries().iter().into_group_map_by(|entry| entry.variable);
    for variable in problem.variables() {
        let column = column_name(variable.index());
        lines.push(format!(" {} {} {}", column, OBJECTIVE_ROW, problem.cost()[variable.index()]));

        let entries = columns.remove(&variable).unwrap_or_default();
        for entry in entries.into_iter().sorted_by_key(|entry| entry.constraint) {
            lines.push(format!(" {} {} {}", column, row_name(entry.constraint.index()), entry.value));
        }
    }

    lines.push("RHS".to_string());
    for constraint in problem.constraints() {
        let bounds = problem.constraint_bounds(constraint);
        if let Some(value) = bounds.lower.as_ref().or(bounds.upper.as_ref()) {
            lines.push(format!(" RHS {} {}", row_name(constraint.index()), value));
        }
    }

    let ranges = problem.constraints()
        .filter_map(|constraint| match problem.constraint_bounds(constraint) {
            Bounds { lower: Some(lower), upper: Some(upper) } if lower != upper => {
                Some(format!(" RNG {} {}", row_name(constraint.index()), upper - lower))
            },
            _ => None,
        })
        .collect::<Vec<_>>();
    if !ranges.is_empty() {
        lines.push("RANGES".to_string());
        lines.extend(ranges);
    }

    let bounds = problem.variables()
        .flat_map(|variable| bound_lines(&column_name(variable.index()), problem.variable_bounds(variable)))
        .collect::<Vec<_>>();
    if !bounds.is_empty() {
        lines.push("BOUNDS".to_string());
        lines.extend(bounds);
    }

    lines.push("ENDATA".to_string());
    Ok(lines.into_iter().map(|line| line + "\n").collect())
}

/// Lines of the `BOUNDS` section for a single variable.
///
/// Nothing is written for the default bounds `[0, +inf)`.
fn bound_lines<OF>(column: &str, bounds: &Bounds<OF>) -> Vec<String>
where
    OF: OrderedField,
{
    let line = |kind: &str| format!(" {} BND {}", kind, column);
    let line_with_value = |kind: &str, value: &OF| format!(" {} BND {} {}", kind, column, value);

    match (&bounds.lower, &bounds.upper) {
        (None, None) => vec![line("FR")],
        (None, Some(upper)) => vec![line("MI"), line_with_value("UP", upper)],
        (Some(lower), Some(upper)) if lower == upper => vec![line_with_value("FX", lower)],
        (Some(lower), upper) => {
            let mut lines = Vec::with_capacity(2);
            if !lower.is_zero() {
                lines.push(line_with_value("LO", lower));
            }
            if let Some(upper) = upper {
                lines.push(line_with_value("UP", upper));
            }
            lines
        },
    }
}

fn row_name(index: usize) -> String {
    format!("ROW{}", index + 1)
}

fn column_name(index: usize) -> String {
    format!("X{}", index + 1)
}
