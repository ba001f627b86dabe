//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is dense: the constraint matrix and the inverse of the basis matrix are stored in
//! full. Each row has an artificial variable; these columns are not stored but generated when
//! needed, and they come after the columns of the problem.
use std::ops::Range;

use crate::data::number_types::traits::{inner_product, OrderedField, OrderedFieldRef};

/// Which cost function is currently minimized.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Minimize the sum of the artificial variables.
    One,
    /// Minimize the cost function of the problem.
    Two,
}

/// The data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a copy of the problem it solves and the data structures describing the current basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    phase: Phase,

    /// Rows of the constraint matrix, without the artificial columns.
    matrix: Vec<Vec<F>>,
    /// Cost of each non-artificial column.
    cost: Vec<F>,

    /// Inverse of the matrix of basis columns, stored by row.
    ///
    /// This attribute changes with a basis change.
    basis_inverse: Vec<Vec<F>>,
    /// Value of the basic variable of each row.
    basic_values: Vec<F>,
    /// Column index of the basic variable of each row.
    basis_indices: Vec<usize>,
    /// Whether each column, artificial columns included, is in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading.
    is_basic: Vec<bool>,
    /// Cost of the basic variable of each row, in the current phase.
    basis_costs: Vec<F>,
}

impl<OF> Tableau<OF>
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    /// Create a tableau in phase one with a basis of artificial variables.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Rows of the constraint matrix `A`, each of the same length as `cost`.
    /// * `b`: Nonnegative constraint values, one per row.
    /// * `cost`: Cost function to minimize in phase two.
    pub fn new(matrix: Vec<Vec<OF>>, b: Vec<OF>, cost: Vec<OF>) -> Self {
        let m = b.len();
        let n = cost.len();
        debug_assert_eq!(matrix.len(), m);
        debug_assert!(matrix.iter().all(|row| row.len() == n));
        debug_assert!(b.iter().all(|value| !value.is_less_than(&OF::zero())));

        let basis_inverse = (0..m)
            .map(|i| (0..m).map(|k| if i == k { OF::one() } else { OF::zero() }).collect())
            .collect();
        let mut is_basic = vec![false; n];
        is_basic.extend(vec![true; m]);

        Self {
            phase: Phase::One,
            matrix,
            cost,
            basis_inverse,
            basic_values: b,
            basis_indices: (n..n + m).collect(),
            is_basic,
            basis_costs: vec![OF::one(); m],
        }
    }

    /// Cost of a column in the current phase.
    fn phase_cost(&self, column: usize) -> OF {
        match (self.phase, column < self.nr_real_columns()) {
            (Phase::One, true) | (Phase::Two, false) => OF::zero(),
            (Phase::One, false) => OF::one(),
            (Phase::Two, true) => self.cost[column].clone(),
        }
    }

    /// A column of the constraint matrix extended with the artificial columns.
    fn original_column(&self, column: usize) -> Vec<OF> {
        debug_assert!(column < self.nr_columns());

        let n = self.nr_real_columns();
        if column < n {
            self.matrix.iter().map(|row| row[column].clone()).collect()
        } else {
            (0..self.nr_rows())
                .map(|i| if i == column - n { OF::one() } else { OF::zero() })
                .collect()
        }
    }

    /// The dual values `pi = c_B B^-1` for the current phase.
    pub fn dual_values(&self) -> Vec<OF> {
        (0..self.nr_rows())
            .map(|k| {
                self.basis_costs.iter().zip(&self.basis_inverse)
                    .fold(OF::zero(), |total, (cost, row)| total + cost * &row[k])
            })
            .collect()
    }

    /// Reduced cost `c_j - pi A_j` of a column.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the column.
    /// * `dual_values`: As computed by `dual_values` for the current basis.
    pub fn relative_cost(&self, column: usize, dual_values: &[OF]) -> OF {
        self.phase_cost(column) - inner_product::<OF>(dual_values, &self.original_column(column))
    }

    /// The column `B^-1 A_j` with respect to the current basis.
    pub fn generate_column(&self, column: usize) -> Vec<OF> {
        let original = self.original_column(column);

        self.basis_inverse.iter()
            .map(|row| inner_product::<OF>(row, &original))
            .collect()
    }

    /// A single element of `B^-1 A`.
    pub fn generate_element(&self, row: usize, column: usize) -> OF {
        inner_product::<OF>(&self.basis_inverse[row], &self.original_column(column))
    }

    /// Ratio test for a column that enters the basis.
    ///
    /// Among the rows with a positive coefficient, the first row with the smallest ratio between
    /// the value of its basic variable and that coefficient is selected.
    ///
    /// # Return value
    ///
    /// `None` if the column has no positive coefficient.
    pub fn select_primal_pivot_row(&self, column: &[OF]) -> Option<usize> {
        debug_assert_eq!(column.len(), self.nr_rows());

        let zero = OF::zero();
        column.iter()
            .enumerate()
            .filter(|(_, coefficient)| zero.is_less_than(coefficient))
            .map(|(i, coefficient)| (i, &self.basic_values[i] / coefficient))
            .fold(None, |smallest: Option<(usize, OF)>, (i, ratio)| {
                let is_smaller = smallest.as_ref().is_none_or(|(_, minimum)| ratio.is_less_than(minimum));
                if is_smaller { Some((i, ratio)) } else { smallest }
            })
            .map(|(i, _)| i)
    }

    /// Brings a column into the basis by a Gauss-Jordan update of the basis inverse and the basic
    /// values.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column that enters the basis, not yet basic.
    /// * `pivot_row_index`: Row whose basic variable leaves the basis.
    /// * `column`: The entering column with respect to the current basis, see `generate_column`.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize, column: &[OF]) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(!self.is_basic[pivot_column_index]);
        debug_assert!(column[pivot_row_index].is_nonzero());

        let pivot_value = &column[pivot_row_index];
        for value in &mut self.basis_inverse[pivot_row_index] {
            *value /= pivot_value.clone();
        }
        self.basic_values[pivot_row_index] /= pivot_value.clone();

        let pivot_row = self.basis_inverse[pivot_row_index].clone();
        let pivot_basic_value = self.basic_values[pivot_row_index].clone();
        for (i, factor) in column.iter().enumerate() {
            if i == pivot_row_index || factor.is_zero() {
                continue;
            }

            for (value, pivot_row_value) in self.basis_inverse[i].iter_mut().zip(&pivot_row) {
                *value -= factor * pivot_row_value;
            }
            self.basic_values[i] -= factor * &pivot_basic_value;
        }

        let leaving_column = self.basis_indices[pivot_row_index];
        self.is_basic[leaving_column] = false;
        self.is_basic[pivot_column_index] = true;
        self.basis_indices[pivot_row_index] = pivot_column_index;
        self.basis_costs[pivot_row_index] = self.phase_cost(pivot_column_index);
    }

    /// Move from phase one to phase two, replacing the artificial cost function by the cost
    /// function of the problem.
    pub fn start_phase_two(&mut self) {
        debug_assert_eq!(self.phase, Phase::One);

        self.phase = Phase::Two;
        self.basis_costs = self.basis_indices.iter()
            .map(|&column| self.phase_cost(column))
            .collect();
    }

    /// Value of the cost function of the current phase at the current basic solution.
    pub fn objective_function_value(&self) -> OF {
        inner_product::<OF>(&self.basis_costs, &self.basic_values)
    }

    /// Rows whose basic variable is artificial, in increasing order.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        let n = self.nr_real_columns();

        self.basis_indices.iter()
            .enumerate()
            .filter(|&(_, &column)| column >= n)
            .map(|(row, _)| row)
            .collect()
    }

    /// Whether an artificial variable has a positive value.
    pub fn has_positive_artificial(&self) -> bool {
        let zero = OF::zero();

        self.artificial_basis_rows().into_iter()
            .any(|row| zero.is_less_than(&self.basic_values[row]))
    }

    /// Values of all non-artificial variables at the current basic solution.
    pub fn current_bfs(&self) -> Vec<OF> {
        let mut values = vec![OF::zero(); self.nr_real_columns()];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            if column < self.nr_real_columns() {
                values[column] = self.basic_values[row].clone();
            }
        }

        values
    }
}

impl<F> Tableau<F> {
    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of columns, including the artificial ones.
    pub fn nr_columns(&self) -> usize {
        self.is_basic.len()
    }

    /// Number of columns of the problem, without the artificial ones.
    pub fn nr_real_columns(&self) -> usize {
        self.cost.len()
    }

    /// Columns that may enter the basis.
    ///
    /// Artificial columns never do: once they leave, they stay out.
    pub fn entering_candidates(&self) -> Range<usize> {
        0..self.nr_real_columns()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.is_basic[column]
    }

    /// Index of the basic variable of a row.
    pub fn basis_index(&self, row: usize) -> usize {
        self.basis_indices[row]
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<OF>(tableau: &Tableau<OF>) -> bool
where
    OF: OrderedField,
    for<'r> &'r OF: OrderedFieldRef<OF>,
{
    let zero = OF::zero();

    let values_nonnegative = tableau.basic_values.iter().all(|value| !value.is_less_than(&zero));
    let basis_consistent = tableau.is_basic.iter().filter(|&&basic| basic).count() == tableau.nr_rows()
        && tableau.basis_indices.iter().all(|&column| tableau.is_basic[column]);

    values_nonnegative && basis_consistent
}
