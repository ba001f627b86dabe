//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is currently made
/// independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a nonbasic column with negative relative cost together with that cost, or
    /// `None` if the current basis is optimal.
    fn select_primal_pivot_column<OF>(&mut self, tableau: &Tableau<OF>) -> Option<(usize, OF)>
    where
        OF: OrderedField,
        for<'r> &'r OF: OrderedFieldRef<OF>,
    ;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the ratio test picking the first row of minimum ratio, this rule is deterministic.
/// It doesn't prevent cycling: on degenerate problems, the method might not terminate.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<OF>(&mut self, tableau: &Tableau<OF>) -> Option<(usize, OF)>
    where
        OF: OrderedField,
        for<'r> &'r OF: OrderedFieldRef<OF>,
    {
        let zero = OF::zero();
        let dual_values = tableau.dual_values();

        tableau.entering_candidates()
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column, &dual_values)))
            .find(|(_, cost)| cost.is_less_than(&zero))
    }
}
