//! # Errors
//!
//! Programming and configuration mistakes are reported through `LinearProgramError`. Note that an
//! infeasible or unbounded problem is not an error: those are outcomes of solving, see
//! `data::linear_program::elements::Status`.
use thiserror::Error;

/// Anything that prevents a linear program from being built, transformed, solved or queried.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LinearProgramError {
    /// Sizes of matrices, vectors or indices are inconsistent with the problem dimensions.
    ///
    /// The contained `String` describes the mismatch.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    /// A constraint was created without any finite bound.
    #[error("a constraint needs at least one finite bound")]
    InvalidConstraint,
    /// The canonical form transformation was already applied to this problem.
    #[error("the problem is already in canonical form")]
    AlreadyTransformed,
    /// The requested operation is not available for this configuration or number type.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// A solution was requested, but the last solve did not end with an optimum.
    #[error("no solution is available")]
    MissingSolution,
}
