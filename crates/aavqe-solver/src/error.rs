//! Error types for the solver crate.

use thiserror::Error;

/// Errors produced while assembling or validating an adiabatic schedule.
///
/// Optimizer non-convergence is deliberately absent: a minimizer that runs
/// out of budget returns its best point as an ordinary value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolverError {
    /// The interpolation fraction is `t / t_max`, so the schedule needs at
    /// least one step beyond the start.
    #[error("t_max must be at least 1, got {0}")]
    InvalidSchedule(usize),

    /// Two operators that must act on the same register do not.
    #[error("{role} operator has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        /// Which operand is off: the reference or the problem Hamiltonian.
        role: &'static str,
        /// Dimension implied by the ansatz register, `2^n`.
        expected: usize,
        /// Dimension the operand actually has.
        actual: usize,
    },

    /// The warm-start parameter vector does not fit the ansatz.
    #[error("ansatz takes {expected} parameters, initial vector has {actual}")]
    ParameterCount {
        /// `2nL + n` for the configured ansatz.
        expected: usize,
        /// Length of the supplied vector.
        actual: usize,
    },
}

/// Result type for schedule operations.
pub type SolverResult<T> = Result<T, SolverError>;
