//! Derivative-free local minimizers.
//!
//! The adiabatic schedule only ever sees the [`Optimizer`] trait, so the
//! search procedure can be swapped out (or replaced by a test double) without
//! touching the Hamiltonian or circuit code.

mod nelder_mead;

pub use nelder_mead::{NelderMead, OptimizationResult};

/// A bounded local search over an unconstrained real parameter space.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial_params`.
    ///
    /// Implementations treat the objective as a black box and must respect
    /// their evaluation budget as a hard cap: when the budget runs out the
    /// best point found so far comes back with `converged = false`, never an
    /// error.
    fn minimize<F>(&self, objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64;
}
