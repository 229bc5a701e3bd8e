//! The adiabatic AAVQE loop.
//!
//! Walks `t = 0 ..= t_max`, at each step forming the interpolated
//! Hamiltonian `(1-s)·H_ref + s·H_prob` with `s = t / t_max`, re-optimizing
//! the ansatz angles against it, and carrying each step's optimum into the
//! next step as a warm start. Small increments of `s` keep consecutive
//! optima close together, which is what makes the warm start cheaper than a
//! cold start against the full problem Hamiltonian.

use aavqe_circuit::{Ansatz, evaluate_energy};
use aavqe_model::{Hamiltonian, interpolate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::optimizers::Optimizer;

/// Outcome of a single adiabatic step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step index `t`.
    pub step: usize,
    /// Interpolation fraction `s = t / t_max`.
    pub fraction: f64,
    /// Best energy the minimizer found for this step's Hamiltonian.
    pub energy: f64,
    /// Objective evaluations the minimizer spent on this step.
    pub evaluations: usize,
    /// Whether the minimizer met its tolerances within budget. A `false`
    /// here is a normal outcome, not an error.
    pub converged: bool,
}

/// Final result of a schedule run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AavqeOutcome {
    /// Approximate ground energy of the problem Hamiltonian.
    pub energy: f64,
    /// Ansatz angles achieving `energy`.
    pub parameters: Vec<f64>,
    /// Per-step records in step order; the last one produced `energy`.
    pub steps: Vec<StepRecord>,
}

/// Adiabatic schedule tying together the two Hamiltonians and the ansatz.
///
/// The schedule owns its inputs and never mutates them; every step builds a
/// fresh interpolated operator. The minimizer is injected per run, so test
/// doubles can observe exactly what the loop feeds it.
#[derive(Debug, Clone)]
pub struct AavqeSchedule {
    reference: Hamiltonian,
    problem: Hamiltonian,
    ansatz: Ansatz,
    t_max: usize,
}

impl AavqeSchedule {
    /// Default number of interpolation steps beyond the start.
    pub const DEFAULT_T_MAX: usize = 5;

    /// Assemble a schedule morphing `reference` into `problem` under `ansatz`.
    pub fn new(reference: Hamiltonian, problem: Hamiltonian, ansatz: Ansatz) -> Self {
        Self {
            reference,
            problem,
            ansatz,
            t_max: Self::DEFAULT_T_MAX,
        }
    }

    /// Set the step count; a run visits `t = 0 ..= t_max`.
    #[must_use]
    pub fn with_t_max(mut self, t_max: usize) -> Self {
        self.t_max = t_max;
        self
    }

    /// The configured step count.
    pub fn t_max(&self) -> usize {
        self.t_max
    }

    /// The ansatz the schedule optimizes.
    pub fn ansatz(&self) -> &Ansatz {
        &self.ansatz
    }

    /// The easy starting Hamiltonian.
    pub fn reference(&self) -> &Hamiltonian {
        &self.reference
    }

    /// The target Hamiltonian.
    pub fn problem(&self) -> &Hamiltonian {
        &self.problem
    }

    /// Run the full schedule with `optimizer`, starting from `initial_params`.
    ///
    /// Validation happens before any optimization work; past that point the
    /// loop is a strict forward walk with no retries, and every step outcome
    /// (converged or not) is an ordinary value. The returned parameters are
    /// exactly the vector the final step's minimizer produced.
    pub fn run<O>(&self, optimizer: &O, initial_params: Vec<f64>) -> SolverResult<AavqeOutcome>
    where
        O: Optimizer,
    {
        self.validate(&initial_params)?;

        debug!(
            n_qubits = self.ansatz.n_qubits(),
            n_layers = self.ansatz.n_layers(),
            t_max = self.t_max,
            n_parameters = initial_params.len(),
            "starting adiabatic schedule"
        );

        let mut params = initial_params;
        let mut energy = f64::NAN;
        let mut steps = Vec::with_capacity(self.t_max + 1);

        for t in 0..=self.t_max {
            let fraction = t as f64 / self.t_max as f64;
            let hamiltonian = interpolate(&self.reference, &self.problem, fraction);

            let result = optimizer.minimize(
                |angles: &[f64]| evaluate_energy(&self.ansatz, angles, &hamiltonian),
                params,
            );

            params = result.optimal_params;
            energy = result.optimal_value;
            debug!(
                step = t,
                fraction,
                energy,
                evaluations = result.num_evaluations,
                converged = result.converged,
                "adiabatic step finished"
            );
            steps.push(StepRecord {
                step: t,
                fraction,
                energy,
                evaluations: result.num_evaluations,
                converged: result.converged,
            });
        }

        Ok(AavqeOutcome {
            energy,
            parameters: params,
            steps,
        })
    }

    fn validate(&self, initial_params: &[f64]) -> SolverResult<()> {
        if self.t_max == 0 {
            return Err(SolverError::InvalidSchedule(0));
        }
        let dim = 1usize << self.ansatz.n_qubits();
        if self.reference.dim() != dim {
            return Err(SolverError::DimensionMismatch {
                role: "reference",
                expected: dim,
                actual: self.reference.dim(),
            });
        }
        if self.problem.dim() != dim {
            return Err(SolverError::DimensionMismatch {
                role: "problem",
                expected: dim,
                actual: self.problem.dim(),
            });
        }
        let expected = self.ansatz.num_parameters();
        if initial_params.len() != expected {
            return Err(SolverError::ParameterCount {
                expected,
                actual: initial_params.len(),
            });
        }
        Ok(())
    }
}
