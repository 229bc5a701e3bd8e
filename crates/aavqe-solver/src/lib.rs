//! Adiabatically assisted VQE: schedule driver and local minimizer.
//!
//! The solver sits on top of the model and circuit crates. An
//! [`AavqeSchedule`] owns a reference Hamiltonian, a problem Hamiltonian,
//! and an ansatz; [`AavqeSchedule::run`] interpolates between the two over
//! `t_max + 1` steps and re-optimizes the ansatz at each one with any
//! [`Optimizer`], warm-starting from the previous step's angles. The bundled
//! [`NelderMead`] is the bounded derivative-free search used by the driver.
//!
//! ```
//! use aavqe_circuit::Ansatz;
//! use aavqe_model::Hamiltonian;
//! use aavqe_solver::{AavqeSchedule, NelderMead};
//!
//! let schedule = AavqeSchedule::new(
//!     Hamiltonian::reference(2),
//!     Hamiltonian::transverse_ising(2, 1.0),
//!     Ansatz::layered(2, 1),
//! )
//! .with_t_max(1);
//! let optimizer = NelderMead::new().with_max_evals(500);
//!
//! let outcome = schedule.run(&optimizer, vec![0.0; 6])?;
//! assert_eq!(outcome.steps.len(), 2);
//! # Ok::<(), aavqe_solver::SolverError>(())
//! ```

pub mod error;
pub mod optimizers;
pub mod schedule;

pub use error::{SolverError, SolverResult};
pub use optimizers::{NelderMead, OptimizationResult, Optimizer};
pub use schedule::{AavqeOutcome, AavqeSchedule, StepRecord};
