//! Variational circuit layer for the AAVQE stack: a layered RY/CZ ansatz
//! and a dense statevector backend that turns an angle vector into an
//! energy expectation value.
//!
//! The two halves are deliberately separate. [`Ansatz`] is pure topology,
//! a flat gate list with angle slots assigned in application order, while
//! [`Statevector`] knows how to execute that list against `2^n` complex
//! amplitudes. Optimization loops only ever need [`evaluate_energy`], which
//! wires the two together:
//!
//! ```
//! use aavqe_circuit::{Ansatz, evaluate_energy};
//! use aavqe_operator::{kron_all, pauli_z};
//!
//! let ansatz = Ansatz::layered(2, 1);
//! let zz = kron_all([pauli_z(), pauli_z()]);
//! let energy = evaluate_energy(&ansatz, &[0.0; 6], &zz);
//! assert!((energy - 1.0).abs() < 1e-12);
//! ```
//!
//! Amplitude indices follow the operator crate's convention: qubit `q` is
//! bit `q` of the basis index.

pub mod ansatz;
pub mod statevector;

pub use ansatz::{Ansatz, Gate};
pub use statevector::{Statevector, evaluate_energy};
