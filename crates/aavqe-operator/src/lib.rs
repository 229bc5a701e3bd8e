//! Dense operator algebra for AAVQE.
//!
//! Multi-qubit operators are built from single-qubit building blocks with the
//! Kronecker (tensor) product:
//!
//!   A ⊗ B ⊗ C ⊗ …
//!
//! folded left to right from the 1×1 scalar `1`, so a register operator on
//! `n` qubits is a `2^n × 2^n` complex matrix. Everything here is Hermitian
//! by construction downstream (sums of tensor products of Hermitian 2×2
//! factors), which is what makes the exact-diagonalization helpers in
//! [`spectrum`] valid.
//!
//! # Bit convention
//!
//! Qubit `q` occupies bit `q` of the basis-state index (qubit 0 is the least
//! significant bit). A caller assembling a register operator from per-qubit
//! factors must therefore pass the factor for qubit `n-1` *first*, so matrix
//! indices line up with the statevector convention.
//!
//! # Quick start
//!
//! ```rust
//! use aavqe_operator::{kron_all, pauli_z};
//!
//! // Z ⊗ Z on a two-qubit register
//! let zz = kron_all([pauli_z(), pauli_z()]);
//! assert_eq!(zz.dim(), (4, 4));
//! assert_eq!(zz[(0, 0)].re, 1.0);
//! assert_eq!(zz[(1, 1)].re, -1.0);
//! ```

pub mod kron;
pub mod pauli;
pub mod spectrum;

use ndarray::Array2;
use num_complex::Complex64;

/// Dense register operator: a square complex matrix of dimension `2^n`.
pub type Operator = Array2<Complex64>;

pub use kron::kron_all;
pub use pauli::{identity, pauli_x, pauli_z};
pub use spectrum::{eigenvalues, ground_energy};
