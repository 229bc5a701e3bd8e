//! Hamiltonian construction.
//!
//! Both builders assemble a dense `2^n × 2^n` Hermitian operator as a sum of
//! tensor-product terms, each term produced lazily by swapping a Pauli into
//! the identity chain at the relevant site(s).

use aavqe_operator::{Operator, identity, kron_all, pauli_x, pauli_z};
use num_complex::Complex64;

/// The originating model of a Hamiltonian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    /// -Σᵢ Zᵢ, the trivial reference whose ground state is |0…0⟩.
    Reference,
    /// Ring ZZ coupling plus a transverse field of the given strength.
    TransverseIsing {
        /// Coefficient λ of the Σᵢ Xᵢ field term.
        coupling: f64,
    },
}

/// A many-body Hamiltonian: the dense operator plus its model tag.
///
/// Built once per run and never mutated; the adiabatic interpolation in
/// [`crate::interpolate`] allocates a fresh operator instead.
#[derive(Debug, Clone)]
pub struct Hamiltonian {
    model: Model,
    n_qubits: usize,
    matrix: Operator,
}

impl Hamiltonian {
    /// Reference Hamiltonian  H₀ = -Σᵢ Zᵢ  on `n_qubits` qubits.
    ///
    /// Its ground state is the all-zero basis state with energy exactly
    /// `-n_qubits`, which is why it anchors the adiabatic schedule.
    pub fn reference(n_qubits: usize) -> Self {
        let z_sum = (0..n_qubits)
            .map(|i| placed(n_qubits, |q| q == i, pauli_z()))
            .fold(zeros(n_qubits), |acc, term| acc + term);
        Self {
            model: Model::Reference,
            n_qubits,
            matrix: -z_sum,
        }
    }

    /// Transverse-field Ising Hamiltonian on a ring of `n_qubits` spins:
    ///
    ///   H₁ = Σᵢ Zᵢ Z₍ᵢ₊₁₎ mod n  +  coupling · Σᵢ Xᵢ
    ///
    /// Each ring term places Z on the position *set* {i, (i+1) mod n}, so a
    /// single-qubit ring degenerates to one Z per term rather than Z².
    pub fn transverse_ising(n_qubits: usize, coupling: f64) -> Self {
        let ring = (0..n_qubits)
            .map(|i| placed(n_qubits, |q| q == i || q == (i + 1) % n_qubits, pauli_z()))
            .fold(zeros(n_qubits), |acc, term| acc + term);
        let field = (0..n_qubits)
            .map(|i| placed(n_qubits, |q| q == i, pauli_x()))
            .fold(zeros(n_qubits), |acc, term| acc + term);
        Self {
            model: Model::TransverseIsing { coupling },
            n_qubits,
            matrix: ring + field * Complex64::from(coupling),
        }
    }

    /// The model this Hamiltonian was built from.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Number of qubits in the register.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Matrix dimension, `2^n_qubits`.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// The dense operator.
    pub fn matrix(&self) -> &Operator {
        &self.matrix
    }

    /// Exact ground energy by dense diagonalization (diagnostics only).
    pub fn exact_ground_energy(&self) -> f64 {
        aavqe_operator::ground_energy(&self.matrix)
    }
}

/// Register operator with `op` at every site where `sites` holds and identity
/// elsewhere. Qubit 0 is the least-significant basis-index bit, hence the
/// rightmost Kronecker factor.
fn placed(n_qubits: usize, sites: impl Fn(usize) -> bool, op: &'static Operator) -> Operator {
    kron_all((0..n_qubits).rev().map(|q| if sites(q) { op } else { identity() }))
}

fn zeros(n_qubits: usize) -> Operator {
    let dim = 1 << n_qubits;
    Operator::zeros((dim, dim))
}
