//! Exact diagonalization of Hermitian operators.
//!
//! Used for post-run diagnostics and tests only; nothing in the
//! optimization loop touches an eigensolver.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::Operator;

/// All eigenvalues of a Hermitian operator, ascending.
///
/// The input must be Hermitian (every operator assembled from the Pauli
/// constants by real-weighted sums of tensor products is); eigenvalues of a
/// Hermitian matrix are real.
pub fn eigenvalues(op: &Operator) -> Vec<f64> {
    let (rows, cols) = op.dim();
    debug_assert_eq!(rows, cols, "operator must be square");
    let m = DMatrix::from_fn(rows, cols, |i, j| op[(i, j)]);
    let eigen = SymmetricEigen::new(m);
    let mut values: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    values.sort_by(f64::total_cmp);
    values
}

/// The smallest eigenvalue (ground energy) of a Hermitian operator.
pub fn ground_energy(op: &Operator) -> f64 {
    eigenvalues(op).into_iter().fold(f64::INFINITY, f64::min)
}
