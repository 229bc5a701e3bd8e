//! Kronecker-product operator builder.

use ndarray::Array2;
use ndarray::linalg::kron;
use num_complex::Complex64;

use crate::Operator;

/// Tensor product of an ordered sequence of square matrices, left to right.
///
/// Folds with the identity `1 ⊗ M = M`, starting from the 1×1 scalar one, so
/// the sequence may hold a single factor (or many). The result dimension is
/// the product of the factor dimensions.
///
/// ```rust
/// use aavqe_operator::{kron_all, identity, pauli_z};
///
/// let op = kron_all([pauli_z(), identity(), pauli_z()]);
/// assert_eq!(op.dim(), (8, 8));
/// ```
pub fn kron_all<'a, I>(factors: I) -> Operator
where
    I: IntoIterator<Item = &'a Operator>,
{
    let one = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
    factors.into_iter().fold(one, |acc, m| kron(&acc, m))
}
