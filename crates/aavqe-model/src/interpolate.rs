//! Adiabatic interpolation between two Hamiltonians.

use aavqe_operator::Operator;
use num_complex::Complex64;

use crate::Hamiltonian;

/// The interpolated operator  `(1-s)·reference + s·problem`.
///
/// Allocates a fresh operator; neither operand is touched. At `s = 0` the
/// result equals the reference matrix exactly and at `s = 1` the problem
/// matrix exactly (element-wise: `1·a + 0·b == a` in IEEE arithmetic for the
/// finite entries these operators hold).
///
/// Both operands must share one dimension; the adiabatic schedule validates
/// this before its loop starts.
pub fn interpolate(reference: &Hamiltonian, problem: &Hamiltonian, s: f64) -> Operator {
    reference.matrix() * Complex64::from(1.0 - s) + problem.matrix() * Complex64::from(s)
}
