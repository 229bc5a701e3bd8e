//! Single-qubit operator constants.
//!
//! Process-wide immutable 2×2 matrices, initialized once on first use.

use std::sync::LazyLock;

use ndarray::array;
use num_complex::Complex64;

use crate::Operator;

fn re(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

static IDENTITY: LazyLock<Operator> = LazyLock::new(|| {
    array![
        [re(1.0), re(0.0)],
        [re(0.0), re(1.0)],
    ]
});

static PAULI_X: LazyLock<Operator> = LazyLock::new(|| {
    array![
        [re(0.0), re(1.0)],
        [re(1.0), re(0.0)],
    ]
});

static PAULI_Z: LazyLock<Operator> = LazyLock::new(|| {
    array![
        [re(1.0), re(0.0)],
        [re(0.0), re(-1.0)],
    ]
});

/// The 2×2 identity:
///
///   ⎡ 1  0 ⎤
///   ⎣ 0  1 ⎦
pub fn identity() -> &'static Operator {
    &IDENTITY
}

/// Pauli-X (bit flip):
///
///   ⎡ 0  1 ⎤
///   ⎣ 1  0 ⎦
pub fn pauli_x() -> &'static Operator {
    &PAULI_X
}

/// Pauli-Z (phase flip):
///
///   ⎡ 1   0 ⎤
///   ⎣ 0  -1 ⎦
pub fn pauli_z() -> &'static Operator {
    &PAULI_Z
}
