//! Dense statevector simulation of the ansatz.
//!
//! States live in the computational basis with qubit `q` mapped to bit `q`
//! of the amplitude index, matching the operator crate's Kronecker layout.

use aavqe_operator::Operator;
use ndarray::ArrayView1;
use num_complex::Complex64;

use crate::ansatz::{Ansatz, Gate};

/// A pure state on `n` qubits as `2^n` complex amplitudes.
#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    n_qubits: usize,
}

impl Statevector {
    /// The computational basis state `|0...0>`.
    pub fn zero(n_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << n_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            n_qubits,
        }
    }

    /// Apply every gate of `ansatz` in sequence, reading RY angles out of
    /// `params` by slot.
    pub fn run(&mut self, ansatz: &Ansatz, params: &[f64]) {
        debug_assert_eq!(ansatz.n_qubits(), self.n_qubits);
        debug_assert_eq!(ansatz.num_parameters(), params.len());
        for gate in ansatz.gates() {
            match *gate {
                Gate::Ry { qubit, slot } => self.apply_ry(qubit, params[slot]),
                Gate::Cz { control, target } => self.apply_cz(control, target),
            }
        }
    }

    /// Rotate `qubit` about the Y axis by `theta`.
    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1usize << qubit;
        let cos = (theta / 2.0).cos();
        let sin = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = cos * a - sin * b;
                self.amplitudes[j] = sin * a + cos * b;
            }
        }
    }

    /// Flip the phase of every basis state with both operand qubits set.
    /// When `control == target` this degenerates to a Z on that qubit.
    fn apply_cz(&mut self, control: usize, target: usize) {
        let mask = (1usize << control) | (1usize << target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
    }

    /// The expectation value `Re <psi|H|psi>` of a dense Hermitian operator.
    pub fn expectation(&self, operator: &Operator) -> f64 {
        debug_assert_eq!(operator.nrows(), self.amplitudes.len());
        let psi = ArrayView1::from(self.amplitudes.as_slice());
        let h_psi = operator.dot(&psi);
        psi.iter()
            .zip(h_psi.iter())
            .map(|(a, b)| (a.conj() * b).re)
            .sum()
    }

    /// The raw amplitudes, indexed by computational basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Number of qubits in the register.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }
}

/// Energy of the ansatz state at `params` under `operator`.
///
/// Prepares `|0...0>`, runs the circuit, and measures the expectation value.
/// Pure in its inputs, so repeated calls with the same arguments return the
/// same value, which the optimization loop relies on.
pub fn evaluate_energy(ansatz: &Ansatz, params: &[f64], operator: &Operator) -> f64 {
    let mut state = Statevector::zero(ansatz.n_qubits());
    state.run(ansatz, params);
    state.expectation(operator)
}
