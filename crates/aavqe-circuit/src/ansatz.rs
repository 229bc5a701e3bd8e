//! Layered hardware-efficient ansatz with RY rotations and CZ entanglers.
//!
//! The circuit topology is fixed by the qubit count and layer depth; only the
//! rotation angles are trainable. Each layer applies a full round of RY
//! rotations, entangles even-offset neighbour pairs, applies a second RY
//! round, entangles odd-offset neighbour pairs, and closes the ring with a
//! CZ between the first and last qubit. A single RY round after the final
//! layer completes the circuit, for `2 * n * layers + n` angles overall.

/// One gate in the flattened ansatz sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Trainable rotation about the Y axis. `slot` indexes the angle vector.
    Ry { qubit: usize, slot: usize },
    /// Parameter-free controlled-Z entangler. Symmetric in its operands.
    Cz { control: usize, target: usize },
}

/// A fixed-topology variational circuit over `n_qubits` qubits.
///
/// The gate list is laid out once at construction; evaluation walks it in
/// order, so two ansaetze built with the same shape bind angles to gates
/// identically. Angle slots are assigned in gate order, round by round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ansatz {
    n_qubits: usize,
    n_layers: usize,
    gates: Vec<Gate>,
    n_parameters: usize,
}

impl Ansatz {
    /// Build the layered RY/CZ ansatz.
    ///
    /// The entangler ranges are half-open: on narrow registers they go empty
    /// without adjustment, so e.g. two qubits get no odd-offset pairs and a
    /// single qubit keeps only its ring-closing CZ, which pairs qubit 0 with
    /// itself and acts as a plain Z.
    ///
    /// ```
    /// use aavqe_circuit::Ansatz;
    ///
    /// let ansatz = Ansatz::layered(6, 2);
    /// assert_eq!(ansatz.num_parameters(), 2 * 6 * 2 + 6);
    /// ```
    pub fn layered(n_qubits: usize, n_layers: usize) -> Self {
        let mut gates = Vec::new();
        let mut slot = 0;
        let mut rotation_round = |gates: &mut Vec<Gate>| {
            for qubit in 0..n_qubits {
                gates.push(Gate::Ry { qubit, slot });
                slot += 1;
            }
        };

        for _ in 0..n_layers {
            rotation_round(&mut gates);
            for q in (0..n_qubits.saturating_sub(1)).step_by(2) {
                gates.push(Gate::Cz { control: q, target: q + 1 });
            }
            rotation_round(&mut gates);
            for q in (1..n_qubits.saturating_sub(2)).step_by(2) {
                gates.push(Gate::Cz { control: q, target: q + 1 });
            }
            gates.push(Gate::Cz {
                control: 0,
                target: n_qubits.saturating_sub(1),
            });
        }
        rotation_round(&mut gates);

        Self {
            n_qubits,
            n_layers,
            gates,
            n_parameters: slot,
        }
    }

    /// Number of qubits the circuit acts on.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of entangling layers.
    pub fn n_layers(&self) -> usize {
        self.n_layers
    }

    /// Length of the angle vector the circuit expects: `2 * n * layers + n`.
    pub fn num_parameters(&self) -> usize {
        self.n_parameters
    }

    /// The flattened gate sequence in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}
