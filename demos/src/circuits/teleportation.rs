//! Quantum teleportation setup circuit generator.
//!
//! Teleportation transfers the state of one qubit to another using a
//! shared entangled pair and two classical bits. This generator builds
//! the entanglement layer of the protocol: the sender's qubit is placed
//! in superposition and entangled with both the ancilla and the
//! receiver's qubit. Measurement and the classically-controlled
//! corrections are left to the caller.

use alsvid_ir::Circuit;
use alsvid_ir::qubit::QubitId;

/// Generate the entanglement layer of the teleportation protocol.
///
/// # Qubit layout
/// * Qubit 0 - sender's qubit, placed in superposition
/// * Qubit 1 - ancilla shared between sender and receiver
/// * Qubit 2 - receiver's qubit
///
/// # Returns
/// A 3-qubit circuit with no measurements, so it stays invertible and
/// its statevector can be inspected directly.
pub fn teleportation_setup() -> Circuit {
    let mut circuit = Circuit::with_size("teleportation_setup", 3, 0);

    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(2)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();

    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_creation() {
        let circuit = teleportation_setup();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.num_ops(), 3);
    }

    #[test]
    fn test_setup_has_no_measurements() {
        let circuit = teleportation_setup();
        assert!(circuit.instructions().iter().all(|i| i.is_gate()));
    }

    #[test]
    fn test_gate_sequence() {
        let circuit = teleportation_setup();
        let names: Vec<&str> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["h", "cx", "cx"]);
    }
}
