//! Quantum half adder circuit generator.
//!
//! A half adder computes the sum and carry of two one-bit inputs. The
//! quantum version encodes the truth table in three qubits: CX computes
//! the sum (XOR) in place, and a Toffoli computes the carry (AND) onto
//! a fresh qubit.

use alsvid_ir::Circuit;
use alsvid_ir::qubit::QubitId;

/// Generate a half adder circuit for the inputs `a` and `b`.
///
/// # Qubit layout
/// * Qubit 0 - input `a` (unchanged by the circuit)
/// * Qubit 1 - input `b`, overwritten with the sum `a XOR b`
/// * Qubit 2 - carry `a AND b`
///
/// The carry must be computed before the sum: the Toffoli reads the
/// original `b`, which the CX then overwrites.
///
/// # Returns
/// A 3-qubit circuit with the inputs prepared, the adder gates applied,
/// and all qubits measured.
pub fn half_adder(a: bool, b: bool) -> Circuit {
    let mut circuit = Circuit::with_size("half_adder", 3, 0);

    // Prepare the inputs: qubits start in |0⟩, so X encodes a 1.
    if a {
        circuit.x(QubitId(0)).unwrap();
    }
    if b {
        circuit.x(QubitId(1)).unwrap();
    }
    circuit.barrier_all().unwrap();

    // Carry = a AND b, then sum = a XOR b.
    circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.barrier_all().unwrap();

    circuit.measure_all().unwrap();

    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_adder_creation() {
        let circuit = half_adder(true, true);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
    }

    #[test]
    fn test_input_preparation_varies() {
        // Input X gates: none for 0+0, two for 1+1.
        let zero = half_adder(false, false);
        let both = half_adder(true, true);
        assert_eq!(both.num_ops(), zero.num_ops() + 2);
    }

    #[test]
    fn test_adder_gates_present() {
        let circuit = half_adder(false, true);
        let names: Vec<&str> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert!(names.contains(&"ccx"));
        assert!(names.contains(&"cx"));
        assert!(names.contains(&"measure"));
    }

    #[test]
    fn test_carry_computed_before_sum() {
        let circuit = half_adder(true, true);
        let names: Vec<&str> = circuit.instructions().iter().map(|i| i.name()).collect();
        let ccx_pos = names.iter().position(|n| *n == "ccx").unwrap();
        let cx_pos = names.iter().position(|n| *n == "cx").unwrap();
        assert!(ccx_pos < cx_pos);
    }
}
