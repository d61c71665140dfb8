//! End-to-end sampling tests.
//!
//! These tests exercise the sampler against circuits built and inverted
//! with `alsvid-ir`, including the identity property: a circuit composed
//! with its inverse leaves the register in |0...0⟩.

use std::f64::consts::PI;

use alsvid_ir::{Circuit, QubitId, inverse};
use alsvid_sim::Sampler;
use proptest::prelude::*;

/// Helper: the half adder over two input bits.
///
/// q0 and q1 hold the inputs, CCX writes the carry to q2, CX folds the
/// sum into q1.
fn half_adder(a: bool, b: bool) -> Circuit {
    let mut circuit = Circuit::with_size("half_adder", 3, 0);
    if a {
        circuit.x(QubitId(0)).unwrap();
    }
    if b {
        circuit.x(QubitId(1)).unwrap();
    }
    circuit.barrier_all().unwrap();
    circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.barrier_all().unwrap();
    circuit.measure_all().unwrap();
    circuit
}

/// Helper: concatenate two circuits over the same register.
fn compose(name: &str, first: &Circuit, second: &Circuit) -> Circuit {
    let mut combined = first.copy_empty(name);
    for inst in first.instructions().iter().chain(second.instructions()) {
        combined.apply(inst.clone()).unwrap();
    }
    combined
}

/// Helper: the gate portion of a circuit, trailing terminals removed.
fn gates_only(circuit: &Circuit) -> Circuit {
    let mut stripped = circuit.clone();
    stripped.remove_final_measurements();
    stripped
}

// ============================================================================
// Test 1: Half adder truth table, deterministic across shots
// ============================================================================

#[test]
fn test_half_adder_truth_table() {
    let sampler = Sampler::new();

    // (a, b, expected bitstring with qubit 0 leftmost: q0 sum carry)
    let cases = [
        (false, false, "000"),
        (true, false, "110"),
        (false, true, "010"),
        (true, true, "101"),
    ];

    for (a, b, expected) in cases {
        let circuit = half_adder(a, b);
        let result = sampler.run(&circuit, 200).unwrap();

        assert_eq!(
            result.counts.get(expected),
            200,
            "half_adder({a}, {b}) must read {expected} on every shot"
        );
        assert_eq!(result.counts.len(), 1);
    }
}

#[test]
fn test_half_adder_carry_for_one_plus_one() {
    let sampler = Sampler::new();
    let result = sampler.run(&half_adder(true, true), 100).unwrap();

    // 1 + 1 = 10 in binary: sum bit q1 = 0, carry q2 = 1.
    assert_eq!(result.counts.most_frequent(), Some(("101", 100)));
}

// ============================================================================
// Test 2: Circuit followed by its inverse is the identity
// ============================================================================

#[test]
fn test_half_adder_roundtrip_is_identity() {
    let circuit = half_adder(true, true);
    let inverted = inverse(&circuit).unwrap();

    // The inverse undoes the gate portion, so gates + inverse lands back
    // on |000⟩.
    let roundtrip = compose("roundtrip", &gates_only(&circuit), &inverted);

    let sampler = Sampler::new();
    let result = sampler.run(&roundtrip, 100).unwrap();
    assert_eq!(
        result.counts.get("000"),
        100,
        "circuit followed by its inverse must restore |000⟩"
    );
}

#[test]
fn test_parameterized_roundtrip_is_identity() {
    let mut circuit = Circuit::with_size("rotations", 2, 0);
    circuit.rx(0.3, QubitId(0)).unwrap();
    circuit.ry(1.1, QubitId(1)).unwrap();
    circuit.crz(PI / 5.0, QubitId(0), QubitId(1)).unwrap();
    circuit.rzz(0.7, QubitId(0), QubitId(1)).unwrap();
    circuit.u(0.2, 0.4, 0.6, QubitId(0)).unwrap();

    let inverted = inverse(&circuit).unwrap();
    let roundtrip = compose("roundtrip", &circuit, &inverted);

    let sampler = Sampler::new();
    let result = sampler.run(&roundtrip, 100).unwrap();
    assert_eq!(result.counts.get("00"), 100);
}

#[test]
fn test_double_inverse_samples_like_original() {
    let circuit = half_adder(true, true);
    let twice = inverse(&inverse(&circuit).unwrap()).unwrap();

    let sampler = Sampler::new();
    let result = sampler.run(&twice, 100).unwrap();

    // Double inversion restores the gate sequence, so the deterministic
    // outcome survives even though the measures were stripped.
    assert_eq!(result.counts.get("101"), 100);
}

// ============================================================================
// Test 3: Terminal operations inside the sampled circuit
// ============================================================================

#[test]
fn test_reset_collapses_superposition() {
    let mut circuit = Circuit::with_size("test", 1, 0);
    circuit.h(QubitId(0)).unwrap();
    circuit.reset(QubitId(0)).unwrap();
    circuit.measure_all().unwrap();

    let sampler = Sampler::new();
    let result = sampler.run(&circuit, 100).unwrap();
    assert_eq!(result.counts.get("0"), 100);
}

#[test]
fn test_reset_collapses_minus_superposition() {
    // H then Z prepares (|0⟩ - |1⟩)/√2; the branches carry opposite
    // signs, but reset must still read 0 on every shot.
    let mut circuit = Circuit::with_size("test", 1, 0);
    circuit.h(QubitId(0)).unwrap();
    circuit.z(QubitId(0)).unwrap();
    circuit.reset(QubitId(0)).unwrap();
    circuit.measure_all().unwrap();

    let sampler = Sampler::new();
    let result = sampler.run(&circuit, 100).unwrap();
    assert_eq!(
        result.counts.get("0"),
        100,
        "reset must leave the qubit in |0⟩ regardless of branch phases"
    );
}

// ============================================================================
// Property: identity after roundtrip over random gate sequences
// ============================================================================

/// Gate operations drawn for the random circuits.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    S(u32),
    Rx(u32, f64),
    Ry(u32, f64),
    CX(u32, u32),
    Rzz(u32, u32, f64),
    CCX(u32, u32, u32),
}

impl GateOp {
    fn apply(&self, circuit: &mut Circuit) {
        match *self {
            GateOp::H(q) => {
                circuit.h(QubitId(q)).unwrap();
            }
            GateOp::X(q) => {
                circuit.x(QubitId(q)).unwrap();
            }
            GateOp::S(q) => {
                circuit.s(QubitId(q)).unwrap();
            }
            GateOp::Rx(q, theta) => {
                circuit.rx(theta, QubitId(q)).unwrap();
            }
            GateOp::Ry(q, theta) => {
                circuit.ry(theta, QubitId(q)).unwrap();
            }
            GateOp::CX(c, t) => {
                circuit.cx(QubitId(c), QubitId(t)).unwrap();
            }
            GateOp::Rzz(q1, q2, theta) => {
                circuit.rzz(theta, QubitId(q1), QubitId(q2)).unwrap();
            }
            GateOp::CCX(c1, c2, t) => {
                circuit.ccx(QubitId(c1), QubitId(c2), QubitId(t)).unwrap();
            }
        }
    }
}

/// Generate a random gate on a 3-qubit register.
fn arb_gate_op() -> impl Strategy<Value = GateOp> {
    prop_oneof![
        (0u32..3).prop_map(GateOp::H),
        (0u32..3).prop_map(GateOp::X),
        (0u32..3).prop_map(GateOp::S),
        (0u32..3, -PI..PI).prop_map(|(q, theta)| GateOp::Rx(q, theta)),
        (0u32..3, -PI..PI).prop_map(|(q, theta)| GateOp::Ry(q, theta)),
        (0u32..3, 0u32..3)
            .prop_filter("control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| GateOp::CX(c, t)),
        (0u32..3, 0u32..3, -PI..PI)
            .prop_filter("pair qubits must differ", |(a, b, _)| a != b)
            .prop_map(|(a, b, theta)| GateOp::Rzz(a, b, theta)),
        Just(GateOp::CCX(0, 1, 2)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sampling C followed by invert(C) always reads |000⟩.
    #[test]
    fn prop_roundtrip_restores_zero_state(ops in prop::collection::vec(arb_gate_op(), 0..15)) {
        let mut circuit = Circuit::with_size("prop", 3, 0);
        for op in &ops {
            op.apply(&mut circuit);
        }

        let inverted = inverse(&circuit).unwrap();
        let roundtrip = compose("roundtrip", &circuit, &inverted);

        let sampler = Sampler::new();
        let result = sampler.run(&roundtrip, 5).unwrap();
        prop_assert_eq!(result.counts.get("000"), 5);
    }
}
