//! Integration tests for the demo suite.
//!
//! These tests verify the demo circuits end to end: generation, sampling
//! with the local statevector sampler, and inversion roundtrips.

use alsvid_demos::circuits::{half_adder, teleportation_setup};
use alsvid_ir::{Circuit, inverse};
use alsvid_sim::{Sampler, Statevector};

/// Compose two circuits by replaying their instructions in sequence.
fn compose(name: &str, first: &Circuit, second: &Circuit) -> Circuit {
    let mut combined = first.copy_empty(name);
    for inst in first.instructions().iter().chain(second.instructions()) {
        combined.apply(inst.clone()).unwrap();
    }
    combined
}

/// Run every instruction of a circuit on a fresh statevector.
fn statevector_of(circuit: &Circuit) -> Statevector {
    let mut state = Statevector::new(circuit.num_qubits());
    for inst in circuit.instructions() {
        state.apply(inst).unwrap();
    }
    state
}

/// Test the half adder truth table across all four input pairs.
#[test]
fn test_half_adder_truth_table() {
    let cases = [
        (false, false, "000"),
        (true, false, "110"),
        (false, true, "010"),
        (true, true, "101"),
    ];

    let sampler = Sampler::new();
    for (a, b, expected) in cases {
        let circuit = half_adder(a, b);
        let result = sampler.run(&circuit, 100).unwrap();
        assert_eq!(
            result.counts.get(expected),
            100,
            "Wrong outcome for a={}, b={}",
            a,
            b
        );
    }
}

/// Test half adder circuit shape for all input pairs.
#[test]
fn test_half_adder_circuit_shape() {
    for (a, b) in [(false, false), (true, false), (false, true), (true, true)] {
        let circuit = half_adder(a, b);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
        assert!(circuit.depth() > 0);
    }
}

/// Test that inverting the half adder drops its measurements.
#[test]
fn test_half_adder_inverse_strips_measurements() {
    let circuit = half_adder(true, true);
    let inverted = inverse(&circuit).unwrap();

    assert_eq!(inverted.num_clbits(), 0);
    assert!(inverted.instructions().iter().all(|i| !i.is_measure()));
    // Input X gates, interior barrier, CCX, and CX survive.
    assert_eq!(inverted.num_ops(), 5);
}

/// Test that adder followed by its inverse restores |000⟩ on every shot.
#[test]
fn test_half_adder_roundtrip() {
    let mut gates_only = half_adder(true, true);
    gates_only.remove_final_measurements();
    let inverted = inverse(&gates_only).unwrap();
    let roundtrip = compose("roundtrip", &gates_only, &inverted);

    let sampler = Sampler::new();
    let result = sampler.run(&roundtrip, 100).unwrap();
    assert_eq!(
        result.counts.get("000"),
        100,
        "Inverse should undo the adder"
    );
}

/// Test that the teleportation setup prepares a GHZ state.
#[test]
fn test_teleportation_state_is_ghz() {
    let circuit = teleportation_setup();
    let state = statevector_of(&circuit);

    assert!((state.probability(0b000) - 0.5).abs() < 1e-9);
    assert!((state.probability(0b111) - 0.5).abs() < 1e-9);
    for outcome in 1..7 {
        assert!(
            state.probability(outcome) < 1e-12,
            "Unexpected weight on outcome {}",
            outcome
        );
    }
}

/// Test that the teleportation setup inverts back to |000⟩.
#[test]
fn test_teleportation_inversion_roundtrip() {
    let circuit = teleportation_setup();
    let inverted = inverse(&circuit).unwrap();
    let roundtrip = compose("roundtrip", &circuit, &inverted);

    let state = statevector_of(&roundtrip);
    assert!((state.probability(0) - 1.0).abs() < 1e-9);
}

/// Test that teleportation setup sampling shows only the two GHZ outcomes.
#[test]
fn test_teleportation_sampling_correlations() {
    let circuit = teleportation_setup();
    let sampler = Sampler::new();
    let result = sampler.run(&circuit, 500).unwrap();

    assert_eq!(
        result.counts.get("000") + result.counts.get("111"),
        500,
        "GHZ sampling should only produce |000⟩ and |111⟩"
    );
}
