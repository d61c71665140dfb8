//! Shot-based circuit sampling.

use std::time::Instant;
use tracing::{debug, instrument};

use alsvid_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::result::{Counts, ExecutionResult};
use crate::statevector::Statevector;

/// Default qubit capacity, guarding the 2^n amplitude allocation.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local statevector sampler.
///
/// Runs a circuit shot by shot: every shot starts from |0...0⟩, applies
/// each instruction in sequence, and samples one outcome from the final
/// amplitude distribution. Supports circuits up to ~20 qubits (limited
/// by memory).
pub struct Sampler {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl Sampler {
    /// Create a sampler with the default qubit capacity.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a sampler with a custom qubit capacity.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Get the qubit capacity.
    pub fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    /// Run a circuit for the given number of shots.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidShots`] for zero shots,
    /// [`SimError::CircuitTooLarge`] when the circuit exceeds the qubit
    /// capacity, and the underlying statevector errors for unbound
    /// parameters or matrix-less custom gates.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
        if shots == 0 {
            return Err(SimError::InvalidShots(
                "shot count must be at least 1".to_string(),
            ));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(SimError::CircuitTooLarge(format!(
                "circuit has {} qubits but the sampler supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        debug!(num_qubits, shots, "starting sampling run");

        let mut counts = Counts::new();
        for shot in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            for instruction in circuit.instructions() {
                sv.apply(instruction)?;
            }

            let outcome = sv.sample();
            counts.insert(sv.outcome_to_bitstring(outcome), 1);

            if shot > 0 && shot % 1000 == 0 {
                debug!(shot, "completed shots");
            }
        }

        let elapsed = start.elapsed();
        debug!(?elapsed, "sampling completed");

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::QubitId;

    #[test]
    fn test_bell_state_correlations() {
        let sampler = Sampler::new();

        let circuit = Circuit::bell().unwrap();
        let result = sampler.run(&circuit, 1000).unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[test]
    fn test_ghz_state_correlations() {
        let sampler = Sampler::new();

        let circuit = Circuit::ghz(3).unwrap();
        let result = sampler.run(&circuit, 1000).unwrap();

        // GHZ state should produce only 000 and 111
        let counts = &result.counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[test]
    fn test_deterministic_bitstring() {
        let sampler = Sampler::new();

        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.x(QubitId(1)).unwrap();
        circuit.measure_all().unwrap();

        let result = sampler.run(&circuit, 50).unwrap();
        assert_eq!(result.counts.get("01"), 50);
        assert_eq!(result.counts.most_frequent(), Some(("01", 50)));
    }

    #[test]
    fn test_too_many_qubits() {
        let sampler = Sampler::with_max_qubits(5);

        let circuit = Circuit::with_size("test", 10, 0);
        let result = sampler.run(&circuit, 100);

        assert!(matches!(result, Err(SimError::CircuitTooLarge(_))));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let sampler = Sampler::new();

        let circuit = Circuit::with_size("test", 1, 0);
        let result = sampler.run(&circuit, 0);

        assert!(matches!(result, Err(SimError::InvalidShots(_))));
    }

    #[test]
    fn test_unbound_parameter_surfaces() {
        let sampler = Sampler::new();

        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit
            .rx(alsvid_ir::ParameterExpression::symbol("theta"), QubitId(0))
            .unwrap();

        let result = sampler.run(&circuit, 10);
        assert!(matches!(result, Err(SimError::UnboundParameter(_))));
    }

    #[test]
    fn test_records_execution_time() {
        let sampler = Sampler::new();

        let circuit = Circuit::bell().unwrap();
        let result = sampler.run(&circuit, 10).unwrap();
        assert!(result.execution_time_ms.is_some());
    }
}
