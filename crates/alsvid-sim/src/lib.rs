//! Alsvid Local Statevector Sampler
//!
//! This crate provides a local quantum circuit sampler for testing,
//! development, and small-scale experiments. It uses statevector
//! simulation, which gives exact amplitudes but is limited to ~20 qubits.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation per shot
//! - **All Standard Gates**: Supports every gate from `alsvid-ir`, plus
//!   custom gates that carry a unitary matrix
//! - **Shot Sampling**: Probabilistic measurement with configurable shots
//! - **Typed Failures**: Unbound parameters and opaque custom gates are
//!   errors, never silent no-ops
//!
//! # Performance
//!
//! | Qubits | Memory per shot | Simulation Speed |
//! |--------|-----------------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25+ | ~512 MB+ | Not recommended |
//!
//! # Example
//!
//! ```
//! use alsvid_ir::Circuit;
//! use alsvid_sim::Sampler;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Run a Bell state for 1000 shots
//! let circuit = Circuit::bell()?;
//! let sampler = Sampler::new();
//! let result = sampler.run(&circuit, 1000)?;
//!
//! // Expect only the two correlated outcomes, ~50% each
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
//! assert_eq!(result.counts.get("01") + result.counts.get("10"), 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod result;
pub mod sampler;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use result::{Counts, ExecutionResult};
pub use sampler::{DEFAULT_MAX_QUBITS, Sampler};
pub use statevector::Statevector;
