//! Alsvid Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Alsvid, together with the circuit inverter built on top of
//! them.
//!
//! # Overview
//!
//! A circuit is an ordered sequence of instructions over a fixed register
//! of qubits (plus classical bits for measurement targets). The high-level
//! [`Circuit`] API provides a convenient builder pattern for constructing
//! circuits; [`inverse`] produces the adjoint of a circuit, transparently
//! discarding trailing measurements.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, etc.) and
//!   [`CustomGate`] for user-defined operations
//! - **Parameters**: [`ParameterExpression`] for symbolic parameters in
//!   parameterized circuits
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Inversion**: [`Circuit::adjoint`] and [`inverse`] for computing
//!   inverse circuits
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.depth() >= 2);  // H, CX, measure
//! ```
//!
//! # Example: Inverting a Circuit
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId, inverse};
//!
//! let mut circuit = Circuit::with_size("prep", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! // The trailing measurement has no adjoint; inverse() strips it and
//! // inverts the gate portion: [CX, H].
//! let inverted = inverse(&circuit).unwrap();
//! assert_eq!(inverted.num_ops(), 2);
//!
//! // Double inversion restores the gate sequence.
//! let restored = inverse(&inverted).unwrap();
//! assert_eq!(restored.instructions()[0].name(), "h");
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Adjoint |
//! |------|--------|---------|
//! | `H` | 1 | self |
//! | `X`, `Y`, `Z` | 1 | self |
//! | `S`, `Sdg` | 1 | each other |
//! | `T`, `Tdg` | 1 | each other |
//! | `SX`, `SXdg` | 1 | each other |
//! | `Rx`, `Ry`, `Rz`, `P` | 1 | negated angle |
//! | `U(θ,φ,λ)` | 1 | `U(−θ,−λ,−φ)` |
//! | `CX`, `CY`, `CZ`, `CH` | 2 | self |
//! | `Swap` | 2 | self |
//! | `CRx`, `CRy`, `CRz`, `CP` | 2 | negated angle |
//! | `RXX`, `RYY`, `RZZ` | 2 | negated angle |
//! | `CCX`, `CSwap` | 3 | self |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod inverse;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use inverse::inverse;
pub use parameter::ParameterExpression;
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
