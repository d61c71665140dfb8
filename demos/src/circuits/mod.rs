//! Quantum circuit generators for demos.

pub mod half_adder;
pub mod teleportation;

pub use half_adder::half_adder;
pub use teleportation::teleportation_setup;
