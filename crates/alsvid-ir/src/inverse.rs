//! Circuit inversion with trailing-measurement stripping.
//!
//! The adjoint of a circuit reverses the instruction sequence and replaces
//! every instruction with its own inverse, so that running the circuit
//! followed by its adjoint acts as the identity on the quantum state.
//! Circuits that end in measurements cannot be inverted directly;
//! [`inverse`] handles that case by stripping the trailing terminal block
//! from a copy and inverting the rest.
//!
//! # Limitation
//!
//! Only *trailing* terminal operations are stripped. A measurement or
//! reset in the middle of the sequence makes the circuit uninvertible and
//! [`inverse`] reports it as an error. Removing interior terminal
//! operations would silently change what the circuit computes, so no
//! deeper repair is attempted.

use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};

impl Circuit {
    /// The adjoint (inverse) of this circuit.
    ///
    /// Returns a new circuit named `<name>_dg` with the same registers,
    /// the instruction sequence reversed, every instruction replaced by
    /// its adjoint, and the global phase negated. The original circuit is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::Uninvertible`] if any instruction has no
    /// adjoint (measurements, resets, custom gates without a matrix).
    /// For the lenient variant that tolerates trailing measurements, use
    /// [`inverse`].
    pub fn adjoint(&self) -> IrResult<Self> {
        let mut inverted = self.copy_empty(format!("{}_dg", self.name()));
        inverted.set_global_phase(-self.global_phase());
        for instruction in self.instructions().iter().rev() {
            inverted.apply(instruction.adjoint()?)?;
        }
        Ok(inverted)
    }
}

/// Compute the inverse of a circuit, stripping trailing measurements.
///
/// First attempts a direct [`Circuit::adjoint`]. If that fails because
/// the sequence contains a non-invertible operation, the trailing block
/// of measurements, resets, and barriers is removed from a copy of the
/// input and the stripped copy is inverted instead. A circuit built as
/// `gates...; measure_all()` therefore inverts to the adjoint of its
/// gate portion.
///
/// The input circuit is never modified.
///
/// # Errors
///
/// Returns [`IrError::Uninvertible`] when a non-invertible operation
/// remains after the strip, i.e. anywhere except the trailing terminal
/// block. See the [module docs](self) for why interior terminal
/// operations are not repaired.
///
/// # Example
///
/// ```
/// use alsvid_ir::{Circuit, QubitId, inverse};
///
/// let mut circuit = Circuit::with_size("bell", 2, 0);
/// circuit.h(QubitId(0)).unwrap();
/// circuit.cx(QubitId(0), QubitId(1)).unwrap();
/// circuit.measure_all().unwrap();
///
/// // The trailing measurement is dropped, the gates come back reversed.
/// let inverted = inverse(&circuit).unwrap();
/// assert_eq!(inverted.num_ops(), 2);
/// assert_eq!(inverted.instructions()[0].name(), "cx");
/// assert_eq!(inverted.instructions()[1].name(), "h");
/// ```
pub fn inverse(circuit: &Circuit) -> IrResult<Circuit> {
    match circuit.adjoint() {
        Ok(inverted) => Ok(inverted),
        Err(IrError::Uninvertible { name }) => {
            debug!(
                circuit = circuit.name(),
                operation = %name,
                "direct inversion failed, stripping trailing terminal operations"
            );
            let mut stripped = circuit.clone();
            stripped.remove_final_measurements();
            stripped.adjoint()
        }
        Err(e) => Err(e),
    }
}
