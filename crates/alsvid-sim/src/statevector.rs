//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::PI;

use alsvid_ir::{GateKind, Instruction, InstructionKind, ParameterExpression, StandardGate};

use crate::error::{SimError, SimResult};

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The probability of measuring a given outcome index.
    pub fn probability(&self, outcome: usize) -> f64 {
        self.amplitudes[outcome].norm_sqr()
    }

    /// Apply an instruction to the statevector.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnboundParameter`] for gates with symbolic
    /// parameters and [`SimError::Unsupported`] for custom gates without a
    /// matrix.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(&gate.kind, &qubits)
            }
            InstructionKind::Reset => {
                self.reset(instruction.qubits[0].index());
                Ok(())
            }
            // Measurement is deferred to sampling; barriers are scheduling
            // hints. Neither modifies the amplitudes.
            InstructionKind::Measure | InstructionKind::Barrier => Ok(()),
        }
    }

    /// Apply a gate to specific qubits.
    fn apply_gate(&mut self, gate: &GateKind, qubits: &[usize]) -> SimResult<()> {
        match gate {
            GateKind::Standard(std_gate) => self.apply_standard_gate(std_gate, qubits),
            GateKind::Custom(custom) => match &custom.matrix {
                Some(matrix) => {
                    self.apply_matrix(matrix, qubits);
                    Ok(())
                }
                None => Err(SimError::Unsupported(format!(
                    "custom gate '{}' has no matrix",
                    custom.name
                ))),
            },
        }
    }

    /// Apply a standard gate.
    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize]) -> SimResult<()> {
        match gate {
            // Single-qubit gates
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            StandardGate::SX => self.apply_rx(qubits[0], PI / 2.0),
            StandardGate::SXdg => self.apply_rx(qubits[0], -PI / 2.0),
            StandardGate::Rx(theta) => self.apply_rx(qubits[0], bound(theta, gate.name())?),
            StandardGate::Ry(theta) => self.apply_ry(qubits[0], bound(theta, gate.name())?),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], bound(theta, gate.name())?),
            StandardGate::P(theta) => self.apply_phase(qubits[0], bound(theta, gate.name())?),
            StandardGate::U(theta, phi, lambda) => self.apply_u(
                qubits[0],
                bound(theta, gate.name())?,
                bound(phi, gate.name())?,
                bound(lambda, gate.name())?,
            ),

            // Two-qubit gates
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CY => self.apply_cy(qubits[0], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::CH => self.apply_ch(qubits[0], qubits[1]),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
            StandardGate::CRx(theta) => {
                self.apply_crx(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::CRy(theta) => {
                self.apply_cry(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::CRz(theta) => {
                self.apply_crz(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::CP(theta) => {
                self.apply_cp(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::RXX(theta) => {
                self.apply_rxx(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::RYY(theta) => {
                self.apply_ryy(qubits[0], qubits[1], bound(theta, gate.name())?);
            }
            StandardGate::RZZ(theta) => {
                self.apply_rzz(qubits[0], qubits[1], bound(theta, gate.name())?);
            }

            // Three-qubit gates
            StandardGate::CCX => self.apply_ccx(qubits[0], qubits[1], qubits[2]),
            StandardGate::CSwap => self.apply_cswap(qubits[0], qubits[1], qubits[2]),
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_u(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let e_il = Complex64::from_polar(1.0, lambda);
        let e_ip = Complex64::from_polar(1.0, phi);
        let e_ipl = Complex64::from_polar(1.0, phi + lambda);

        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - e_il * s * b;
                self.amplitudes[j] = e_ip * s * a + e_ipl * c * b;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cy(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_ch(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_crx(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_cry(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_crz(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & ctrl_mask != 0 {
                if i & tgt_mask == 0 {
                    self.amplitudes[i] *= phase_0;
                } else {
                    self.amplitudes[i] *= phase_1;
                }
            }
        }
    }

    fn apply_cp(&mut self, control: usize, target: usize, theta: f64) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_rxx(&mut self, q1: usize, q2: usize, theta: f64) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        // Pairs are double bit flips; picking states with q1 clear visits
        // each pair once.
        for i in 0..(1 << self.num_qubits) {
            if i & mask1 == 0 {
                let j = i ^ (mask1 | mask2);
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ryy(&mut self, q1: usize, q2: usize, theta: f64) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let pos_i_s = Complex64::new(0.0, s);
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask1 == 0 {
                let j = i ^ (mask1 | mask2);
                // Y⊗Y carries -1 on the |00⟩↔|11⟩ pairs and +1 on
                // |01⟩↔|10⟩, so the off-diagonal sign flips with parity.
                let off = if i & mask2 == 0 { pos_i_s } else { neg_i_s };
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + off * b;
                self.amplitudes[j] = off * a + c * b;
            }
        }
    }

    fn apply_rzz(&mut self, q1: usize, q2: usize, theta: f64) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let phase_even = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_odd = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 == b2 {
                self.amplitudes[i] *= phase_even;
            } else {
                self.amplitudes[i] *= phase_odd;
            }
        }
    }

    // =========================================================================
    // Three-qubit gate implementations
    // =========================================================================

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cswap(&mut self, control: usize, t1: usize, t2: usize) {
        let ctrl_mask = 1 << control;
        let t1_mask = 1 << t1;
        let t2_mask = 1 << t2;
        for i in 0..(1 << self.num_qubits) {
            if i & ctrl_mask != 0 {
                let b1 = (i & t1_mask) != 0;
                let b2 = (i & t2_mask) != 0;
                if b1 && !b2 {
                    let j = (i & !t1_mask) | t2_mask;
                    self.amplitudes.swap(i, j);
                }
            }
        }
    }

    // =========================================================================
    // Custom gates
    // =========================================================================

    /// Apply a row-major unitary matrix to the operand qubits.
    ///
    /// Local basis convention: bit t of the local index lives on
    /// `qubits[t]`, matching the standard-gate operand order.
    fn apply_matrix(&mut self, matrix: &[Complex64], qubits: &[usize]) {
        let dim = 1 << qubits.len();
        let full_mask = qubits.iter().fold(0usize, |m, &q| m | (1 << q));

        // Global bits set for each local basis index.
        let offsets: Vec<usize> = (0..dim)
            .map(|l| {
                qubits
                    .iter()
                    .enumerate()
                    .filter(|&(t, _)| l & (1 << t) != 0)
                    .fold(0usize, |m, (_, &q)| m | (1 << q))
            })
            .collect();

        let mut local = vec![Complex64::new(0.0, 0.0); dim];
        for base in 0..(1 << self.num_qubits) {
            if base & full_mask != 0 {
                continue;
            }
            for (l, amp) in local.iter_mut().enumerate() {
                *amp = self.amplitudes[base | offsets[l]];
            }
            for (row, &offset) in offsets.iter().enumerate() {
                let mut acc = Complex64::new(0.0, 0.0);
                for (col, &amp) in local.iter().enumerate() {
                    acc += matrix[row * dim + col] * amp;
                }
                self.amplitudes[base | offset] = acc;
            }
        }
    }

    fn reset(&mut self, qubit: usize) {
        // Simplified reset: project to |0⟩ and renormalize. A qubit with no
        // |0⟩ mass projects to the zero vector, so its set-bit amplitudes
        // move into the cleared-bit slots instead (measure |1⟩, then flip).
        let mask = 1 << qubit;
        let size = 1 << self.num_qubits;

        let mut kept_sq = 0.0;
        for i in 0..size {
            if i & mask == 0 {
                kept_sq += self.amplitudes[i].norm_sqr();
            }
        }

        if kept_sq > 1e-12 {
            for i in 0..size {
                if i & mask != 0 {
                    self.amplitudes[i] = Complex64::new(0.0, 0.0);
                }
            }
        } else {
            kept_sq = 0.0;
            for i in 0..size {
                if i & mask != 0 {
                    let j = i & !mask;
                    self.amplitudes[j] = self.amplitudes[i];
                    self.amplitudes[i] = Complex64::new(0.0, 0.0);
                    kept_sq += self.amplitudes[j].norm_sqr();
                }
            }
        }

        let norm = kept_sq.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }
    }

    /// Sample a measurement outcome.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }

    /// Convert measurement outcome to bitstring, qubit 0 leftmost.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }
}

/// Resolve a parameter to a concrete value.
fn bound(theta: &ParameterExpression, gate: &str) -> SimResult<f64> {
    theta.as_f64().ok_or_else(|| {
        SimError::UnboundParameter(format!("gate '{gate}' has unbound parameter '{theta}'"))
    })
}
