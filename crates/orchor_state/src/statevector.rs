//! Exact statevector representation and gate application.
//!
//! Amplitudes are stored in basis order with qubit q mapped to bit q of the
//! index, so `amps[0b110]` is the amplitude of |q2=1, q1=1, q0=0⟩. Gate
//! application walks the vector with bit masks, one amplitude pair per
//! single-qubit update.

use num_complex::Complex64;
use orchor_core::numeric::NORM_TOLERANCE;
use orchor_core::{Gate, OrchorError, OrchorResult, QubitId};
use std::f64::consts::FRAC_1_SQRT_2;

use orchor_core::Circuit;

/// Pure quantum state of a qubit register
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// Complex amplitudes, length 2^num_qubits
    amps: Vec<Complex64>,

    /// Register size
    num_qubits: usize,
}

impl Statevector {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create the |00...0⟩ state for `num_qubits` qubits
    pub fn zero(num_qubits: usize) -> Self {
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amps[0] = Complex64::new(1.0, 0.0);
        Self { amps, num_qubits }
    }

    /// Create from raw amplitudes (length must be a power of two, norm 1)
    pub fn from_amplitudes(amps: Vec<Complex64>) -> OrchorResult<Self> {
        let len = amps.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(OrchorError::InvalidStatevector(format!(
                "length {} is not a power of two",
                len
            )));
        }
        let num_qubits = len.trailing_zeros() as usize;
        let sv = Self { amps, num_qubits };
        let norm = sv.norm();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(OrchorError::InvalidStatevector(format!(
                "norm {} is not 1",
                norm
            )));
        }
        Ok(sv)
    }

    /// Evolve |00...0⟩ through the circuit's gate sequence.
    ///
    /// Exact mode handles unitary prefixes only; a measurement or a
    /// conditioned gate in the sequence is an error.
    pub fn from_circuit(circuit: &Circuit) -> OrchorResult<Self> {
        let mut state = Self::zero(circuit.num_qubits());
        for gate in circuit.gates() {
            state.apply_gate(gate)?;
        }
        Ok(state)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Register size
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Hilbert-space dimension (2^n)
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// Raw amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Amplitude of one basis state
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amps[index]
    }

    /// Probability of each basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Probability of one basis state
    pub fn probability(&self, index: usize) -> f64 {
        self.amps[index].norm_sqr()
    }

    /// Euclidean norm of the state
    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    // ========================================================================
    // Gate Application
    // ========================================================================

    /// Apply a unitary gate in place
    pub fn apply_gate(&mut self, gate: &Gate) -> OrchorResult<()> {
        if !gate.is_unitary() {
            return Err(OrchorError::NonUnitaryGate(gate.name().into()));
        }
        for &q in &gate.qubits() {
            if q >= self.num_qubits {
                return Err(OrchorError::QubitOutOfRange {
                    qubit: q,
                    max: self.num_qubits,
                });
            }
        }

        match gate {
            Gate::H(q) => self.apply_h(*q),
            Gate::X(q) => self.apply_x(*q),
            Gate::Y(q) => self.apply_y(*q),
            Gate::Z(q) => self.apply_z(*q),
            Gate::S(q) => self.apply_s(*q),
            Gate::Sdg(q) => self.apply_sdg(*q),
            Gate::Rx(q, angle) => self.apply_rx(*q, *angle),
            Gate::Ry(q, angle) => self.apply_ry(*q, *angle),
            Gate::Rz(q, angle) => self.apply_rz(*q, *angle),
            Gate::Cnot(c, t) => self.apply_cnot(*c, *t),
            // is_unitary() above excludes the rest
            _ => unreachable!("non-unitary gate slipped past the guard"),
        }
        Ok(())
    }

    // ========================================================================
    // Measurement Support
    // ========================================================================

    /// Probability that qubit `q` reads 1
    pub fn prob_one(&self, q: QubitId) -> f64 {
        let mask = 1usize << q;
        self.amps
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Collapse qubit `q` onto `outcome`, renormalizing the survivor branch
    pub fn collapse(&mut self, q: QubitId, outcome: bool) -> OrchorResult<()> {
        if q >= self.num_qubits {
            return Err(OrchorError::QubitOutOfRange {
                qubit: q,
                max: self.num_qubits,
            });
        }

        let mask = 1usize << q;
        let branch_mass: f64 = self
            .amps
            .iter()
            .enumerate()
            .filter(|(i, _)| ((i & mask) != 0) == outcome)
            .map(|(_, a)| a.norm_sqr())
            .sum();

        if branch_mass <= orchor_core::numeric::EIGENVALUE_FLOOR {
            return Err(OrchorError::CollapseFailed { qubit: q });
        }

        let scale = 1.0 / branch_mass.sqrt();
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if ((i & mask) != 0) == outcome {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    fn apply_h(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| {
            ((a + b) * FRAC_1_SQRT_2, (a - b) * FRAC_1_SQRT_2)
        });
    }

    fn apply_x(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| (b, a));
    }

    fn apply_y(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| {
            (b * Complex64::new(0.0, -1.0), a * Complex64::new(0.0, 1.0))
        });
    }

    fn apply_z(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| (a, -b));
    }

    fn apply_s(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| (a, b * Complex64::new(0.0, 1.0)));
    }

    fn apply_sdg(&mut self, q: usize) {
        self.apply_single_qubit_gate(q, |a, b| (a, b * Complex64::new(0.0, -1.0)));
    }

    fn apply_rx(&mut self, q: usize, angle: f64) {
        let c = (angle / 2.0).cos();
        let s = (angle / 2.0).sin();
        let minus_is = Complex64::new(0.0, -s);
        self.apply_single_qubit_gate(q, |a, b| (a * c + b * minus_is, a * minus_is + b * c));
    }

    fn apply_ry(&mut self, q: usize, angle: f64) {
        let c = (angle / 2.0).cos();
        let s = (angle / 2.0).sin();
        self.apply_single_qubit_gate(q, |a, b| (a * c - b * s, a * s + b * c));
    }

    fn apply_rz(&mut self, q: usize, angle: f64) {
        let phase_neg = Complex64::from_polar(1.0, -angle / 2.0);
        let phase_pos = Complex64::from_polar(1.0, angle / 2.0);
        self.apply_single_qubit_gate(q, |a, b| (a * phase_neg, b * phase_pos));
    }

    fn apply_single_qubit_gate<F>(&mut self, q: usize, f: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let mask = 1usize << q;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (new_i, new_j) = f(self.amps[i], self.amps[j]);
                self.amps[i] = new_i;
                self.amps[j] = new_j;
            }
        }
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    fn apply_cnot(&mut self, control: usize, target: usize) {
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;

        for i in 0..self.amps.len() {
            if (i & control_mask) != 0 && (i & target_mask) == 0 {
                let j = i | target_mask;
                self.amps.swap(i, j);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
