//! Fixed microtubule scenarios.
//!
//! The three hard-coded gate sequences of the Orch-OR exploration: the
//! 5-qubit collapse demonstration, the full 13-protofilament microtubule,
//! and the 3-qubit tubulin triplet used for statevector analysis. The
//! sequences never branch on data; the only variation is whether the
//! backend can execute measurement-conditioned gates, resolved by the
//! caller once and passed in as a flag.

use orchor_core::{Basis, Circuit, CircuitBuilder};
use std::f64::consts::FRAC_PI_2;

// ============================================================================
// Scenario Constants
// ============================================================================

/// Register size of the collapse demonstration
pub const COLLAPSE_QUBITS: usize = 5;

/// Shots for the collapse demonstration
pub const COLLAPSE_SHOTS: u64 = 1024;

/// Register size of the full microtubule (one qubit per protofilament)
pub const MICROTUBULE_QUBITS: usize = 13;

/// Shots for the full microtubule run
pub const MICROTUBULE_SHOTS: u64 = 2048;

/// Register size of the tubulin triplet
pub const TUBULIN_QUBITS: usize = 3;

/// Phase rotation on α-tubulin (even) sites of the microtubule
pub const ALPHA_TUBULIN_PHASE: f64 = 0.1;

/// Y rotation on β-tubulin (odd) sites of the microtubule
pub const BETA_TUBULIN_ROTATION: f64 = 0.2;

/// Protofilaments receiving thermal phase noise
pub const THERMAL_NOISE_SITES: [usize; 5] = [0, 3, 6, 9, 12];

/// Central protofilaments receiving bit-flip noise
pub const BIT_FLIP_SITES: [usize; 2] = [5, 7];

/// Central protofilament whose measurement triggers collapse propagation
pub const COLLAPSE_TRIGGER: usize = 6;

/// Protofilaments measured in the X basis ("intuitive" readout)
pub const X_BASIS_SITES: [usize; 3] = [1, 3, 5];

/// Protofilament rotated by π/2 around Y before readout ("emotional")
pub const Y_ROTATED_SITE: usize = 9;

/// Protofilaments measured directly in the Z basis ("logical" readout)
pub const Z_BASIS_SITES: [usize; 7] = [0, 2, 4, 8, 10, 11, 12];

/// Tubulin-triplet phase rotation (α site)
pub const TRIPLET_ALPHA_PHASE: f64 = 0.3;

/// Tubulin-triplet Y rotation (β site)
pub const TRIPLET_BETA_ROTATION: f64 = 0.4;

/// Tubulin-triplet X rotation (coupling site)
pub const TRIPLET_COUPLING_ROTATION: f64 = 0.2;

/// Pairs analyzed for entanglement in the tubulin triplet
pub const TUBULIN_PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

// ============================================================================
// 5-Qubit Collapse Scenario
// ============================================================================

/// Unitary prefix of the collapse scenario: superposition, chain
/// entanglement, and the three decoherence Paulis, before any measurement
pub fn collapse_premeasurement() -> Circuit {
    CircuitBuilder::with_name(COLLAPSE_QUBITS, "five-protofilament collapse (pre-measurement)")
        .h(0)
        .h(1)
        .h(2)
        .cnot(0, 1)
        .cnot(1, 2)
        .cnot(2, 3)
        .cnot(3, 4)
        .z(0)
        .x(1)
        .y(2)
        .build()
}

/// The full 5-qubit collapse scenario.
///
/// `with_conditional` selects the measurement-conditioned correction on
/// qubit 1; pass the backend's capability. When false the conditional step
/// is skipped and the rest of the sequence is unchanged.
pub fn collapse_5q(with_conditional: bool) -> Circuit {
    let mut builder = CircuitBuilder::with_name(COLLAPSE_QUBITS, "five-protofilament collapse")
        .h(0)
        .h(1)
        .h(2)
        .cnot(0, 1)
        .cnot(1, 2)
        .cnot(2, 3)
        .cnot(3, 4)
        .z(0)
        .x(1)
        .y(2)
        .measure(0);

    if with_conditional {
        builder = builder.x_if(0, 1);
    }

    builder
        .measure_in(3, Basis::X)
        .measure_in(4, Basis::X)
        .measure(1)
        .measure(2)
        .build()
}

// ============================================================================
// 13-Qubit Microtubule Scenario
// ============================================================================

/// The full 13-protofilament microtubule scenario.
///
/// Phases: superposition on the active sites, chain plus diametral
/// entanglement, tubulin differentiation rotations, thermal and bit-flip
/// noise, central measurement with (capability-gated) collapse propagation,
/// then the three readout bases.
pub fn microtubule_13q(with_conditional: bool) -> Circuit {
    let mut builder = CircuitBuilder::with_name(MICROTUBULE_QUBITS, "microtubule")
        .h_on(0..8)
        .cnot_chain()
        .cnot(0, 6)
        .cnot(1, 7)
        .cnot(2, 8);

    // α-tubulina on even sites, β-tubulina on odd sites
    for q in (0..MICROTUBULE_QUBITS).step_by(2) {
        builder = builder.rz(q, ALPHA_TUBULIN_PHASE);
    }
    for q in (1..MICROTUBULE_QUBITS).step_by(2) {
        builder = builder.ry(q, BETA_TUBULIN_ROTATION);
    }

    for q in THERMAL_NOISE_SITES {
        builder = builder.z(q);
    }
    for q in BIT_FLIP_SITES {
        builder = builder.x(q);
    }

    builder = builder.measure(COLLAPSE_TRIGGER);
    if with_conditional {
        for q in BIT_FLIP_SITES {
            builder = builder.x_if(COLLAPSE_TRIGGER, q);
        }
    }

    for q in X_BASIS_SITES {
        builder = builder.measure_in(q, Basis::X);
    }
    builder = builder.ry(Y_ROTATED_SITE, FRAC_PI_2).measure(Y_ROTATED_SITE);
    for q in Z_BASIS_SITES {
        builder = builder.measure(q);
    }

    builder.build()
}

// ============================================================================
// 3-Qubit Tubulin Triplet
// ============================================================================

/// The tubulin triplet used for exact statevector analysis
pub fn tubulin_3q() -> Circuit {
    CircuitBuilder::with_name(TUBULIN_QUBITS, "tubulin triplet")
        .h(0)
        .h(1)
        .cnot(0, 1)
        .cnot(1, 2)
        .rz(0, TRIPLET_ALPHA_PHASE)
        .ry(1, TRIPLET_BETA_ROTATION)
        .rx(2, TRIPLET_COUPLING_ROTATION)
        .build()
}

/// Evolution stages of the tubulin triplet, each a circuit prefix:
/// initial register, superposition, entanglement, full differentiation
pub fn tubulin_stages() -> Vec<(&'static str, Circuit)> {
    vec![
        ("initial", CircuitBuilder::new(TUBULIN_QUBITS).build()),
        (
            "superposition",
            CircuitBuilder::new(TUBULIN_QUBITS).h(0).h(1).build(),
        ),
        (
            "entangled",
            CircuitBuilder::new(TUBULIN_QUBITS)
                .h(0)
                .h(1)
                .cnot(0, 1)
                .cnot(1, 2)
                .build(),
        ),
        ("final", tubulin_3q()),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use orchor_state::Statevector;

    #[test]
    fn test_collapse_structure() {
        let circuit = collapse_5q(true);

        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.count_2q(), 4);
        // q0, q3, q4, q1, q2
        assert_eq!(circuit.count_measurements(), 5);
        assert_eq!(circuit.count_conditionals(), 1);
        // 3 H + Z + X + Y + 2 basis-transform H
        assert_eq!(circuit.count_1q(), 8);
    }

    #[test]
    fn test_collapse_fallback_drops_conditional() {
        let with = collapse_5q(true);
        let without = collapse_5q(false);

        assert_eq!(without.count_conditionals(), 0);
        assert_eq!(with.gate_count(), without.gate_count() + 1);
    }

    #[test]
    fn test_collapse_prefix_distribution() {
        // The unitary prefix spreads the register over exactly 8 equally
        // likely basis states
        let state = Statevector::from_circuit(&collapse_premeasurement()).unwrap();
        let probs = state.probabilities();

        let nonzero: Vec<(usize, f64)> = probs
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > 1e-12)
            .map(|(i, &p)| (i, p))
            .collect();

        assert_eq!(nonzero.len(), 8);
        for (index, p) in &nonzero {
            assert_relative_eq!(*p, 0.125, epsilon = 1e-10);
            // q3 and q4 always agree with the parity chain
            let q3 = (index >> 3) & 1;
            let q4 = (index >> 4) & 1;
            assert_eq!(q3, q4, "index {:05b}", index);
        }
    }

    #[test]
    fn test_collapse_prefix_amplitude() {
        // The a=b=c=0 branch lands on |00110⟩ with amplitude i/√8: the X
        // on q1 and Y on q2 flip those qubits, and Y contributes the i
        let state = Statevector::from_circuit(&collapse_premeasurement()).unwrap();
        let amp = state.amplitude(0b00110);

        let expected = Complex64::new(0.0, 1.0 / 8f64.sqrt());
        assert_relative_eq!(amp.re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(amp.im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_microtubule_structure() {
        let circuit = microtubule_13q(true);

        assert_eq!(circuit.num_qubits(), 13);
        // 12 chain + 3 diametral
        assert_eq!(circuit.count_2q(), 15);
        // 7 even Rz + 6 odd Ry + 1 readout Ry
        assert_eq!(circuit.count_parameterized(), 14);
        // trigger + 3 X-basis + 1 Y-rotated + 7 Z-basis
        assert_eq!(circuit.count_measurements(), 12);
        assert_eq!(circuit.count_conditionals(), 2);
    }

    #[test]
    fn test_microtubule_leaves_q7_unmeasured() {
        let circuit = microtubule_13q(true);
        let measured: Vec<usize> = circuit
            .gates()
            .iter()
            .filter(|g| g.is_measurement())
            .flat_map(|g| g.qubits())
            .collect();

        assert!(!measured.contains(&7));
        assert_eq!(measured.len(), 12);
    }

    #[test]
    fn test_microtubule_fallback() {
        let without = microtubule_13q(false);
        assert_eq!(without.count_conditionals(), 0);
        assert_eq!(
            microtubule_13q(true).gate_count(),
            without.gate_count() + 2
        );
    }

    #[test]
    fn test_tubulin_structure() {
        let circuit = tubulin_3q();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.count_2q(), 2);
        assert_eq!(circuit.count_parameterized(), 3);
        assert!(!circuit.has_measurements());
    }

    #[test]
    fn test_tubulin_stages_are_prefixes() {
        let stages = tubulin_stages();
        assert_eq!(stages.len(), 4);

        let counts: Vec<usize> = stages.iter().map(|(_, c)| c.gate_count()).collect();
        assert_eq!(counts, vec![0, 2, 4, 7]);

        // Every stage evolves without measurement
        for (name, circuit) in &stages {
            let state = Statevector::from_circuit(circuit).unwrap();
            let total: f64 = state.probabilities().iter().sum();
            assert!((total - 1.0).abs() < 1e-12, "stage {} not normalized", name);
        }
    }
}
