//! # Orchor Lab
//!
//! Fixed microtubule scenarios and demo runs for the Orch-OR exploration.
//!
//! The library exposes the three hard-coded gate sequences as circuit
//! constructors so their structure stays testable; the runnable
//! demonstrations live in `examples/` and reproduce the narrated stdout
//! flow of the original exploration, one batch run per binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use orchor_backend::prelude::*;
//! use orchor_lab::scenarios;
//!
//! let backend = TrajectoryBackend::new(scenarios::COLLAPSE_QUBITS).with_seed(42);
//!
//! // Capability is resolved once, then baked into the circuit
//! let circuit = scenarios::collapse_5q(backend.supports_conditional());
//! let result = backend.execute(&circuit, 256).unwrap();
//!
//! assert_eq!(result.total_counts(), 256);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Fixed microtubule scenarios
pub mod scenarios;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::scenarios;
    use orchor_analysis::prelude::*;
    use orchor_backend::prelude::*;
    use orchor_state::Statevector;

    #[test]
    fn test_collapse_run_end_to_end() {
        let backend = TrajectoryBackend::new(scenarios::COLLAPSE_QUBITS).with_seed(42);
        let circuit = scenarios::collapse_5q(backend.supports_conditional());

        let result = backend.execute(&circuit, 256).unwrap();

        assert_eq!(result.total_counts(), 256);
        for bitstring in result.counts.keys() {
            assert_eq!(bitstring.len(), scenarios::COLLAPSE_QUBITS);
        }
    }

    #[test]
    fn test_collapse_run_reproducible() {
        let circuit = scenarios::collapse_5q(true);

        let a = TrajectoryBackend::new(5)
            .with_seed(1234)
            .execute(&circuit, 256)
            .unwrap();
        let b = TrajectoryBackend::new(5)
            .with_seed(1234)
            .execute(&circuit, 256)
            .unwrap();

        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn test_microtubule_run_end_to_end() {
        let backend = TrajectoryBackend::new(scenarios::MICROTUBULE_QUBITS).with_seed(7);
        let circuit = scenarios::microtubule_13q(backend.supports_conditional());

        let result = backend.execute(&circuit, 32).unwrap();

        assert_eq!(result.total_counts(), 32);
        for bitstring in result.counts.keys() {
            assert_eq!(bitstring.len(), scenarios::MICROTUBULE_QUBITS);
            // Protofilament 7 is never read out, so its cell stays 0
            let c7 = bitstring
                .chars()
                .nth(scenarios::MICROTUBULE_QUBITS - 1 - 7)
                .unwrap();
            assert_eq!(c7, '0');
        }

        let summary = CountsSummary::from_counts(&result.counts, scenarios::MICROTUBULE_QUBITS);
        assert_eq!(summary.total_shots, 32);
        assert!(summary.top_outcomes.len() <= 5);
        assert!(summary.complexity_ratio > 0.0);
        assert!(summary.complexity_ratio <= 1.0);
    }

    #[test]
    fn test_tubulin_full_analysis() {
        let circuit = scenarios::tubulin_3q();
        let state = Statevector::from_circuit(&circuit).unwrap();
        let report = StateReport::from_statevector(&state, &scenarios::TUBULIN_PAIRS).unwrap();

        assert_eq!(report.qubits.len(), 3);
        assert_eq!(report.pairs.len(), 3);

        for q in &report.qubits {
            assert!((0.0..=1.0 + 1e-10).contains(&q.purity));
        }
        for pair in &report.pairs {
            assert!(pair.entanglement_entropy >= -1e-9);
            assert!(pair.entanglement_entropy <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_shot_constants_match_exploration() {
        assert_eq!(scenarios::COLLAPSE_SHOTS, 1024);
        assert_eq!(scenarios::MICROTUBULE_SHOTS, 2048);
    }
}
