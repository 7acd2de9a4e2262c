//! # Orchor Analysis
//!
//! Result summaries, metric labels, and terminal charts for the Orch-OR
//! microtubule simulation workspace.
//!
//! ## Counts Pipeline
//!
//! ```rust
//! use orchor_analysis::prelude::*;
//! use orchor_core::Counts;
//!
//! let mut counts = Counts::new();
//! counts.insert("00110".to_string(), 700);
//! counts.insert("00111".to_string(), 324);
//!
//! let summary = CountsSummary::from_counts(&counts, 5);
//! assert_eq!(summary.distinct_outcomes, 2);
//! assert_eq!(summary.total_shots, 1024);
//!
//! println!("{}", Reporter::counts_report(&summary, ReportFormat::Text));
//! ```
//!
//! ## State Pipeline
//!
//! ```rust
//! use orchor_analysis::prelude::*;
//! use orchor_core::CircuitBuilder;
//! use orchor_state::Statevector;
//!
//! let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
//! let state = Statevector::from_circuit(&circuit).unwrap();
//!
//! let report = StateReport::from_statevector(&state, &[(0, 1)]).unwrap();
//! println!("{}", chart::bloch_table(&report.qubits));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Counts-mapping summaries
pub mod counts;

/// Statevector reports
pub mod state;

/// Terminal charts
pub mod chart;

/// Report generation
pub mod report;

// ============================================================================
// Re-exports
// ============================================================================

pub use counts::{shannon_entropy, CountsSummary, EntropyClass, TopOutcome};
pub use report::{ReportFormat, Reporter};
pub use state::{MixingClass, PairReport, QubitReport, StateReport};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::chart;
    pub use crate::counts::{shannon_entropy, CountsSummary, EntropyClass, TopOutcome};
    pub use crate::report::{ReportFormat, Reporter};
    pub use crate::state::{MixingClass, PairReport, QubitReport, StateReport};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use orchor_backend::prelude::*;
    use orchor_core::CircuitBuilder;

    #[test]
    fn test_counts_pipeline_end_to_end() {
        // Sample a GHZ circuit, then summarize the counts
        let backend = TrajectoryBackend::new(3).with_seed(42);
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .measure_all()
            .build();

        let result = backend.execute(&circuit, 1024).unwrap();
        let summary = CountsSummary::from_counts(&result.counts, 3);

        assert_eq!(summary.total_shots, 1024);
        assert_eq!(summary.distinct_outcomes, 2);
        assert_eq!(summary.entropy_class, EntropyClass::Low);
        assert!(summary.residual_coherence);
        // GHZ sampling is a fair coin: about 1 bit of entropy
        assert!(summary.shannon_entropy_bits > 0.9);
        assert!(summary.shannon_entropy_bits < 1.1);

        let chart = chart::histogram(&result.counts, result.shots);
        assert!(chart.contains("000"));
        assert!(chart.contains("111"));
    }
}
