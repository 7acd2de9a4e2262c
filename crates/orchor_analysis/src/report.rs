//! Report generation.
//!
//! Serializes the analysis summaries for consumption outside the demos:
//! plain text for the terminal, JSON for piping into other tools.

use crate::counts::CountsSummary;
use crate::state::StateReport;
use std::fmt::Write;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text summary
    Text,
    /// JSON
    Json,
}

/// Summary reporter
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Counts Reports
    // ========================================================================

    /// Render a counts summary in the requested format
    pub fn counts_report(summary: &CountsSummary, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => Self::counts_text(summary),
            ReportFormat::Json => {
                serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }

    fn counts_text(summary: &CountsSummary) -> String {
        let mut out = String::new();

        writeln!(out, "Measurement summary").unwrap();
        writeln!(out, "===================").unwrap();
        write!(out, "{}", summary).unwrap();

        if !summary.top_outcomes.is_empty() {
            writeln!(out, "Top patterns:").unwrap();
            for (rank, outcome) in summary.top_outcomes.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {} -> {} times ({:.1}%)",
                    rank + 1,
                    outcome.bitstring,
                    outcome.count,
                    outcome.probability * 100.0
                )
                .unwrap();
            }
        }

        out
    }

    // ========================================================================
    // State Reports
    // ========================================================================

    /// Render a state report in the requested format
    pub fn state_report(report: &StateReport, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => {
                let mut out = String::new();
                writeln!(out, "State summary").unwrap();
                writeln!(out, "=============").unwrap();
                write!(out, "{}", report).unwrap();
                out
            }
            ReportFormat::Json => {
                serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orchor_core::{CircuitBuilder, Counts};
    use orchor_state::Statevector;

    fn make_summary() -> CountsSummary {
        let mut counts = Counts::new();
        counts.insert("00".to_string(), 512);
        counts.insert("11".to_string(), 512);
        CountsSummary::from_counts(&counts, 2)
    }

    fn make_state_report() -> StateReport {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let state = Statevector::from_circuit(&circuit).unwrap();
        StateReport::from_statevector(&state, &[(0, 1)]).unwrap()
    }

    #[test]
    fn test_counts_text_report() {
        let text = Reporter::counts_report(&make_summary(), ReportFormat::Text);
        assert!(text.contains("Measurement summary"));
        assert!(text.contains("Top patterns:"));
        assert!(text.contains("1. "));
    }

    #[test]
    fn test_counts_json_report() {
        let json = Reporter::counts_report(&make_summary(), ReportFormat::Json);
        assert!(json.contains("\"distinct_outcomes\": 2"));
        assert!(json.contains("\"total_shots\": 1024"));
        assert!(json.contains("\"top_outcomes\""));
    }

    #[test]
    fn test_state_text_report() {
        let text = Reporter::state_report(&make_state_report(), ReportFormat::Text);
        assert!(text.contains("State summary"));
        assert!(text.contains("Max probability"));
    }

    #[test]
    fn test_state_json_report() {
        let json = Reporter::state_report(&make_state_report(), ReportFormat::Json);
        assert!(json.contains("\"probabilities\""));
        assert!(json.contains("\"mixing_class\""));
        assert!(json.contains("\"pairs\""));
    }
}
