//! Backend execution types and traits.
//!
//! Defines the interface between circuits and whatever runs them, plus the
//! counts-carrying result type every shot-based run produces.

use orchor_core::sampling::MAX_SHOTS;
use orchor_core::{Circuit, Counts, OrchorResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result of a shot-based circuit execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Measurement counts (bitstring -> count)
    pub counts: Counts,

    /// Number of shots executed
    pub shots: u64,

    /// Execution metadata
    pub metadata: RunMetadata,
}

/// Execution metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Backend name
    pub backend: String,

    /// Whether simulation was used
    pub simulated: bool,

    /// Seed used (if any)
    pub seed: Option<u64>,

    /// Additional info
    pub extra: HashMap<String, String>,
}

impl RunResult {
    /// Create new execution result
    pub fn new(counts: Counts, shots: u64, backend: &str) -> Self {
        Self {
            counts,
            shots,
            metadata: RunMetadata {
                backend: backend.to_string(),
                simulated: true,
                ..Default::default()
            },
        }
    }

    /// Get total count (should equal shots)
    pub fn total_counts(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcome patterns observed
    pub fn distinct_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// Get probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        let count = self.counts.get(bitstring).copied().unwrap_or(0);
        count as f64 / self.shots as f64
    }

    /// Get most frequent bitstring
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .max_by(|(bs_a, count_a), (bs_b, count_b)| {
                count_a.cmp(count_b).then_with(|| bs_b.cmp(bs_a))
            })
            .map(|(bs, &count)| (bs, count))
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunResult(shots={}, unique={})",
            self.shots,
            self.counts.len()
        )
    }
}

/// Quantum backend trait
pub trait Backend: Send + Sync {
    /// Get backend name
    fn name(&self) -> &str;

    /// Get number of qubits
    fn num_qubits(&self) -> usize;

    /// Whether measurement-conditioned gates are executable.
    ///
    /// Resolved once before a scenario is built; callers degrade to an
    /// unconditional gate sequence when this is false.
    fn supports_conditional(&self) -> bool {
        false
    }

    /// Execute a circuit
    fn execute(&self, circuit: &Circuit, shots: u64) -> OrchorResult<RunResult>;

    /// Execute multiple circuits (batch)
    fn execute_batch(&self, circuits: &[Circuit], shots: u64) -> OrchorResult<Vec<RunResult>> {
        circuits.iter().map(|c| self.execute(c, shots)).collect()
    }

    /// Check if backend is simulator
    fn is_simulator(&self) -> bool {
        true
    }

    /// Get maximum shots per execution
    fn max_shots(&self) -> u64 {
        MAX_SHOTS
    }
}

// ============================================================================
// Tests
// ============================================================================
