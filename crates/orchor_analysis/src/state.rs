//! Statevector reports.
//!
//! Collects the per-qubit and pairwise projections of a pure state into one
//! serializable report: Bloch vectors, purities, entanglement entropies,
//! and the distribution-level summary metrics.

use crate::counts::shannon_entropy;
use orchor_core::metrics::{HIGH_MIXING_BITS, MEDIUM_MIXING_BITS};
use orchor_core::{OrchorResult, QubitId};
use orchor_state::Statevector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse mixing label derived from the distribution entropy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixingClass {
    /// More than 2 bits of distribution entropy
    High,
    /// More than 1 bit
    Medium,
    /// At most 1 bit
    Low,
}

impl MixingClass {
    /// Classify a distribution entropy in bits
    pub fn from_bits(bits: f64) -> Self {
        if bits > HIGH_MIXING_BITS {
            MixingClass::High
        } else if bits > MEDIUM_MIXING_BITS {
            MixingClass::Medium
        } else {
            MixingClass::Low
        }
    }
}

impl fmt::Display for MixingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixingClass::High => write!(f, "high"),
            MixingClass::Medium => write!(f, "medium"),
            MixingClass::Low => write!(f, "low"),
        }
    }
}

/// Single-qubit projection of the register state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QubitReport {
    /// Qubit index
    pub qubit: QubitId,

    /// Bloch vector (x, y, z)
    pub bloch: [f64; 3],

    /// Purity Tr(ρ²) of the reduced state
    pub purity: f64,
}

/// Pairwise entanglement projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairReport {
    /// Qubit pair
    pub qubits: (QubitId, QubitId),

    /// Entanglement entropy of the pair's reduced state, in ebits
    pub entanglement_entropy: f64,
}

/// Full metric report for one statevector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateReport {
    /// Basis-state probabilities
    pub probabilities: Vec<f64>,

    /// Largest basis-state probability
    pub max_probability: f64,

    /// Shannon entropy of the probability distribution, in bits
    pub distribution_entropy_bits: f64,

    /// Categorical mixing label
    pub mixing_class: MixingClass,

    /// Per-qubit reductions
    pub qubits: Vec<QubitReport>,

    /// Pairwise reductions
    pub pairs: Vec<PairReport>,
}

impl StateReport {
    /// Build the report for a statevector, analyzing the given qubit pairs
    pub fn from_statevector(
        state: &Statevector,
        pairs: &[(QubitId, QubitId)],
    ) -> OrchorResult<Self> {
        let probabilities = state.probabilities();
        let max_probability = probabilities.iter().cloned().fold(0.0, f64::max);
        let distribution_entropy_bits = shannon_entropy(&probabilities);

        let mut qubits = Vec::with_capacity(state.num_qubits());
        for q in 0..state.num_qubits() {
            let rho = state.reduced_density_matrix(&[q])?;
            qubits.push(QubitReport {
                qubit: q,
                bloch: rho.bloch_vector()?,
                purity: rho.purity(),
            });
        }

        let mut pair_reports = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let rho = state.reduced_density_matrix(&[a, b])?;
            pair_reports.push(PairReport {
                qubits: (a, b),
                entanglement_entropy: rho.von_neumann_entropy()?,
            });
        }

        Ok(Self {
            probabilities,
            max_probability,
            distribution_entropy_bits,
            mixing_class: MixingClass::from_bits(distribution_entropy_bits),
            qubits,
            pairs: pair_reports,
        })
    }
}

impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max probability: {:.3}", self.max_probability)?;
        writeln!(
            f,
            "Distribution entropy: {:.3} bits ({} mixing)",
            self.distribution_entropy_bits, self.mixing_class
        )?;
        for q in &self.qubits {
            writeln!(
                f,
                "q[{}]: Bloch ({:+.2}, {:+.2}, {:+.2}), purity {:.3}",
                q.qubit, q.bloch[0], q.bloch[1], q.bloch[2], q.purity
            )?;
        }
        for p in &self.pairs {
            writeln!(
                f,
                "pair ({}, {}): entanglement {:.3} ebits",
                p.qubits.0, p.qubits.1, p.entanglement_entropy
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
