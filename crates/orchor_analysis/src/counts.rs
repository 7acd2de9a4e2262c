//! Counts-mapping summaries.
//!
//! Distills a shot-sampling counts mapping into the scalar metrics the
//! demos print: distinct patterns, top outcomes, complexity ratio, and the
//! fixed-threshold categorical labels.

use orchor_core::metrics::{
    COHERENCE_PATTERN_LIMIT, HIGH_ENTROPY_PATTERNS, MEDIUM_ENTROPY_PATTERNS, TOP_PATTERNS,
};
use orchor_core::numeric::ENTROPY_EPS;
use orchor_core::Counts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse entropy label derived from the distinct-pattern count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntropyClass {
    /// More than 100 distinct patterns
    High,
    /// More than 50 distinct patterns
    Medium,
    /// At most 50 distinct patterns
    Low,
}

impl EntropyClass {
    /// Classify a distinct-pattern count
    pub fn from_distinct(distinct: usize) -> Self {
        if distinct > HIGH_ENTROPY_PATTERNS {
            EntropyClass::High
        } else if distinct > MEDIUM_ENTROPY_PATTERNS {
            EntropyClass::Medium
        } else {
            EntropyClass::Low
        }
    }
}

impl fmt::Display for EntropyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyClass::High => write!(f, "high"),
            EntropyClass::Medium => write!(f, "medium"),
            EntropyClass::Low => write!(f, "low"),
        }
    }
}

/// One ranked outcome line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOutcome {
    /// Outcome bitstring
    pub bitstring: String,

    /// Times observed
    pub count: u64,

    /// Empirical probability
    pub probability: f64,
}

/// Summary of a counts mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsSummary {
    /// Classical register size (bitstring width)
    pub register_size: usize,

    /// Number of distinct outcome patterns
    pub distinct_outcomes: usize,

    /// Total shots observed
    pub total_shots: u64,

    /// Most frequent outcomes, descending
    pub top_outcomes: Vec<TopOutcome>,

    /// Distinct patterns / 2^register_size
    pub complexity_ratio: f64,

    /// Categorical entropy label
    pub entropy_class: EntropyClass,

    /// Whether residual coherence is still detectable (distinct patterns
    /// below the fixed limit)
    pub residual_coherence: bool,

    /// Shannon entropy of the empirical distribution, in bits
    pub shannon_entropy_bits: f64,
}

impl CountsSummary {
    /// Summarize a counts mapping for a register of `register_size` cells
    pub fn from_counts(counts: &Counts, register_size: usize) -> Self {
        let distinct = counts.len();
        let total: u64 = counts.values().sum();

        let mut ranked: Vec<(&String, u64)> = counts.iter().map(|(bs, &c)| (bs, c)).collect();
        ranked.sort_by(|(bs_a, count_a), (bs_b, count_b)| {
            count_b.cmp(count_a).then_with(|| bs_a.cmp(bs_b))
        });

        let top_outcomes = ranked
            .iter()
            .take(TOP_PATTERNS)
            .map(|(bs, count)| TopOutcome {
                bitstring: (*bs).clone(),
                count: *count,
                probability: if total > 0 {
                    *count as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect();

        let probabilities: Vec<f64> = if total > 0 {
            counts.values().map(|&c| c as f64 / total as f64).collect()
        } else {
            Vec::new()
        };

        Self {
            register_size,
            distinct_outcomes: distinct,
            total_shots: total,
            top_outcomes,
            complexity_ratio: distinct as f64 / (1u64 << register_size) as f64,
            entropy_class: EntropyClass::from_distinct(distinct),
            residual_coherence: distinct < COHERENCE_PATTERN_LIMIT,
            shannon_entropy_bits: shannon_entropy(&probabilities),
        }
    }
}

impl fmt::Display for CountsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Patterns: {} distinct over {} shots",
            self.distinct_outcomes, self.total_shots
        )?;
        writeln!(
            f,
            "Complexity: {}/{} patterns ({:.2}%)",
            self.distinct_outcomes,
            1u64 << self.register_size,
            self.complexity_ratio * 100.0
        )?;
        writeln!(f, "Entropy class: {}", self.entropy_class)?;
        writeln!(
            f,
            "Residual coherence: {}",
            if self.residual_coherence {
                "detected"
            } else {
                "lost"
            }
        )?;
        Ok(())
    }
}

/// Shannon entropy in bits: −Σ p·log2(p + ε) over nonzero probabilities
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    probabilities
        .iter()
        .filter(|&&p| p > ENTROPY_EPS)
        .map(|&p| -p * (p + ENTROPY_EPS).log2())
        .sum()
}

// ============================================================================
// Tests
// ============================================================================
