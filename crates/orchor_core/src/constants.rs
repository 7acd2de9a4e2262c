//! Constants for Orchor.
//!
//! Numeric tolerances for the state engine and the fixed thresholds the
//! analysis layer uses for its categorical labels.

// ============================================================================
// Numeric Constants
// ============================================================================

pub mod numeric {
    //! Tolerances and iteration limits for statevector and density-matrix math

    /// Eigenvalues at or below this are treated as zero when computing
    /// entanglement entropy
    pub const EIGENVALUE_FLOOR: f64 = 1e-12;

    /// Stability epsilon added inside log2 when computing entropies
    pub const ENTROPY_EPS: f64 = 1e-12;

    /// Tolerance for statevector / density-matrix normalization checks
    pub const NORM_TOLERANCE: f64 = 1e-9;

    /// Maximum cyclic sweeps for the Jacobi eigensolver
    pub const JACOBI_MAX_SWEEPS: usize = 64;

    /// Off-diagonal mass below which the Jacobi iteration is converged
    pub const JACOBI_CONVERGENCE: f64 = 1e-14;
}

// ============================================================================
// Sampling Constants
// ============================================================================

pub mod sampling {
    //! Shot-count bounds for the trajectory backend

    /// Minimum shots per execution
    pub const MIN_SHOTS: u64 = 1;

    /// Maximum shots per execution
    pub const MAX_SHOTS: u64 = 1_000_000;
}

// ============================================================================
// Metric Thresholds
// ============================================================================

pub mod metrics {
    //! Fixed thresholds behind the categorical result labels

    /// Distinct-pattern count above which the outcome entropy is labeled high
    pub const HIGH_ENTROPY_PATTERNS: usize = 100;

    /// Distinct-pattern count above which the outcome entropy is labeled medium
    pub const MEDIUM_ENTROPY_PATTERNS: usize = 50;

    /// Residual coherence is reported while the distinct-pattern count stays
    /// below this limit
    pub const COHERENCE_PATTERN_LIMIT: usize = 1000;

    /// Distribution entropy (bits) above which mixing is labeled high
    pub const HIGH_MIXING_BITS: f64 = 2.0;

    /// Distribution entropy (bits) above which mixing is labeled medium
    pub const MEDIUM_MIXING_BITS: f64 = 1.0;

    /// Number of most-frequent outcomes shown in summaries
    pub const TOP_PATTERNS: usize = 5;
}

// ============================================================================
// Tests
// ============================================================================
