//! Error types for the Orchor workspace.
//!
//! One error enum covers the whole pipeline: circuit construction,
//! simulation, and metric extraction.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for Orchor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrchorError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Probability value out of range [0, 1]
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    /// Qubit index out of range
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Classical bit index out of range
    #[error("Classical bit {bit} out of range: register has {size} cells")]
    ClbitOutOfRange { bit: usize, size: usize },

    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Invalid basis character
    #[error("Invalid basis '{0}': must be X, Y, or Z")]
    InvalidBasis(String),

    /// Invalid rotation angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Empty circuit
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    /// Conditional wrapping a gate that cannot be conditioned
    #[error("Conditional may only wrap a unitary gate, got '{0}'")]
    InvalidConditionalGate(String),

    // ========================================================================
    // Simulation Errors
    // ========================================================================
    /// Non-unitary gate reached the exact statevector path
    #[error("Exact statevector evolution cannot apply '{0}': unitary gates only")]
    NonUnitaryGate(String),

    /// Statevector construction with invalid amplitudes
    #[error("Invalid statevector: {0}")]
    InvalidStatevector(String),

    /// Measurement branch with zero probability mass
    #[error("Measurement of qubit {qubit} hit a zero-norm branch")]
    CollapseFailed { qubit: usize },

    /// Shots out of range
    #[error("Shots {0} out of range [{1}, {2}]")]
    ShotsOutOfRange(u64, u64, u64),

    /// Backend execution error
    #[error("Backend error: {0}")]
    BackendError(String),

    // ========================================================================
    // Metric Errors
    // ========================================================================
    /// Partial trace over an invalid qubit subset
    #[error("Partial trace keep-set invalid: {0}")]
    InvalidTraceSubset(String),

    /// Eigenvalue iteration did not converge
    #[error("Eigensolver failed to converge after {sweeps} sweeps")]
    EigensolverFailed { sweeps: usize },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for Orchor operations
pub type OrchorResult<T> = Result<T, OrchorError>;

// ============================================================================
// Error Helpers
// ============================================================================

impl OrchorError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            OrchorError::InvalidProbability(_)
                | OrchorError::QubitOutOfRange { .. }
                | OrchorError::ClbitOutOfRange { .. }
                | OrchorError::InvalidBitstring(_)
                | OrchorError::InvalidBasis(_)
                | OrchorError::InvalidAngle(_)
        )
    }

    /// Check if error is a circuit error
    pub fn is_circuit_error(&self) -> bool {
        matches!(
            self,
            OrchorError::EmptyCircuit
                | OrchorError::GateQubitMismatch { .. }
                | OrchorError::InvalidConditionalGate(_)
        )
    }

    /// Check if error arose during simulation
    pub fn is_simulation_error(&self) -> bool {
        matches!(
            self,
            OrchorError::NonUnitaryGate(_)
                | OrchorError::InvalidStatevector(_)
                | OrchorError::CollapseFailed { .. }
                | OrchorError::ShotsOutOfRange(..)
                | OrchorError::BackendError(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
