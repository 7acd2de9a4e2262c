//! # Orchor State
//!
//! Exact statevector evolution and density-matrix metrics for the Orch-OR
//! microtubule simulation workspace.
//!
//! ## Quick Start
//!
//! ```rust
//! use orchor_core::CircuitBuilder;
//! use orchor_state::Statevector;
//!
//! // Bell pair
//! let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
//! let state = Statevector::from_circuit(&circuit).unwrap();
//!
//! assert!((state.probability(0b00) - 0.5).abs() < 1e-12);
//! assert!((state.probability(0b11) - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Subsystem Metrics
//!
//! ```rust
//! use orchor_core::CircuitBuilder;
//! use orchor_state::Statevector;
//!
//! let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
//! let state = Statevector::from_circuit(&circuit).unwrap();
//!
//! // One half of a Bell pair is maximally mixed
//! let rho = state.reduced_density_matrix(&[0]).unwrap();
//! assert!((rho.purity() - 0.5).abs() < 1e-10);
//! assert!((rho.von_neumann_entropy().unwrap() - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Statevector representation and gate application
pub mod statevector;

/// Density matrices, partial trace, and derived metrics
pub mod density;

// ============================================================================
// Re-exports
// ============================================================================

pub use density::DensityMatrix;
pub use statevector::Statevector;

// ============================================================================
// Integration Tests
// ============================================================================
