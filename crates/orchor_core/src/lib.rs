//! # Orchor Core
//!
//! Gates, circuits, and foundation types for the Orch-OR microtubule
//! simulation workspace.
//!
//! ## Quick Start
//!
//! ```rust
//! use orchor_core::prelude::*;
//!
//! // Build a simple entangling circuit
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .cnot(1, 2)
//!     .measure_all()
//!     .build();
//!
//! println!("{}", circuit);
//! println!("{}", circuit.draw());
//! ```
//!
//! ## Conditional Gates
//!
//! Mid-circuit measurement can feed a classically-conditioned gate, the
//! collapse-propagation step of the microtubule scenarios:
//!
//! ```rust
//! use orchor_core::prelude::*;
//!
//! let circuit = CircuitBuilder::new(5)
//!     .h(0)
//!     .measure(0)
//!     .x_if(0, 1) // if c[0] == 1, flip qubit 1
//!     .measure(1)
//!     .build();
//!
//! assert_eq!(circuit.count_conditionals(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types
pub mod types;

/// Constants
pub mod constants;

/// Error types
pub mod error;

/// Quantum gates
pub mod gate;

/// Circuit structure
pub mod circuit;

/// Circuit builder
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{metrics, numeric, sampling};
pub use error::{OrchorError, OrchorResult};
pub use gate::Gate;
pub use types::{Angle, Basis, Bitstring, ClbitId, Counts, Probability, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use orchor_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{metrics, numeric, sampling};
    pub use crate::error::{OrchorError, OrchorResult};
    pub use crate::gate::Gate;
    pub use crate::types::{Angle, Basis, Bitstring, ClbitId, Counts, Probability, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_collapse_style_circuit() {
        // The 5-qubit scenario skeleton: superposition, chain entanglement,
        // decoherence Paulis, measurement-conditioned correction
        let circuit = CircuitBuilder::new(5)
            .h(0)
            .h(1)
            .h(2)
            .cnot_chain()
            .z(0)
            .x(1)
            .y(2)
            .measure(0)
            .x_if(0, 1)
            .measure_in(3, Basis::X)
            .measure_in(4, Basis::X)
            .measure(1)
            .measure(2)
            .build();

        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.count_2q(), 4);
        assert_eq!(circuit.count_measurements(), 5);
        assert_eq!(circuit.count_conditionals(), 1);
        // 3 H + 3 Pauli + 2 basis-transform H
        assert_eq!(circuit.count_1q(), 8);
    }

    #[test]
    fn test_draw_renders_every_lane() {
        let circuit = CircuitBuilder::new(3).h(0).cnot(0, 1).cnot(1, 2).build();
        let diagram = circuit.draw();
        assert_eq!(diagram.lines().count(), 3);
        for q in 0..3 {
            assert!(diagram.contains(&format!("q[ {}]:", q)));
        }
    }

    #[test]
    fn test_bitstring_matches_register_size() {
        let bs = Bitstring::zeros(13);
        assert_eq!(bs.to_string().len(), 13);
    }

    #[test]
    fn test_probability_bounds() {
        assert!(Probability::new(0.25).is_ok());
        assert!(Probability::new(1.25).is_err());
        assert_eq!(Probability::ONE.value(), 1.0);
    }
}
