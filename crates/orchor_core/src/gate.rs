//! Quantum gate definitions for Orchor.
//!
//! The gate set is the one the microtubule scenarios exercise: Hadamard,
//! the Paulis, the axis rotations, CNOT, the S pair needed for basis
//! transforms, measurement, and a classically-conditioned wrapper for the
//! collapse-propagation step.

use crate::types::{Angle, Basis, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum gate enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    H(QubitId),

    /// Pauli-X gate (bit flip)
    X(QubitId),

    /// Pauli-Y gate
    Y(QubitId),

    /// Pauli-Z gate (phase flip)
    Z(QubitId),

    /// S gate (sqrt(Z))
    S(QubitId),

    /// S-dagger gate (inverse of S)
    Sdg(QubitId),

    // ========================================================================
    // Single-Qubit Parameterized Rotation Gates
    // ========================================================================
    /// Rotation around X-axis
    Rx(QubitId, Angle),

    /// Rotation around Y-axis
    Ry(QubitId, Angle),

    /// Rotation around Z-axis
    Rz(QubitId, Angle),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (control, target)
    Cnot(QubitId, QubitId),

    // ========================================================================
    // Measurement and Control
    // ========================================================================
    /// Measure one qubit into the classical cell of the same index
    Measure(QubitId),

    /// Measure all qubits (convenience)
    MeasureAll,

    /// Apply the inner gate only when the classical cell holds 1
    Conditional(ClbitId, Box<Gate>),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::S(q)
            | Gate::Sdg(q)
            | Gate::Rx(q, _)
            | Gate::Ry(q, _)
            | Gate::Rz(q, _)
            | Gate::Measure(q) => vec![*q],

            Gate::Cnot(c, t) => vec![*c, *t],

            Gate::MeasureAll => vec![], // Applied to all qubits
            Gate::Conditional(_, inner) => inner.qubits(),
        }
    }

    /// Classical cell this gate is conditioned on, if any
    pub fn condition_bit(&self) -> Option<ClbitId> {
        match self {
            Gate::Conditional(bit, _) => Some(*bit),
            _ => None,
        }
    }

    /// Check if gate is single-qubit
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H(_)
                | Gate::X(_)
                | Gate::Y(_)
                | Gate::Z(_)
                | Gate::S(_)
                | Gate::Sdg(_)
                | Gate::Rx(_, _)
                | Gate::Ry(_, _)
                | Gate::Rz(_, _)
        )
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cnot(_, _))
    }

    /// Check if gate is parameterized
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Gate::Rx(_, _) | Gate::Ry(_, _) | Gate::Rz(_, _))
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_) | Gate::MeasureAll)
    }

    /// Check if gate is classically conditioned
    pub fn is_conditional(&self) -> bool {
        matches!(self, Gate::Conditional(_, _))
    }

    /// Check if gate is a plain unitary operation (no measurement, no
    /// classical condition)
    pub fn is_unitary(&self) -> bool {
        !self.is_measurement() && !self.is_conditional()
    }

    /// Rotation angle, if parameterized
    pub fn angle(&self) -> Option<Angle> {
        match self {
            Gate::Rx(_, a) | Gate::Ry(_, a) | Gate::Rz(_, a) => Some(*a),
            Gate::Conditional(_, inner) => inner.angle(),
            _ => None,
        }
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::X(_) => "x",
            Gate::Y(_) => "y",
            Gate::Z(_) => "z",
            Gate::S(_) => "s",
            Gate::Sdg(_) => "sdg",
            Gate::Rx(_, _) => "rx",
            Gate::Ry(_, _) => "ry",
            Gate::Rz(_, _) => "rz",
            Gate::Cnot(_, _) => "cx",
            Gate::Measure(_) => "measure",
            Gate::MeasureAll => "measure",
            Gate::Conditional(_, _) => "if",
        }
    }

    /// One-line lowercase text form, e.g. `h q[0]` or `rz(0.1) q[4]`
    pub fn text(&self) -> String {
        match self {
            Gate::H(q) => format!("h q[{}]", q),
            Gate::X(q) => format!("x q[{}]", q),
            Gate::Y(q) => format!("y q[{}]", q),
            Gate::Z(q) => format!("z q[{}]", q),
            Gate::S(q) => format!("s q[{}]", q),
            Gate::Sdg(q) => format!("sdg q[{}]", q),
            Gate::Rx(q, theta) => format!("rx({}) q[{}]", theta, q),
            Gate::Ry(q, theta) => format!("ry({}) q[{}]", theta, q),
            Gate::Rz(q, theta) => format!("rz({}) q[{}]", theta, q),
            Gate::Cnot(c, t) => format!("cx q[{}],q[{}]", c, t),
            Gate::Measure(q) => format!("measure q[{}] -> c[{}]", q, q),
            Gate::MeasureAll => "measure q -> c".to_string(),
            Gate::Conditional(bit, inner) => {
                format!("if (c[{}]==1) {}", bit, inner.text())
            }
        }
    }

    // ========================================================================
    // Basis Transformation Helpers
    // ========================================================================

    /// Get basis transformation gates for measuring in given basis
    /// X basis: H
    /// Y basis: Sdg, H
    /// Z basis: (none)
    pub fn basis_transform(qubit: QubitId, basis: Basis) -> Vec<Gate> {
        match basis {
            Basis::X => vec![Gate::H(qubit)],
            Basis::Y => vec![Gate::Sdg(qubit), Gate::H(qubit)],
            Basis::Z => vec![],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(Gate::H(0).qubits(), vec![0]);
        assert_eq!(Gate::Cnot(0, 1).qubits(), vec![0, 1]);
        assert_eq!(
            Gate::Conditional(0, Box::new(Gate::X(1))).qubits(),
            vec![1]
        );
        assert!(Gate::MeasureAll.qubits().is_empty());
    }

    #[test]
    fn test_gate_classification() {
        assert!(Gate::H(0).is_single_qubit());
        assert!(!Gate::H(0).is_two_qubit());

        assert!(Gate::Cnot(0, 1).is_two_qubit());
        assert!(!Gate::Cnot(0, 1).is_single_qubit());

        assert!(Gate::Rx(0, 1.0).is_parameterized());
        assert!(!Gate::H(0).is_parameterized());

        assert!(Gate::Measure(0).is_measurement());
        assert!(Gate::Conditional(0, Box::new(Gate::X(1))).is_conditional());
    }

    #[test]
    fn test_gate_unitary() {
        assert!(Gate::H(0).is_unitary());
        assert!(!Gate::Measure(0).is_unitary());
        assert!(!Gate::MeasureAll.is_unitary());
        assert!(!Gate::Conditional(0, Box::new(Gate::X(1))).is_unitary());
    }

    #[test]
    fn test_gate_text() {
        assert_eq!(Gate::H(0).text(), "h q[0]");
        assert_eq!(Gate::Cnot(0, 1).text(), "cx q[0],q[1]");
        assert_eq!(Gate::Rz(4, 0.1).text(), "rz(0.1) q[4]");
        assert_eq!(
            Gate::Conditional(6, Box::new(Gate::X(5))).text(),
            "if (c[6]==1) x q[5]"
        );
    }

    #[test]
    fn test_condition_bit() {
        assert_eq!(Gate::Conditional(3, Box::new(Gate::X(1))).condition_bit(), Some(3));
        assert_eq!(Gate::X(1).condition_bit(), None);
    }

    #[test]
    fn test_basis_transform() {
        let x_gates = Gate::basis_transform(0, Basis::X);
        assert_eq!(x_gates.len(), 1);
        assert!(matches!(x_gates[0], Gate::H(0)));

        let y_gates = Gate::basis_transform(0, Basis::Y);
        assert_eq!(y_gates.len(), 2);
        assert!(matches!(y_gates[0], Gate::Sdg(0)));
        assert!(matches!(y_gates[1], Gate::H(0)));

        let z_gates = Gate::basis_transform(0, Basis::Z);
        assert!(z_gates.is_empty());
    }
}
