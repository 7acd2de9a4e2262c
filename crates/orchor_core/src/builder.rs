//! Circuit builder for Orchor.
//!
//! Fluent consuming-self builder for the fixed gate sequences the
//! scenarios use. Out-of-range gates are dropped silently; use
//! [`CircuitBuilder::build_validated`] when a guarantee is needed.

use crate::circuit::Circuit;
use crate::error::OrchorResult;
use crate::gate::Gate;
use crate::types::{Angle, Basis, ClbitId, QubitId};

/// Fluent circuit builder (consuming self pattern)
pub struct CircuitBuilder {
    /// Internal circuit being built
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    pub fn h(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::H(qubit));
        self
    }

    /// Add Pauli-X gate
    pub fn x(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::X(qubit));
        self
    }

    /// Add Pauli-Y gate
    pub fn y(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Y(qubit));
        self
    }

    /// Add Pauli-Z gate
    pub fn z(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Z(qubit));
        self
    }

    /// Add S gate
    pub fn s(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::S(qubit));
        self
    }

    /// Add S-dagger gate
    pub fn sdg(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Sdg(qubit));
        self
    }

    /// Add Rx rotation
    pub fn rx(mut self, qubit: QubitId, angle: Angle) -> Self {
        let _ = self.circuit.add_gate(Gate::Rx(qubit, angle));
        self
    }

    /// Add Ry rotation
    pub fn ry(mut self, qubit: QubitId, angle: Angle) -> Self {
        let _ = self.circuit.add_gate(Gate::Ry(qubit, angle));
        self
    }

    /// Add Rz rotation
    pub fn rz(mut self, qubit: QubitId, angle: Angle) -> Self {
        let _ = self.circuit.add_gate(Gate::Rz(qubit, angle));
        self
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    pub fn cnot(mut self, control: QubitId, target: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Cnot(control, target));
        self
    }

    /// Alias for cnot
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    // ========================================================================
    // Measurement and Control
    // ========================================================================

    /// Add measurement on single qubit (result lands in cell of same index)
    pub fn measure(mut self, qubit: QubitId) -> Self {
        let _ = self.circuit.add_gate(Gate::Measure(qubit));
        self
    }

    /// Add measurement on all qubits
    pub fn measure_all(mut self) -> Self {
        let _ = self.circuit.add_gate(Gate::MeasureAll);
        self
    }

    /// Apply a basis transform, then measure
    pub fn measure_in(mut self, qubit: QubitId, basis: Basis) -> Self {
        for gate in Gate::basis_transform(qubit, basis) {
            let _ = self.circuit.add_gate(gate);
        }
        let _ = self.circuit.add_gate(Gate::Measure(qubit));
        self
    }

    /// Add a gate conditioned on a classical cell holding 1
    pub fn gate_if(mut self, bit: ClbitId, gate: Gate) -> Self {
        let _ = self
            .circuit
            .add_gate(Gate::Conditional(bit, Box::new(gate)));
        self
    }

    /// Add Pauli-X conditioned on a classical cell holding 1
    pub fn x_if(self, bit: ClbitId, qubit: QubitId) -> Self {
        self.gate_if(bit, Gate::X(qubit))
    }

    // ========================================================================
    // Layer Operations
    // ========================================================================

    /// Add Hadamard layer on all qubits
    pub fn h_layer(mut self) -> Self {
        for i in 0..self.circuit.num_qubits() {
            let _ = self.circuit.add_gate(Gate::H(i));
        }
        self
    }

    /// Add Hadamard gates on a range of qubits
    pub fn h_on(mut self, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        for q in qubits {
            let _ = self.circuit.add_gate(Gate::H(q));
        }
        self
    }

    /// Add CNOT chain over linear neighbours (0,1), (1,2), ...
    pub fn cnot_chain(mut self) -> Self {
        let n = self.circuit.num_qubits();
        for i in 0..n.saturating_sub(1) {
            let _ = self.circuit.add_gate(Gate::Cnot(i, i + 1));
        }
        self
    }

    /// Apply a basis transform (without measurement) on one qubit
    pub fn basis_change(mut self, qubit: QubitId, basis: Basis) -> Self {
        for gate in Gate::basis_transform(qubit, basis) {
            let _ = self.circuit.add_gate(gate);
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build, rejecting an empty circuit
    pub fn build_validated(self) -> OrchorResult<Circuit> {
        if self.circuit.is_empty() {
            return Err(crate::error::OrchorError::EmptyCircuit);
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .measure_all()
            .build();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.gate_count(), 4);
    }

    #[test]
    fn test_builder_chain() {
        let circuit = CircuitBuilder::new(5).h(0).cnot_chain().measure_all().build();

        // H + 4 CNOTs + MeasureAll
        assert_eq!(circuit.gate_count(), 6);
        assert_eq!(circuit.count_2q(), 4);
    }

    #[test]
    fn test_builder_h_on_range() {
        let circuit = CircuitBuilder::new(13).h_on(0..8).build();
        assert_eq!(circuit.count_1q(), 8);
    }

    #[test]
    fn test_builder_measure_in() {
        // X basis: H + measure
        let x_circ = CircuitBuilder::new(2).measure_in(0, Basis::X).build();
        assert_eq!(x_circ.gate_count(), 2);

        // Y basis: Sdg + H + measure
        let y_circ = CircuitBuilder::new(2).measure_in(0, Basis::Y).build();
        assert_eq!(y_circ.gate_count(), 3);

        // Z basis: bare measure
        let z_circ = CircuitBuilder::new(2).measure_in(0, Basis::Z).build();
        assert_eq!(z_circ.gate_count(), 1);
    }

    #[test]
    fn test_builder_conditional() {
        let circuit = CircuitBuilder::new(5).measure(0).x_if(0, 1).build();

        assert_eq!(circuit.count_conditionals(), 1);
        assert!(matches!(
            circuit.gates()[1],
            Gate::Conditional(0, ref inner) if **inner == Gate::X(1)
        ));
    }

    #[test]
    fn test_builder_drops_out_of_range() {
        let circuit = CircuitBuilder::new(2).h(0).h(7).build();
        assert_eq!(circuit.gate_count(), 1);
    }

    #[test]
    fn test_build_validated_empty() {
        assert!(CircuitBuilder::new(3).build_validated().is_err());
        assert!(CircuitBuilder::new(3).h(0).build_validated().is_ok());
    }
}
