//! Quantum circuit structure for Orchor.
//!
//! A circuit owns a fixed-size qubit register, the parallel classical
//! register (same length, cell q receives the measurement of qubit q), and
//! the ordered gate sequence. Semantics are the ordered composition of the
//! gates on the register's joint state.

use crate::error::{OrchorError, OrchorResult};
use crate::gate::Gate;
use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quantum circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits (and classical cells)
    num_qubits: usize,

    /// Gate sequence
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            name: Some(name.into()),
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, gates: Vec<Gate>) -> OrchorResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    pub fn add_gate(&mut self, gate: Gate) -> OrchorResult<()> {
        self.validate_gate(&gate)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> OrchorResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of classical cells (parallel to the qubit register)
    pub fn num_clbits(&self) -> usize {
        self.num_qubits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    pub fn depth(&self) -> usize {
        if self.gates.is_empty() {
            return 0;
        }

        // Track the depth at each qubit
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qubits = gate.qubits();
            if qubits.is_empty() {
                // MeasureAll touches every qubit
                let max_depth = *qubit_depths.iter().max().unwrap_or(&0);
                for d in &mut qubit_depths {
                    *d = max_depth + 1;
                }
            } else {
                let max_depth = qubits
                    .iter()
                    .filter_map(|&q| qubit_depths.get(q))
                    .max()
                    .copied()
                    .unwrap_or(0);

                for &q in &qubits {
                    if q < self.num_qubits {
                        qubit_depths[q] = max_depth + 1;
                    }
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.gates.iter().filter(|g| g.is_measurement()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates.iter().filter(|g| g.is_parameterized()).count()
    }

    /// Count classically-conditioned gates
    pub fn count_conditionals(&self) -> usize {
        self.gates.iter().filter(|g| g.is_conditional()).count()
    }

    /// Check whether the circuit contains any measurement
    pub fn has_measurements(&self) -> bool {
        self.gates.iter().any(|g| g.is_measurement())
    }

    /// Check whether the circuit contains any conditioned gate
    pub fn has_conditionals(&self) -> bool {
        self.gates.iter().any(|g| g.is_conditional())
    }

    /// Get qubits used in the circuit
    pub fn used_qubits(&self) -> HashSet<QubitId> {
        let mut used = HashSet::new();
        for gate in &self.gates {
            for qubit in gate.qubits() {
                used.insert(qubit);
            }
        }
        used
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate_gate(&self, gate: &Gate) -> OrchorResult<()> {
        for &qubit in &gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(OrchorError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }

        if let Some(angle) = gate.angle() {
            if !angle.is_finite() {
                return Err(OrchorError::InvalidAngle(angle));
            }
        }

        if let Gate::Conditional(bit, inner) = gate {
            if *bit >= self.num_clbits() {
                return Err(OrchorError::ClbitOutOfRange {
                    bit: *bit,
                    size: self.num_clbits(),
                });
            }
            if !inner.is_unitary() {
                return Err(OrchorError::InvalidConditionalGate(inner.name().into()));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Text Rendering
    // ========================================================================

    /// Render the circuit as a per-qubit lane diagram.
    ///
    /// One column per gate, in program order; controls print as `●`, CNOT
    /// targets as `⊕`, measurements as `M`, conditioned gates carry a
    /// `?c<bit>` tag.
    pub fn draw(&self) -> String {
        let n = self.num_qubits;
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(self.gates.len());

        for gate in &self.gates {
            let mut col = vec![String::new(); n];
            match gate {
                Gate::Cnot(c, t) => {
                    col[*c] = "●".to_string();
                    col[*t] = "⊕".to_string();
                }
                Gate::Measure(q) => col[*q] = "M".to_string(),
                Gate::MeasureAll => {
                    for cell in col.iter_mut() {
                        *cell = "M".to_string();
                    }
                }
                Gate::Conditional(bit, inner) => {
                    for q in inner.qubits() {
                        col[q] = format!("{}?c{}", inner.name(), bit);
                    }
                }
                single => {
                    let token = match single {
                        Gate::Rx(_, a) => format!("rx({:.2})", a),
                        Gate::Ry(_, a) => format!("ry({:.2})", a),
                        Gate::Rz(_, a) => format!("rz({:.2})", a),
                        other => other.name().to_string(),
                    };
                    for q in single.qubits() {
                        col[q] = token.clone();
                    }
                }
            }
            columns.push(col);
        }

        let widths: Vec<usize> = columns
            .iter()
            .map(|col| col.iter().map(|t| t.chars().count()).max().unwrap_or(1).max(1))
            .collect();

        let mut out = String::new();
        for q in 0..n {
            out.push_str(&format!("q[{:>2}]: ", q));
            for (col, &width) in columns.iter().zip(&widths) {
                out.push('─');
                out.push_str(&pad_token(&col[q], width));
            }
            out.push('─');
            out.push('\n');
        }
        out
    }
}

/// Center `token` in a lane segment of `width` characters, filling with `─`
fn pad_token(token: &str, width: usize) -> String {
    let len = token.chars().count();
    if len >= width {
        return token.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", "─".repeat(left), token, "─".repeat(right))
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} gates)",
            self.num_qubits,
            self.gates.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        writeln!(f, "  Measurements: {}", self.count_measurements())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
