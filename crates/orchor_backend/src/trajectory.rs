//! Shot-sampling trajectory backend.
//!
//! Each shot evolves its own statevector through the gate sequence.
//! `Measure` samples the qubit from |amplitude|², collapses the survivor
//! branch, and records the outcome in the classical register; conditioned
//! gates consult that register. The final register is the shot's bitstring.

use crate::execution::{Backend, RunMetadata, RunResult};
use orchor_core::sampling::{MAX_SHOTS, MIN_SHOTS};
use orchor_core::{Bitstring, Circuit, Counts, Gate, OrchorError, OrchorResult, QubitId};
use orchor_state::Statevector;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Trajectory simulator backend
pub struct TrajectoryBackend {
    /// Backend name
    name: String,

    /// Qubit capacity
    num_qubits: usize,

    /// Random seed
    seed: Option<u64>,
}

impl TrajectoryBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new trajectory backend
    pub fn new(num_qubits: usize) -> Self {
        Self {
            name: "orchor_trajectory".to_string(),
            num_qubits,
            seed: None,
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set backend name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Run all shots and accumulate counts
    fn simulate(&self, circuit: &Circuit, shots: u64, rng: &mut StdRng) -> OrchorResult<Counts> {
        let mut counts: Counts = HashMap::new();

        for _ in 0..shots {
            let bitstring = self.simulate_single_shot(circuit, rng)?;
            *counts.entry(bitstring).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Run one trajectory through the circuit
    fn simulate_single_shot(&self, circuit: &Circuit, rng: &mut StdRng) -> OrchorResult<String> {
        let n = circuit.num_qubits();
        let mut state = Statevector::zero(n);
        let mut register = Bitstring::zeros(n);

        for gate in circuit.gates() {
            match gate {
                Gate::Measure(q) => {
                    Self::measure_qubit(&mut state, &mut register, *q, rng)?;
                }
                Gate::MeasureAll => {
                    for q in 0..n {
                        Self::measure_qubit(&mut state, &mut register, q, rng)?;
                    }
                }
                Gate::Conditional(bit, inner) => {
                    if register.get(*bit) == Some(true) {
                        state.apply_gate(inner)?;
                    }
                }
                unitary => state.apply_gate(unitary)?,
            }
        }

        Ok(register.to_string())
    }

    /// Sample one qubit, collapse the state, store the classical bit
    fn measure_qubit(
        state: &mut Statevector,
        register: &mut Bitstring,
        qubit: QubitId,
        rng: &mut StdRng,
    ) -> OrchorResult<()> {
        let p_one = state.prob_one(qubit);
        let outcome = rng.gen::<f64>() < p_one;
        state.collapse(qubit, outcome)?;
        register.set(qubit, outcome)
    }
}

impl Backend for TrajectoryBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn supports_conditional(&self) -> bool {
        true
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> OrchorResult<RunResult> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(OrchorError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                max: self.num_qubits,
            });
        }
        if !(MIN_SHOTS..=MAX_SHOTS).contains(&shots) {
            return Err(OrchorError::ShotsOutOfRange(shots, MIN_SHOTS, MAX_SHOTS));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let counts = self.simulate(circuit, shots, &mut rng)?;

        Ok(RunResult {
            counts,
            shots,
            metadata: RunMetadata {
                backend: self.name.clone(),
                simulated: true,
                seed: self.seed,
                ..Default::default()
            },
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orchor_core::CircuitBuilder;

    #[test]
    fn test_bell_sampling() {
        let backend = TrajectoryBackend::new(3).with_seed(42);

        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).measure_all().build();
        let result = backend.execute(&circuit, 1000).unwrap();

        // Should get approximately 50% |00⟩ and 50% |11⟩
        let p00 = result.probability("00");
        let p11 = result.probability("11");

        assert!(p00 > 0.4 && p00 < 0.6, "P(00) = {}", p00);
        assert!(p11 > 0.4 && p11 < 0.6, "P(11) = {}", p11);
        assert!((result.probability("01") - 0.0).abs() < 1e-12);
        assert!((result.probability("10") - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_sum_to_shots() {
        let backend = TrajectoryBackend::new(3).with_seed(7);
        let circuit = CircuitBuilder::new(3).h_layer().measure_all().build();

        let result = backend.execute(&circuit, 2048).unwrap();
        assert_eq!(result.total_counts(), 2048);
    }

    #[test]
    fn test_bitstring_width_matches_register() {
        let backend = TrajectoryBackend::new(5).with_seed(3);
        let circuit = CircuitBuilder::new(5).h(0).measure(0).build();

        let result = backend.execute(&circuit, 64).unwrap();
        for bitstring in result.counts.keys() {
            assert_eq!(bitstring.len(), 5);
        }
    }

    #[test]
    fn test_bit_order_cell_zero_rightmost() {
        let backend = TrajectoryBackend::new(3).with_seed(1);
        let circuit = CircuitBuilder::new(3).x(0).measure_all().build();

        let result = backend.execute(&circuit, 16).unwrap();
        assert_eq!(result.probability("001"), 1.0);
    }

    #[test]
    fn test_conditional_propagates_collapse() {
        // After measure(0), the conditioned X copies c0 into qubit 1
        let backend = TrajectoryBackend::new(2).with_seed(11);
        let circuit = CircuitBuilder::new(2)
            .h(0)
            .measure(0)
            .x_if(0, 1)
            .measure(1)
            .build();

        let result = backend.execute(&circuit, 512).unwrap();
        let correlated = result.probability("00") + result.probability("11");
        assert!((correlated - 1.0).abs() < 1e-12);
        assert!(result.probability("00") > 0.3);
        assert!(result.probability("11") > 0.3);
    }

    #[test]
    fn test_unmeasured_cells_stay_zero() {
        let backend = TrajectoryBackend::new(3).with_seed(5);
        let circuit = CircuitBuilder::new(3).h(2).x(1).measure(1).build();

        let result = backend.execute(&circuit, 32).unwrap();
        // Only cell 1 was written; q2's superposition never reaches c2
        assert_eq!(result.probability("010"), 1.0);
    }

    #[test]
    fn test_mid_circuit_measurement_freezes_branch() {
        // measure(0) collapses before the second H, so the final
        // distribution differs from measuring H·H|0⟩ = |0⟩
        let backend = TrajectoryBackend::new(1).with_seed(23);
        let circuit = CircuitBuilder::new(1).h(0).measure(0).h(0).measure(0).build();

        let result = backend.execute(&circuit, 1024).unwrap();
        let p1 = result.probability("1");
        assert!(p1 > 0.4 && p1 < 0.6, "P(1) = {}", p1);
    }

    #[test]
    fn test_qubit_limit() {
        let backend = TrajectoryBackend::new(3);
        let circuit = CircuitBuilder::new(5).h(0).build();

        assert!(matches!(
            backend.execute(&circuit, 100),
            Err(OrchorError::QubitOutOfRange { .. })
        ));
    }

    #[test]
    fn test_shots_bounds() {
        let backend = TrajectoryBackend::new(2).with_seed(9);
        let circuit = CircuitBuilder::new(2).h(0).measure_all().build();

        assert!(matches!(
            backend.execute(&circuit, 0),
            Err(OrchorError::ShotsOutOfRange(..))
        ));
    }

    #[test]
    fn test_seed_reproducibility() {
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .measure_all()
            .build();

        let result1 = TrajectoryBackend::new(3)
            .with_seed(42)
            .execute(&circuit, 256)
            .unwrap();
        let result2 = TrajectoryBackend::new(3)
            .with_seed(42)
            .execute(&circuit, 256)
            .unwrap();

        assert_eq!(result1.counts, result2.counts);
    }

    #[test]
    fn test_supports_conditional() {
        let backend = TrajectoryBackend::new(2);
        assert!(backend.supports_conditional());
    }
}
