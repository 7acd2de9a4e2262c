//! Reduced density matrices and the scalar metrics derived from them.
//!
//! A [`DensityMatrix`] is produced by tracing qubits out of a pure
//! [`Statevector`]. Bloch vectors come from the Pauli traces Tr(ρσ),
//! purity from Tr(ρ²), and entanglement entropy from the eigenvalue
//! spectrum with the 1e-12 floor applied before the logarithm.

use crate::statevector::Statevector;
use num_complex::Complex64;
use orchor_core::numeric::{
    EIGENVALUE_FLOOR, ENTROPY_EPS, JACOBI_CONVERGENCE, JACOBI_MAX_SWEEPS,
};
use orchor_core::{OrchorError, OrchorResult, QubitId};

/// Density matrix of a qubit subsystem (row-major, dim x dim)
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix {
    data: Vec<Complex64>,
    dim: usize,
}

impl DensityMatrix {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build from row-major entries
    pub fn from_rows(data: Vec<Complex64>, dim: usize) -> OrchorResult<Self> {
        if data.len() != dim * dim {
            return Err(OrchorError::InternalError(format!(
                "density matrix data length {} does not match dim {}",
                data.len(),
                dim
            )));
        }
        Ok(Self { data, dim })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of qubits described (log2 of dim)
    pub fn num_qubits(&self) -> usize {
        self.dim.trailing_zeros() as usize
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// Trace (real part; imaginary part vanishes for Hermitian matrices)
    pub fn trace(&self) -> f64 {
        (0..self.dim).map(|i| self.get(i, i).re).sum()
    }

    // ========================================================================
    // Scalar Metrics
    // ========================================================================

    /// Purity Tr(ρ²); 1 for a pure state, 1/dim for the maximally mixed one
    pub fn purity(&self) -> f64 {
        // Tr(ρ²) = Σ|ρ_ij|² for Hermitian ρ
        self.data.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Bloch vector (x, y, z) of a single-qubit density matrix, computed as
    /// the traces against the three Pauli matrices
    pub fn bloch_vector(&self) -> OrchorResult<[f64; 3]> {
        if self.dim != 2 {
            return Err(OrchorError::InvalidTraceSubset(format!(
                "Bloch vector needs a single-qubit matrix, got dim {}",
                self.dim
            )));
        }

        let rho01 = self.get(0, 1);
        let rho10 = self.get(1, 0);
        let x = (rho01 + rho10).re;
        let y = ((rho01 - rho10) * Complex64::new(0.0, 1.0)).re;
        let z = (self.get(0, 0) - self.get(1, 1)).re;
        Ok([x, y, z])
    }

    /// Eigenvalues of the (Hermitian) matrix, descending.
    ///
    /// Runs cyclic Jacobi on the real-symmetric embedding
    /// [[Re ρ, -Im ρ], [Im ρ, Re ρ]], whose spectrum is that of ρ with every
    /// eigenvalue doubled.
    pub fn eigenvalues(&self) -> OrchorResult<Vec<f64>> {
        let n = self.dim;
        let m = 2 * n;
        let mut a = vec![0.0f64; m * m];
        for i in 0..n {
            for j in 0..n {
                let c = self.get(i, j);
                a[i * m + j] = c.re;
                a[i * m + (n + j)] = -c.im;
                a[(n + i) * m + j] = c.im;
                a[(n + i) * m + (n + j)] = c.re;
            }
        }

        jacobi_eigenvalues(&mut a, m)?;

        let mut diag: Vec<f64> = (0..m).map(|i| a[i * m + i]).collect();
        diag.sort_by(|p, q| q.partial_cmp(p).unwrap_or(std::cmp::Ordering::Equal));

        // Doubled spectrum: adjacent sorted entries pair up
        Ok(diag.into_iter().step_by(2).collect())
    }

    /// Von Neumann entropy in bits: −Σ λ·log2(λ + ε) over eigenvalues above
    /// the numeric floor
    pub fn von_neumann_entropy(&self) -> OrchorResult<f64> {
        let entropy = self
            .eigenvalues()?
            .into_iter()
            .filter(|&l| l > EIGENVALUE_FLOOR)
            .map(|l| -l * (l + ENTROPY_EPS).log2())
            .sum();
        Ok(entropy)
    }
}

// ============================================================================
// Jacobi Iteration
// ============================================================================

/// Diagonalize a symmetric matrix in place by cyclic Jacobi rotations.
/// Only the eigenvalues (diagonal) are needed, so rotations are not
/// accumulated.
fn jacobi_eigenvalues(a: &mut [f64], m: usize) -> OrchorResult<()> {
    for _ in 0..JACOBI_MAX_SWEEPS {
        let off: f64 = off_diagonal_mass(a, m);
        if off < JACOBI_CONVERGENCE {
            return Ok(());
        }

        for p in 0..m {
            for q in (p + 1)..m {
                let apq = a[p * m + q];
                if apq.abs() <= EIGENVALUE_FLOOR {
                    continue;
                }

                let app = a[p * m + p];
                let aqq = a[q * m + q];
                let tau = (aqq - app) / (2.0 * apq);
                let t = if tau >= 0.0 {
                    1.0 / (tau + (1.0 + tau * tau).sqrt())
                } else {
                    -1.0 / (-tau + (1.0 + tau * tau).sqrt())
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = t * c;

                for k in 0..m {
                    let akp = a[k * m + p];
                    let akq = a[k * m + q];
                    a[k * m + p] = c * akp - s * akq;
                    a[k * m + q] = s * akp + c * akq;
                }
                for k in 0..m {
                    let apk = a[p * m + k];
                    let aqk = a[q * m + k];
                    a[p * m + k] = c * apk - s * aqk;
                    a[q * m + k] = s * apk + c * aqk;
                }
            }
        }
    }

    if off_diagonal_mass(a, m) < JACOBI_CONVERGENCE {
        Ok(())
    } else {
        Err(OrchorError::EigensolverFailed {
            sweeps: JACOBI_MAX_SWEEPS,
        })
    }
}

fn off_diagonal_mass(a: &[f64], m: usize) -> f64 {
    let mut off = 0.0;
    for p in 0..m {
        for q in 0..m {
            if p != q {
                off += a[p * m + q] * a[p * m + q];
            }
        }
    }
    off
}

// ============================================================================
// Partial Trace
// ============================================================================

impl Statevector {
    /// Full density matrix ρ = |ψ⟩⟨ψ|
    pub fn density_matrix(&self) -> DensityMatrix {
        let dim = self.dim();
        let amps = self.amplitudes();
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                data[i * dim + j] = amps[i] * amps[j].conj();
            }
        }
        DensityMatrix { data, dim }
    }

    /// Reduced density matrix of the `keep` qubits, tracing out the rest.
    ///
    /// `keep[0]` becomes bit 0 of the reduced index.
    pub fn reduced_density_matrix(&self, keep: &[QubitId]) -> OrchorResult<DensityMatrix> {
        let n = self.num_qubits();
        if keep.is_empty() {
            return Err(OrchorError::InvalidTraceSubset("keep-set is empty".into()));
        }
        for &q in keep {
            if q >= n {
                return Err(OrchorError::QubitOutOfRange { qubit: q, max: n });
            }
        }
        let mut sorted = keep.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != keep.len() {
            return Err(OrchorError::InvalidTraceSubset(format!(
                "duplicate qubits in keep-set {:?}",
                keep
            )));
        }

        let env: Vec<usize> = (0..n).filter(|q| !keep.contains(q)).collect();
        let dim = 1usize << keep.len();
        let env_dim = 1usize << env.len();
        let amps = self.amplitudes();

        let embed = |sub: usize, positions: &[usize]| -> usize {
            positions
                .iter()
                .enumerate()
                .filter(|(b, _)| (sub >> b) & 1 == 1)
                .map(|(_, &q)| 1usize << q)
                .sum()
        };

        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            let base_i = embed(i, keep);
            for j in 0..dim {
                let base_j = embed(j, keep);
                let mut sum = Complex64::new(0.0, 0.0);
                for e in 0..env_dim {
                    let rest = embed(e, &env);
                    sum += amps[base_i | rest] * amps[base_j | rest].conj();
                }
                data[i * dim + j] = sum;
            }
        }

        Ok(DensityMatrix { data, dim })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use orchor_core::CircuitBuilder;

    fn bell_pair() -> Statevector {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        Statevector::from_circuit(&circuit).unwrap()
    }

    fn ghz3() -> Statevector {
        let circuit = CircuitBuilder::new(3).h(0).cnot(0, 1).cnot(1, 2).build();
        Statevector::from_circuit(&circuit).unwrap()
    }

    #[test]
    fn test_bloch_zero_state() {
        let sv = Statevector::zero(1);
        let rho = sv.reduced_density_matrix(&[0]).unwrap();
        let bloch = rho.bloch_vector().unwrap();
        assert_relative_eq!(bloch[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[2], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bloch_plus_state() {
        let circuit = CircuitBuilder::new(1).h(0).build();
        let sv = Statevector::from_circuit(&circuit).unwrap();
        let bloch = sv
            .reduced_density_matrix(&[0])
            .unwrap()
            .bloch_vector()
            .unwrap();
        assert_relative_eq!(bloch[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[2], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bloch_y_state() {
        // S·H|0⟩ points along +y
        let circuit = CircuitBuilder::new(1).h(0).s(0).build();
        let sv = Statevector::from_circuit(&circuit).unwrap();
        let bloch = sv
            .reduced_density_matrix(&[0])
            .unwrap()
            .bloch_vector()
            .unwrap();
        assert_relative_eq!(bloch[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bell_reduced_is_maximally_mixed() {
        let sv = bell_pair();
        let rho = sv.reduced_density_matrix(&[0]).unwrap();

        assert_relative_eq!(rho.trace(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(rho.purity(), 0.5, epsilon = 1e-10);

        let bloch = rho.bloch_vector().unwrap();
        assert_relative_eq!(bloch[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch[2], 0.0, epsilon = 1e-10);

        assert_relative_eq!(rho.von_neumann_entropy().unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pure_state_entropy_zero() {
        let sv = Statevector::zero(2);
        let rho = sv.density_matrix();
        assert_relative_eq!(rho.purity(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(rho.von_neumann_entropy().unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ghz_pair_entanglement() {
        // Tracing one qubit out of GHZ leaves eigenvalues {1/2, 1/2, 0, 0}
        let sv = ghz3();
        let rho = sv.reduced_density_matrix(&[0, 1]).unwrap();

        assert_relative_eq!(rho.trace(), 1.0, epsilon = 1e-10);

        let eigs = rho.eigenvalues().unwrap();
        assert_eq!(eigs.len(), 4);
        assert_relative_eq!(eigs[0], 0.5, epsilon = 1e-8);
        assert_relative_eq!(eigs[1], 0.5, epsilon = 1e-8);
        assert_relative_eq!(eigs[2], 0.0, epsilon = 1e-8);
        assert_relative_eq!(eigs[3], 0.0, epsilon = 1e-8);

        assert_relative_eq!(rho.von_neumann_entropy().unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_entropy_bounds() {
        // 0 <= S <= log2(min dim) for every bipartition of a pure state
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .h(1)
            .cnot(0, 1)
            .cnot(1, 2)
            .rz(0, 0.3)
            .ry(1, 0.4)
            .rx(2, 0.2)
            .build();
        let sv = Statevector::from_circuit(&circuit).unwrap();

        for pair in [[0, 1], [1, 2], [0, 2]] {
            let s = sv
                .reduced_density_matrix(&pair)
                .unwrap()
                .von_neumann_entropy()
                .unwrap();
            // Complement of a pair is one qubit, so the bound is 1 bit
            assert!((-1e-9..=1.0 + 1e-9).contains(&s), "S({:?}) = {}", pair, s);
        }
    }

    #[test]
    fn test_reduced_trace_every_qubit() {
        let sv = ghz3();
        for q in 0..3 {
            let rho = sv.reduced_density_matrix(&[q]).unwrap();
            assert_relative_eq!(rho.trace(), 1.0, epsilon = 1e-10);
            let p = rho.purity();
            assert!((0.0..=1.0 + 1e-10).contains(&p));
        }
    }

    #[test]
    fn test_separable_qubit_stays_pure() {
        // Qubit 2 untouched by the Bell pair on 0,1
        let circuit = CircuitBuilder::new(3).h(0).cnot(0, 1).build();
        let sv = Statevector::from_circuit(&circuit).unwrap();
        let rho = sv.reduced_density_matrix(&[2]).unwrap();
        assert_relative_eq!(rho.purity(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(rho.von_neumann_entropy().unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_keep_sets() {
        let sv = ghz3();
        assert!(sv.reduced_density_matrix(&[]).is_err());
        assert!(sv.reduced_density_matrix(&[5]).is_err());
        assert!(sv.reduced_density_matrix(&[0, 0]).is_err());
    }

    #[test]
    fn test_bloch_requires_single_qubit() {
        let sv = ghz3();
        let rho = sv.reduced_density_matrix(&[0, 1]).unwrap();
        assert!(rho.bloch_vector().is_err());
    }

    #[test]
    fn test_from_rows_dimension_check() {
        let bad = DensityMatrix::from_rows(vec![Complex64::new(1.0, 0.0); 3], 2);
        assert!(bad.is_err());
    }
}
