//! Density-matrix states for QTN
//!
//! Gantree: L2_Sampling → MixedState
//!
//! A mixed state on `N` qubits is stored as its `2^N × 2^N` density matrix.
//! The tensor-index view has shape `[2; 2N]`: axes `0..N` are the row
//! qubits, axes `N..2N` the column qubits, and qubit 0 is the most
//! significant bit of a basis index.

use ndarray::{Array2, ArrayD, IxDyn};
use num_complex::Complex64;
use qtn_core::error::{QtnError, QtnResult};
use std::fmt;

/// Density matrix of an `N`-qubit register
/// Gantree: MixedState // 혼합 상태
#[derive(Debug, Clone, PartialEq)]
pub struct MixedState {
    /// Number of qubits
    num_qubits: usize,

    /// Row-major density matrix
    matrix: Array2<Complex64>,
}

impl MixedState {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Wrap a square `2^n × 2^n` matrix
    /// Gantree: from_matrix(matrix) -> QtnResult<Self> // 형태 검사
    pub fn from_matrix(matrix: Array2<Complex64>) -> QtnResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(QtnError::InvalidState(format!(
                "Density matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        if !rows.is_power_of_two() {
            return Err(QtnError::InvalidState(format!(
                "Density matrix dimension {} is not a power of two",
                rows
            )));
        }

        Ok(Self {
            num_qubits: rows.trailing_zeros() as usize,
            matrix,
        })
    }

    /// Wrap a matrix given as nested rows
    pub fn from_rows(rows: &[Vec<Complex64>]) -> QtnResult<Self> {
        let dim = rows.len();
        if rows.iter().any(|r| r.len() != dim) {
            return Err(QtnError::InvalidState(
                "Density matrix rows have inconsistent lengths".to_string(),
            ));
        }
        let matrix = Array2::from_shape_fn((dim, dim), |(i, j)| rows[i][j]);
        Self::from_matrix(matrix)
    }

    /// Wrap a real matrix given as nested rows
    pub fn from_real_rows(rows: &[Vec<f64>]) -> QtnResult<Self> {
        let complex: Vec<Vec<Complex64>> = rows
            .iter()
            .map(|r| r.iter().map(|&x| Complex64::new(x, 0.0)).collect())
            .collect();
        Self::from_rows(&complex)
    }

    /// Wrap a `[2; 2N]` density tensor
    pub fn from_tensor(tensor: ArrayD<Complex64>) -> QtnResult<Self> {
        let ndim = tensor.ndim();
        if ndim % 2 != 0 || tensor.shape().iter().any(|&d| d != 2) {
            return Err(QtnError::InvalidState(format!(
                "Density tensor must have shape [2; 2N], got {:?}",
                tensor.shape()
            )));
        }
        let dim = 1usize << (ndim / 2);
        let flat: Vec<Complex64> = tensor.iter().copied().collect();
        let matrix = Array2::from_shape_vec((dim, dim), flat)
            .map_err(|e| QtnError::InternalError(e.to_string()))?;
        Self::from_matrix(matrix)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension `2^N`
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Density matrix
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Density tensor with shape `[2; 2N]`
    pub fn tensor(&self) -> QtnResult<ArrayD<Complex64>> {
        let shape = vec![2usize; 2 * self.num_qubits];
        let flat: Vec<Complex64> = self.matrix.iter().copied().collect();
        ArrayD::from_shape_vec(IxDyn(&shape), flat)
            .map_err(|e| QtnError::InternalError(e.to_string()))
    }

    /// Density matrix as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Complex64>> {
        self.matrix.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Consume into the density matrix
    pub fn into_matrix(self) -> Array2<Complex64> {
        self.matrix
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Trace of the density matrix
    pub fn trace(&self) -> Complex64 {
        self.matrix.diag().iter().sum()
    }

    /// Check `ρ = ρ†` entrywise within `tol`
    pub fn is_hermitian(&self, tol: f64) -> bool {
        let n = self.dim();
        (0..n).all(|i| (i..n).all(|j| (self.matrix[[i, j]] - self.matrix[[j, i]].conj()).norm() <= tol))
    }

    /// Check positive semidefiniteness by a Cholesky factorization of `ρ + tol·I`
    /// Gantree: is_positive_semidefinite(tol) -> bool // 촐레스키
    pub fn is_positive_semidefinite(&self, tol: f64) -> bool {
        let n = self.dim();
        let mut l = Array2::<Complex64>::zeros((n, n));

        for j in 0..n {
            let mut diag = self.matrix[[j, j]].re + tol;
            for k in 0..j {
                diag -= l[[j, k]].norm_sqr();
            }
            if diag <= 0.0 {
                return false;
            }
            let pivot = diag.sqrt();
            l[[j, j]] = Complex64::new(pivot, 0.0);

            for i in (j + 1)..n {
                let mut acc = self.matrix[[i, j]];
                for k in 0..j {
                    acc -= l[[i, k]] * l[[j, k]].conj();
                }
                l[[i, j]] = acc / pivot;
            }
        }
        true
    }

    /// `Tr(ρ²)`, real part
    pub fn purity(&self) -> f64 {
        let dim = self.dim();
        let mut acc = Complex64::new(0.0, 0.0);
        for i in 0..dim {
            for j in 0..dim {
                acc += self.matrix[[i, j]] * self.matrix[[j, i]];
            }
        }
        acc.re
    }

    /// Purity of the reduced state on `keep`
    pub fn purity_of(&self, keep: &[usize]) -> QtnResult<f64> {
        Ok(self.partial_trace(keep)?.purity())
    }

    // ========================================================================
    // Reduction
    // ========================================================================

    /// Reduced state on the qubits in `keep`, in the given order
    /// Gantree: partial_trace(keep) -> QtnResult<MixedState> // 부분 대각합
    pub fn partial_trace(&self, keep: &[usize]) -> QtnResult<MixedState> {
        let n = self.num_qubits;
        for (pos, &q) in keep.iter().enumerate() {
            if q >= n {
                return Err(QtnError::InvalidState(format!(
                    "Qubit {} out of range for a {}-qubit state",
                    q, n
                )));
            }
            if keep[..pos].contains(&q) {
                return Err(QtnError::InvalidState(format!(
                    "Qubit {} listed twice in partial trace",
                    q
                )));
            }
        }

        let traced: Vec<usize> = (0..n).filter(|q| !keep.contains(q)).collect();
        let kept_dim = 1usize << keep.len();
        let env_dim = 1usize << traced.len();

        let compose = |sub: usize, env: usize| -> usize {
            scatter_bits(sub, keep, n) | scatter_bits(env, &traced, n)
        };

        let reduced = Array2::from_shape_fn((kept_dim, kept_dim), |(a, b)| {
            (0..env_dim)
                .map(|e| self.matrix[[compose(a, e), compose(b, e)]])
                .sum::<Complex64>()
        });

        MixedState::from_matrix(reduced)
    }
}

/// Place the bits of `value` (MSB first) at the register positions of `qubits`
fn scatter_bits(value: usize, qubits: &[usize], num_qubits: usize) -> usize {
    let width = qubits.len();
    qubits.iter().enumerate().fold(0, |acc, (i, &q)| {
        let bit = (value >> (width - 1 - i)) & 1;
        acc | (bit << (num_qubits - 1 - q))
    })
}

impl fmt::Display for MixedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MixedState({} qubits, purity={:.6})",
            self.num_qubits,
            self.purity()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
