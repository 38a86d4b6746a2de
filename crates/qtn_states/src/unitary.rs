//! Haar-random unitaries
//!
//! Gantree: L2_Sampling → HaarUnitary
//!
//! A Ginibre matrix (i.i.d. complex Gaussian entries) is orthonormalized
//! column by column. Gram–Schmidt leaves the implicit `R` factor with a
//! strictly positive real diagonal, which is the normalization under which
//! the `Q` factor is Haar distributed.

use ndarray::Array2;
use num_complex::Complex64;
use qtn_core::error::{QtnError, QtnResult};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Columns shorter than this after projection are treated as degenerate
const DEGENERATE_NORM: f64 = 1e-12;

/// Ginibre matrix with entries `(a + i b) / sqrt(2)`, `a, b ~ N(0, 1)`
///
/// Entries are drawn in row-major order, real part first.
pub fn ginibre<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Array2<Complex64> {
    let scale = std::f64::consts::FRAC_1_SQRT_2;
    let mut m = Array2::zeros((dim, dim));
    for i in 0..dim {
        for j in 0..dim {
            let re: f64 = StandardNormal.sample(rng);
            let im: f64 = StandardNormal.sample(rng);
            m[[i, j]] = Complex64::new(re * scale, im * scale);
        }
    }
    m
}

/// Haar-random `dim × dim` unitary
/// Gantree: haar_unitary(dim, rng) -> Array2 // Ginibre + Gram–Schmidt
pub fn haar_unitary<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> QtnResult<Array2<Complex64>> {
    let mut q = ginibre(dim, rng);
    orthonormalize_columns(&mut q)?;
    Ok(q)
}

/// Modified Gram–Schmidt over the columns, with one re-orthogonalization pass
fn orthonormalize_columns(m: &mut Array2<Complex64>) -> QtnResult<()> {
    let dim = m.ncols();

    for j in 0..dim {
        for _pass in 0..2 {
            for k in 0..j {
                let overlap: Complex64 = (0..m.nrows())
                    .map(|i| m[[i, k]].conj() * m[[i, j]])
                    .sum();
                for i in 0..m.nrows() {
                    let projected = m[[i, k]] * overlap;
                    m[[i, j]] -= projected;
                }
            }
        }

        let norm = m.column(j).iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if norm < DEGENERATE_NORM {
            return Err(QtnError::InternalError(format!(
                "Degenerate column {} while orthonormalizing",
                j
            )));
        }
        m.column_mut(j).mapv_inplace(|z| z / norm);
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn gram(u: &Array2<Complex64>) -> Array2<Complex64> {
        let dagger = u.t().mapv(|z| z.conj());
        dagger.dot(u)
    }

    #[test]
    fn test_unitary_columns_orthonormal() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let u = haar_unitary(8, &mut rng).unwrap();
        let g = gram(&u);

        for i in 0..8 {
            for j in 0..8 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(g[[i, j]].re, expected, epsilon = 1e-10);
                assert_relative_eq!(g[[i, j]].im, 0.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_same_seed_same_unitary() {
        let a = haar_unitary(4, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();
        let b = haar_unitary(4, &mut ChaCha20Rng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_by_one_is_phase() {
        let u = haar_unitary(1, &mut ChaCha20Rng::seed_from_u64(3)).unwrap();
        assert_relative_eq!(u[[0, 0]].norm(), 1.0, epsilon = 1e-12);
    }
}
