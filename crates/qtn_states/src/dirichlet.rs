//! Flat Dirichlet weights
//!
//! Gantree: L2_Sampling → FlatDirichlet

use qtn_core::error::{QtnError, QtnResult};
use rand::Rng;
use rand_distr::{Dirichlet, Distribution};

/// Sample `len` weights from Dirichlet(1, ..., 1)
///
/// The result is non-negative and sums to one. A single weight is always 1.
pub fn flat_dirichlet<R: Rng + ?Sized>(len: usize, rng: &mut R) -> QtnResult<Vec<f64>> {
    match len {
        0 => Err(QtnError::InternalError(
            "Dirichlet weights need at least one component".to_string(),
        )),
        1 => Ok(vec![1.0]),
        _ => {
            let dirichlet = Dirichlet::new_with_size(1.0, len)
                .map_err(|e| QtnError::InternalError(e.to_string()))?;
            Ok(dirichlet.sample(rng))
        }
    }
}
