//! Python bindings for the mixed-state fixtures
//!
//! Gantree: L9_Python → States

use crate::errors::to_py_err;
use num_complex::Complex64;
use pyo3::prelude::*;
use qtn_states::{MixedState, MixedStateSampler};

/// Random density matrix on `num_qubits` qubits
///
/// Without a seed the default fixture seeds are used, so repeated calls
/// return the same matrix.
#[pyfunction]
#[pyo3(signature = (num_qubits, seed=None))]
pub fn random_mixed_state(num_qubits: usize, seed: Option<u64>) -> PyResult<Vec<Vec<Complex64>>> {
    let sampler = match seed {
        Some(seed) => MixedStateSampler::from_seed(seed),
        None => MixedStateSampler::new(),
    };
    sampler
        .sample(num_qubits)
        .map(|state| state.to_rows())
        .map_err(to_py_err)
}

/// Purity `Tr(ρ²)` of a density matrix, optionally of the reduced state on `wires`
#[pyfunction]
#[pyo3(signature = (matrix, wires=None))]
pub fn purity(matrix: Vec<Vec<Complex64>>, wires: Option<Vec<usize>>) -> PyResult<f64> {
    let state = MixedState::from_rows(&matrix).map_err(to_py_err)?;
    match wires {
        Some(wires) => state.purity_of(&wires).map_err(to_py_err),
        None => Ok(state.purity()),
    }
}
