//! Test double for the contraction backend
//!
//! `VacuumContractor` ignores every gate and evaluates the measurements on
//! `|0…0⟩`. It counts calls so tests can check that rejected scripts never
//! reach the backend.

use crate::contractor::{ContractionRequest, Contractor};
use qtn_core::error::{QtnError, QtnResult};
use qtn_core::measurement::MeasurementKind;
use qtn_core::observable::Observable;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub(crate) struct VacuumContractor {
    calls: AtomicUsize,
}

impl VacuumContractor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Contractor for VacuumContractor {
    fn name(&self) -> &str {
        "vacuum"
    }

    fn contract(&self, request: &ContractionRequest<'_>) -> QtnResult<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        request
            .script
            .measurements()
            .iter()
            .map(|m| {
                let obs = m.observable().ok_or_else(|| {
                    QtnError::BackendError(format!("{} needs an observable", m.kind()))
                })?;
                match m.kind() {
                    MeasurementKind::Expval => vacuum_expval(obs),
                    MeasurementKind::Var => vacuum_var(obs),
                    other => Err(QtnError::BackendError(format!("cannot evaluate {}", other))),
                }
            })
            .collect()
    }
}

/// `⟨0…0| O |0…0⟩`
fn vacuum_expval(obs: &Observable) -> QtnResult<f64> {
    match obs {
        Observable::Named { name, .. } => match name.as_str() {
            "Identity" | "PauliZ" => Ok(1.0),
            "PauliX" | "PauliY" => Ok(0.0),
            "Hadamard" => Ok(std::f64::consts::FRAC_1_SQRT_2),
            other => Err(QtnError::BackendError(format!("unknown observable {}", other))),
        },
        Observable::Hermitian { matrix, .. } => matrix
            .first()
            .map(|z| z.re)
            .ok_or_else(|| QtnError::BackendError("empty Hermitian matrix".into())),
        Observable::Projector { state, wires } => {
            if state.len() == wires.len() {
                Ok(if state.iter().all(|&b| b == 0.0) { 1.0 } else { 0.0 })
            } else {
                Ok(state.first().map(|a| a * a).unwrap_or(0.0))
            }
        }
        Observable::SparseHamiltonian { entries, .. } => Ok(entries
            .iter()
            .filter(|(r, c, _)| *r == 0 && *c == 0)
            .map(|(_, _, v)| v.re)
            .sum()),
        Observable::Sum { coeffs, terms, .. } => coeffs
            .iter()
            .zip(terms)
            .map(|(c, t)| vacuum_expval(t).map(|e| c * e))
            .sum(),
        Observable::Prod(terms) => terms.iter().map(vacuum_expval).product(),
    }
}

/// `⟨O²⟩ - ⟨O⟩²` on `|0…0⟩`, for the observables where that is cheap
fn vacuum_var(obs: &Observable) -> QtnResult<f64> {
    match obs {
        Observable::Named { name, .. } => match name.as_str() {
            "Identity" | "PauliZ" => Ok(0.0),
            "PauliX" | "PauliY" => Ok(1.0),
            "Hadamard" => Ok(0.5),
            other => Err(QtnError::BackendError(format!("unknown observable {}", other))),
        },
        Observable::Hermitian { matrix, wires } => {
            let dim = 1usize << wires.len();
            let mean = vacuum_expval(obs)?;
            let second: f64 = (0..dim)
                .filter_map(|k| matrix.get(k * dim))
                .map(|z| z.norm_sqr())
                .sum();
            Ok(second - mean * mean)
        }
        other => Err(QtnError::BackendError(format!(
            "variance of {} is not available on the vacuum double",
            other.name()
        ))),
    }
}
