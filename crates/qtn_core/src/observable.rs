//! Observables for QTN
//!
//! Gantree: L1_Circuit → Observable

use crate::types::Wires;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flavour of a weighted sum of observables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SumKind {
    /// Legacy Hamiltonian
    Hamiltonian,
    /// Linear combination of operators
    LinearCombination,
}

impl SumKind {
    /// Name of the observable class
    pub fn name(&self) -> &'static str {
        match self {
            SumKind::Hamiltonian => "Hamiltonian",
            SumKind::LinearCombination => "LinearCombination",
        }
    }
}

/// Observable measured by an expectation value or variance
/// Gantree: Observable // 관측량
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Observable {
    /// Named single-wire observable (`Identity`, `Hadamard`, `PauliX`, ...)
    Named { name: String, wires: Wires },

    /// Hermitian matrix, row-major
    Hermitian { matrix: Vec<Complex64>, wires: Wires },

    /// Projector onto a basis state (bits) or a state vector (amplitudes)
    Projector { state: Vec<f64>, wires: Wires },

    /// Sparse Hamiltonian given as (row, col, value) triplets
    SparseHamiltonian {
        entries: Vec<(usize, usize, Complex64)>,
        wires: Wires,
    },

    /// Weighted sum of observables
    Sum {
        kind: SumKind,
        coeffs: Vec<f64>,
        terms: Vec<Observable>,
    },

    /// Tensor product of observables
    Prod(Vec<Observable>),
}

impl Observable {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Identity
    pub fn identity(wire: impl Into<Wires>) -> Self {
        Self::named("Identity", wire)
    }

    /// Hadamard
    pub fn hadamard(wire: impl Into<Wires>) -> Self {
        Self::named("Hadamard", wire)
    }

    /// Pauli-X
    pub fn x(wire: impl Into<Wires>) -> Self {
        Self::named("PauliX", wire)
    }

    /// Pauli-Y
    pub fn y(wire: impl Into<Wires>) -> Self {
        Self::named("PauliY", wire)
    }

    /// Pauli-Z
    pub fn z(wire: impl Into<Wires>) -> Self {
        Self::named("PauliZ", wire)
    }

    /// Any named observable
    pub fn named(name: impl Into<String>, wires: impl Into<Wires>) -> Self {
        Observable::Named {
            name: name.into(),
            wires: wires.into(),
        }
    }

    /// Hermitian matrix observable
    pub fn hermitian(matrix: Vec<Complex64>, wires: impl Into<Wires>) -> Self {
        Observable::Hermitian {
            matrix,
            wires: wires.into(),
        }
    }

    /// Projector observable
    pub fn projector(state: Vec<f64>, wires: impl Into<Wires>) -> Self {
        Observable::Projector {
            state,
            wires: wires.into(),
        }
    }

    /// Hamiltonian sum
    pub fn hamiltonian(coeffs: Vec<f64>, terms: Vec<Observable>) -> Self {
        Observable::Sum {
            kind: SumKind::Hamiltonian,
            coeffs,
            terms,
        }
    }

    /// Linear combination sum
    pub fn linear_combination(coeffs: Vec<f64>, terms: Vec<Observable>) -> Self {
        Observable::Sum {
            kind: SumKind::LinearCombination,
            coeffs,
            terms,
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Class name of the observable
    pub fn name(&self) -> &str {
        match self {
            Observable::Named { name, .. } => name,
            Observable::Hermitian { .. } => "Hermitian",
            Observable::Projector { .. } => "Projector",
            Observable::SparseHamiltonian { .. } => "SparseHamiltonian",
            Observable::Sum { kind, .. } => kind.name(),
            Observable::Prod(_) => "Prod",
        }
    }

    /// Wires the observable acts on
    pub fn wires(&self) -> Wires {
        match self {
            Observable::Named { wires, .. }
            | Observable::Hermitian { wires, .. }
            | Observable::Projector { wires, .. }
            | Observable::SparseHamiltonian { wires, .. } => wires.clone(),
            Observable::Sum { terms, .. } | Observable::Prod(terms) => terms
                .iter()
                .flat_map(|t| t.wires().labels().to_vec())
                .collect(),
        }
    }

    /// Sub-observables of a composite (empty for leaves)
    pub fn terms(&self) -> &[Observable] {
        match self {
            Observable::Sum { terms, .. } | Observable::Prod(terms) => terms,
            _ => &[],
        }
    }

    /// Check if the observable is built from other observables
    pub fn is_composite(&self) -> bool {
        matches!(self, Observable::Sum { .. } | Observable::Prod(_))
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.wires())
    }
}

// ============================================================================
// Tests
// ============================================================================
