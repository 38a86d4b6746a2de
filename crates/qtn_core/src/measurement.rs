//! Measurement requests for QTN
//!
//! Gantree: L1_Circuit → Measurement

use crate::observable::Observable;
use crate::types::Wires;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of measurement process
/// Gantree: MeasurementKind // 측정 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Expectation value of an observable
    Expval,
    /// Variance of an observable
    Var,
    /// Computational-basis probabilities
    Probs,
    /// Raw samples
    Sample,
    /// Sample counts
    Counts,
    /// Full state vector
    State,
    /// Reduced density matrix
    DensityMatrix,
    /// Purity of a subsystem
    Purity,
    /// Von Neumann entropy of a subsystem
    VnEntropy,
}

impl MeasurementKind {
    /// Short name
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementKind::Expval => "expval",
            MeasurementKind::Var => "var",
            MeasurementKind::Probs => "probs",
            MeasurementKind::Sample => "sample",
            MeasurementKind::Counts => "counts",
            MeasurementKind::State => "state",
            MeasurementKind::DensityMatrix => "density_matrix",
            MeasurementKind::Purity => "purity",
            MeasurementKind::VnEntropy => "vn_entropy",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A measurement request: a kind plus an observable or a wire set
///
/// When an observable is present the wires are always the observable's
/// wires, including after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MeasurementRepr")]
pub struct Measurement {
    kind: MeasurementKind,
    observable: Option<Observable>,
    wires: Wires,
}

/// Serialized form; `wires` is only read for observable-free measurements
#[derive(Deserialize)]
struct MeasurementRepr {
    kind: MeasurementKind,
    #[serde(default)]
    observable: Option<Observable>,
    #[serde(default)]
    wires: Wires,
}

impl From<MeasurementRepr> for Measurement {
    fn from(repr: MeasurementRepr) -> Self {
        match repr.observable {
            Some(observable) => Self::of_observable(repr.kind, observable),
            None => Self::on_wires(repr.kind, repr.wires),
        }
    }
}

impl Measurement {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Measurement of an observable
    pub fn of_observable(kind: MeasurementKind, observable: Observable) -> Self {
        let wires = observable.wires();
        Self {
            kind,
            observable: Some(observable),
            wires,
        }
    }

    /// Measurement over a wire set
    pub fn on_wires(kind: MeasurementKind, wires: impl Into<Wires>) -> Self {
        Self {
            kind,
            observable: None,
            wires: wires.into(),
        }
    }

    /// Expectation value
    pub fn expval(observable: Observable) -> Self {
        Self::of_observable(MeasurementKind::Expval, observable)
    }

    /// Variance
    pub fn var(observable: Observable) -> Self {
        Self::of_observable(MeasurementKind::Var, observable)
    }

    /// Probabilities in the eigenbasis of an observable
    pub fn probs(observable: Observable) -> Self {
        Self::of_observable(MeasurementKind::Probs, observable)
    }

    /// Probabilities of computational-basis states on wires
    pub fn probs_on(wires: impl Into<Wires>) -> Self {
        Self::on_wires(MeasurementKind::Probs, wires)
    }

    /// Samples of an observable
    pub fn sample(observable: Observable) -> Self {
        Self::of_observable(MeasurementKind::Sample, observable)
    }

    /// Full state
    pub fn state() -> Self {
        Self::on_wires(MeasurementKind::State, Wires::empty())
    }

    /// Purity of a subsystem
    pub fn purity(wires: impl Into<Wires>) -> Self {
        Self::on_wires(MeasurementKind::Purity, wires)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Measurement kind
    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Observable, if any
    pub fn observable(&self) -> Option<&Observable> {
        self.observable.as_ref()
    }

    /// Wires touched by the measurement
    pub fn wires(&self) -> &Wires {
        &self.wires
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.observable {
            Some(obs) => write!(f, "{}({})", self.kind, obs),
            None => write!(f, "{}({})", self.kind, self.wires),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
