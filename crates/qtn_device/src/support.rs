//! Static support matrix of the `default.tensor` device
//!
//! Gantree: L3_Device → SupportMatrix
//!
//! Built once per process and never mutated. Extending the device means
//! adding a name here.

use qtn_core::measurement::MeasurementKind;
use qtn_core::observable::Observable;
use qtn_core::operation::Operation;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Gate and template names the contraction backend can apply
const OPERATIONS: &[&str] = &[
    // identity / phases
    "Identity",
    "GlobalPhase",
    // single-qubit gates
    "Hadamard",
    "PauliX",
    "PauliY",
    "PauliZ",
    "S",
    "T",
    "SX",
    "RX",
    "RY",
    "RZ",
    "Rot",
    "PhaseShift",
    "U1",
    "U2",
    "U3",
    // two-qubit gates
    "CNOT",
    "CY",
    "CZ",
    "CH",
    "SWAP",
    "ISWAP",
    "SISWAP",
    "PSWAP",
    "ECR",
    "CRX",
    "CRY",
    "CRZ",
    "CRot",
    "ControlledPhaseShift",
    "CPhaseShift00",
    "CPhaseShift01",
    "CPhaseShift10",
    "IsingXX",
    "IsingYY",
    "IsingZZ",
    "IsingXY",
    "SingleExcitation",
    "SingleExcitationPlus",
    "SingleExcitationMinus",
    "FermionicSWAP",
    // multi-qubit gates
    "CSWAP",
    "CCZ",
    "Toffoli",
    "MultiControlledX",
    "MultiRZ",
    "PauliRot",
    "PCPhase",
    "DoubleExcitation",
    "OrbitalRotation",
    "QubitCarry",
    "QubitSum",
    // matrices
    "QubitUnitary",
    "ControlledQubitUnitary",
    "DiagonalQubitUnitary",
    "SpecialUnitary",
    "BlockEncode",
    // templates
    "QFT",
    "IntegerComparator",
];

/// Observable class names
const OBSERVABLES: &[&str] = &[
    "Identity",
    "Hadamard",
    "Hermitian",
    "PauliX",
    "PauliY",
    "PauliZ",
    "Projector",
    "SparseHamiltonian",
    "Hamiltonian",
    "LinearCombination",
    "Prod",
];

/// Measurement kinds
const MEASUREMENTS: &[MeasurementKind] = &[MeasurementKind::Expval, MeasurementKind::Var];

/// Operation, observable and measurement allow-lists
/// Gantree: SupportMatrix // 지원 행렬
#[derive(Debug)]
pub struct SupportMatrix {
    operations: HashSet<&'static str>,
    observables: HashSet<&'static str>,
    measurements: Vec<MeasurementKind>,
}

static SUPPORT: OnceLock<SupportMatrix> = OnceLock::new();

impl SupportMatrix {
    /// Process-wide support matrix
    pub fn global() -> &'static SupportMatrix {
        SUPPORT.get_or_init(|| SupportMatrix {
            operations: OPERATIONS.iter().copied().collect(),
            observables: OBSERVABLES.iter().copied().collect(),
            measurements: MEASUREMENTS.to_vec(),
        })
    }

    /// Check an operation name (`Adjoint(X)` is supported iff `X` is)
    pub fn supports_operation_name(&self, name: &str) -> bool {
        match name
            .strip_prefix("Adjoint(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(base) => self.supports_operation_name(base),
            None => self.operations.contains(name),
        }
    }

    /// Check an operation
    pub fn supports_operation(&self, op: &Operation) -> bool {
        self.supports_operation_name(op.base_name())
    }

    /// Check an observable; composites need every term supported
    pub fn supports_observable(&self, obs: &Observable) -> bool {
        self.observables.contains(obs.name())
            && obs.terms().iter().all(|t| self.supports_observable(t))
    }

    /// First unsupported observable inside `obs`, innermost first
    pub fn first_unsupported_observable<'a>(&self, obs: &'a Observable) -> Option<&'a Observable> {
        obs.terms()
            .iter()
            .find_map(|t| self.first_unsupported_observable(t))
            .or_else(|| (!self.observables.contains(obs.name())).then_some(obs))
    }

    /// Check a measurement kind
    pub fn supports_measurement(&self, kind: MeasurementKind) -> bool {
        self.measurements.contains(&kind)
    }

    /// Supported measurement kinds
    pub fn measurements(&self) -> &[MeasurementKind] {
        &self.measurements
    }

    /// Supported measurement names, comma separated
    pub fn measurement_names(&self) -> String {
        self.measurements
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Supported operation names, sorted
    pub fn operation_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.operations.iter().copied().collect();
        names.sort_unstable();
        names
    }

    /// Supported observable names, sorted
    pub fn observable_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.observables.iter().copied().collect();
        names.sort_unstable();
        names
    }
}

// ============================================================================
// Tests
// ============================================================================
