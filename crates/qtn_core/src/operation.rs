//! Circuit operations for QTN
//!
//! Gantree: L1_Circuit → Operation
//!
//! Operations are identified by name so that the device support matrix can
//! accept or reject kinds it has never seen. Typed constructors cover the
//! common gates.

use crate::types::{Angle, ParamVec, Wires};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used in the name of an adjoint operation
const ADJOINT_PREFIX: &str = "Adjoint(";

/// Circuit operation
/// Gantree: Operation // 연산
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Base operation name (e.g. `RX`, `CNOT`)
    name: String,

    /// Wires the operation acts on
    wires: Wires,

    /// Trainable parameters
    params: ParamVec,

    /// Explicit matrix data (`QubitUnitary`, `BlockEncode`, ...), row-major
    matrix: Option<Vec<Complex64>>,

    /// Pauli word of `PauliRot`
    pauli_word: Option<String>,

    /// Adjoint flag
    adjoint: bool,
}

impl Operation {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an operation by name
    /// Gantree: new(name, wires) -> Self // 생성자
    pub fn new(name: impl Into<String>, wires: impl Into<Wires>) -> Self {
        Self {
            name: name.into(),
            wires: wires.into(),
            params: Vec::new(),
            matrix: None,
            pauli_word: None,
            adjoint: false,
        }
    }

    /// Attach parameters
    pub fn with_params(mut self, params: impl Into<ParamVec>) -> Self {
        self.params = params.into();
        self
    }

    /// Attach matrix data
    pub fn with_matrix(mut self, matrix: Vec<Complex64>) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Attach a Pauli word
    pub fn with_pauli_word(mut self, word: impl Into<String>) -> Self {
        self.pauli_word = Some(word.into());
        self
    }

    /// Adjoint of this operation (involutive)
    pub fn adjoint(mut self) -> Self {
        self.adjoint = !self.adjoint;
        self
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Full name, `Adjoint(<base>)` for adjoints
    pub fn name(&self) -> String {
        if self.adjoint {
            format!("{}{})", ADJOINT_PREFIX, self.name)
        } else {
            self.name.clone()
        }
    }

    /// Name of the underlying operation
    pub fn base_name(&self) -> &str {
        &self.name
    }

    /// Check adjoint flag
    pub fn is_adjoint(&self) -> bool {
        self.adjoint
    }

    /// Wires the operation acts on
    pub fn wires(&self) -> &Wires {
        &self.wires
    }

    /// Parameters
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Matrix data, if any
    pub fn matrix(&self) -> Option<&[Complex64]> {
        self.matrix.as_deref()
    }

    /// Pauli word, if any
    pub fn pauli_word(&self) -> Option<&str> {
        self.pauli_word.as_deref()
    }

    /// Number of wires
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    /// Check if operation takes parameters
    pub fn is_parameterized(&self) -> bool {
        !self.params.is_empty()
    }

    // ========================================================================
    // Standard Gates
    // ========================================================================

    /// Identity
    pub fn identity(wires: impl Into<Wires>) -> Self {
        Self::new("Identity", wires)
    }

    /// Hadamard
    pub fn hadamard(wire: impl Into<Wires>) -> Self {
        Self::new("Hadamard", wire)
    }

    /// Pauli-X
    pub fn x(wire: impl Into<Wires>) -> Self {
        Self::new("PauliX", wire)
    }

    /// Pauli-Y
    pub fn y(wire: impl Into<Wires>) -> Self {
        Self::new("PauliY", wire)
    }

    /// Pauli-Z
    pub fn z(wire: impl Into<Wires>) -> Self {
        Self::new("PauliZ", wire)
    }

    /// S gate
    pub fn s(wire: impl Into<Wires>) -> Self {
        Self::new("S", wire)
    }

    /// T gate
    pub fn t(wire: impl Into<Wires>) -> Self {
        Self::new("T", wire)
    }

    /// Square root of X
    pub fn sx(wire: impl Into<Wires>) -> Self {
        Self::new("SX", wire)
    }

    /// X rotation
    pub fn rx(theta: Angle, wire: impl Into<Wires>) -> Self {
        Self::new("RX", wire).with_params(vec![theta])
    }

    /// Y rotation
    pub fn ry(theta: Angle, wire: impl Into<Wires>) -> Self {
        Self::new("RY", wire).with_params(vec![theta])
    }

    /// Z rotation
    pub fn rz(theta: Angle, wire: impl Into<Wires>) -> Self {
        Self::new("RZ", wire).with_params(vec![theta])
    }

    /// General rotation RZ(omega) RY(theta) RZ(phi)
    pub fn rot(phi: Angle, theta: Angle, omega: Angle, wire: impl Into<Wires>) -> Self {
        Self::new("Rot", wire).with_params(vec![phi, theta, omega])
    }

    /// Phase shift diag(1, e^{i phi})
    pub fn phase_shift(phi: Angle, wire: impl Into<Wires>) -> Self {
        Self::new("PhaseShift", wire).with_params(vec![phi])
    }

    /// CNOT
    pub fn cnot(control: impl Into<Wires>, target: impl Into<Wires>) -> Self {
        let control: Wires = control.into();
        Self::new("CNOT", control.union(&target.into()))
    }

    /// Controlled-Z
    pub fn cz(control: impl Into<Wires>, target: impl Into<Wires>) -> Self {
        let control: Wires = control.into();
        Self::new("CZ", control.union(&target.into()))
    }

    /// SWAP
    pub fn swap(a: impl Into<Wires>, b: impl Into<Wires>) -> Self {
        let a: Wires = a.into();
        Self::new("SWAP", a.union(&b.into()))
    }

    /// Toffoli
    pub fn toffoli(wires: impl Into<Wires>) -> Self {
        Self::new("Toffoli", wires)
    }

    /// Ising XX coupling
    pub fn ising_xx(phi: Angle, wires: impl Into<Wires>) -> Self {
        Self::new("IsingXX", wires).with_params(vec![phi])
    }

    /// Multi-qubit Z rotation
    pub fn multi_rz(theta: Angle, wires: impl Into<Wires>) -> Self {
        Self::new("MultiRZ", wires).with_params(vec![theta])
    }

    /// Pauli-word rotation
    pub fn pauli_rot(theta: Angle, word: &str, wires: impl Into<Wires>) -> Self {
        Self::new("PauliRot", wires)
            .with_params(vec![theta])
            .with_pauli_word(word)
    }

    /// Arbitrary unitary given as a row-major matrix
    pub fn qubit_unitary(matrix: Vec<Complex64>, wires: impl Into<Wires>) -> Self {
        Self::new("QubitUnitary", wires).with_matrix(matrix)
    }

    /// Global phase e^{-i phi}
    pub fn global_phase(phi: Angle, wires: impl Into<Wires>) -> Self {
        Self::new("GlobalPhase", wires).with_params(vec![phi])
    }

    /// Quantum Fourier transform template
    pub fn qft(wires: impl Into<Wires>) -> Self {
        Self::new("QFT", wires)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(|p| format!("{}", p)).collect();
            write!(f, "({})", params.join(", "))?;
        }
        write!(f, " {}", self.wires)
    }
}

// ============================================================================
// Tests
// ============================================================================
