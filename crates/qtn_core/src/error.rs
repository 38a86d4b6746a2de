//! Error types for QTN
//!
//! Gantree: L0_Foundation → Errors
//!
//! Construction-time and execution-time failures of the tensor device,
//! plus the state-fixture errors.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QTN
/// Gantree: QtnError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QtnError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// Unknown keyword passed at device construction
    /// Gantree: UnsupportedArgument{{arg,device}} // 알 수 없는 인자
    #[error("Unexpected argument: {argument} during initialization of the {device} device.")]
    UnsupportedArgument { argument: String, device: String },

    /// Simulation method outside {mps, tn}
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Numeric type is not one of the two complex precisions
    #[error("Unsupported type: {0}. Supported data types are complex64 and complex128.")]
    InvalidDataType(String),

    /// Contraction strategy not valid for the chosen method
    /// Gantree: UnsupportedContraction{{contract,method}} // 조합 오류
    #[error(
        "Unsupported gate contraction option: '{contract}' for '{method}' method. \
         Supported options are {supported}."
    )]
    UnsupportedContraction {
        contract: String,
        method: String,
        supported: String,
    },

    /// Malformed option value (non-positive bond dimension, bad cutoff, ...)
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    /// Wire labels that cannot form a wire set
    #[error("Invalid wires: {0}")]
    InvalidWires(String),

    // ========================================================================
    // Execution Errors
    // ========================================================================
    /// Circuit touches a wire the device does not own
    /// Gantree: WireMismatch{{wire}} // 와이어 불일치
    #[error(
        "Cannot run circuit on {device} as it contains wire {wire} \
         not found on the device wires {device_wires}"
    )]
    WireMismatch {
        wire: String,
        device: String,
        device_wires: String,
    },

    /// Operation outside the support matrix
    #[error("Operation {operation} is not supported on the {device} device")]
    UnsupportedOperation { operation: String, device: String },

    /// Measurement kind outside the support matrix
    #[error(
        "Measurement {measurement} is not supported on the {device} device. \
         Supported measurements are: {supported}"
    )]
    UnsupportedMeasurement {
        measurement: String,
        device: String,
        supported: String,
    },

    /// Observable outside the support matrix
    #[error("Observable {observable} is not supported on the {device} device")]
    UnsupportedObservable { observable: String, device: String },

    /// Any differentiation entry point
    /// Gantree: DerivativesUnsupported // 미분 미지원
    #[error("The computation of {computation} has yet to be implemented for the {device} device.")]
    DerivativesUnsupported { computation: String, device: String },

    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// No contraction backend attached to the device
    #[error("No contraction backend is attached to the {0} device")]
    BackendUnavailable(String),

    /// Failure reported by the contraction backend
    #[error("Backend error: {0}")]
    BackendError(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// Density matrix / tensor with an unusable shape or index set
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Fixture request too large to materialize densely
    #[error("Requested {requested} qubits but at most {max} are supported")]
    TooManyQubits { requested: usize, max: usize },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for QTN operations
/// Gantree: QtnResult<T> // type alias
pub type QtnResult<T> = Result<T, QtnError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QtnError {
    fn from(err: serde_json::Error) -> Self {
        QtnError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QtnError {
    /// Check if error is raised while building a device
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            QtnError::UnsupportedArgument { .. }
                | QtnError::UnsupportedMethod(_)
                | QtnError::InvalidDataType(_)
                | QtnError::UnsupportedContraction { .. }
                | QtnError::InvalidOption { .. }
                | QtnError::InvalidWires(_)
        )
    }

    /// Check if error is raised while executing a circuit
    pub fn is_execution_error(&self) -> bool {
        matches!(
            self,
            QtnError::WireMismatch { .. }
                | QtnError::UnsupportedOperation { .. }
                | QtnError::UnsupportedMeasurement { .. }
                | QtnError::UnsupportedObservable { .. }
                | QtnError::DerivativesUnsupported { .. }
                | QtnError::BackendUnavailable(_)
                | QtnError::BackendError(_)
        )
    }

    /// Check if error reports a capability the device does not have
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            QtnError::UnsupportedOperation { .. }
                | QtnError::UnsupportedMeasurement { .. }
                | QtnError::UnsupportedObservable { .. }
                | QtnError::DerivativesUnsupported { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
