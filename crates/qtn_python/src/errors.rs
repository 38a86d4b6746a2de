//! Mapping of QTN errors onto Python exception classes
//!
//! Gantree: L9_Python → ErrorMapping

use pyo3::exceptions::{PyNotImplementedError, PyRuntimeError, PyTypeError, PyValueError};
use pyo3::PyErr;
use qtn_core::error::QtnError;

/// Python exception class raised for a QTN error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// `TypeError`
    TypeError,
    /// `ValueError`
    ValueError,
    /// `NotImplementedError`
    NotImplementedError,
    /// `RuntimeError`
    RuntimeError,
}

/// Exception class for an error
pub fn error_class(err: &QtnError) -> ErrorClass {
    match err {
        QtnError::UnsupportedArgument { .. } | QtnError::InvalidDataType(_) => ErrorClass::TypeError,
        QtnError::UnsupportedMethod(_)
        | QtnError::UnsupportedContraction { .. }
        | QtnError::InvalidOption { .. }
        | QtnError::InvalidWires(_)
        | QtnError::WireMismatch { .. }
        | QtnError::InvalidState(_)
        | QtnError::TooManyQubits { .. } => ErrorClass::ValueError,
        QtnError::UnsupportedOperation { .. }
        | QtnError::UnsupportedMeasurement { .. }
        | QtnError::UnsupportedObservable { .. }
        | QtnError::DerivativesUnsupported { .. } => ErrorClass::NotImplementedError,
        QtnError::BackendUnavailable(_)
        | QtnError::BackendError(_)
        | QtnError::JsonError(_)
        | QtnError::InternalError(_) => ErrorClass::RuntimeError,
    }
}

/// Convert to a Python exception carrying the error message
pub fn to_py_err(err: QtnError) -> PyErr {
    let message = err.to_string();
    match error_class(&err) {
        ErrorClass::TypeError => PyTypeError::new_err(message),
        ErrorClass::ValueError => PyValueError::new_err(message),
        ErrorClass::NotImplementedError => PyNotImplementedError::new_err(message),
        ErrorClass::RuntimeError => PyRuntimeError::new_err(message),
    }
}
