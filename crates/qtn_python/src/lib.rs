#![allow(non_local_definitions)]
//! # QTN Python Bindings
//!
//! Python bindings for the `default.tensor` device contract and the
//! mixed-state fixtures.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qtn_python // L9: Python Bindings
//!     ErrorMapping // QtnError → Python 예외
//!     KwargConversion // Python 값 → JSON
//!     PyDefaultTensor // 디바이스 바인딩
//!         name, wires, method, c_dtype, contract, max_bond_dim, cutoff
//!         preprocess(), validate(), execute()
//!         compute_derivatives(), compute_vjp() -> NotImplementedError
//!         draw(), to_json(), to_dict()
//!     States // 혼합 상태 픽스처
//!         random_mixed_state(), purity()
//! ```
//!
//! ## Quick Start (Python)
//!
//! ```python
//! import qtn
//! import numpy as np
//!
//! dev = qtn.device("default.tensor", wires=3, method="mps", max_bond_dim=32)
//! print(dev.preprocess())
//!
//! dev = qtn.device("default.tensor", method="tn", c_dtype=np.complex64)
//! rho = np.array(qtn.random_mixed_state(2)).reshape([2] * 4)
//! ```
//!
//! ## Installation
//!
//! ```bash
//! pip install maturin
//! cd qtn/crates/qtn_python
//! maturin develop --release
//! ```

use pyo3::prelude::*;

// ============================================================================
// Module Declarations
// ============================================================================

/// Error mapping
pub mod errors;

/// Keyword conversion
pub mod convert;

/// Device bindings
pub mod device;

/// State fixture bindings
pub mod states;

// ============================================================================
// Re-exports
// ============================================================================

pub use device::PyDefaultTensor;
pub use errors::{error_class, to_py_err, ErrorClass};

// ============================================================================
// Python Module
// ============================================================================

/// QTN - configuration and validation for tensor-network simulator devices
#[pymodule]
fn qtn(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // ========================================================================
    // Device Classes
    // ========================================================================

    m.add_class::<PyDefaultTensor>()?;
    m.add_function(wrap_pyfunction!(device::device, m)?)?;

    // ========================================================================
    // State Fixtures
    // ========================================================================

    m.add_function(wrap_pyfunction!(states::random_mixed_state, m)?)?;
    m.add_function(wrap_pyfunction!(states::purity, m)?)?;

    // ========================================================================
    // Module Metadata
    // ========================================================================

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__author__", "Jung Wook Yang <sadpig70@gmail.com>")?;
    m.add("__doc__", "QTN - tensor-network simulator device contract")?;

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qtn_core::error::QtnError;
    use serde_json::{json, Map, Value};

    fn kwargs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_construction_error_classes() {
        let err = PyDefaultTensor::from_kwargs(&kwargs(json!({ "fake_arg": 1 })))
            .err()
            .unwrap();
        assert_eq!(error_class(&err), ErrorClass::TypeError);

        let err = PyDefaultTensor::from_kwargs(&kwargs(json!({
            "method": "mps",
            "contract": "auto-split-gate",
        })))
        .err()
        .unwrap();
        assert_eq!(error_class(&err), ErrorClass::ValueError);
    }

    #[test]
    fn test_derivative_error_class() {
        let dev = PyDefaultTensor::from_kwargs(&Map::new()).unwrap();
        let err = dev.inner.compute_vjp(&[], &[]).unwrap_err();
        assert!(matches!(err, QtnError::DerivativesUnsupported { .. }));
        assert_eq!(error_class(&err), ErrorClass::NotImplementedError);
    }
}
