//! # QTN Core
//!
//! Foundation types for the `default.tensor` device: wire labels, operations,
//! observables, measurement requests and the error taxonomy.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qtn_core // L0+L1: Foundation + Circuit
//!     L0_Foundation // 기반 타입/상수/에러
//!         CoreTypes // WireLabel, Wires, CDtype
//!         Constants // 디바이스/샘플링 상수
//!         Errors // 에러 타입
//!     L1_Circuit // 회로 구조
//!         Operation // 연산
//!         Observable // 관측량
//!         Measurement // 측정
//!         QuantumScript // 회로 + 측정
//!         ScriptBuilder // 빌더 패턴
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qtn_core::prelude::*;
//!
//! let script = ScriptBuilder::new()
//!     .h(0)
//!     .cnot(0, 1)
//!     .expval(Observable::z(1))
//!     .build();
//!
//! assert_eq!(script.wires(), Wires::from([0, 1]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Operations (Gantree: L1_Circuit → Operation)
pub mod operation;

/// Observables (Gantree: L1_Circuit → Observable)
pub mod observable;

/// Measurements (Gantree: L1_Circuit → Measurement)
pub mod measurement;

/// Quantum scripts (Gantree: L1_Circuit → QuantumScript)
pub mod script;

/// Script builder (Gantree: L1_Circuit → ScriptBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ScriptBuilder;
pub use constants::{device, sampling};
pub use error::{QtnError, QtnResult};
pub use measurement::{Measurement, MeasurementKind};
pub use observable::{Observable, SumKind};
pub use operation::Operation;
pub use script::QuantumScript;
pub use types::{Angle, CDtype, ParamVec, WireLabel, Wires};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qtn_core::prelude::*;
    //! ```

    pub use crate::builder::ScriptBuilder;
    pub use crate::constants::{device, sampling};
    pub use crate::error::{QtnError, QtnResult};
    pub use crate::measurement::{Measurement, MeasurementKind};
    pub use crate::observable::{Observable, SumKind};
    pub use crate::operation::Operation;
    pub use crate::script::QuantumScript;
    pub use crate::types::{Angle, CDtype, WireLabel, Wires};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_runtime_wire_inference() {
        let script = ScriptBuilder::new()
            .op(Operation::identity(0))
            .op(Operation::identity([0, 1]))
            .rx(2.0, 2)
            .ry(1.0, 5)
            .rx(2.0, 1)
            .expval(Observable::z(15))
            .build();

        let wires = script.wires();
        assert_eq!(wires, Wires::from([0, 1, 2, 5, 15]));
        assert!(!Wires::range(1).contains_all(&wires));
    }

    #[test]
    fn test_adjoint_in_script() {
        let script = ScriptBuilder::new()
            .op(Operation::t(0).adjoint())
            .expval(Observable::identity(0))
            .build();

        assert_eq!(script.operations()[0].name(), "Adjoint(T)");
    }

    #[test]
    fn test_constants_exported() {
        assert_eq!(device::NAME, "default.tensor");
        assert_eq!(device::DEFAULT_CUTOFF, 1e-16);
        assert_eq!(sampling::DEFAULT_BASIS_SEED, 584_545);
    }
}
