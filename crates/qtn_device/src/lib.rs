//! # QTN Device
//!
//! The `default.tensor` device contract: keyword validation, resolved
//! configuration, a static support matrix, the validation program run
//! before every execution, and the seam to an external contraction backend.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qtn_device // L3: Device
//!     DeviceOptions // 키워드 옵션
//!     DeviceConfig // 검증된 설정
//!         Method // mps | tn
//!         MethodOptions // 방식별 옵션
//!         ConfigWarning // 경고
//!         ExecutionConfig // 실행 설정
//!     SupportMatrix // 지원 행렬 (OnceLock)
//!     TransformProgram // 검증 단계
//!     ContractorTrait // 백엔드 인터페이스
//!     Draw // 네트워크 그림
//!     DefaultTensor // 디바이스
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qtn_device::prelude::*;
//!
//! let dev = DefaultTensor::new(
//!     DeviceOptions::new()
//!         .with_method("mps")
//!         .with_max_bond_dim(64)
//!         .with_wire_count(4),
//! )
//! .unwrap();
//!
//! let (program, config) = dev.preprocess();
//! assert_eq!(program.len(), 4);
//! assert!(!config.use_device_gradient());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Keyword options (Gantree: L3_Device → DeviceOptions)
pub mod options;

/// Resolved configuration (Gantree: L3_Device → DeviceConfig)
pub mod config;

/// Support matrix (Gantree: L3_Device → SupportMatrix)
pub mod support;

/// Validation program (Gantree: L3_Device → TransformProgram)
pub mod transform;

/// Backend seam (Gantree: L3_Device → ContractorTrait)
pub mod contractor;

/// Network diagrams (Gantree: L3_Device → Draw)
pub mod draw;

/// The device (Gantree: L3_Device → DefaultTensor)
pub mod device;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{
    ConfigWarning, DeviceConfig, ExecutionConfig, Method, MethodOptions, MpsOptions, TnOptions,
};
pub use contractor::{ContractionRequest, Contractor, ExecutionResult};
pub use device::{DefaultTensor, Jacobian};
pub use draw::DrawOptions;
pub use options::{DeviceOptions, WiresArg};
pub use support::SupportMatrix;
pub use transform::{Transform, TransformProgram};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigWarning, DeviceConfig, ExecutionConfig, Method};
    pub use crate::contractor::{ContractionRequest, Contractor, ExecutionResult};
    pub use crate::device::DefaultTensor;
    pub use crate::draw::DrawOptions;
    pub use crate::options::DeviceOptions;
    pub use qtn_core::prelude::*;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::testing::VacuumContractor;
    use std::sync::Arc;

    #[test]
    fn test_full_workflow() {
        let backend = Arc::new(VacuumContractor::new());
        let dev = DefaultTensor::new(DeviceOptions::new().with_method("tn").with_wire_count(3))
            .unwrap()
            .with_contractor(backend.clone());

        let script = ScriptBuilder::new()
            .h(0)
            .cnot_chain(&Wires::range(3))
            .expval(Observable::z(2))
            .var(Observable::z(2))
            .build();

        let result = dev.execute(&script).unwrap();
        assert_eq!(result.values, vec![1.0, 0.0]);
        assert_eq!(backend.calls(), 1);
        assert_eq!(dev.contractor_name(), Some("vacuum"));
    }

    #[test]
    fn test_error_classes() {
        let err = DefaultTensor::new(DeviceOptions::new().with_method("dmrg")).unwrap_err();
        assert!(err.is_construction_error());

        let dev = DefaultTensor::new(DeviceOptions::new()).unwrap();
        let err = dev.compute_derivatives(&[]).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_config_reported_as_json() {
        let dev = DefaultTensor::new(DeviceOptions::new().with_cutoff(1e-10)).unwrap();
        let json = dev.config().to_json().unwrap();
        assert!(json.contains("\"method\": \"mps\""));
        assert!(json.contains("\"cutoff\": 1e-10"));
    }
}
