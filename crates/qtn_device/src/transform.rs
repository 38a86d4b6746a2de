//! Validation transform program
//!
//! Gantree: L3_Device → TransformProgram
//!
//! The steps a script passes through before any contraction. Each step
//! either accepts the script unchanged or rejects it.

use crate::support::SupportMatrix;
use qtn_core::constants::device;
use qtn_core::error::{QtnError, QtnResult};
use qtn_core::script::QuantumScript;
use qtn_core::types::Wires;
use std::fmt;

/// A single validation step
/// Gantree: Transform // 검증 단계
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Every script wire must belong to the device (no-op when unset)
    ValidateDeviceWires(Option<Wires>),
    /// Measurement kinds must be supported
    ValidateMeasurements,
    /// Operations must be supported
    ValidateOperations,
    /// Observables must be supported
    ValidateObservables,
}

impl Transform {
    /// Step name
    pub fn name(&self) -> &'static str {
        match self {
            Transform::ValidateDeviceWires(_) => "validate_device_wires",
            Transform::ValidateMeasurements => "validate_measurements",
            Transform::ValidateOperations => "validate_operations",
            Transform::ValidateObservables => "validate_observables",
        }
    }

    /// Apply the step to a script
    pub fn apply(&self, script: &QuantumScript) -> QtnResult<()> {
        let support = SupportMatrix::global();

        match self {
            Transform::ValidateDeviceWires(None) => Ok(()),
            Transform::ValidateDeviceWires(Some(device_wires)) => {
                match script.wires().iter().find(|w| !device_wires.contains(w)) {
                    Some(wire) => Err(QtnError::WireMismatch {
                        wire: wire.to_string(),
                        device: device::NAME.to_string(),
                        device_wires: device_wires.to_string(),
                    }),
                    None => Ok(()),
                }
            }
            Transform::ValidateMeasurements => {
                match script
                    .measurements()
                    .iter()
                    .find(|m| !support.supports_measurement(m.kind()))
                {
                    Some(m) => Err(QtnError::UnsupportedMeasurement {
                        measurement: m.kind().to_string(),
                        device: device::NAME.to_string(),
                        supported: support.measurement_names(),
                    }),
                    None => Ok(()),
                }
            }
            Transform::ValidateOperations => {
                match script
                    .operations()
                    .iter()
                    .find(|op| !support.supports_operation(op))
                {
                    Some(op) => Err(QtnError::UnsupportedOperation {
                        operation: op.name(),
                        device: device::NAME.to_string(),
                    }),
                    None => Ok(()),
                }
            }
            Transform::ValidateObservables => {
                let rejected = script
                    .measurements()
                    .iter()
                    .filter_map(|m| m.observable())
                    .find_map(|obs| support.first_unsupported_observable(obs));
                match rejected {
                    Some(obs) => Err(QtnError::UnsupportedObservable {
                        observable: obs.name().to_string(),
                        device: device::NAME.to_string(),
                    }),
                    None => Ok(()),
                }
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordered validation steps
/// Gantree: TransformProgram // 변환 프로그램
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformProgram {
    steps: Vec<Transform>,
}

impl TransformProgram {
    /// Program of the `default.tensor` device
    pub fn for_device(device_wires: Option<Wires>) -> Self {
        Self {
            steps: vec![
                Transform::ValidateDeviceWires(device_wires),
                Transform::ValidateMeasurements,
                Transform::ValidateOperations,
                Transform::ValidateObservables,
            ],
        }
    }

    /// Steps in order
    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the program has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step; stops at the first rejection
    pub fn apply(&self, script: &QuantumScript) -> QtnResult<()> {
        self.steps.iter().try_for_each(|step| step.apply(script))
    }
}

impl fmt::Display for TransformProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.steps.iter().map(Transform::name).collect();
        write!(f, "TransformProgram({})", names.join(" → "))
    }
}

// ============================================================================
// Tests
// ============================================================================
