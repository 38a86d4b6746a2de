//! Quantum script structure for QTN
//!
//! Gantree: L1_Circuit → QuantumScript
//!
//! An ordered list of operations followed by an ordered list of
//! measurement requests. Wires are labels, not indices; a script's wire
//! set is whatever its operations and measurements touch.

use crate::error::QtnResult;
use crate::measurement::{Measurement, MeasurementKind};
use crate::operation::Operation;
use crate::types::Wires;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum script (circuit + measurements)
/// Gantree: QuantumScript // 회로 구조체
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantumScript {
    /// Operation sequence
    operations: Vec<Operation>,

    /// Measurement requests
    measurements: Vec<Measurement>,

    /// Optional script name
    name: Option<String>,
}

impl QuantumScript {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a script from operations and measurements
    /// Gantree: new(ops, meas) -> Self // 생성자
    pub fn new(operations: Vec<Operation>, measurements: Vec<Measurement>) -> Self {
        Self {
            operations,
            measurements,
            name: None,
        }
    }

    /// Create with a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Append an operation
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Append a measurement
    pub fn add_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Operations
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Measurements
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Script name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if script has neither operations nor measurements
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.measurements.is_empty()
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Union of all wires, operations first, in order of first appearance
    /// Gantree: wires(&self) -> Wires // 와이어 추론
    pub fn wires(&self) -> Wires {
        let op_wires = self.operations.iter().map(|op| op.wires());
        let meas_wires = self.measurements.iter().map(|m| m.wires());
        Wires::all_wires(op_wires.chain(meas_wires))
    }

    /// Number of distinct wires
    pub fn num_wires(&self) -> usize {
        self.wires().len()
    }

    /// Wires touched by operations only
    pub fn operation_wires(&self) -> Wires {
        Wires::all_wires(self.operations.iter().map(|op| op.wires()))
    }

    /// Distinct measurement kinds, in order of first appearance
    pub fn measurement_kinds(&self) -> Vec<MeasurementKind> {
        let mut kinds = Vec::new();
        for m in &self.measurements {
            if !kinds.contains(&m.kind()) {
                kinds.push(m.kind());
            }
        }
        kinds
    }

    /// Count parameterized operations
    pub fn count_parameterized(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| op.is_parameterized())
            .count()
    }

    /// Total number of trainable parameters
    pub fn num_params(&self) -> usize {
        self.operations.iter().map(|op| op.params().len()).sum()
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to JSON
    pub fn to_json(&self) -> QtnResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> QtnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for QuantumScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "// {}", name)?;
        }
        for op in &self.operations {
            writeln!(f, "{}", op)?;
        }
        for m in &self.measurements {
            writeln!(f, "{}", m)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::Observable;

    fn runtime_script() -> QuantumScript {
        QuantumScript::new(
            vec![
                Operation::identity(0),
                Operation::identity([0, 1]),
                Operation::rx(2.0, 2),
                Operation::ry(1.0, 5),
                Operation::rx(2.0, 1),
            ],
            vec![Measurement::expval(Observable::z(15))],
        )
    }

    #[test]
    fn test_wires_union_order() {
        let script = runtime_script();
        assert_eq!(script.wires(), Wires::from([0, 1, 2, 5, 15]));
        assert_eq!(script.num_wires(), 5);
        assert_eq!(script.operation_wires(), Wires::from([0, 1, 2, 5]));
    }

    #[test]
    fn test_measurement_kinds() {
        let mut script = runtime_script();
        script.add_measurement(Measurement::var(Observable::x(0)));
        script.add_measurement(Measurement::expval(Observable::y(1)));
        assert_eq!(
            script.measurement_kinds(),
            vec![MeasurementKind::Expval, MeasurementKind::Var]
        );
    }

    #[test]
    fn test_param_counts() {
        let script = runtime_script();
        assert_eq!(script.count_parameterized(), 3);
        assert_eq!(script.num_params(), 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let script = runtime_script().with_name("runtime");
        let json = script.to_json().unwrap();
        let parsed = QuantumScript::from_json(&json).unwrap();
        assert_eq!(parsed, script);
    }

    #[test]
    fn test_empty() {
        assert!(QuantumScript::default().is_empty());
        assert_eq!(QuantumScript::default().wires(), Wires::empty());
    }
}
