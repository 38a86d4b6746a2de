//! Script builder for QTN
//!
//! Gantree: L1_Circuit → ScriptBuilder
//!
//! Fluent construction of quantum scripts.

use crate::measurement::Measurement;
use crate::observable::Observable;
use crate::operation::Operation;
use crate::script::QuantumScript;
use crate::types::{Angle, Wires};

/// Fluent script builder (consuming self pattern)
/// Gantree: ScriptBuilder // 빌더 패턴
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    script: QuantumScript,
}

impl ScriptBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a script name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            script: QuantumScript::default().with_name(name),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Add any operation
    pub fn op(mut self, op: Operation) -> Self {
        self.script.add_operation(op);
        self
    }

    /// Add several operations
    pub fn ops(mut self, ops: impl IntoIterator<Item = Operation>) -> Self {
        for op in ops {
            self.script.add_operation(op);
        }
        self
    }

    /// Add Hadamard gate
    pub fn h(self, wire: impl Into<Wires>) -> Self {
        self.op(Operation::hadamard(wire))
    }

    /// Add Pauli-X gate
    pub fn x(self, wire: impl Into<Wires>) -> Self {
        self.op(Operation::x(wire))
    }

    /// Add Pauli-Z gate
    pub fn z(self, wire: impl Into<Wires>) -> Self {
        self.op(Operation::z(wire))
    }

    /// Add Rx rotation
    pub fn rx(self, theta: Angle, wire: impl Into<Wires>) -> Self {
        self.op(Operation::rx(theta, wire))
    }

    /// Add Ry rotation
    pub fn ry(self, theta: Angle, wire: impl Into<Wires>) -> Self {
        self.op(Operation::ry(theta, wire))
    }

    /// Add Rz rotation
    pub fn rz(self, theta: Angle, wire: impl Into<Wires>) -> Self {
        self.op(Operation::rz(theta, wire))
    }

    /// Add CNOT
    pub fn cnot(self, control: impl Into<Wires>, target: impl Into<Wires>) -> Self {
        self.op(Operation::cnot(control, target))
    }

    /// Add CZ
    pub fn cz(self, control: impl Into<Wires>, target: impl Into<Wires>) -> Self {
        self.op(Operation::cz(control, target))
    }

    /// Hadamard on every wire of the set
    pub fn h_layer(mut self, wires: &Wires) -> Self {
        for w in wires {
            self = self.h(w.clone());
        }
        self
    }

    /// CNOT ladder along the wire order
    pub fn cnot_chain(mut self, wires: &Wires) -> Self {
        let labels = wires.labels();
        for pair in labels.windows(2) {
            self = self.cnot(pair[0].clone(), pair[1].clone());
        }
        self
    }

    // ========================================================================
    // Measurements
    // ========================================================================

    /// Add any measurement
    pub fn measure(mut self, measurement: Measurement) -> Self {
        self.script.add_measurement(measurement);
        self
    }

    /// Expectation value
    pub fn expval(self, observable: Observable) -> Self {
        self.measure(Measurement::expval(observable))
    }

    /// Variance
    pub fn var(self, observable: Observable) -> Self {
        self.measure(Measurement::var(observable))
    }

    /// Probabilities on wires
    pub fn probs(self, wires: impl Into<Wires>) -> Self {
        self.measure(Measurement::probs_on(wires))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finish the script
    pub fn build(self) -> QuantumScript {
        self.script
    }
}

// ============================================================================
// Tests
// ============================================================================
