//! The `default.tensor` device
//!
//! Gantree: L3_Device → DefaultTensor
//!
//! Construction validates options into a `DeviceConfig`. Execution runs the
//! transform program, resolves wires and hands the script to the attached
//! `Contractor`. Differentiation is not available on this device.

use crate::config::{ConfigWarning, DeviceConfig, ExecutionConfig, Method};
use crate::contractor::{ContractionRequest, Contractor, ExecutionResult};
use crate::draw::DrawOptions;
use crate::options::DeviceOptions;
use crate::transform::TransformProgram;
use qtn_core::constants::device;
use qtn_core::error::{QtnError, QtnResult};
use qtn_core::script::QuantumScript;
use qtn_core::types::{CDtype, Wires};
use serde_json::{Map, Value};
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Per-script gradient (one row per measurement, flattened)
pub type Jacobian = Vec<f64>;

/// Tensor-network simulator device
/// Gantree: DefaultTensor // 텐서 네트워크 디바이스
#[derive(Clone)]
pub struct DefaultTensor {
    /// Validated configuration
    config: DeviceConfig,

    /// Diagnostics raised while constructing
    warnings: Vec<ConfigWarning>,

    /// Contraction backend
    contractor: Option<Arc<dyn Contractor>>,
}

impl DefaultTensor {
    /// Device short name
    pub const NAME: &'static str = device::NAME;

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a device from options
    /// Gantree: new(options) -> QtnResult<Self> // 생성 + 검증
    pub fn new(options: DeviceOptions) -> QtnResult<Self> {
        let (config, warnings) = DeviceConfig::resolve(&options)?;
        log::info!("Created {} device: {}", Self::NAME, config);

        Ok(Self {
            config,
            warnings,
            contractor: None,
        })
    }

    /// Build a device from a keyword map
    pub fn from_kwargs(kwargs: &Map<String, Value>) -> QtnResult<Self> {
        Self::new(DeviceOptions::from_kwargs(kwargs)?)
    }

    /// Attach a contraction backend
    pub fn with_contractor(mut self, contractor: Arc<dyn Contractor>) -> Self {
        self.contractor = Some(contractor);
        self
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Device name
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Device wires (`None` = inferred per circuit)
    pub fn wires(&self) -> Option<&Wires> {
        self.config.wires.as_ref()
    }

    /// Simulation method
    pub fn method(&self) -> Method {
        self.config.method()
    }

    /// Complex precision
    pub fn c_dtype(&self) -> CDtype {
        self.config.c_dtype
    }

    /// Contraction strategy
    pub fn contract(&self) -> &str {
        &self.config.contract
    }

    /// Bond dimension limit (MPS only)
    pub fn max_bond_dim(&self) -> Option<NonZeroUsize> {
        self.config.max_bond_dim()
    }

    /// Truncation cutoff (MPS only)
    pub fn cutoff(&self) -> Option<f64> {
        self.config.cutoff()
    }

    /// Resolved configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Construction warnings
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Attached backend name
    pub fn contractor_name(&self) -> Option<&str> {
        self.contractor.as_deref().map(|c| c.name())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Validation program and execution config; does not touch the backend
    /// Gantree: preprocess() -> (TransformProgram, ExecutionConfig)
    pub fn preprocess(&self) -> (TransformProgram, ExecutionConfig) {
        (
            TransformProgram::for_device(self.config.wires.clone()),
            ExecutionConfig::from_device_config(&self.config),
        )
    }

    /// Wires a script runs on
    pub fn execution_wires(&self, script: &QuantumScript) -> Wires {
        match &self.config.wires {
            Some(wires) => wires.clone(),
            None => script.wires(),
        }
    }

    /// Execute one script
    /// Gantree: execute(script) -> QtnResult<ExecutionResult> // 검증 → 수축
    pub fn execute(&self, script: &QuantumScript) -> QtnResult<ExecutionResult> {
        let (program, _) = self.preprocess();
        program.apply(script)?;

        let contractor = self
            .contractor
            .as_deref()
            .ok_or_else(|| QtnError::BackendUnavailable(Self::NAME.to_string()))?;

        let wires = self.execution_wires(script);
        log::debug!(
            "Dispatching {} operations / {} measurements on {} to {}",
            script.operations().len(),
            script.measurements().len(),
            wires,
            contractor.name()
        );

        let request = ContractionRequest {
            config: &self.config,
            wires: &wires,
            script,
        };
        let values = contractor.contract(&request)?;

        if values.len() != script.measurements().len() {
            return Err(QtnError::BackendError(format!(
                "{} returned {} values for {} measurements",
                contractor.name(),
                values.len(),
                script.measurements().len()
            )));
        }

        Ok(ExecutionResult::new(values, self.config.c_dtype))
    }

    /// Execute several scripts; stops at the first failure
    pub fn execute_batch(&self, scripts: &[QuantumScript]) -> QtnResult<Vec<ExecutionResult>> {
        scripts.iter().map(|s| self.execute(s)).collect()
    }

    // ========================================================================
    // Differentiation
    // ========================================================================

    /// Whether the device computes derivatives (never)
    pub fn supports_derivatives(&self) -> bool {
        false
    }

    /// Whether the device computes vector-Jacobian products (never)
    pub fn supports_vjp(&self) -> bool {
        false
    }

    fn derivatives_error() -> QtnError {
        QtnError::DerivativesUnsupported {
            computation: "derivatives".to_string(),
            device: Self::NAME.to_string(),
        }
    }

    fn vjp_error() -> QtnError {
        QtnError::DerivativesUnsupported {
            computation: "vector-Jacobian product".to_string(),
            device: Self::NAME.to_string(),
        }
    }

    /// Jacobians of the scripts
    pub fn compute_derivatives(&self, _scripts: &[QuantumScript]) -> QtnResult<Vec<Jacobian>> {
        Err(Self::derivatives_error())
    }

    /// Results and Jacobians of the scripts
    pub fn execute_and_compute_derivatives(
        &self,
        _scripts: &[QuantumScript],
    ) -> QtnResult<(Vec<ExecutionResult>, Vec<Jacobian>)> {
        Err(Self::derivatives_error())
    }

    /// Vector-Jacobian products of the scripts
    pub fn compute_vjp(
        &self,
        _scripts: &[QuantumScript],
        _cotangents: &[Vec<f64>],
    ) -> QtnResult<Vec<Vec<f64>>> {
        Err(Self::vjp_error())
    }

    /// Results and vector-Jacobian products of the scripts
    pub fn execute_and_compute_vjp(
        &self,
        _scripts: &[QuantumScript],
        _cotangents: &[Vec<f64>],
    ) -> QtnResult<(Vec<ExecutionResult>, Vec<Vec<f64>>)> {
        Err(Self::vjp_error())
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Render the initial network over the device wires
    pub fn draw(&self, options: &DrawOptions) -> QtnResult<String> {
        let wires = self.config.wires.as_ref().ok_or_else(|| {
            QtnError::InvalidWires("drawing the network requires device wires".to_string())
        })?;

        match self.contractor.as_deref() {
            Some(contractor) => contractor.draw(&self.config, wires, options),
            None => Ok(crate::draw::render_network(&self.config, wires, options)),
        }
    }
}

impl fmt::Debug for DefaultTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultTensor")
            .field("config", &self.config)
            .field("warnings", &self.warnings)
            .field("contractor", &self.contractor_name())
            .finish()
    }
}

impl fmt::Display for DefaultTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.config.wires {
            Some(wires) => write!(f, "<{} device (wires={})>", Self::NAME, wires.len()),
            None => write!(f, "<{} device (wires=None)>", Self::NAME),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VacuumContractor;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qtn_core::builder::ScriptBuilder;
    use qtn_core::measurement::Measurement;
    use qtn_core::observable::Observable;
    use qtn_core::operation::Operation;
    use serde_json::json;

    fn kwargs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("kwargs must be an object"),
        }
    }

    fn vacuum_device(options: DeviceOptions) -> (DefaultTensor, Arc<VacuumContractor>) {
        let backend = Arc::new(VacuumContractor::new());
        let dev = DefaultTensor::new(options)
            .unwrap()
            .with_contractor(backend.clone());
        (dev, backend)
    }

    /// Touches wires 0, 1, 2, 5 and 15
    fn scattered_wire_script() -> QuantumScript {
        ScriptBuilder::new()
            .op(Operation::identity(0))
            .op(Operation::identity([0, 1]))
            .rx(2.0, 2)
            .ry(1.0, 5)
            .rx(2.0, 1)
            .expval(Observable::z(15))
            .build()
    }

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    /// One instance of every allow-listed operation
    fn supported_operations() -> Vec<Operation> {
        let u2 = vec![c(0.0), c(1.0), c(1.0), c(0.0)];
        let u4: Vec<Complex64> = (0..16).map(|i| if i % 5 == 0 { c(1.0) } else { c(0.0) }).collect();

        vec![
            Operation::identity(0),
            Operation::new("BlockEncode", [0, 2]).with_matrix(vec![c(0.1), c(0.2), c(0.3), c(0.4)]),
            Operation::cnot(0, 1),
            Operation::new("CRX", [0, 1]).with_params(vec![0.1]),
            Operation::new("CRY", [0, 1]).with_params(vec![0.2]),
            Operation::new("CRZ", [0, 1]).with_params(vec![0.3]),
            Operation::new("CRot", [1, 0]).with_params(vec![0.1, 0.2, 0.3]),
            Operation::new("CSWAP", [1, 0, 2]),
            Operation::cz(1, 2),
            Operation::new("CCZ", [0, 2, 1]),
            Operation::new("CY", [1, 2]),
            Operation::new("CH", [1, 2]),
            Operation::new("DiagonalQubitUnitary", [0, 1]).with_matrix(vec![c(1.0), c(-1.0), c(1.0), c(-1.0)]),
            Operation::hadamard(0),
            Operation::multi_rz(0.5, [0, 2]),
            Operation::x(0),
            Operation::y(0),
            Operation::z(0),
            Operation::phase_shift(0.5, 0),
            Operation::new("PCPhase", [0, 1]).with_params(vec![0.5, 2.0]),
            Operation::new("ControlledPhaseShift", [0, 1]).with_params(vec![0.5]),
            Operation::new("CPhaseShift00", [0, 1]).with_params(vec![0.5]),
            Operation::new("CPhaseShift01", [0, 1]).with_params(vec![0.5]),
            Operation::new("CPhaseShift10", [0, 1]).with_params(vec![0.5]),
            Operation::qubit_unitary(u2.clone(), 0),
            Operation::new("SpecialUnitary", 0).with_params(vec![0.1, 0.2, 0.3]),
            Operation::new("ControlledQubitUnitary", [0, 1]).with_matrix(u2),
            Operation::new("MultiControlledX", [0, 1, 2]),
            Operation::new("IntegerComparator", [0, 1, 2]).with_params(vec![1.0]),
            Operation::rx(0.1, 0),
            Operation::ry(0.2, 0),
            Operation::rz(0.3, 0),
            Operation::rot(0.1, 0.2, 0.3, 0),
            Operation::s(0),
            Operation::s(0).adjoint(),
            Operation::swap(0, 1),
            Operation::new("ISWAP", [0, 1]),
            Operation::new("PSWAP", [0, 1]).with_params(vec![0.1]),
            Operation::new("ECR", [0, 1]),
            Operation::new("ISWAP", [0, 1]).adjoint(),
            Operation::t(0),
            Operation::t(0).adjoint(),
            Operation::sx(0),
            Operation::sx(0).adjoint(),
            Operation::toffoli([0, 1, 2]),
            Operation::qft([0, 1, 2]),
            Operation::ising_xx(0.1, [0, 1]),
            Operation::new("IsingYY", [0, 1]).with_params(vec![0.1]),
            Operation::new("IsingZZ", [0, 1]).with_params(vec![0.1]),
            Operation::new("IsingXY", [0, 1]).with_params(vec![0.1]),
            Operation::new("SingleExcitation", [0, 1]).with_params(vec![0.1]),
            Operation::new("SingleExcitationPlus", [0, 1]).with_params(vec![0.1]),
            Operation::new("SingleExcitationMinus", [0, 1]).with_params(vec![0.1]),
            Operation::new("DoubleExcitation", [0, 1, 2, 3]).with_params(vec![0.1]),
            Operation::new("QubitCarry", [0, 1, 2, 3]),
            Operation::new("QubitSum", [0, 1, 2]),
            Operation::pauli_rot(0.1, "XY", [0, 1]),
            Operation::new("U1", 0).with_params(vec![0.1]),
            Operation::new("U2", 0).with_params(vec![0.1, 0.2]),
            Operation::new("U3", 0).with_params(vec![0.1, 0.2, 0.3]),
            Operation::new("SISWAP", [0, 1]),
            Operation::new("SISWAP", [0, 1]).adjoint(),
            Operation::new("OrbitalRotation", [0, 1, 2, 3]).with_params(vec![0.1]),
            Operation::new("FermionicSWAP", [0, 1]).with_params(vec![0.1]),
            Operation::global_phase(0.1, Wires::empty()),
            Operation::new("QubitUnitary", [0, 1]).with_matrix(u4),
        ]
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_default_construction() {
        let dev = DefaultTensor::new(DeviceOptions::new()).unwrap();
        assert_eq!(dev.name(), "default.tensor");
        assert_eq!(dev.method(), Method::Mps);
        assert_eq!(dev.contract(), "auto-mps");
        assert_eq!(dev.c_dtype(), CDtype::Complex128);
        assert!(dev.wires().is_none());
        assert!(dev.warnings().is_empty());
        assert_eq!(dev.to_string(), "<default.tensor device (wires=None)>");
    }

    #[test]
    fn test_valid_method_contract_pairs_roundtrip() {
        for method in [Method::Mps, Method::Tn] {
            for contract in method.supported_contractions() {
                let dev = DefaultTensor::from_kwargs(&kwargs(json!({
                    "wires": 2,
                    "method": method.name(),
                    "contract": contract,
                })))
                .unwrap();

                let (_, exec) = dev.preprocess();
                assert_eq!(exec.option("method"), Some(&json!(method.name())));
                assert_eq!(exec.option("contract"), Some(&json!(contract)));
            }
        }
    }

    #[test]
    fn test_cross_pairs_rejected() {
        let err = DefaultTensor::from_kwargs(&kwargs(json!({
            "method": "mps",
            "contract": "auto-split-gate",
        })))
        .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Unsupported gate contraction option: 'auto-split-gate' for 'mps' method."));

        let err = DefaultTensor::from_kwargs(&kwargs(json!({
            "method": "tn",
            "contract": "auto-mps",
        })))
        .unwrap_err();
        assert!(matches!(err, QtnError::UnsupportedContraction { .. }));
    }

    #[test]
    fn test_unexpected_argument() {
        let err = DefaultTensor::from_kwargs(&kwargs(json!({ "wires": 0, "fake_arg": null }))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected argument: fake_arg during initialization of the default.tensor device."
        );
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_invalid_method_and_dtype() {
        let err = DefaultTensor::from_kwargs(&kwargs(json!({ "method": "fake_method" }))).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported method: fake_method");

        let err = DefaultTensor::from_kwargs(&kwargs(json!({ "c_dtype": "float" }))).unwrap_err();
        assert!(matches!(err, QtnError::InvalidDataType(_)));
    }

    #[test]
    fn test_tn_warns_and_succeeds() {
        let dev = DefaultTensor::from_kwargs(&kwargs(json!({
            "method": "tn",
            "max_bond_dim": 10,
            "cutoff": 1e-16,
        })))
        .unwrap();

        assert_eq!(dev.warnings().len(), 2);
        assert!(dev.max_bond_dim().is_none());
        assert!(dev.cutoff().is_none());
    }

    #[test]
    fn test_wires_forms() {
        let dev = DefaultTensor::new(DeviceOptions::new().with_wire_count(3)).unwrap();
        assert_eq!(dev.wires(), Some(&Wires::range(3)));

        let dev = DefaultTensor::new(DeviceOptions::new().with_wires(["a", "b"])).unwrap();
        assert_eq!(dev.wires().map(Wires::len), Some(2));

        assert!(DefaultTensor::new(DeviceOptions::new().with_wires(["a", "a"])).is_err());
    }

    // ------------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------------

    #[test]
    fn test_every_supported_operation_executes() {
        for method in ["mps", "tn"] {
            let (dev, _) = vacuum_device(DeviceOptions::new().with_method(method).with_wire_count(4));
            for op in supported_operations() {
                let name = op.name();
                let script = ScriptBuilder::new()
                    .op(op)
                    .expval(Observable::identity(0))
                    .build();
                let result = dev
                    .execute(&script)
                    .unwrap_or_else(|e| panic!("{} failed on {}: {}", name, method, e));
                assert_relative_eq!(result.scalar().unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn test_supported_observables_execute() {
        let (dev, _) = vacuum_device(DeviceOptions::new());
        let observables = vec![
            Observable::identity(0),
            Observable::hadamard(0),
            Observable::hermitian(vec![c(1.0), c(0.0), c(0.0), c(-1.0)], 0),
            Observable::x(0),
            Observable::y(0),
            Observable::z(0),
            Observable::projector(vec![0.0], 0),
            Observable::SparseHamiltonian {
                entries: vec![(0, 0, c(2.0)), (1, 1, c(-2.0))],
                wires: Wires::from(0usize),
            },
            Observable::hamiltonian(vec![1.0], vec![Observable::z(0)]),
            Observable::linear_combination(vec![0.5, 0.5], vec![Observable::z(0), Observable::x(1)]),
        ];

        for obs in observables {
            let script = ScriptBuilder::new().h(0).expval(obs).build();
            assert!(dev.execute(&script).is_ok());
        }
    }

    #[test]
    fn test_probs_rejected_for_both_methods() {
        for method in ["mps", "tn"] {
            let (dev, backend) = vacuum_device(DeviceOptions::new().with_method(method));
            let script = ScriptBuilder::new().h(0).probs([0]).build();

            let err = dev.execute(&script).unwrap_err();
            assert!(matches!(err, QtnError::UnsupportedMeasurement { .. }));
            assert!(err.to_string().contains("expval, var"));
            assert_eq!(backend.calls(), 0);
        }
    }

    #[test]
    fn test_wire_inference_at_runtime() {
        let (dev, backend) = vacuum_device(DeviceOptions::new());
        let script = scattered_wire_script();

        assert_eq!(dev.execution_wires(&script), Wires::from([0, 1, 2, 5, 15]));
        let result = dev.execute(&script).unwrap();
        assert_relative_eq!(result.scalar().unwrap(), 1.0);
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_fixed_wires_mismatch() {
        let (dev, backend) = vacuum_device(DeviceOptions::new().with_wire_count(1));
        let script = scattered_wire_script();

        let err = dev.execute(&script).unwrap_err();
        assert!(matches!(err, QtnError::WireMismatch { .. }));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_json_measurement_wires_checked() {
        let (dev, backend) = vacuum_device(DeviceOptions::new().with_wire_count(1));
        let script = QuantumScript::from_json(
            r#"{
                "operations": [],
                "measurements": [{
                    "kind": "expval",
                    "observable": {"Named": {"name": "PauliZ", "wires": [15]}},
                    "wires": []
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(script.wires(), Wires::from(15usize));
        let err = dev.execute(&script).unwrap_err();
        assert!(matches!(err, QtnError::WireMismatch { .. }));

        let (program, _) = dev.preprocess();
        assert!(matches!(
            program.apply(&script),
            Err(QtnError::WireMismatch { .. })
        ));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_unsupported_operation_and_observable() {
        let (dev, backend) = vacuum_device(DeviceOptions::new());

        let script = ScriptBuilder::new()
            .op(Operation::new("Barrier2", 0))
            .expval(Observable::z(0))
            .build();
        assert!(matches!(
            dev.execute(&script),
            Err(QtnError::UnsupportedOperation { .. })
        ));

        let script = ScriptBuilder::new()
            .expval(Observable::named("Exp", 0))
            .build();
        assert!(matches!(
            dev.execute(&script),
            Err(QtnError::UnsupportedObservable { .. })
        ));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_without_backend() {
        let dev = DefaultTensor::new(DeviceOptions::new()).unwrap();
        let script = ScriptBuilder::new().expval(Observable::z(0)).build();
        assert_eq!(
            dev.execute(&script).unwrap_err(),
            QtnError::BackendUnavailable("default.tensor".into())
        );

        // validation still runs first
        let script = ScriptBuilder::new().probs([0]).build();
        assert!(matches!(
            dev.execute(&script),
            Err(QtnError::UnsupportedMeasurement { .. })
        ));
    }

    #[test]
    fn test_expval_and_var() {
        let (dev, _) = vacuum_device(DeviceOptions::new());
        let script = ScriptBuilder::new()
            .expval(Observable::x(0))
            .var(Observable::x(0))
            .measure(Measurement::var(Observable::hadamard(1)))
            .build();

        let result = dev.execute(&script).unwrap();
        assert_eq!(result.len(), 3);
        assert_relative_eq!(result.values[0], 0.0);
        assert_relative_eq!(result.values[1], 1.0);
        assert_relative_eq!(result.values[2], 0.5);
    }

    #[test]
    fn test_complex64_precision() {
        let (dev, _) = vacuum_device(DeviceOptions::new().with_c_dtype("complex64"));
        let script = ScriptBuilder::new().expval(Observable::hadamard(0)).build();

        let value = dev.execute(&script).unwrap().scalar().unwrap();
        assert_eq!(value, std::f64::consts::FRAC_1_SQRT_2 as f32 as f64);
    }

    #[test]
    fn test_batch() {
        let (dev, backend) = vacuum_device(DeviceOptions::new());
        let scripts = vec![
            ScriptBuilder::new().expval(Observable::z(0)).build(),
            ScriptBuilder::new().expval(Observable::x(0)).build(),
        ];
        let results = dev.execute_batch(&scripts).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(backend.calls(), 2);
    }

    // ------------------------------------------------------------------------
    // Differentiation
    // ------------------------------------------------------------------------

    #[test]
    fn test_derivatives_unsupported() {
        let dev = DefaultTensor::new(DeviceOptions::new()).unwrap();
        let scripts = vec![ScriptBuilder::new().rx(0.1, 0).expval(Observable::z(0)).build()];

        assert!(!dev.supports_derivatives());
        assert!(!dev.supports_vjp());

        let expected =
            "The computation of derivatives has yet to be implemented for the default.tensor device.";
        assert_eq!(dev.compute_derivatives(&scripts).unwrap_err().to_string(), expected);
        assert_eq!(
            dev.execute_and_compute_derivatives(&scripts).unwrap_err().to_string(),
            expected
        );

        let expected = "The computation of vector-Jacobian product has yet to be implemented for the default.tensor device.";
        let cotangents = vec![vec![1.0]];
        assert_eq!(dev.compute_vjp(&scripts, &cotangents).unwrap_err().to_string(), expected);
        assert_eq!(
            dev.execute_and_compute_vjp(&scripts, &cotangents).unwrap_err().to_string(),
            expected
        );
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    #[test]
    fn test_draw() {
        let dev = DefaultTensor::new(DeviceOptions::new().with_wire_count(3).with_max_bond_dim(2)).unwrap();
        let text = dev.draw(&DrawOptions::new().with_title("net")).unwrap();
        assert_eq!(text, "net\n[0]─2─[1]─2─[2]\n");

        let dev = DefaultTensor::new(DeviceOptions::new()).unwrap();
        assert!(matches!(
            dev.draw(&DrawOptions::new()),
            Err(QtnError::InvalidWires(_))
        ));
    }
}
