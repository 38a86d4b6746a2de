//! Python bindings for the default.tensor device
//!
//! Gantree: L9_Python → PyDefaultTensor

use crate::convert::{kwargs_to_map, py_to_json, wire_to_py};
use crate::errors::to_py_err;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyTuple};
use qtn_core::error::QtnResult;
use qtn_core::script::QuantumScript;
use qtn_device::{DefaultTensor, DrawOptions};
use serde_json::{Map, Value};
use std::io::IsTerminal;

/// Devices this module can build
pub const DEVICES: &[&str] = &[DefaultTensor::NAME];

/// Python wrapper for DefaultTensor
/// Gantree: PyDefaultTensor // 디바이스 바인딩
#[pyclass(name = "DefaultTensor")]
#[derive(Clone)]
pub struct PyDefaultTensor {
    pub(crate) inner: DefaultTensor,
}

impl PyDefaultTensor {
    /// Build from a keyword map
    pub fn from_kwargs(kwargs: &Map<String, Value>) -> QtnResult<Self> {
        Ok(Self {
            inner: DefaultTensor::from_kwargs(kwargs)?,
        })
    }

    /// Text diagram with an optional title
    pub fn render(&self, title: Option<&str>, color: bool) -> QtnResult<String> {
        let mut options = DrawOptions::new().with_color(color);
        if let Some(title) = title {
            options = options.with_title(title);
        }
        self.inner.draw(&options)
    }
}

/// Colour mode of `draw`: a bool, or `"auto"` for colour on a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Plain text
    Never,
    /// ANSI colour
    Always,
    /// Colour when stdout is a terminal
    Auto,
}

impl ColorMode {
    /// Parse a string mode
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Whether to emit colour
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

fn extract_color(value: Option<&PyAny>) -> PyResult<ColorMode> {
    let Some(value) = value else {
        return Ok(ColorMode::Never);
    };
    if value.is_none() {
        return Ok(ColorMode::Never);
    }
    if value.is_instance_of::<PyBool>() {
        return Ok(if value.extract::<bool>()? {
            ColorMode::Always
        } else {
            ColorMode::Never
        });
    }
    let name: String = value.extract()?;
    ColorMode::from_name(&name).ok_or_else(|| {
        PyValueError::new_err(format!(
            "Invalid color option '{}'. Expected True, False or 'auto'.",
            name
        ))
    })
}

#[pymethods]
impl PyDefaultTensor {
    /// Create a device, e.g. `DefaultTensor(wires=2, method="tn")`
    #[new]
    #[pyo3(signature = (wires=None, **kwargs))]
    pub fn new(wires: Option<&PyAny>, kwargs: Option<&PyDict>) -> PyResult<Self> {
        let mut map = kwargs_to_map(kwargs)?;
        if let Some(wires) = wires {
            map.insert("wires".to_string(), py_to_json(wires)?);
        }
        Self::from_kwargs(&map).map_err(to_py_err)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Device name
    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Device wires, or None when inferred per circuit
    #[getter]
    pub fn wires(&self, py: Python<'_>) -> Option<Vec<PyObject>> {
        self.inner
            .wires()
            .map(|w| w.iter().map(|label| wire_to_py(py, label)).collect())
    }

    /// Simulation method
    #[getter]
    pub fn method(&self) -> &'static str {
        self.inner.method().name()
    }

    /// Complex dtype name
    #[getter]
    pub fn c_dtype(&self) -> &'static str {
        self.inner.c_dtype().name()
    }

    /// Contraction strategy
    #[getter]
    pub fn contract(&self) -> String {
        self.inner.contract().to_string()
    }

    /// Bond dimension limit (MPS only)
    #[getter]
    pub fn max_bond_dim(&self) -> Option<usize> {
        self.inner.max_bond_dim().map(|d| d.get())
    }

    /// Truncation cutoff (MPS only)
    #[getter]
    pub fn cutoff(&self) -> Option<f64> {
        self.inner.cutoff()
    }

    /// Construction warnings
    #[getter]
    pub fn warnings(&self) -> Vec<String> {
        self.inner.warnings().iter().map(|w| w.to_string()).collect()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Resolved device options, as reported by preprocessing
    pub fn preprocess(&self, py: Python<'_>) -> PyResult<PyObject> {
        let (_, config) = self.inner.preprocess();
        let json_str = serde_json::to_string(config.device_options())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let json_module = py.import("json")?;
        json_module
            .call_method1("loads", (json_str,))
            .map(|o| o.into())
    }

    /// Run the validation program on a JSON-encoded script
    pub fn validate(&self, script_json: &str) -> PyResult<()> {
        let script = QuantumScript::from_json(script_json).map_err(to_py_err)?;
        let (program, _) = self.inner.preprocess();
        program.apply(&script).map_err(to_py_err)
    }

    /// Execute a JSON-encoded script
    ///
    /// No contraction backend can be attached from Python, so after the
    /// validation program passes this raises `RuntimeError` (backend
    /// unavailable). Use `validate` to check a script.
    pub fn execute(&self, script_json: &str) -> PyResult<Vec<f64>> {
        let script = QuantumScript::from_json(script_json).map_err(to_py_err)?;
        self.inner
            .execute(&script)
            .map(|r| r.values)
            .map_err(to_py_err)
    }

    // ========================================================================
    // Differentiation
    // ========================================================================

    /// Always False
    pub fn supports_derivatives(&self) -> bool {
        self.inner.supports_derivatives()
    }

    /// Always False
    pub fn supports_vjp(&self) -> bool {
        self.inner.supports_vjp()
    }

    /// Always raises NotImplementedError
    #[pyo3(signature = (*_args, **_kwargs))]
    pub fn compute_derivatives(&self, _args: &PyTuple, _kwargs: Option<&PyDict>) -> PyResult<()> {
        self.inner.compute_derivatives(&[]).map(|_| ()).map_err(to_py_err)
    }

    /// Always raises NotImplementedError
    #[pyo3(signature = (*_args, **_kwargs))]
    pub fn execute_and_compute_derivatives(
        &self,
        _args: &PyTuple,
        _kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.inner
            .execute_and_compute_derivatives(&[])
            .map(|_| ())
            .map_err(to_py_err)
    }

    /// Always raises NotImplementedError
    #[pyo3(signature = (*_args, **_kwargs))]
    pub fn compute_vjp(&self, _args: &PyTuple, _kwargs: Option<&PyDict>) -> PyResult<()> {
        self.inner.compute_vjp(&[], &[]).map(|_| ()).map_err(to_py_err)
    }

    /// Always raises NotImplementedError
    #[pyo3(signature = (*_args, **_kwargs))]
    pub fn execute_and_compute_vjp(&self, _args: &PyTuple, _kwargs: Option<&PyDict>) -> PyResult<()> {
        self.inner
            .execute_and_compute_vjp(&[], &[])
            .map(|_| ())
            .map_err(to_py_err)
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Text diagram of the initial network
    ///
    /// `color` is a bool or `"auto"`. The diagram is always returned as a
    /// string, so `return_fig` is accepted for compatibility only.
    #[pyo3(signature = (title=None, color=None, return_fig=false))]
    pub fn draw(&self, title: Option<&str>, color: Option<&PyAny>, return_fig: bool) -> PyResult<String> {
        let _ = return_fig;
        let color = extract_color(color)?;
        self.render(title, color.enabled()).map_err(to_py_err)
    }

    /// Convert configuration to JSON string
    pub fn to_json(&self) -> PyResult<String> {
        self.inner.config().to_json().map_err(to_py_err)
    }

    /// Convert configuration to dictionary
    pub fn to_dict(&self, py: Python<'_>) -> PyResult<PyObject> {
        let json_str = self.to_json()?;
        let json_module = py.import("json")?;
        json_module
            .call_method1("loads", (json_str,))
            .map(|o| o.into())
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// Create a device by name, e.g. `qtn.device("default.tensor", wires=2)`
#[pyfunction]
#[pyo3(signature = (name, wires=None, **kwargs))]
pub fn device(name: &str, wires: Option<&PyAny>, kwargs: Option<&PyDict>) -> PyResult<PyDefaultTensor> {
    if !DEVICES.contains(&name) {
        return Err(PyValueError::new_err(format!(
            "Device {} does not exist. Available devices: {}",
            name,
            DEVICES.join(", ")
        )));
    }
    PyDefaultTensor::new(wires, kwargs)
}
