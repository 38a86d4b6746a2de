//! Python object → keyword value conversion
//!
//! Gantree: L9_Python → KwargConversion

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyString};
use qtn_core::types::WireLabel;
use serde_json::{Map, Number, Value};

/// Convert a keyword value to JSON
///
/// Classes and dtypes (e.g. `numpy.complex64`) become their name so that
/// `c_dtype=np.complex64` and `c_dtype="complex64"` mean the same thing.
pub fn py_to_json(obj: &PyAny) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    if obj.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(obj.extract()?));
    }
    if let Ok(i) = obj.extract::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(x) = obj.extract::<f64>() {
        return Number::from_f64(x)
            .map(Value::Number)
            .ok_or_else(|| PyTypeError::new_err(format!("non-finite value {}", x)));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::String(s.to_str()?.to_string()));
    }
    if let Ok(name) = obj.getattr("__name__") {
        return Ok(Value::String(name.extract()?));
    }
    if let Ok(name) = obj.getattr("name") {
        if let Ok(name) = name.extract::<String>() {
            return Ok(Value::String(name));
        }
    }
    if let Ok(iter) = obj.iter() {
        let items = iter
            .map(|item| item.and_then(py_to_json))
            .collect::<PyResult<Vec<_>>>()?;
        return Ok(Value::Array(items));
    }

    Err(PyTypeError::new_err(format!(
        "unsupported keyword value {}",
        obj.repr()?
    )))
}

/// Convert keyword arguments to a JSON map
pub fn kwargs_to_map(kwargs: Option<&PyDict>) -> PyResult<Map<String, Value>> {
    let mut map = Map::new();
    if let Some(kwargs) = kwargs {
        for (key, value) in kwargs.iter() {
            map.insert(key.extract::<String>()?, py_to_json(value)?);
        }
    }
    Ok(map)
}

/// Wire label as a Python object
pub fn wire_to_py(py: Python<'_>, label: &WireLabel) -> PyObject {
    match label {
        WireLabel::Int(i) => (*i).into_py(py),
        WireLabel::Str(s) => s.as_str().into_py(py),
    }
}
