//! Keyword options for the `default.tensor` device
//!
//! Gantree: L3_Device → DeviceOptions
//!
//! `DeviceOptions` is the unvalidated input to device construction. It can be
//! built fluently from Rust or from a keyword map (`serde_json::Map`), which
//! is what the Python bindings hand over. Only shape-level parsing happens
//! here; every semantic check lives in `DeviceConfig::resolve`.

use qtn_core::constants::device;
use qtn_core::error::{QtnError, QtnResult};
use qtn_core::types::{WireLabel, Wires};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Recognized keywords, in the order their values are validated
const PARSE_ORDER: &[&str] = &[
    "method",
    "c_dtype",
    "contract",
    "max_bond_dim",
    "cutoff",
    "contraction_optimizer",
    "local_simplify",
    "wires",
];

/// `wires` keyword argument
/// Gantree: WiresArg // 와이어 인자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WiresArg {
    /// `k` wires labelled `0..k`
    Count(usize),
    /// Explicit labels, used verbatim
    Labels(Vec<WireLabel>),
}

impl WiresArg {
    /// Resolve to a wire set
    pub fn to_wires(&self) -> QtnResult<Wires> {
        match self {
            WiresArg::Count(k) => Ok(Wires::range(*k)),
            WiresArg::Labels(labels) => Wires::new(labels.iter().cloned()),
        }
    }
}

/// Unvalidated device keyword options
/// Gantree: DeviceOptions // 디바이스 옵션
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceOptions {
    /// Wires (`None` = infer from each circuit)
    pub wires: Option<WiresArg>,

    /// Simulation method name
    pub method: Option<String>,

    /// Complex dtype name
    pub c_dtype: Option<String>,

    /// Maximum MPS bond dimension
    pub max_bond_dim: Option<i64>,

    /// Singular-value truncation cutoff
    pub cutoff: Option<f64>,

    /// Gate contraction strategy
    pub contract: Option<String>,

    /// Contraction path optimizer
    pub contraction_optimizer: Option<String>,

    /// Local simplification sequence
    pub local_simplify: Option<String>,

    /// Keywords the device does not recognize
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl DeviceOptions {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Empty options (every value defaulted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a keyword map
    /// Gantree: from_kwargs(map) -> QtnResult<Self> // 키워드 파싱
    ///
    /// An unrecognized key is reported before any value is looked at. The
    /// recognized keys are then parsed in validation order, so a bad
    /// `method` wins over a bad `c_dtype`.
    pub fn from_kwargs(kwargs: &Map<String, Value>) -> QtnResult<Self> {
        if let Some(key) = kwargs
            .keys()
            .find(|k| !device::RECOGNIZED_OPTIONS.contains(&k.as_str()))
        {
            return Err(QtnError::UnsupportedArgument {
                argument: key.clone(),
                device: device::NAME.to_string(),
            });
        }

        let mut options = Self::new();
        for key in PARSE_ORDER {
            if let Some(value) = kwargs.get(*key) {
                options = options.with_option(key, value.clone())?;
            }
        }
        Ok(options)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set a single keyword from a JSON value
    ///
    /// `null` leaves the option at its default. Unknown keys are kept in
    /// `extra` and rejected when the options are resolved.
    pub fn with_option(mut self, key: &str, value: Value) -> QtnResult<Self> {
        if value.is_null() && key != "wires" {
            return Ok(self);
        }

        match key {
            "wires" => self.wires = parse_wires(&value)?,
            "method" => {
                let method = value
                    .as_str()
                    .ok_or_else(|| QtnError::UnsupportedMethod(value.to_string()))?;
                self.method = Some(method.to_string());
            }
            "c_dtype" => {
                let dtype = value
                    .as_str()
                    .ok_or_else(|| QtnError::InvalidDataType(value.to_string()))?;
                self.c_dtype = Some(dtype.to_string());
            }
            "max_bond_dim" => {
                let dim = value
                    .as_i64()
                    .ok_or_else(|| invalid(key, "expected an integer", &value))?;
                self.max_bond_dim = Some(dim);
            }
            "cutoff" => {
                let cutoff = value
                    .as_f64()
                    .ok_or_else(|| invalid(key, "expected a float", &value))?;
                self.cutoff = Some(cutoff);
            }
            "contract" | "contraction_optimizer" | "local_simplify" => {
                let text = value
                    .as_str()
                    .ok_or_else(|| invalid(key, "expected a string", &value))?
                    .to_string();
                match key {
                    "contract" => self.contract = Some(text),
                    "contraction_optimizer" => self.contraction_optimizer = Some(text),
                    _ => self.local_simplify = Some(text),
                }
            }
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(self)
    }

    /// Set wires to `0..count`
    pub fn with_wire_count(mut self, count: usize) -> Self {
        self.wires = Some(WiresArg::Count(count));
        self
    }

    /// Set explicit wire labels
    pub fn with_wires(mut self, labels: impl IntoIterator<Item = impl Into<WireLabel>>) -> Self {
        self.wires = Some(WiresArg::Labels(labels.into_iter().map(Into::into).collect()));
        self
    }

    /// Set method
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// Set complex dtype
    pub fn with_c_dtype(mut self, c_dtype: &str) -> Self {
        self.c_dtype = Some(c_dtype.to_string());
        self
    }

    /// Set maximum bond dimension
    pub fn with_max_bond_dim(mut self, dim: i64) -> Self {
        self.max_bond_dim = Some(dim);
        self
    }

    /// Set truncation cutoff
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Set contraction strategy
    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }

    /// Set contraction path optimizer
    pub fn with_contraction_optimizer(mut self, optimizer: &str) -> Self {
        self.contraction_optimizer = Some(optimizer.to_string());
        self
    }

    /// Set local simplification sequence
    pub fn with_local_simplify(mut self, sequence: &str) -> Self {
        self.local_simplify = Some(sequence.to_string());
        self
    }

    /// First unrecognized keyword, if any
    pub fn unknown_option(&self) -> Option<&str> {
        self.extra.keys().next().map(String::as_str)
    }
}

fn invalid(option: &str, reason: &str, value: &Value) -> QtnError {
    QtnError::InvalidOption {
        option: option.to_string(),
        reason: format!("{}, got {}", reason, value),
    }
}

fn parse_wires(value: &Value) -> QtnResult<Option<WiresArg>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(|k| Some(WiresArg::Count(k as usize)))
            .ok_or_else(|| QtnError::InvalidWires(format!("wire count must be non-negative, got {}", n))),
        Value::Array(items) => {
            let labels = items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => n
                        .as_i64()
                        .map(WireLabel::Int)
                        .ok_or_else(|| QtnError::InvalidWires(format!("invalid wire label {}", n))),
                    Value::String(s) => Ok(WireLabel::Str(s.clone())),
                    other => Err(QtnError::InvalidWires(format!("invalid wire label {}", other))),
                })
                .collect::<QtnResult<Vec<_>>>()?;
            Ok(Some(WiresArg::Labels(labels)))
        }
        other => Err(QtnError::InvalidWires(format!(
            "wires must be an integer or a sequence of labels, got {}",
            other
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
