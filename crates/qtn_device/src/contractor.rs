//! Contraction backend seam
//!
//! Gantree: L3_Device → ContractorTrait
//!
//! The device validates and configures; a `Contractor` does the actual
//! tensor-network work. The device only ever talks to this trait.

use crate::config::DeviceConfig;
use crate::draw::{render_network, DrawOptions};
use qtn_core::error::QtnResult;
use qtn_core::script::QuantumScript;
use qtn_core::types::{CDtype, Wires};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a backend needs to evaluate one script
#[derive(Debug, Clone, Copy)]
pub struct ContractionRequest<'a> {
    /// Resolved device configuration
    pub config: &'a DeviceConfig,
    /// Wires of the network (device wires, or the script's own)
    pub wires: &'a Wires,
    /// Validated script
    pub script: &'a QuantumScript,
}

/// Result of executing one script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// One value per measurement, in measurement order
    pub values: Vec<f64>,
    /// Precision the values were rounded to
    pub dtype: CDtype,
}

impl ExecutionResult {
    /// Round raw backend values to `dtype`
    pub fn new(values: Vec<f64>, dtype: CDtype) -> Self {
        Self {
            values: values.into_iter().map(|v| dtype.round(v)).collect(),
            dtype,
        }
    }

    /// The value of a single-measurement script
    pub fn scalar(&self) -> Option<f64> {
        match self.values.as_slice() {
            [v] => Some(*v),
            _ => None,
        }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExecutionResult({:?}, dtype={})", self.values, self.dtype)
    }
}

/// Tensor-network contraction backend
/// Gantree: ContractorTrait // 백엔드 인터페이스
pub trait Contractor: Send + Sync {
    /// Backend name
    fn name(&self) -> &str;

    /// Evaluate every measurement of a validated script
    /// Gantree: contract(request) -> QtnResult<Vec<f64>>
    fn contract(&self, request: &ContractionRequest<'_>) -> QtnResult<Vec<f64>>;

    /// Render the initial network
    fn draw(&self, config: &DeviceConfig, wires: &Wires, options: &DrawOptions) -> QtnResult<String> {
        Ok(render_network(config, wires, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex64_rounds_to_f32() {
        let result = ExecutionResult::new(vec![0.1, 1.0], CDtype::Complex64);
        assert_eq!(result.values[0], 0.1f32 as f64);
        assert_ne!(result.values[0], 0.1);
        assert_eq!(result.values[1], 1.0);
        assert_eq!(result.scalar(), None);
    }

    #[test]
    fn test_complex128_untouched() {
        let result = ExecutionResult::new(vec![0.1], CDtype::Complex128);
        assert_eq!(result.scalar(), Some(0.1));
        assert_eq!(result.len(), 1);
    }
}
