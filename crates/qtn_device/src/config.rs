//! Resolved device configuration
//!
//! Gantree: L3_Device → DeviceConfig
//!
//! `DeviceConfig::resolve` turns unvalidated `DeviceOptions` into an
//! immutable configuration, or the first construction error in this order:
//!
//! 1. unrecognized keyword
//! 2. method
//! 3. complex dtype
//! 4. contraction strategy default
//! 5. method × contraction cross-check
//! 6. options ignored by `tn` (warning, not an error)
//! 7. option values
//! 8. wires

use crate::options::DeviceOptions;
use qtn_core::constants::device;
use qtn_core::error::{QtnError, QtnResult};
use qtn_core::types::{CDtype, Wires};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

// ============================================================================
// Method
// ============================================================================

/// Tensor-network simulation method
/// Gantree: Method // 시뮬레이션 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Matrix product state
    #[default]
    Mps,
    /// Exact tensor network
    Tn,
}

impl Method {
    /// Method name
    pub fn name(&self) -> &'static str {
        match self {
            Method::Mps => "mps",
            Method::Tn => "tn",
        }
    }

    /// Contraction strategy used when none is given
    pub fn default_contract(&self) -> &'static str {
        match self {
            Method::Mps => device::DEFAULT_CONTRACT_MPS,
            Method::Tn => device::DEFAULT_CONTRACT_TN,
        }
    }

    /// Contraction strategies this method accepts
    pub fn supported_contractions(&self) -> &'static [&'static str] {
        match self {
            Method::Mps => device::MPS_CONTRACTIONS,
            Method::Tn => device::TN_CONTRACTIONS,
        }
    }

    /// Reject a contraction strategy the method cannot apply
    pub fn check_contract(&self, contract: &str) -> QtnResult<()> {
        let supported = self.supported_contractions();
        if supported.contains(&contract) {
            Ok(())
        } else {
            Err(QtnError::UnsupportedContraction {
                contract: contract.to_string(),
                method: self.name().to_string(),
                supported: supported
                    .iter()
                    .map(|c| format!("'{}'", c))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        }
    }
}

impl FromStr for Method {
    type Err = QtnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mps" => Ok(Method::Mps),
            "tn" => Ok(Method::Tn),
            _ => Err(QtnError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Method Options
// ============================================================================

/// Options only meaningful for MPS
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MpsOptions {
    /// Bond dimension limit (`None` = unbounded)
    pub max_bond_dim: Option<NonZeroUsize>,

    /// Singular values below this are truncated
    pub cutoff: f64,
}

impl Default for MpsOptions {
    fn default() -> Self {
        Self {
            max_bond_dim: None,
            cutoff: device::DEFAULT_CUTOFF,
        }
    }
}

/// Options only meaningful for exact tensor networks (none yet)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TnOptions {}

/// Method together with its method-specific options
/// Gantree: MethodOptions // 방식별 옵션
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum MethodOptions {
    /// MPS with truncation controls
    Mps(MpsOptions),
    /// Exact tensor network
    Tn(TnOptions),
}

impl MethodOptions {
    /// The method
    pub fn method(&self) -> Method {
        match self {
            MethodOptions::Mps(_) => Method::Mps,
            MethodOptions::Tn(_) => Method::Tn,
        }
    }

    /// MPS options, if this is MPS
    pub fn mps(&self) -> Option<&MpsOptions> {
        match self {
            MethodOptions::Mps(opts) => Some(opts),
            MethodOptions::Tn(_) => None,
        }
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal construction diagnostic
/// Gantree: ConfigWarning // 경고
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConfigWarning {
    /// An option that the chosen method ignores
    #[error("The keyword argument '{option}' is not used when the method is '{method}'. It will be ignored.")]
    UnusedOption { option: String, method: String },
}

// ============================================================================
// DeviceConfig
// ============================================================================

/// Immutable, validated device configuration
/// Gantree: DeviceConfig // 검증된 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Method and method-specific options
    pub method_options: MethodOptions,

    /// Gate contraction strategy
    pub contract: String,

    /// Complex precision
    pub c_dtype: CDtype,

    /// Fixed wires (`None` = infer per circuit)
    pub wires: Option<Wires>,

    /// Contraction path optimizer
    pub contraction_optimizer: String,

    /// Local simplification sequence
    pub local_simplify: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            method_options: MethodOptions::Mps(MpsOptions::default()),
            contract: device::DEFAULT_CONTRACT_MPS.to_string(),
            c_dtype: CDtype::default(),
            wires: None,
            contraction_optimizer: device::DEFAULT_CONTRACTION_OPTIMIZER.to_string(),
            local_simplify: device::DEFAULT_LOCAL_SIMPLIFY.to_string(),
        }
    }
}

impl DeviceConfig {
    /// Validate options into a configuration plus any warnings
    /// Gantree: resolve(options) -> QtnResult<(DeviceConfig, Vec<ConfigWarning>)>
    pub fn resolve(options: &DeviceOptions) -> QtnResult<(Self, Vec<ConfigWarning>)> {
        // 1. unrecognized keywords
        if let Some(key) = options.unknown_option() {
            return Err(QtnError::UnsupportedArgument {
                argument: key.to_string(),
                device: device::NAME.to_string(),
            });
        }

        // 2. method
        let method: Method = options
            .method
            .as_deref()
            .unwrap_or(device::DEFAULT_METHOD)
            .parse()?;

        // 3. dtype
        let c_dtype = match options.c_dtype.as_deref() {
            Some(name) => name.parse()?,
            None => CDtype::default(),
        };

        // 4-5. contraction strategy
        let contract = options
            .contract
            .clone()
            .unwrap_or_else(|| method.default_contract().to_string());
        method.check_contract(&contract)?;

        // 6-7. method-specific options
        let mut warnings = Vec::new();
        let method_options = match method {
            Method::Mps => MethodOptions::Mps(MpsOptions {
                max_bond_dim: options.max_bond_dim.map(parse_bond_dim).transpose()?,
                cutoff: options
                    .cutoff
                    .map(parse_cutoff)
                    .transpose()?
                    .unwrap_or(device::DEFAULT_CUTOFF),
            }),
            Method::Tn => {
                for (option, given) in [
                    ("max_bond_dim", options.max_bond_dim.is_some()),
                    ("cutoff", options.cutoff.is_some()),
                ] {
                    if given {
                        let warning = ConfigWarning::UnusedOption {
                            option: option.to_string(),
                            method: method.name().to_string(),
                        };
                        log::warn!("{}", warning);
                        warnings.push(warning);
                    }
                }
                MethodOptions::Tn(TnOptions::default())
            }
        };

        let contraction_optimizer = match options.contraction_optimizer.as_deref() {
            Some(name) => parse_optimizer(name)?,
            None => device::DEFAULT_CONTRACTION_OPTIMIZER.to_string(),
        };
        let local_simplify = match options.local_simplify.as_deref() {
            Some(sequence) => parse_local_simplify(sequence)?,
            None => device::DEFAULT_LOCAL_SIMPLIFY.to_string(),
        };

        // 8. wires
        let wires = options
            .wires
            .as_ref()
            .map(|arg| arg.to_wires())
            .transpose()?;

        Ok((
            Self {
                method_options,
                contract,
                c_dtype,
                wires,
                contraction_optimizer,
                local_simplify,
            },
            warnings,
        ))
    }

    /// Simulation method
    pub fn method(&self) -> Method {
        self.method_options.method()
    }

    /// Bond dimension limit (MPS only)
    pub fn max_bond_dim(&self) -> Option<NonZeroUsize> {
        self.method_options.mps().and_then(|o| o.max_bond_dim)
    }

    /// Truncation cutoff (MPS only)
    pub fn cutoff(&self) -> Option<f64> {
        self.method_options.mps().map(|o| o.cutoff)
    }

    /// Flat map of the resolved option values
    pub fn device_options(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("method".into(), json!(self.method().name()));
        map.insert("contract".into(), json!(self.contract));
        map.insert("c_dtype".into(), json!(self.c_dtype.name()));
        map.insert(
            "contraction_optimizer".into(),
            json!(self.contraction_optimizer),
        );
        map.insert("local_simplify".into(), json!(self.local_simplify));
        if let MethodOptions::Mps(opts) = &self.method_options {
            map.insert(
                "max_bond_dim".into(),
                json!(opts.max_bond_dim.map(NonZeroUsize::get)),
            );
            map.insert("cutoff".into(), json!(opts.cutoff));
        }
        map
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QtnResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeviceConfig(method={}, contract={}, c_dtype={}",
            self.method(),
            self.contract,
            self.c_dtype
        )?;
        if let Some(opts) = self.method_options.mps() {
            match opts.max_bond_dim {
                Some(dim) => write!(f, ", max_bond_dim={}", dim)?,
                None => write!(f, ", max_bond_dim=None")?,
            }
            write!(f, ", cutoff={:e}", opts.cutoff)?;
        }
        match &self.wires {
            Some(wires) => write!(f, ", wires={})", wires),
            None => write!(f, ", wires=None)"),
        }
    }
}

fn parse_bond_dim(dim: i64) -> QtnResult<NonZeroUsize> {
    usize::try_from(dim)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| QtnError::InvalidOption {
            option: "max_bond_dim".to_string(),
            reason: format!("must be a positive integer, got {}", dim),
        })
}

fn parse_cutoff(cutoff: f64) -> QtnResult<f64> {
    if cutoff.is_finite() && cutoff > 0.0 {
        Ok(cutoff)
    } else {
        Err(QtnError::InvalidOption {
            option: "cutoff".to_string(),
            reason: format!("must be a positive finite float, got {}", cutoff),
        })
    }
}

fn parse_optimizer(name: &str) -> QtnResult<String> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(QtnError::InvalidOption {
            option: "contraction_optimizer".to_string(),
            reason: format!("'{}' is not an optimizer name", name),
        });
    }
    Ok(name.to_string())
}

fn parse_local_simplify(sequence: &str) -> QtnResult<String> {
    match sequence
        .chars()
        .find(|c| !device::LOCAL_SIMPLIFY_STEPS.contains(c))
    {
        Some(step) => Err(QtnError::InvalidOption {
            option: "local_simplify".to_string(),
            reason: format!(
                "unknown simplification step '{}' (allowed: {})",
                step,
                device::LOCAL_SIMPLIFY_STEPS.iter().collect::<String>()
            ),
        }),
        None => Ok(sequence.to_string()),
    }
}

// ============================================================================
// ExecutionConfig
// ============================================================================

/// Per-execution configuration reported by `preprocess`
/// Gantree: ExecutionConfig // 실행 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    device_options: Map<String, Value>,
    use_device_gradient: bool,
}

impl ExecutionConfig {
    /// Execution config for a resolved device configuration
    pub fn from_device_config(config: &DeviceConfig) -> Self {
        Self {
            device_options: config.device_options(),
            use_device_gradient: false,
        }
    }

    /// Resolved device option values
    pub fn device_options(&self) -> &Map<String, Value> {
        &self.device_options
    }

    /// Single option value
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.device_options.get(key)
    }

    /// Whether the device computes gradients itself (never)
    pub fn use_device_gradient(&self) -> bool {
        self.use_device_gradient
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn resolve(options: DeviceOptions) -> QtnResult<DeviceConfig> {
        DeviceConfig::resolve(&options).map(|(config, _)| config)
    }

    #[test]
    fn test_defaults() {
        let config = resolve(DeviceOptions::new()).unwrap();
        assert_eq!(config, DeviceConfig::default());
        assert_eq!(config.method(), Method::Mps);
        assert_eq!(config.contract, "auto-mps");
        assert_eq!(config.c_dtype, CDtype::Complex128);
        assert_eq!(config.max_bond_dim(), None);
        assert_relative_eq!(config.cutoff().unwrap(), 1e-16);
        assert!(config.wires.is_none());
    }

    #[test]
    fn test_default_contract_per_method() {
        assert_eq!(Method::Mps.default_contract(), "auto-mps");
        assert_eq!(Method::Tn.default_contract(), "auto-split-gate");

        let tn = resolve(DeviceOptions::new().with_method("tn")).unwrap();
        assert_eq!(tn.contract, "auto-split-gate");
        assert!(tn.cutoff().is_none());
    }

    #[test]
    fn test_valid_pairs() {
        for method in [Method::Mps, Method::Tn] {
            for contract in method.supported_contractions() {
                let config = resolve(
                    DeviceOptions::new()
                        .with_method(method.name())
                        .with_contract(contract),
                )
                .unwrap();
                assert_eq!(config.method(), method);
                assert_eq!(config.contract, *contract);
            }
        }
    }

    #[test]
    fn test_cross_pairs_rejected() {
        let err = resolve(
            DeviceOptions::new()
                .with_method("mps")
                .with_contract("auto-split-gate"),
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Unsupported gate contraction option: 'auto-split-gate' for 'mps' method."));

        let err = resolve(DeviceOptions::new().with_method("tn").with_contract("auto-mps"))
            .unwrap_err();
        assert!(matches!(err, QtnError::UnsupportedContraction { .. }));
    }

    #[test]
    fn test_unsupported_method() {
        let err = resolve(DeviceOptions::new().with_method("dmrg")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported method: dmrg");
    }

    #[test]
    fn test_dtype() {
        let config = resolve(DeviceOptions::new().with_c_dtype("complex64")).unwrap();
        assert_eq!(config.c_dtype, CDtype::Complex64);

        let err = resolve(DeviceOptions::new().with_c_dtype("float")).unwrap_err();
        assert!(matches!(err, QtnError::InvalidDataType(_)));
    }

    #[test]
    fn test_method_checked_before_dtype() {
        let err = resolve(
            DeviceOptions::new()
                .with_method("bad")
                .with_c_dtype("float"),
        )
        .unwrap_err();
        assert!(matches!(err, QtnError::UnsupportedMethod(_)));
    }

    #[test]
    fn test_tn_ignores_truncation_options() {
        let options = DeviceOptions::new()
            .with_method("tn")
            .with_max_bond_dim(10)
            .with_cutoff(1e-10);
        let (config, warnings) = DeviceConfig::resolve(&options).unwrap();

        assert_eq!(config.method_options, MethodOptions::Tn(TnOptions {}));
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0].to_string(),
            "The keyword argument 'max_bond_dim' is not used when the method is 'tn'. It will be ignored."
        );
        assert!(!config.device_options().contains_key("cutoff"));
    }

    #[test]
    fn test_mps_truncation_values() {
        let config = resolve(
            DeviceOptions::new()
                .with_max_bond_dim(64)
                .with_cutoff(1e-12),
        )
        .unwrap();
        assert_eq!(config.max_bond_dim(), NonZeroUsize::new(64));
        assert_relative_eq!(config.cutoff().unwrap(), 1e-12);

        for bad in [0, -3] {
            let err = resolve(DeviceOptions::new().with_max_bond_dim(bad)).unwrap_err();
            assert!(matches!(err, QtnError::InvalidOption { .. }));
        }
        for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let err = resolve(DeviceOptions::new().with_cutoff(bad)).unwrap_err();
            assert!(matches!(err, QtnError::InvalidOption { .. }));
        }
    }

    #[test]
    fn test_local_simplify_and_optimizer() {
        let config = resolve(
            DeviceOptions::new()
                .with_local_simplify("DR")
                .with_contraction_optimizer("greedy"),
        )
        .unwrap();
        assert_eq!(config.local_simplify, "DR");
        assert_eq!(config.contraction_optimizer, "greedy");

        assert!(resolve(DeviceOptions::new().with_local_simplify("ADX")).is_err());
        assert!(resolve(DeviceOptions::new().with_contraction_optimizer("")).is_err());
    }

    #[test]
    fn test_wires() {
        let config = resolve(DeviceOptions::new().with_wire_count(3)).unwrap();
        assert_eq!(config.wires, Some(Wires::range(3)));

        let err = resolve(DeviceOptions::new().with_wires([0, 1, 0])).unwrap_err();
        assert!(matches!(err, QtnError::InvalidWires(_)));
    }

    #[test]
    fn test_device_options_map() {
        let config = resolve(DeviceOptions::new().with_max_bond_dim(8)).unwrap();
        let exec = ExecutionConfig::from_device_config(&config);

        assert_eq!(exec.option("method"), Some(&json!("mps")));
        assert_eq!(exec.option("contract"), Some(&json!("auto-mps")));
        assert_eq!(exec.option("c_dtype"), Some(&json!("complex128")));
        assert_eq!(exec.option("max_bond_dim"), Some(&json!(8)));
        assert_eq!(exec.option("local_simplify"), Some(&json!("ADCRS")));
        assert!(!exec.use_device_gradient());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = resolve(DeviceOptions::new().with_method("tn").with_wire_count(2)).unwrap();
        let parsed: DeviceConfig = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
