//! QTN default.tensor device tour
//!
//! Builds devices from keyword maps, shows the validation program, and runs
//! a few scripts through a small product-state backend.
//!
//! NOTE: the backend here only tracks one Bloch vector per wire, so it
//! accepts single-qubit gates only. Real contraction lives outside this
//! crate behind the `Contractor` trait.

use anyhow::{Context, Result};
use qtn_device::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Unentangled backend: one Bloch vector per wire
struct ProductStateContractor;

impl ProductStateContractor {
    fn bloch_vectors(request: &ContractionRequest<'_>) -> QtnResult<HashMap<WireLabel, [f64; 3]>> {
        let mut state: HashMap<WireLabel, [f64; 3]> = request
            .wires
            .iter()
            .map(|w| (w.clone(), [0.0, 0.0, 1.0]))
            .collect();

        for op in request.script.operations() {
            if op.base_name() == "Identity" {
                continue;
            }
            let wire = match op.wires().labels() {
                [w] => w,
                _ => {
                    return Err(QtnError::BackendError(format!(
                        "{} acts on more than one wire",
                        op.name()
                    )))
                }
            };
            let sign = if op.is_adjoint() { -1.0 } else { 1.0 };
            let theta = op.params().first().copied().unwrap_or(0.0) * sign;
            let [x, y, z] = state.get(wire).copied().unwrap_or([0.0, 0.0, 1.0]);
            let (s, c) = theta.sin_cos();

            let next = match op.base_name() {
                "RX" => [x, y * c - z * s, y * s + z * c],
                "RY" => [x * c + z * s, y, -x * s + z * c],
                "RZ" => [x * c - y * s, x * s + y * c, z],
                "Hadamard" => [z, -y, x],
                "PauliX" => [x, -y, -z],
                "PauliY" => [-x, y, -z],
                "PauliZ" => [-x, -y, z],
                other => {
                    return Err(QtnError::BackendError(format!(
                        "{} is not a product-state gate",
                        other
                    )))
                }
            };
            state.insert(wire.clone(), next);
        }

        Ok(state)
    }

    fn expval(state: &HashMap<WireLabel, [f64; 3]>, obs: &Observable) -> QtnResult<f64> {
        match obs {
            Observable::Named { name, wires } => {
                let bloch = wires
                    .iter()
                    .next()
                    .and_then(|w| state.get(w))
                    .copied()
                    .unwrap_or([0.0, 0.0, 1.0]);
                match name.as_str() {
                    "Identity" => Ok(1.0),
                    "PauliX" => Ok(bloch[0]),
                    "PauliY" => Ok(bloch[1]),
                    "PauliZ" => Ok(bloch[2]),
                    "Hadamard" => Ok((bloch[0] + bloch[2]) * std::f64::consts::FRAC_1_SQRT_2),
                    other => Err(QtnError::BackendError(format!("no rule for {}", other))),
                }
            }
            Observable::Sum { coeffs, terms, .. } => coeffs
                .iter()
                .zip(terms)
                .map(|(c, t)| Self::expval(state, t).map(|e| c * e))
                .sum(),
            Observable::Prod(terms) => terms.iter().map(|t| Self::expval(state, t)).product(),
            other => Err(QtnError::BackendError(format!("no rule for {}", other.name()))),
        }
    }
}

impl Contractor for ProductStateContractor {
    fn name(&self) -> &str {
        "product_state"
    }

    fn contract(&self, request: &ContractionRequest<'_>) -> QtnResult<Vec<f64>> {
        let state = Self::bloch_vectors(request)?;

        request
            .script
            .measurements()
            .iter()
            .map(|m| {
                let obs = m
                    .observable()
                    .ok_or_else(|| QtnError::BackendError("missing observable".into()))?;
                let mean = Self::expval(&state, obs)?;
                match m.kind() {
                    MeasurementKind::Expval => Ok(mean),
                    // Pauli-like observables square to the identity
                    MeasurementKind::Var => Ok(1.0 - mean * mean),
                    other => Err(QtnError::BackendError(format!("cannot evaluate {}", other))),
                }
            })
            .collect()
    }
}

fn kwargs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                  QTN default.tensor Device Tour                      ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    // =========================================================================
    // 1. Construction
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  1. Construction");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let mps = DefaultTensor::from_kwargs(&kwargs(json!({
        "wires": 3,
        "method": "mps",
        "max_bond_dim": 16,
        "c_dtype": "complex64",
    })))
    .context("building the MPS device")?;
    println!("  • {}  {}", mps, mps.config());

    let tn = DefaultTensor::from_kwargs(&kwargs(json!({
        "method": "tn",
        "cutoff": 1e-12,
    })))?;
    println!("  • {}  {}", tn, tn.config());
    for warning in tn.warnings() {
        println!("    ⚠ {}", warning);
    }

    for bad in [
        json!({ "fake_arg": 1 }),
        json!({ "method": "dmrg" }),
        json!({ "method": "mps", "contract": "auto-split-gate" }),
        json!({ "c_dtype": "float" }),
    ] {
        match DefaultTensor::from_kwargs(&kwargs(bad.clone())) {
            Ok(_) => println!("  ✗ unexpectedly accepted {}", bad),
            Err(e) => println!("  ✓ rejected {}: {}", bad, e),
        }
    }
    println!();

    // =========================================================================
    // 2. Preprocess
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  2. Preprocess");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let (program, exec_config) = mps.preprocess();
    println!("  {}", program);
    println!("  device options: {}", serde_json::to_string(exec_config.device_options())?);
    println!("  use_device_gradient: {}\n", exec_config.use_device_gradient());

    // =========================================================================
    // 3. Execution
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  3. Execution");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    let backend: Arc<dyn Contractor> = Arc::new(ProductStateContractor);
    let mps = mps.with_contractor(backend.clone());
    let tn = tn.with_contractor(backend);

    let script = ScriptBuilder::new()
        .h(0)
        .ry(0.3, 1)
        .rx(1.2, 2)
        .expval(Observable::x(0))
        .expval(Observable::z(1))
        .var(Observable::z(2))
        .build();

    let result = mps.execute(&script)?;
    println!("  mps (complex64): {}", result);

    let result = tn.execute(&script)?;
    println!("  tn  (inferred wires {}): {}", tn.execution_wires(&script), result);

    let probs = ScriptBuilder::new().h(0).probs([0]).build();
    if let Err(e) = tn.execute(&probs) {
        println!("  ✓ probs rejected: {}", e);
    }

    let wide = ScriptBuilder::new().rx(0.1, 7).expval(Observable::z(7)).build();
    if let Err(e) = mps.execute(&wide) {
        println!("  ✓ wire 7 rejected: {}", e);
    }

    if let Err(e) = mps.compute_derivatives(&[script]) {
        println!("  ✓ {}", e);
    }
    println!();

    // =========================================================================
    // 4. Drawing
    // =========================================================================
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  4. Drawing");
    println!("═══════════════════════════════════════════════════════════════════════\n");

    print!("{}", mps.draw(&DrawOptions::new())?);

    Ok(())
}
