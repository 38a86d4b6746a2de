//! Constants for QTN
//!
//! Gantree: L0_Foundation → Constants
//!
//! Device defaults, contraction strategy names and fixture seeds.

// ============================================================================
// Device Constants
// Gantree: device // 디바이스 상수
// ============================================================================

pub mod device {
    //! Defaults of the `default.tensor` device

    /// Registered device name
    pub const NAME: &str = "default.tensor";

    /// Default simulation method
    pub const DEFAULT_METHOD: &str = "mps";

    /// Default singular-value truncation threshold (MPS only)
    pub const DEFAULT_CUTOFF: f64 = 1e-16;

    /// Default contraction strategy of the MPS method
    pub const DEFAULT_CONTRACT_MPS: &str = "auto-mps";

    /// Default contraction strategy of the TN method
    pub const DEFAULT_CONTRACT_TN: &str = "auto-split-gate";

    /// Gate contraction strategies accepted by the MPS method
    pub const MPS_CONTRACTIONS: &[&str] = &["auto-mps", "swap+split", "nonlocal"];

    /// Gate contraction strategies accepted by the TN method
    pub const TN_CONTRACTIONS: &[&str] = &[
        "auto-split-gate",
        "split-gate",
        "reduce-split",
        "swap-split-gate",
        "split",
    ];

    /// Default path optimizer handed to the contraction backend
    pub const DEFAULT_CONTRACTION_OPTIMIZER: &str = "auto-hq";

    /// Default local simplification sequence
    pub const DEFAULT_LOCAL_SIMPLIFY: &str = "ADCRS";

    /// Letters allowed in a local simplification sequence
    pub const LOCAL_SIMPLIFY_STEPS: &[char] = &['A', 'D', 'C', 'R', 'S'];

    /// Keyword options recognized at construction
    pub const RECOGNIZED_OPTIONS: &[&str] = &[
        "wires",
        "method",
        "c_dtype",
        "max_bond_dim",
        "cutoff",
        "contract",
        "contraction_optimizer",
        "local_simplify",
    ];
}

// ============================================================================
// Sampling Constants
// Gantree: sampling // 샘플링 상수
// ============================================================================

pub mod sampling {
    //! Seeds and limits of the mixed-state fixtures

    /// Seed of the Haar-random basis stream
    pub const DEFAULT_BASIS_SEED: u64 = 584_545;

    /// Seed of the Dirichlet weight stream
    pub const DEFAULT_WEIGHTS_SEED: u64 = 4_774;

    /// ChaCha stream id used for basis draws
    pub const BASIS_STREAM: u64 = 0;

    /// ChaCha stream id used for weight draws
    pub const WEIGHTS_STREAM: u64 = 1;

    /// Largest dense fixture (4^10 complex entries)
    pub const MAX_QUBITS: usize = 10;

    /// Default tolerance for state property checks
    pub const TOLERANCE: f64 = 1e-10;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contracts_are_allowed() {
        assert!(device::MPS_CONTRACTIONS.contains(&device::DEFAULT_CONTRACT_MPS));
        assert!(device::TN_CONTRACTIONS.contains(&device::DEFAULT_CONTRACT_TN));
    }

    #[test]
    fn test_default_contracts_are_exclusive() {
        assert!(!device::MPS_CONTRACTIONS.contains(&device::DEFAULT_CONTRACT_TN));
        assert!(!device::TN_CONTRACTIONS.contains(&device::DEFAULT_CONTRACT_MPS));
    }

    #[test]
    fn test_seed_streams_differ() {
        assert_ne!(sampling::BASIS_STREAM, sampling::WEIGHTS_STREAM);
    }
}
