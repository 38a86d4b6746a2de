//! Seeded random mixed-state sampler
//!
//! Gantree: L2_Sampling → MixedStateSampler
//!
//! `ρ = Σ_i w_i |u_i⟩⟨u_i|` where `u_i` are the columns of a Haar unitary and
//! `w` is a flat Dirichlet draw. The basis and the weights come from two
//! separately seeded ChaCha streams, so changing one seed never perturbs
//! the other draw.

use crate::dirichlet::flat_dirichlet;
use crate::mixed_state::MixedState;
use crate::unitary::haar_unitary;
use ndarray::Array2;
use num_complex::Complex64;
use qtn_core::constants::sampling;
use qtn_core::error::{QtnError, QtnResult};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Random mixed-state generator
/// Gantree: MixedStateSampler // 시드 고정 샘플러
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedStateSampler {
    /// Seed of the Haar-basis stream
    basis_seed: u64,

    /// Seed of the Dirichlet-weights stream
    weights_seed: u64,
}

impl Default for MixedStateSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MixedStateSampler {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Sampler with the default fixture seeds
    pub fn new() -> Self {
        Self::with_seeds(sampling::DEFAULT_BASIS_SEED, sampling::DEFAULT_WEIGHTS_SEED)
    }

    /// Sampler with explicit seeds
    pub fn with_seeds(basis_seed: u64, weights_seed: u64) -> Self {
        Self {
            basis_seed,
            weights_seed,
        }
    }

    /// Sampler from a single seed (the streams still differ)
    pub fn from_seed(seed: u64) -> Self {
        Self::with_seeds(seed, seed)
    }

    /// Seed of the basis stream
    pub fn basis_seed(&self) -> u64 {
        self.basis_seed
    }

    /// Seed of the weights stream
    pub fn weights_seed(&self) -> u64 {
        self.weights_seed
    }

    fn basis_rng(&self) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.basis_seed);
        rng.set_stream(sampling::BASIS_STREAM);
        rng
    }

    fn weights_rng(&self) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.weights_seed);
        rng.set_stream(sampling::WEIGHTS_STREAM);
        rng
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Sample a random `num_qubits` mixed state
    /// Gantree: sample(n) -> QtnResult<MixedState> // Σ w_i |u_i⟩⟨u_i|
    ///
    /// Every call restarts both streams, so equal seeds give bit-identical
    /// states.
    pub fn sample(&self, num_qubits: usize) -> QtnResult<MixedState> {
        if num_qubits > sampling::MAX_QUBITS {
            return Err(QtnError::TooManyQubits {
                requested: num_qubits,
                max: sampling::MAX_QUBITS,
            });
        }

        let dim = 1usize << num_qubits;
        let basis = haar_unitary(dim, &mut self.basis_rng())?;
        let weights = flat_dirichlet(dim, &mut self.weights_rng())?;

        let mut rho = Array2::<Complex64>::zeros((dim, dim));
        for (k, &w) in weights.iter().enumerate() {
            let u = basis.column(k);
            for i in 0..dim {
                let scaled = u[i] * w;
                for j in 0..dim {
                    rho[[i, j]] += scaled * u[j].conj();
                }
            }
        }

        MixedState::from_matrix(rho)
    }

    /// Sample `batch` states; every element uses the same seeds
    pub fn sample_batch(&self, num_qubits: usize, batch: usize) -> QtnResult<Vec<MixedState>> {
        (0..batch).map(|_| self.sample(num_qubits)).collect()
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Random mixed state with the default fixture seeds
pub fn random_mixed_state(num_qubits: usize) -> QtnResult<MixedState> {
    MixedStateSampler::new().sample(num_qubits)
}

/// Random mixed state from a single seed
pub fn sample_mixed_state(num_qubits: usize, seed: u64) -> QtnResult<MixedState> {
    MixedStateSampler::from_seed(seed).sample(num_qubits)
}

// ============================================================================
// Tests
// ============================================================================
