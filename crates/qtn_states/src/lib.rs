//! # QTN States
//!
//! Seeded random mixed states for device fixtures.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qtn_states // L2: Sampling
//!     HaarUnitary // Ginibre + Gram–Schmidt
//!     FlatDirichlet // 정규화된 Exp(1)
//!     MixedState // 밀도 행렬 / 텐서
//!     MixedStateSampler // 두 개의 시드 스트림
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qtn_states::prelude::*;
//!
//! let state = random_mixed_state(2).unwrap();
//! assert_eq!(state.tensor().unwrap().shape(), &[2, 2, 2, 2]);
//! assert!((state.trace().re - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Haar unitaries (Gantree: L2_Sampling → HaarUnitary)
pub mod unitary;

/// Dirichlet weights (Gantree: L2_Sampling → FlatDirichlet)
pub mod dirichlet;

/// Density matrices (Gantree: L2_Sampling → MixedState)
pub mod mixed_state;

/// Sampler (Gantree: L2_Sampling → MixedStateSampler)
pub mod sampler;

// ============================================================================
// Re-exports
// ============================================================================

pub use dirichlet::flat_dirichlet;
pub use mixed_state::MixedState;
pub use sampler::{random_mixed_state, sample_mixed_state, MixedStateSampler};
pub use unitary::{ginibre, haar_unitary};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::mixed_state::MixedState;
    pub use crate::sampler::{random_mixed_state, sample_mixed_state, MixedStateSampler};
    pub use qtn_core::error::{QtnError, QtnResult};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
