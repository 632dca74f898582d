#![cfg_attr(not(feature = "std"), no_std)]

//! # UMASH
//!
//! Keyed, almost-universal 64-bit string hash with an optional 128-bit
//! fingerprint. For any two distinct inputs of at most `l` bytes, digests
//! computed under one random parameter set collide with probability at most
//! roughly `ceil(l / 4096) * 2^-55`; the fingerprint squares that bound.
//! Accelerated by PCLMULQDQ where available.

//! # Usage
//! ```rust
//! use umash::Params;
//!
//! // 1. Build a parameter set from key material (any random byte source).
//! let mut key = [0u8; Params::SIZE];
//! key.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
//! let params = Params::from_le_bytes(&key)?;
//!
//! // 2. Hash.
//! let digest = umash::hash(&params, 42, 0, b"the quick brown fox");
//!
//! // 3. Fingerprint (two nearly independent digests under the same key).
//! let fprint = umash::fingerprint(&params, 42, b"the quick brown fox");
//! assert_eq!(fprint.hash[0], digest);
//! # Ok::<(), umash::EntropyExhausted>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod modarith;
mod oneshot;
mod params;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, PH_PARAM_COUNT, TOEPLITZ_SHIFT};
pub use oneshot::{fingerprint, hash};
pub use params::Params;
pub use types::{EntropyExhausted, Fingerprint};

/// Returns the name of the CLMUL backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
