//! Shared types used across the library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::params::Params;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `(params, seed, which, data) -> digest`.
///
/// The hardware backend (PCLMULQDQ) and the portable fallback implement this
/// same signature so the dispatcher can swap them at runtime.
pub(crate) type KernelFn = fn(&Params, u64, usize, &[u8]) -> u64;

// =============================================================================
// FINGERPRINT
// =============================================================================

/// A 128-bit fingerprint: two 64-bit digests evaluated under one key
/// schedule.
///
/// `hash[0]` is the digest at key shift 0, `hash[1]` the digest at
/// [`TOEPLITZ_SHIFT`](crate::TOEPLITZ_SHIFT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    /// The two component digests, shift-0 first.
    pub hash: [u64; 2],
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Parameter repair ran out of spare words while rejecting bad values.
///
/// The parameter buffer must be refilled from fresh random bytes and
/// prepared again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyExhausted;

impl fmt::Display for EntropyExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter repair exhausted its entropy reservoir; \
             refill the buffer with fresh random bytes and retry"
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for EntropyExhausted {}
