//! Public API layer.

use crate::engine::dispatcher;
use crate::params::Params;
use crate::types::Fingerprint;

/// Compute the 64-bit keyed digest of `data`.
///
/// `which` selects one of the two hash functions defined by the parameter
/// set; any non-zero value selects the second. Zero-length input is valid,
/// and the same `(params, seed, which, data)` always yields the same
/// digest.
#[must_use]
#[inline]
pub fn hash(params: &Params, seed: u64, which: u32, data: &[u8]) -> u64 {
    let kernel = dispatcher::get_best_kernel();
    kernel(params, seed, usize::from(which != 0), data)
}

/// Compute the 128-bit fingerprint of `data`: the two keyed digests
/// evaluated under key shifts 0 and [`TOEPLITZ_SHIFT`](crate::TOEPLITZ_SHIFT).
///
/// `fingerprint(p, s, d).hash[i]` equals `hash(p, s, i, d)`; the pair
/// collides roughly with the square of the single-digest bound.
#[must_use]
pub fn fingerprint(params: &Params, seed: u64, data: &[u8]) -> Fingerprint {
    let kernel = dispatcher::get_best_kernel();

    Fingerprint {
        hash: [
            kernel(params, seed, 0, data),
            kernel(params, seed, 1, data),
        ],
    }
}
