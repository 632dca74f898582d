//! PH block compression.
//!
//! A block is an unordered sequence of 64-bit word pairs. Each pair is
//! XOR-masked with two key words and the carry-less product of the masked
//! halves is XOR-folded into a 128-bit accumulator initialised from the
//! (zero-extended) seed.

use super::constants::{BLOCK_SIZE, PH_PARAM_COUNT};
use super::CarrylessMul;

/// Little-endian u64 load; tolerates any alignment.
#[inline(always)]
pub(crate) fn load_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Compress one full [`BLOCK_SIZE`]-byte block.
#[inline(always)]
pub(crate) fn ph_one_block<M: CarrylessMul>(keys: &[u64], seed: u64, block: &[u8]) -> u128 {
    let mut acc = u128::from(seed);

    let mut i = 0;
    while i < PH_PARAM_COUNT {
        let x = load_u64(block, 8 * i) ^ keys[i];
        let y = load_u64(block, 8 * (i + 1)) ^ keys[i + 1];
        acc ^= M::mul(x, y);
        i += 2;
    }

    acc
}

/// Compress the final block: `n = data.len() - offset` bytes, with
/// `1 <= n <= BLOCK_SIZE`.
///
/// Complete leading pairs are mixed as in a full block; the tail pair is
/// then read as the last 16 bytes of `data`, which overlaps words already
/// mixed (or, past the first block, the previous block's tail) when the
/// tail is short. Repeated bytes contribute non-destructively because the
/// key XORs differ.
#[inline(always)]
pub(crate) fn ph_last_block<M: CarrylessMul>(
    keys: &[u64],
    seed: u64,
    data: &[u8],
    offset: usize,
) -> u128 {
    let n = data.len() - offset;
    debug_assert!(n >= 1 && n <= BLOCK_SIZE && data.len() >= 16);

    let mut acc = u128::from(seed);

    // The tail pair always covers `remaining` in [1, 16] bytes.
    let remaining = 1 + ((n - 1) % 16);
    let end_full_pairs = (n - remaining) / 8;

    let mut i = 0;
    while i < end_full_pairs {
        let x = load_u64(data, offset + 8 * i) ^ keys[i];
        let y = load_u64(data, offset + 8 * (i + 1)) ^ keys[i + 1];
        acc ^= M::mul(x, y);
        i += 2;
    }

    let tail = data.len() - 16;
    let x = load_u64(data, tail) ^ keys[i];
    let y = load_u64(data, tail + 8) ^ keys[i + 1];
    acc ^ M::mul(x, y)
}
