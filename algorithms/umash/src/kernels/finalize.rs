//! Length-class routing, the medium and long paths, and the output mixer.

use super::compress::{load_u64, ph_last_block, ph_one_block};
use super::constants::{BLOCK_SIZE, SPLIT_MIX_2, TOEPLITZ_SHIFT};
use super::short::hash_short;
use super::CarrylessMul;
use crate::modarith::horner_double_update;
use crate::params::Params;

/// Output mixer applied to the polynomial accumulator before emission.
///
/// A single xorshift-multiply round; the accumulator's bits are already
/// spread by the multiplier chain.
#[inline(always)]
pub(crate) fn finalize(mut x: u64) -> u64 {
    x ^= x >> 27;
    x.wrapping_mul(SPLIT_MIX_2)
}

/// Hash 9..=16 bytes: one key-masked carry-less product, one Horner step.
#[inline(always)]
fn hash_medium<M: CarrylessMul>(poly: &[u64; 2], keys: &[u64], seed: u64, data: &[u8]) -> u64 {
    let n = data.len();
    let mut acc = u128::from(seed ^ n as u64);

    let x = load_u64(data, 0) ^ keys[0];
    let y = load_u64(data, n - 8) ^ keys[1];
    acc ^= M::mul(x, y);

    finalize(horner_double_update(
        0,
        poly[0],
        poly[1],
        acc as u64,
        (acc >> 64) as u64,
    ))
}

/// Hash more than 16 bytes: PH-compress each block and fold both halves of
/// the result through the doubled Horner chain.
#[inline(always)]
fn hash_long<M: CarrylessMul>(poly: &[u64; 2], keys: &[u64], mut seed: u64, data: &[u8]) -> u64 {
    let mut acc = 0u64;

    let mut offset = 0;
    while data.len() - offset > BLOCK_SIZE {
        let ph = ph_one_block::<M>(keys, seed, &data[offset..offset + BLOCK_SIZE]);
        acc = horner_double_update(acc, poly[0], poly[1], ph as u64, (ph >> 64) as u64);
        offset += BLOCK_SIZE;
    }

    // The final block mixes its own length (1..=BLOCK_SIZE) into the seed.
    seed ^= ((data.len() - offset) & 0xff) as u64;
    let ph = ph_last_block::<M>(keys, seed, data, offset);
    acc = horner_double_update(acc, poly[0], poly[1], ph as u64, (ph >> 64) as u64);

    finalize(acc)
}

/// Full digest pipeline: length-class dispatch under one (shift, poly)
/// pair. `which` must already be normalised to 0 or 1.
#[inline(always)]
pub(crate) fn oneshot<M: CarrylessMul>(
    params: &Params,
    seed: u64,
    which: usize,
    data: &[u8],
) -> u64 {
    let keys = &params.ph[which * TOEPLITZ_SHIFT..];

    if data.len() <= 8 {
        return hash_short(keys, seed, data);
    }
    if data.len() <= 16 {
        return hash_medium::<M>(&params.poly[which], keys, seed, data);
    }
    hash_long::<M>(&params.poly[which], keys, seed, data)
}
