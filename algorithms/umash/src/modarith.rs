//! Arithmetic in the ring of integers mod `M = 2^64 - 8`.
//!
//! `8 * (2^61 - 1) = 2^64 - 8` exactly, so sums and products of polynomial
//! coefficients can be chained in this wider ring and reduced mod the
//! Mersenne prime only where a canonical 61-bit value is needed (key
//! preparation). The hash path itself never reduces: the output mixer
//! absorbs the three spare low bits.

/// The ring modulus `M = 2^64 - 8`.
pub(crate) const RING: u64 = u64::MAX - 7;

/// `(x + y) mod M`, loose range: the result may be anywhere below `2^64`.
///
/// Discarding a carry subtracts `2^64 ≡ 8 (mod M)`, so the overflowing case
/// is repaired by adding 8 back.
#[inline(always)]
pub(crate) fn add_mod_fast(x: u64, y: u64) -> u64 {
    let (sum, overflowed) = x.overflowing_add(y);
    if overflowed {
        sum.wrapping_add(8)
    } else {
        sum
    }
}

#[cold]
fn add_mod_slow_slow_path(sum: u64, fixup: u64) -> u64 {
    // Reduce the bare sum, add the carry fixup, reduce again.
    let mut sum = if sum >= RING { sum.wrapping_add(8) } else { sum };
    sum += fixup;
    if sum >= RING {
        sum.wrapping_add(8)
    } else {
        sum
    }
}

/// `(x + y) mod M`, strict range: the result is always below `M`.
///
/// The fast test succeeds on pseudo-random inputs with probability
/// `1 - 2^-60`, leaving one well-predicted branch on the hot path.
#[inline(always)]
pub(crate) fn add_mod_slow(x: u64, y: u64) -> u64 {
    let (sum, overflowed) = x.overflowing_add(y);
    let fixup = if overflowed { 8 } else { 0 };

    if sum < u64::MAX - 15 {
        return sum + fixup;
    }

    add_mod_slow_slow_path(sum, fixup)
}

/// `(m * x) mod M`, loose range.
///
/// `m` must be a reduced polynomial multiplier (below `2^61`) so the folded
/// high half `8 * hi` fits in 64 bits.
#[inline(always)]
pub(crate) fn mul_mod_fast(m: u64, x: u64) -> u64 {
    debug_assert!(m < 1 << 61);

    let product = u128::from(m) * u128::from(x);
    add_mod_fast(product as u64, 8 * ((product >> 64) as u64))
}

/// One doubled Horner step: `m0 * (acc + x) + m1 * y (mod M)`.
///
/// Absorbs two compressed block words per multiplier chain; the result is
/// strictly reduced and feeds back in as `acc`.
#[inline(always)]
pub(crate) fn horner_double_update(acc: u64, m0: u64, m1: u64, x: u64, y: u64) -> u64 {
    let acc = add_mod_fast(acc, x);
    add_mod_slow(mul_mod_fast(m0, acc), mul_mod_fast(m1, y))
}
