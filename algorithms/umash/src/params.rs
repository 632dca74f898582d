//! Hash parameter schedule.

use crate::kernels::constants::{FIELD, PH_PARAM_COUNT, TOEPLITZ_SHIFT};
use crate::modarith::mul_mod_fast;
use crate::types::EntropyExhausted;

/// Number of 64-bit words in a serialized parameter set.
const PARAM_WORDS: usize = 4 + PH_PARAM_COUNT + TOEPLITZ_SHIFT;

/// A full set of hashing parameters: two polynomial keys and the PH key
/// vector, including the Toeplitz extension words used for fingerprinting.
///
/// Built once from random bytes via [`Params::prepare`] (usually through
/// [`Params::from_le_bytes`] or [`Params::generate`]) and immutable
/// afterwards; any number of threads may hash under the same set
/// concurrently.
#[derive(Clone)]
pub struct Params {
    /// Two `(f^2, f)` rows. Each `f` is non-zero and below `2^61 - 1`; the
    /// pre-squared cell holds `f * f` reduced mod `2^61 - 1`.
    pub(crate) poly: [[u64; 2]; 2],
    /// PH key words, pairwise distinct after preparation.
    pub(crate) ph: [u64; PH_PARAM_COUNT + TOEPLITZ_SHIFT],
}

impl Params {
    /// Size in bytes of the serialized parameter set.
    pub const SIZE: usize = 8 * PARAM_WORDS;

    /// Repair arbitrary key material in place.
    ///
    /// The two pre-squared polynomial cells double as a sequential two-word
    /// entropy reservoir: multipliers that mask to an out-of-range value
    /// and repeated PH words are replaced from it, and the call fails once
    /// the reservoir runs dry. On success the set is valid, and preparing
    /// it again is a no-op.
    pub fn prepare(&mut self) -> Result<(), EntropyExhausted> {
        let mut reservoir = [self.poly[0][0], self.poly[1][0]].into_iter();

        // Polynomial multipliers: mask to 61 bits, then rejection-sample
        // until non-zero and below the field order.
        for row in &mut self.poly {
            let mut f = row[1];
            loop {
                f &= FIELD;
                if f != 0 && f < FIELD {
                    break;
                }
                f = reservoir.next().ok_or(EntropyExhausted)?;
            }

            row[0] = mul_mod_fast(f, f) % FIELD;
            row[1] = f;
        }

        // Identical key words within a PH pair cancel under XOR; forbid
        // repeats anywhere in the vector.
        for i in 0..self.ph.len() {
            while self.ph[..i].contains(&self.ph[i]) {
                self.ph[i] = reservoir.next().ok_or(EntropyExhausted)?;
            }
        }

        Ok(())
    }

    /// Decode a little-endian key blob and repair it in place.
    ///
    /// Feeding back a previously serialized, valid set reproduces it
    /// exactly.
    pub fn from_le_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, EntropyExhausted> {
        let mut words = [0u64; PARAM_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            *word = u64::from_le_bytes(buf);
        }

        let mut params = Self {
            poly: [[words[0], words[1]], [words[2], words[3]]],
            ph: [0; PH_PARAM_COUNT + TOEPLITZ_SHIFT],
        };
        params.ph.copy_from_slice(&words[4..]);

        params.prepare()?;
        Ok(params)
    }

    /// Serialize to the canonical little-endian layout: the two `(f^2, f)`
    /// polynomial rows, then the PH key vector.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        let words = self.poly[0].iter().chain(&self.poly[1]).chain(&self.ph);
        for (i, word) in words.enumerate() {
            out[8 * i..8 * i + 8].copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Draw key material from `rng` until the sanitiser accepts it.
    ///
    /// Pseudo-random bytes are rejected with negligible probability, so
    /// this practically always returns on the first draw.
    #[cfg(feature = "rand")]
    pub fn generate<R: rand::RngCore + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut bytes = [0u8; Self::SIZE];
            rng.fill_bytes(&mut bytes);
            if let Ok(params) = Self::from_le_bytes(&bytes) {
                return params;
            }
        }
    }
}
