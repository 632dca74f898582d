//! Pipeline constants.

// =============================================================================
// KEY SCHEDULE GEOMETRY
// =============================================================================

/// Number of PH key words consumed by one full block.
pub const PH_PARAM_COUNT: usize = 32;

/// Offset into the PH key vector used by the second hash of a fingerprint.
///
/// The key vector holds `PH_PARAM_COUNT + TOEPLITZ_SHIFT` words in total, so
/// both shifts see a full window of key material.
pub const TOEPLITZ_SHIFT: usize = 32;

/// Bytes compressed per PH block.
pub const BLOCK_SIZE: usize = 8 * PH_PARAM_COUNT;

// =============================================================================
// ARITHMETIC
// =============================================================================

/// The Mersenne prime `2^61 - 1`; polynomial multipliers live in
/// `(0, FIELD)` and pre-squared multipliers are stored reduced mod `FIELD`.
pub(crate) const FIELD: u64 = (1 << 61) - 1;

// =============================================================================
// MIXING
// =============================================================================

/// Multipliers from the splitmix64 finaliser, used by the short-path mixer
/// and the output finaliser.
pub(crate) const SPLIT_MIX_1: u64 = 0xbf58_476d_1ce4_e5b9;
pub(crate) const SPLIT_MIX_2: u64 = 0x94d0_49bb_1331_11eb;
