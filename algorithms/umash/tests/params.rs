//! Parameter preparation tests.
//!
//! The sanitiser's contract: usable values survive untouched, out-of-range
//! multipliers and repeated PH words are replaced from the two-word
//! reservoir, and the whole operation is idempotent.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use rand::RngCore;
use umash::Params;

const FIELD: u64 = (1 << 61) - 1;

fn words_of(bytes: &[u8; Params::SIZE]) -> Vec<u64> {
    bytes
        .chunks_exact(8)
        .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

fn blob_of(words: &[u64]) -> [u8; Params::SIZE] {
    let mut bytes = [0u8; Params::SIZE];
    for (i, word) in words.iter().enumerate() {
        bytes[8 * i..8 * i + 8].copy_from_slice(&word.to_le_bytes());
    }
    bytes
}

// =============================================================================
// VALIDITY
// =============================================================================

#[test]
fn prepared_sets_are_valid() {
    let mut key = [0u8; Params::SIZE];
    key.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
    let params = Params::from_le_bytes(&key).unwrap();
    let words = words_of(&params.to_le_bytes());

    for i in 0..2 {
        let squared = words[2 * i];
        let f = words[2 * i + 1];
        assert!(f > 0 && f < FIELD, "multiplier {i} out of range: {f:#x}");
        assert_eq!(
            squared,
            ((u128::from(f) * u128::from(f)) % u128::from(FIELD)) as u64,
            "pre-squared cell {i} is not f^2 mod the field order",
        );
    }

    let ph = &words[4..];
    let distinct: std::collections::HashSet<_> = ph.iter().collect();
    assert_eq!(distinct.len(), ph.len(), "PH key words must not repeat");
}

#[test]
fn usable_multipliers_are_kept() {
    let mut words = vec![0u64; Params::SIZE / 8];
    words[0] = 0xdead_beef_dead_beef; // reservoir, must not be consumed
    words[1] = 12_345;
    words[2] = 0xfeed_face_feed_face;
    words[3] = FIELD - 1;
    for (i, word) in words[4..].iter_mut().enumerate() {
        *word = i as u64;
    }

    let params = Params::from_le_bytes(&blob_of(&words)).unwrap();
    let out = words_of(&params.to_le_bytes());

    assert_eq!(out[1], 12_345);
    assert_eq!(out[3], FIELD - 1);
    assert_eq!(out[0], ((12_345u128 * 12_345) % u128::from(FIELD)) as u64);
    for (i, word) in out[4..].iter().enumerate() {
        assert_eq!(*word, i as u64, "distinct PH words must survive");
    }
}

#[test]
fn out_of_range_multipliers_are_resampled_from_the_reservoir() {
    let mut words = vec![0u64; Params::SIZE / 8];
    words[0] = 0x1111_1111_1111_1111; // reservoir word, in range once masked
    words[1] = 1 << 61; // masks to zero: rejected
    words[2] = 0;
    words[3] = 99;
    for (i, word) in words[4..].iter_mut().enumerate() {
        *word = 0x8000_0000_0000_0000 | i as u64;
    }

    let params = Params::from_le_bytes(&blob_of(&words)).unwrap();
    let out = words_of(&params.to_le_bytes());

    let f = 0x1111_1111_1111_1111u64;
    assert_eq!(out[1], f);
    assert_eq!(out[0], ((u128::from(f) * u128::from(f)) % u128::from(FIELD)) as u64);
    assert_eq!(out[3], 99);
}

// =============================================================================
// FAILURE MODES
// =============================================================================

#[test]
fn all_zero_material_is_rejected() {
    assert!(Params::from_le_bytes(&[0u8; Params::SIZE]).is_err());
}

#[test]
fn reservoir_covers_at_most_two_repairs() {
    let mut words = vec![0u64; Params::SIZE / 8];
    words[0] = 0xaaaa_aaaa_aaaa_aaaa;
    words[1] = 5;
    words[2] = 0xbbbb_bbbb_bbbb_bbbb;
    words[3] = 6;
    for (i, word) in words[4..].iter_mut().enumerate() {
        *word = 100 + i as u64;
    }

    // Two repeats: both fixable from the two reservoir words.
    let mut two_repeats = words.clone();
    two_repeats[5] = two_repeats[4];
    two_repeats[7] = two_repeats[6];
    let params = Params::from_le_bytes(&blob_of(&two_repeats)).unwrap();
    let out = words_of(&params.to_le_bytes());
    let distinct: std::collections::HashSet<_> = out[4..].iter().collect();
    assert_eq!(distinct.len(), out[4..].len());

    // Three repeats: the reservoir runs dry.
    let mut three_repeats = words;
    three_repeats[5] = three_repeats[4];
    three_repeats[7] = three_repeats[6];
    three_repeats[9] = three_repeats[8];
    assert!(Params::from_le_bytes(&blob_of(&three_repeats)).is_err());
}

// =============================================================================
// IDEMPOTENCY & ROUND-TRIP
// =============================================================================

#[test]
fn prepare_is_idempotent() {
    let mut rng = rand::rng();

    for _ in 0..32 {
        let mut bytes = [0u8; Params::SIZE];
        rng.fill_bytes(&mut bytes);

        let params = Params::from_le_bytes(&bytes).expect("pseudo-random material is usable");
        let blob = params.to_le_bytes();
        let again = Params::from_le_bytes(&blob).unwrap();
        assert_eq!(blob, again.to_le_bytes(), "re-preparing must be a no-op");
    }
}

#[test]
fn digests_survive_a_blob_round_trip() {
    let mut rng = rand::rng();
    let mut bytes = [0u8; Params::SIZE];
    rng.fill_bytes(&mut bytes);

    let params = Params::from_le_bytes(&bytes).unwrap();
    let restored = Params::from_le_bytes(&params.to_le_bytes()).unwrap();

    for data in [&b""[..], &b"round trip"[..], &[7u8; 1000][..]] {
        assert_eq!(
            umash::hash(&params, 3, 0, data),
            umash::hash(&restored, 3, 0, data),
        );
        assert_eq!(
            umash::fingerprint(&params, 3, data),
            umash::fingerprint(&restored, 3, data),
        );
    }
}
