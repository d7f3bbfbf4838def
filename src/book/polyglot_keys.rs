// 781 pseudo-random keys used to hash a position the same way a Polyglot
// opening book does: 12*64 piece-square keys, 4 castling-right keys, 8
// en-passant-file keys, 1 side-to-move key.
//
// These are NOT the constants from the published Polyglot standard (that
// table isn't derivable without shipping an external binary blob) — they're
// generated deterministically at startup so the same binary always hashes
// the same position to the same key. A book file encoded against the real
// Polyglot table will not probe correctly here; only books generated with
// this engine's own key table will.

use once_cell::sync::Lazy;
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;

const POLYGLOT_KEY_SEED: u64 = 0xBF58_476D_1CE4_E5B9;

pub static POLYGLOT_RANDOMS: Lazy<[u64; 781]> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(POLYGLOT_KEY_SEED);
    let mut table = [0u64; 781];
    for slot in table.iter_mut() {
        *slot = rng.next_u64();
    }
    table
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fully_populated_and_stable() {
        let a = *POLYGLOT_RANDOMS;
        let b = *POLYGLOT_RANDOMS;
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| v != 0));
    }
}
