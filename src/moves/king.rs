use once_cell::sync::Lazy;

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

pub static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut table = [0u64; 64];
    for sq in 0..64i8 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut bb = 0u64;
        for (df, dr) in KING_DELTAS {
            let (nf, nr) = (file + df, rank + dr);
            if (0..8).contains(&nf) && (0..8).contains(&nr) {
                bb |= 1u64 << (nr * 8 + nf);
            }
        }
        table[sq as usize] = bb;
    }
    table
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_on_d4_has_eight_targets() {
        let d4 = 3 + 8 * 3;
        assert_eq!(KING_ATTACKS[d4].count_ones(), 8);
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
    }
}
