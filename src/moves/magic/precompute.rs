// Generates magic bitboard tables from scratch: relevant-occupancy masks,
// every blocker subset of each mask, the scan-based attack set for each
// subset, and a magic multiplier that hashes blockers to a collision-free
// table index.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};

/// Controls how the RNG driving magic-number search is seeded.
pub enum MagicTableSeed {
    /// Deterministic: same seed always yields the same magic numbers.
    Fixed(u64),
    /// Seeded from OS entropy; a fresh table is generated each run.
    Random,
}

fn rook_relevant_mask(square: usize) -> u64 {
    let rank = (square / 8) as i32;
    let file = (square % 8) as i32;
    let mut mask = 0u64;
    for r in (rank + 1)..7 {
        mask |= 1u64 << (r * 8 + file);
    }
    for r in 1..rank {
        mask |= 1u64 << (r * 8 + file);
    }
    for f in (file + 1)..7 {
        mask |= 1u64 << (rank * 8 + f);
    }
    for f in 1..file {
        mask |= 1u64 << (rank * 8 + f);
    }
    mask
}

fn bishop_relevant_mask(square: usize) -> u64 {
    let rank = (square / 8) as i32;
    let file = (square % 8) as i32;
    let mut mask = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..7).contains(&r) && (1..7).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// All subsets of `mask`, via the standard Carry-Rippler trick.
fn subsets_of(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn build_entry<R: rand::RngCore>(
    square: usize,
    mask: u64,
    scan: impl Fn(usize, u64) -> u64,
    rng: &mut R,
) -> Result<MagicEntry, String> {
    let shift = 64 - mask.count_ones();
    let blockers = subsets_of(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| scan(square, b)).collect();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let mut table = vec![0u64; 1usize << mask.count_ones()];
    for (&blocker, &attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((blocker.wrapping_mul(magic)) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            // Version-agnostic: fill a 32-byte seed from the thread RNG.
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    };

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let rmask = rook_relevant_mask(square);
        rook_entries.push(build_entry(square, rmask, rook_attacks_per_square, &mut rng)?);

        let bmask = bishop_relevant_mask(square);
        bishop_entries.push(build_entry(square, bmask, bishop_attacks_per_square, &mut rng)?);
    }

    Ok(MagicTables {
        rook: RookMagicTables { entries: rook_entries },
        bishop: BishopMagicTables { entries: bishop_entries },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_a1_relevant_mask_excludes_edges() {
        let mask = rook_relevant_mask(0);
        assert_eq!(mask & 0x8000_0000_0000_0001, 0);
        assert_ne!(mask, 0);
    }

    #[test]
    fn generated_tables_match_scan_for_fixed_seed() {
        let tables = generate_magic_tables(MagicTableSeed::Fixed(1)).unwrap();
        let d4 = 27;
        let blockers = (1u64 << 19) | (1u64 << 35);
        assert_eq!(
            tables.rook.get_attacks(d4, blockers),
            rook_attacks_per_square(d4, blockers)
        );
    }
}
