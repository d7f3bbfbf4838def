// Produces the process-wide magic bitboard tables. Generation is deferred
// to first use and cached; under `deterministic_magic` the same fixed seed
// is used every run so perft and search results are reproducible across
// machines.

use once_cell::sync::OnceCell;

use super::precompute::{generate_magic_tables, MagicTableSeed};
use super::structs::MagicTables;

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0x5EED_C0DE_1234_5678;

static MAGIC_TABLES: OnceCell<MagicTables> = OnceCell::new();

fn build() -> MagicTables {
    #[cfg(feature = "deterministic_magic")]
    let seed = MagicTableSeed::Fixed(MAGIC_SEED);
    #[cfg(not(feature = "deterministic_magic"))]
    let seed = MagicTableSeed::Random;

    generate_magic_tables(seed).expect("magic number search failed; this should never happen with these masks")
}

/// Returns a clone of the shared magic tables, generating them once.
pub fn load_magic_tables() -> MagicTables {
    MAGIC_TABLES.get_or_init(build).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_idempotent_and_consistent() {
        let a = load_magic_tables();
        let b = load_magic_tables();
        assert_eq!(a.rook.get_attacks(27, 0), b.rook.get_attacks(27, 0));
    }
}
