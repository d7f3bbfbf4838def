use crate::moves::types::Move;

// Make sure MATE_THRESHOLD matches what we define in search.rs (30000)
pub const MATE_THRESHOLD: i32 = 30000;

/// Per-entry age cap (spec.md §4.4: "age counter (0..7 or similar)").
const MAX_AGE: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeType {
    Exact = 0,
    LowerBound = 1, // Beta cutoff (failed high)
    UpperBound = 2, // Alpha cutoff (failed low)
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: u64,
    pub best_move: Option<Move>,
    pub score: i16,
    /// Static evaluation cached independently of the search value, so the
    /// eval-TT (spec.md §4.5) can reuse it even when the search value at
    /// this slot belongs to a different bound/depth.
    pub eval: Option<i16>,
    pub depth: u8,
    pub bound: u8, // 0=Exact, 1=Lower, 2=Upper
    /// 0..7, reset to 1 on every write. `probe` decrements it (floor 0) on
    /// a hit; `new_search` increments every occupied entry (saturating at
    /// 7) once per search, per spec.md §4.4.
    pub age: u8,
}

impl TTEntry {
    const EMPTY: TTEntry = TTEntry {
        key: 0,
        best_move: None,
        score: 0,
        eval: None,
        depth: 0,
        bound: 0,
        age: 0,
    };
}

pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    pub fn new(size_mb: usize) -> Self {
        // Allocate TT based on size in MB.
        let entry_size = std::mem::size_of::<TTEntry>();
        let num_entries = (size_mb * 1024 * 1024) / entry_size;

        // Round down to power of 2
        let mut capacity = 1;
        while capacity * 2 <= num_entries {
            capacity *= 2;
        }

        Self {
            entries: vec![TTEntry::EMPTY; capacity],
            hits: 0,
            misses: 0,
        }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.entries.len() - 1)
    }

    /// Age every occupied entry once, saturating at 7. Call once per new
    /// search (spec.md §4.4 `ageEntries()`, driven from the root search
    /// loop's "Age TT entries once" step).
    pub fn new_search(&mut self) {
        for entry in self.entries.iter_mut() {
            if entry.key != 0 {
                entry.age = entry.age.saturating_add(1).min(MAX_AGE);
            }
        }
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = TTEntry::EMPTY;
        }
        self.hits = 0;
        self.misses = 0;
    }

    /// `put(key, move, depth, value, valueType, eval)` replacement policy
    /// (spec.md §4.4):
    /// - empty slot -> write.
    /// - same key (update) -> always update the search value/depth/bound;
    ///   preserve the existing move/eval when the new one isn't available.
    /// - different key (collision) -> overwrite only if the new entry is
    ///   strictly deeper, or equally deep and the stored entry has been
    ///   aged at least once.
    pub fn save(
        &mut self,
        key: u64,
        mv: Option<Move>,
        score: i32,
        depth: u8,
        bound: u8,
        eval: Option<i32>,
    ) {
        let score_i16 = score.clamp(-32000, 32000) as i16;
        let eval_i16 = eval.map(|e| e.clamp(-32000, 32000) as i16);

        let index = self.index(key);
        let entry = &mut self.entries[index];

        let is_empty = entry.key == 0;
        let same_key = !is_empty && entry.key == key;
        let collision_wins = !is_empty
            && !same_key
            && (depth > entry.depth || (depth == entry.depth && entry.age >= 1));

        if !(is_empty || same_key || collision_wins) {
            return;
        }

        // Same-key updates preserve the prior move/eval when the caller
        // doesn't supply a replacement; empty slots and collisions start
        // fresh, since there is nothing of this position's to preserve.
        let best_move = match (mv, same_key) {
            (Some(m), _) => Some(m),
            (None, true) => entry.best_move,
            (None, false) => None,
        };
        let eval_final = match (eval_i16, same_key) {
            (Some(e), _) => Some(e),
            (None, true) => entry.eval,
            (None, false) => None,
        };

        entry.key = key;
        entry.best_move = best_move;
        entry.score = score_i16;
        entry.eval = eval_final;
        entry.depth = depth;
        entry.bound = bound;
        entry.age = 1; // fresh write
    }

    /// `probe(key) → entry?` (spec.md §4.4): returns the stored entry iff
    /// its key matches, decreasing its age on hit (floored at zero) and
    /// updating the hit/miss counters. Tuple shape:
    /// `(move, search value, depth, bound, eval)`.
    pub fn probe(&mut self, key: u64) -> Option<(Option<Move>, i32, u8, u8, Option<i32>)> {
        let index = self.index(key);
        if self.entries[index].key != key {
            self.misses += 1;
            return None;
        }
        self.hits += 1;

        let entry = &mut self.entries[index];
        if entry.age > 0 {
            entry.age -= 1;
        }

        Some((
            entry.best_move,
            entry.score as i32,
            entry.depth,
            entry.bound,
            entry.eval.map(|e| e as i32),
        ))
    }

    /// `getEntry(key) → entry?` (spec.md §4.4): like `probe` but without
    /// the aging/stats side effects.
    pub fn get_entry(&self, key: u64) -> Option<&TTEntry> {
        let index = self.index(key);
        let entry = &self.entries[index];
        if entry.key == key { Some(entry) } else { None }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Permille (0..1000) of slots currently occupied, per the UCI `hashfull`
    /// info field.
    pub fn hashfull(&self) -> u32 {
        if self.entries.is_empty() {
            return 0;
        }
        let occupied = self.entries.iter().filter(|e| e.key != 0).count();
        ((occupied as u64 * 1000) / self.entries.len() as u64) as u32
    }
}
