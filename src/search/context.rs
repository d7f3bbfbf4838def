use crate::moves::types::Move;

const MAX_PLY: usize = 128;

pub struct SearchContext {
    pub killer_moves: Vec<[Option<Move>; 2]>,
    pub history: [[i32; 64]; 64],
    /// pv[ply] holds the best line found so far starting at that ply.
    pub pv: Vec<Vec<Move>>,
    /// UCI `searchmoves` restriction; empty means no restriction. Only
    /// consulted at the root (ply 0).
    pub root_restrict: Vec<Move>,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            killer_moves: vec![[None; 2]; MAX_PLY],
            history: [[0; 64]; 64],
            pv: vec![Vec::new(); MAX_PLY],
            root_restrict: Vec::new(),
        }
    }

    /// Clears the PV buffer for `ply`, ready to be rebuilt by the move loop.
    pub fn clear_pv(&mut self, ply: usize) {
        self.pv[ply].clear();
    }

    /// dest = [mv] ++ src, mirroring the classic `savePV(move, pv[ply+1], pv[ply])`.
    pub fn save_pv(&mut self, ply: usize, mv: Move) {
        let child = std::mem::take(&mut self.pv[ply + 1]);
        let dest = &mut self.pv[ply];
        dest.clear();
        dest.push(mv);
        dest.extend(child.iter().copied());
        self.pv[ply + 1] = child;
    }

    pub fn update_killer(&mut self, ply: usize, mv: Move) {
        if self.killer_moves[ply][0] != Some(mv) {
            self.killer_moves[ply][1] = self.killer_moves[ply][0];
            self.killer_moves[ply][0] = Some(mv);
        }
    }

    pub fn update_history(&mut self, mv: Move, depth: i32) {
        let bonus = (depth * depth).min(400);
        self.history[mv.from.index() as usize][mv.to.index() as usize] += bonus;
    }
}
