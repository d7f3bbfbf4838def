// src/bitboard.rs
// Pre-computed attack/geometry tables shared by move generation, SEE, and
// static evaluation. Everything here is process-wide immutable data,
// initialized once on first use via `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;

use crate::board::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::square::Square;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Extension methods on the raw `u64` bitboard representation.
pub trait BitboardExt {
    fn lsb(self) -> u8;
    fn msb(self) -> u8;
    fn pop_lsb(&mut self) -> u8;
    fn test(self, sq: Square) -> bool;
    fn set(self, sq: Square) -> u64;
    fn clear(self, sq: Square) -> u64;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn lsb(self) -> u8 {
        debug_assert_ne!(self, 0, "lsb() of an empty bitboard");
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn msb(self) -> u8 {
        debug_assert_ne!(self, 0, "msb() of an empty bitboard");
        63 - self.leading_zeros() as u8
    }

    #[inline(always)]
    fn pop_lsb(&mut self) -> u8 {
        let idx = self.lsb();
        *self &= *self - 1;
        idx
    }

    #[inline(always)]
    fn test(self, sq: Square) -> bool {
        (self >> sq.index()) & 1 != 0
    }

    #[inline(always)]
    fn set(self, sq: Square) -> u64 {
        self | (1u64 << sq.index())
    }

    #[inline(always)]
    fn clear(self, sq: Square) -> u64 {
        self & !(1u64 << sq.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

#[inline]
fn step(rank: i32, file: i32, dir: Direction) -> Option<(i32, i32)> {
    let (dr, df) = match dir {
        Direction::North => (1, 0),
        Direction::NorthEast => (1, 1),
        Direction::East => (0, 1),
        Direction::SouthEast => (-1, 1),
        Direction::South => (-1, 0),
        Direction::SouthWest => (-1, -1),
        Direction::West => (0, -1),
        Direction::NorthWest => (1, -1),
    };
    let (nr, nf) = (rank + dr, file + df);
    if (0..8).contains(&nr) && (0..8).contains(&nf) {
        Some((nr, nf))
    } else {
        None
    }
}

fn ray_bb(sq: usize, dir: Direction) -> u64 {
    let mut rank = (sq / 8) as i32;
    let mut file = (sq % 8) as i32;
    let mut bb = 0u64;
    while let Some((nr, nf)) = step(rank, file, dir) {
        bb |= 1u64 << (nr * 8 + nf);
        rank = nr;
        file = nf;
    }
    bb
}

struct RayTables {
    rays: [[u64; 8]; 64],
}

static RAYS: Lazy<RayTables> = Lazy::new(|| {
    let mut rays = [[0u64; 8]; 64];
    for sq in 0..64 {
        for (i, &dir) in DIRECTIONS.iter().enumerate() {
            rays[sq][i] = ray_bb(sq, dir);
        }
    }
    RayTables { rays }
});

/// Outgoing ray from `sq` in `dir`, exclusive of `sq`.
pub fn ray(sq: Square, dir: Direction) -> u64 {
    RAYS.rays[sq.index() as usize][dir as usize]
}

static BETWEEN: Lazy<[[u64; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 64];
    for a in 0..64usize {
        for &dir in &DIRECTIONS {
            let full_ray = ray_bb(a, dir);
            let mut acc = 0u64;
            let mut bb = full_ray;
            while bb != 0 {
                let b = bb.trailing_zeros() as usize;
                table[a][b] = acc;
                acc |= 1u64 << b;
                bb &= bb - 1;
            }
        }
    }
    table
});

/// Squares strictly between `a` and `b` if aligned on a rank/file/diagonal, else empty.
pub fn between(a: Square, b: Square) -> u64 {
    BETWEEN[a.index() as usize][b.index() as usize]
}

static FILE_MASKS: Lazy<[u64; 8]> = Lazy::new(|| {
    let mut masks = [0u64; 8];
    for (f, mask) in masks.iter_mut().enumerate() {
        *mask = FILE_A << f;
    }
    masks
});

static RANK_MASKS: Lazy<[u64; 8]> = Lazy::new(|| {
    let mut masks = [0u64; 8];
    for (r, mask) in masks.iter_mut().enumerate() {
        *mask = RANK_1 << (8 * r);
    }
    masks
});

pub fn file_mask(file: u8) -> u64 {
    FILE_MASKS[file as usize]
}

pub fn rank_mask(rank: u8) -> u64 {
    RANK_MASKS[rank as usize]
}

static PASSED_PAWN_MASKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut masks = [[0u64; 64]; 2];
    for sq in 0..64usize {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;

        let mut white_mask = 0u64;
        let mut black_mask = 0u64;
        for f in (file - 1)..=(file + 1) {
            if !(0..8).contains(&f) {
                continue;
            }
            for r in (rank + 1)..8 {
                white_mask |= 1u64 << (r * 8 + f);
            }
            for r in 0..rank {
                black_mask |= 1u64 << (r * 8 + f);
            }
        }
        masks[0][sq] = white_mask;
        masks[1][sq] = black_mask;
    }
    masks
});

/// Squares in front of `sq` (on its file and neighbouring files) that an
/// enemy pawn could occupy to stop it from becoming passed.
pub fn passed_pawn_mask(color: crate::board::Color, sq: Square) -> u64 {
    let idx = match color {
        crate::board::Color::White => 0,
        crate::board::Color::Black => 1,
    };
    PASSED_PAWN_MASKS[idx][sq.index() as usize]
}

static SQUARE_DISTANCE: Lazy<[[u8; 64]; 64]> = Lazy::new(|| {
    let mut table = [[0u8; 64]; 64];
    for a in 0..64u8 {
        for b in 0..64u8 {
            table[a as usize][b as usize] = Square::from_index(a).distance(Square::from_index(b));
        }
    }
    table
});

pub fn square_distance(a: Square, b: Square) -> u8 {
    SQUARE_DISTANCE[a.index() as usize][b.index() as usize]
}

pub fn center_distance(sq: Square) -> u8 {
    sq.center_distance()
}

/// Bits of castling rights invalidated when a piece enters or leaves `sq`.
pub fn castling_rights_affected_by(sq: Square) -> u8 {
    match sq.index() {
        0 => CASTLE_WQ,  // a1
        4 => CASTLE_WK | CASTLE_WQ, // e1 (king start)
        7 => CASTLE_WK,  // h1
        56 => CASTLE_BQ, // a8
        60 => CASTLE_BK | CASTLE_BQ, // e8 (king start)
        63 => CASTLE_BK, // h8
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_lsb_drains_all_bits_ascending() {
        let mut bb = (1u64 << 3) | (1u64 << 40) | (1u64 << 5);
        let mut out = Vec::new();
        while bb != 0 {
            out.push(bb.pop_lsb());
        }
        assert_eq!(out, vec![3, 5, 40]);
    }

    #[test]
    fn between_same_rank() {
        let a1 = Square::from_index(0);
        let h1 = Square::from_index(7);
        let expected = (1u64 << 1) | (1 << 2) | (1 << 3) | (1 << 4) | (1 << 5) | (1 << 6);
        assert_eq!(between(a1, h1), expected);
    }

    #[test]
    fn between_unaligned_is_empty() {
        let a1 = Square::from_index(0);
        let b3 = Square::from_index(17);
        assert_eq!(between(a1, b3), 0);
    }

    #[test]
    fn ray_north_from_a1() {
        let a1 = Square::from_index(0);
        let expected: u64 = (1..8).map(|r| 1u64 << (r * 8)).sum();
        assert_eq!(ray(a1, Direction::North), expected);
    }

    #[test]
    fn castling_rights_affected_by_e1() {
        assert_eq!(castling_rights_affected_by(Square::from_index(4)), CASTLE_WK | CASTLE_WQ);
    }
}
