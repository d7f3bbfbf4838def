// FEN (Forsyth-Edwards Notation) parsing and serialization.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, Color, Piece};
use crate::board::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::square::Square;

impl Board {
    /// Loads this board from a FEN string, overwriting all existing state.
    ///
    /// Only the piece-placement field is mandatory; side-to-move, castling
    /// rights, en-passant square, halfmove clock, and fullmove number all
    /// fall back to their standard-start defaults when the FEN omits them.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or("FEN is empty")?;
        let side = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let en_passant = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "expected 8 ranks in piece placement, found {}",
                ranks.len()
            ));
        }

        let mut piece_bb = [[0u64; 6]; 2];
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for ch in rank_str.chars() {
                if file > 8 {
                    return Err(format!("rank '{}' has too many squares", rank_str));
                }
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(format!("invalid empty-square count '{}'", ch));
                    }
                    file += skip as u8;
                    continue;
                }
                let (piece, color) = CHAR_TO_PC[ch as usize]
                    .ok_or_else(|| format!("unrecognized piece glyph '{}'", ch))?;
                if file >= 8 {
                    return Err(format!("rank '{}' overflows past the h-file", rank_str));
                }
                let sq = Square::from_file_rank(file, rank);
                piece_bb[color as usize][piece as usize] |= 1u64 << sq.index();
                file += 1;
            }
            if file != 8 {
                return Err(format!(
                    "rank '{}' covers {} squares, expected 8",
                    rank_str, file
                ));
            }
        }

        let mut board = Board::new_empty();
        for (ci, color) in [Color::White, Color::Black].into_iter().enumerate() {
            for (pi, piece) in [
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ]
            .into_iter()
            .enumerate()
            {
                board.set_bb(color, piece, piece_bb[ci][pi]);
            }
        }

        board.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side to move '{}'", other)),
        };

        board.castling_rights = 0;
        if castling != "-" {
            for ch in castling.chars() {
                board.castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling flag '{}'", other)),
                };
            }
        }

        board.en_passant = if en_passant == "-" {
            None
        } else {
            Some(parse_square(en_passant)?)
        };

        board.halfmove_clock = halfmove
            .parse()
            .map_err(|_| format!("invalid halfmove clock '{}'", halfmove))?;
        board.fullmove_number = fullmove
            .parse()
            .map_err(|_| format!("invalid fullmove number '{}'", fullmove))?;

        board.validate()?;
        board.refresh_zobrist();
        board.history.clear();

        *self = board;
        Ok(())
    }

    /// Serializes this board to FEN.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_file_rank(file, rank);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        out.push(PC_TO_CHAR[idx]);
                    }
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
            if rank != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.side_to_move == Color::White { 'w' } else { 'b' });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.castling_rights & CASTLE_WK != 0 {
                out.push('K');
            }
            if self.castling_rights & CASTLE_WQ != 0 {
                out.push('Q');
            }
            if self.castling_rights & CASTLE_BK != 0 {
                out.push('k');
            }
            if self.castling_rights & CASTLE_BQ != 0 {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

fn parse_square(s: &str) -> Result<Square, String> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("invalid square '{}'", s));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(format!("invalid square '{}'", s));
    }
    Ok(Square::from_file_rank(file - b'a', rank - b'1'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_round_trips() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let board: Board = start.parse().unwrap();
        assert_eq!(board.to_fen(), start);
    }

    #[test]
    fn kiwipete_round_trips() {
        let kiwipete =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let board: Board = kiwipete.parse().unwrap();
        assert_eq!(board.to_fen(), kiwipete);
    }

    #[test]
    fn missing_trailing_fields_default_sensibly() {
        let board: Board = "8/8/8/8/8/8/8/K6k w - -".parse().unwrap();
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.fullmove_number, 1);
    }

    #[test]
    fn wrong_rank_count_is_rejected() {
        assert!("8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().is_err());
    }

    #[test]
    fn en_passant_square_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let board: Board = fen.parse().unwrap();
        assert_eq!(board.en_passant.map(|s| s.to_string()), Some("d6".to_string()));
    }
}
