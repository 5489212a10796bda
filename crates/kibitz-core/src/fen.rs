//! FEN parsing and serialization for a board plus game state.
//!
//! Only the first four fields carry information here. The halfmove clock and
//! fullmove number may be present; they are checked to be numbers and then
//! dropped, and serialization always writes `0 1`.

use crate::board::Board;
use crate::castling::MovedFlags;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::state::GameState;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a validated board and its game state.
pub fn parse(fen: &str) -> Result<(Board, GameState), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let board = parse_placement(fields[0])?;

    let turn = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };

    let moved = MovedFlags::from_fen(fields[2])?;

    let en_passant = match fields[3] {
        "-" => None,
        field => {
            let sq = Square::from_algebraic(field)
                .filter(|&sq| en_passant_consistent(&board, turn, sq))
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: field.to_string(),
                })?;
            Some(sq)
        }
    };

    if fields.len() == 6 {
        for (field, value) in [("halfmove clock", fields[4]), ("fullmove number", fields[5])] {
            value
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                })?;
        }
    }

    board.validate()?;
    Ok((board, GameState::from_parts(turn, moved, en_passant)))
}

/// Whether `target` could be the square an opposing pawn just skipped.
///
/// The target must sit behind that pawn's double step, be empty, and have
/// the pawn still standing one row further on.
fn en_passant_consistent(board: &Board, turn: Color, target: Square) -> bool {
    let mover = turn.flip();
    let skipped_row = mover.pawn_row() as i8 + mover.forward();
    if target.row() as i8 != skipped_row || !board.is_empty(target) {
        return false;
    }
    target
        .offset(mover.forward(), 0)
        .and_then(|sq| board.piece_at(sq))
        == Some(Piece::new(PieceKind::Pawn, mover))
}

/// Parse the piece placement field. Ranks are listed from row 0 (rank 8) down to row 7.
fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::from_row_col(rank_index as u8, col as u8).ok_or(
                    FenError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    },
                )?;
                board.set(sq, Some(piece));
                col += 1;
            }
        }
        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }
    Ok(board)
}

/// Serialize the piece placement field.
pub(crate) fn placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0u8..8 {
        let mut empty_count = 0u8;
        for col in 0u8..8 {
            match Square::from_row_col(row, col).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

/// Serialize a board and state to FEN.
pub fn to_fen(board: &Board, state: &GameState) -> String {
    let en_passant = state
        .en_passant()
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());
    format!(
        "{} {} {} {} 0 1",
        placement(board),
        state.turn(),
        state.moved().to_fen(),
        en_passant
    )
}
