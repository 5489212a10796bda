//! Castling geometry and the monotonic "has moved" flags that gate castling.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the king starts on, for either side.
    pub const KING_COL: u8 = 4;

    /// Corner square the rook for this side starts on.
    #[inline]
    pub const fn rook_corner(self, color: Color) -> Square {
        let col = match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        };
        Square::from_index_unchecked(color.back_row() * Square::WIDTH + col)
    }

    /// Square the king starts on.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::from_index_unchecked(color.back_row() * Square::WIDTH + Self::KING_COL)
    }

    /// Square the king lands on after castling toward this side.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        let col = match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        };
        Square::from_index_unchecked(color.back_row() * Square::WIDTH + col)
    }

    /// Square the rook lands on: the one the king passes over.
    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        let col = match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        };
        Square::from_index_unchecked(color.back_row() * Square::WIDTH + col)
    }

    /// Columns strictly between the king and the rook, all of which must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Classify a king move as a castling hop, if it moves exactly two columns along its row.
    pub fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

const WHITE_KING_BIT: u8 = 0b00_0001;
const BLACK_KING_BIT: u8 = 0b00_0010;
const ALL_BITS: u8 = 0b11_1111;

/// Which kings and corner rooks have moved, as a 6-bit field.
///
/// Bit 0 = White king, bit 1 = Black king, bits 2-5 = the rooks starting on
/// a8, h8, a1 and h1. Flags are only ever set, never cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovedFlags(u8);

impl MovedFlags {
    /// Nothing has moved: the flags at the start of a game.
    pub const NONE: MovedFlags = MovedFlags(0);

    /// Every king and corner has moved; nobody can castle.
    pub const ALL: MovedFlags = MovedFlags(ALL_BITS);

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_BIT,
            Color::Black => BLACK_KING_BIT,
        }
    }

    const fn corner_bit(sq: Square) -> Option<u8> {
        match sq.index() {
            0 => Some(0b00_0100),
            7 => Some(0b00_1000),
            56 => Some(0b01_0000),
            63 => Some(0b10_0000),
            _ => None,
        }
    }

    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// Return `true` if the rook corner `sq` has been vacated. Non-corner squares report `false`.
    #[inline]
    pub const fn rook_moved(self, sq: Square) -> bool {
        match Self::corner_bit(sq) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Return new flags with `color`'s king marked as moved.
    #[inline]
    pub const fn with_king_moved(self, color: Color) -> MovedFlags {
        MovedFlags(self.0 | Self::king_bit(color))
    }

    /// Return new flags with corner `sq` marked. Squares that are not corners are ignored.
    #[inline]
    pub const fn with_rook_moved(self, sq: Square) -> MovedFlags {
        match Self::corner_bit(sq) {
            Some(bit) => MovedFlags(self.0 | bit),
            None => self,
        }
    }

    /// Return `true` if neither the king nor the rook for this side has moved.
    #[inline]
    pub const fn may_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(side.rook_corner(color))
    }

    /// Parse the FEN castling field (e.g. `"KQkq"`, `"Kq"`, `"-"`).
    ///
    /// A color with neither letter gets its king marked as moved.
    pub fn from_fen(s: &str) -> Result<MovedFlags, FenError> {
        let mut rights = [[false; 2]; Color::COUNT];
        if s != "-" {
            for c in s.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::KingSide),
                    'Q' => (Color::White, CastleSide::QueenSide),
                    'k' => (Color::Black, CastleSide::KingSide),
                    'q' => (Color::Black, CastleSide::QueenSide),
                    _ => return Err(FenError::InvalidCastlingChar { character: c }),
                };
                rights[color.index()][side as usize] = true;
            }
        }

        let mut flags = MovedFlags::NONE;
        for color in Color::ALL {
            let sides = rights[color.index()];
            if !sides.contains(&true) {
                flags = flags.with_king_moved(color);
            }
            for side in CastleSide::ALL {
                if !sides[side as usize] {
                    flags = flags.with_rook_moved(side.rook_corner(color));
                }
            }
        }
        Ok(flags)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        let mut s = String::with_capacity(4);
        for (color, side, letter) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.may_castle(color, side) {
                s.push(letter);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Debug for MovedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovedFlags({:06b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleSide, MovedFlags};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn geometry_white() {
        assert_eq!(CastleSide::king_home(Color::White), Square::E1);
        assert_eq!(CastleSide::KingSide.rook_corner(Color::White), Square::H1);
        assert_eq!(CastleSide::KingSide.king_target(Color::White), Square::G1);
        assert_eq!(CastleSide::KingSide.rook_target(Color::White), Square::F1);
        assert_eq!(CastleSide::QueenSide.rook_corner(Color::White), Square::A1);
        assert_eq!(CastleSide::QueenSide.king_target(Color::White), Square::C1);
        assert_eq!(CastleSide::QueenSide.rook_target(Color::White), Square::D1);
    }

    #[test]
    fn geometry_black() {
        assert_eq!(CastleSide::king_home(Color::Black), Square::E8);
        assert_eq!(CastleSide::KingSide.rook_corner(Color::Black), Square::H8);
        assert_eq!(CastleSide::QueenSide.king_target(Color::Black), Square::C8);
    }

    #[test]
    fn classify_king_moves() {
        assert_eq!(CastleSide::from_king_move(Square::E1, Square::G1), Some(CastleSide::KingSide));
        assert_eq!(CastleSide::from_king_move(Square::E8, Square::C8), Some(CastleSide::QueenSide));
        assert_eq!(CastleSide::from_king_move(Square::E1, Square::F1), None);
        assert_eq!(CastleSide::from_king_move(Square::E2, Square::G1), None);
    }

    #[test]
    fn flags_are_monotonic() {
        let flags = MovedFlags::NONE
            .with_king_moved(Color::Black)
            .with_rook_moved(Square::A1)
            .with_king_moved(Color::Black);
        assert!(flags.king_moved(Color::Black));
        assert!(!flags.king_moved(Color::White));
        assert!(flags.rook_moved(Square::A1));
        assert!(!flags.rook_moved(Square::H1));
    }

    #[test]
    fn non_corner_ignored() {
        let flags = MovedFlags::NONE.with_rook_moved(Square::E4);
        assert_eq!(flags, MovedFlags::NONE);
        assert!(!flags.rook_moved(Square::E4));
    }

    #[test]
    fn may_castle_needs_king_and_rook() {
        let flags = MovedFlags::NONE.with_rook_moved(Square::H8);
        assert!(flags.may_castle(Color::Black, CastleSide::QueenSide));
        assert!(!flags.may_castle(Color::Black, CastleSide::KingSide));
        let flags = flags.with_king_moved(Color::White);
        assert!(!flags.may_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn from_fen_starting() {
        assert_eq!(MovedFlags::from_fen("KQkq").unwrap(), MovedFlags::NONE);
        assert_eq!(MovedFlags::from_fen("-").unwrap(), MovedFlags::ALL);
    }

    #[test]
    fn from_fen_partial() {
        let flags = MovedFlags::from_fen("Kq").unwrap();
        assert!(flags.may_castle(Color::White, CastleSide::KingSide));
        assert!(!flags.may_castle(Color::White, CastleSide::QueenSide));
        assert!(!flags.may_castle(Color::Black, CastleSide::KingSide));
        assert!(flags.may_castle(Color::Black, CastleSide::QueenSide));
        assert!(!flags.king_moved(Color::White));
    }

    #[test]
    fn from_fen_invalid() {
        assert!(MovedFlags::from_fen("KQxq").is_err());
        assert!(MovedFlags::from_fen("1").is_err());
    }

    #[test]
    fn to_fen_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            let flags = MovedFlags::from_fen(fen).unwrap();
            assert_eq!(flags.to_fen(), fen);
        }
    }
}
