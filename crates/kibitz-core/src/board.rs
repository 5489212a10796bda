//! Piece placement: 64 cells, each empty or holding one piece.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Back-rank layout from column 0 to column 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the 64 squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::from_row_col(color.back_row(), col) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::from_row_col(color.pawn_row(), col) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Place `piece` on `sq`, or clear the square with `None`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Iterate over every occupied square with its piece, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return the set of squares holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Count pieces matching `piece` exactly.
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper using FEN letters.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            glyphs: false,
        }
    }

    /// Return a pretty-printable wrapper using Unicode chess symbols.
    pub fn pretty_glyphs(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            glyphs: true,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", crate::fen::placement(self))
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 0 on top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    glyphs: bool,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::from_row_col(row, col)
                    .and_then(|sq| self.board.piece_at(sq))
                    .map_or('.', |piece| {
                        if self.glyphs {
                            piece.glyph()
                        } else {
                            piece.fen_char()
                        }
                    });
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
