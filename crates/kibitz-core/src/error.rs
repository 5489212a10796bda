//! Error types for move requests, FEN parsing and board validation.

use crate::color::Color;
use crate::square::Square;

/// A move request that breaks the caller's side of the contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The source square is empty.
    #[error("no piece on {square}")]
    EmptySource {
        /// The requested source square.
        square: Square,
    },
    /// The source square holds a piece of the side not on move.
    #[error("piece on {square} belongs to {owner}, but it is {turn}'s turn")]
    NotYourPiece {
        /// The requested source square.
        square: Square,
        /// Color of the piece found there.
        owner: &'static str,
        /// Color whose turn it is.
        turn: &'static str,
    },
    /// The destination is not among the generated destinations for the source.
    #[error("{from} cannot move to {to}")]
    IllegalDestination {
        /// Source square of the rejected move.
        from: Square,
        /// Requested destination.
        to: Square,
    },
}

impl RulesError {
    pub(crate) fn not_your_piece(square: Square, owner: Color, turn: Color) -> RulesError {
        RulesError::NotYourPiece {
            square,
            owner: owner.name(),
            turn: turn.name(),
        }
    }

    /// Return `true` for the two invalid-source conditions.
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, RulesError::EmptySource { .. } | RulesError::NotYourPiece { .. })
    }
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string has neither 4 nor 6 space-separated fields.
    #[error("expected 4 or 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, which is also the board row.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or the square an opposing pawn just skipped.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
