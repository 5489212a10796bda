//! Promotion pieces and the provider the engine asks when a pawn reaches its far row.

use std::fmt;

use tracing::warn;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Knight,
    Bishop,
}

impl PromotionPiece {
    /// All promotion pieces, in the order they are usually offered.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
        }
    }

    /// Parse `q`, `r`, `n` or `b` (either case).
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            _ => None,
        }
    }

    /// Parse a one-letter answer, ignoring surrounding whitespace.
    pub fn from_answer(s: &str) -> Option<PromotionPiece> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PromotionPiece::from_char(c),
            _ => None,
        }
    }

    /// Lowercase letter for this piece.
    pub const fn letter(self) -> char {
        self.to_piece_kind().letter()
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Supplies the replacement piece when a pawn reaches its far row.
///
/// The call is synchronous; the engine waits for the answer. Returning `None`
/// means no valid selection was made, and the pawn becomes a queen.
pub trait PromotionChooser {
    /// Pick the piece for the `color` pawn arriving on `square`.
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece>;
}

/// A fixed answer.
impl PromotionChooser for PromotionPiece {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        Some(*self)
    }
}

/// No selection at all: every promotion falls back to a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoChoice;

impl PromotionChooser for NoChoice {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        None
    }
}

/// A caller-supplied answer that may be absent.
impl PromotionChooser for Option<PromotionPiece> {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        *self
    }
}

impl<C: PromotionChooser + ?Sized> PromotionChooser for &mut C {
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece> {
        (**self).choose(color, square)
    }
}

/// Adapts a closure into a [`PromotionChooser`].
pub struct ChooseWith<F>(pub F);

impl<F> PromotionChooser for ChooseWith<F>
where
    F: FnMut(Color, Square) -> Option<PromotionPiece>,
{
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece> {
        (self.0)(color, square)
    }
}

/// Ask `chooser`, falling back to a queen when it has no valid answer.
pub(crate) fn resolve<C: PromotionChooser + ?Sized>(
    chooser: &mut C,
    color: Color,
    square: Square,
) -> PromotionPiece {
    chooser.choose(color, square).unwrap_or_else(|| {
        warn!(%square, color = color.name(), "no promotion choice, defaulting to queen");
        PromotionPiece::Queen
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_four_letters() {
        assert_eq!(PromotionPiece::from_char('q'), Some(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_char('R'), Some(PromotionPiece::Rook));
        assert_eq!(PromotionPiece::from_char('n'), Some(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_char('B'), Some(PromotionPiece::Bishop));
        assert_eq!(PromotionPiece::from_char('k'), None);
        assert_eq!(PromotionPiece::from_char('p'), None);
    }

    #[test]
    fn from_answer_trims_and_rejects_words() {
        assert_eq!(PromotionPiece::from_answer(" n\n"), Some(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_answer("queen"), None);
        assert_eq!(PromotionPiece::from_answer(""), None);
    }

    #[test]
    fn letters_roundtrip() {
        for piece in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_char(piece.letter()), Some(piece));
        }
    }

    #[test]
    fn resolve_defaults_to_queen() {
        let mut none: Option<PromotionPiece> = None;
        assert_eq!(resolve(&mut none, Color::White, Square::A8), PromotionPiece::Queen);
        assert_eq!(resolve(&mut NoChoice, Color::Black, Square::H1), PromotionPiece::Queen);

        let mut rook = PromotionPiece::Rook;
        assert_eq!(resolve(&mut rook, Color::Black, Square::A1), PromotionPiece::Rook);
    }

    #[test]
    fn closure_chooser_sees_color_and_square() {
        let mut seen = Vec::new();
        let mut chooser = ChooseWith(|color: Color, square: Square| {
            seen.push((color, square));
            Some(PromotionPiece::Knight)
        });
        assert_eq!(resolve(&mut chooser, Color::Black, Square::C1), PromotionPiece::Knight);
        drop(chooser);
        assert_eq!(seen, [(Color::Black, Square::C1)]);
    }
}
