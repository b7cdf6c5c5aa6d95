//! The move description shared by generation, legality filtering, and the
//! state transition.

use crate::game_state::chess_types::{PieceKind, Square};

/// One candidate or legal move.
///
/// `captured_square` is only meaningful for en passant, where the captured
/// pawn does not stand on `to`; every other capture removes whatever
/// occupies `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub captured_square: Option<Square>,
}

impl Move {
    /// Ordinary relocation or capture-on-destination move.
    #[inline]
    pub const fn simple(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
            captured_square: None,
        }
    }

    /// Pawn reaching the far rank; one of these exists per promotion choice.
    #[inline]
    pub const fn promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
            is_castling: false,
            is_en_passant: false,
            captured_square: None,
        }
    }

    /// King two-square castling move; the rook relocation is implicit and
    /// performed by the board transform.
    #[inline]
    pub const fn castling(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_castling: true,
            is_en_passant: false,
            captured_square: None,
        }
    }

    /// En passant capture; `captured_square` holds the enemy pawn's square.
    #[inline]
    pub const fn en_passant(from: Square, to: Square, captured_square: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            is_castling: false,
            is_en_passant: true,
            captured_square: Some(captured_square),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn constructors_set_the_matching_flags() {
        assert!(Move::castling(60, 62).is_castling);
        assert!(Move::en_passant(28, 21, 29).is_en_passant);
        assert_eq!(Move::en_passant(28, 21, 29).captured_square, Some(29));
        assert_eq!(
            Move::promotion(12, 4, PieceKind::Queen).promotion,
            Some(PieceKind::Queen)
        );
        assert!(Move::simple(52, 36).captured_square.is_none());
    }
}
