use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.iter().position(|cell| {
        matches!(cell, Some(piece) if piece.color == color && piece.kind == PieceKind::King)
    }).map(|index| index as Square)
}

/// A position with no king of `color` degrades to "not in check" rather
/// than failing; attack queries on such boards stay answerable.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Does any `attacker_color` piece attack `square`?
///
/// Pawn attacks are resolved in reverse: the squares a pawn would have to
/// stand on are the enemy-direction attack set of the target square.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let pawn_sources = pawn_attacks(attacker_color.opposite(), square);
    if any_source_holds(board, pawn_sources, attacker_color, PieceKind::Pawn) {
        return true;
    }

    if any_source_holds(board, knight_targets(square), attacker_color, PieceKind::Knight) {
        return true;
    }

    if any_source_holds(board, king_targets(square), attacker_color, PieceKind::King) {
        return true;
    }

    // Slider rays stop at their first blocker, so any attacker found in the
    // set has an unobstructed line to the target.
    let mut diagonal = bishop_attacks(board, square);
    while diagonal != 0 {
        let source = diagonal.trailing_zeros() as usize;
        diagonal &= diagonal - 1;
        if let Some(piece) = board[source] {
            if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    let mut orthogonal = rook_attacks(board, square);
    while orthogonal != 0 {
        let source = orthogonal.trailing_zeros() as usize;
        orthogonal &= orthogonal - 1;
        if let Some(piece) = board[source] {
            if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}

fn any_source_holds(board: &Board, mut sources: u64, color: Color, kind: PieceKind) -> bool {
    while sources != 0 {
        let source = sources.trailing_zeros() as usize;
        sources &= sources - 1;
        if board[source] == Some(Piece::new(color, kind)) {
            return true;
        }
    }
    false
}
