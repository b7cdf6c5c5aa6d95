use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_CASTLE_TO, BLACK_KING_HOME, BLACK_QUEENSIDE_CASTLE_TO, WHITE_KINGSIDE_CASTLE_TO,
    WHITE_KING_HOME, WHITE_QUEENSIDE_CASTLE_TO,
};
use crate::game_state::chess_types::{Board, CastlingRights, Color, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    for from in 0..64u8 {
        let Some(piece) = board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::King {
            continue;
        }

        let mut targets = king_targets(from);
        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            targets &= targets - 1;

            match board[to as usize] {
                Some(occupant) if occupant.color == side => {}
                _ => out.push(Move::simple(from, to)),
            }
        }

        generate_castling_moves(board, side, rights, from, out);
    }
}

/// Castling candidates: rights intact, the squares between king and rook
/// empty, and the king's current, transit, and landing squares all safe.
fn generate_castling_moves(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    king_from: Square,
    out: &mut Vec<Move>,
) {
    let enemy = side.opposite();
    let home = match side {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    };
    if king_from != home {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let kingside_to = match side {
        Color::White => WHITE_KINGSIDE_CASTLE_TO,
        Color::Black => BLACK_KINGSIDE_CASTLE_TO,
    };
    if rights.kingside_available(side)
        && board[home as usize + 1].is_none()
        && board[home as usize + 2].is_none()
        && !is_square_attacked(board, home + 1, enemy)
        && !is_square_attacked(board, home + 2, enemy)
    {
        out.push(Move::castling(home, kingside_to));
    }

    let queenside_to = match side {
        Color::White => WHITE_QUEENSIDE_CASTLE_TO,
        Color::Black => BLACK_QUEENSIDE_CASTLE_TO,
    };
    if rights.queenside_available(side)
        && board[home as usize - 1].is_none()
        && board[home as usize - 2].is_none()
        && board[home as usize - 3].is_none()
        && !is_square_attacked(board, home - 1, enemy)
        && !is_square_attacked(board, home - 2, enemy)
    {
        out.push(Move::castling(home, queenside_to));
    }
}
