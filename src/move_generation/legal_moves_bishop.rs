use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(piece) = board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Bishop {
            continue;
        }

        push_slider_targets(board, side, from, bishop_attacks(board, from), out);
    }
}

/// Turn a ray-attack square set into moves: empty squares and enemy-occupied
/// first blockers are included, own-piece blockers dropped.
pub(crate) fn push_slider_targets(
    board: &Board,
    side: Color,
    from: Square,
    mut targets: u64,
    out: &mut Vec<Move>,
) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        targets &= targets - 1;

        match board[to as usize] {
            Some(occupant) if occupant.color == side => {}
            _ => out.push(Move::simple(from, to)),
        }
    }
}
