use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(piece) = board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Knight {
            continue;
        }

        let mut targets = knight_targets(from);
        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            targets &= targets - 1;

            match board[to as usize] {
                Some(occupant) if occupant.color == side => {}
                _ => out.push(Move::simple(from, to)),
            }
        }
    }
}
