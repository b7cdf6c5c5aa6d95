use crate::game_state::chess_types::{Board, Color, PieceKind};
use crate::move_generation::legal_moves_bishop::push_slider_targets;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(piece) = board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Queen {
            continue;
        }

        push_slider_targets(board, side, from, queen_attacks(board, from), out);
    }
}
