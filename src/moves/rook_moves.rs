//! Orthogonal ray tracing over the mailbox board.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::trace_ray;

/// (col, row) steps for the four orthogonals.
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Square set reachable by a rook from `square`, first blocker included.
pub fn rook_attacks(board: &Board, square: Square) -> u64 {
    let mut attacks = 0u64;
    for (col_step, row_step) in ROOK_DIRECTIONS {
        attacks |= trace_ray(board, square, col_step, row_step);
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, EMPTY_BOARD};

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        assert_eq!(rook_attacks(&EMPTY_BOARD, 36).count_ones(), 14);
    }

    #[test]
    fn rook_ray_stops_at_first_occupied_square() {
        let mut board = EMPTY_BOARD;
        // rook on e4 = 36, blocker on e6 = 20
        board[20] = Some(Piece::new(Color::White, PieceKind::Knight));
        let attacks = rook_attacks(&board, 36);
        assert_ne!(attacks & (1u64 << 28), 0, "e5 open");
        assert_ne!(attacks & (1u64 << 20), 0, "blocker included");
        assert_eq!(attacks & (1u64 << 12), 0, "e7 shadowed");
    }
}
