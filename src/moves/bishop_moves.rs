//! Diagonal ray tracing over the mailbox board.
//!
//! Rays walk one square at a time, collecting empty squares and stopping at
//! the first occupied square, which is included so callers can classify it
//! as a capture or a blocker.

use crate::game_state::chess_types::{Board, Square};

/// (col, row) steps for the four diagonals.
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Square set reachable by a bishop from `square`, first blocker included.
pub fn bishop_attacks(board: &Board, square: Square) -> u64 {
    let mut attacks = 0u64;
    for (col_step, row_step) in BISHOP_DIRECTIONS {
        attacks |= trace_ray(board, square, col_step, row_step);
    }
    attacks
}

pub(crate) fn trace_ray(board: &Board, square: Square, col_step: i32, row_step: i32) -> u64 {
    let mut col = (square % 8) as i32 + col_step;
    let mut row = (square / 8) as i32 + row_step;
    let mut attacks = 0u64;

    while (0..8).contains(&col) && (0..8).contains(&row) {
        let target = (row * 8 + col) as usize;
        attacks |= 1u64 << target;

        if board[target].is_some() {
            break;
        }

        col += col_step;
        row += row_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, EMPTY_BOARD};

    #[test]
    fn bishop_on_empty_board_sees_both_full_diagonals() {
        // d5 = row 3, col 3 = 27: 13 diagonal squares on an empty board
        assert_eq!(bishop_attacks(&EMPTY_BOARD, 27).count_ones(), 13);
    }

    #[test]
    fn ray_stops_at_and_includes_first_occupied_square() {
        let mut board = EMPTY_BOARD;
        // blocker on f7 = row 1, col 5 = 13, bishop traced from d5 = 27
        board[13] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        let attacks = bishop_attacks(&board, 27);
        assert_ne!(attacks & (1u64 << 13), 0, "blocker square included");
        assert_eq!(attacks & (1u64 << 6), 0, "square behind blocker excluded");
    }
}
