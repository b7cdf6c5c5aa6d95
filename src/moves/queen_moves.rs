//! Queen reach: the union of the bishop and rook ray sets.

use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Square set reachable by a queen from `square`, first blockers included.
pub fn queen_attacks(board: &Board, square: Square) -> u64 {
    bishop_attacks(board, square) | rook_attacks(board, square)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::EMPTY_BOARD;

    #[test]
    fn queen_in_the_center_of_an_empty_board_sees_27_squares() {
        assert_eq!(queen_attacks(&EMPTY_BOARD, 36).count_ones(), 27);
    }
}
