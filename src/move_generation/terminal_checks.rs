//! Terminal classification: checkmate, stalemate, and the draw rules.

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVE_LIMIT, THREEFOLD_REPETITION_COUNT};
use crate::game_state::chess_types::{
    square_col, square_row, Board, CastlingRights, Color, EndReason, GameResult, Piece, PieceKind,
    Square,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

/// Classify a fully-derived snapshot. Order matters: mate/stalemate come
/// from the empty move set, then insufficient material, the fifty-move
/// threshold, and threefold repetition; the first match wins.
pub fn classify_position(game_state: &GameState) -> (GameResult, Option<EndReason>) {
    if game_state.legal_moves.is_empty() {
        if game_state.in_check {
            let winner = match game_state.side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            };
            return (winner, Some(EndReason::Checkmate));
        }
        return (GameResult::Draw, Some(EndReason::Stalemate));
    }

    if has_insufficient_material(&game_state.board) {
        return (GameResult::Draw, Some(EndReason::InsufficientMaterial));
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return (GameResult::Draw, Some(EndReason::FiftyMoveRule));
    }

    if let Some(current_key) = game_state.position_history.last() {
        let occurrences = game_state
            .position_history
            .iter()
            .filter(|key| *key == current_key)
            .count();
        if occurrences >= THREEFOLD_REPETITION_COUNT {
            return (GameResult::Draw, Some(EndReason::ThreefoldRepetition));
        }
    }

    (GameResult::Ongoing, None)
}

/// Checkmate = in check with no legal move. Pure query over the tuple.
pub fn is_checkmate(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    is_king_in_check(board, side)
        && generate_all_legal_moves(board, side, rights, en_passant).is_empty()
}

/// Stalemate = not in check with no legal move.
pub fn is_stalemate(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    !is_king_in_check(board, side)
        && generate_all_legal_moves(board, side, rights, en_passant).is_empty()
}

/// Draw by insufficient material: bare kings, a lone minor piece, or one
/// bishop each on same-colored squares.
///
/// Deliberately conservative relative to full dead-position theory: two
/// knights against a lone king, for example, is not claimed.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut extras: Vec<(Square, Piece)> = Vec::new();

    for square in 0..64u8 {
        let Some(piece) = board[square as usize] else {
            continue;
        };
        if piece.kind == PieceKind::King {
            continue;
        }
        extras.push((square, piece));
        if extras.len() > 2 {
            return false;
        }
    }

    match extras.as_slice() {
        [] => true,
        [(_, piece)] => matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop),
        [(first_sq, first), (second_sq, second)] => {
            first.kind == PieceKind::Bishop
                && second.kind == PieceKind::Bishop
                && first.color != second.color
                && square_shade(*first_sq) == square_shade(*second_sq)
        }
        _ => false,
    }
}

#[inline]
fn square_shade(square: Square) -> u8 {
    (square_col(square) + square_row(square)) % 2
}

#[cfg(test)]
mod tests {
    use super::{has_insufficient_material, is_checkmate, is_stalemate};
    use crate::game_state::chess_types::{EndReason, GameResult};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;

    fn board_of(fen: &str) -> crate::game_state::chess_types::Board {
        GameState::from_fen(fen).expect("valid test FEN").board
    }

    #[test]
    fn bare_kings_are_insufficient() {
        assert!(has_insufficient_material(&board_of("4k3/8/8/8/8/8/8/4K3 w - - 0 1")));
    }

    #[test]
    fn a_single_minor_piece_is_insufficient() {
        assert!(has_insufficient_material(&board_of("4k3/8/8/8/8/2N5/8/4K3 w - - 0 1")));
        assert!(has_insufficient_material(&board_of("4k3/8/8/8/8/2b5/8/4K3 w - - 0 1")));
    }

    #[test]
    fn same_shade_bishops_draw_but_opposite_shades_do_not() {
        // c1 and f8 are both dark squares.
        assert!(has_insufficient_material(&board_of("5b2/4k3/8/8/8/8/8/2B1K3 w - - 0 1")));
        // c1 is dark, f7 is light.
        assert!(!has_insufficient_material(&board_of("8/4kb2/8/8/8/8/8/2B1K3 w - - 0 1")));
    }

    #[test]
    fn a_rook_or_pawn_is_always_sufficient() {
        assert!(!has_insufficient_material(&board_of("4k3/8/8/8/8/2R5/8/4K3 w - - 0 1")));
        assert!(!has_insufficient_material(&board_of("4k3/8/8/8/8/2P5/8/4K3 w - - 0 1")));
    }

    #[test]
    fn two_knights_are_not_claimed_as_a_draw() {
        assert!(!has_insufficient_material(&board_of("4k3/8/8/8/8/1NN5/8/4K3 w - - 0 1")));
    }

    #[test]
    fn capture_down_to_bare_kings_draws_immediately() {
        // White king takes the last pawn.
        let game = GameState::from_fen("8/8/8/4p3/4K3/8/8/4k3 w - - 0 1").expect("valid FEN");
        let capture = *game
            .legal_moves
            .iter()
            .find(|m| m.to == 28)
            .expect("king can take e5");
        let after = apply_move(&game, &capture).expect("legal move applies");
        assert_eq!(after.result, GameResult::Draw);
        assert_eq!(after.end_reason, Some(EndReason::InsufficientMaterial));
    }

    #[test]
    fn classic_stalemate_corner_is_recognized() {
        let stalemated = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid FEN");
        assert!(is_stalemate(
            &stalemated.board,
            stalemated.side_to_move,
            stalemated.castling_rights,
            None,
        ));
        assert_eq!(stalemated.result, GameResult::Draw);
        assert_eq!(stalemated.end_reason, Some(EndReason::Stalemate));
        assert!(!is_checkmate(
            &stalemated.board,
            stalemated.side_to_move,
            stalemated.castling_rights,
            None,
        ));
    }

    #[test]
    fn fifty_move_threshold_draws_and_a_capture_resets_it() {
        // One ply short of the limit; a quiet rook move crosses it.
        let game = GameState::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 99 80").expect("valid FEN");
        let quiet = *game
            .legal_moves
            .iter()
            .find(|m| m.from == 48 && m.to == 40)
            .expect("quiet rook move");
        let drawn = apply_move(&game, &quiet).expect("legal move applies");
        assert_eq!(drawn.halfmove_clock, 100);
        assert_eq!(drawn.result, GameResult::Draw);
        assert_eq!(drawn.end_reason, Some(EndReason::FiftyMoveRule));

        // Same position but with a black pawn the rook can take: the
        // capture resets the clock and the game continues.
        let game = GameState::from_fen("4k3/8/8/8/8/p7/R7/4K3 w - - 99 80").expect("valid FEN");
        let capture = *game
            .legal_moves
            .iter()
            .find(|m| m.from == 48 && m.to == 40)
            .expect("rook takes a3");
        let after = apply_move(&game, &capture).expect("legal move applies");
        assert_eq!(after.halfmove_clock, 0);
        assert_eq!(after.result, GameResult::Ongoing);
    }

    #[test]
    fn knight_shuffle_triggers_threefold_repetition() {
        let mut game = GameState::new_game();
        let tour = [
            (62u8, 45u8), // Ng1-f3
            (6, 21),      // Ng8-f6
            (45, 62),     // Nf3-g1
            (21, 6),      // Nf6-g8  -> starting position, 2nd occurrence
            (62, 45),
            (6, 21),
            (45, 62),
            (21, 6), // -> starting position, 3rd occurrence
        ];
        for (index, (from, to)) in tour.into_iter().enumerate() {
            let chosen = *game
                .legal_moves
                .iter()
                .find(|m| m.from == from && m.to == to)
                .expect("knight shuffle move is legal");
            game = apply_move(&game, &chosen).expect("legal move applies");
            if index < tour.len() - 1 {
                assert_eq!(game.result, GameResult::Ongoing);
            }
        }
        assert_eq!(game.result, GameResult::Draw);
        assert_eq!(game.end_reason, Some(EndReason::ThreefoldRepetition));
    }
}
