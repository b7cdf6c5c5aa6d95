//! The board transform and the full state transition.
//!
//! `apply_move_to_board` is the single transform shared by the legality
//! filter (on a scratch board) and `apply_move` (for real). `apply_move`
//! rebuilds every derived field and returns a brand-new snapshot; the input
//! position is never touched.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_CASTLE_TO, BLACK_QUEENSIDE_CASTLE_TO, BLACK_ROOK_A_HOME, BLACK_ROOK_H_HOME,
    WHITE_KINGSIDE_CASTLE_TO, WHITE_QUEENSIDE_CASTLE_TO, WHITE_ROOK_A_HOME, WHITE_ROOK_H_HOME,
};
use crate::game_state::chess_types::{Board, Color, GameResult, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position_key::generate_position_key;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::move_generation::terminal_checks::classify_position;
use crate::moves::move_descriptions::Move;

/// Pure board transform: relocate the piece, remove an en-passant victim,
/// relocate the castling rook, substitute the promotion piece. A missing
/// from-square piece returns the board unchanged (degenerate input from a
/// scratch simulation).
pub fn apply_move_to_board(board: &Board, chess_move: &Move) -> Board {
    let mut next = *board;

    let Some(moving) = next[chess_move.from as usize] else {
        return next;
    };
    next[chess_move.from as usize] = None;

    if chess_move.is_en_passant {
        if let Some(captured_square) = chess_move.captured_square {
            next[captured_square as usize] = None;
        }
    }

    let placed = match chess_move.promotion {
        Some(kind) => Piece::new(moving.color, kind),
        None => moving,
    };
    next[chess_move.to as usize] = Some(placed);

    if chess_move.is_castling {
        let rook_relocation = match chess_move.to {
            WHITE_KINGSIDE_CASTLE_TO => Some((WHITE_ROOK_H_HOME, WHITE_KINGSIDE_CASTLE_TO - 1)),
            WHITE_QUEENSIDE_CASTLE_TO => Some((WHITE_ROOK_A_HOME, WHITE_QUEENSIDE_CASTLE_TO + 1)),
            BLACK_KINGSIDE_CASTLE_TO => Some((BLACK_ROOK_H_HOME, BLACK_KINGSIDE_CASTLE_TO - 1)),
            BLACK_QUEENSIDE_CASTLE_TO => Some((BLACK_ROOK_A_HOME, BLACK_QUEENSIDE_CASTLE_TO + 1)),
            _ => None,
        };
        if let Some((rook_from, rook_to)) = rook_relocation {
            let rook = next[rook_from as usize].take();
            next[rook_to as usize] = rook;
        }
    }

    next
}

/// The sole state-transition entry point.
///
/// Strict by choice: the move must come from the snapshot's own cached
/// `legal_moves`, and a finished game refuses further transitions.
pub fn apply_move(game_state: &GameState, chess_move: &Move) -> Result<GameState, ChessError> {
    if game_state.result != GameResult::Ongoing {
        return Err(ChessError::GameAlreadyOver);
    }
    if !game_state.legal_moves.contains(chess_move) {
        return Err(ChessError::IllegalMove(*chess_move));
    }

    // Membership above guarantees a piece on the from-square.
    let moving_kind = game_state.board[chess_move.from as usize]
        .map(|piece| piece.kind)
        .ok_or(ChessError::IllegalMove(*chess_move))?;
    let moving_color = game_state.side_to_move;
    let is_capture =
        game_state.board[chess_move.to as usize].is_some() || chess_move.is_en_passant;

    let mut next = game_state.clone();
    next.board = apply_move_to_board(&game_state.board, chess_move);

    // Monotone rights update: both endpoints of the move may spend a flag
    // (the piece moving away, or a rook captured in place).
    next.castling_rights.mark_square_touched(chess_move.from);
    next.castling_rights.mark_square_touched(chess_move.to);

    // The skipped square of a double push is capturable for exactly one ply.
    next.en_passant_square = if moving_kind == PieceKind::Pawn
        && chess_move.from.abs_diff(chess_move.to) == 16
    {
        Some((chess_move.from + chess_move.to) / 2)
    } else {
        None
    };

    if moving_kind == PieceKind::Pawn || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = moving_color.opposite();
    next.last_move = Some(*chess_move);

    let key = generate_position_key(
        &next.board,
        next.side_to_move,
        next.castling_rights,
        next.en_passant_square,
    );
    next.position_history.push(key);

    next.in_check = is_king_in_check(&next.board, next.side_to_move);
    next.legal_moves = generate_all_legal_moves(
        &next.board,
        next.side_to_move,
        next.castling_rights,
        next.en_passant_square,
    );

    let (result, end_reason) = classify_position(&next);
    next.result = result;
    next.end_reason = end_reason;

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, EndReason, GameResult, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    fn play(mut game: GameState, moves: &[(u8, u8)]) -> GameState {
        for &(from, to) in moves {
            let chosen = *game
                .legal_moves
                .iter()
                .find(|m| m.from == from && m.to == to)
                .unwrap_or_else(|| panic!("move {from}->{to} should be legal"));
            game = apply_move(&game, &chosen).expect("legal move applies");
        }
        game
    }

    #[test]
    fn e2_e4_flips_the_mover_and_sets_the_en_passant_target() {
        let game = play(GameState::new_game(), &[(52, 36)]);
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.en_passant_square, Some(44)); // e3
        assert!(!game.legal_moves.is_empty());
        assert_eq!(game.board[36], Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(game.board[52], None);
    }

    #[test]
    fn apply_move_is_referentially_transparent() {
        let game = GameState::new_game();
        let chosen = game.legal_moves[0];
        let once = apply_move(&game, &chosen).expect("legal move applies");
        let twice = apply_move(&game, &chosen).expect("legal move applies");
        assert_eq!(once, twice);
    }

    #[test]
    fn the_input_snapshot_is_never_mutated() {
        let game = GameState::new_game();
        let before = game.clone();
        let chosen = game.legal_moves[0];
        let _ = apply_move(&game, &chosen).expect("legal move applies");
        assert_eq!(game, before);
    }

    #[test]
    fn a_move_outside_the_legal_set_is_rejected() {
        let game = GameState::new_game();
        // e2-e5 is no pawn move at all.
        let bogus = Move::simple(52, 28);
        assert_eq!(
            apply_move(&game, &bogus),
            Err(ChessError::IllegalMove(bogus))
        );
    }

    #[test]
    fn fools_mate_ends_the_game_for_white() {
        // 1. f3 e5 2. g4 Qh4#
        let game = play(
            GameState::new_game(),
            &[(53, 45), (12, 28), (54, 38), (3, 39)],
        );
        assert_eq!(game.result, GameResult::BlackWins);
        assert_eq!(game.end_reason, Some(EndReason::Checkmate));
        assert!(game.in_check);
        assert!(game.legal_moves.is_empty());
        assert_eq!(
            apply_move(&game, &Move::simple(52, 44)),
            Err(ChessError::GameAlreadyOver)
        );
    }

    #[test]
    fn en_passant_removes_the_pawn_behind_the_target_square() {
        // 1. e4 a6 2. e5 d5 3. exd6 e.p.
        let game = play(
            GameState::new_game(),
            &[(52, 36), (8, 16), (36, 28), (11, 27)],
        );
        assert_eq!(game.en_passant_square, Some(19)); // d6

        let after = play(game, &[(28, 19)]);
        assert_eq!(after.board[19], Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(after.board[27], None, "captured pawn leaves d5");
        assert_eq!(after.halfmove_clock, 0, "en passant is a capture");
    }

    #[test]
    fn the_en_passant_window_lasts_exactly_one_ply() {
        let game = play(
            GameState::new_game(),
            &[(52, 36), (8, 16), (36, 28), (11, 27), (57, 42)],
        );
        assert_eq!(game.en_passant_square, None);
        assert!(!game.legal_moves.iter().any(|m| m.is_en_passant));
    }

    #[test]
    fn castling_relocates_the_rook_in_the_same_transition() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("valid test FEN");
        let kingside = *game
            .legal_moves
            .iter()
            .find(|m| m.is_castling && m.to == 62)
            .expect("kingside castle is legal");
        let after = apply_move(&game, &kingside).expect("legal move applies");

        assert_eq!(after.board[62], Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(after.board[61], Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(after.board[63], None);
        assert_eq!(after.board[60], None);
        assert!(after.castling_rights.white_king_moved);
    }

    #[test]
    fn capturing_a_rook_on_its_home_square_spends_the_flag() {
        // White bishop takes the h8 rook.
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/1B6/4K3 w kq - 0 1")
            .expect("valid test FEN");
        let capture = *game
            .legal_moves
            .iter()
            .find(|m| m.to == 7)
            .expect("bishop reaches h8");
        let after = apply_move(&game, &capture).expect("legal move applies");
        assert!(after.castling_rights.black_rook_h_moved);
        assert!(!after.castling_rights.black_rook_a_moved);
    }

    #[test]
    fn promotion_substitutes_the_chosen_piece() {
        let game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("valid test FEN");
        let choices: Vec<_> = game
            .legal_moves
            .iter()
            .filter(|m| m.from == 12 && m.to == 4)
            .collect();
        assert_eq!(choices.len(), 4, "one move per promotion piece");

        let underpromotion = **choices
            .iter()
            .find(|m| m.promotion == Some(PieceKind::Knight))
            .expect("knight choice present");
        let after = apply_move(&game, &underpromotion).expect("legal move applies");
        assert_eq!(after.board[4], Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(after.halfmove_clock, 0, "pawn move resets the clock");
    }

    #[test]
    fn fullmove_number_increments_after_blacks_move() {
        let game = play(GameState::new_game(), &[(52, 36)]);
        assert_eq!(game.fullmove_number, 1);
        let game = play(game, &[(12, 28)]);
        assert_eq!(game.fullmove_number, 2);
    }
}
