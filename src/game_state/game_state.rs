//! The immutable position snapshot.
//!
//! `GameState` is the central model: board, mover, castling flags, clocks,
//! repetition history, and the derived fields (check flag, cached legal
//! moves, terminal result) computed once at construction. A snapshot is
//! never edited afterwards — `apply_move` supersedes it with a fresh value,
//! which is what makes repetition bookkeeping and replay trustworthy.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{
    Board, CastlingRights, Color, EndReason, GameResult, Square,
};
use crate::game_state::position_key::generate_position_key;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::move_generation::terminal_checks::classify_position;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Board and mover ---
    pub board: Board,
    pub side_to_move: Color,
    pub last_move: Option<Move>,

    // --- Rule-relevant side information ---
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Repetition support ---
    pub position_history: Vec<String>,

    // --- Derived at construction, never mutated ---
    pub result: GameResult,
    pub end_reason: Option<EndReason>,
    pub in_check: bool,
    pub legal_moves: Vec<Move>,
}

impl GameState {
    /// Starting position, White to move, legal moves eagerly cached.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Build a snapshot from a FEN string, deriving check flag, legal
    /// moves, and terminal classification. The position's own key seeds
    /// the repetition history.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let parsed = parse_fen(fen)?;

        let key = generate_position_key(
            &parsed.board,
            parsed.side_to_move,
            parsed.castling_rights,
            parsed.en_passant_square,
        );
        let in_check = is_king_in_check(&parsed.board, parsed.side_to_move);
        let legal_moves = generate_all_legal_moves(
            &parsed.board,
            parsed.side_to_move,
            parsed.castling_rights,
            parsed.en_passant_square,
        );

        let mut game_state = GameState {
            board: parsed.board,
            side_to_move: parsed.side_to_move,
            last_move: None,
            castling_rights: parsed.castling_rights,
            en_passant_square: parsed.en_passant_square,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
            position_history: vec![key],
            result: GameResult::Ongoing,
            end_reason: None,
            in_check,
            legal_moves,
        };

        let (result, end_reason) = classify_position(&game_state);
        game_state.result = result;
        game_state.end_reason = end_reason;

        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, GameResult};

    #[test]
    fn new_game_caches_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.legal_moves.len(), 20);
        assert_eq!(game.result, GameResult::Ongoing);
        assert!(game.end_reason.is_none());
        assert!(!game.in_check);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn history_is_seeded_with_the_initial_key() {
        let game = GameState::new_game();
        assert_eq!(game.position_history.len(), 1);
        assert!(game.position_history[0].starts_with("rnbqkbnr/"));
    }

    #[test]
    fn fen_round_trips_through_the_snapshot() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn a_loaded_mate_position_is_classified_at_construction() {
        // Back-rank mate, Black to move.
        let mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("valid FEN");
        assert!(mated.in_check);
        assert!(mated.legal_moves.is_empty());
        assert_eq!(mated.result, GameResult::WhiteWins);
    }
}
