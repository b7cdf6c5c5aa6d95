//! Position-to-FEN serializer.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::position_key::{board_field, castling_field, en_passant_field};

/// Renders the full six-field FEN string for a snapshot.
pub fn generate_fen(game_state: &GameState) -> String {
    let side = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    format!(
        "{} {} {} {} {} {}",
        board_field(&game_state.board),
        side,
        castling_field(game_state.castling_rights),
        en_passant_field(game_state.en_passant_square),
        game_state.halfmove_clock,
        game_state.fullmove_number,
    )
}
