//! Full legal move generation pipeline.
//!
//! Aggregates piece-wise pseudo-legal generation, simulates each candidate
//! on a scratch board with the same transform the state transition uses,
//! and keeps only moves that leave the mover's own king unattacked.

use crate::game_state::chess_types::{Board, CastlingRights, Color, Square};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Candidate moves that obey piece geometry but may expose the own king.
pub fn generate_pseudo_legal_moves(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);

    generate_pawn_moves(board, side, en_passant, &mut pseudo);
    generate_knight_moves(board, side, &mut pseudo);
    generate_bishop_moves(board, side, &mut pseudo);
    generate_rook_moves(board, side, &mut pseudo);
    generate_queen_moves(board, side, &mut pseudo);
    generate_king_moves(board, side, rights, &mut pseudo);

    pseudo
}

/// The legal-move set for `(board, side, rights, en_passant)`.
///
/// Simulate-then-check is the single correctness gate; there is no pin
/// shortcut, every candidate is vetted the same way.
pub fn generate_all_legal_moves(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> Vec<Move> {
    generate_pseudo_legal_moves(board, side, rights, en_passant)
        .into_iter()
        .filter(|candidate| {
            let scratch = apply_move_to_board(board, candidate);
            !is_king_in_check(&scratch, side)
        })
        .collect()
}
