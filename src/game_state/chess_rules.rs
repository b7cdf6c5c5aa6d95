//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the starting position FEN, the king/rook
//! home squares that own the castling flags, the squares castling moves
//! travel through, and the draw thresholds.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Home squares in the row-0-is-rank-8 layout.
pub const WHITE_KING_HOME: Square = 60; // e1
pub const WHITE_ROOK_A_HOME: Square = 56; // a1
pub const WHITE_ROOK_H_HOME: Square = 63; // h1
pub const BLACK_KING_HOME: Square = 4; // e8
pub const BLACK_ROOK_A_HOME: Square = 0; // a8
pub const BLACK_ROOK_H_HOME: Square = 7; // h8

// King destination squares for the four castling moves.
pub const WHITE_KINGSIDE_CASTLE_TO: Square = 62; // g1
pub const WHITE_QUEENSIDE_CASTLE_TO: Square = 58; // c1
pub const BLACK_KINGSIDE_CASTLE_TO: Square = 6; // g8
pub const BLACK_QUEENSIDE_CASTLE_TO: Square = 2; // c8

/// Plies since the last pawn move or capture at which the fifty-move rule
/// draws the game (50 full moves per side).
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Total occurrences of one position key that constitute a repetition draw.
pub const THREEFOLD_REPETITION_COUNT: usize = 3;
