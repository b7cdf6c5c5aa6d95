//! Long algebraic move text ("e2e4", "e7e8q").
//!
//! Text-to-move resolution goes through the position's legal move list,
//! so the returned move carries the correct castling/en-passant flags.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(chess_move: Move) -> Result<String, ChessError> {
    let mut text = square_to_algebraic(chess_move.from)?;
    text.push_str(&square_to_algebraic(chess_move.to)?);
    if let Some(kind) = chess_move.promotion {
        text.push(promotion_char(kind)?);
    }
    Ok(text)
}

/// Resolves move text against the position's legal moves.
pub fn long_algebraic_to_move(
    game_state: &GameState,
    text: &str,
) -> Result<Move, ChessError> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let to = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(&ch) => Some(
            promotion_kind(ch).ok_or_else(|| ChessError::InvalidMoveText(text.to_owned()))?,
        ),
    };

    game_state
        .legal_moves
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
        .ok_or_else(|| ChessError::NoMatchingLegalMove(text.to_owned()))
}

fn promotion_char(kind: PieceKind) -> Result<char, ChessError> {
    match kind {
        PieceKind::Queen => Ok('q'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Knight => Ok('n'),
        PieceKind::Pawn | PieceKind::King => {
            Err(ChessError::InvalidMoveText(format!("promotion to {kind:?}")))
        }
    }
}

fn promotion_kind(ch: u8) -> Option<PieceKind> {
    match ch {
        b'q' => Some(PieceKind::Queen),
        b'r' => Some(PieceKind::Rook),
        b'b' => Some(PieceKind::Bishop),
        b'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
