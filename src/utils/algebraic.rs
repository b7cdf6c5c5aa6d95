//! Square/coordinate-text conversions.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and square
//! indices in the row-0-is-rank-8 layout, reused by the FEN and move-text
//! components.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{square_col, square_row, Square};

/// Convert a coordinate (for example `"e4"`) to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let col = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to coordinate text.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(format!("index {square}")));
    }

    let file_char = char::from(b'a' + square_col(square));
    let rank_char = char::from(b'8' - square_row(square));
    Ok(format!("{file_char}{rank_char}"))
}
