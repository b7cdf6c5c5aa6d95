//! Deterministic position identity for repetition bookkeeping.
//!
//! The key is the first four FEN fields — board layout, side to move,
//! castling rights, en passant target — so two positions compare equal
//! exactly when the repetition rule considers them the same. Clocks are
//! deliberately excluded.

use crate::game_state::chess_types::{
    piece_fen_char, square_col, square_row, Board, CastlingRights, Color, Square,
};

pub fn generate_position_key(
    board: &Board,
    side_to_move: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
) -> String {
    format!(
        "{} {} {} {}",
        board_field(board),
        match side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        },
        castling_field(rights),
        en_passant_field(en_passant),
    )
}

/// FEN board layout: rank 8 first, which is row 0 in this index scheme.
pub fn board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8usize {
        let mut empty_count = 0u8;

        for col in 0..8usize {
            let sq = row * 8 + col;
            if let Some(piece) = board[sq] {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.kingside_available(Color::White) {
        out.push('K');
    }
    if rights.queenside_available(Color::White) {
        out.push('Q');
    }
    if rights.kingside_available(Color::Black) {
        out.push('k');
    }
    if rights.queenside_available(Color::Black) {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

pub fn en_passant_field(en_passant: Option<Square>) -> String {
    match en_passant {
        Some(square) => {
            let file = char::from(b'a' + square_col(square));
            let rank = char::from(b'8' - square_row(square));
            format!("{file}{rank}")
        }
        None => "-".to_owned(),
    }
}
