//! FEN-to-position parser.
//!
//! Parses the six Forsyth-Edwards Notation fields into the core state
//! fields; derived values (check flag, legal moves, history) are computed
//! by `GameState::from_fen` on top of this.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{
    piece_from_fen_char, Board, CastlingRights, Color, Square, EMPTY_BOARD,
};
use crate::utils::algebraic::algebraic_to_square;

/// The six FEN fields, parsed but not yet derived into a full snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing en-passant square".to_owned()))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing halfmove clock".to_owned()))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing fullmove number".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    Ok(ParsedFen {
        board: parse_board(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_square: parse_en_passant_square(en_passant_part)?,
        halfmove_clock: halfmove_part
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("halfmove clock: {halfmove_part}")))?,
        fullmove_number: fullmove_part
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("fullmove number: {fullmove_part}")))?,
    })
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = EMPTY_BOARD;

    // FEN lists rank 8 first, which is row 0 in this index scheme.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("piece character '{ch}' in board layout"))
            })?;

            if col >= 8 {
                return Err(ChessError::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            board[row * 8 + col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(CastlingRights::none());
    }

    let mut rights = CastlingRights::none();

    for ch in castling_part.chars() {
        match ch {
            'K' => {
                rights.white_king_moved = false;
                rights.white_rook_h_moved = false;
            }
            'Q' => {
                rights.white_king_moved = false;
                rights.white_rook_a_moved = false;
            }
            'k' => {
                rights.black_king_moved = false;
                rights.black_rook_h_moved = false;
            }
            'q' => {
                rights.black_king_moved = false;
                rights.black_rook_a_moved = false;
            }
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
