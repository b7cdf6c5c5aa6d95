//! Core value types for the rules engine.
//!
//! A position is a mailbox board of 64 optional pieces plus the rule-relevant
//! side information. Index = `row * 8 + col` where row 0 is rank 8 (Black's
//! back rank), row 7 is rank 1, and col 0 is file a; so e2 = 52 and e4 = 36.

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Promotion choices, in the order the generator emits them.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One piece on the board. Immutable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

/// Board square index (`0..=63`), 0 = a8.
pub type Square = u8;

/// Mailbox board: at most one piece per index.
pub type Board = [Option<Piece>; 64];

/// An empty board, the starting point for FEN parsing and test setups.
pub const EMPTY_BOARD: Board = [None; 64];

#[inline]
pub const fn square_col(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_row(square: Square) -> u8 {
    square / 8
}

/// The six castling moved-flags bundled into one named value so they travel
/// together instead of as positional booleans. Every flag is monotone: once
/// set it is never cleared for the rest of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_moved: bool,
    pub white_rook_a_moved: bool,
    pub white_rook_h_moved: bool,
    pub black_king_moved: bool,
    pub black_rook_a_moved: bool,
    pub black_rook_h_moved: bool,
}

impl CastlingRights {
    /// Fresh game: no king or rook has moved yet.
    #[inline]
    pub const fn initial() -> Self {
        CastlingRights {
            white_king_moved: false,
            white_rook_a_moved: false,
            white_rook_h_moved: false,
            black_king_moved: false,
            black_rook_a_moved: false,
            black_rook_h_moved: false,
        }
    }

    /// All rights gone, the starting point when parsing a FEN rights field.
    #[inline]
    pub const fn none() -> Self {
        CastlingRights {
            white_king_moved: true,
            white_rook_a_moved: true,
            white_rook_h_moved: true,
            black_king_moved: true,
            black_rook_a_moved: true,
            black_rook_h_moved: true,
        }
    }

    #[inline]
    pub const fn kingside_available(self, color: Color) -> bool {
        match color {
            Color::White => !self.white_king_moved && !self.white_rook_h_moved,
            Color::Black => !self.black_king_moved && !self.black_rook_h_moved,
        }
    }

    #[inline]
    pub const fn queenside_available(self, color: Color) -> bool {
        match color {
            Color::White => !self.white_king_moved && !self.white_rook_a_moved,
            Color::Black => !self.black_king_moved && !self.black_rook_a_moved,
        }
    }

    /// Set the flag owned by `square` if it is a king or rook home square.
    ///
    /// Called for both endpoints of every move: the from-square covers the
    /// piece moving away, the to-square covers a rook captured in place.
    pub fn mark_square_touched(&mut self, square: Square) {
        use crate::game_state::chess_rules::{
            BLACK_KING_HOME, BLACK_ROOK_A_HOME, BLACK_ROOK_H_HOME, WHITE_KING_HOME,
            WHITE_ROOK_A_HOME, WHITE_ROOK_H_HOME,
        };

        match square {
            WHITE_KING_HOME => self.white_king_moved = true,
            WHITE_ROOK_A_HOME => self.white_rook_a_moved = true,
            WHITE_ROOK_H_HOME => self.white_rook_h_moved = true,
            BLACK_KING_HOME => self.black_king_moved = true,
            BLACK_ROOK_A_HOME => self.black_rook_a_moved = true,
            BLACK_ROOK_H_HOME => self.black_rook_h_moved = true,
            _ => {}
        }
    }
}

/// Overall game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

/// Why a finished game ended. Always present when the result is not
/// [`GameResult::Ongoing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

/// FEN character for a piece, via the white-piece letter lookup.
pub const fn piece_fen_char(piece: Piece) -> char {
    const WHITE_LETTERS: [char; 6] = ['P', 'N', 'B', 'R', 'Q', 'K'];
    let white = WHITE_LETTERS[piece.kind.index()];
    match piece.color {
        Color::White => white,
        Color::Black => white.to_ascii_lowercase(),
    }
}

/// Inverse of [`piece_fen_char`]: uppercase = White, lowercase = Black.
pub fn piece_from_fen_char(value: char) -> Option<Piece> {
    let color = if value.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match value.to_ascii_uppercase() {
        'P' => PieceKind::Pawn,
        'N' => PieceKind::Knight,
        'B' => PieceKind::Bishop,
        'R' => PieceKind::Rook,
        'Q' => PieceKind::Queen,
        'K' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}
