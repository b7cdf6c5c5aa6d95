use crate::game_state::chess_types::{Color, Square};

/// Squares a white pawn on the indexed square attacks. White pawns advance
/// toward row 0 (rank 8), so attacks sit one row above the pawn.
pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();

/// Squares a black pawn on the indexed square attacks (toward row 7).
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Forward step for a pawn of `color`: -8 toward rank 8 for White, +8 for
/// Black in the row-0-is-rank-8 layout.
#[inline]
pub const fn pawn_forward_offset(color: Color) -> i8 {
    match color {
        Color::White => -8,
        Color::Black => 8,
    }
}

/// Row a pawn of `color` starts on (rank 2 for White, rank 7 for Black).
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn pawn_promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row > 0 {
            if col > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if col < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut attacks = 0u64;

        if row < 7 {
            if col > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if col < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
