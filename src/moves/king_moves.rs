use crate::game_state::chess_types::Square;

/// Per-square king adjacency sets, one bit per reachable square.
pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square as usize]
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut targets = 0u64;

        targets |= set_if_valid(col - 1, row - 1);
        targets |= set_if_valid(col, row - 1);
        targets |= set_if_valid(col + 1, row - 1);
        targets |= set_if_valid(col - 1, row);
        targets |= set_if_valid(col + 1, row);
        targets |= set_if_valid(col - 1, row + 1);
        targets |= set_if_valid(col, row + 1);
        targets |= set_if_valid(col + 1, row + 1);

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn set_if_valid(col: i32, row: i32) -> u64 {
    if col < 0 || col > 7 || row < 0 || row > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}
