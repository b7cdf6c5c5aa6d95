//! Perft node counting for move-generation validation.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf moves by
//! kind. Recursion runs on the raw board fields rather than full
//! snapshots, so no position keys or terminal classification get in the
//! way of the counts.

use crate::game_state::chess_types::{Board, CastlingRights, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut counts = PerftCounts::default();
    perft_recurse(
        &game_state.board,
        game_state.side_to_move,
        game_state.castling_rights,
        game_state.en_passant_square,
        depth,
        &mut counts,
    );
    counts
}

fn perft_recurse(
    board: &Board,
    side: Color,
    rights: CastlingRights,
    en_passant: Option<Square>,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generate_all_legal_moves(board, side, rights, en_passant);

    if depth == 1 {
        for chess_move in &moves {
            tally_leaf(board, chess_move, counts);
        }
        return;
    }

    for chess_move in &moves {
        let next_board = apply_move_to_board(board, chess_move);

        let mut next_rights = rights;
        next_rights.mark_square_touched(chess_move.from);
        next_rights.mark_square_touched(chess_move.to);

        let next_en_passant = double_push_target(board, chess_move);

        perft_recurse(
            &next_board,
            side.opposite(),
            next_rights,
            next_en_passant,
            depth - 1,
            counts,
        );
    }
}

fn tally_leaf(board: &Board, chess_move: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if board[chess_move.to as usize].is_some() || chess_move.is_en_passant {
        counts.captures += 1;
    }
    if chess_move.is_en_passant {
        counts.en_passant += 1;
    }
    if chess_move.is_castling {
        counts.castles += 1;
    }
    if chess_move.promotion.is_some() {
        counts.promotions += 1;
    }
}

fn double_push_target(board: &Board, chess_move: &Move) -> Option<Square> {
    let piece = board[chess_move.from as usize]?;
    if piece.kind == PieceKind::Pawn && chess_move.from.abs_diff(chess_move.to) == 16 {
        Some((chess_move.from + chess_move.to) / 2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);
        assert_eq!(perft(&game, 3).nodes, 8902);
    }

    #[test]
    fn starting_position_shallow_counts_have_no_specials() {
        let game = GameState::new_game();
        let counts = perft(&game, 2);
        assert_eq!(counts.captures, 0);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.castles, 0);
        assert_eq!(counts.promotions, 0);
    }

    #[test]
    fn castling_rich_position_node_counts() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("position parses");

        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        assert_eq!(perft(&game, 2).nodes, 2039);
    }

    #[test]
    fn endgame_position_node_counts() {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("position parses");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);
        assert_eq!(perft(&game, 3).nodes, 2812);
    }
}
