use crate::game_state::chess_types::{
    square_row, Board, Color, PieceKind, Square, PROMOTION_CHOICES,
};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{
    pawn_attacks, pawn_forward_offset, pawn_promotion_row, pawn_start_row,
};

pub fn generate_pawn_moves(
    board: &Board,
    side: Color,
    en_passant: Option<Square>,
    out: &mut Vec<Move>,
) {
    let forward = pawn_forward_offset(side);
    let start_row = pawn_start_row(side);
    let promotion_row = pawn_promotion_row(side);

    for from in 0..64u8 {
        let Some(piece) = board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Pawn {
            continue;
        }

        // Single and double pushes.
        let one_step = from as i16 + forward as i16;
        if (0..64).contains(&one_step) {
            let to = one_step as Square;
            if board[to as usize].is_none() {
                push_pawn_move(from, to, promotion_row, out);

                if square_row(from) == start_row {
                    let two_step = (one_step + forward as i16) as Square;
                    if board[two_step as usize].is_none() {
                        out.push(Move::simple(from, two_step));
                    }
                }
            }
        }

        // Diagonal captures and en passant.
        let mut attack_targets = pawn_attacks(side, from);
        while attack_targets != 0 {
            let to = attack_targets.trailing_zeros() as Square;
            attack_targets &= attack_targets - 1;

            match board[to as usize] {
                Some(target) if target.color != side => {
                    push_pawn_move(from, to, promotion_row, out);
                }
                None if en_passant == Some(to) => {
                    // The captured pawn sits directly behind the target.
                    let captured_square = (to as i16 - forward as i16) as Square;
                    out.push(Move::en_passant(from, to, captured_square));
                }
                _ => {}
            }
        }
    }
}

/// A pawn landing on the far rank yields one move per promotion choice,
/// never a single move with a default piece.
fn push_pawn_move(from: Square, to: Square, promotion_row: u8, out: &mut Vec<Move>) {
    if square_row(to) == promotion_row {
        for choice in PROMOTION_CHOICES {
            out.push(Move::promotion(from, to, choice));
        }
    } else {
        out.push(Move::simple(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, EMPTY_BOARD};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_has_sixteen_white_pawn_moves() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_pawn_moves(&game.board, Color::White, None, &mut moves);
        assert_eq!(moves.len(), 16);
    }

    #[test]
    fn promotion_push_emits_four_choices() {
        let mut board = EMPTY_BOARD;
        board[12] = Some(Piece::new(Color::White, PieceKind::Pawn)); // e7
        let mut moves = Vec::new();
        generate_pawn_moves(&board, Color::White, None, &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.from == 12 && m.to == 4));
        assert!(moves.iter().all(|m| m.promotion.is_some()));
    }

    #[test]
    fn en_passant_candidate_records_the_captured_pawn_square() {
        let mut board = EMPTY_BOARD;
        board[28] = Some(Piece::new(Color::White, PieceKind::Pawn)); // e5
        board[27] = Some(Piece::new(Color::Black, PieceKind::Pawn)); // d5
        let mut moves = Vec::new();
        // Black just played d7-d5; the skipped square d6 = 19 is capturable.
        generate_pawn_moves(&board, Color::White, Some(19), &mut moves);

        let ep = moves
            .iter()
            .find(|m| m.is_en_passant)
            .expect("en passant candidate generated");
        assert_eq!(ep.from, 28);
        assert_eq!(ep.to, 19);
        assert_eq!(ep.captured_square, Some(27));
    }
}
