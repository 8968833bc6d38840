use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

/// Pushes first (single then double), then diagonal captures west to east.
///
/// A blocked single push also blocks the double push. Diagonals are captures
/// onto enemy pieces, or onto an empty en-passant target when `side` is the
/// side to move. Anything landing on the last rank is flagged as a promotion.
pub fn generate_pawn_moves(
    tables: &AttackTables,
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<Move>,
) {
    let last_rank = side.promotion_rank();

    for &to in tables.pawn_pushes(side, from) {
        if !game_state.piece_on(to).is_empty() {
            break;
        }

        let mv = if from.abs_diff(to) == 16 {
            Move::double_pawn_push(from, to)
        } else {
            Move::new(from, to)
        };
        out.push(mv.with_promotion(to / 8 == last_rank));
    }

    for &to in tables.pawn_attacks(side, from) {
        if game_state.piece_on(to).is_color(side.opposite()) {
            out.push(Move::new(from, to).with_promotion(to / 8 == last_rank));
        } else if side == game_state.side_to_move
            && game_state.en_passant_square == Some(to)
            && game_state.piece_on(to).is_empty()
        {
            out.push(Move::en_passant(from, to));
        }
    }
}
