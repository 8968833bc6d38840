//! Knight and king moves: one hop to every precomputed target that does not
//! hold a friendly piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(
    tables: &AttackTables,
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<Move>,
) {
    push_step_moves(tables.knight_targets(from), game_state, side, from, out);
}

/// Plain king steps. Castling is evaluated separately by the legality filter.
pub fn generate_king_moves(
    tables: &AttackTables,
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<Move>,
) {
    push_step_moves(tables.king_targets(from), game_state, side, from, out);
}

#[inline]
fn push_step_moves(
    targets: &[Square],
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<Move>,
) {
    out.extend(
        targets
            .iter()
            .filter(|&&to| !game_state.piece_on(to).is_color(side))
            .map(|&to| Move::new(from, to)),
    );
}
