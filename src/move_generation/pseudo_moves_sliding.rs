//! Rook, bishop and queen rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{slide_directions, DIRECTION_OFFSETS};

/// Walk each permitted ray up to the board edge. A friendly piece ends the
/// ray before its square; an enemy piece ends it after being captured.
pub fn generate_sliding_moves(
    tables: &AttackTables,
    game_state: &GameState,
    side: Color,
    from: Square,
    kind: PieceKind,
    out: &mut Vec<Move>,
) {
    for direction in slide_directions(kind) {
        let offset = DIRECTION_OFFSETS[direction];

        for step in 1..=i32::from(tables.edge_distance(from, direction)) {
            let to = (i32::from(from) + offset * step) as Square;
            let target = game_state.piece_on(to);

            if target.is_color(side) {
                break;
            }

            out.push(Move::new(from, to));

            if !target.is_empty() {
                break;
            }
        }
    }
}
