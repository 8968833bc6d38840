//! King step targets.
//!
//! Computed by bounding file/rank arithmetic so a king on the a- or h-file
//! never wraps to the opposite edge.

use crate::game_state::chess_types::Square;
use crate::moves::attack_tables::TargetList;
use crate::moves::knight_moves::push_if_valid;

pub const fn king_targets(square: Square) -> TargetList {
    let file = (square % 8) as i32;
    let rank = (square / 8) as i32;
    let mut targets = TargetList::EMPTY;

    targets = push_if_valid(targets, file - 1, rank - 1);
    targets = push_if_valid(targets, file, rank - 1);
    targets = push_if_valid(targets, file + 1, rank - 1);
    targets = push_if_valid(targets, file - 1, rank);
    targets = push_if_valid(targets, file + 1, rank);
    targets = push_if_valid(targets, file - 1, rank + 1);
    targets = push_if_valid(targets, file, rank + 1);
    targets = push_if_valid(targets, file + 1, rank + 1);

    targets
}
