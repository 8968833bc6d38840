use crate::game_state::chess_types::{Color, Square};
use crate::moves::attack_tables::TargetList;

/// Forward targets: one square always, a second from the starting rank.
/// Pawns on their last rank have no pushes.
pub const fn pawn_push_targets(color: Color, square: Square) -> TargetList {
    let rank = square / 8;
    let targets = TargetList::EMPTY;

    if rank == color.promotion_rank() {
        return targets;
    }

    match color {
        Color::Light => {
            let targets = targets.with(square + 8);
            if rank == color.pawn_start_rank() {
                targets.with(square + 16)
            } else {
                targets
            }
        }
        Color::Dark => {
            let targets = targets.with(square - 8);
            if rank == color.pawn_start_rank() {
                targets.with(square - 16)
            } else {
                targets
            }
        }
    }
}

/// Diagonal capture targets, west side first.
pub const fn pawn_attack_targets(color: Color, square: Square) -> TargetList {
    let file = square % 8;
    let rank = square / 8;
    let mut targets = TargetList::EMPTY;

    if rank == color.promotion_rank() {
        return targets;
    }

    match color {
        Color::Light => {
            if file > 0 {
                targets = targets.with(square + 7);
            }
            if file < 7 {
                targets = targets.with(square + 9);
            }
        }
        Color::Dark => {
            if file > 0 {
                targets = targets.with(square - 9);
            }
            if file < 7 {
                targets = targets.with(square - 7);
            }
        }
    }

    targets
}
