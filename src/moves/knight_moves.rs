use crate::game_state::chess_types::Square;
use crate::moves::attack_tables::TargetList;

/// Knight targets from `square`, clockwise from north-north-east.
pub const fn knight_targets(square: Square) -> TargetList {
    let file = (square % 8) as i32;
    let rank = (square / 8) as i32;
    let mut targets = TargetList::EMPTY;

    targets = push_if_valid(targets, file + 1, rank + 2);
    targets = push_if_valid(targets, file + 2, rank + 1);
    targets = push_if_valid(targets, file + 2, rank - 1);
    targets = push_if_valid(targets, file + 1, rank - 2);
    targets = push_if_valid(targets, file - 1, rank - 2);
    targets = push_if_valid(targets, file - 2, rank - 1);
    targets = push_if_valid(targets, file - 2, rank + 1);
    targets = push_if_valid(targets, file - 1, rank + 2);

    targets
}

pub(crate) const fn push_if_valid(targets: TargetList, file: i32, rank: i32) -> TargetList {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return targets;
    }

    targets.with((rank * 8 + file) as Square)
}
