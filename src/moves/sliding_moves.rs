//! Ray geometry for rooks, bishops and queens.

use crate::game_state::chess_types::{PieceKind, Square};

pub const NORTH: usize = 0;
pub const SOUTH: usize = 1;
pub const EAST: usize = 2;
pub const WEST: usize = 3;
pub const NORTH_EAST: usize = 4;
pub const NORTH_WEST: usize = 5;
pub const SOUTH_EAST: usize = 6;
pub const SOUTH_WEST: usize = 7;

/// Square-index step for each ray, in direction-index order.
pub const DIRECTION_OFFSETS: [i32; 8] = [8, -8, 1, -1, 9, 7, -7, -9];

/// Directions a sliding piece may travel: rooks use 0..4, bishops 4..8 and
/// queens all eight. Non-sliding pieces get an empty range.
#[inline]
pub const fn slide_directions(kind: PieceKind) -> std::ops::Range<usize> {
    match kind {
        PieceKind::Rook => NORTH..NORTH_EAST,
        PieceKind::Bishop => NORTH_EAST..8,
        PieceKind::Queen => NORTH..8,
        _ => 0..0,
    }
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

pub const fn squares_to_edge(square: Square) -> [u8; 8] {
    let file = square % 8;
    let rank = square / 8;

    let north = 7 - rank;
    let south = rank;
    let east = 7 - file;
    let west = file;

    let mut distances = [0u8; 8];
    distances[NORTH] = north;
    distances[SOUTH] = south;
    distances[EAST] = east;
    distances[WEST] = west;
    distances[NORTH_EAST] = min(north, east);
    distances[NORTH_WEST] = min(north, west);
    distances[SOUTH_EAST] = min(south, east);
    distances[SOUTH_WEST] = min(south, west);
    distances
}
