//! Precomputed board geometry.
//!
//! `AttackTables` bundles every per-square lookup the generator needs: knight
//! and king targets, distance to the edge along the eight rays, and pawn push
//! and capture targets per color. The tables never look at occupancy, so one
//! value is built up front and shared read-only by every engine.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_push_targets};
use crate::moves::sliding_moves::squares_to_edge;

/// Up to eight target squares for one origin square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetList {
    squares: [Square; 8],
    len: u8,
}

impl TargetList {
    pub const EMPTY: TargetList = TargetList {
        squares: [0; 8],
        len: 0,
    };

    #[inline]
    pub(crate) const fn with(mut self, square: Square) -> Self {
        self.squares[self.len as usize] = square;
        self.len += 1;
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTables {
    knight: [TargetList; 64],
    king: [TargetList; 64],
    edge_distance: [[u8; 8]; 64],
    // Indexed by `Color::index()`.
    pawn_pushes: [[TargetList; 64]; 2],
    pawn_attacks: [[TargetList; 64]; 2],
}

impl AttackTables {
    pub const fn new() -> Self {
        let mut tables = AttackTables {
            knight: [TargetList::EMPTY; 64],
            king: [TargetList::EMPTY; 64],
            edge_distance: [[0; 8]; 64],
            pawn_pushes: [[TargetList::EMPTY; 64]; 2],
            pawn_attacks: [[TargetList::EMPTY; 64]; 2],
        };

        let mut sq = 0usize;
        while sq < 64 {
            let square = sq as Square;
            tables.knight[sq] = knight_targets(square);
            tables.king[sq] = king_targets(square);
            tables.edge_distance[sq] = squares_to_edge(square);
            tables.pawn_pushes[0][sq] = pawn_push_targets(Color::Light, square);
            tables.pawn_pushes[1][sq] = pawn_push_targets(Color::Dark, square);
            tables.pawn_attacks[0][sq] = pawn_attack_targets(Color::Light, square);
            tables.pawn_attacks[1][sq] = pawn_attack_targets(Color::Dark, square);
            sq += 1;
        }

        tables
    }

    #[inline]
    pub fn knight_targets(&self, square: Square) -> &[Square] {
        self.knight[square as usize].as_slice()
    }

    #[inline]
    pub fn king_targets(&self, square: Square) -> &[Square] {
        self.king[square as usize].as_slice()
    }

    /// Steps available from `square` along `direction` before the board edge.
    #[inline]
    pub fn edge_distance(&self, square: Square, direction: usize) -> u8 {
        self.edge_distance[square as usize][direction]
    }

    #[inline]
    pub fn pawn_pushes(&self, color: Color, square: Square) -> &[Square] {
        self.pawn_pushes[color.index()][square as usize].as_slice()
    }

    #[inline]
    pub fn pawn_attacks(&self, color: Color, square: Square) -> &[Square] {
        self.pawn_attacks[color.index()][square as usize].as_slice()
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}
