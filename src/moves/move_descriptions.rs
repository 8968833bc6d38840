//! Tagged move representation.
//!
//! Every move carries its origin and destination plus a `MoveKind` telling
//! execution which special rule applies. Promotion is an orthogonal flag: the
//! piece choice is resolved after the pawn lands.
//!
//! Two moves compare equal when their squares match, whatever their tags.
//! Controllers build a plain `Move::new(from, to)` from user input and look it
//! up in the legal list to recover the fully tagged move.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::{
    castled_king_square, castled_rook_square, king_home_square, rook_home_square,
};
use crate::game_state::chess_types::{CastlingSide, Color, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    /// Two-rank pawn advance; leaves an en-passant target behind.
    DoublePawnPush,
    /// Diagonal pawn move onto the en-passant target.
    EnPassantCapture,
    /// King move of two files; the rook jumps from `rook_from` to `rook_to`.
    Castling { rook_from: Square, rook_to: Square },
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub is_promotion: bool,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Normal,
            is_promotion: false,
        }
    }

    #[inline]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Self {
            kind: MoveKind::DoublePawnPush,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            kind: MoveKind::EnPassantCapture,
            ..Self::new(from, to)
        }
    }

    /// Castling for `color` toward `side`, with king and rook squares derived
    /// from the home-square layout.
    #[inline]
    pub const fn castling(color: Color, side: CastlingSide) -> Self {
        Self {
            kind: MoveKind::Castling {
                rook_from: rook_home_square(color, side),
                rook_to: castled_rook_square(color, side),
            },
            ..Self::new(king_home_square(color), castled_king_square(color, side))
        }
    }

    #[inline]
    pub const fn with_promotion(self, is_promotion: bool) -> Self {
        Self {
            is_promotion,
            ..self
        }
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling { .. })
    }

    /// Wing of a castling move, derived from the king's displacement.
    #[inline]
    pub const fn castling_side(&self) -> Option<CastlingSide> {
        match self.kind {
            MoveKind::Castling { .. } if self.to > self.from => Some(CastlingSide::KingSide),
            MoveKind::Castling { .. } => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    /// Square of the pawn removed by an en-passant capture made by `mover`.
    #[inline]
    pub const fn en_passant_victim_square(&self, mover: Color) -> Square {
        match mover {
            Color::Light => self.to - 8,
            Color::Dark => self.to + 8,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::game_state::chess_types::{CastlingSide, Color};

    #[test]
    fn equality_ignores_move_kind() {
        let plain = Move::new(12, 28);
        let tagged = Move::double_pawn_push(12, 28).with_promotion(true);

        assert_eq!(plain, tagged);
        assert_ne!(plain.kind, tagged.kind);
        assert_ne!(Move::new(12, 20), tagged);
    }

    #[test]
    fn castling_moves_carry_rook_squares() {
        let short = Move::castling(Color::Light, CastlingSide::KingSide);
        assert_eq!((short.from, short.to), (4, 6));
        assert_eq!(short.kind, MoveKind::Castling { rook_from: 7, rook_to: 5 });
        assert_eq!(short.castling_side(), Some(CastlingSide::KingSide));

        let long = Move::castling(Color::Dark, CastlingSide::QueenSide);
        assert_eq!((long.from, long.to), (60, 58));
        assert_eq!(long.kind, MoveKind::Castling { rook_from: 56, rook_to: 59 });
        assert_eq!(long.castling_side(), Some(CastlingSide::QueenSide));

        assert_eq!(Move::new(4, 6).castling_side(), None);
    }

    #[test]
    fn en_passant_victim_sits_behind_target() {
        assert_eq!(Move::en_passant(36, 43).en_passant_victim_square(Color::Light), 35);
        assert_eq!(Move::en_passant(27, 18).en_passant_victim_square(Color::Dark), 26);
    }

    #[test]
    fn displays_coordinates() {
        assert_eq!(Move::new(12, 28).to_string(), "e2e4");
        assert_eq!(Move::castling(Color::Dark, CastlingSide::KingSide).to_string(), "e8g8");
    }
}
