//! Canonical chess-rule constants.
//!
//! Starting position text plus the fixed home squares that castling rules
//! refer to.

use crate::game_state::chess_types::{CastlingSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// First square of each color's back rank.
#[inline]
const fn back_rank_base(color: Color) -> Square {
    match color {
        Color::Light => 0,
        Color::Dark => 56,
    }
}

/// Square the king starts on.
#[inline]
pub const fn king_home_square(color: Color) -> Square {
    back_rank_base(color) + 4
}

/// Corner square the castling rook of `side` starts on.
#[inline]
pub const fn rook_home_square(color: Color, side: CastlingSide) -> Square {
    match side {
        CastlingSide::KingSide => back_rank_base(color) + 7,
        CastlingSide::QueenSide => back_rank_base(color),
    }
}

/// King destination after castling toward `side`.
#[inline]
pub const fn castled_king_square(color: Color, side: CastlingSide) -> Square {
    match side {
        CastlingSide::KingSide => back_rank_base(color) + 6,
        CastlingSide::QueenSide => back_rank_base(color) + 2,
    }
}

/// Rook destination after castling toward `side`.
#[inline]
pub const fn castled_rook_square(color: Color, side: CastlingSide) -> Square {
    match side {
        CastlingSide::KingSide => back_rank_base(color) + 5,
        CastlingSide::QueenSide => back_rank_base(color) + 3,
    }
}

/// Which castling right (if any) a rook on `square` guards.
#[inline]
pub const fn castling_right_for_corner(square: Square) -> Option<(Color, CastlingSide)> {
    match square {
        0 => Some((Color::Light, CastlingSide::QueenSide)),
        7 => Some((Color::Light, CastlingSide::KingSide)),
        56 => Some((Color::Dark, CastlingSide::QueenSide)),
        63 => Some((Color::Dark, CastlingSide::KingSide)),
        _ => None,
    }
}
