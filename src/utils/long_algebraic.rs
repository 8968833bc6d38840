//! Coordinate move text (`e2e4`, `e7e8q`).
//!
//! Text only names the two squares and an optional promotion piece; the
//! engine resolves it against the legal list to recover the move kind.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> ChessResult<CoordinateMove> {
    let text = text.trim();
    if !text.is_ascii() || !(text.len() == 4 || text.len() == 5) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(
            char_to_promotion(ch)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))?,
        ),
        None => None,
    };

    Ok(CoordinateMove { from, to, promotion })
}

pub fn move_to_long_algebraic(mv: Move, promotion: Option<PieceKind>) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    if let Some(ch) = promotion.and_then(promotion_to_char) {
        out.push(ch);
    }
    Ok(out)
}

pub fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        PieceKind::King | PieceKind::Pawn => None,
    }
}

pub fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
