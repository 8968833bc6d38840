//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Parsing, move
//! execution and promotion handling all return `ChessResult<T>` so callers can
//! propagate with `?` and match on the variant when they need to recover.
//!
//! Usage guidelines:
//! - `MalformedPosition` and `InvalidAlgebraicString` come from bad text input
//!   and are recoverable by supplying corrected text.
//! - `IllegalMove` means the move is not in the current legal set; callers
//!   should re-query the legal moves and pick again.
//! - `PromotionState` signals a controller that resolved a promotion when none
//!   was pending (or tried to move while one is). Correct controllers never
//!   see it.
//!
//! Move generation and legality filtering never fail for a structurally valid
//! board, so they return plain move lists rather than results.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A position string could not be decoded.
    ///
    /// Payload: a description of the offending field or token.
    #[error("malformed position: {0}")]
    MalformedPosition(String),

    /// A square or coordinate move in algebraic form could not be parsed.
    ///
    /// Payload: the original text.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// The requested move is not in the current legal-move list.
    #[error("illegal move from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Promotion was resolved with no pending promotion, on the wrong square,
    /// or with a piece kind a pawn cannot become.
    #[error("promotion state error: {0}")]
    PromotionState(String),
}

/// Result alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
