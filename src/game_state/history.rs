//! Append-only stack of position snapshots.
//!
//! Every committed ply stores the full FEN of the resulting position. Undo
//! truncates the tail; the new tail is the only source used to rebuild the
//! board, so the history never needs incremental reversal.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionHistory {
    snapshots: Vec<String>,
}

impl PositionHistory {
    /// Seed the history with the initial position.
    pub fn record_initial(snapshot: String) -> Self {
        Self {
            snapshots: vec![snapshot],
        }
    }

    /// Append the snapshot taken after a committed ply.
    pub fn commit(&mut self, snapshot: String) {
        self.snapshots.push(snapshot);
    }

    /// Overwrite the most recent snapshot in place (promotion resolution is
    /// part of the ply that moved the pawn).
    pub fn replace_last(&mut self, snapshot: String) {
        match self.snapshots.last_mut() {
            Some(last) => *last = snapshot,
            None => self.snapshots.push(snapshot),
        }
    }

    /// Pop `plies` snapshots and decode the new tail.
    ///
    /// Returns `Ok(None)` without touching anything when the history is not
    /// deeper than `plies`; the initial snapshot is never removed.
    pub fn undo(&mut self, plies: usize) -> ChessResult<Option<GameState>> {
        if plies == 0 || self.snapshots.len() <= plies {
            return Ok(None);
        }

        let keep = self.snapshots.len() - plies;
        let restored = GameState::from_fen(&self.snapshots[keep - 1])?;
        self.snapshots.truncate(keep);
        Ok(Some(restored))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.snapshots.last().map(String::as_str)
    }

    #[inline]
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }
}
