//! The rules oracle a controller drives.
//!
//! `RulesEngine` owns the board, the snapshot history and the legal move list
//! for the side to move. Every state change goes through `execute`,
//! `resolve_promotion` or `undo`, each of which leaves the legal list current.
//!
//! A pawn move onto the last rank is a two-step ply: `execute` places the pawn
//! and records the snapshot, then `resolve_promotion` swaps the piece and
//! rewrites that same snapshot. Until it is resolved the engine refuses other
//! moves and reports no legal moves.

use std::sync::Arc;

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::history::PositionHistory;
use crate::move_generation::legal_move_apply::{make_move, promote_pawn};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::pseudo_legal_generator::PseudoLegalGenerator;
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::parse_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    AwaitingPromotion { square: Square },
}

#[derive(Debug, Clone)]
pub struct RulesEngine {
    tables: Arc<AttackTables>,
    game_state: GameState,
    history: PositionHistory,
    legal_moves: Vec<Move>,
    pending_promotion: Option<Square>,
}

impl RulesEngine {
    pub fn new_game(fen: &str) -> ChessResult<Self> {
        Self::with_tables(Arc::new(AttackTables::new()), fen)
    }

    /// Start a game that shares already-built tables with other engines.
    pub fn with_tables(tables: Arc<AttackTables>, fen: &str) -> ChessResult<Self> {
        let game_state = GameState::from_fen(fen)?;

        let pseudo = PseudoLegalGenerator::new(&tables);
        if is_king_attacked(&pseudo, &game_state, game_state.side_to_move.opposite()) {
            return Err(ChessErrors::MalformedPosition(format!(
                "the side not to move is in check: {fen}"
            )));
        }

        let history = PositionHistory::record_initial(game_state.get_fen());

        let mut engine = Self {
            tables,
            game_state,
            history,
            legal_moves: Vec::new(),
            pending_promotion: None,
        };
        engine.refresh_legal_moves();

        debug!(fen = %engine.current_position_text(), legal = engine.legal_moves.len(), "new game");
        Ok(engine)
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn execute(&mut self, mv: Move) -> ChessResult<()> {
        if let Some(square) = self.pending_promotion {
            return Err(ChessErrors::PromotionState(format!(
                "promotion on square {square} must be resolved before moving"
            )));
        }

        // Callers may pass a bare (from, to) move; the stored one carries the kind.
        let legal = self
            .legal_moves
            .iter()
            .copied()
            .find(|candidate| *candidate == mv)
            .ok_or(ChessErrors::IllegalMove { from: mv.from, to: mv.to })?;

        make_move(&mut self.game_state, legal);
        self.history.commit(self.game_state.get_fen());

        if legal.is_promotion {
            self.pending_promotion = Some(legal.to);
            self.legal_moves.clear();
            debug!(mv = %legal, "awaiting promotion choice");
        } else {
            self.refresh_legal_moves();
            debug!(mv = %legal, legal = self.legal_moves.len(), "executed move");
        }

        Ok(())
    }

    /// Parse coordinate text and execute it. A trailing piece letter also
    /// resolves the promotion in the same call.
    pub fn execute_long_algebraic(&mut self, text: &str) -> ChessResult<Move> {
        let coordinate = parse_long_algebraic(text)?;
        let mv = self
            .legal_moves
            .iter()
            .copied()
            .find(|candidate| candidate.from == coordinate.from && candidate.to == coordinate.to)
            .ok_or(ChessErrors::IllegalMove {
                from: coordinate.from,
                to: coordinate.to,
            })?;

        if coordinate.promotion.is_some() && !mv.is_promotion {
            return Err(ChessErrors::PromotionState(format!(
                "{text} names a promotion piece but does not promote"
            )));
        }

        self.execute(mv)?;
        if let Some(kind) = coordinate.promotion {
            self.resolve_promotion(mv.to, kind)?;
        }

        Ok(mv)
    }

    pub fn resolve_promotion(&mut self, square: Square, kind: PieceKind) -> ChessResult<()> {
        match self.pending_promotion {
            None => {
                return Err(ChessErrors::PromotionState(
                    "no promotion is pending".to_owned(),
                ))
            }
            Some(pending) if pending != square => {
                return Err(ChessErrors::PromotionState(format!(
                    "promotion is pending on square {pending}, not {square}"
                )))
            }
            Some(_) => {}
        }

        if !kind.is_promotion_target() {
            return Err(ChessErrors::PromotionState(format!(
                "a pawn cannot promote to {kind:?}"
            )));
        }
        if !promote_pawn(&mut self.game_state, square, kind) {
            return Err(ChessErrors::PromotionState(format!(
                "no pawn on square {square} to promote"
            )));
        }

        self.pending_promotion = None;
        self.history.replace_last(self.game_state.get_fen());
        self.refresh_legal_moves();

        debug!(square, ?kind, legal = self.legal_moves.len(), "promotion resolved");
        Ok(())
    }

    /// True when the side to move has no legal move. Does not say which of
    /// the two it is; see [`game_status`](Self::game_status).
    pub fn is_checkmate_or_stalemate(&self) -> bool {
        self.pending_promotion.is_none() && self.legal_moves.is_empty()
    }

    pub fn is_in_check(&self) -> bool {
        let pseudo = PseudoLegalGenerator::new(&self.tables);
        is_king_attacked(&pseudo, &self.game_state, self.game_state.side_to_move)
    }

    pub fn game_status(&self) -> GameStatus {
        if let Some(square) = self.pending_promotion {
            return GameStatus::AwaitingPromotion { square };
        }
        if !self.legal_moves.is_empty() {
            return GameStatus::Ongoing;
        }
        if self.is_in_check() {
            GameStatus::Checkmate {
                winner: self.game_state.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Step back `plies` committed plies. Returns `false` without changing
    /// anything when the history is not deeper than `plies`.
    pub fn undo(&mut self, plies: usize) -> ChessResult<bool> {
        let Some(restored) = self.history.undo(plies)? else {
            return Ok(false);
        };

        self.game_state = restored;
        self.pending_promotion = None;
        self.refresh_legal_moves();

        debug!(plies, fen = %self.current_position_text(), "undo");
        Ok(true)
    }

    #[inline]
    pub fn current_position_text(&self) -> String {
        self.game_state.get_fen()
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.game_state.piece_on(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    #[inline]
    pub fn tables(&self) -> &Arc<AttackTables> {
        &self.tables
    }

    fn refresh_legal_moves(&mut self) {
        let generator = LegalMoveGenerator::new(&self.tables);
        self.legal_moves = generator.generate_legal_moves_in_place(&mut self.game_state);
    }
}
