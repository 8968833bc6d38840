//! Uniform random mover.
//!
//! Picks uniformly from the engine's legal list. Used by the terminal
//! controller and by tests that need reachable positions.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::rules_engine::RulesEngine;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;

pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose_move(&mut self, engine: &RulesEngine) -> Option<Move> {
        engine.legal_moves().choose(&mut self.rng).copied()
    }

    /// Play one random move, promoting to a queen when needed. Returns
    /// `None` when the side to move has no legal move.
    pub fn play_random_move(&mut self, engine: &mut RulesEngine) -> ChessResult<Option<Move>> {
        let Some(mv) = self.choose_move(engine) else {
            return Ok(None);
        };

        engine.execute(mv)?;
        if mv.is_promotion {
            engine.resolve_promotion(mv.to, PieceKind::Queen)?;
        }

        Ok(Some(mv))
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}
