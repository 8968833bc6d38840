//! Full legal move generation pipeline.
//!
//! Builds the pseudo-legal list for the side to move, plays each candidate,
//! rejects it if any opponent reply lands on the mover's king, and unplays it.
//! Castling is evaluated afterwards and appended king side first.

use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::move_generation::castling::append_castling_moves;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::pseudo_legal_generator::PseudoLegalGenerator;
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy)]
pub struct LegalMoveGenerator<'a> {
    pseudo: PseudoLegalGenerator<'a>,
}

impl<'a> LegalMoveGenerator<'a> {
    pub fn new(tables: &'a AttackTables) -> Self {
        Self {
            pseudo: PseudoLegalGenerator::new(tables),
        }
    }

    pub fn pseudo(&self) -> &PseudoLegalGenerator<'a> {
        &self.pseudo
    }

    pub fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut scratch = game_state.clone();
        self.generate_legal_moves_in_place(&mut scratch)
    }

    /// Same as [`generate_legal_moves`](Self::generate_legal_moves) but probes
    /// on the caller's state. The state is identical on return.
    pub fn generate_legal_moves_in_place(&self, game_state: &mut GameState) -> Vec<Move> {
        let mover = game_state.side_to_move;
        let candidates = self.pseudo.generate(game_state, mover);
        let mut legal = Vec::with_capacity(candidates.len() + 2);

        for mv in candidates {
            let undo = make_move(game_state, mv);
            let king_square = game_state.king_square(mover);
            let exposes_king = self
                .pseudo
                .generate(game_state, mover.opposite())
                .iter()
                .any(|reply| reply.to == king_square);
            unmake_move(game_state, undo);

            if exposes_king {
                trace!(%mv, "rejected: leaves own king attacked");
                continue;
            }
            legal.push(mv);
        }

        append_castling_moves(&self.pseudo, game_state, &mut legal);

        legal
    }
}
