//! Pseudo-legal move generation.
//!
//! Produces every geometrically valid move for one side, ignoring whether the
//! mover's own king is left attacked. Squares are scanned in ascending order
//! and each piece emits its moves in table/direction order, so the output is
//! fully deterministic.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;
use crate::move_generation::pseudo_moves_step::{generate_king_moves, generate_knight_moves};
use crate::moves::attack_tables::AttackTables;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy)]
pub struct PseudoLegalGenerator<'a> {
    tables: &'a AttackTables,
}

impl<'a> PseudoLegalGenerator<'a> {
    pub fn new(tables: &'a AttackTables) -> Self {
        Self { tables }
    }

    #[inline]
    pub fn tables(&self) -> &'a AttackTables {
        self.tables
    }

    pub fn generate(&self, game_state: &GameState, side: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);

        for from in 0..64u8 {
            let piece = game_state.piece_on(from);
            if !piece.is_color(side) {
                continue;
            }
            let Some(kind) = piece.kind() else {
                continue;
            };

            match kind {
                PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                    generate_sliding_moves(self.tables, game_state, side, from, kind, &mut out)
                }
                PieceKind::Knight => {
                    generate_knight_moves(self.tables, game_state, side, from, &mut out)
                }
                PieceKind::King => {
                    generate_king_moves(self.tables, game_state, side, from, &mut out)
                }
                PieceKind::Pawn => {
                    generate_pawn_moves(self.tables, game_state, side, from, &mut out)
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::PseudoLegalGenerator;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::moves::attack_tables::AttackTables;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn starting_position_has_twenty_pseudo_moves_each() {
        let tables = AttackTables::new();
        let generator = PseudoLegalGenerator::new(&tables);
        let game = GameState::new_game();

        let light = generator.generate(&game, Color::Light);
        let dark = generator.generate(&game, Color::Dark);

        assert_eq!(light.len(), 20);
        assert_eq!(dark.len(), 20);
        // b1 knight is the first occupied square with moves.
        assert_eq!(light[0], Move::new(1, 18));
        assert_eq!(light[1], Move::new(1, 16));
    }

    #[test]
    fn pinned_piece_moves_are_still_pseudo_legal() {
        let tables = AttackTables::new();
        let generator = PseudoLegalGenerator::new(&tables);
        // Light bishop on e2 is pinned by the rook on e8.
        let game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");

        let moves = generator.generate(&game, Color::Light);
        assert!(moves.iter().any(|mv| mv.from == 12 && mv.to == 21));
    }
}
