use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_legal_generator::PseudoLegalGenerator;

/// True when any pseudo-legal move of `attacker` lands on `square`.
///
/// Pawn pushes count as well, which keeps this identical to the reply scan
/// the legality filter performs.
pub fn is_square_attacked(
    pseudo: &PseudoLegalGenerator<'_>,
    game_state: &GameState,
    square: Square,
    attacker: Color,
) -> bool {
    pseudo
        .generate(game_state, attacker)
        .iter()
        .any(|mv| mv.to == square)
}

#[inline]
pub fn is_king_attacked(
    pseudo: &PseudoLegalGenerator<'_>,
    game_state: &GameState,
    color: Color,
) -> bool {
    is_square_attacked(pseudo, game_state, game_state.king_square(color), color.opposite())
}
