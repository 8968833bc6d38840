//! Castling legality.
//!
//! Castling is never produced by the pseudo-legal scan. After the filtered
//! list is built each wing is evaluated on its own, king side first.

use crate::game_state::chess_rules::{castled_king_square, king_home_square, rook_home_square};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::pseudo_legal_generator::PseudoLegalGenerator;
use crate::moves::move_descriptions::Move;

const WINGS: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

/// Whether the side to move may castle toward `side` right now.
///
/// The state is borrowed mutably because every transit square is probed by
/// playing a king step onto it; it is restored before returning.
pub fn can_castle(
    pseudo: &PseudoLegalGenerator<'_>,
    game_state: &mut GameState,
    side: CastlingSide,
) -> bool {
    let color = game_state.side_to_move;
    let enemy = color.opposite();

    if !game_state.castling_rights.has(color, side) {
        return false;
    }

    let king_from = king_home_square(color);
    let rook_from = rook_home_square(color, side);
    if !game_state.piece_on(king_from).is(color, PieceKind::King)
        || !game_state.piece_on(rook_from).is(color, PieceKind::Rook)
    {
        return false;
    }

    let (low, high) = (king_from.min(rook_from), king_from.max(rook_from));
    if ((low + 1)..high).any(|sq| !game_state.piece_on(sq).is_empty()) {
        return false;
    }

    if is_square_attacked(pseudo, game_state, king_from, enemy) {
        return false;
    }

    let king_to = castled_king_square(color, side);
    let transit: Vec<Square> = if king_to > king_from {
        ((king_from + 1)..=king_to).collect()
    } else {
        (king_to..king_from).rev().collect()
    };

    for square in transit {
        let undo = make_move(game_state, Move::new(king_from, square));
        let attacked = is_square_attacked(pseudo, game_state, square, enemy);
        unmake_move(game_state, undo);

        if attacked {
            return false;
        }
    }

    true
}

pub fn append_castling_moves(
    pseudo: &PseudoLegalGenerator<'_>,
    game_state: &mut GameState,
    out: &mut Vec<Move>,
) {
    let color = game_state.side_to_move;
    for side in WINGS {
        if can_castle(pseudo, game_state, side) {
            out.push(Move::castling(color, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{append_castling_moves, can_castle};
    use crate::game_state::chess_types::{CastlingSide, Color};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::pseudo_legal_generator::PseudoLegalGenerator;
    use crate::moves::attack_tables::AttackTables;
    use crate::moves::move_descriptions::Move;

    fn castles(fen: &str) -> Vec<Move> {
        let tables = AttackTables::new();
        let pseudo = PseudoLegalGenerator::new(&tables);
        let mut game = GameState::from_fen(fen).expect("test FEN should parse");
        let before = game.clone();
        let mut out = Vec::new();

        append_castling_moves(&pseudo, &mut game, &mut out);

        assert_eq!(game, before, "castling probe must restore the state");
        out
    }

    #[test]
    fn both_wings_when_clear() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec![
                Move::castling(Color::Light, CastlingSide::KingSide),
                Move::castling(Color::Light, CastlingSide::QueenSide),
            ]
        );
    }

    #[test]
    fn no_castling_without_right_or_with_blockers() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
        assert!(castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").is_empty());
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // King on e1 attacked by the e8 rook.
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // f1 covered by the bishop on c4: king side blocked, queen side fine.
        assert_eq!(
            castles("4k3/8/8/8/2b5/8/8/R3K2R w KQ - 0 1"),
            vec![Move::castling(Color::Light, CastlingSide::QueenSide)]
        );
        // Destination g1 covered by the rook on g8.
        assert_eq!(
            castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec![Move::castling(Color::Light, CastlingSide::QueenSide)]
        );
    }

    #[test]
    fn attacked_b_file_does_not_stop_queen_side() {
        assert!(castles_for("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", CastlingSide::QueenSide));
    }

    fn castles_for(fen: &str, side: CastlingSide) -> bool {
        let tables = AttackTables::new();
        let pseudo = PseudoLegalGenerator::new(&tables);
        let mut game = GameState::from_fen(fen).expect("test FEN should parse");
        can_castle(&pseudo, &mut game, side)
    }

    #[test]
    fn dark_castles_from_its_own_back_rank() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1"),
            vec![
                Move::castling(Color::Dark, CastlingSide::KingSide),
                Move::castling(Color::Dark, CastlingSide::QueenSide),
            ]
        );
    }
}
