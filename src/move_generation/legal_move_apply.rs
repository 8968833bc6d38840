//! In-place move execution and its exact inverse.
//!
//! `make_move` mutates the board for the side to move and returns an
//! `UndoState` that `unmake_move` uses to restore every field bit for bit.
//! The legality filter runs one make/unmake pair per candidate, so no
//! snapshot text is produced here.

use crate::game_state::chess_rules::castling_right_for_corner;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn make_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let mover = game_state.side_to_move;
    let moved_piece = game_state.take_piece(mv.from);

    let mut undo = UndoState {
        mv,
        moved_piece,
        captured_piece: Piece::EMPTY,
        captured_square: mv.to,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
        prev_king_squares: game_state.king_squares,
    };

    match mv.kind {
        MoveKind::Normal | MoveKind::DoublePawnPush => {
            undo.captured_piece = game_state.take_piece(mv.to);
        }
        MoveKind::EnPassantCapture => {
            let victim = mv.en_passant_victim_square(mover);
            undo.captured_square = victim;
            undo.captured_piece = game_state.take_piece(victim);
        }
        MoveKind::Castling { rook_from, rook_to } => {
            let rook = game_state.take_piece(rook_from);
            game_state.set_piece(rook_to, rook);
        }
    }

    game_state.set_piece(mv.to, moved_piece);

    if moved_piece.kind() == Some(PieceKind::King) {
        game_state.king_squares[mover.index()] = mv.to;
        game_state.castling_rights.revoke_color(mover);
    }
    for square in [mv.from, mv.to] {
        if let Some((color, side)) = castling_right_for_corner(square) {
            game_state.castling_rights.revoke(color, side);
        }
    }

    game_state.en_passant_square = match mv.kind {
        MoveKind::DoublePawnPush => Some((mv.from + mv.to) / 2),
        _ => None,
    };

    if moved_piece.kind() == Some(PieceKind::Pawn) || !undo.captured_piece.is_empty() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();

    undo
}

pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    let mv = undo.mv;

    game_state.take_piece(mv.to);
    game_state.set_piece(mv.from, undo.moved_piece);

    match mv.kind {
        MoveKind::Castling { rook_from, rook_to } => {
            let rook = game_state.take_piece(rook_to);
            game_state.set_piece(rook_from, rook);
        }
        MoveKind::Normal | MoveKind::DoublePawnPush | MoveKind::EnPassantCapture => {
            game_state.set_piece(undo.captured_square, undo.captured_piece);
        }
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.king_squares = undo.prev_king_squares;
    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Replace the pawn standing on `square` with `kind` of the same color.
///
/// Returns `false` (leaving the board untouched) when there is no pawn on
/// `square` or `kind` is not a piece a pawn may become.
pub fn promote_pawn(game_state: &mut GameState, square: Square, kind: PieceKind) -> bool {
    let pawn = game_state.piece_on(square);
    let Some(color) = pawn.color() else {
        return false;
    };
    if pawn.kind() != Some(PieceKind::Pawn) || !kind.is_promotion_target() {
        return false;
    }

    game_state.set_piece(square, Piece::new(color, kind));
    true
}

#[cfg(test)]
mod tests {
    use super::{make_move, promote_pawn, unmake_move};
    use crate::game_state::chess_types::{CastlingSide, Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    fn assert_round_trip(fen: &str, mv: Move, expected_after: &str) {
        let mut game = GameState::from_fen(fen).expect("test FEN should parse");
        let before = game.clone();

        let undo = make_move(&mut game, mv);
        assert_eq!(game.get_fen(), expected_after);

        unmake_move(&mut game, undo);
        assert_eq!(game, before);
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        assert_round_trip(
            crate::game_state::chess_rules::STARTING_POSITION_FEN,
            Move::double_pawn_push(12, 28),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        );
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        assert_round_trip(
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            Move::en_passant(36, 45),
            "rnbqkbnr/ppp1p1pp/5P2/3p4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3",
        );
    }

    #[test]
    fn castling_relocates_the_rook_and_clears_rights() {
        assert_round_trip(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10",
            Move::castling(Color::Light, CastlingSide::KingSide),
            "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10",
        );
        assert_round_trip(
            "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 10",
            Move::castling(Color::Dark, CastlingSide::QueenSide),
            "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 4 11",
        );
    }

    #[test]
    fn capturing_a_corner_rook_clears_that_right() {
        assert_round_trip(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            Move::new(7, 63),
            "r3k2R/8/8/8/8/8/8/R3K3 b Qq - 0 1",
        );
    }

    #[test]
    fn king_square_cache_follows_the_king() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let undo = make_move(&mut game, Move::new(4, 12));

        assert_eq!(game.king_square(Color::Light), 12);
        assert_eq!(game.halfmove_clock, 1);

        unmake_move(&mut game, undo);
        assert_eq!(game.king_square(Color::Light), 4);
    }

    #[test]
    fn promote_pawn_replaces_only_pawns() {
        let mut game =
            GameState::from_fen("4k3/3P4/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        make_move(&mut game, Move::new(51, 59).with_promotion(true));

        assert!(!promote_pawn(&mut game, 59, PieceKind::King));
        assert!(!promote_pawn(&mut game, 60, PieceKind::Queen));
        assert!(promote_pawn(&mut game, 59, PieceKind::Knight));
        assert_eq!(game.piece_on(59), Piece::new(Color::Light, PieceKind::Knight));
    }
}
