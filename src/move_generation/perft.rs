//! Leaf-node counting over the legal move tree.
//!
//! A promoting move branches into one node per promotion piece, so counts
//! line up with the published reference tables.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, promote_pawn, unmake_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(
    generator: &LegalMoveGenerator<'_>,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total);
    total
}

/// Per-root-move node counts, in legal move order.
pub fn perft_divide(
    generator: &LegalMoveGenerator<'_>,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, PerftCounts)> {
    let mut scratch = game_state.clone();
    let root_moves = generator.generate_legal_moves_in_place(&mut scratch);
    let mut divided = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local = PerftCounts::default();
        expand_move(generator, &mut scratch, mv, depth, &mut local);
        divided.push((mv, local));
    }

    divided
}

fn perft_recurse(
    generator: &LegalMoveGenerator<'_>,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves_in_place(game_state);

    for mv in moves {
        expand_move(generator, game_state, mv, depth, counts);
    }
}

/// Play `mv` (once per promotion piece when it promotes) and count the
/// subtree below it.
fn expand_move(
    generator: &LegalMoveGenerator<'_>,
    game_state: &mut GameState,
    mv: Move,
    depth: u8,
    counts: &mut PerftCounts,
) {
    if mv.is_promotion {
        for kind in PROMOTION_CHOICES {
            visit(generator, game_state, mv, Some(kind), depth, counts);
        }
    } else {
        visit(generator, game_state, mv, None, depth, counts);
    }
}

fn visit(
    generator: &LegalMoveGenerator<'_>,
    game_state: &mut GameState,
    mv: Move,
    promotion: Option<PieceKind>,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let undo = make_move(game_state, mv);
    if let Some(kind) = promotion {
        promote_pawn(game_state, mv.to, kind);
    }

    if depth <= 1 {
        tally_leaf(mv, !undo.captured_piece.is_empty(), counts);
    } else {
        let mut child = PerftCounts::default();
        perft_recurse(generator, game_state, depth - 1, &mut child);
        counts.merge(child);
    }

    unmake_move(game_state, undo);
}

fn tally_leaf(mv: Move, is_capture: bool, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if is_capture {
        counts.captures += 1;
    }
    match mv.kind {
        MoveKind::EnPassantCapture => counts.en_passant += 1,
        MoveKind::Castling { .. } => counts.castles += 1,
        MoveKind::Normal | MoveKind::DoublePawnPush => {}
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }
}
