//! Property-based tests over randomly played games.
//!
//! Each case plays a seeded random game from the starting position and checks
//! the invariants that must hold after every ply.

use mailbox_chess::engines::engine_random::RandomMover;
use mailbox_chess::engines::rules_engine::RulesEngine;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::legal_move_checks::is_king_attacked;
use mailbox_chess::move_generation::pseudo_legal_generator::PseudoLegalGenerator;
use mailbox_chess::moves::move_descriptions::MoveKind;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn arb_plies() -> impl Strategy<Value = usize> {
    0usize..80
}

/// Play up to `plies` random moves, calling `check` with the engine before
/// and after every ply.
fn play_random_game(
    seed: u64,
    plies: usize,
    mut check: impl FnMut(&GameState, &RulesEngine, MoveKind) -> Result<(), TestCaseError>,
) -> Result<RulesEngine, TestCaseError> {
    let mut engine = RulesEngine::new_game(STARTING_POSITION_FEN).expect("start position parses");
    let mut mover = RandomMover::seeded(seed);

    for _ in 0..plies {
        let before = engine.game_state().clone();
        let Some(mv) = mover
            .play_random_move(&mut engine)
            .expect("random legal move executes")
        else {
            break;
        };
        check(&before, &engine, mv.kind)?;
    }

    Ok(engine)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_position_text_round_trips(seed in arb_seed(), plies in arb_plies()) {
        play_random_game(seed, plies, |_, engine, _| {
            let text = engine.current_position_text();
            let decoded = GameState::from_fen(&text).expect("serialized position parses");
            prop_assert_eq!(&decoded, engine.game_state());
            prop_assert_eq!(decoded.get_fen(), text);
            Ok(())
        })?;
    }

    #[test]
    fn prop_mover_never_left_in_check(seed in arb_seed(), plies in arb_plies()) {
        play_random_game(seed, plies, |before, engine, _| {
            let pseudo = PseudoLegalGenerator::new(engine.tables());
            prop_assert!(
                !is_king_attacked(&pseudo, engine.game_state(), before.side_to_move),
                "king left attacked after move from {}",
                before.get_fen()
            );
            Ok(())
        })?;
    }

    #[test]
    fn prop_en_passant_target_lives_one_ply(seed in arb_seed(), plies in arb_plies()) {
        play_random_game(seed, plies, |_, engine, kind| {
            let target = engine.game_state().en_passant_square;
            prop_assert_eq!(target.is_some(), kind == MoveKind::DoublePawnPush);

            if let Some(square) = target {
                prop_assert!(engine.piece_on(square).is_empty());
                let expected_rank = match engine.side_to_move() {
                    Color::Light => 5,
                    Color::Dark => 2,
                };
                prop_assert_eq!(square / 8, expected_rank);
            }
            Ok(())
        })?;
    }

    #[test]
    fn prop_castling_rights_only_shrink(seed in arb_seed(), plies in arb_plies()) {
        play_random_game(seed, plies, |before, engine, _| {
            prop_assert!(engine
                .game_state()
                .castling_rights
                .is_subset_of(before.castling_rights));
            Ok(())
        })?;
    }

    #[test]
    fn prop_undo_restores_previous_position(seed in arb_seed(), plies in 1usize..60) {
        play_random_game(seed, plies, |before, engine, _| {
            let mut rewound = engine.clone();
            prop_assert!(rewound.undo(1).expect("snapshot decodes"));
            prop_assert_eq!(rewound.game_state(), before);
            Ok(())
        })?;
    }

    #[test]
    fn prop_history_grows_one_snapshot_per_ply(seed in arb_seed(), plies in arb_plies()) {
        let mut executed = 0usize;
        let engine = play_random_game(seed, plies, |_, _, _| {
            executed += 1;
            Ok(())
        })?;
        prop_assert_eq!(engine.history().len(), executed + 1);
    }
}
