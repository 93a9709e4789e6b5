//! Property-based tests for board generation, validity, evaluation and
//! root move selection.

use catmaze::game::moves::DIRECTIONS;
use catmaze::{
    Agent, CAT_WIN_SCORE, Dimensions, GameState, MOUSE_WIN_SCORE, Position, minimax,
    select_best_cat_move, select_best_mouse_move,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// A board, two start cells, an obstacle count that fits, and a seed.
fn arb_setup() -> impl Strategy<Value = (Dimensions, Position, Position, usize, u64)> {
    (2i32..=8, 2i32..=8).prop_flat_map(|(rows, cols)| {
        let cells = (rows * cols) as usize;
        (
            Just(Dimensions::new(rows, cols)),
            (0..rows, 0..cols).prop_map(Position::from),
            (0..rows, 0..cols).prop_map(Position::from),
            0..=cells - 2,
            any::<u64>(),
        )
    })
}

fn arb_state() -> impl Strategy<Value = GameState> {
    arb_setup().prop_map(|(dims, cat, mouse, count, seed)| {
        let mut rng = StdRng::seed_from_u64(seed);
        GameState::create(cat, mouse, dims, count, &mut rng).expect("obstacles fit")
    })
}

/// Any cell in or just around an 8x8 area.
fn arb_probe() -> impl Strategy<Value = Position> {
    (-2i32..10, -2i32..10).prop_map(Position::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_obstacles_match_request((dims, cat, mouse, count, seed) in arb_setup()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::create(cat, mouse, dims, count, &mut rng).unwrap();

        prop_assert_eq!(state.obstacle_count(), count);
        for obstacle in state.obstacles() {
            prop_assert!(dims.contains(obstacle));
            prop_assert_ne!(obstacle, cat);
            prop_assert_ne!(obstacle, mouse);
        }
    }

    #[test]
    fn prop_validity_is_bounds_minus_obstacles(state in arb_state(), probe in arb_probe()) {
        let expected = state.dimensions().contains(probe)
            && !state.obstacles().any(|obstacle| obstacle == probe);
        prop_assert_eq!(state.is_valid_position(probe), expected);
    }

    #[test]
    fn prop_agents_stand_on_valid_cells(state in arb_state()) {
        prop_assert!(state.is_valid_position(state.cat_position()));
        prop_assert!(state.is_valid_position(state.mouse_position()));
    }

    #[test]
    fn prop_evaluate_matches_definition(state in arb_state(), turns in 0u32..20) {
        let mut state = state;
        for _ in 0..turns {
            state.advance_turn();
        }

        let expected = if state.cat_position() == state.mouse_position() {
            CAT_WIN_SCORE
        } else if state.turn_count() >= state.max_turns() {
            MOUSE_WIN_SCORE
        } else {
            -state.cat_position().manhattan_distance(state.mouse_position())
        };
        prop_assert_eq!(state.evaluate(), expected);
    }

    #[test]
    fn prop_clone_is_independent(state in arb_state(), step in 0usize..8) {
        let original = state.clone();
        let mut copy = state.clone();
        let (d_row, d_col) = DIRECTIONS[step];
        let _ = copy.apply_mouse_move(copy.mouse_position().offset(d_row, d_col), true);
        let _ = copy.apply_cat_move(copy.cat_position().offset(d_row, d_col), true);
        copy.advance_turn();

        prop_assert_eq!(state.cat_position(), original.cat_position());
        prop_assert_eq!(state.mouse_position(), original.mouse_position());
        prop_assert_eq!(state.turn_count(), original.turn_count());
        prop_assert_eq!(copy.obstacle_count(), original.obstacle_count());
    }

    #[test]
    fn prop_legal_moves_are_valid_neighbours(state in arb_state()) {
        for agent in [Agent::Cat, Agent::Mouse] {
            let from = state.position_of(agent);
            for to in state.legal_moves(agent) {
                prop_assert!(state.is_valid_position(to));
                prop_assert_eq!((to.row - from.row).abs().max((to.col - from.col).abs()), 1);
            }
        }
    }

    #[test]
    fn prop_selected_cat_move_is_legal_and_best(state in arb_state(), seed in any::<u64>()) {
        let depth = 2;
        let mut rng = StdRng::seed_from_u64(seed);
        let legal = state.legal_moves(Agent::Cat);

        match select_best_cat_move(&state, depth, &mut rng) {
            None => prop_assert!(legal.is_empty()),
            Some(chosen) => {
                prop_assert!(legal.contains(&chosen));
                let value_of = |to: Position| minimax(&state.successor(Agent::Cat, to), depth - 1, false);
                let best = legal.iter().map(|&to| value_of(to)).max().unwrap();
                prop_assert_eq!(value_of(chosen), best);
            }
        }
    }

    #[test]
    fn prop_selected_mouse_move_is_legal_and_best(state in arb_state(), seed in any::<u64>()) {
        let depth = 2;
        let mut rng = StdRng::seed_from_u64(seed);
        let legal = state.legal_moves(Agent::Mouse);

        match select_best_mouse_move(&state, depth, &mut rng) {
            None => prop_assert!(legal.is_empty()),
            Some(chosen) => {
                prop_assert!(legal.contains(&chosen));
                let value_of = |to: Position| minimax(&state.successor(Agent::Mouse, to), depth - 1, true);
                let best = legal.iter().map(|&to| value_of(to)).min().unwrap();
                prop_assert_eq!(value_of(chosen), best);
            }
        }
    }

    #[test]
    fn prop_search_leaves_state_untouched(state in arb_state(), seed in any::<u64>()) {
        let before = state.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let _ = select_best_cat_move(&state, 3, &mut rng);
        let _ = select_best_mouse_move(&state, 3, &mut rng);
        prop_assert_eq!(state, before);
    }
}
