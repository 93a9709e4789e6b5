//! Move generation shared by both agents.

use smallvec::SmallVec;

use super::{Agent, GameState, Position};

/// Step offsets as `(d_row, d_col)`: the four cardinals, then the diagonals.
///
/// Cat and mouse move with the same table. Enumeration order only decides
/// which move comes first among equals; root ties are broken at random.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub type MoveList = SmallVec<[Position; 8]>;

/// Every cell one step away from `from`, on or off the board.
pub fn neighbors(from: Position) -> impl Iterator<Item = Position> {
    DIRECTIONS
        .iter()
        .map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}

/// Legal destinations for `agent`: adjacent cells that are on the board and
/// not blocked. The opponent's cell is included.
pub fn legal_moves(state: &GameState, agent: Agent) -> MoveList {
    neighbors(state.position_of(agent))
        .filter(|&pos| state.is_valid_position(pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimensions;

    fn open_board(rows: i32, cols: i32, cat: Position, mouse: Position) -> GameState {
        GameState::with_obstacles(cat, mouse, Dimensions::new(rows, cols), [])
            .expect("valid board")
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1);
            assert_ne!(*a, (0, 0), "Staying in place is not a move");
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_center_cell_has_eight_moves() {
        let state = open_board(3, 3, Position::new(1, 1), Position::new(0, 0));
        let moves = legal_moves(&state, Agent::Cat);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_corner_cell_has_three_moves() {
        let state = open_board(3, 3, Position::new(0, 0), Position::new(2, 2));
        let moves = legal_moves(&state, Agent::Cat);
        assert_eq!(
            moves.as_slice(),
            &[Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_obstacles_are_filtered_out() {
        let state = GameState::with_obstacles(
            Position::new(0, 0),
            Position::new(2, 2),
            Dimensions::new(3, 3),
            [Position::new(1, 1), Position::new(0, 1)],
        )
        .unwrap();

        let moves = legal_moves(&state, Agent::Cat);
        assert_eq!(moves.as_slice(), &[Position::new(1, 0)]);
    }

    #[test]
    fn test_opponent_cell_is_a_legal_destination() {
        let state = open_board(2, 2, Position::new(0, 0), Position::new(1, 1));
        assert!(legal_moves(&state, Agent::Mouse).contains(&Position::new(0, 0)));
        assert!(legal_moves(&state, Agent::Cat).contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_walled_in_agent_has_no_moves() {
        let state = GameState::with_obstacles(
            Position::new(0, 0),
            Position::new(2, 2),
            Dimensions::new(3, 3),
            [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)],
        )
        .unwrap();

        assert!(legal_moves(&state, Agent::Cat).is_empty());
        assert!(!legal_moves(&state, Agent::Mouse).is_empty());
    }
}
