//! Text rendering of the board.

use std::fmt;

use crate::{GameState, Position};

pub const EMPTY: char = '.';
pub const OBSTACLE: char = '█';
pub const CAT: char = 'C';
pub const MOUSE: char = 'M';
pub const CAPTURE: char = 'X';

fn symbol_at(state: &GameState, pos: Position) -> char {
    let cat = state.cat_position() == pos;
    let mouse = state.mouse_position() == pos;
    match (cat, mouse) {
        (true, true) => CAPTURE,
        (true, false) => CAT,
        (false, true) => MOUSE,
        _ if state.is_obstacle(pos) => OBSTACLE,
        _ => EMPTY,
    }
}

/// One string per board row, one symbol per cell.
pub fn board_rows(state: &GameState) -> Vec<String> {
    let dims = state.dimensions();
    (0..dims.rows)
        .map(|row| {
            (0..dims.cols)
                .map(|col| symbol_at(state, Position::new(row, col)))
                .collect::<String>()
        })
        .collect()
}

/// Displays the board with a status line underneath.
pub struct BoardView<'a>(pub &'a GameState);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in board_rows(self.0) {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        write!(
            f,
            "cat at {}, mouse at {} | turn {}/{}",
            self.0.cat_position(),
            self.0.mouse_position(),
            self.0.turn_count(),
            self.0.max_turns()
        )
    }
}
