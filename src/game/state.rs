use fixedbitset::FixedBitSet;
use rand::Rng;
use tracing::warn;

use super::moves::{self, MoveList};
use super::{Agent, Dimensions, Position};
use crate::{Error, Result};

/// Score of a position where the cat has caught the mouse.
pub const CAT_WIN_SCORE: i32 = 1000;

/// Score of a position where the mouse has outlasted the turn limit.
pub const MOUSE_WIN_SCORE: i32 = -CAT_WIN_SCORE;

/// Extra rounds granted on top of `(rows + cols) / 2` before the mouse wins.
pub const DEFAULT_TURN_GRACE: u32 = 3;

/// Largest accepted number of rows or columns.
pub const MAX_BOARD_SIDE: i32 = 1024;

/// Snapshot of a match: board size, agent positions, obstacles and the
/// number of completed rounds.
///
/// Cloning yields a fully independent snapshot. The search explores the
/// game tree through clones and never touches the live state it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    dimensions: Dimensions,
    cat: Position,
    mouse: Position,
    obstacles: FixedBitSet,
    turn_count: u32,
    turn_grace: u32,
}

impl GameState {
    /// Places both agents and scatters `obstacle_count` distinct obstacles
    /// uniformly over the board, never on a starting cell.
    ///
    /// Fails with [`Error::Configuration`] instead of sampling forever when
    /// the board is too small to hold the obstacles next to both agents.
    pub fn create<R: Rng + ?Sized>(
        cat_start: Position,
        mouse_start: Position,
        dimensions: Dimensions,
        obstacle_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_layout(cat_start, mouse_start, dimensions)?;

        let cells = dimensions.cell_count();
        if obstacle_count.checked_add(2).is_none_or(|needed| needed > cells) {
            return Err(Error::configuration(format!(
                "{obstacle_count} obstacles do not fit on a {dimensions} board with two agents"
            )));
        }

        let mut obstacles = FixedBitSet::with_capacity(cells);
        let mut placed = 0;
        while placed < obstacle_count {
            let pos = Position::new(
                rng.random_range(0..dimensions.rows),
                rng.random_range(0..dimensions.cols),
            );
            if pos == cat_start || pos == mouse_start {
                continue;
            }
            if !obstacles.put(dimensions.index_of(pos)) {
                placed += 1;
            }
        }

        Ok(Self::from_parts(cat_start, mouse_start, dimensions, obstacles))
    }

    /// Builds a state with an explicit obstacle layout.
    pub fn with_obstacles(
        cat_start: Position,
        mouse_start: Position,
        dimensions: Dimensions,
        obstacles: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        validate_layout(cat_start, mouse_start, dimensions)?;

        let mut cells = FixedBitSet::with_capacity(dimensions.cell_count());
        for pos in obstacles {
            if !dimensions.contains(pos) {
                return Err(Error::configuration(format!(
                    "obstacle {pos} is outside the {dimensions} board"
                )));
            }
            if pos == cat_start || pos == mouse_start {
                return Err(Error::configuration(format!(
                    "obstacle {pos} overlaps a starting cell"
                )));
            }
            cells.insert(dimensions.index_of(pos));
        }

        Ok(Self::from_parts(cat_start, mouse_start, dimensions, cells))
    }

    fn from_parts(
        cat: Position,
        mouse: Position,
        dimensions: Dimensions,
        obstacles: FixedBitSet,
    ) -> Self {
        Self {
            dimensions,
            cat,
            mouse,
            obstacles,
            turn_count: 0,
            turn_grace: DEFAULT_TURN_GRACE,
        }
    }

    /// Sets the number of grace rounds added to the turn limit.
    pub fn with_turn_grace(mut self, grace: u32) -> Self {
        self.turn_grace = grace;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn cat_position(&self) -> Position {
        self.cat
    }

    pub fn mouse_position(&self) -> Position {
        self.mouse
    }

    pub fn position_of(&self, agent: Agent) -> Position {
        match agent {
            Agent::Cat => self.cat,
            Agent::Mouse => self.mouse,
        }
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.obstacles
            .ones()
            .map(|index| self.dimensions.position_of(index))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.count_ones(..)
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.dimensions.contains(pos) && self.obstacles.contains(self.dimensions.index_of(pos))
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn turn_grace(&self) -> u32 {
        self.turn_grace
    }

    /// Counts one completed round. Only the match driver calls this.
    pub fn advance_turn(&mut self) {
        self.turn_count += 1;
    }

    /// True for in-bounds cells without an obstacle. A cell holding the
    /// other agent is valid: moving onto it is how a capture happens.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.dimensions.contains(pos) && !self.obstacles.contains(self.dimensions.index_of(pos))
    }

    pub fn apply_cat_move(&mut self, to: Position, quiet: bool) -> Result<()> {
        self.apply_move(Agent::Cat, to, quiet)
    }

    pub fn apply_mouse_move(&mut self, to: Position, quiet: bool) -> Result<()> {
        self.apply_move(Agent::Mouse, to, quiet)
    }

    /// Moves `agent` to `to` if the cell is valid.
    ///
    /// An invalid destination leaves the state untouched and returns
    /// [`Error::InvalidMove`]; unless `quiet` is set it is also logged.
    pub fn apply_move(&mut self, agent: Agent, to: Position, quiet: bool) -> Result<()> {
        if !self.is_valid_position(to) {
            if !quiet {
                warn!(%agent, %to, "invalid move");
            }
            return Err(Error::InvalidMove { agent, to });
        }

        match agent {
            Agent::Cat => self.cat = to,
            Agent::Mouse => self.mouse = to,
        }
        Ok(())
    }

    /// Snapshot with `agent` moved quietly to `to`; an invalid destination
    /// yields an unchanged copy.
    pub fn successor(&self, agent: Agent, to: Position) -> GameState {
        let mut next = self.clone();
        let _ = next.apply_move(agent, to, true);
        next
    }

    pub fn legal_moves(&self, agent: Agent) -> MoveList {
        moves::legal_moves(self, agent)
    }

    pub fn is_cat_winner(&self) -> bool {
        self.cat == self.mouse
    }

    pub fn is_mouse_winner(&self) -> bool {
        self.turn_count >= self.max_turns() && !self.is_cat_winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_cat_winner() || self.is_mouse_winner()
    }

    /// Rounds the mouse has to survive: `(rows + cols) / 2` plus the grace
    /// rounds.
    pub fn max_turns(&self) -> u32 {
        ((self.dimensions.rows + self.dimensions.cols) / 2) as u32 + self.turn_grace
    }

    /// Score from the cat's point of view.
    ///
    /// Terminal positions score [`CAT_WIN_SCORE`] or [`MOUSE_WIN_SCORE`];
    /// anything else scores the negated Manhattan distance between the
    /// agents, which never reaches the terminal magnitude on a playable board.
    pub fn evaluate(&self) -> i32 {
        if self.is_cat_winner() {
            return CAT_WIN_SCORE;
        }
        if self.is_mouse_winner() {
            return MOUSE_WIN_SCORE;
        }
        -self.cat.manhattan_distance(self.mouse)
    }
}

fn validate_layout(cat: Position, mouse: Position, dimensions: Dimensions) -> Result<()> {
    if dimensions.rows <= 0 || dimensions.cols <= 0 {
        return Err(Error::configuration(format!(
            "board dimensions must be positive, got {dimensions}"
        )));
    }
    if dimensions.rows > MAX_BOARD_SIDE || dimensions.cols > MAX_BOARD_SIDE {
        return Err(Error::configuration(format!(
            "board sides are limited to {MAX_BOARD_SIDE}, got {dimensions}"
        )));
    }
    for (agent, pos) in [(Agent::Cat, cat), (Agent::Mouse, mouse)] {
        if !dimensions.contains(pos) {
            return Err(Error::configuration(format!(
                "{agent} start {pos} is outside the {dimensions} board"
            )));
        }
    }
    Ok(())
}
