//! Match configuration.

use rand::Rng;

use crate::bot::minimax::DEFAULT_DEPTH;
use crate::{DEFAULT_TURN_GRACE, Dimensions, GameState, Position, Result};

/// Everything needed to set up a match.
///
/// # Examples
///
/// ```
/// use catmaze::{MatchConfig, Position};
///
/// let config = MatchConfig::default()
///     .with_board(6, 6)
///     .with_starts(Position::new(0, 0), Position::new(5, 5))
///     .with_obstacles(4)
///     .with_depth(3)
///     .with_seed(42);
/// assert_eq!(config.search_depth, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub dimensions: Dimensions,
    pub cat_start: Position,
    pub mouse_start: Position,
    pub obstacle_count: usize,
    /// Plies searched by the minimax bot.
    pub search_depth: u8,
    /// Rounds added to `(rows + cols) / 2` before the mouse wins.
    pub turn_grace: u32,
    /// Seed for obstacle placement and bot tie-breaks; `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(8, 8),
            cat_start: Position::new(0, 0),
            mouse_start: Position::new(5, 5),
            obstacle_count: 10,
            search_depth: DEFAULT_DEPTH,
            turn_grace: DEFAULT_TURN_GRACE,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn with_board(mut self, rows: i32, cols: i32) -> Self {
        self.dimensions = Dimensions::new(rows, cols);
        self
    }

    pub fn with_starts(mut self, cat: Position, mouse: Position) -> Self {
        self.cat_start = cat;
        self.mouse_start = mouse;
        self
    }

    pub fn with_obstacles(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_turn_grace(mut self, grace: u32) -> Self {
        self.turn_grace = grace;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the opening state, scattering obstacles with `rng`.
    pub fn initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState> {
        let state = GameState::create(
            self.cat_start,
            self.mouse_start,
            self.dimensions,
            self.obstacle_count,
            rng,
        )?;
        Ok(state.with_turn_grace(self.turn_grace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults_follow_classic_setup() {
        let config = MatchConfig::default();
        assert_eq!(config.dimensions, Dimensions::new(8, 8));
        assert_eq!(config.cat_start, Position::new(0, 0));
        assert_eq!(config.mouse_start, Position::new(5, 5));
        assert_eq!(config.obstacle_count, 10);
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.turn_grace, 3);
    }

    #[test]
    fn test_initial_state_applies_grace() {
        let config = MatchConfig::default().with_turn_grace(0).with_obstacles(0);
        let state = config.initial_state(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(state.max_turns(), 8);
        assert_eq!(state.obstacle_count(), 0);
    }

    #[test]
    fn test_initial_state_rejects_crowded_board() {
        let config = MatchConfig::default()
            .with_board(2, 2)
            .with_starts(Position::new(0, 0), Position::new(1, 1))
            .with_obstacles(3);
        let result = config.initial_state(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
