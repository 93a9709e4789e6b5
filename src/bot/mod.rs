//! Move-choosing bots.

pub mod minimax;

pub use minimax::{
    MinimaxBot, RootRanking, SearchStats, minimax, rank_root_moves, select_best_cat_move,
    select_best_mouse_move, select_best_move,
};

use rand::RngCore;

use crate::{Agent, GameState, Position};

/// A bot that picks a destination for one agent.
pub trait MazeBot {
    fn name(&self) -> &str;

    /// Returns `None` when `agent` has no legal move.
    fn choose_move(
        &self,
        state: &GameState,
        agent: Agent,
        rng: &mut dyn RngCore,
    ) -> Option<Position>;
}
