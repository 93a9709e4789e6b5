//! Cat and mouse pursuit on a grid maze.
//!
//! A cat tries to land on the mouse's cell before the turn limit runs out,
//! the mouse tries to survive. Either side can be driven from the keyboard
//! or by a fixed-depth minimax bot.

pub mod bot;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod stats;
pub mod store;

pub use bot::{
    MazeBot, MinimaxBot, RootRanking, SearchStats, minimax, rank_root_moves,
    select_best_cat_move, select_best_mouse_move, select_best_move,
};
pub use config::MatchConfig;
pub use driver::{MatchReport, MatchRunner, Outcome, OutcomeReason};
pub use error::{Error, Result};
pub use game::*;
pub use input::{KeyboardInput, MoveInput, ScriptedInput};
pub use render::BoardView;
pub use stats::StatsReport;
pub use store::{JsonlStore, MatchStore, MatchSummary, MemoryStore, MoveRecord};
