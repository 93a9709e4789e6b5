//! Match log persistence.
//!
//! The driver reports every applied move and one summary per finished match
//! through [`MatchStore`]; the statistics report reads the summaries back.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{Agent, ControlType, GameMode, Position, Result};

pub type MatchId = u64;

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub match_id: MatchId,
    /// Completed rounds when the move was made.
    pub turn: u32,
    pub player: Agent,
    pub control: ControlType,
    pub from: Position,
    pub to: Position,
    /// Board after the move, as rendered by [`crate::render::board_rows`].
    pub board: Vec<String>,
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub mode: GameMode,
    /// The winning agent.
    pub outcome: Agent,
    pub total_turns: u32,
    /// Seconds since the Unix epoch at match start.
    pub started_at: u64,
}

/// Storage port for match logs.
pub trait MatchStore {
    /// Reserves an id for a new match.
    fn begin_match(&mut self, mode: GameMode, started_at: u64) -> Result<MatchId>;

    fn record_move(&mut self, record: &MoveRecord) -> Result<()>;

    fn finish_match(&mut self, summary: &MatchSummary) -> Result<()>;

    /// All finished matches, oldest first.
    fn summaries(&self) -> Result<Vec<MatchSummary>>;
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
