use super::{MatchId, MatchStore, MatchSummary, MoveRecord};
use crate::{GameMode, Result};

/// Keeps match logs in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    moves: Vec<MoveRecord>,
    matches: Vec<MatchSummary>,
    last_id: MatchId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }
}

impl MatchStore for MemoryStore {
    fn begin_match(&mut self, _mode: GameMode, _started_at: u64) -> Result<MatchId> {
        self.last_id += 1;
        Ok(self.last_id)
    }

    fn record_move(&mut self, record: &MoveRecord) -> Result<()> {
        self.moves.push(record.clone());
        Ok(())
    }

    fn finish_match(&mut self, summary: &MatchSummary) -> Result<()> {
        self.matches.push(summary.clone());
        Ok(())
    }

    fn summaries(&self) -> Result<Vec<MatchSummary>> {
        Ok(self.matches.clone())
    }
}
