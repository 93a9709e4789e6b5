//! Statistics over finished matches.

use std::collections::BTreeMap;
use std::fmt;

use crate::store::MatchSummary;
use crate::{Agent, GameMode};

/// Wins per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinCount {
    pub cat: usize,
    pub mouse: usize,
}

impl WinCount {
    fn add(&mut self, winner: Agent) {
        match winner {
            Agent::Cat => self.cat += 1,
            Agent::Mouse => self.mouse += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    pub total_matches: usize,
    pub wins: WinCount,
    pub by_mode: BTreeMap<GameMode, WinCount>,
    /// Mean of `total_turns`; `None` without matches.
    pub average_turns: Option<f64>,
}

impl StatsReport {
    pub fn from_summaries(summaries: &[MatchSummary]) -> Self {
        let mut report = StatsReport {
            total_matches: summaries.len(),
            ..Default::default()
        };

        let mut turns = 0u64;
        for summary in summaries {
            report.wins.add(summary.outcome);
            report
                .by_mode
                .entry(summary.mode)
                .or_default()
                .add(summary.outcome);
            turns += u64::from(summary.total_turns);
        }

        if !summaries.is_empty() {
            report.average_turns = Some(turns as f64 / summaries.len() as f64);
        }
        report
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Match statistics")?;
        writeln!(f, "Total matches: {}", self.total_matches)?;
        writeln!(f, "Won by the cat: {}", self.wins.cat)?;
        writeln!(f, "Won by the mouse: {}", self.wins.mouse)?;

        if !self.by_mode.is_empty() {
            writeln!(f, "By mode:")?;
            for (mode, wins) in &self.by_mode {
                writeln!(f, " - {mode}: cat = {} | mouse = {}", wins.cat, wins.mouse)?;
            }
        }

        match self.average_turns {
            Some(average) => write!(f, "Average length: {average:.2} turns"),
            None => write!(f, "Average length: n/a"),
        }
    }
}
