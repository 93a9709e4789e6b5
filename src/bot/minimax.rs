use crate::game::moves::MoveList;
use crate::{Agent, CAT_WIN_SCORE, GameState, MOUSE_WIN_SCORE, MazeBot, Position};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use std::cmp;
use tracing::debug;

pub const DEFAULT_DEPTH: u8 = 4;

const INFINITY: i32 = i32::MAX / 2;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// Outcome of scoring every move available at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootRanking {
    /// Best value for the moving agent (highest for the cat, lowest for the mouse).
    pub value: i32,
    /// Every root move that reaches `value` exactly, in generation order.
    pub best: MoveList,
    pub stats: SearchStats,
}

/// Plain fixed-depth minimax over cloned snapshots. The cat maximizes.
pub fn minimax(state: &GameState, depth: u8, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search(state, depth, maximizing, &mut stats)
}

fn search(state: &GameState, depth: u8, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if state.is_terminal() || depth == 0 {
        return state.evaluate();
    }

    let agent = if maximizing { Agent::Cat } else { Agent::Mouse };
    let moves = state.legal_moves(agent);

    // A side that cannot move loses on the spot.
    if moves.is_empty() {
        return stuck_score(agent);
    }

    if maximizing {
        let mut best_score = -INFINITY;

        for to in moves {
            let child = state.successor(agent, to);
            let score = search(&child, depth - 1, false, stats);
            best_score = cmp::max(best_score, score);
        }
        best_score
    } else {
        let mut worst_score = INFINITY;

        for to in moves {
            let child = state.successor(agent, to);
            let score = search(&child, depth - 1, true, stats);
            worst_score = cmp::min(worst_score, score);
        }
        worst_score
    }
}

fn stuck_score(agent: Agent) -> i32 {
    match agent {
        Agent::Cat => MOUSE_WIN_SCORE,
        Agent::Mouse => CAT_WIN_SCORE,
    }
}

/// Scores every legal root move of `agent` with `minimax(child, depth - 1)`
/// and collects the moves tied for best.
///
/// A `depth` of zero is searched as one: the root always expands a ply.
/// Returns `None` when `agent` has no legal move.
pub fn rank_root_moves(state: &GameState, agent: Agent, depth: u8) -> Option<RootRanking> {
    let moves = state.legal_moves(agent);
    if moves.is_empty() {
        return None;
    }

    let maximizing = agent.is_maximizer();
    let child_depth = depth.max(1) - 1;
    let mut stats = SearchStats::default();
    let mut best_value = if maximizing { -INFINITY } else { INFINITY };
    let mut best = MoveList::new();

    for to in moves {
        let child = state.successor(agent, to);
        let value = search(&child, child_depth, !maximizing, &mut stats);

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };

        if improves {
            best_value = value;
            best.clear();
            best.push(to);
        } else if value == best_value {
            best.push(to);
        }
    }

    Some(RootRanking {
        value: best_value,
        best,
        stats,
    })
}

/// Picks one of the best moves for `agent` uniformly at random.
pub fn select_best_move<R: Rng + ?Sized>(
    state: &GameState,
    agent: Agent,
    depth: u8,
    rng: &mut R,
) -> Option<Position> {
    let ranking = rank_root_moves(state, agent, depth)?;
    let choice = ranking.best.choose(rng).copied();

    debug!(
        %agent,
        depth,
        value = ranking.value,
        tied = ranking.best.len(),
        nodes = ranking.stats.nodes,
        "search finished"
    );

    choice
}

pub fn select_best_cat_move<R: Rng + ?Sized>(
    state: &GameState,
    depth: u8,
    rng: &mut R,
) -> Option<Position> {
    select_best_move(state, Agent::Cat, depth, rng)
}

pub fn select_best_mouse_move<R: Rng + ?Sized>(
    state: &GameState,
    depth: u8,
    rng: &mut R,
) -> Option<Position> {
    select_best_move(state, Agent::Mouse, depth, rng)
}

pub struct MinimaxBot {
    depth: u8,
}

impl MinimaxBot {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxBot {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MazeBot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax_bot"
    }

    fn choose_move(
        &self,
        state: &GameState,
        agent: Agent,
        rng: &mut dyn RngCore,
    ) -> Option<Position> {
        select_best_move(state, agent, self.depth, rng)
    }
}
