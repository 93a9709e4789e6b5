//! Runs one match: alternates turns on the live state, asks the bot or the
//! human for moves, and logs every applied move.

use rand::RngCore;
use std::fmt;
use std::io::Write;
use tracing::info;

use crate::render::{BoardView, board_rows};
use crate::store::{MatchId, MatchStore, MatchSummary, MoveRecord, unix_timestamp};
use crate::{
    Agent, ControlType, Error, GameMode, GameState, MatchConfig, MazeBot, MoveInput, Position,
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeReason {
    /// The cat reached the mouse's cell.
    Capture,
    /// The mouse lasted until the turn limit.
    Survived,
    /// The side to move had no legal destination.
    Trapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Agent,
    pub reason: OutcomeReason,
}

impl Outcome {
    /// Outcome of a terminal state, `None` while the match is still open.
    pub fn of(state: &GameState) -> Option<Outcome> {
        if state.is_cat_winner() {
            Some(Outcome {
                winner: Agent::Cat,
                reason: OutcomeReason::Capture,
            })
        } else if state.is_mouse_winner() {
            Some(Outcome {
                winner: Agent::Mouse,
                reason: OutcomeReason::Survived,
            })
        } else {
            None
        }
    }

    fn trapped(stuck: Agent) -> Outcome {
        Outcome {
            winner: stuck.opponent(),
            reason: OutcomeReason::Trapped,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            OutcomeReason::Capture => write!(f, "The cat caught the mouse. The cat wins!"),
            OutcomeReason::Survived => write!(f, "The mouse survived. The mouse wins!"),
            OutcomeReason::Trapped => write!(
                f,
                "The {} has nowhere to go. The {} wins!",
                self.winner.opponent(),
                self.winner
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub summary: MatchSummary,
    pub outcome: Outcome,
    pub final_state: GameState,
}

/// Plays matches with the given configuration, bot, human input and store.
///
/// Each round the mouse moves first, then the cat, and the round counter is
/// advanced after the cat's move. The match stops as soon as the state is
/// terminal or the side to move is trapped.
pub struct MatchRunner<'a> {
    config: &'a MatchConfig,
    bot: &'a dyn MazeBot,
    store: &'a mut dyn MatchStore,
    input: &'a mut dyn MoveInput,
    out: &'a mut dyn Write,
}

impl<'a> MatchRunner<'a> {
    pub fn new(
        config: &'a MatchConfig,
        bot: &'a dyn MazeBot,
        store: &'a mut dyn MatchStore,
        input: &'a mut dyn MoveInput,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            config,
            bot,
            store,
            input,
            out,
        }
    }

    /// Plays one match on a fresh board built from the configuration.
    pub fn run(&mut self, mode: GameMode, rng: &mut dyn RngCore) -> Result<MatchReport> {
        let state = self.config.initial_state(&mut *rng)?;
        self.play(mode, state, rng)
    }

    /// Plays one match starting from `state`, for fixed layouts.
    pub fn play(
        &mut self,
        mode: GameMode,
        mut state: GameState,
        rng: &mut dyn RngCore,
    ) -> Result<MatchReport> {
        let started_at = unix_timestamp();
        let match_id = self.store.begin_match(mode, started_at)?;

        info!(
            match_id,
            %mode,
            board = %state.dimensions(),
            obstacles = state.obstacle_count(),
            bot = self.bot.name(),
            "match started"
        );

        let outcome = loop {
            if let Some(outcome) = Outcome::of(&state) {
                break outcome;
            }
            self.say(BoardView(&state))?;

            if let Some(outcome) = self.play_turn(&mut state, Agent::Mouse, mode, match_id, rng)? {
                break outcome;
            }
            if let Some(outcome) = self.play_turn(&mut state, Agent::Cat, mode, match_id, rng)? {
                break outcome;
            }
            state.advance_turn();
        };

        self.say(BoardView(&state))?;
        self.say(outcome)?;

        let summary = MatchSummary {
            match_id,
            mode,
            outcome: outcome.winner,
            total_turns: state.turn_count(),
            started_at,
        };
        self.store.finish_match(&summary)?;

        info!(
            match_id,
            winner = %outcome.winner,
            reason = ?outcome.reason,
            turns = summary.total_turns,
            "match finished"
        );

        Ok(MatchReport {
            summary,
            outcome,
            final_state: state,
        })
    }

    /// Moves `agent` once and records the move. Returns the outcome if the
    /// match is over afterwards, or if `agent` could not move at all.
    fn play_turn(
        &mut self,
        state: &mut GameState,
        agent: Agent,
        mode: GameMode,
        match_id: MatchId,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Outcome>> {
        let from = state.position_of(agent);
        let control = mode.control_of(agent);

        let to = match control {
            ControlType::Ai => {
                self.say(format_args!("{agent} (ai) is thinking..."))?;
                let Some(to) = self.bot.choose_move(state, agent, rng) else {
                    return Ok(Some(Outcome::trapped(agent)));
                };
                state.apply_move(agent, to, true)?;
                to
            }
            ControlType::Human => {
                if state.legal_moves(agent).is_empty() {
                    return Ok(Some(Outcome::trapped(agent)));
                }
                self.read_human_move(state, agent)?
            }
        };

        self.say(format_args!("{agent} moves {from} -> {to}"))?;
        self.store.record_move(&MoveRecord {
            match_id,
            turn: state.turn_count(),
            player: agent,
            control,
            from,
            to,
            board: board_rows(state),
        })?;

        Ok(Outcome::of(state))
    }

    fn read_human_move(&mut self, state: &mut GameState, agent: Agent) -> Result<Position> {
        loop {
            let candidate = self.input.read_move(agent, state.position_of(agent))?;
            match state.apply_move(agent, candidate, false) {
                Ok(()) => return Ok(candidate),
                Err(Error::InvalidMove { .. }) => self.say("Invalid move, try again.")?,
                Err(err) => return Err(err),
            }
        }
    }

    fn say(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{message}").map_err(|source| Error::io("write match output", source))
    }
}
