//! Human move entry.
//!
//! Each key maps to one of the eight steps:
//!
//! ```text
//!   q w e
//!   a   d
//!   z s c
//! ```

use std::collections::VecDeque;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::{Agent, Error, Position, Result};

/// Key bindings as `(key, (d_row, d_col))`.
pub const KEY_BINDINGS: [(char, (i32, i32)); 8] = [
    ('w', (-1, 0)),
    ('s', (1, 0)),
    ('a', (0, -1)),
    ('d', (0, 1)),
    ('q', (-1, -1)),
    ('e', (-1, 1)),
    ('z', (1, -1)),
    ('c', (1, 1)),
];

pub fn direction_for_key(key: char) -> Option<(i32, i32)> {
    let key = key.to_ascii_lowercase();
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, step)| step)
}

/// Source of candidate destinations for a human-controlled agent.
///
/// Candidates are not validated here; the driver applies them and asks again
/// when a move is rejected.
pub trait MoveInput {
    fn read_move(&mut self, agent: Agent, from: Position) -> Result<Position>;
}

/// Reads keys from the terminal.
pub struct KeyboardInput {
    editor: DefaultEditor,
}

impl KeyboardInput {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

/// Destination named by the first character of `line`, if it is a bound key.
pub fn parse_move_line(line: &str, from: Position) -> Option<Position> {
    let (d_row, d_col) = line.trim().chars().next().and_then(direction_for_key)?;
    Some(from.offset(d_row, d_col))
}

fn move_prompt(agent: Agent, from: Position, unknown_key: bool) -> String {
    let notice = if unknown_key { "Unknown key. " } else { "" };
    format!("{notice}{agent} at {from}, move (W A S D Q E Z C): ")
}

impl MoveInput for KeyboardInput {
    fn read_move(&mut self, agent: Agent, from: Position) -> Result<Position> {
        let mut prompt = move_prompt(agent, from, false);
        loop {
            let line = match self.editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    return Err(Error::InputClosed);
                }
                Err(err) => return Err(err.into()),
            };

            match parse_move_line(&line, from) {
                Some(to) => return Ok(to),
                None => prompt = move_prompt(agent, from, true),
            }
        }
    }
}

/// Replays a fixed key sequence; unknown keys are skipped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl MoveInput for ScriptedInput {
    fn read_move(&mut self, _agent: Agent, from: Position) -> Result<Position> {
        while let Some(key) = self.keys.pop_front() {
            if let Some((d_row, d_col)) = direction_for_key(key) {
                return Ok(from.offset(d_row, d_col));
            }
        }
        Err(Error::InputClosed)
    }
}
