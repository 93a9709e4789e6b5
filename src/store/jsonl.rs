use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{MatchId, MatchStore, MatchSummary, MoveRecord};
use crate::{Error, GameMode, Result};

const MOVES_FILE: &str = "moves.jsonl";
const MATCHES_FILE: &str = "matches.jsonl";

/// Appends moves and match summaries as JSON lines under a data directory.
///
/// `moves.jsonl` holds one [`MoveRecord`] per line and `matches.jsonl` one
/// [`MatchSummary`] per finished match. Ids continue after the largest id
/// found in either file.
#[derive(Debug)]
pub struct JsonlStore {
    dir: PathBuf,
    next_id: MatchId,
}

#[derive(serde::Deserialize)]
struct IdOnly {
    match_id: MatchId,
}

impl JsonlStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|source| Error::io(format!("create data directory {dir:?}"), source))?;

        let mut store = Self { dir, next_id: 1 };
        let last_id = store
            .read_lines::<IdOnly>(MATCHES_FILE)?
            .into_iter()
            .chain(store.read_lines::<IdOnly>(MOVES_FILE)?)
            .map(|line| line.match_id)
            .max()
            .unwrap_or(0);
        store.next_id = last_id + 1;

        debug!(dir = ?store.dir, next_id = store.next_id, "opened match store");
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every stored move, oldest first.
    pub fn moves(&self) -> Result<Vec<MoveRecord>> {
        self.read_lines(MOVES_FILE)
    }

    fn append<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::io(format!("open {path:?}"), source))?;

        let mut line = serde_json::to_string(value)?;
        line.push('\n');
        file.write_all(line.as_bytes())
            .map_err(|source| Error::io(format!("write {path:?}"), source))
    }

    fn read_lines<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file =
            File::open(&path).map_err(|source| Error::io(format!("open {path:?}"), source))?;

        let mut values = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| Error::io(format!("read {path:?}"), source))?;
            if line.trim().is_empty() {
                continue;
            }
            values.push(serde_json::from_str(&line)?);
        }
        Ok(values)
    }
}

impl MatchStore for JsonlStore {
    fn begin_match(&mut self, mode: GameMode, started_at: u64) -> Result<MatchId> {
        let id = self.next_id;
        self.next_id += 1;
        debug!(match_id = id, %mode, started_at, "match started");
        Ok(id)
    }

    fn record_move(&mut self, record: &MoveRecord) -> Result<()> {
        self.append(MOVES_FILE, record)
    }

    fn finish_match(&mut self, summary: &MatchSummary) -> Result<()> {
        self.append(MATCHES_FILE, summary)
    }

    fn summaries(&self) -> Result<Vec<MatchSummary>> {
        self.read_lines(MATCHES_FILE)
    }
}
