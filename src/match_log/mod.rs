//! Persistent history of completed games.
//!
//! The log is a flat text file with one `MatchRecord` per line. It is read
//! once when opened and rewritten in full on every change. Lines that cannot
//! be parsed are skipped with a warning so a damaged file never blocks play.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::evaluate::GameEnding;
use crate::searcher::Algorithm;

mod record;

pub use record::MatchRecord;

pub const DEFAULT_HISTORY_FILE: &str = "game_history.dat";

#[derive(Error, Debug)]
pub enum MatchLogError {
    #[error("failed to {operation} {path:?}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },
    #[error("no game number {number} in the history ({total} recorded)")]
    NoSuchGame { number: usize, total: usize },
}

/// Aggregate counts over every recorded game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub total_games: usize,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
    pub minimax_games: usize,
    pub alpha_beta_games: usize,
}

pub struct MatchLog {
    path: PathBuf,
    records: Vec<MatchRecord>,
}

impl MatchLog {
    /// Loads the log at `path`. A missing file is an empty log.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MatchLogError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => parse_records(&contents),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(MatchLogError::Io {
                    operation: "read",
                    path,
                    source,
                })
            }
        };
        debug!("loaded {} records from {:?}", records.len(), path);

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: MatchRecord) -> Result<(), MatchLogError> {
        self.records.push(record);
        self.save()
    }

    /// Removes the game at zero-based `index`.
    pub fn delete(&mut self, index: usize) -> Result<MatchRecord, MatchLogError> {
        if index >= self.records.len() {
            return Err(MatchLogError::NoSuchGame {
                number: index + 1,
                total: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        self.save()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), MatchLogError> {
        self.records.clear();
        self.save()
    }

    pub fn stats(&self) -> HistoryStats {
        self.records
            .iter()
            .fold(HistoryStats::default(), |mut stats, record| {
                stats.total_games += 1;
                match record.result {
                    GameEnding::HumanWins => stats.human_wins += 1,
                    GameEnding::ComputerWins => stats.computer_wins += 1,
                    GameEnding::Draw => stats.draws += 1,
                }
                match record.algorithm {
                    Algorithm::Minimax => stats.minimax_games += 1,
                    Algorithm::AlphaBeta => stats.alpha_beta_games += 1,
                }
                stats
            })
    }

    fn save(&self) -> Result<(), MatchLogError> {
        let io_error = |source| MatchLogError::Io {
            operation: "write",
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_error)?;
        let mut out = BufWriter::new(file);
        for record in &self.records {
            writeln!(out, "{}", record).map_err(io_error)?;
        }
        out.flush().map_err(io_error)
    }
}

fn parse_records(contents: &str) -> Vec<MatchRecord> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<MatchRecord>() {
            Ok(record) => Some(record),
            Err(error) => {
                warn!("skipping match log line: {}", error);
                None
            }
        })
        .collect()
}
