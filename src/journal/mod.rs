//! Action journaling to disk.
//!
//! When enabled, appends every applied action as one JSON line to a daily
//! journal file named `actions_<date>.jsonl` in the configured directory.
//! A recorded file can be replayed through the reducer to reconstruct the
//! exact state it produced.

use crate::config::JournalConfig;
use crate::store::action::Action;
use crate::store::reducer::{reduce, Outcome};
use crate::store::state::WalletState;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to read journal {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed journal entry at line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("journal entry at line {line} is out of order: {kind}")]
    OutOfOrder { line: usize, kind: String },
}

/// One journal line: when the action was applied, plus its wire form.
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    at: String,
    #[serde(flatten)]
    action: Action,
}

/// Appends applied actions to a daily journal file.
///
/// The file handle is cached together with the date it was opened for and
/// rolled over at midnight. Write failures are logged and swallowed;
/// journaling must never take down the dispatcher.
pub struct ActionJournal {
    dir: PathBuf,
    handle: Option<(NaiveDate, File)>,
}

impl ActionJournal {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            handle: None,
        }
    }

    /// Build a journal from config, or `None` when journaling is disabled.
    pub fn from_config(config: &JournalConfig) -> Option<Self> {
        config.enabled.then(|| Self::new(config.dir.clone()))
    }

    /// Append one action. Only the store calls this, and only for actions
    /// the reducer applied.
    pub fn record(&mut self, action: &Action) {
        let now = Local::now();
        let entry = Entry {
            at: now.to_rfc3339(),
            action: action.clone(),
        };
        let line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to encode journal entry");
                return;
            }
        };

        let today = now.date_naive();
        let stale = self.handle.as_ref().map_or(true, |(date, _)| *date != today);
        if stale {
            let filename = format!("actions_{}.jsonl", today.format("%Y-%m-%d"));
            let _ = fs::create_dir_all(&self.dir);
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.dir.join(filename))
            {
                Ok(file) => self.handle = Some((today, file)),
                Err(e) => {
                    warn!(error = %e, "failed to open journal file");
                    self.handle = None;
                    return;
                }
            }
        }

        if let Some((_, file)) = &mut self.handle {
            if let Err(e) = writeln!(file, "{line}") {
                warn!(error = %e, "failed to append journal entry");
            }
        }
    }
}

/// Fold a recorded journal back through the reducer.
///
/// The journal only ever holds applied actions, so every entry must apply
/// cleanly during replay; one the reducer now ignores means the file was
/// edited or truncated and is reported as an error rather than skipped.
pub fn replay(path: &Path) -> Result<WalletState, JournalError> {
    let file = File::open(path).map_err(|source| JournalError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut state = WalletState::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| JournalError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(&line)
            .map_err(|source| JournalError::Parse { line: idx + 1, source })?;
        if reduce(&mut state, &entry.action) == Outcome::Ignored {
            return Err(JournalError::OutOfOrder {
                line: idx + 1,
                kind: entry.action.kind().to_string(),
            });
        }
    }

    // Replay is not a render trigger.
    state.dirty = false;
    Ok(state)
}
