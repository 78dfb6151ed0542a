//! Persist the high-score table to disk (XDG config or ~/.config/blockfall).
//!
//! Stored as JSON, top entries first. Loading is forgiving: a missing or
//! corrupt file yields an empty table rather than an error, so a damaged
//! config never blocks play.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const FILENAME: &str = "scores.json";

/// Maximum number of entries kept.
pub const MAX_ENTRIES: usize = 10;

/// One finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

/// The persisted leaderboard, sorted by score descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Highest recorded score, if any.
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    /// Whether `score` would make the table.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries
            .last()
            .map(|worst| score > worst.score)
            .unwrap_or(true)
    }

    /// Insert an entry, keeping the table sorted and capped. Returns the
    /// entry's rank (0-based) if it made the cut.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        // Ties rank behind existing entries.
        let rank = self
            .entries
            .partition_point(|existing| existing.score >= entry.score);
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    /// Load the table from the default location. Missing or unreadable data
    /// yields an empty table.
    pub fn load() -> Self {
        match config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        serde_json::from_slice(&content).unwrap_or_default()
    }

    /// Save the table to the default location, creating the config
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Path to the score file (config dir / blockfall / scores.json).
fn config_path() -> Result<PathBuf> {
    let base = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if xdg.is_empty() {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".config")
        } else {
            PathBuf::from(xdg)
        }
    } else {
        std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".config"))
            .unwrap_or_else(|_| PathBuf::from("."))
    };
    Ok(base.join("blockfall").join(FILENAME))
}
