use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Documents kept in the history before the oldest entries are dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {file_path}: {source}")]
    Read {
        file_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {file_path}: {source}")]
    Parse {
        file_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        read_toml(config_path.as_ref())
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        write_toml(config_path.as_ref(), self)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

/// One previously opened document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: PathBuf,
    pub name: String,
    /// Unix timestamp (seconds) of the last open.
    pub opened_at: u64,
}

impl HistoryEntry {
    /// Builds an entry for `path` opened right now; the display name is the
    /// file name.
    pub fn opened_now(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let opened_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            path,
            name,
            opened_at,
        }
    }
}

/// Recently opened documents, most recent last.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn load_from_path<P: AsRef<Path>>(history_path: P) -> Result<Self, ConfigError> {
        Ok(read_toml(history_path.as_ref())?.unwrap_or_default())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(Self::history_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, history_path: P) -> anyhow::Result<()> {
        write_toml(history_path.as_ref(), self)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::history_path())
    }

    pub fn history_path() -> PathBuf {
        config_dir().join("history.toml")
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn most_recent(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Records `entry`, replacing any previous entry for the same path and
    /// dropping the oldest entries beyond `limit`.
    pub fn add(&mut self, entry: HistoryEntry, limit: usize) {
        self.entries.retain(|e| e.path != entry.path);
        self.entries.push(entry);
        let excess = self.entries.len().saturating_sub(limit);
        self.entries.drain(..excess);
    }

    pub fn remove(&mut self, path: &Path) {
        self.entries.retain(|e| e.path != path);
    }
}

fn config_dir() -> PathBuf {
    let dir = shellexpand::tilde("~/.config/mdlens");
    PathBuf::from(dir.as_ref())
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file_path: path.to_path_buf(),
        source,
    })?;
    let value = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        file_path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

fn write_toml<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
