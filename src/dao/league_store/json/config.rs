use std::path::{Path, PathBuf};

pub(super) const PLAYERS_FILE: &str = "players.json";
pub(super) const TEAMS_FILE: &str = "teams.json";
pub(super) const GAMES_FILE: &str = "games.json";
pub(super) const CURRENT_WEEK_FILE: &str = "current_week.json";

/// Runtime configuration describing where the JSON documents live.
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    pub data_dir: PathBuf,
}

impl JsonStoreConfig {
    /// Construct a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub(super) fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub(super) fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
