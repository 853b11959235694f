//! Named squads and their on-disk JSON form.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::PlayerRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<PlayerRecord>,
}
impl Team {
    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|player| player.name == name)
    }
}

/// Squads keyed by team name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Teams(pub BTreeMap<String, Team>);
impl Teams {
    pub fn read_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.0.get(name)
    }

    /// Locates a player by name across all teams, visiting teams in name order.
    pub fn find_player(&self, name: &str) -> Option<(&str, &PlayerRecord)> {
        self.0
            .iter()
            .find_map(|(team_name, team)| team.player(name).map(|player| (team_name.as_str(), player)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Team)> {
        self.0.iter().map(|(name, team)| (name.as_str(), team))
    }
}
