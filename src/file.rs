//! Reading teams and simulation settings from JSON files.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::from_reader;

use crate::config::SimConfig;
use crate::team::{Entry, Roster, Team, TeamId};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

pub trait FromJsonFile<D> {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> FromJsonFile<D> for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error> {
        read_json(path)
    }
}

/// Builds a roster from seed-list entries, keeping the order in which they are listed. The
/// returned ids are therefore in seed order.
pub fn roster_from_entries(entries: Vec<Entry>) -> (Roster, Vec<TeamId>) {
    let roster: Roster = entries.into_iter().map(Team::from).collect();
    let seeds = roster.ids().collect();
    (roster, seeds)
}

/// Reads a simulation config and checks that it is usable.
pub fn read_config(path: impl AsRef<Path>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let config = SimConfig::from_json_file(path)?;
    config.validate()?;
    Ok(config)
}
