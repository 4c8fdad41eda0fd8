//! Rated competitors and the roster that owns them for the duration of a run.
//!
//! A team's record is never stored; it is derived from the append-only log of games the team has
//! appeared in.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(usize);
impl TeamId {
    pub fn index(index: usize) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> usize {
        self.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// One completed game from the perspective of a single team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub opponent: TeamId,
    pub points_for: u16,
    pub points_against: u16,
    pub level: Level,
}
impl Appearance {
    pub fn won(&self) -> bool {
        self.points_for > self.points_against
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: usize,
    pub losses: usize,
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Seed-list entry: what a team is before it has played anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub rating: f64,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    rating: f64,
    region: Option<String>,
    log: Vec<Appearance>,
}
impl Team {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
            region: None,
            log: vec![],
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn log(&self) -> &[Appearance] {
        &self.log
    }

    pub fn record(&self) -> Record {
        let wins = self.log.iter().filter(|appearance| appearance.won()).count();
        Record {
            wins,
            losses: self.log.len() - wins,
        }
    }

    pub(crate) fn append(&mut self, appearance: Appearance) {
        self.log.push(appearance);
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.record())
    }
}

impl From<Entry> for Team {
    fn from(entry: Entry) -> Self {
        Self {
            name: entry.name,
            rating: entry.rating,
            region: entry.region,
            log: vec![],
        }
    }
}

/// Owns every team taking part in a run. Tournaments refer to teams by [TeamId].
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<Team>,
}
impl Roster {
    pub fn add(&mut self, team: Team) -> TeamId {
        self.teams.push(team);
        TeamId(self.teams.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: TeamId) -> Result<&Team, Error> {
        self.teams.get(id.0).ok_or(Error::UnknownTeam(id))
    }

    pub(crate) fn get_mut(&mut self, id: TeamId) -> Result<&mut Team, Error> {
        self.teams.get_mut(id.0).ok_or(Error::UnknownTeam(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.teams.len()).map(TeamId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(index, team)| (TeamId(index), team))
    }

    pub fn name(&self, id: TeamId) -> &str {
        self.teams.get(id.0).map(Team::name).unwrap_or("TBD")
    }

    /// Clears every team's game log so that the roster can be simulated afresh.
    pub fn reset(&mut self) {
        for team in &mut self.teams {
            team.log.clear();
        }
    }
}

impl Index<TeamId> for Roster {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Self::Output {
        &self.teams[id.0]
    }
}

impl FromIterator<Team> for Roster {
    fn from_iter<T: IntoIterator<Item = Team>>(iter: T) -> Self {
        Self {
            teams: iter.into_iter().collect(),
        }
    }
}
