//! A tournament: a bracket of games together with the rule that turns its results into a
//! finishing order.

use std::fmt::{Display, Formatter};

use tinyrand::Rand;
use tracing::debug;

use crate::bracket::Bracket;
use crate::catalog::{self, Format};
use crate::config::{Overrides, SimConfig};
use crate::error::Error;
use crate::game::{GameId, GameSummary, Level, Slot};
use crate::round_robin::{self, Ranking};
use crate::team::{Roster, TeamId};

/// Where a finishing place is taken from once the bracket has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSource {
    Winner(GameId),
    Loser(GameId),
    Team(TeamId),
}

impl From<PlaceSource> for Slot {
    fn from(source: PlaceSource) -> Self {
        match source {
            PlaceSource::Winner(game) => Slot::winner(game),
            PlaceSource::Loser(game) => Slot::loser(game),
            PlaceSource::Team(team) => Slot::Team(team),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Placing {
    /// Only the champion is known: the winner of the sole final.
    FinalsWinner,
    /// Pool play, ranked with tie-breaks.
    RoundRobin,
    /// Tiers of finishers, best first. Every team in a tier shares a place.
    Table(Vec<Vec<PlaceSource>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub place: usize,
    pub team: TeamId,
}

impl Display for Standing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.place, self.team)
    }
}

#[derive(Debug, Clone)]
pub struct Tournament {
    name: String,
    format: Option<Format>,
    entrants: Vec<TeamId>,
    bracket: Bracket,
    placing: Placing,
    rankings: Vec<Ranking>,
    played: bool,
}
impl Tournament {
    /// A hand-wired bracket whose only placement is the winner of its final.
    pub fn custom(name: impl Into<String>, entrants: Vec<TeamId>, bracket: Bracket) -> Self {
        Self::new(name.into(), None, entrants, bracket, Placing::FinalsWinner)
    }

    pub fn round_robin(
        name: impl Into<String>,
        entrants: Vec<TeamId>,
        config: &SimConfig,
    ) -> Result<Self, Error> {
        let bracket = round_robin::schedule(&entrants, config)?;
        Ok(Self::new(
            name.into(),
            Some(Format::RoundRobin),
            entrants,
            bracket,
            Placing::RoundRobin,
        ))
    }

    /// Wires a catalogued format. `seeds` lists the entrants in seed order; `pools` holds the
    /// finishing order of each pool for formats that are fed by pool play, and is otherwise
    /// ignored.
    pub fn from_format(
        format: Format,
        seeds: &[TeamId],
        pools: &[Vec<TeamId>],
        config: &SimConfig,
    ) -> Result<Self, Error> {
        if format == Format::RoundRobin {
            return Self::round_robin(format.to_string(), seeds.to_vec(), config);
        }
        let (bracket, tiers) = catalog::build(format, seeds, pools, config)?;
        Ok(Self::new(
            format.to_string(),
            Some(format),
            seeds.to_vec(),
            bracket,
            Placing::Table(tiers),
        ))
    }

    fn new(
        name: String,
        format: Option<Format>,
        entrants: Vec<TeamId>,
        bracket: Bracket,
        placing: Placing,
    ) -> Self {
        Self {
            name,
            format,
            entrants,
            bracket,
            placing,
            rankings: vec![],
            played: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn entrants(&self) -> &[TeamId] {
        &self.entrants
    }

    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    pub fn placing(&self) -> &Placing {
        &self.placing
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Tie-break statistics of a played round robin, best first. Empty for other placings.
    pub fn rankings(&self) -> &[Ranking] {
        &self.rankings
    }

    /// Plays every game in construction order. A round robin also draws its tie-breaks here, so
    /// that placement is fixed once play is over. Playing twice does nothing.
    pub fn play(
        &mut self,
        roster: &mut Roster,
        overrides: &Overrides,
        rand: &mut impl Rand,
    ) -> Result<(), Error> {
        if self.played {
            return Ok(());
        }
        self.bracket.play_all(roster, overrides, rand)?;
        if self.placing == Placing::RoundRobin {
            self.rankings = round_robin::rank(&self.entrants, &self.bracket, rand)?;
        }
        self.played = true;
        debug!("played {} ({} games)", self.name, self.bracket.len());
        Ok(())
    }

    pub fn determine_placement(&self) -> Result<Vec<Standing>, Error> {
        if !self.played {
            return Err(Error::NotPlayed);
        }
        match &self.placing {
            Placing::FinalsWinner => {
                let finals: Vec<_> = self.bracket.at_level(Level::Final).collect();
                match finals.as_slice() {
                    [(_, game)] => Ok(vec![Standing {
                        place: 1,
                        team: game.winner().ok_or(Error::NotPlayed)?,
                    }]),
                    _ => Err(Error::AmbiguousFinal(finals.len())),
                }
            }
            Placing::RoundRobin => Ok(self
                .rankings
                .iter()
                .enumerate()
                .map(|(index, ranking)| Standing {
                    place: index + 1,
                    team: ranking.team,
                })
                .collect()),
            Placing::Table(tiers) => {
                let mut standings = Vec::with_capacity(self.entrants.len());
                for tier in tiers {
                    let place = standings.len() + 1;
                    for source in tier {
                        let team = match *source {
                            PlaceSource::Winner(game) => self.bracket.get(game)?.winner(),
                            PlaceSource::Loser(game) => self.bracket.get(game)?.loser(),
                            PlaceSource::Team(team) => Some(team),
                        };
                        standings.push(Standing {
                            place,
                            team: team.ok_or(Error::NotPlayed)?,
                        });
                    }
                }
                Ok(standings)
            }
        }
    }

    /// Flat records of every played game, in construction order.
    pub fn summaries(&self, roster: &Roster) -> Vec<GameSummary> {
        self.bracket
            .iter()
            .filter_map(|(_, game)| game.summary(roster))
            .collect()
    }
}

#[cfg(test)]
mod tests;
