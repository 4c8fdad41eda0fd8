//! An arena of games wired into a dependency graph.
//!
//! Games refer to one another by [GameId]. A game may only be fed by games added before it, so
//! the arena order is always a valid evaluation order and the graph can never contain a cycle.

use std::ops::Index;

use tinyrand::Rand;

use crate::config::Overrides;
use crate::error::Error;
use crate::game::{Game, GameId, Level, Outcome, Slot};
use crate::sim;
use crate::team::{Appearance, Roster, TeamId};

#[derive(Debug, Clone, Default)]
pub struct Bracket {
    games: Vec<Game>,
}
impl Bracket {
    /// Appends a game, rejecting feeds from games that do not yet exist and results that have
    /// already been claimed by another slot.
    pub fn add(&mut self, game: Game) -> Result<GameId, Error> {
        let id = GameId::index(self.games.len());
        let slots = game.slots();
        for (index, slot) in slots.iter().enumerate() {
            let Some((feeder, take)) = slot.feed() else {
                continue;
            };
            if feeder.as_index() >= self.games.len() {
                return Err(Error::InvalidWiring(format!(
                    "slot {index} of {id} is fed by {feeder}, which has not been added"
                )));
            }
            let claimed_here = index == 1 && slots[0].feed() == Some((feeder, take));
            if claimed_here || self.is_claimed(slot) {
                return Err(Error::InvalidWiring(format!(
                    "the {take} of {feeder} already feeds another slot"
                )));
            }
        }
        self.games.push(game);
        Ok(id)
    }

    fn is_claimed(&self, slot: &Slot) -> bool {
        self.games
            .iter()
            .flat_map(|game| game.slots().iter())
            .any(|existing| existing == slot)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: GameId) -> Result<&Game, Error> {
        self.games
            .get(id.as_index())
            .ok_or_else(|| Error::InvalidWiring(format!("no such game {id}")))
    }

    #[cfg(test)]
    pub(crate) fn game_mut(&mut self, id: GameId) -> &mut Game {
        &mut self.games[id.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameId, &Game)> {
        self.games
            .iter()
            .enumerate()
            .map(|(index, game)| (GameId::index(index), game))
    }

    /// Games at the given level, in the order they were added.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = (GameId, &Game)> {
        self.iter().filter(move |(_, game)| game.level() == Some(level))
    }

    pub fn is_played(&self) -> bool {
        self.games.iter().all(Game::is_played)
    }

    /// Plays a game, first playing any unplayed games that feed it. The same overrides apply to
    /// every game played along the way. Playing a game that has already been played does
    /// nothing. A game whose config, once overridden, is unusable is rejected before any of its
    /// feeders are played.
    pub fn play(
        &mut self,
        id: GameId,
        roster: &mut Roster,
        overrides: &Overrides,
        rand: &mut impl Rand,
    ) -> Result<(), Error> {
        let game = self.get(id)?;
        if game.is_played() {
            return Ok(());
        }
        let config = overrides.apply(game.config())?;
        let slots = *game.slots();

        let mut teams = [TeamId::index(0); 2];
        for (index, slot) in slots.into_iter().enumerate() {
            teams[index] = match slot {
                Slot::Team(team) => team,
                Slot::Feed { game: feeder, take } => {
                    self.play(feeder, roster, overrides, rand)?;
                    self.games[feeder.as_index()]
                        .outcome()
                        .map(|outcome| outcome.take(take))
                        .ok_or(Error::NotPlayed)?
                }
                Slot::Vacant => return Err(Error::MissingParticipant { game: id, slot: index }),
            };
        }
        let [team_a, team_b] = teams;

        let game = &mut self.games[id.as_index()];
        let rating_a = roster.get(team_a)?.rating();
        let rating_b = roster.get(team_b)?.rating();
        let expected = sim::expected_score(rating_a, rating_b, config.game_to, &config.margin);
        let score = sim::simulate_expected(&expected, rating_a, rating_b, &config, rand);

        let level = game.level().unwrap_or(Level::Pool);
        roster.get_mut(team_a)?.append(Appearance {
            opponent: team_b,
            points_for: score.a(),
            points_against: score.b(),
            level,
        });
        roster.get_mut(team_b)?.append(Appearance {
            opponent: team_a,
            points_for: score.b(),
            points_against: score.a(),
            level,
        });
        game.set_outcome(Outcome {
            team_a,
            team_b,
            expected,
            score,
            game_to: config.game_to,
        });
        Ok(())
    }

    /// Plays every game in the order it was added.
    pub fn play_all(
        &mut self,
        roster: &mut Roster,
        overrides: &Overrides,
        rand: &mut impl Rand,
    ) -> Result<(), Error> {
        for index in 0..self.games.len() {
            self.play(GameId::index(index), roster, overrides, rand)?;
        }
        Ok(())
    }
}

impl Index<GameId> for Bracket {
    type Output = Game;

    fn index(&self, id: GameId) -> &Self::Output {
        &self.games[id.as_index()]
    }
}
