//! Monte Carlo estimation of finishing positions: the same regional is played many times over on
//! a freshly reset roster, and the places each seed finishes in are counted.

use tinyrand::Rand;
use tracing::debug;

use crate::config::SimConfig;
use crate::error::Error;
use crate::linear::Matrix;
use crate::regional;
use crate::team::{Roster, TeamId};

/// Finishing counts over a number of simulated regionals. Rows follow the seed order; columns are
/// places, best first.
#[derive(Debug, Clone)]
pub struct Tally {
    seeds: Vec<TeamId>,
    bids: usize,
    trials: u64,
    finishes: Matrix<u64>,
    qualifications: Vec<u64>,
}
impl Tally {
    pub fn new(seeds: Vec<TeamId>, bids: usize) -> Self {
        let teams = seeds.len();
        Self {
            seeds,
            bids,
            trials: 0,
            finishes: Matrix::allocate(teams, teams),
            qualifications: vec![0; teams],
        }
    }

    pub fn seeds(&self) -> &[TeamId] {
        &self.seeds
    }

    pub fn bids(&self) -> usize {
        self.bids
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn finishes(&self) -> &Matrix<u64> {
        &self.finishes
    }

    /// Probability that the team at `seed_index` finishes in `place` (1-based).
    pub fn finish_prob(&self, seed_index: usize, place: usize) -> f64 {
        self.prob(self.finishes[(seed_index, place - 1)])
    }

    pub fn qualify_prob(&self, seed_index: usize) -> f64 {
        self.prob(self.qualifications[seed_index])
    }

    /// Mean finishing place of the team at `seed_index`.
    pub fn mean_place(&self, seed_index: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let total: u64 = self
            .finishes
            .row_slice(seed_index)
            .iter()
            .enumerate()
            .map(|(col, &count)| (col as u64 + 1) * count)
            .sum();
        total as f64 / self.trials as f64
    }

    fn prob(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }

    fn record(&mut self, regional: &regional::Regional) -> Result<(), Error> {
        for standing in &regional.standings {
            let row = self.row_of(standing.team)?;
            self.finishes[(row, standing.place - 1)] += 1;
        }
        for &team in &regional.qualifiers {
            let row = self.row_of(team)?;
            self.qualifications[row] += 1;
        }
        self.trials += 1;
        Ok(())
    }

    fn row_of(&self, team: TeamId) -> Result<usize, Error> {
        self.seeds
            .iter()
            .position(|&seed| seed == team)
            .ok_or(Error::UnknownTeam(team))
    }
}

/// Plays `trials` independent regionals among `seeds` and counts where every team finishes.
/// Team logs are cleared before each trial; the roster is left holding the last trial's games.
pub fn tally(
    trials: u64,
    roster: &mut Roster,
    seeds: &[TeamId],
    bids: usize,
    config: &SimConfig,
    rand: &mut impl Rand,
) -> Result<Tally, Error> {
    let mut tally = Tally::new(seeds.to_vec(), bids);
    for _ in 0..trials {
        roster.reset();
        let regional = regional::play_regional(roster, seeds, bids, config, rand)?;
        tally.record(&regional)?;
    }
    debug!("tallied {trials} regionals of {} teams", seeds.len());
    Ok(tally)
}
