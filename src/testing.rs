//! Testing helpers.

use crate::team::{Roster, Team, TeamId};

/// A roster of `n` teams named by seed, with ratings falling 50 points per seed from 2400.
pub fn roster(n: usize) -> (Roster, Vec<TeamId>) {
    let roster: Roster = (0..n)
        .map(|index| Team::new(format!("Seed {}", index + 1), 2400.0 - index as f64 * 50.0))
        .collect();
    let seeds = roster.ids().collect();
    (roster, seeds)
}
