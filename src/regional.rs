//! A complete regional: pool play where the format calls for it, then the bracket, then the bids.

use tinyrand::Rand;
use tracing::debug;

use crate::catalog::{self, Format};
use crate::config::{Overrides, SimConfig};
use crate::error::Error;
use crate::team::{Roster, TeamId};
use crate::tournament::{Standing, Tournament};

#[derive(Debug, Clone)]
pub struct Regional {
    pub format: Format,
    pub pools: Vec<Tournament>,
    pub bracket: Tournament,
    pub standings: Vec<Standing>,
    pub qualifiers: Vec<TeamId>,
}

pub fn pool_name(index: usize) -> String {
    format!("Pool {}", (b'A' + index as u8) as char)
}

/// Plays a regional among `seeds`, listed best seed first, awarding `bids` places onward.
pub fn play_regional(
    roster: &mut Roster,
    seeds: &[TeamId],
    bids: usize,
    config: &SimConfig,
    rand: &mut impl Rand,
) -> Result<Regional, Error> {
    play_regional_with(roster, seeds, bids, config, &Overrides::none(), rand)
}

/// As [play_regional], with overrides applied to every game.
pub fn play_regional_with(
    roster: &mut Roster,
    seeds: &[TeamId],
    bids: usize,
    config: &SimConfig,
    overrides: &Overrides,
    rand: &mut impl Rand,
) -> Result<Regional, Error> {
    config.validate()?;
    let format = catalog::select(seeds.len(), bids)?;
    debug!("{} teams with {bids} bids play {format}", seeds.len());

    let mut pools = Vec::with_capacity(format.pools().len());
    let mut finishes = Vec::with_capacity(format.pools().len());
    for (index, pool) in format.pools().iter().enumerate() {
        let entrants = pool.iter().map(|&seed| seeds[seed - 1]).collect();
        let mut tournament = Tournament::round_robin(pool_name(index), entrants, config)?;
        tournament.play(roster, overrides, rand)?;
        let finish: Vec<_> = tournament
            .determine_placement()?
            .into_iter()
            .map(|standing| standing.team)
            .collect();
        debug!(
            "{} finished {:?}",
            tournament.name(),
            finish.iter().map(|&team| roster.name(team)).collect::<Vec<_>>()
        );
        finishes.push(finish);
        pools.push(tournament);
    }

    let mut bracket = Tournament::from_format(format, seeds, &finishes, config)?;
    bracket.play(roster, overrides, rand)?;
    let standings = bracket.determine_placement()?;
    let qualifiers: Vec<_> = standings
        .iter()
        .take_while(|standing| standing.place <= bids)
        .map(|standing| standing.team)
        .take(bids)
        .collect();
    debug!(
        "qualified: {:?}",
        qualifiers.iter().map(|&team| roster.name(team)).collect::<Vec<_>>()
    );

    Ok(Regional {
        format,
        pools,
        bracket,
        standings,
        qualifiers,
    })
}
