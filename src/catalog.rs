//! Catalogue of regional formats.
//!
//! Each format is a static wiring table: a list of fixtures, each naming the two entrants that
//! meet, followed by a placement table of tiers. Entrants are either seeds, pool finishers or the
//! winner or loser of an earlier fixture, referred to by label. Fixtures are listed so that every
//! label is defined before it is used.

use rustc_hash::FxHashMap;
use strum_macros::{EnumCount, EnumIter, EnumString};

use crate::bracket::Bracket;
use crate::catalog::Entrant::{Loser, Pool, Seed, Winner};
use crate::config::SimConfig;
use crate::error::{ConfigurationError, Error};
use crate::game::Level::{
    Consolation, Crossover, FifthPlace, Final, PreQuarter, Quarter, SecondPlace, Semi,
    SeventhPlace, ThirdPlace,
};
use crate::game::{Game, GameId, Level};
use crate::team::TeamId;
use crate::tournament::PlaceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    RoundRobin,
    FourSingle,
    FourDouble,
    SixSingle,
    SixDouble,
    SevenSingle,
    SevenDouble,
    EightSingle,
    EightTriple,
    EightQuad,
    EightPools,
    EightPoolsBackdoor,
    TenPools,
    TenPoolsBackdoor,
    TwelvePools,
    TwelvePoolsBackdoor,
    TwelveSixPools,
    SixteenPools,
    SixteenPoolsBackdoor,
    SixteenPoolsQuad,
}
impl Format {
    /// Number of teams the format is built for, or `None` if it takes any number.
    pub fn teams(&self) -> Option<usize> {
        match self {
            Format::RoundRobin => None,
            Format::FourSingle | Format::FourDouble => Some(4),
            Format::SixSingle | Format::SixDouble => Some(6),
            Format::SevenSingle | Format::SevenDouble => Some(7),
            Format::EightSingle
            | Format::EightTriple
            | Format::EightQuad
            | Format::EightPools
            | Format::EightPoolsBackdoor => Some(8),
            Format::TenPools | Format::TenPoolsBackdoor => Some(10),
            Format::TwelvePools | Format::TwelvePoolsBackdoor | Format::TwelveSixPools => Some(12),
            Format::SixteenPools | Format::SixteenPoolsBackdoor | Format::SixteenPoolsQuad => {
                Some(16)
            }
        }
    }

    /// Seed numbers (1-based) making up each pool, for formats fed by pool play.
    pub fn pools(&self) -> &'static [&'static [usize]] {
        match self {
            Format::EightPools | Format::EightPoolsBackdoor => TWO_POOLS_OF_FOUR,
            Format::TenPools | Format::TenPoolsBackdoor => TWO_POOLS_OF_FIVE,
            Format::TwelvePools | Format::TwelvePoolsBackdoor => FOUR_POOLS_OF_THREE,
            Format::TwelveSixPools => TWO_POOLS_OF_SIX,
            Format::SixteenPools | Format::SixteenPoolsBackdoor | Format::SixteenPoolsQuad => {
                FOUR_POOLS_OF_FOUR
            }
            _ => &[],
        }
    }

    pub fn wiring(&self) -> Option<&'static Wiring> {
        match self {
            Format::RoundRobin => None,
            Format::FourSingle => Some(&FOUR_SINGLE),
            Format::FourDouble => Some(&FOUR_DOUBLE),
            Format::SixSingle => Some(&SIX_SINGLE),
            Format::SixDouble => Some(&SIX_DOUBLE),
            Format::SevenSingle => Some(&SEVEN_SINGLE),
            Format::SevenDouble => Some(&SEVEN_DOUBLE),
            Format::EightSingle => Some(&EIGHT_SINGLE),
            Format::EightTriple => Some(&EIGHT_TRIPLE),
            Format::EightQuad => Some(&EIGHT_QUAD),
            Format::EightPools => Some(&EIGHT_POOLS),
            Format::EightPoolsBackdoor => Some(&EIGHT_POOLS_BACKDOOR),
            Format::TenPools => Some(&TEN_POOLS),
            Format::TenPoolsBackdoor => Some(&TEN_POOLS_BACKDOOR),
            Format::TwelvePools => Some(&TWELVE_POOLS),
            Format::TwelvePoolsBackdoor => Some(&TWELVE_POOLS_BACKDOOR),
            Format::TwelveSixPools => Some(&TWELVE_SIX_POOLS),
            Format::SixteenPools => Some(&SIXTEEN_POOLS),
            Format::SixteenPoolsBackdoor => Some(&SIXTEEN_POOLS_BACKDOOR),
            Format::SixteenPoolsQuad => Some(&SIXTEEN_POOLS_QUAD),
        }
    }
}

/// Picks the format for a region of `teams` teams sending `bids` teams onward.
pub fn select(teams: usize, bids: usize) -> Result<Format, ConfigurationError> {
    let format = match (teams, bids) {
        (3, 1..=2) | (5, 1..=4) => Format::RoundRobin,
        (4, 1) => Format::FourSingle,
        (4, 2..=3) => Format::FourDouble,
        (6, 1) => Format::SixSingle,
        (6, 2..=4) => Format::SixDouble,
        (7, 1) => Format::SevenSingle,
        (7, 2..=4) => Format::SevenDouble,
        (8, 1) => Format::EightPools,
        (8, 2..=4) => Format::EightPoolsBackdoor,
        (10, 1) => Format::TenPools,
        (10, 2..=4) => Format::TenPoolsBackdoor,
        (12, 1) => Format::TwelvePools,
        (12, 2..=3) => Format::TwelvePoolsBackdoor,
        (12, 4) => Format::TwelveSixPools,
        (16, 1) => Format::SixteenPools,
        (16, 2..=3) => Format::SixteenPoolsBackdoor,
        (16, 4) => Format::SixteenPoolsQuad,
        _ => return Err(ConfigurationError::UnsupportedFormat { teams, bids }),
    };
    Ok(format)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrant {
    /// 1-based seed.
    Seed(usize),
    /// 0-based pool, 1-based finishing place within it.
    Pool(usize, usize),
    Winner(&'static str),
    Loser(&'static str),
}

#[derive(Debug)]
pub struct Fixture {
    pub label: &'static str,
    pub level: Level,
    pub a: Entrant,
    pub b: Entrant,
}

const fn fixture(label: &'static str, level: Level, a: Entrant, b: Entrant) -> Fixture {
    Fixture { label, level, a, b }
}

#[derive(Debug)]
pub struct Wiring {
    pub fixtures: &'static [Fixture],
    pub places: &'static [&'static [Entrant]],
}

/// Builds the bracket of a catalogued format along with its placement tiers.
pub fn build(
    format: Format,
    seeds: &[TeamId],
    pools: &[Vec<TeamId>],
    config: &SimConfig,
) -> Result<(Bracket, Vec<Vec<PlaceSource>>), Error> {
    let wiring = format
        .wiring()
        .ok_or_else(|| Error::InvalidWiring(format!("{format} has no fixed wiring")))?;
    if let Some(teams) = format.teams() {
        if seeds.len() != teams {
            return Err(Error::InvalidWiring(format!(
                "{format} takes {teams} seeds, got {}",
                seeds.len()
            )));
        }
    }

    let mut bracket = Bracket::default();
    let mut labels = FxHashMap::default();
    for fixture in wiring.fixtures {
        let a = resolve(fixture.a, seeds, pools, &labels)?;
        let b = resolve(fixture.b, seeds, pools, &labels)?;
        let game = Game::new(a.into(), b.into(), config.clone())
            .with_level(fixture.level)
            .with_label(fixture.label);
        let id = bracket.add(game)?;
        labels.insert(fixture.label, id);
    }

    let tiers = wiring
        .places
        .iter()
        .map(|tier| {
            tier.iter()
                .map(|&entrant| resolve(entrant, seeds, pools, &labels))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((bracket, tiers))
}

fn resolve(
    entrant: Entrant,
    seeds: &[TeamId],
    pools: &[Vec<TeamId>],
    labels: &FxHashMap<&'static str, GameId>,
) -> Result<PlaceSource, Error> {
    match entrant {
        Entrant::Seed(seed) => seed
            .checked_sub(1)
            .and_then(|index| seeds.get(index))
            .map(|&team| PlaceSource::Team(team))
            .ok_or_else(|| Error::InvalidWiring(format!("no seed {seed}"))),
        Entrant::Pool(pool, place) => place
            .checked_sub(1)
            .and_then(|index| pools.get(pool)?.get(index))
            .map(|&team| PlaceSource::Team(team))
            .ok_or_else(|| Error::InvalidWiring(format!("no place {place} in pool {pool}"))),
        Entrant::Winner(label) => labels
            .get(label)
            .map(|&game| PlaceSource::Winner(game))
            .ok_or_else(|| Error::InvalidWiring(format!("no game labelled {label}"))),
        Entrant::Loser(label) => labels
            .get(label)
            .map(|&game| PlaceSource::Loser(game))
            .ok_or_else(|| Error::InvalidWiring(format!("no game labelled {label}"))),
    }
}

pub const TWO_POOLS_OF_FOUR: &[&[usize]] = &[&[1, 4, 6, 7], &[2, 3, 5, 8]];
pub const TWO_POOLS_OF_FIVE: &[&[usize]] = &[&[1, 3, 6, 8, 9], &[2, 4, 5, 7, 10]];
pub const TWO_POOLS_OF_SIX: &[&[usize]] = &[&[1, 4, 5, 7, 10, 12], &[2, 3, 6, 8, 9, 11]];
pub const FOUR_POOLS_OF_THREE: &[&[usize]] = &[&[1, 8, 9], &[2, 7, 10], &[3, 6, 11], &[4, 5, 12]];
pub const FOUR_POOLS_OF_FOUR: &[&[usize]] = &[
    &[1, 8, 12, 16],
    &[2, 7, 11, 15],
    &[3, 6, 10, 14],
    &[4, 5, 9, 13],
];

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;

static FOUR_SINGLE: Wiring = Wiring {
    fixtures: &[
        fixture("semi1", Semi, Seed(1), Seed(4)),
        fixture("semi2", Semi, Seed(2), Seed(3)),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
    ],
};

/// The final loser gets a second chance against the winner of the backdoor game.
static FOUR_DOUBLE: Wiring = Wiring {
    fixtures: &[
        fixture("semi1", Semi, Seed(1), Seed(4)),
        fixture("semi2", Semi, Seed(2), Seed(3)),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("backdoor", Consolation, Loser("semi1"), Loser("semi2")),
        fixture("second", SecondPlace, Loser("final"), Winner("backdoor")),
    ],
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("backdoor")],
    ],
};

static SIX_SINGLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(4), Seed(5)),
        fixture("q2", Quarter, Seed(3), Seed(6)),
        fixture("semi1", Semi, Seed(1), Winner("q1")),
        fixture("semi2", Semi, Seed(2), Winner("q2")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("fifth", FifthPlace, Loser("q1"), Loser("q2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
    ],
};

static SIX_DOUBLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(4), Seed(5)),
        fixture("q2", Quarter, Seed(3), Seed(6)),
        fixture("semi1", Semi, Seed(1), Winner("q1")),
        fixture("semi2", Semi, Seed(2), Winner("q2")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("fifth", FifthPlace, Loser("q1"), Loser("q2")),
        fixture("second", SecondPlace, Loser("final"), Winner("third")),
    ],
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
    ],
};

/// The top seed gets a bye; the losers of the lower quarters meet for a shot at fifth.
static SEVEN_SINGLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(4), Seed(5)),
        fixture("q2", Quarter, Seed(2), Seed(7)),
        fixture("q3", Quarter, Seed(3), Seed(6)),
        fixture("semi1", Semi, Seed(1), Winner("q1")),
        fixture("semi2", Semi, Winner("q2"), Winner("q3")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("cons", Consolation, Loser("q2"), Loser("q3")),
        fixture("fifth", FifthPlace, Loser("q1"), Winner("cons")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Loser("cons")],
    ],
};

static SEVEN_DOUBLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(4), Seed(5)),
        fixture("q2", Quarter, Seed(2), Seed(7)),
        fixture("q3", Quarter, Seed(3), Seed(6)),
        fixture("semi1", Semi, Seed(1), Winner("q1")),
        fixture("semi2", Semi, Winner("q2"), Winner("q3")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("cons", Consolation, Loser("q2"), Loser("q3")),
        fixture("fifth", FifthPlace, Loser("q1"), Winner("cons")),
        fixture("second", SecondPlace, Loser("final"), Winner("third")),
    ],
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Loser("cons")],
    ],
};

static EIGHT_SINGLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(1), Seed(8)),
        fixture("q2", Quarter, Seed(2), Seed(7)),
        fixture("q3", Quarter, Seed(3), Seed(6)),
        fixture("q4", Quarter, Seed(4), Seed(5)),
        fixture("semi1", Semi, Winner("q1"), Winner("q4")),
        fixture("semi2", Semi, Winner("q2"), Winner("q3")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Loser("semi1"), Loser("semi2")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
    ],
};

/// Beaten semifinalists cross over against the consolation winners for a shot at third.
static EIGHT_TRIPLE: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(1), Seed(8)),
        fixture("q2", Quarter, Seed(2), Seed(7)),
        fixture("q3", Quarter, Seed(3), Seed(6)),
        fixture("q4", Quarter, Seed(4), Seed(5)),
        fixture("semi1", Semi, Winner("q1"), Winner("q4")),
        fixture("semi2", Semi, Winner("q2"), Winner("q3")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("c1", Consolation, Loser("q1"), Loser("q4")),
        fixture("c2", Consolation, Loser("q2"), Loser("q3")),
        fixture("x1", Crossover, Loser("semi1"), Winner("c2")),
        fixture("x2", Crossover, Loser("semi2"), Winner("c1")),
        fixture("third", ThirdPlace, Winner("x1"), Winner("x2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Loser("x1"), Loser("x2")],
        &[Loser("c1"), Loser("c2")],
    ],
};

static EIGHT_QUAD: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Seed(1), Seed(8)),
        fixture("q2", Quarter, Seed(2), Seed(7)),
        fixture("q3", Quarter, Seed(3), Seed(6)),
        fixture("q4", Quarter, Seed(4), Seed(5)),
        fixture("semi1", Semi, Winner("q1"), Winner("q4")),
        fixture("semi2", Semi, Winner("q2"), Winner("q3")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("c1", Consolation, Loser("q1"), Loser("q4")),
        fixture("c2", Consolation, Loser("q2"), Loser("q3")),
        fixture("fifth", FifthPlace, Winner("c1"), Winner("c2")),
        fixture("seventh", SeventhPlace, Loser("c1"), Loser("c2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
    ],
};

/// Two pools feed crossover semis. Also used by ten-team regions, whose pool fifths share ninth.
const TWO_POOL_FIXTURES: &[Fixture] = &[
    fixture("semi1", Semi, Pool(A, 1), Pool(B, 2)),
    fixture("semi2", Semi, Pool(B, 1), Pool(A, 2)),
    fixture("final", Final, Winner("semi1"), Winner("semi2")),
    fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
    fixture("fifth", FifthPlace, Pool(A, 3), Pool(B, 3)),
    fixture("seventh", SeventhPlace, Pool(A, 4), Pool(B, 4)),
];

/// As [TWO_POOL_FIXTURES], with the final loser given a second chance against the third-place
/// winner.
const TWO_POOL_BACKDOOR_FIXTURES: &[Fixture] = &[
    fixture("semi1", Semi, Pool(A, 1), Pool(B, 2)),
    fixture("semi2", Semi, Pool(B, 1), Pool(A, 2)),
    fixture("final", Final, Winner("semi1"), Winner("semi2")),
    fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
    fixture("second", SecondPlace, Loser("final"), Winner("third")),
    fixture("fifth", FifthPlace, Pool(A, 3), Pool(B, 3)),
    fixture("seventh", SeventhPlace, Pool(A, 4), Pool(B, 4)),
];

static EIGHT_POOLS: Wiring = Wiring {
    fixtures: TWO_POOL_FIXTURES,
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
    ],
};

static EIGHT_POOLS_BACKDOOR: Wiring = Wiring {
    fixtures: TWO_POOL_BACKDOOR_FIXTURES,
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
    ],
};

static TEN_POOLS: Wiring = Wiring {
    fixtures: TWO_POOL_FIXTURES,
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
        &[Pool(A, 5), Pool(B, 5)],
    ],
};

static TEN_POOLS_BACKDOOR: Wiring = Wiring {
    fixtures: TWO_POOL_BACKDOOR_FIXTURES,
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
        &[Pool(A, 5), Pool(B, 5)],
    ],
};

/// Pool winners wait in the quarters for the prequarter winners from the opposite half.
static TWELVE_POOLS: Wiring = Wiring {
    fixtures: &[
        fixture("pre1", PreQuarter, Pool(B, 2), Pool(C, 3)),
        fixture("pre2", PreQuarter, Pool(C, 2), Pool(B, 3)),
        fixture("pre3", PreQuarter, Pool(A, 2), Pool(D, 3)),
        fixture("pre4", PreQuarter, Pool(D, 2), Pool(A, 3)),
        fixture("q1", Quarter, Pool(A, 1), Winner("pre1")),
        fixture("q2", Quarter, Pool(D, 1), Winner("pre2")),
        fixture("q3", Quarter, Pool(C, 1), Winner("pre3")),
        fixture("q4", Quarter, Pool(B, 1), Winner("pre4")),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
        &[Loser("pre1"), Loser("pre2"), Loser("pre3"), Loser("pre4")],
    ],
};

static TWELVE_POOLS_BACKDOOR: Wiring = Wiring {
    fixtures: &[
        fixture("pre1", PreQuarter, Pool(B, 2), Pool(C, 3)),
        fixture("pre2", PreQuarter, Pool(C, 2), Pool(B, 3)),
        fixture("pre3", PreQuarter, Pool(A, 2), Pool(D, 3)),
        fixture("pre4", PreQuarter, Pool(D, 2), Pool(A, 3)),
        fixture("q1", Quarter, Pool(A, 1), Winner("pre1")),
        fixture("q2", Quarter, Pool(D, 1), Winner("pre2")),
        fixture("q3", Quarter, Pool(C, 1), Winner("pre3")),
        fixture("q4", Quarter, Pool(B, 1), Winner("pre4")),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("second", SecondPlace, Loser("final"), Winner("third")),
    ],
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
        &[Loser("pre1"), Loser("pre2"), Loser("pre3"), Loser("pre4")],
    ],
};

static TWELVE_SIX_POOLS: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Pool(A, 1), Pool(B, 4)),
        fixture("q2", Quarter, Pool(B, 2), Pool(A, 3)),
        fixture("q3", Quarter, Pool(B, 1), Pool(A, 4)),
        fixture("q4", Quarter, Pool(A, 2), Pool(B, 3)),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("c1", Consolation, Loser("q1"), Loser("q2")),
        fixture("c2", Consolation, Loser("q3"), Loser("q4")),
        fixture("fifth", FifthPlace, Winner("c1"), Winner("c2")),
        fixture("seventh", SeventhPlace, Loser("c1"), Loser("c2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Winner("fifth")],
        &[Loser("fifth")],
        &[Winner("seventh")],
        &[Loser("seventh")],
        &[Pool(A, 5), Pool(B, 5)],
        &[Pool(A, 6), Pool(B, 6)],
    ],
};

static SIXTEEN_POOLS: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Pool(A, 1), Pool(B, 2)),
        fixture("q2", Quarter, Pool(D, 1), Pool(C, 2)),
        fixture("q3", Quarter, Pool(C, 1), Pool(D, 2)),
        fixture("q4", Quarter, Pool(B, 1), Pool(A, 2)),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Loser("semi1"), Loser("semi2")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
        &[Pool(A, 3), Pool(B, 3), Pool(C, 3), Pool(D, 3)],
        &[Pool(A, 4), Pool(B, 4), Pool(C, 4), Pool(D, 4)],
    ],
};

static SIXTEEN_POOLS_BACKDOOR: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Pool(A, 1), Pool(B, 2)),
        fixture("q2", Quarter, Pool(D, 1), Pool(C, 2)),
        fixture("q3", Quarter, Pool(C, 1), Pool(D, 2)),
        fixture("q4", Quarter, Pool(B, 1), Pool(A, 2)),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
        fixture("second", SecondPlace, Loser("final"), Winner("third")),
    ],
    places: &[
        &[Winner("final")],
        &[Winner("second")],
        &[Loser("second")],
        &[Loser("third")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
        &[Pool(A, 3), Pool(B, 3), Pool(C, 3), Pool(D, 3)],
        &[Pool(A, 4), Pool(B, 4), Pool(C, 4), Pool(D, 4)],
    ],
};

static SIXTEEN_POOLS_QUAD: Wiring = Wiring {
    fixtures: &[
        fixture("q1", Quarter, Pool(A, 1), Pool(B, 2)),
        fixture("q2", Quarter, Pool(D, 1), Pool(C, 2)),
        fixture("q3", Quarter, Pool(C, 1), Pool(D, 2)),
        fixture("q4", Quarter, Pool(B, 1), Pool(A, 2)),
        fixture("semi1", Semi, Winner("q1"), Winner("q2")),
        fixture("semi2", Semi, Winner("q3"), Winner("q4")),
        fixture("final", Final, Winner("semi1"), Winner("semi2")),
        fixture("third", ThirdPlace, Loser("semi1"), Loser("semi2")),
    ],
    places: &[
        &[Winner("final")],
        &[Loser("final")],
        &[Winner("third")],
        &[Loser("third")],
        &[Loser("q1"), Loser("q2"), Loser("q3"), Loser("q4")],
        &[Pool(A, 3), Pool(B, 3), Pool(C, 3), Pool(D, 3)],
        &[Pool(A, 4), Pool(B, 4), Pool(C, 4), Pool(D, 4)],
    ],
};

#[cfg(test)]
mod tests;
