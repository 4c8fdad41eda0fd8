use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};
use tinyrand::{Seeded, StdRand};

use super::*;
use crate::config::Overrides;
use crate::rating::Division;
use crate::sim::Method;
use crate::testing::roster;
use crate::tournament::Tournament;

const SUPPORTED: [(usize, &[usize]); 9] = [
    (3, &[1, 2]),
    (4, &[1, 2, 3]),
    (5, &[1, 2, 3, 4]),
    (6, &[1, 2, 3, 4]),
    (7, &[1, 2, 3, 4]),
    (8, &[1, 2, 3, 4]),
    (10, &[1, 2, 3, 4]),
    (12, &[1, 2, 3, 4]),
    (16, &[1, 2, 3, 4]),
];

/// Pool finishes as if every pool went exactly to seed.
fn chalk_pools(format: Format, seeds: &[TeamId]) -> Vec<Vec<TeamId>> {
    format
        .pools()
        .iter()
        .map(|pool| pool.iter().map(|&seed| seeds[seed - 1]).collect())
        .collect()
}

#[test]
fn select_table() {
    assert_eq!(Format::RoundRobin, select(3, 2).unwrap());
    assert_eq!(Format::FourDouble, select(4, 3).unwrap());
    assert_eq!(Format::RoundRobin, select(5, 4).unwrap());
    assert_eq!(Format::SevenDouble, select(7, 2).unwrap());
    assert_eq!(Format::EightPools, select(8, 1).unwrap());
    assert_eq!(Format::EightPoolsBackdoor, select(8, 3).unwrap());
    assert_eq!(Format::EightPoolsBackdoor, select(8, 4).unwrap());
    assert_eq!(Format::TenPools, select(10, 1).unwrap());
    assert_eq!(Format::TenPoolsBackdoor, select(10, 3).unwrap());
    assert_eq!(Format::TwelveSixPools, select(12, 4).unwrap());
    assert_eq!(Format::SixteenPoolsQuad, select(16, 4).unwrap());
    for (teams, bids) in [(2, 1), (3, 3), (4, 4), (8, 0), (9, 1), (10, 5), (15, 2), (16, 5)] {
        assert_eq!(
            ConfigurationError::UnsupportedFormat { teams, bids },
            select(teams, bids).unwrap_err()
        );
    }
}

#[test]
fn selected_formats_fit_the_region() {
    for (teams, bids) in SUPPORTED {
        for &bids in bids {
            let format = select(teams, bids).unwrap();
            if let Some(format_teams) = format.teams() {
                assert_eq!(teams, format_teams, "{format}");
            }
        }
    }
}

#[test]
fn every_bid_gets_its_own_place() {
    for (teams, bids) in SUPPORTED {
        for &bids in bids {
            let format = select(teams, bids).unwrap();
            let Some(wiring) = format.wiring() else {
                continue;
            };
            for tier in &wiring.places[..bids] {
                assert_eq!(1, tier.len(), "{format} shares a qualifying place with {bids} bids");
            }
        }
    }
}

#[test]
fn pools_partition_the_seeds() {
    for format in Format::iter() {
        let pools = format.pools();
        if pools.is_empty() {
            continue;
        }
        let mut seeds: Vec<_> = pools.iter().flat_map(|pool| pool.iter().copied()).collect();
        seeds.sort();
        assert_eq!((1..=format.teams().unwrap()).collect::<Vec<_>>(), seeds, "{format}");
    }
}

#[test]
fn every_format_places_every_team_once() {
    let mut rand = StdRand::seed(17);
    let mut wired = 0;
    for format in Format::iter() {
        let Some(teams) = format.teams() else {
            continue;
        };
        let (mut roster, seeds) = roster(teams);
        let pools = chalk_pools(format, &seeds);
        let mut tournament =
            Tournament::from_format(format, &seeds, &pools, &Division::Men.config()).unwrap();
        tournament.play(&mut roster, &Overrides::none(), &mut rand).unwrap();
        let standings = tournament.determine_placement().unwrap();

        let mut placed: Vec<_> = standings.iter().map(|standing| standing.team).collect();
        placed.sort();
        assert_eq!(seeds, placed, "{format}");
        assert_eq!(1, standings[0].place);
        assert_ne!(1, standings[1].place, "{format}");
        for pair in standings.windows(2) {
            assert!(pair[0].place <= pair[1].place, "{format}");
        }
        wired += 1;
    }
    assert_eq!(Format::COUNT - 1, wired);
}

#[test]
fn chalk_holds_under_higher_rating() {
    for format in Format::iter().filter(|format| format.wiring().is_some()) {
        let (mut roster, seeds) = roster(format.teams().unwrap());
        let pools = chalk_pools(format, &seeds);
        let mut tournament =
            Tournament::from_format(format, &seeds, &pools, &Division::Women.config()).unwrap();
        tournament
            .play(&mut roster, &Overrides::method(Method::HigherRating), &mut StdRand::seed(0))
            .unwrap();
        let standings = tournament.determine_placement().unwrap();
        assert_eq!(seeds[0], standings[0].team, "{format}");
        assert_eq!(seeds[1], standings[1].team, "{format}");
    }
}

#[test]
fn wrong_seed_count_rejected() {
    let (_, seeds) = roster(6);
    assert_eq!(
        Error::InvalidWiring("eight_single takes 8 seeds, got 6".into()),
        build(Format::EightSingle, &seeds, &[], &Division::Men.config()).unwrap_err()
    );
}

#[test]
fn missing_pool_finishers_rejected() {
    let (_, seeds) = roster(8);
    let pools = vec![seeds[..4].to_vec()];
    assert_eq!(
        Error::InvalidWiring("no place 2 in pool 1".into()),
        build(Format::EightPools, &seeds, &pools, &Division::Men.config()).unwrap_err()
    );
}

#[test]
fn format_names() {
    assert_eq!("eight_pools_backdoor", Format::EightPoolsBackdoor.to_string());
    assert_eq!(Format::TwelveSixPools, Format::from_str("twelve_six_pools").unwrap());
}

#[test]
fn ten_team_pools_share_ninth() {
    let (mut roster, seeds) = roster(10);
    let pools = chalk_pools(Format::TenPools, &seeds);
    assert_eq!(vec![seeds[0], seeds[2], seeds[5], seeds[7], seeds[8]], pools[0]);
    let mut tournament =
        Tournament::from_format(Format::TenPools, &seeds, &pools, &Division::Men.config()).unwrap();
    tournament
        .play(&mut roster, &Overrides::method(Method::HigherRating), &mut StdRand::seed(0))
        .unwrap();
    let standings = tournament.determine_placement().unwrap();
    assert_eq!(
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 9],
        standings.iter().map(|standing| standing.place).collect::<Vec<_>>()
    );
    assert_eq!(vec![seeds[8], seeds[9]], vec![standings[8].team, standings[9].team]);
    // pool fifths play no bracket games
    assert_eq!(6, tournament.bracket().len());
    assert!(roster[seeds[8]].log().is_empty());
}
