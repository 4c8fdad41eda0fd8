use tinyrand::{Seeded, StdRand};

use super::*;
use crate::game::Game;
use crate::rating::Division;
use crate::sim::Method;
use crate::team::Team;

fn roster(names: &[&str]) -> (Roster, Vec<TeamId>) {
    let roster: Roster = names
        .iter()
        .enumerate()
        .map(|(index, &name)| Team::new(name, 2200.0 - index as f64 * 75.0))
        .collect();
    let seeds = roster.ids().collect();
    (roster, seeds)
}

fn places(standings: &[Standing]) -> Vec<usize> {
    standings.iter().map(|standing| standing.place).collect()
}

#[test]
fn eight_team_single_elimination_to_seed() {
    let (mut roster, seeds) = roster(&["1", "2", "3", "4", "5", "6", "7", "8"]);
    let mut tournament =
        Tournament::from_format(Format::EightSingle, &seeds, &[], &Division::Men.config()).unwrap();
    assert_eq!(Err(Error::NotPlayed), tournament.determine_placement());

    tournament
        .play(&mut roster, &Overrides::method(Method::TeamA), &mut StdRand::seed(0))
        .unwrap();
    let standings = tournament.determine_placement().unwrap();
    assert_eq!(seeds[0], standings[0].team);
    assert_eq!(seeds[1], standings[1].team);
    assert_eq!(vec![1, 2, 3, 3, 5, 5, 5, 5], places(&standings));
    assert_eq!("3-0", roster[seeds[0]].record().to_string());
    assert_eq!("0-1", roster[seeds[7]].record().to_string());

    let summaries = tournament.summaries(&roster);
    assert_eq!(7, summaries.len());
    let last = summaries.last().unwrap();
    assert_eq!(Some("final".to_string()), last.level);
    assert_eq!(("1", "2"), (last.winner_name.as_str(), last.loser_name.as_str()));
}

#[test]
fn transitive_round_robin() {
    let (mut roster, teams) = roster(&["W", "X", "Y", "Z"]);
    // entrant order must not matter when nobody ties
    let entrants = vec![teams[2], teams[0], teams[3], teams[1]];
    let mut rand = StdRand::seed(8);
    for _ in 0..10 {
        roster.reset();
        let mut tournament =
            Tournament::round_robin("Pool A", entrants.clone(), &Division::Men.config()).unwrap();
        tournament
            .play(&mut roster, &Overrides::method(Method::HigherRating), &mut rand)
            .unwrap();
        let standings = tournament.determine_placement().unwrap();
        assert_eq!(
            vec!["W", "X", "Y", "Z"],
            standings.iter().map(|standing| roster.name(standing.team)).collect::<Vec<_>>()
        );
        assert_eq!(vec![1, 2, 3, 4], places(&standings));
    }
}

#[test]
fn round_robin_sizes() {
    let mut rand = StdRand::seed(4);
    for n in 2..=8 {
        let names: Vec<_> = (0..n).map(|index| format!("T{index}")).collect();
        let names: Vec<_> = names.iter().map(String::as_str).collect();
        let (mut roster, teams) = roster(&names);
        let mut tournament =
            Tournament::round_robin("pool", teams.clone(), &Division::Women.config()).unwrap();
        assert_eq!(n * (n - 1) / 2, tournament.bracket().len());
        tournament.play(&mut roster, &Overrides::none(), &mut rand).unwrap();

        let standings = tournament.determine_placement().unwrap();
        let mut placed: Vec<_> = standings.iter().map(|standing| standing.team).collect();
        placed.sort();
        assert_eq!(teams, placed);
        assert_eq!((1..=n).collect::<Vec<_>>(), places(&standings));
        assert_eq!(n, tournament.rankings().len());
    }
}

#[test]
fn replay_changes_nothing() {
    let (mut roster, seeds) = roster(&["1", "2", "3", "4", "5", "6"]);
    let mut tournament =
        Tournament::from_format(Format::SixDouble, &seeds, &[], &Division::Men.config()).unwrap();
    let mut rand = StdRand::seed(21);
    tournament.play(&mut roster, &Overrides::none(), &mut rand).unwrap();
    let standings = tournament.determine_placement().unwrap();
    let summaries = tournament.summaries(&roster);

    tournament.play(&mut roster, &Overrides::none(), &mut rand).unwrap();
    assert_eq!(standings, tournament.determine_placement().unwrap());
    assert_eq!(summaries, tournament.summaries(&roster));
    assert_eq!(8, roster.iter().map(|(_, team)| team.log().len()).sum::<usize>() / 2);
}

fn final_between(bracket: &mut Bracket, a: TeamId, b: TeamId) -> GameId {
    bracket
        .add(Game::between(a, b, Division::Men.config()).with_level(Level::Final))
        .unwrap()
}

#[test]
fn finals_winner() {
    let (mut roster, teams) = roster(&["UCLA", "UCSB", "Cal"]);
    let mut bracket = Bracket::default();
    let semi = bracket
        .add(Game::between(teams[1], teams[2], Division::Men.config()).with_level(Level::Semi))
        .unwrap();
    bracket
        .add(
            Game::new(Slot::Team(teams[0]), Slot::winner(semi), Division::Men.config())
                .with_level(Level::Final),
        )
        .unwrap();
    let mut tournament = Tournament::custom("SW", teams.clone(), bracket);
    assert_eq!(None, tournament.format());
    tournament
        .play(&mut roster, &Overrides::method(Method::TeamA), &mut StdRand::seed(0))
        .unwrap();
    assert!(tournament.is_played());
    assert_eq!(
        vec![Standing { place: 1, team: teams[0] }],
        tournament.determine_placement().unwrap()
    );
}

#[test]
fn ambiguous_final() {
    let (mut roster, teams) = roster(&["a", "b", "c", "d"]);
    let mut bracket = Bracket::default();
    bracket
        .add(Game::between(teams[0], teams[1], Division::Men.config()).with_level(Level::Semi))
        .unwrap();
    let mut tournament = Tournament::custom("no final", teams.clone(), bracket.clone());
    tournament.play(&mut roster, &Overrides::none(), &mut StdRand::seed(0)).unwrap();
    assert_eq!(Err(Error::AmbiguousFinal(0)), tournament.determine_placement());

    final_between(&mut bracket, teams[0], teams[1]);
    final_between(&mut bracket, teams[2], teams[3]);
    let mut tournament = Tournament::custom("two finals", teams, bracket);
    tournament.play(&mut roster, &Overrides::none(), &mut StdRand::seed(0)).unwrap();
    assert_eq!(Err(Error::AmbiguousFinal(2)), tournament.determine_placement());
}

#[test]
fn missing_participant_aborts_play() {
    let (mut roster, teams) = roster(&["a", "b"]);
    let mut bracket = Bracket::default();
    let first = final_between(&mut bracket, teams[0], teams[1]);
    bracket
        .add(Game::new(Slot::Vacant, Slot::loser(first), Division::Men.config()))
        .unwrap();
    let mut tournament = Tournament::custom("broken", teams, bracket);
    assert_eq!(
        Err(Error::MissingParticipant { game: GameId::index(1), slot: 0 }),
        tournament.play(&mut roster, &Overrides::none(), &mut StdRand::seed(0))
    );
    assert!(!tournament.is_played());
    assert_eq!(Err(Error::NotPlayed), tournament.determine_placement());
}
