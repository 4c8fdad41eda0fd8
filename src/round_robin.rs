//! Pool play: every entrant meets every other entrant once, and the finishing order is decided by
//! wins with ties broken among the teams sharing a win count.
//!
//! Tie-breaking is a single pass. Teams are grouped once by raw wins, then ordered within each
//! group by wins against the group, point differential against the group and finally a random
//! draw. Groups are not re-partitioned after the secondary criteria are applied.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use tinyrand::Rand;

use crate::bracket::Bracket;
use crate::config::SimConfig;
use crate::error::Error;
use crate::game::{Game, Level};
use crate::sim::random_f64;
use crate::team::TeamId;

/// Every unordered pair of entrants. The later entrant of each pair is listed first.
pub fn pairings(entrants: &[TeamId]) -> Vec<(TeamId, TeamId)> {
    let mut pairs = Vec::with_capacity(entrants.len() * entrants.len().saturating_sub(1) / 2);
    for (i, &team_a) in entrants.iter().enumerate() {
        for &team_b in &entrants[..i] {
            pairs.push((team_a, team_b));
        }
    }
    pairs
}

/// Builds the pool-play games for the given entrants.
pub fn schedule(entrants: &[TeamId], config: &SimConfig) -> Result<Bracket, Error> {
    let mut bracket = Bracket::default();
    for (team_a, team_b) in pairings(entrants) {
        bracket.add(Game::between(team_a, team_b, config.clone()).with_level(Level::Pool))?;
    }
    Ok(bracket)
}

/// A team's standing in pool play, with the statistics used to order it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub team: TeamId,
    pub wins: usize,
    /// Wins against teams with the same number of wins.
    pub group_wins: usize,
    /// Points scored less points conceded against teams with the same number of wins.
    pub group_diff: i32,
    pub draw: f64,
}
impl Ranking {
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            .then(other.group_wins.cmp(&self.group_wins))
            .then(other.group_diff.cmp(&self.group_diff))
            .then(other.draw.total_cmp(&self.draw))
    }
}

/// Ranks the entrants of a fully played pool. One random draw is taken per entrant, in entrant
/// order, whether or not it ends up deciding anything.
pub fn rank(entrants: &[TeamId], bracket: &Bracket, rand: &mut impl Rand) -> Result<Vec<Ranking>, Error> {
    let outcomes = bracket
        .iter()
        .map(|(_, game)| game.outcome().ok_or(Error::NotPlayed))
        .collect::<Result<Vec<_>, _>>()?;

    let mut wins = FxHashMap::default();
    for &team in entrants {
        wins.insert(team, 0);
    }
    for outcome in &outcomes {
        *wins.entry(outcome.winner()).or_insert(0) += 1;
    }

    let mut rankings = Vec::with_capacity(entrants.len());
    for &team in entrants {
        let team_wins = wins[&team];
        let mut group_wins = 0;
        let mut group_diff = 0;
        for outcome in &outcomes {
            let Some((points_for, points_against)) = outcome.points(team) else {
                continue;
            };
            let opponent = if outcome.team_a == team {
                outcome.team_b
            } else {
                outcome.team_a
            };
            if wins.get(&opponent) != Some(&team_wins) {
                continue;
            }
            if outcome.winner() == team {
                group_wins += 1;
            }
            group_diff += points_for as i32 - points_against as i32;
        }
        rankings.push(Ranking {
            team,
            wins: team_wins,
            group_wins,
            group_diff,
            draw: random_f64(rand),
        });
    }
    rankings.sort_by(Ranking::cmp_desc);
    Ok(rankings)
}

#[cfg(test)]
mod tests {
    use tinyrand::{Seeded, StdRand};

    use super::*;
    use crate::config::Overrides;
    use crate::game::{GameId, Outcome};
    use crate::rating::Division;
    use crate::sim::{self, ExpectedScore};
    use crate::team::{Roster, Team};

    fn teams(n: usize) -> Vec<TeamId> {
        (0..n).map(TeamId::index).collect()
    }

    #[test]
    fn pairings_cover_every_pair_once() {
        for n in 0..=8 {
            let pairs = pairings(&teams(n));
            assert_eq!(n * n.saturating_sub(1) / 2, pairs.len());
            for (a, b) in &pairs {
                assert_ne!(a, b);
                assert!(!pairs.contains(&(*b, *a)));
            }
        }
        assert_eq!(
            vec![
                (TeamId::index(1), TeamId::index(0)),
                (TeamId::index(2), TeamId::index(0)),
                (TeamId::index(2), TeamId::index(1))
            ],
            pairings(&teams(3))
        );
    }

    #[test]
    fn unplayed_pool_cannot_be_ranked() {
        let bracket = schedule(&teams(3), &Division::Men.config()).unwrap();
        assert_eq!(
            Err(Error::NotPlayed),
            rank(&teams(3), &bracket, &mut StdRand::seed(0))
        );
    }

    /// Plays a pool where the lower-numbered team of each pair always wins.
    fn dominant(n: usize, rand: &mut StdRand) -> Vec<Ranking> {
        let mut roster: Roster = (0..n).map(|i| Team::new(format!("{i}"), 2000.0)).collect();
        let entrants = teams(n);
        let mut bracket = schedule(&entrants, &Division::Men.config()).unwrap();
        // in every pairing the later entrant is team A, so team B always wins
        bracket
            .play_all(&mut roster, &Overrides::method(sim::Method::TeamB), rand)
            .unwrap();
        rank(&entrants, &bracket, rand).unwrap()
    }

    #[test]
    fn transitive_dominance() {
        let mut rand = StdRand::seed(3);
        for _ in 0..10 {
            let rankings = dominant(4, &mut rand);
            assert_eq!(teams(4), rankings.iter().map(|ranking| ranking.team).collect::<Vec<_>>());
            assert_eq!(vec![3, 2, 1, 0], rankings.iter().map(|ranking| ranking.wins).collect::<Vec<_>>());
        }
    }

    fn bracket_of(results: &[(usize, usize, u16, u16)]) -> Bracket {
        let config = Division::Men.config();
        let mut bracket = Bracket::default();
        for &(a, b, score_a, score_b) in results {
            let id = bracket
                .add(Game::between(TeamId::index(a), TeamId::index(b), config.clone()))
                .unwrap();
            let mut log = vec![];
            for point in 1..=score_a.max(score_b) {
                log.push((point.min(score_a), point.min(score_b)));
            }
            set_outcome(&mut bracket, id, a, b, log);
        }
        bracket
    }

    fn set_outcome(bracket: &mut Bracket, id: GameId, a: usize, b: usize, log: Vec<(u16, u16)>) {
        bracket.game_mut(id).set_outcome(Outcome {
            team_a: TeamId::index(a),
            team_b: TeamId::index(b),
            expected: ExpectedScore { a: 15.0, b: 15.0 },
            score: sim::Score::from_log(log),
            game_to: 15,
        });
    }

    #[test]
    fn three_way_tie_broken_on_point_differential() {
        // 0, 1 and 2 each beat one another once and all beat 3
        let bracket = bracket_of(&[
            (0, 1, 15, 5),
            (1, 2, 15, 14),
            (2, 0, 15, 13),
            (0, 3, 15, 0),
            (1, 3, 15, 0),
            (2, 3, 15, 0),
        ]);
        let rankings = rank(&teams(4), &bracket, &mut StdRand::seed(0)).unwrap();
        assert_eq!(
            vec![0, 2, 1, 3],
            rankings.iter().map(|ranking| ranking.team.as_index()).collect::<Vec<_>>()
        );
        assert_eq!(vec![8, 1, -9], rankings[..3].iter().map(|ranking| ranking.group_diff).collect::<Vec<_>>());
        assert!(rankings[..3].iter().all(|ranking| ranking.group_wins == 1));
    }

    #[test]
    fn head_to_head_breaks_two_way_tie() {
        // 0 and 1 finish 2-1 and 1 won their meeting despite a far worse differential; likewise
        // 2 and 3 finish 1-2 and 3 won their meeting
        let bracket = bracket_of(&[
            (1, 0, 15, 14),
            (0, 2, 15, 0),
            (0, 3, 15, 0),
            (1, 3, 15, 14),
            (2, 1, 15, 14),
            (3, 2, 15, 14),
        ]);
        let rankings = rank(&teams(4), &bracket, &mut StdRand::seed(0)).unwrap();
        assert_eq!(
            vec![1, 0, 3, 2],
            rankings.iter().map(|ranking| ranking.team.as_index()).collect::<Vec<_>>()
        );
        assert_eq!(vec![2, 2, 1, 1], rankings.iter().map(|ranking| ranking.wins).collect::<Vec<_>>());
    }

    #[test]
    fn dead_heat_falls_to_draw() {
        // identical scores everywhere, so only the draw separates 1 and 2
        let bracket = bracket_of(&[(0, 1, 15, 10), (0, 2, 15, 10), (1, 2, 15, 10), (2, 1, 15, 10)]);
        let mut seen = [false; 2];
        for seed in 0..20 {
            let rankings = rank(&teams(3), &bracket, &mut StdRand::seed(seed)).unwrap();
            assert_eq!(0, rankings[0].team.as_index());
            assert!(rankings[1].draw >= rankings[2].draw);
            seen[rankings[1].team.as_index() - 1] = true;
        }
        assert_eq!([true, true], seen);
    }

    #[test]
    fn even_pool_ranks_every_team_once() {
        let mut rand = StdRand::seed(9);
        for n in 3..=6 {
            let mut roster: Roster = (0..n).map(|i| Team::new(format!("{i}"), 1800.0 + i as f64 * 10.0)).collect();
            let entrants = teams(n);
            let mut bracket = schedule(&entrants, &Division::Women.config()).unwrap();
            bracket.play_all(&mut roster, &Overrides::none(), &mut rand).unwrap();
            let rankings = rank(&entrants, &bracket, &mut rand).unwrap();
            let mut ranked: Vec<_> = rankings.iter().map(|ranking| ranking.team).collect();
            ranked.sort();
            assert_eq!(entrants, ranked);
            assert_eq!(n * (n - 1) / 2, rankings.iter().map(|ranking| ranking.wins).sum::<usize>());
        }
    }
}
