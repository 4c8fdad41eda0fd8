//! Point-by-point simulation of a single game from two team ratings.
//!
//! The headline method is the _double negative binomial_: each team holds a weighted coin for
//! its offensive possessions. The team on offense flips until it scores; every miss hands a
//! point to the defence, which then keeps receiving. Once the offense converts, possession
//! passes to the other team. The expected winner's coin lands with `p_a_offense`; the expected
//! loser's coin is scaled down in proportion to its expected share of `game_to`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use tinyrand::Rand;
use tracing::trace;

use crate::config::SimConfig;
use crate::error::ConfigurationError;
use crate::rating::MarginFn;

/// Winning margin of the fixed-outcome methods.
const FIXED_MARGIN: u16 = 2;

/// Method names are shared by the command line and JSON configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, EnumString, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[strum(to_string = "random")]
    Random,
    #[strum(to_string = "team_a")]
    TeamA,
    #[strum(to_string = "team_b")]
    TeamB,
    #[strum(to_string = "higher_rating")]
    HigherRating,
    #[strum(to_string = "binomial")]
    Binomial,
    #[strum(
        to_string = "double negative binomial",
        serialize = "double_negative_binomial"
    )]
    #[serde(rename = "double negative binomial", alias = "double_negative_binomial")]
    DoubleNegativeBinomial,
}
impl Method {
    pub fn parse(s: &str) -> Result<Self, ConfigurationError> {
        Self::from_str(s).map_err(|_| ConfigurationError::InvalidMethod(s.into()))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(
            self,
            Method::Random | Method::TeamA | Method::TeamB | Method::HigherRating
        )
    }
}

/// Projected final score implied by two ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedScore {
    pub a: f64,
    pub b: f64,
}
impl ExpectedScore {
    /// Whether team A is the favourite. Equal ratings favour team A.
    pub fn favours_a(&self) -> bool {
        self.a >= self.b
    }
}

impl Display for ExpectedScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}-{:.1}", self.a, self.b)
    }
}

/// The higher-rated team is expected to reach `game_to`; the other is expected to fall short by
/// the modelled margin. The shortfall is clamped so that neither side expects a negative score.
pub fn expected_score(
    rating_a: f64,
    rating_b: f64,
    game_to: u16,
    margin: &impl MarginFn,
) -> ExpectedScore {
    let game_to = game_to as f64;
    let trailing = |diff: f64| (game_to - margin.margin(diff)).clamp(0.0, game_to);
    if rating_a >= rating_b {
        ExpectedScore {
            a: game_to,
            b: trailing(rating_a - rating_b),
        }
    } else {
        ExpectedScore {
            a: trailing(rating_b - rating_a),
            b: game_to,
        }
    }
}

/// Final score of a played game along with every intermediate scoreline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    a: u16,
    b: u16,
    log: Vec<(u16, u16)>,
}
impl Score {
    pub fn from_log(log: Vec<(u16, u16)>) -> Self {
        let (a, b) = log.last().copied().unwrap_or_default();
        Self { a, b, log }
    }

    pub fn a(&self) -> u16 {
        self.a
    }

    pub fn b(&self) -> u16 {
        self.b
    }

    pub fn log(&self) -> &[(u16, u16)] {
        &self.log
    }

    pub fn a_wins(&self) -> bool {
        self.a > self.b
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Simulates one game between two ratings.
pub fn simulate(
    rating_a: f64,
    rating_b: f64,
    config: &SimConfig,
    rand: &mut impl Rand,
) -> Score {
    let expected = expected_score(rating_a, rating_b, config.game_to, &config.margin);
    simulate_expected(&expected, rating_a, rating_b, config, rand)
}

/// Simulates one game once the expected score has already been worked out.
pub fn simulate_expected(
    expected: &ExpectedScore,
    rating_a: f64,
    rating_b: f64,
    config: &SimConfig,
    rand: &mut impl Rand,
) -> Score {
    let game_to = config.game_to;
    let score = match config.method {
        Method::TeamA => fixed(true, game_to),
        Method::TeamB => fixed(false, game_to),
        Method::HigherRating => fixed(rating_a >= rating_b, game_to),
        Method::Random => fixed(random_f64(rand) < 0.5, game_to),
        Method::Binomial => {
            let p = expected.a / (expected.a + expected.b);
            binomial(p, game_to, rand)
        }
        Method::DoubleNegativeBinomial => {
            let (p_a, p_b) = offense_probs(expected, config.p_a_offense, game_to);
            double_negative_binomial(p_a, p_b, game_to, rand)
        }
    };
    trace!(
        "{} game to {game_to}: expected {expected}, actual {score} after {} points",
        config.method,
        score.log.len()
    );
    score
}

/// Convenience for a one-off game between two bare ratings.
pub fn simulate_from_ratings(
    rating_a: f64,
    rating_b: f64,
    config: &SimConfig,
    rand: &mut impl Rand,
) -> (bool, Score) {
    let score = simulate(rating_a, rating_b, config, rand);
    (score.a_wins(), score)
}

/// Estimates the probability of team A beating team B by repeated simulation.
pub fn win_probability(
    rating_a: f64,
    rating_b: f64,
    config: &SimConfig,
    trials: u64,
    rand: &mut impl Rand,
) -> Result<f64, ConfigurationError> {
    if trials == 0 {
        return Err(ConfigurationError::InvalidParameter(
            "at least one trial must be run".into(),
        ));
    }
    config.validate()?;
    let expected = expected_score(rating_a, rating_b, config.game_to, &config.margin);
    let mut wins = 0;
    for _ in 0..trials {
        if simulate_expected(&expected, rating_a, rating_b, config, rand).a_wins() {
            wins += 1;
        }
    }
    Ok(wins as f64 / trials as f64)
}

/// Per-possession scoring probabilities `(p_a, p_b)`. The favourite converts with `p_a_offense`;
/// the underdog with `p_a_offense` scaled by its expected share of `game_to`.
pub fn offense_probs(expected: &ExpectedScore, p_a_offense: f64, game_to: u16) -> (f64, f64) {
    let game_to = game_to as f64;
    if expected.a > expected.b {
        (p_a_offense, p_a_offense * expected.b / game_to)
    } else {
        (p_a_offense * expected.a / game_to, p_a_offense)
    }
}

pub fn double_negative_binomial(p_a: f64, p_b: f64, game_to: u16, rand: &mut impl Rand) -> Score {
    let mut a_on_offense = random_f64(rand) < 0.5;
    let (mut a, mut b) = (0, 0);
    let mut log = Vec::with_capacity(2 * game_to as usize);
    while a < game_to && b < game_to {
        if a_on_offense {
            if random_f64(rand) < p_a {
                a += 1;
                a_on_offense = false;
            } else {
                b += 1;
            }
        } else if random_f64(rand) < p_b {
            b += 1;
            a_on_offense = true;
        } else {
            a += 1;
        }
        log.push((a, b));
    }
    Score { a, b, log }
}

/// Every point is an independent trial won by team A with probability `p`. Less realistic than
/// [double_negative_binomial] since it ignores possession.
pub fn binomial(p: f64, game_to: u16, rand: &mut impl Rand) -> Score {
    let (mut a, mut b) = (0, 0);
    let mut log = Vec::with_capacity(2 * game_to as usize);
    while a < game_to && b < game_to {
        if random_f64(rand) < p {
            a += 1;
        } else {
            b += 1;
        }
        log.push((a, b));
    }
    Score { a, b, log }
}

/// A predetermined result by [FIXED_MARGIN]. The log trades points until the loser's tally is
/// reached, after which the winner runs out the game.
pub fn fixed(a_wins: bool, game_to: u16) -> Score {
    let losing = game_to.saturating_sub(FIXED_MARGIN);
    let (mut winner, mut loser) = (0, 0);
    let mut log = Vec::with_capacity(game_to as usize + losing as usize);
    while winner < game_to {
        if loser < losing && loser < winner {
            loser += 1;
        } else {
            winner += 1;
        }
        log.push(if a_wins { (winner, loser) } else { (loser, winner) });
    }
    Score::from_log(log)
}

#[inline]
pub fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}
