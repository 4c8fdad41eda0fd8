//! A single game: a node in the dependency graph of a tournament. Each of its two slots holds
//! either a known team or a reference to the winner or loser of an earlier game.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::SimConfig;
use crate::sim::{ExpectedScore, Score};
use crate::team::{Roster, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(usize);
impl GameId {
    pub fn index(index: usize) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> usize {
        self.0
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, EnumIter, Serialize, Deserialize)]
pub enum Level {
    #[strum(to_string = "pool")]
    Pool,
    #[strum(to_string = "prequarter")]
    PreQuarter,
    #[strum(to_string = "quarter")]
    Quarter,
    #[strum(to_string = "semi")]
    Semi,
    #[strum(to_string = "final")]
    Final,
    #[strum(to_string = "2nd place")]
    SecondPlace,
    #[strum(to_string = "3rd place")]
    ThirdPlace,
    #[strum(to_string = "5th place")]
    FifthPlace,
    #[strum(to_string = "7th place")]
    SeventhPlace,
    #[strum(to_string = "consolation")]
    Consolation,
    #[strum(to_string = "crossover")]
    Crossover,
}

/// Which result of a feeder game advances into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Take {
    #[strum(to_string = "winner")]
    Winner,
    #[strum(to_string = "loser")]
    Loser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Vacant,
    Team(TeamId),
    Feed { game: GameId, take: Take },
}
impl Slot {
    pub fn winner(game: GameId) -> Self {
        Slot::Feed {
            game,
            take: Take::Winner,
        }
    }

    pub fn loser(game: GameId) -> Self {
        Slot::Feed {
            game,
            take: Take::Loser,
        }
    }

    pub fn feed(&self) -> Option<(GameId, Take)> {
        match self {
            Slot::Feed { game, take } => Some((*game, *take)),
            _ => None,
        }
    }
}

/// Everything fixed by playing a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub expected: ExpectedScore,
    pub score: Score,
    /// Game length the outcome was simulated to; needed to judge upsets.
    pub game_to: u16,
}
impl Outcome {
    pub fn winner(&self) -> TeamId {
        if self.score.a_wins() {
            self.team_a
        } else {
            self.team_b
        }
    }

    pub fn loser(&self) -> TeamId {
        if self.score.a_wins() {
            self.team_b
        } else {
            self.team_a
        }
    }

    pub fn take(&self, take: Take) -> TeamId {
        match take {
            Take::Winner => self.winner(),
            Take::Loser => self.loser(),
        }
    }

    /// A side that was expected to reach `game_to` fell short of it.
    pub fn upset(&self) -> bool {
        let game_to = self.game_to as f64;
        (self.expected.a == game_to && self.score.a() < self.game_to)
            || (self.expected.b == game_to && self.score.b() < self.game_to)
    }

    /// Points scored by `team` and by its opponent, if `team` took part.
    pub fn points(&self, team: TeamId) -> Option<(u16, u16)> {
        if team == self.team_a {
            Some((self.score.a(), self.score.b()))
        } else if team == self.team_b {
            Some((self.score.b(), self.score.a()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    label: String,
    level: Option<Level>,
    slots: [Slot; 2],
    config: SimConfig,
    outcome: Option<Outcome>,
}
impl Game {
    pub fn new(a: Slot, b: Slot, config: SimConfig) -> Self {
        Self {
            label: String::new(),
            level: None,
            slots: [a, b],
            config,
            outcome: None,
        }
    }

    pub fn between(team_a: TeamId, team_b: TeamId, config: SimConfig) -> Self {
        Self::new(Slot::Team(team_a), Slot::Team(team_b), config)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn slots(&self) -> &[Slot; 2] {
        &self.slots
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_played(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.outcome.as_ref().map(Outcome::winner)
    }

    pub fn loser(&self) -> Option<TeamId> {
        self.outcome.as_ref().map(Outcome::loser)
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        debug_assert!(self.outcome.is_none(), "game already played");
        self.outcome = Some(outcome);
    }

    /// Flat record of a played game, suitable for tabular export.
    pub fn summary(&self, roster: &Roster) -> Option<GameSummary> {
        let outcome = self.outcome.as_ref()?;
        Some(GameSummary {
            level: self.level.map(|level| level.to_string()),
            team_a_name: roster.name(outcome.team_a).into(),
            team_a_score: outcome.score.a(),
            team_b_name: roster.name(outcome.team_b).into(),
            team_b_score: outcome.score.b(),
            expected_a: outcome.expected.a,
            expected_b: outcome.expected.b,
            upset: outcome.upset(),
            winner_name: roster.name(outcome.winner()).into(),
            loser_name: roster.name(outcome.loser()).into(),
        })
    }

    /// One-line description in the style of a results sheet.
    pub fn describe(&self, roster: &Roster) -> String {
        let prefix = self.level.map(|level| format!("{level}: ")).unwrap_or_default();
        match &self.outcome {
            Some(outcome) => format!(
                "{prefix}{} {} {} (expected {})",
                roster.name(outcome.team_a),
                outcome.score,
                roster.name(outcome.team_b),
                outcome.expected
            ),
            None => {
                let describe_slot = |slot: &Slot| match slot {
                    Slot::Team(team) => roster.name(*team).to_string(),
                    Slot::Feed { game, take } => format!("{take} of {game}"),
                    Slot::Vacant => "TBD".to_string(),
                };
                format!(
                    "{prefix}{} vs {} (unplayed)",
                    describe_slot(&self.slots[0]),
                    describe_slot(&self.slots[1])
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub level: Option<String>,
    pub team_a_name: String,
    pub team_a_score: u16,
    pub team_b_name: String,
    pub team_b_score: u16,
    pub expected_a: f64,
    pub expected_b: f64,
    pub upset: bool,
    pub winner_name: String,
    pub loser_name: String,
}
