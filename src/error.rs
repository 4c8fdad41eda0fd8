//! Errors raised while configuring, wiring and playing tournaments. None of these are recoverable
//! at the point of origin; they propagate to whoever asked for the run.

use thiserror::Error;

use crate::game::GameId;
use crate::team::TeamId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("unknown division '{0}'")]
    UnknownDivision(String),

    #[error("unknown simulation method '{0}'")]
    InvalidMethod(String),

    #[error("no format for {teams} teams with {bids} bids")]
    UnsupportedFormat { teams: usize, bids: usize },

    #[error("{0}")]
    InvalidParameter(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("no team or feeder game for slot {slot} of {game}")]
    MissingParticipant { game: GameId, slot: usize },

    #[error("games still need to be played")]
    NotPlayed,

    #[error("expected exactly one final, found {0}")]
    AmbiguousFinal(usize),

    #[error("invalid wiring: {0}")]
    InvalidWiring(String),

    #[error("unknown team {0}")]
    UnknownTeam(TeamId),
}
