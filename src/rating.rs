//! Mapping of rating differences to expected victory margins.

use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::SimConfig;
use crate::error::ConfigurationError;
use crate::sim::Method;

pub const GAME_TO: u16 = 15;

const MENS_K: f64 = 0.002138514393927596;
const WOMENS_K: f64 = 0.0022838954964262735;
const MENS_P_A_OFFENSE: f64 = 0.7;
const WOMENS_P_A_OFFENSE: f64 = 0.65;

/// Anything that turns a rating difference into an expected victory margin.
pub trait MarginFn {
    fn margin(&self, rating_diff: f64) -> f64;
}

impl<F: Fn(f64) -> f64> MarginFn for F {
    fn margin(&self, rating_diff: f64) -> f64 {
        self(rating_diff)
    }
}

/// Logistic curve bounded in `(-game_to, game_to)` that passes through the origin. The steepness
/// `k` is fitted per division from historical results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Logistic {
    pub k: f64,
    pub game_to: f64,
}
impl Logistic {
    pub fn new(k: f64) -> Self {
        Self {
            k,
            game_to: GAME_TO as f64,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.k > 0.0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "logistic steepness must be positive, got {}",
                self.k
            )));
        }
        if !(self.game_to > 0.0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "logistic bound must be positive, got {}",
                self.game_to
            )));
        }
        Ok(())
    }
}

impl MarginFn for Logistic {
    #[inline]
    fn margin(&self, rating_diff: f64) -> f64 {
        2.0 * self.game_to / (1.0 + f64::exp(-self.k * rating_diff)) - self.game_to
    }
}

/// A caller-supplied rating-to-margin function. Two custom margins are equal only if they share
/// the same function.
#[derive(Clone)]
pub struct CustomMargin(Arc<dyn Fn(f64) -> f64 + Send + Sync>);
impl CustomMargin {
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl Debug for CustomMargin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CustomMargin")
    }
}

impl PartialEq for CustomMargin {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl MarginFn for CustomMargin {
    #[inline]
    fn margin(&self, rating_diff: f64) -> f64 {
        (self.0)(rating_diff)
    }
}

/// The margin curve a game is simulated with. Only the logistic curve survives (de)serialisation;
/// a custom curve must be supplied in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Margin {
    Logistic(Logistic),
    #[serde(skip)]
    Custom(CustomMargin),
}
impl Margin {
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Margin::Custom(CustomMargin::new(f))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            Margin::Logistic(logistic) => logistic.validate(),
            Margin::Custom(_) => Ok(()),
        }
    }
}

impl From<Logistic> for Margin {
    fn from(logistic: Logistic) -> Self {
        Margin::Logistic(logistic)
    }
}

impl MarginFn for Margin {
    #[inline]
    fn margin(&self, rating_diff: f64) -> f64 {
        match self {
            Margin::Logistic(logistic) => logistic.margin(rating_diff),
            Margin::Custom(custom) => custom.margin(rating_diff),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    #[strum(to_string = "men", serialize = "mens")]
    Men,
    #[strum(to_string = "women", serialize = "womens")]
    Women,
}
impl Division {
    pub fn parse(s: &str) -> Result<Self, ConfigurationError> {
        Self::from_str(s).map_err(|_| ConfigurationError::UnknownDivision(s.into()))
    }

    pub fn k(&self) -> f64 {
        match self {
            Division::Men => MENS_K,
            Division::Women => WOMENS_K,
        }
    }

    pub fn p_a_offense(&self) -> f64 {
        match self {
            Division::Men => MENS_P_A_OFFENSE,
            Division::Women => WOMENS_P_A_OFFENSE,
        }
    }

    pub fn margin(&self) -> Logistic {
        Logistic::new(self.k())
    }

    /// Default simulation parameters for the division.
    pub fn config(&self) -> SimConfig {
        SimConfig {
            method: Method::DoubleNegativeBinomial,
            game_to: GAME_TO,
            margin: self.margin().into(),
            p_a_offense: self.p_a_offense(),
        }
    }
}
