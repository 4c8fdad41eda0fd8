//! Simulation parameters and per-call overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::rating::Margin;
use crate::sim::Method;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub method: Method,
    pub game_to: u16,
    pub margin: Margin,
    /// Probability that the expected winner converts a possession.
    pub p_a_offense: f64,
}
impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.game_to == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "games must be played to at least one point".into(),
            ));
        }
        if !(self.p_a_offense > 0.0 && self.p_a_offense <= 1.0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "offensive success probability must lie in (0, 1], got {}",
                self.p_a_offense
            )));
        }
        self.margin.validate()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

/// Settings that take precedence over a game's own configuration for a single play.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub method: Option<Method>,
    pub game_to: Option<u16>,
    pub margin: Option<Margin>,
    pub p_a_offense: Option<f64>,
}
impl Overrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn method(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    /// Merges the overrides onto `base`, rejecting the result if it is not a usable config.
    pub fn apply(&self, base: &SimConfig) -> Result<SimConfig, ConfigurationError> {
        let config = SimConfig {
            method: self.method.unwrap_or(base.method),
            game_to: self.game_to.unwrap_or(base.game_to),
            margin: self.margin.clone().unwrap_or_else(|| base.margin.clone()),
            p_a_offense: self.p_a_offense.unwrap_or(base.p_a_offense),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
