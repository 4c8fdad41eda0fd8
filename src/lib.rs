//! Rating-driven simulation of ultimate frisbee regionals.
//!
//! Games are simulated point by point from the two teams' ratings, wired into brackets whose
//! participants may be the winners or losers of earlier games, and played lazily so that a
//! game's dependencies are always resolved before it is. A catalogue of USAU-style formats
//! covers regions of 3 to 16 teams sending 1 to 4 teams onward.

pub mod bracket;
pub mod catalog;
pub mod config;
pub mod error;
pub mod file;
pub mod game;
pub mod linear;
pub mod mc;
pub mod print;
pub mod rating;
pub mod regional;
pub mod round_robin;
pub mod sim;
pub mod team;
pub mod tournament;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
