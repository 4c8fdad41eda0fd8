use std::env;
use std::error::Error;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info};

use bracketeer::print;
use bracketeer::rating::Division;
use bracketeer::sim::{self, Method};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// rating of team A
    rating_a: f64,

    /// rating of team B
    rating_b: f64,

    /// division whose default parameters are used
    #[clap(short = 'd', long, value_parser = parse_division, default_value = "women")]
    division: Division,

    /// simulation method, overriding the division default
    #[clap(short = 'm', long, value_parser = parse_method)]
    method: Option<Method>,

    /// seed for the random number generator
    #[clap(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// number of games to simulate; more than one estimates the win probability
    #[clap(short = 't', long, default_value_t = 1)]
    trials: u64,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.rating_a.is_finite() || !self.rating_b.is_finite() {
            return Err(anyhow!("ratings must be finite"));
        }
        if self.trials == 0 {
            return Err(anyhow!("at least one trial must be run"));
        }
        Ok(())
    }
}
fn parse_division(s: &str) -> anyhow::Result<Division> {
    Ok(Division::parse(s)?)
}
fn parse_method(s: &str) -> anyhow::Result<Method> {
    Ok(Method::parse(s)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut config = args.division.config();
    if let Some(method) = args.method {
        config = config.with_method(method);
    }
    let expected = sim::expected_score(args.rating_a, args.rating_b, config.game_to, &config.margin);
    info!(
        "{:.1} vs {:.1}: expected {expected} under {}",
        args.rating_a, args.rating_b, config.method
    );

    let mut rand = StdRand::seed(args.seed);
    if args.trials == 1 {
        let (a_wins, score) =
            sim::simulate_from_ratings(args.rating_a, args.rating_b, &config, &mut rand);
        let table = print::tabulate_log(&score, "Team A", "Team B");
        info!("point log:\n{}", Console::default().render(&table));
        info!(
            "final score {score}, won by team {}",
            if a_wins { "A" } else { "B" }
        );
    } else {
        let prob = sim::win_probability(args.rating_a, args.rating_b, &config, args.trials, &mut rand)?;
        info!(
            "team A won {:.2}% of {} games",
            prob * 100.0,
            args.trials
        );
    }
    Ok(())
}
