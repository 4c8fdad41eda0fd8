use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info};

use bracketeer::file::{self, FromJsonFile};
use bracketeer::rating::Division;
use bracketeer::sim::Method;
use bracketeer::team::Entry;
use bracketeer::{mc, print, regional};

/// Rating given to the phantom team that pads a 15-team region out to 16.
const BYE_RATING: f64 = -10_000.0;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file listing the teams, best seed first
    teams: Option<PathBuf>,

    /// number of teams advancing from the region
    #[clap(short = 'b', long, default_value_t = 1)]
    bids: usize,

    /// division whose default parameters are used
    #[clap(short = 'd', long, value_parser = parse_division, default_value = "women")]
    division: Division,

    /// simulation method, overriding the division default
    #[clap(short = 'm', long, value_parser = parse_method)]
    method: Option<Method>,

    /// seed for the random number generator
    #[clap(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// number of regionals to simulate
    #[clap(short = 't', long, default_value_t = 1)]
    trials: u64,

    /// JSON file with simulation parameters, replacing the division defaults
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.teams
            .as_ref()
            .ok_or(anyhow!("teams file must be specified"))?;
        if self.bids == 0 {
            return Err(anyhow!("at least one bid must be awarded"));
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

    let mut config = match &args.config {
        Some(path) => file::read_config(path)?,
        None => args.division.config(),
    };
    if let Some(method) = args.method {
        config = config.with_method(method);
    }
    config.validate()?;
    info!("simulating with {config:?}");

    let teams_path = args.teams.as_ref().ok_or(anyhow!("teams file must be specified"))?;
    let mut entries = Vec::<Entry>::from_json_file(teams_path)?;
    if entries.len() == 15 {
        info!("padding a 15-team region to 16 with a bye");
        entries.push(Entry {
            name: "Bye".into(),
            rating: BYE_RATING,
            region: None,
        });
    }
    let (mut roster, seeds) = file::roster_from_entries(entries);
    info!("read {} teams from {}", seeds.len(), teams_path.display());

    let mut rand = StdRand::seed(args.seed);
    let start_time = Instant::now();
    if args.trials == 1 {
        let regional = regional::play_regional(&mut roster, &seeds, args.bids, &config, &mut rand)?;
        info!("format: {}", regional.format);
        for pool in &regional.pools {
            let table = print::tabulate_games(pool.bracket(), &roster);
            info!("{}:\n{}", pool.name(), Console::default().render(&table));
        }
        let table = print::tabulate_games(regional.bracket.bracket(), &roster);
        info!("bracket:\n{}", Console::default().render(&table));
        let table = print::tabulate_standings(&regional.standings, &roster);
        info!("standings:\n{}", Console::default().render(&table));
        info!(
            "qualified: {}",
            regional
                .qualifiers
                .iter()
                .map(|&team| roster.name(team))
                .collect::<Vec<_>>()
                .join(", ")
        );
    } else {
        let tally = mc::tally(args.trials, &mut roster, &seeds, args.bids, &config, &mut rand)?;
        let table = print::tabulate_tally(&tally, &roster);
        info!(
            "finishing probabilities over {} trials:\n{}",
            tally.trials(),
            Console::default().render(&table)
        );
    }
    let elapsed = start_time.elapsed();
    info!(
        "simulated {} regional(s) in {}s",
        args.trials,
        elapsed.as_millis() as f64 / 1_000.
    );
    Ok(())
}
