
mod config;
mod interfaces;
mod roster;
mod standings;
mod workload;

use std::io;

use clap::Parser;

use interfaces::*;
use roster::Entrant;

use utils::*;
use utils::notate::Notate;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
#[clap(about = "Races competitors against the clock until one is uniquely fastest.")]
struct CLIArgs 
{
    #[clap(short, long, default_value = "race")]
    mode: String,

    #[clap(short, long, default_value = "config/config.toml")]
    config: String,

    /// Adds a competitor, written as 'name@label'; may be repeated.
    #[clap(short, long)]
    entrant: Vec<String>,

    /// Prints the race history as json instead of tables.
    #[clap(short, long)]
    json: bool
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let config = config::Config::load(& args.config)?;
    let _logger = log::initialize(& config.log_path, "track")?;

    let entrants = args.entrant.iter()
        .map(|s| Entrant::parse(s))
        .collect::<Result<Vec<_>>>()?;
    let competitors = roster::build(& config.roster, & entrants)?;

    log::info!("Starting in mode '{}' with {} competitors.", & args.mode, competitors.len());

    match args.mode.as_str() 
    {
        "race" => 
        {
            let mut trial = trial::TrialInterface::new(& config, competitors)?;
            trial.run(& mut io::stdout().lock(), args.json)?;
        },
        "bet" => 
        {
            let stdin = io::stdin();
            let mut game = betting::BettingInterface::new(& config, competitors, stdin.lock(), io::stdout())?;
            game.run_loop()?;
        },
        _ => 
        {
            return Err(error::error!("Mode '{}' is unsupported.", & args.mode)); 
        }
    };

    Ok(())
}
