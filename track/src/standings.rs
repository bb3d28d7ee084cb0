
use race::{RaceError, RoundOutcome, Status};

use utils::error::*;

use tabled::{Table, Tabled};

///
/// One line of a round's standings.
///
#[derive(Tabled)]
struct Standing 
{
    rank: usize,
    id: usize,
    name: String,
    label: String,
    seconds: String
}

///
/// Formats a banner line such as "===== RACING =====".
///
pub fn banner (title: & str) -> String 
{
    format!("{:=^40}", format!(" {} ", title))
}

///
/// Renders the standings of a round as a table, fastest first.
///
pub fn render (outcome: & RoundOutcome) -> String 
{
    let rows = outcome.positions.iter()
        .enumerate()
        .map(|(rank, competitor)| Standing 
        {
            rank,
            id: competitor.id(),
            name: competitor.name().to_owned(),
            label: format!("@{}", competitor.label()),
            seconds: format!("{:.9}", competitor.duration())
        })
        .collect::<Vec<_>>();

    Table::new(rows).to_string()
}

///
/// Describes how a round ended.
///
pub fn verdict (outcome: & RoundOutcome) -> String 
{
    match (outcome.status, outcome.winner())
    {
        (Status::Win, Some(winner)) => format!("The winner is {} @{}!", winner.name(), winner.label()),
        _                           => "There was a draw...".to_owned()
    }
}

///
/// Wraps a failed race, naming the competitor that stopped it when there is one.
///
pub fn failure (err: RaceError) -> Error
{
    let message = match err.competitor()
    {
        Some(id) => format!("The race was stopped by competitor {}.", id),
        None     => "The race could not be resolved.".to_owned()
    };

    Error::new(err).context(message)
}
