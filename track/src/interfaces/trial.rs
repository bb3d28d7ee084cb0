
use std::io::Write;
use std::sync::Arc;

use race::{History, Tournament};

use crate::config::*;
use crate::standings;
use crate::workload::ListBuild;

use utils::error::*;
use utils::log;

///
/// Runs a single tournament and reports it.
///
pub struct TrialInterface 
{
    tournament: Tournament,
    workload: Arc<ListBuild>
}

impl TrialInterface 
{
    ///
    /// Creates a new trial over the given competitors.
    ///
    pub fn new (config: & Config, roster: Vec<race::Competitor>) -> Result<TrialInterface>
    {
        let tournament = Tournament::new(roster, config.race)?;
        let workload = Arc::new(ListBuild::new(& config.workload));

        Ok(TrialInterface { tournament, workload })
    }

    ///
    /// Races the tournament and writes every round to the output, either as
    /// standings tables or as a json document.
    ///
    pub fn run<O> (& mut self, out: & mut O, json: bool) -> Result<History>
        where O: Write
    {
        for competitor in self.tournament.competitors()
        {
            log::info!("{}", utils::notate!("Entrant {}", competitor));
        }

        let config = self.tournament.config();
        log::info!("Round cap {:?}, round timeout {:?}.", config.round_cap(), config.round_timeout());

        let history = self.tournament.run_shared(& self.workload)
            .map_err(standings::failure)?;

        if json 
        {
            writeln!(out, "{}", utils::to_json(& history)?)?;
            return Ok(history);
        }

        writeln!(out, "{}", standings::banner("RACING"))?;
        for round in & history 
        {
            writeln!(out, "{}", standings::render(round))?;
            writeln!(out, "{}\n", standings::verdict(round))?;
        }

        Ok(history)
    }
}
