
use std::io::{BufRead, Write};
use std::sync::Arc;

use race::{Competitor, Tournament};

use crate::config::*;
use crate::standings;
use crate::workload::ListBuild;

use super::wallet::*;

use utils::error::*;
use utils::log;

///
/// The interactive betting game: pick a winner, stake part of the balance,
/// watch the race, repeat until broke or done.
///
/// Competitors stay the same for the whole session; each race reuses the
/// same tournament, so their identities and ids never change between races.
///
pub struct BettingInterface<I, O>
    where I: BufRead, O: Write
{
    tournament: Tournament,
    workload: Arc<ListBuild>,
    wallet: Wallet,
    input: I,
    output: O
}

impl<I, O> BettingInterface<I, O>
    where I: BufRead, O: Write
{
    ///
    /// Creates a betting session over the given competitors.
    ///
    pub fn new (config: & Config, roster: Vec<Competitor>, input: I, output: O) -> Result<BettingInterface<I, O>>
    {
        let tournament = Tournament::new(roster, config.race)?;
        let workload = Arc::new(ListBuild::new(& config.workload));
        let wallet = Wallet::new(& config.betting);

        Ok(BettingInterface { tournament, workload, wallet, input, output })
    }

    ///
    /// Runs the main loop and returns the final balance. Running out of input
    /// ends the session as if the player had quit.
    ///
    pub fn run_loop (& mut self) -> Result<f64>
    {
        log::info!("Betting session started with balance {:.2}.", self.wallet.balance());

        loop
        {
            self.show_competitors()?;
            self.show_balance()?;

            let bet = match self.prompt_bet()?
            {
                Some(bet) => bet,
                None      => break
            };

            let chosen = match self.prompt_winner()?
            {
                Some(chosen) => chosen,
                None         => break
            };

            let winner = self.race()?;

            writeln!(self.output)?;
            writeln!(self.output, "{}", standings::banner("RESULTS"))?;

            let delta = self.wallet.settle(bet, winner == chosen);
            match delta > 0.0
            {
                true  => writeln!(self.output, "You've earned {:.2}", delta)?,
                false => writeln!(self.output, "You've lost {:.2}", - delta)?
            };

            log::info!(
                "Bet {:.2} on {}, winner {}; balance now {:.2}.",
                bet, chosen, winner, self.wallet.balance()
            );

            if ! self.wallet.can_play()
            {
                break;
            }

            writeln!(self.output)?;
            self.show_balance()?;

            match self.prompt("Play again? (Y/n): ")?
            {
                Some(answer) if ! wants_to_stop(& answer) => continue,
                _                                          => break
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", standings::banner("GAME END"))?;
        writeln!(self.output, "You finished the game with {:.2}", self.wallet.balance())?;

        log::info!("Betting session ended with balance {:.2}.", self.wallet.balance());
        Ok(self.wallet.balance())
    }

    ///
    /// Writes the prompt and reads one trimmed line, or None at end of input.
    ///
    fn prompt (& mut self, text: & str) -> Result<Option<String>>
    {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(& mut line).context("Failed to read from the terminal.")?
        {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_owned()))
        }
    }

    ///
    /// Asks for a bet until a valid one is given.
    ///
    fn prompt_bet (& mut self) -> Result<Option<f64>>
    {
        let text = format!("Bet amount (minimum = {:.2}): ", self.wallet.minimum_bet());

        loop
        {
            let answer = match self.prompt(& text)?
            {
                Some(answer) => answer,
                None         => return Ok(None)
            };

            let bet = answer.parse::<f64>()
                .context(format!("'{}' is not an amount.", answer))
                .and_then(|bet| self.wallet.validate(bet));

            match bet
            {
                Ok(bet) => return Ok(Some(bet)),
                Err(e)  =>
                {
                    log::debug!("{:#}", e);
                    writeln!(self.output, "\nBet amount is not valid\n")?;
                }
            }
        }
    }

    ///
    /// Asks for a competitor id until a valid one is given.
    ///
    fn prompt_winner (& mut self) -> Result<Option<usize>>
    {
        loop
        {
            let answer = match self.prompt("Winner ID: ")?
            {
                Some(answer) => answer,
                None         => return Ok(None)
            };

            match answer.parse::<usize>()
            {
                Ok(id) if self.tournament.competitors().iter().any(|c| c.id() == id) => return Ok(Some(id)),
                _ => writeln!(self.output, "\nID is not valid\n")?
            }
        }
    }

    ///
    /// Races every competitor, prints each round, and returns the winner's id.
    ///
    fn race (& mut self) -> Result<usize>
    {
        writeln!(self.output)?;
        writeln!(self.output, "{}", standings::banner("RACING"))?;

        let history = self.tournament.run_shared(& self.workload)
            .map_err(standings::failure)?;

        for round in & history
        {
            writeln!(self.output, "{}", standings::render(round))?;
            writeln!(self.output, "\n{}\n", standings::verdict(round))?;
        }

        history.winner()
            .map(|winner| winner.id())
            .ok_or_else(|| error!("The race finished without a winner."))
    }

    fn show_balance (& mut self) -> Result<()>
    {
        writeln!(self.output, "{}", standings::banner("STATUS"))?;
        writeln!(self.output, "Balance: {:.2}\n", self.wallet.balance())?;
        Ok(())
    }

    fn show_competitors (& mut self) -> Result<()>
    {
        let name_width = self.tournament.competitors().iter().map(|c| c.name().chars().count()).max().unwrap_or(0);

        writeln!(self.output)?;
        writeln!(self.output, "{}", standings::banner("COMPETITORS"))?;
        for competitor in self.tournament.competitors()
        {
            writeln!(
                self.output,
                "{:<3} {:<width$}  @{}",
                competitor.id(), competitor.name(), competitor.label(), width = name_width
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}

///
/// Reads a play-again answer: "n", "no", "o" or nothing at all means stop.
///
fn wants_to_stop (answer: & str) -> bool
{
    "no".contains(answer.to_lowercase().as_str())
}
