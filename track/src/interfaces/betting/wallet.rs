
use super::config::Config;

use utils::error::*;

///
/// The player's balance across a betting session.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wallet 
{
    balance: f64,
    config: Config
}

impl Wallet 
{
    pub fn balance (& self) -> f64 
    {
        self.balance
    }

    ///
    /// Determines whether the balance still covers the minimum bet.
    ///
    pub fn can_play (& self) -> bool 
    {
        self.balance >= self.config.minimum_bet
    }

    pub fn minimum_bet (& self) -> f64 
    {
        self.config.minimum_bet
    }

    ///
    /// Opens a wallet with the configured starting balance.
    ///
    pub fn new (config: & Config) -> Wallet 
    {
        Wallet { balance: config.start_balance, config: * config }
    }

    ///
    /// Pays out or collects a bet and returns the change in balance. A winning
    /// pick earns the bet times the multiplier; a losing pick forfeits the bet.
    ///
    pub fn settle (& mut self, bet: f64, won: bool) -> f64 
    {
        let delta = match won 
        {
            true  => bet * self.config.bet_multiplier,
            false => - bet
        };

        self.balance += delta;
        delta
    }

    ///
    /// Accepts a bet between the minimum and the current balance, inclusive.
    ///
    pub fn validate (& self, bet: f64) -> Result<f64>
    {
        if ! bet.is_finite() || bet < self.config.minimum_bet || bet > self.balance 
        {
            return Err(error!(
                "Bet amount {} is not valid; it must be between {:.2} and {:.2}.",
                bet, self.config.minimum_bet, self.balance
            ));
        }

        Ok(bet)
    }
}
