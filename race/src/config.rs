
use std::time::Duration;

use utils::{Serialize, Deserialize};

///
/// A configuration object for a tournament.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "max_rounds")]
    pub max_rounds: usize,

    #[serde(default = "round_timeout_ms")]
    pub round_timeout_ms: u64,

    #[serde(default = "skip_trivial_round")]
    pub skip_trivial_round: bool
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            max_rounds: max_rounds(),
            round_timeout_ms: round_timeout_ms(),
            skip_trivial_round: skip_trivial_round()
        }
    }
}

impl Config 
{
    ///
    /// Returns the maximum number of rounds, or None if the tournament may run forever.
    ///
    pub fn round_cap (& self) -> Option<usize>
    {
        match self.max_rounds 
        {
            0 => None,
            n => Some(n)
        }
    }

    ///
    /// Returns the deadline for a single round, or None if rounds may block forever.
    ///
    pub fn round_timeout (& self) -> Option<Duration>
    {
        match self.round_timeout_ms 
        {
            0  => None,
            ms => Some(Duration::from_millis(ms))
        }
    }
}

fn max_rounds () -> usize 
{
    1000
}

fn round_timeout_ms () -> u64 
{
    0
}

fn skip_trivial_round () -> bool 
{
    false
}
