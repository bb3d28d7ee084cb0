
use utils::{Serialize, Deserialize};

///
/// Represents a betting config.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "start_balance")]
    pub start_balance: f64,

    #[serde(default = "minimum_bet")]
    pub minimum_bet: f64,

    #[serde(default = "bet_multiplier")]
    pub bet_multiplier: f64
}

impl Default for Config 
{
    fn default () -> Config 
    { 
        Config 
        {
            start_balance: start_balance(),
            minimum_bet: minimum_bet(),
            bet_multiplier: bet_multiplier()
        }
    }
}

fn start_balance () -> f64 
{
    20.0
}

fn minimum_bet () -> f64 
{
    2.0
}

fn bet_multiplier () -> f64 
{
    2.0
}
