
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use utils::error::*;
use utils::{Serialize, Deserialize};

pub use race::Config as RaceConfig;
pub use crate::interfaces::betting::config::Config as BettingConfig;
pub use crate::roster::Config as RosterConfig;
pub use crate::workload::Config as WorkloadConfig;

///
/// Represents a full configuration.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default)]
    pub race: RaceConfig,

    #[serde(default)]
    pub workload: WorkloadConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub betting: BettingConfig,

    #[serde(default = "log_path")]
    pub log_path: String
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            race: RaceConfig::default(),
            workload: WorkloadConfig::default(),
            roster: RosterConfig::default(),
            betting: BettingConfig::default(),
            log_path: log_path()
        }
    }
}

impl Config 
{
    ///
    /// Reads the configuration at the given path; a missing file means all defaults.
    ///
    pub fn load (path: & str) -> Result<Config>
    {
        if ! Path::new(path).exists()
        {
            return Ok(Config::default());
        }

        let mut config_str = String::new();
        OpenOptions::new().read(true).open(path)
            .and_then(|mut file| file.read_to_string(& mut config_str))
            .context(format!("Failed to read config file '{}'.", path))?;

        utils::from_toml(& config_str).context(format!("Invalid config file '{}'.", path))
    }
}

///
/// Returns the default log path.
///
fn log_path () -> String 
{
    "logs".to_owned()
}
