
pub mod betting;
pub mod config;
pub mod wallet;

pub use self::betting::BettingInterface;
