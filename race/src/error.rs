
use thiserror::Error;

///
/// Shorthand for results carrying a race error.
///
pub type RaceResult<T> = std::result::Result<T, RaceError>;

///
/// Everything that can stop a tournament from producing a winner.
///
#[derive(Debug, Error)]
pub enum RaceError 
{
    #[error("Cannot race without any competitors.")]
    EmptyCompetitorSet,

    #[error("The workload of competitor {id} ({name}) failed.")]
    WorkloadFailure 
    {
        id: usize,
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>
    },

    #[error("The workload of competitor {id} ({name}) panicked: {message}")]
    WorkloadPanic 
    {
        id: usize,
        name: String,
        message: String
    },

    #[error("Round {round} timed out waiting on competitors {ids:?}.")]
    RoundTimeout 
    {
        round: usize,
        ids: Vec<usize>
    },

    #[error("No unique winner after {rounds} rounds.")]
    MaxRoundsExceeded 
    {
        rounds: usize
    },

    #[error("Failed to spawn a thread for competitor {id}.")]
    ThreadSpawn 
    {
        id: usize,
        #[source]
        source: std::io::Error
    }
}

impl RaceError 
{
    ///
    /// Returns the id of the competitor whose workload brought the round down, if any.
    ///
    pub fn competitor (& self) -> Option<usize>
    {
        match self 
        {
            RaceError::WorkloadFailure { id, .. } => Some(* id),
            RaceError::WorkloadPanic { id, .. }   => Some(* id),
            RaceError::ThreadSpawn { id, .. }     => Some(* id),
            _                                     => None
        }
    }
}
