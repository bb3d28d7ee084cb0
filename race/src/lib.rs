
//!
//! A concurrent time-trial tournament resolver.
//!
//! Every active competitor runs the same workload on its own thread; the
//! fastest wins the round. Competitors tied at the minimum go through to
//! another round, and the tournament ends with the first round that has a
//! unique fastest competitor.
//!

pub mod clock;
pub mod competitor;
pub mod config;
pub mod error;
pub mod outcome;
pub mod round;
pub mod spawn;
pub mod sync;
pub mod timing;
pub mod tournament;
pub mod workload;

pub use clock::{Clock, Monotonic};
pub use competitor::Competitor;
pub use config::Config;
pub use error::{RaceError, RaceResult};
pub use outcome::{Evaluation, RoundOutcome, Status};
pub use round::{RoundRunner, Sample};
pub use spawn::{OsThreads, Spawner};
pub use timing::Timed;
pub use tournament::{History, Tournament};
pub use workload::Workload;
