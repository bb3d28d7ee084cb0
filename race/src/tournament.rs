
use std::sync::Arc;

use uuid::Uuid;

use super::clock::Clock;
use super::competitor::Competitor;
use super::config::Config;
use super::error::*;
use super::outcome::{self, RoundOutcome, Status};
use super::round::RoundRunner;
use super::workload::Workload;

use utils::{log, Serialize, Deserialize};

///
/// The rounds of one tournament in the order they were played.
///
/// A finished history ends with its only winning round.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History
{
    pub run_id: Uuid,
    pub rounds: Vec<RoundOutcome>
}

impl History
{
    pub fn is_empty (& self) -> bool
    {
        self.rounds.is_empty()
    }

    pub fn iter (& self) -> std::slice::Iter<'_, RoundOutcome>
    {
        self.rounds.iter()
    }

    pub fn len (& self) -> usize
    {
        self.rounds.len()
    }

    fn new (run_id: Uuid) -> History
    {
        History { run_id, rounds: Vec::new() }
    }

    ///
    /// Returns the tournament winner, once the history is finished.
    ///
    pub fn winner (& self) -> Option<& Competitor>
    {
        self.rounds.last().and_then(|round| round.winner())
    }
}

impl<'a> IntoIterator for & 'a History
{
    type Item = & 'a RoundOutcome;
    type IntoIter = std::slice::Iter<'a, RoundOutcome>;

    fn into_iter (self) -> Self::IntoIter
    {
        self.rounds.iter()
    }
}

///
/// Owns the competitor registry and plays rounds until one competitor is
/// uniquely fastest.
///
pub struct Tournament
{
    run_id: Uuid,
    config: Config,
    registry: Vec<Competitor>,
    runner: RoundRunner,
    history: History
}

impl Tournament
{
    ///
    /// Returns the registry, with each competitor's latest measured duration.
    ///
    pub fn competitors (& self) -> & [Competitor]
    {
        & self.registry
    }

    pub fn config (& self) -> & Config
    {
        & self.config
    }

    ///
    /// Returns the rounds played so far. After a failed run this holds every
    /// round completed before the failure.
    ///
    pub fn history (& self) -> & History
    {
        & self.history
    }

    ///
    /// Creates a tournament over the given competitors.
    ///
    pub fn new (registry: Vec<Competitor>, config: Config) -> RaceResult<Tournament>
    {
        if registry.is_empty()
        {
            return Err(RaceError::EmptyCompetitorSet);
        }

        let run_id = Uuid::new_v4();
        let runner = RoundRunner::new(config.round_timeout());

        Ok(Tournament { run_id, config, registry, runner, history: History::new(run_id) })
    }

    ///
    /// Plays the tournament to completion with the given workload.
    ///
    pub fn run<W> (& mut self, workload: W) -> RaceResult<History>
        where W: Workload
    {
        self.run_shared(& Arc::new(workload))
    }

    ///
    /// Plays the tournament to completion with a workload that may also be
    /// shared with other tournaments.
    ///
    /// Every call starts a fresh history with a new run id. The active set
    /// starts as the whole registry; after each draw it is replaced by the
    /// competitors tied for the fastest time, so it only ever shrinks. A draw
    /// always leaves at least two competitors, so a lone active competitor
    /// only occurs when the registry itself has one entry.
    ///
    pub fn run_shared<W> (& mut self, workload: & Arc<W>) -> RaceResult<History>
        where W: Workload
    {
        self.run_id = Uuid::new_v4();
        self.history = History::new(self.run_id);

        let mut active : Vec<usize> = (0 .. self.registry.len()).collect();

        log::info!("Tournament {}: {} competitors.", self.run_id, active.len());

        loop
        {
            let round = self.history.len() + 1;

            if let Some(cap) = self.config.round_cap()
            {
                if round > cap
                {
                    log::warn!("Tournament {}: still tied after {} rounds.", self.run_id, cap);
                    return Err(RaceError::MaxRoundsExceeded { rounds: cap });
                }
            }

            if self.config.skip_trivial_round && active.len() == 1
            {
                let positions = vec![self.registry[active[0]].clone()];
                log::info!("Tournament {}: round {} won by default by {}.", self.run_id, round, & positions[0]);
                self.history.rounds.push(RoundOutcome { round, status: Status::Win, positions });
                return Ok(self.history.clone());
            }

            if let Err(err) = self.runner.run(round, & mut self.registry, & active, workload)
            {
                log::error!("Tournament {}: aborted in round {}: {}", self.run_id, round, err);
                return Err(err);
            }

            let evaluation = outcome::evaluate(round, & self.registry, & active)?;
            let status = evaluation.outcome.status;

            log::info!(
                "Tournament {}: round {} is a {} among {} competitors.",
                self.run_id, round, status, active.len()
            );

            self.history.rounds.push(evaluation.outcome);

            match status
            {
                Status::Win  => return Ok(self.history.clone()),
                Status::Draw => active = evaluation.survivors
            }
        }
    }

    pub fn run_id (& self) -> Uuid
    {
        self.run_id
    }

    ///
    /// Replaces the clock used to report elapsed times.
    ///
    pub fn with_clock (mut self, clock: Arc<dyn Clock>) -> Tournament
    {
        self.runner = self.runner.with_clock(clock);
        self
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    use utils::error::*;

    fn registry (n: usize) -> Vec<Competitor>
    {
        (0 .. n).map(|i| Competitor::new(i, & format!("Competitor {}", i), & format!("c{}", i))).collect()
    }

    #[test]
    fn empty_registry_is_rejected ()
    {
        assert!(matches!(Tournament::new(Vec::new(), Config::default()), Err(RaceError::EmptyCompetitorSet)));
    }

    #[test]
    fn keeps_its_config ()
    {
        let config = Config { max_rounds: 7, round_timeout_ms: 250, skip_trivial_round: true };
        let tournament = Tournament::new(registry(2), config).unwrap();

        assert_eq!(tournament.config().round_cap(), Some(7));
        assert_eq!(tournament.config().round_timeout(), Some(std::time::Duration::from_millis(250)));
    }

    #[test]
    fn single_competitor_wins_the_first_round ()
    {
        let mut tournament = Tournament::new(registry(1), Config::default()).unwrap();
        let history = tournament.run(|| -> Result<()> { Ok(()) }).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history.winner().map(|c| c.id()), Some(0));
        assert_eq!(tournament.competitors()[0].laps(), 1);
    }

    ///
    /// Reports each competitor's id plus one as its time in seconds.
    ///
    struct ByName;

    impl Clock for ByName
    {
        fn elapsed (& self, _start: std::time::Instant) -> f64
        {
            std::thread::current().name()
                .and_then(|name| name.strip_prefix("competitor-"))
                .and_then(|id| id.parse::<f64>().ok())
                .map_or(0.0, |id| id + 1.0)
        }
    }

    #[test]
    fn every_run_starts_a_fresh_history ()
    {
        let mut tournament = Tournament::new(registry(3), Config::default()).unwrap().with_clock(Arc::new(ByName));

        let first = tournament.run(|| -> Result<()> { Ok(()) }).unwrap();
        let second = tournament.run(|| -> Result<()> { Ok(()) }).unwrap();

        assert_ne!(first.run_id, second.run_id);
        assert_eq!(second.run_id, tournament.run_id());
        assert_eq!(second.len(), 1);
        assert_eq!(second.winner().map(|c| c.id()), Some(0));
        assert_eq!(tournament.competitors().iter().map(|c| c.laps()).collect::<Vec<_>>(), vec![2, 2, 2]);
    }

    #[test]
    fn history_serializes_to_json ()
    {
        let mut history = History::new(Uuid::nil());
        history.rounds.push(RoundOutcome { round: 1, status: Status::Win, positions: registry(2) });

        let json = utils::to_json(& history).unwrap();
        assert!(json.contains("\"status\": \"win\""));

        let parsed : History = serde_json::from_str(& json).unwrap();
        assert_eq!(parsed, history);
    }
}
