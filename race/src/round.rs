
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use super::clock::*;
use super::competitor::Competitor;
use super::error::*;
use super::spawn::*;
use super::sync::*;
use super::timing::{self, Timed};
use super::workload::Workload;

use utils::log;

///
/// One competitor's measurement for one round.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<T>
{
    pub index: usize,
    pub duration: f64,
    pub value: T
}

///
/// How a competitor's thread finished, if it did not produce a time.
///
enum Failure
{
    Error(utils::Error),
    Panic(String)
}

///
/// One result slot per competitor; each is written only by the thread timing that competitor.
///
type Slots<T> = Vec<Mutex<Option<Result<Timed<T>, Failure>>>>;

///
/// Times one round: every active competitor runs the workload on its own thread.
///
pub struct RoundRunner
{
    clock: Arc<dyn Clock>,
    spawner: Arc<dyn Spawner>,
    timeout: Option<Duration>
}

impl Default for RoundRunner
{
    fn default () -> RoundRunner
    {
        RoundRunner::new(None)
    }
}

impl RoundRunner
{
    ///
    /// Creates a runner that measures with the monotonic clock.
    ///
    pub fn new (timeout: Option<Duration>) -> RoundRunner
    {
        RoundRunner { clock: Arc::new(Monotonic), spawner: Arc::new(OsThreads), timeout }
    }

    ///
    /// Replaces the clock used to report elapsed times.
    ///
    pub fn with_clock (mut self, clock: Arc<dyn Clock>) -> RoundRunner
    {
        self.clock = clock;
        self
    }

    ///
    /// Replaces how competitor threads are started.
    ///
    pub fn with_spawner (mut self, spawner: Arc<dyn Spawner>) -> RoundRunner
    {
        self.spawner = spawner;
        self
    }

    ///
    /// Races the active competitors (indices into the registry) once.
    ///
    /// All competitor threads are spawned first and released together, then the
    /// caller blocks until every one of them has reported. Only after that
    /// barrier are the measured durations written back onto the registry, one
    /// per active competitor. If any workload failed, nothing is written and
    /// the failure of the earliest such competitor is returned.
    ///
    pub fn run<W> (& self, round: usize, registry: & mut [Competitor], active: & [usize], workload: & Arc<W>) -> RaceResult<Vec<Sample<W::Output>>>
        where W: Workload
    {
        if active.is_empty()
        {
            return Err(RaceError::EmptyCompetitorSet);
        }

        let slots : Arc<Slots<W::Output>> = Arc::new(active.iter().map(|_| Mutex::new(None)).collect());
        let gate = Arc::new(Gate::new());
        let countdown = Arc::new(Countdown::new(active.len()));

        let mut handles = Vec::with_capacity(active.len());

        for (slot, & index) in active.iter().enumerate()
        {
            let id = registry[index].id();

            let slots = slots.clone();
            let start = gate.clone();
            let countdown = countdown.clone();
            let workload = workload.clone();
            let clock = self.clock.clone();

            let spawned = self.spawner.spawn(
                format!("competitor-{}", id),
                Box::new(move ||
                {
                    start.wait();

                    let result = match panic::catch_unwind(AssertUnwindSafe(|| timing::time(& * workload, & * clock)))
                    {
                        Ok(Ok(timed)) => Ok(timed),
                        Ok(Err(err))  => Err(Failure::Error(err)),
                        Err(payload)  => Err(Failure::Panic(panic_message(payload)))
                    };

                    * slots[slot].lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
                    countdown.arrive();
                })
            );

            match spawned
            {
                Ok(handle) => handles.push(handle),
                Err(source) =>
                {
                    // Let the threads already spawned run to completion on their own.
                    gate.open();
                    log::error!("Round {}: could not spawn a thread for competitor {}.", round, id);
                    return Err(RaceError::ThreadSpawn { id, source });
                }
            }
        }

        log::debug!("Round {}: released {} competitors.", round, active.len());
        gate.open();

        let released = match self.timeout
        {
            Some(timeout) => countdown.wait_timeout(timeout),
            None          => { countdown.wait(); true }
        };

        if ! released
        {
            log::warn!("Round {}: {} competitors still running at the deadline.", round, countdown.remaining());
        }
        else
        {
            for handle in handles
            {
                if handle.join().is_err()
                {
                    log::warn!("Round {}: a competitor thread panicked after reporting.", round);
                }
            }
        }

        let mut timings = Vec::with_capacity(active.len());
        let mut missing = Vec::new();

        for (slot, & index) in active.iter().enumerate()
        {
            let competitor = & registry[index];
            let reported = slots[slot].lock().unwrap_or_else(PoisonError::into_inner).take();

            match reported
            {
                Some(Ok(timed)) => timings.push((index, timed)),

                Some(Err(Failure::Error(err))) =>
                {
                    log::error!("Round {}: competitor {} failed: {:#}", round, competitor.id(), err);
                    return Err(RaceError::WorkloadFailure
                    {
                        id: competitor.id(),
                        name: competitor.name().to_owned(),
                        source: err.into()
                    });
                },

                Some(Err(Failure::Panic(message))) =>
                {
                    log::error!("Round {}: competitor {} panicked: {}", round, competitor.id(), message);
                    return Err(RaceError::WorkloadPanic
                    {
                        id: competitor.id(),
                        name: competitor.name().to_owned(),
                        message
                    });
                },

                None => missing.push(competitor.id())
            }
        }

        if ! missing.is_empty()
        {
            log::error!("Round {}: no time from competitors {:?} before the deadline.", round, & missing);
            return Err(RaceError::RoundTimeout { round, ids: missing });
        }

        let samples = timings.into_iter()
            .map(|(index, timed)|
            {
                registry[index].record(timed.duration);
                Sample { index, duration: timed.duration, value: timed.value }
            })
            .collect::<Vec<_>>();

        Ok(samples)
    }
}

///
/// Extracts the message from a panic payload.
///
fn panic_message (payload: Box<dyn Any + Send>) -> String
{
    match payload.downcast::<String>()
    {
        Ok(message) => * message,
        Err(payload) => match payload.downcast::<& 'static str>()
        {
            Ok(message) => (* message).to_owned(),
            Err(_)      => "unknown panic payload".to_owned()
        }
    }
}
