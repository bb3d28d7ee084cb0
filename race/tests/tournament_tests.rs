
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use race::*;
use utils::error::*;

///
/// Reads the competitor id from the name of the thread timing it.
///
fn current_competitor () -> Option<usize>
{
    thread::current().name()
        .and_then(|name| name.strip_prefix("competitor-"))
        .and_then(|id| id.parse().ok())
}

///
/// Hands out pre-arranged times per competitor, one per round.
///
struct Script
{
    times: Mutex<HashMap<usize, VecDeque<f64>>>
}

impl Script
{
    fn new (times: Vec<(usize, Vec<f64>)>) -> Arc<Script>
    {
        let times = times.into_iter()
            .map(|(id, laps)| (id, laps.into_iter().collect()))
            .collect();
        Arc::new(Script { times: Mutex::new(times) })
    }
}

impl Clock for Script
{
    fn elapsed (& self, _start: Instant) -> f64
    {
        let id = current_competitor().expect("timed off a competitor thread");
        self.times.lock().unwrap()
            .get_mut(& id)
            .and_then(|laps| laps.pop_front())
            .expect("script ran out of times")
    }
}

///
/// Reports the same time for everyone, forever.
///
struct Frozen(f64);

impl Clock for Frozen
{
    fn elapsed (& self, _start: Instant) -> f64
    {
        self.0
    }
}

fn registry (n: usize) -> Vec<Competitor>
{
    (0 .. n).map(|i| Competitor::new(i, & format!("Competitor {}", i), & format!("c{}", i))).collect()
}

fn idle () -> impl Workload<Output = ()>
{
    || -> Result<()> { Ok(()) }
}

fn ids (competitors: & [Competitor]) -> Vec<usize>
{
    competitors.iter().map(|c| c.id()).collect()
}

#[test]
fn distinct_times_finish_in_one_round ()
{
    let script = Script::new(vec![(0, vec![0.9]), (1, vec![0.2]), (2, vec![0.4]), (3, vec![0.7])]);
    let mut tournament = Tournament::new(registry(4), Config::default()).unwrap().with_clock(script);

    let history = tournament.run(idle()).unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history.rounds[0].status, Status::Win);
    assert_eq!(ids(& history.rounds[0].positions), vec![1, 2, 3, 0]);
    assert_eq!(history.winner().map(|c| c.id()), Some(1));
}

#[test]
fn draw_narrows_to_the_tied_competitors ()
{
    let script = Script::new(vec![(0, vec![0.5]), (1, vec![0.3, 0.2]), (2, vec![0.3, 0.1])]);
    let mut tournament = Tournament::new(registry(3), Config::default()).unwrap().with_clock(script);

    let history = tournament.run(idle()).unwrap();

    assert_eq!(history.len(), 2);

    let first = & history.rounds[0];
    assert_eq!(first.status, Status::Draw);
    assert_eq!(ids(& first.positions), vec![1, 2, 0]);
    assert_eq!(first.positions.iter().map(|c| c.duration()).collect::<Vec<_>>(), vec![0.3, 0.3, 0.5]);

    let second = & history.rounds[1];
    assert_eq!(second.status, Status::Win);
    assert_eq!(ids(& second.positions), vec![2, 1]);
    assert_eq!(history.winner().map(|c| c.id()), Some(2));

    let laps = tournament.competitors().iter().map(|c| c.laps()).collect::<Vec<_>>();
    assert_eq!(laps, vec![1, 2, 2]);
    assert_eq!(tournament.competitors()[0].duration(), 0.5);
}

#[test]
fn consecutive_draws_keep_shrinking ()
{
    let script = Script::new(vec![
        (0, vec![0.1, 0.1, 0.1]),
        (1, vec![0.1, 0.1, 0.2]),
        (2, vec![0.1, 0.3]),
        (3, vec![0.4])
    ]);
    let mut tournament = Tournament::new(registry(4), Config::default()).unwrap().with_clock(script);

    let history = tournament.run(idle()).unwrap();

    let statuses = history.iter().map(|round| round.status).collect::<Vec<_>>();
    assert_eq!(statuses, vec![Status::Draw, Status::Draw, Status::Win]);

    let sizes = history.iter().map(|round| round.positions.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![4, 3, 2]);

    for pair in history.rounds.windows(2)
    {
        let survivors = ids(pair[0].leaders());
        let mut raced = ids(& pair[1].positions);
        raced.sort();
        assert_eq!(raced, survivors);
    }

    assert_eq!(history.winner().map(|c| c.id()), Some(0));
}

#[test]
fn only_the_last_round_is_a_win ()
{
    let script = Script::new(vec![(0, vec![0.2, 0.6]), (1, vec![0.2, 0.5]), (2, vec![0.8])]);
    let mut tournament = Tournament::new(registry(3), Config::default()).unwrap().with_clock(script);

    let history = tournament.run(idle()).unwrap();
    let (last, earlier) = history.rounds.split_last().unwrap();

    assert_eq!(last.status, Status::Win);
    assert!(earlier.iter().all(|round| round.status == Status::Draw));
}

#[test]
fn perpetual_tie_hits_the_round_cap ()
{
    let config = Config { max_rounds: 5, ..Config::default() };
    let mut tournament = Tournament::new(registry(3), config).unwrap().with_clock(Arc::new(Frozen(0.25)));

    let err = tournament.run(idle()).unwrap_err();

    assert!(matches!(err, RaceError::MaxRoundsExceeded { rounds: 5 }));
    assert_eq!(tournament.history().len(), 5);
    assert!(tournament.history().iter().all(|round| round.status == Status::Draw && round.positions.len() == 3));
}

#[test]
fn lone_competitor_races_a_trivial_round_by_default ()
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let workload = move || -> Result<()> { counter.fetch_add(1, Ordering::SeqCst); Ok(()) };

    let mut tournament = Tournament::new(registry(1), Config::default()).unwrap();
    let history = tournament.run(workload).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(history.len(), 1);
    assert_eq!(history.winner().map(|c| c.id()), Some(0));
}

#[test]
fn lone_competitor_can_win_without_racing ()
{
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let workload = move || -> Result<()> { counter.fetch_add(1, Ordering::SeqCst); Ok(()) };

    let config = Config { skip_trivial_round: true, ..Config::default() };
    let mut tournament = Tournament::new(registry(1), config).unwrap();
    let history = tournament.run(workload).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(history.len(), 1);
    assert_eq!(history.rounds[0].status, Status::Win);
    assert_eq!(tournament.competitors()[0].laps(), 0);
}

#[test]
fn failure_mid_tournament_stops_the_history ()
{
    let script = Script::new(vec![(0, vec![0.9]), (1, vec![0.1, 0.2]), (2, vec![0.1]), (3, vec![0.1, 0.3])]);

    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let workload = move || -> Result<()>
    {
        if current_competitor() == Some(2) && counter.fetch_add(1, Ordering::SeqCst) == 1
        {
            return Err(error!("disk full"));
        }
        Ok(())
    };

    let mut tournament = Tournament::new(registry(4), Config::default()).unwrap().with_clock(script);
    let err = tournament.run(workload).unwrap_err();

    assert!(matches!(err, RaceError::WorkloadFailure { id: 2, .. }));
    assert_eq!(tournament.history().len(), 1);
    assert_eq!(tournament.history().rounds[0].status, Status::Draw);
    assert_eq!(tournament.history().winner(), None);
}

#[test]
fn hung_round_times_out ()
{
    let config = Config { round_timeout_ms: 50, ..Config::default() };
    let workload = || -> Result<()>
    {
        if current_competitor() == Some(1)
        {
            thread::sleep(Duration::from_millis(500));
        }
        Ok(())
    };

    let mut tournament = Tournament::new(registry(3), config).unwrap();
    let err = tournament.run(workload).unwrap_err();

    assert!(matches!(err, RaceError::RoundTimeout { round: 1, ref ids } if ids == & vec![1]));
    assert!(tournament.history().is_empty());
}

#[test]
fn thousand_rounds_of_fifty_write_each_competitor_once_per_round ()
{
    const ROUNDS : usize = 1000;
    const COMPETITORS : usize = 50;

    let runner = RoundRunner::default();
    let workload = Arc::new(idle());
    let mut competitors = registry(COMPETITORS);
    let active = (0 .. COMPETITORS).collect::<Vec<_>>();

    for round in 1 ..= ROUNDS
    {
        let samples = runner.run(round, & mut competitors, & active, & workload).unwrap();

        let mut indices = samples.iter().map(|s| s.index).collect::<Vec<_>>();
        indices.sort();
        indices.dedup();
        assert_eq!(indices, active);

        assert!(competitors.iter().all(|c| c.laps() == round));
    }
}

#[test]
fn real_workload_produces_a_strict_winner ()
{
    let workload = || -> Result<usize> { Ok((0 .. 10_000).collect::<Vec<usize>>().len()) };
    let mut tournament = Tournament::new(registry(6), Config::default()).unwrap();

    let history = tournament.run(workload).unwrap();

    for round in & history
    {
        assert!(round.positions.windows(2).all(|w| w[0].duration() <= w[1].duration()));
    }

    let winner = history.winner().unwrap();
    let last = history.rounds.last().unwrap();
    assert!(last.positions[1 ..].iter().all(|c| c.duration() > winner.duration()));
}
