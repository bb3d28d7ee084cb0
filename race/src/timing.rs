
use std::time::Instant;

use super::clock::Clock;
use super::workload::Workload;

use utils::error::*;

///
/// The result of a single timed workload execution.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timed<T> 
{
    pub duration: f64,
    pub value: T
}

///
/// Runs the workload once on the calling thread and measures how long it took.
/// A workload error is passed straight through.
///
pub fn time<W> (workload: & W, clock: & dyn Clock) -> Result<Timed<W::Output>>
    where W: Workload + ?Sized
{
    let start = Instant::now();
    let value = workload.run()?;
    let duration = clock.elapsed(start).max(0.0);

    Ok(Timed { duration, value })
}
