
use std::time::Instant;

///
/// Turns a start instant into an elapsed time in seconds.
///
/// Timed executions always read the start instant from the monotonic clock;
/// the clock only decides how the elapsed span is reported.
///
pub trait Clock: Send + Sync + 'static
{
    fn elapsed (& self, start: Instant) -> f64;
}

///
/// The monotonic wall clock.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct Monotonic;

impl Clock for Monotonic 
{
    fn elapsed (& self, start: Instant) -> f64 
    {
        start.elapsed().as_secs_f64()
    }
}
