
use utils::error::*;

///
/// A unit of work whose execution time decides a round.
///
/// The same workload is shared by every competitor in a round, so it must be
/// callable from many threads at once. It takes no input; any error it returns
/// aborts the round it was running in.
///
pub trait Workload: Send + Sync + 'static
{
    type Output: Send + 'static;

    ///
    /// Performs the work once.
    ///
    fn run (& self) -> Result<Self::Output>;
}

impl<F, T> Workload for F 
    where F: Fn() -> Result<T> + Send + Sync + 'static,
          T: Send + 'static
{
    type Output = T;

    fn run (& self) -> Result<T>
    {
        self()
    }
}
