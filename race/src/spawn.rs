
use std::io;
use std::thread::{self, JoinHandle};

///
/// A task handed to a competitor thread.
///
pub type Task = Box<dyn FnOnce() + Send + 'static>;

///
/// Starts the named thread that times one competitor.
///
pub trait Spawner: Send + Sync + 'static
{
    fn spawn (& self, name: String, task: Task) -> io::Result<JoinHandle<()>>;
}

///
/// Plain operating system threads.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct OsThreads;

impl Spawner for OsThreads
{
    fn spawn (& self, name: String, task: Task) -> io::Result<JoinHandle<()>>
    {
        thread::Builder::new()
            .name(name)
            .spawn(task)
    }
}
