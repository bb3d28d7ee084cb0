
use race::Workload;

use utils::error::*;
use utils::{Serialize, Deserialize};

///
/// A configuration for the timed workload.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "size")]
    pub size: usize
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config { size: size() }
    }
}

fn size () -> usize 
{
    1_000_000
}

///
/// Materializes the list 0 .. size and reports its length.
///
/// Allocation and fill dominate the cost, which makes it a cheap, roughly
/// constant-cost task that still leaves room for scheduling noise.
///
#[derive(Clone, Copy, Debug)]
pub struct ListBuild 
{
    size: usize
}

impl ListBuild 
{
    pub fn new (config: & Config) -> ListBuild 
    {
        ListBuild { size: config.size }
    }
}

impl Workload for ListBuild 
{
    type Output = usize;

    fn run (& self) -> Result<usize>
    {
        let list : Vec<usize> = (0 .. self.size).collect();
        Ok(std::hint::black_box(list).len())
    }
}
