
use utils::*;

///
/// A participant in a tournament.
///
/// The identity (id, name and label) is fixed at creation. The duration is
/// the competitor's most recent measured time in seconds, and is rewritten
/// once for every round the competitor races in; laps counts those writes.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor 
{
    id: usize,
    name: String,
    label: String,
    duration: f64,
    laps: usize
}

impl std::fmt::Display for Competitor 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{} {} @{}", self.id, self.name, self.label)
    }
}

impl notate::Notate for Competitor 
{
    fn notate (& self) -> String 
    {
        format!("{}:{}@{}", self.id, self.name, self.label)
    }

    fn parse (s: & str) -> Result<Competitor>
    {
        let context = format!("Invalid notation '{}' for competitor.", s);

        let (id, rest) = s.split_once(':')
            .ok_or_else(|| error::error!("Competitor notation must start with 'id:'."))
            .context(context.clone())?;

        let id = id.trim().parse::<usize>().context(context.clone())?;

        let (name, label) = rest.rsplit_once('@')
            .ok_or_else(|| error::error!("Competitor notation must end with '@label'."))
            .context(context.clone())?;

        if name.trim().is_empty() || label.trim().is_empty()
        {
            return Err(error::error!("Competitor name and label must be non-empty.")).context(context);
        }

        Ok(Competitor::new(id, name.trim(), label.trim()))
    }
}

impl Competitor 
{
    ///
    /// Returns the most recently measured duration, in seconds.
    ///
    pub fn duration (& self) -> f64 
    {
        self.duration
    }

    pub fn id (& self) -> usize 
    {
        self.id
    }

    pub fn label (& self) -> & str 
    {
        & self.label
    }

    ///
    /// Returns the number of rounds this competitor has been timed in.
    ///
    pub fn laps (& self) -> usize 
    {
        self.laps
    }

    pub fn name (& self) -> & str 
    {
        & self.name
    }

    ///
    /// Creates a competitor that has not raced yet.
    ///
    pub fn new (id: usize, name: & str, label: & str) -> Competitor 
    {
        Competitor { id, name: name.to_owned(), label: label.to_owned(), duration: 0.0, laps: 0 }
    }

    ///
    /// Records the time measured for this competitor in the current round.
    ///
    pub(crate) fn record (& mut self, duration: f64)
    {
        self.duration = duration;
        self.laps += 1;
    }
}
