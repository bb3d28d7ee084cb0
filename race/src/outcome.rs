
use super::competitor::Competitor;
use super::error::*;

use utils::*;

///
/// Whether a round produced a unique fastest competitor.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status
{
    Win,
    Draw
}

impl std::fmt::Display for Status
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Status::Win  => write!(f, "win"),
            Status::Draw => write!(f, "draw")
        }
    }
}

impl notate::Notate for Status
{
    fn notate (& self) -> String
    {
        self.to_string()
    }

    fn parse (s: & str) -> Result<Status>
    {
        match s.trim()
        {
            "win" | "Win" | "WIN"    => Ok(Status::Win),
            "draw" | "Draw" | "DRAW" => Ok(Status::Draw),
            _                        => Err(error::error!("Invalid notation '{}' for round status.", s))
        }
    }
}

///
/// The record of one round: its status and a snapshot of the standings,
/// fastest first.
///
/// The snapshot is a copy; later rounds overwrite the durations of the
/// competitors that keep racing, but never the standings recorded here.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome
{
    pub round: usize,
    pub status: Status,
    pub positions: Vec<Competitor>
}

impl RoundOutcome
{
    ///
    /// Returns the competitors that shared the fastest time.
    ///
    pub fn leaders (& self) -> & [Competitor]
    {
        match self.positions.first()
        {
            Some(first) =>
            {
                let count = self.positions.iter().take_while(|c| c.duration() == first.duration()).count();
                & self.positions[.. count]
            },
            None => & []
        }
    }

    ///
    /// Returns the winner of this round, if the round was not a draw.
    ///
    pub fn winner (& self) -> Option<& Competitor>
    {
        match self.status
        {
            Status::Win  => self.positions.first(),
            Status::Draw => None
        }
    }
}

///
/// A classified round, along with the registry indices of the competitors
/// that go through to the next round.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation
{
    pub outcome: RoundOutcome,
    pub survivors: Vec<usize>
}

///
/// Classifies a round from the durations just recorded for the active competitors.
///
/// Standings are sorted ascending by duration, keeping the active order among
/// equal times. Ties are detected with exact floating point equality: only
/// competitors whose time is bit-for-bit the minimum count as tied. A unique
/// minimum is a win; otherwise the tied competitors, and only they, survive.
///
pub fn evaluate (round: usize, registry: & [Competitor], active: & [usize]) -> RaceResult<Evaluation>
{
    let mut order = active.to_vec();
    order.sort_by(|& a, & b| registry[a].duration().total_cmp(& registry[b].duration()));

    let min_duration = active.iter()
        .map(|& index| registry[index].duration())
        .reduce(f64::min)
        .ok_or(RaceError::EmptyCompetitorSet)?;

    let tie_count = active.iter()
        .filter(|& & index| registry[index].duration() == min_duration)
        .count();

    let status = match tie_count
    {
        1 => Status::Win,
        _ => Status::Draw
    };

    let survivors = match status
    {
        Status::Win  => Vec::new(),
        Status::Draw => order[.. tie_count].to_vec()
    };

    let positions = order.iter().map(|& index| registry[index].clone()).collect();

    Ok(Evaluation { outcome: RoundOutcome { round, status, positions }, survivors })
}
