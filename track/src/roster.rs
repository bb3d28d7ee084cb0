
use lazy_static::lazy_static;

use race::Competitor;

use utils::*;

///
/// A named entrant, before it is given an id.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant 
{
    pub name: String,
    pub label: String
}

impl notate::Notate for Entrant 
{
    fn notate (& self) -> String 
    {
        format!("{}@{}", self.name, self.label)
    }

    fn parse (s: & str) -> Result<Entrant>
    {
        let (name, label) = s.rsplit_once('@')
            .ok_or_else(|| error::error!("Entrant notation must look like 'name@label'."))
            .context(format!("Invalid notation '{}' for entrant.", s))?;

        let (name, label) = (name.trim(), label.trim());
        if name.is_empty() || label.is_empty()
        {
            return Err(error::error!("Invalid notation '{}' for entrant: name and label must be non-empty.", s));
        }

        Ok(Entrant { name: name.to_owned(), label: label.to_owned() })
    }
}

///
/// A configuration for the competitor roster.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "num_competitors")]
    pub num_competitors: usize,

    #[serde(default)]
    pub entrants: Vec<Entrant>
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config { num_competitors: num_competitors(), entrants: Vec::new() }
    }
}

fn num_competitors () -> usize 
{
    6
}

lazy_static! 
{
    static ref NAME_POOL : Vec<Entrant> = [
        ("Ada Lovelace",     "countess"),
        ("Alan Turing",      "enigma"),
        ("Grace Hopper",     "cobol"),
        ("Edsger Dijkstra",  "shortest"),
        ("Barbara Liskov",   "substitute"),
        ("Donald Knuth",     "tex"),
        ("Margaret Hamilton","apollo"),
        ("John Backus",      "fortran"),
        ("Frances Allen",    "optimizer"),
        ("Tony Hoare",       "quicksort"),
        ("Radia Perlman",    "spanning"),
        ("Ken Thompson",     "unix")
    ]
    .iter()
    .map(|(name, label)| Entrant { name: (* name).to_owned(), label: (* label).to_owned() })
    .collect();
}

///
/// Builds the competitor registry: explicit entrants first, in order, then
/// names from the built-in pool until the configured size is reached.
/// Ids are assigned 0, 1, 2, ... in registry order.
///
pub fn build (config: & Config, extra: & [Entrant]) -> Result<Vec<Competitor>>
{
    let explicit = config.entrants.iter().chain(extra.iter()).cloned().collect::<Vec<_>>();
    let count = config.num_competitors.max(explicit.len());

    if count == 0 
    {
        return Err(error::error!("The roster must contain at least one competitor."));
    }

    let competitors = (0 .. count)
        .map(|id| match explicit.get(id)
        {
            Some(entrant) => Competitor::new(id, & entrant.name, & entrant.label),
            None          => pooled(id - explicit.len(), id)
        })
        .collect();

    Ok(competitors)
}

///
/// Takes the nth name from the pool, numbering repeats once the pool runs out.
///
fn pooled (n: usize, id: usize) -> Competitor 
{
    let entrant = & NAME_POOL[n % NAME_POOL.len()];
    match n / NAME_POOL.len()
    {
        0     => Competitor::new(id, & entrant.name, & entrant.label),
        cycle => Competitor::new(id, & format!("{} {}", entrant.name, cycle + 1), & format!("{}{}", entrant.label, cycle + 1))
    }
}
