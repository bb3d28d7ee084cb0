
pub use serde::{Serialize, Deserialize};

use super::error::*;

///
/// Reads a toml document into any deserializable structure.
///
pub fn from_toml<T> (s: & str) -> Result<T>
    where T: for<'de> Deserialize<'de>
{
    toml::from_str(s).context("Failed to parse toml document.")
}

///
/// Writes any serializable structure as pretty-printed json.
///
pub fn to_json<T> (value: & T) -> Result<String>
    where T: Serialize
{
    serde_json::to_string_pretty(value).context("Failed to write json document.")
}
