
use super::error::*;

#[macro_export]
///
/// A format! variant whose arguments are all notated before formatting.
///
macro_rules! notate 
{
    ($fmt:expr, $($args:expr),*) => 
    {{
        use $crate::notate::Notate as _;
        format!($fmt, $(($args).notate()),*)
    }};
}

///
/// A trait for objects with a short canonical text form.
///
/// notate() produces the canonical form; parse() accepts the canonical
/// form and any lenient spellings the implementor chooses to recognize.
///
pub trait Notate 
    where Self: Sized
{
    ///
    /// Returns the canonical notational string for this object.
    ///
    fn notate (& self) -> String;

    ///
    /// Constructs a new object from the given notational string, provided
    /// that the notation is valid.
    ///
    fn parse (s: & str) -> Result<Self>;
}
