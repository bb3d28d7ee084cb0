

///
/// The error currency shared across the workspace.
///
pub use anyhow::{Context, Error, Result};

///
/// Builds an ad-hoc error from a format string.
///
pub use anyhow::anyhow as error;
