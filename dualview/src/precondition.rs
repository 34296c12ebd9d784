//! Argument checks used by the builders.

use crate::error::{Error, Result};

/// Returns the supplied argument, or `InvalidArgument` naming it when absent.
///
/// Builders collect their inputs as `Option`s; this is the single place where a
/// missing required input becomes an error.
pub(crate) fn require<T>(argument: Option<T>, name: &'static str) -> Result<T> {
    argument.ok_or(Error::InvalidArgument { name })
}
