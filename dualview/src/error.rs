//! Error taxonomy shared by every view and container.
//!
//! There are only two ways to fail: a required construction input was never
//! supplied, or a required lookup named a key the store does not hold. Both are
//! returned to the caller immediately; nothing here logs, retries, or recovers.

/// Errors produced by builders and required lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required construction input was not supplied.
    ///
    /// `name` is the builder input that was missing (e.g. `"source"` or
    /// `"replacement"`). No partially built value is retained.
    #[error("invalid argument: `{name}` is required")]
    InvalidArgument {
        /// Name of the missing input.
        name: &'static str,
    },
    /// A required lookup named a key that is not present.
    ///
    /// `try_get` style lookups report absence with `None` instead.
    #[error("the given key was not present in the map")]
    KeyNotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
