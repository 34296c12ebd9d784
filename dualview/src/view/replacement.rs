//! Replacement values for sensitive keys.
//!
//! A [`Replacement`] maps a key to the value shown in its place. It is invoked
//! on every redacted read and its results are never cached, so a replacement
//! with side effects or time-varying output (a token generator, a counter)
//! behaves the same on the tenth read as on the first.

use std::{fmt, rc::Rc};

/// Default placeholder used by [`Replacement::placeholder`].
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Produces the substitute value for a sensitive key.
///
/// Cloning is cheap: clones share the same underlying function.
pub struct Replacement<K, V> {
    func: Rc<dyn Fn(&K) -> V>,
}

impl<K, V> Replacement<K, V> {
    /// Wraps a function of the key.
    #[must_use]
    pub fn with<F>(func: F) -> Self
    where
        F: Fn(&K) -> V + 'static,
    {
        Self {
            func: Rc::new(func),
        }
    }

    /// Always yields a clone of `value`, whatever the key.
    #[must_use]
    pub fn constant(value: V) -> Self
    where
        V: Clone + 'static,
    {
        Self::with(move |_| value.clone())
    }

    /// Computes the replacement for `key`.
    pub fn apply(&self, key: &K) -> V {
        (self.func)(key)
    }
}

impl<K> Replacement<K, String> {
    /// Replaces every sensitive value with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn placeholder() -> Self {
        Self::with(|_| REDACTED_PLACEHOLDER.to_string())
    }

    /// Replaces a sensitive value with `[REDACTED:<key>]`.
    #[must_use]
    pub fn tagged() -> Self
    where
        K: fmt::Display,
    {
        Self::with(|key| format!("[REDACTED:{key}]"))
    }
}

impl<K, V> Clone for Replacement<K, V> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<K, V> fmt::Debug for Replacement<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacement").finish_non_exhaustive()
    }
}
