//! A read-only view that hides the values of sensitive keys.
//!
//! [`RedactingView`] borrows any [`ReadOnlyMap`] and answers lookups through
//! it, except that keys in its sensitivity set come back as the output of a
//! [`Replacement`] instead of the stored value.
//!
//! Redaction happens per access. Nothing is cached, so adding or removing a
//! sensitive key takes effect on the very next read, including reads made by
//! an iteration that is already under way.

use std::{
    borrow::Cow,
    cell::RefCell,
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use super::{
    map::{Iter, Keys, ReadOnlyMap, Values},
    replacement::Replacement,
};
use crate::{error::Result, precondition::require};

/// A redacting view over a borrowed source map.
///
/// The sensitivity set lives in a `RefCell` so it can be changed through a
/// shared reference while iterators over the view are alive. The view is
/// therefore single-threaded (`!Sync`).
///
/// ```rust
/// use std::collections::HashMap;
/// use dualview::{RedactingView, Replacement};
///
/// let source = HashMap::from([("user", "alice".to_string()), ("password", "hunter2".to_string())]);
/// let view = RedactingView::new(&source, ["password"], Replacement::placeholder());
///
/// assert_eq!(*view.get(&"user").unwrap(), "alice");
/// assert_eq!(*view.get(&"password").unwrap(), "[REDACTED]");
///
/// view.remove_sensitive(&"password");
/// assert_eq!(*view.get(&"password").unwrap(), "hunter2");
/// ```
pub struct RedactingView<'a, K, V, M: ?Sized = HashMap<K, V>> {
    source: &'a M,
    sensitive: RefCell<HashSet<K>>,
    replacement: Replacement<K, V>,
}

impl<'a, K, V, M> RedactingView<'a, K, V, M>
where
    K: Eq + Hash,
    V: Clone,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    /// Creates a view over `source`, seeding the sensitivity set from
    /// `sensitive_keys`. Duplicate keys collapse.
    pub fn new<I>(source: &'a M, sensitive_keys: I, replacement: Replacement<K, V>) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            source,
            sensitive: RefCell::new(sensitive_keys.into_iter().collect()),
            replacement,
        }
    }

    /// Starts a builder; see [`RedactingViewBuilder`].
    #[must_use]
    pub fn builder() -> RedactingViewBuilder<'a, K, V, M> {
        RedactingViewBuilder::new()
    }

    /// The wrapped source map.
    pub fn source(&self) -> &'a M {
        self.source
    }

    /// Returns the (possibly redacted) value for `key`.
    ///
    /// Fails with [`Error::KeyNotFound`](crate::Error::KeyNotFound) when `key`
    /// is absent from the source, whether or not it is sensitive.
    pub fn get(&self, key: &K) -> Result<Cow<'_, V>> {
        ReadOnlyMap::get(self, key)
    }

    /// Returns the (possibly redacted) value for `key`, or `None` when absent.
    ///
    /// Sensitive keys yield a freshly computed replacement on every call.
    pub fn try_get(&self, key: &K) -> Option<Cow<'_, V>> {
        if self.is_sensitive(key) {
            return self
                .source
                .contains_key(key)
                .then(|| Cow::Owned(self.replacement.apply(key)));
        }
        self.source.try_get(key)
    }

    /// Presence is never affected by redaction.
    pub fn contains_key(&self, key: &K) -> bool {
        self.source.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The source's keys, in the source's order.
    pub fn keys(&self) -> Keys<'_, K> {
        self.source.keys()
    }

    /// Lazily yields values in key order, redacting as each one is produced.
    pub fn values(&self) -> Values<'_, K, V, Self> {
        Values::new(self, self.keys())
    }

    /// Lazily yields `(key, value)` pairs in key order.
    ///
    /// Each value reflects the sensitivity set at the moment its pair is
    /// yielded, not when iteration started.
    pub fn iter(&self) -> Iter<'_, K, V, Self> {
        Iter::new(self, self.keys())
    }

    /// Marks `key` as sensitive. Returns `true` if it was not already marked.
    ///
    /// The key does not need to exist in the source.
    pub fn add_sensitive(&self, key: K) -> bool {
        self.sensitive.borrow_mut().insert(key)
    }

    /// Unmarks `key`. Returns `true` if it was marked.
    pub fn remove_sensitive(&self, key: &K) -> bool {
        self.sensitive.borrow_mut().remove(key)
    }

    /// Returns `true` if reads of `key` are currently redacted.
    pub fn is_sensitive(&self, key: &K) -> bool {
        self.sensitive.borrow().contains(key)
    }

    /// Snapshot of the current sensitivity set.
    pub fn sensitive_keys(&self) -> HashSet<K>
    where
        K: Clone,
    {
        self.sensitive.borrow().clone()
    }

    /// The replacement used for sensitive keys.
    pub fn replacement(&self) -> &Replacement<K, V> {
        &self.replacement
    }
}

impl<K, V, M> ReadOnlyMap<K, V> for RedactingView<'_, K, V, M>
where
    K: Eq + Hash,
    V: Clone,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    fn try_get(&self, key: &K) -> Option<Cow<'_, V>> {
        RedactingView::try_get(self, key)
    }

    fn len(&self) -> usize {
        RedactingView::len(self)
    }

    fn keys(&self) -> Keys<'_, K> {
        RedactingView::keys(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        RedactingView::contains_key(self, key)
    }
}

impl<'v, 'a, K, V, M> IntoIterator for &'v RedactingView<'a, K, V, M>
where
    K: Eq + Hash,
    V: Clone,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    type Item = (&'v K, Cow<'v, V>);
    type IntoIter = Iter<'v, K, V, RedactingView<'a, K, V, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats the redacted entries, never the stored values of sensitive keys.
impl<K, V, M> fmt::Debug for RedactingView<'_, K, V, M>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone + fmt::Debug,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builder for [`RedactingView`] whose inputs may be missing.
///
/// `source` and `replacement` are required; [`RedactingViewBuilder::build`]
/// fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) naming
/// the first one that was never supplied. Omitting `sensitive_keys` yields an
/// empty sensitivity set.
pub struct RedactingViewBuilder<'a, K, V, M: ?Sized = HashMap<K, V>> {
    source: Option<&'a M>,
    sensitive_keys: HashSet<K>,
    replacement: Option<Replacement<K, V>>,
}

impl<'a, K, V, M> RedactingViewBuilder<'a, K, V, M>
where
    K: Eq + Hash,
    M: ?Sized,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            sensitive_keys: HashSet::new(),
            replacement: None,
        }
    }

    #[must_use]
    pub fn source(mut self, source: &'a M) -> Self {
        self.source = Some(source);
        self
    }

    /// Adds keys to the initial sensitivity set. May be called repeatedly.
    #[must_use]
    pub fn sensitive_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.sensitive_keys.extend(keys);
        self
    }

    #[must_use]
    pub fn replacement(mut self, replacement: Replacement<K, V>) -> Self {
        self.replacement = Some(replacement);
        self
    }

    #[must_use]
    pub fn replacement_fn<F>(self, func: F) -> Self
    where
        F: Fn(&K) -> V + 'static,
    {
        self.replacement(Replacement::with(func))
    }

    /// Validates the inputs and builds the view.
    pub fn build(self) -> Result<RedactingView<'a, K, V, M>> {
        let source = require(self.source, "source")?;
        let replacement = require(self.replacement, "replacement")?;
        Ok(RedactingView {
            source,
            sensitive: RefCell::new(self.sensitive_keys),
            replacement,
        })
    }
}

impl<K, V, M> Default for RedactingViewBuilder<'_, K, V, M>
where
    K: Eq + Hash,
    M: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}
