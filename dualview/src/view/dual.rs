//! The owning container with an exposed and a redacted read path.
//!
//! [`DualView`] keeps two plain maps in lockstep: every write lands in both,
//! every removal leaves both. Callers hand [`DualView::exposed`] to trusted
//! code and [`DualView::redacted`] (or, for per-read redaction,
//! [`DualView::redacting_view`]) to everything else.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use super::{redacting::RedactingView, replacement::Replacement};
use crate::{error::Result, precondition::require};

/// A key/value store with two read paths over the same logical data.
///
/// ```rust
/// use dualview::DualView;
///
/// let mut config = DualView::with_value("***".to_string(), ["password"]);
/// config.set("user", "alice".to_string());
/// config.set("password", "hunter2".to_string());
///
/// assert_eq!(config.exposed()["password"], "hunter2");
/// assert_eq!(*config.redacting_view().get(&"password").unwrap(), "***");
/// assert_eq!(*config.redacting_view().get(&"user").unwrap(), "alice");
/// ```
pub struct DualView<K, V> {
    exposed: HashMap<K, V>,
    redacted: HashMap<K, V>,
    sensitive_keys: HashSet<K>,
    replacement: Replacement<K, V>,
}

impl<K, V> DualView<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty container.
    pub fn new<I>(replacement: Replacement<K, V>, sensitive_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            exposed: HashMap::new(),
            redacted: HashMap::new(),
            sensitive_keys: sensitive_keys.into_iter().collect(),
            replacement,
        }
    }

    /// Creates an empty container whose replacement is a function of the key.
    pub fn with_fn<F, I>(func: F, sensitive_keys: I) -> Self
    where
        F: Fn(&K) -> V + 'static,
        I: IntoIterator<Item = K>,
    {
        Self::new(Replacement::with(func), sensitive_keys)
    }

    /// Creates an empty container whose replacement is always `value`.
    pub fn with_value<I>(value: V, sensitive_keys: I) -> Self
    where
        V: Clone + 'static,
        I: IntoIterator<Item = K>,
    {
        Self::new(Replacement::constant(value), sensitive_keys)
    }

    /// Starts a builder; see [`DualViewBuilder`].
    #[must_use]
    pub fn builder() -> DualViewBuilder<K, V> {
        DualViewBuilder::new()
    }

    /// Writes `value` under `key` in both backing maps, overwriting any
    /// previous value. Returns the previous exposed value.
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
        V: Clone,
    {
        self.redacted.insert(key.clone(), value.clone());
        self.exposed.insert(key, value)
    }

    /// Removes `key` from both backing maps.
    ///
    /// Returns whether `key` was present in the exposed map.
    pub fn remove(&mut self, key: &K) -> bool {
        self.redacted.remove(key);
        self.exposed.remove(key).is_some()
    }

    /// The true values, never redacted.
    pub fn exposed(&self) -> &HashMap<K, V> {
        &self.exposed
    }

    /// The redacted read path.
    ///
    /// Known gap: this map receives the raw value on every write, exactly like
    /// [`DualView::exposed`]. The sensitive keys and replacement are *not*
    /// applied here. Use [`DualView::redacting_view`] for reads that substitute
    /// sensitive values.
    pub fn redacted(&self) -> &HashMap<K, V> {
        &self.redacted
    }

    /// Keys whose values a redacting read substitutes.
    pub fn sensitive_keys(&self) -> &HashSet<K> {
        &self.sensitive_keys
    }

    pub fn sensitive_keys_mut(&mut self) -> &mut HashSet<K> {
        &mut self.sensitive_keys
    }

    pub fn replacement(&self) -> &Replacement<K, V> {
        &self.replacement
    }

    /// A [`RedactingView`] over the redacted map.
    ///
    /// The view starts with a snapshot of [`DualView::sensitive_keys`]; later
    /// changes to either sensitivity set do not affect the other.
    pub fn redacting_view(&self) -> RedactingView<'_, K, V>
    where
        K: Clone,
        V: Clone,
    {
        RedactingView::new(
            &self.redacted,
            self.sensitive_keys.iter().cloned(),
            self.replacement.clone(),
        )
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.exposed.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.exposed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exposed.is_empty()
    }
}

impl<K, V> Extend<(K, V)> for DualView<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Shows the redacted entries only; exposed values never reach `Debug`.
impl<K, V> fmt::Debug for DualView<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualView")
            .field("sensitive_keys", &self.sensitive_keys.len())
            .field("entries", &self.redacting_view())
            .finish()
    }
}

/// Builder for [`DualView`] whose replacement may be missing.
///
/// [`DualViewBuilder::build`] fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when no
/// replacement was supplied. Omitting `sensitive_keys` yields an empty set.
pub struct DualViewBuilder<K, V> {
    sensitive_keys: HashSet<K>,
    replacement: Option<Replacement<K, V>>,
}

impl<K, V> DualViewBuilder<K, V>
where
    K: Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            sensitive_keys: HashSet::new(),
            replacement: None,
        }
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

    #[must_use]
    pub fn replacement_value(self, value: V) -> Self
    where
        V: Clone + 'static,
    {
        self.replacement(Replacement::constant(value))
    }

    /// Validates the inputs and builds an empty container.
    pub fn build(self) -> Result<DualView<K, V>> {
        let replacement = require(self.replacement, "replacement")?;
        Ok(DualView::new(replacement, self.sensitive_keys))
    }
}

impl<K, V> Default for DualViewBuilder<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DualView;
    use crate::{Error, Replacement};

    #[test]
    fn set_returns_previous_exposed_value() {
        let mut view = DualView::with_value(0_u32, ["pin"]);
        assert_eq!(view.set("pin", 1234), None);
        assert_eq!(view.set("pin", 4321), Some(1234));
        assert_eq!(view.exposed()["pin"], 4321);
        assert_eq!(view.redacted()["pin"], 4321);
    }

    #[test]
    fn remove_reports_exposed_presence() {
        let mut view = DualView::with_value(String::new(), None::<&str>);
        view.set("k", "v".to_string());
        assert!(view.remove(&"k"));
        assert!(!view.remove(&"k"));
        assert!(view.is_empty());
        assert!(view.redacted().is_empty());
    }

    #[test]
    fn extend_writes_both_maps() {
        let mut view = DualView::new(Replacement::placeholder(), ["token"]);
        view.extend([("token", "abc".to_string()), ("user", "bob".to_string())]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.exposed(), view.redacted());
    }

    #[test]
    fn redacting_view_snapshots_sensitive_keys() {
        let mut view = DualView::new(Replacement::placeholder(), ["token"]);
        view.set("token", "abc".to_string());
        view.set("user", "bob".to_string());

        let redacting = view.redacting_view();
        redacting.add_sensitive("user");
        assert_eq!(*redacting.get(&"user").unwrap(), "[REDACTED]");
        assert!(!view.sensitive_keys().contains(&"user"));
    }

    #[test]
    fn debug_hides_sensitive_values() {
        let mut view = DualView::new(Replacement::placeholder(), ["token"]);
        view.set("token", "abc".to_string());
        let rendered = format!("{view:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("abc"));
    }

    #[test]
    fn builder_without_replacement_is_invalid() {
        let result = DualView::<&str, String>::builder()
            .sensitive_keys(["token"])
            .build();
        assert_eq!(
            result.err(),
            Some(Error::InvalidArgument {
                name: "replacement"
            })
        );
    }
}
