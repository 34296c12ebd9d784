//! The read-only mapping capability shared by plain maps and views.
//!
//! Anything that can answer "what is stored under this key?" and enumerate its
//! keys can sit behind a [`RedactingView`](super::RedactingView) or be handed to
//! code that only needs to read. Values come back as `Cow` so plain maps lend
//! their stored values while views hand out freshly computed replacements.
//!
//! Enumeration is lazy: [`Values`] and [`Iter`] walk the key sequence and look
//! each value up at the moment it is yielded.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use crate::error::{Error, Result};

/// Boxed key iterator returned by [`ReadOnlyMap::keys`].
pub type Keys<'a, K> = Box<dyn Iterator<Item = &'a K> + 'a>;

/// Read access to a key/value mapping.
///
/// Implementors provide lookup, length, and key enumeration; everything else
/// is derived. The key order of [`ReadOnlyMap::keys`] defines the order of
/// [`ReadOnlyMap::values`] and [`ReadOnlyMap::iter`].
pub trait ReadOnlyMap<K, V: Clone> {
    /// Returns the value for `key`, or `None` when the key is absent.
    fn try_get(&self, key: &K) -> Option<Cow<'_, V>>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// The keys, in the map's iteration order.
    fn keys(&self) -> Keys<'_, K>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value for `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] when the key is absent.
    fn get(&self, key: &K) -> Result<Cow<'_, V>> {
        self.try_get(key).ok_or(Error::KeyNotFound)
    }

    /// Lazily yields one value per key, in key order.
    fn values(&self) -> Values<'_, K, V, Self>
    where
        Self: Sized,
    {
        Values::new(self, self.keys())
    }

    /// Lazily yields `(key, value)` pairs, in key order.
    fn iter(&self) -> Iter<'_, K, V, Self>
    where
        Self: Sized,
    {
        Iter::new(self, self.keys())
    }
}

/// Lazy value iterator. Each value is looked up when it is yielded.
pub struct Values<'a, K, V, M: ?Sized> {
    map: &'a M,
    keys: Keys<'a, K>,
    _value: PhantomData<fn() -> V>,
}

impl<'a, K, V, M: ?Sized> Values<'a, K, V, M> {
    pub(crate) fn new(map: &'a M, keys: Keys<'a, K>) -> Self {
        Self {
            map,
            keys,
            _value: PhantomData,
        }
    }
}

impl<'a, K, V, M> Iterator for Values<'a, K, V, M>
where
    V: Clone + 'a,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    type Item = Cow<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        loop {
            let key = self.keys.next()?;
            // A key that vanished between enumeration and lookup is skipped.
            if let Some(value) = map.try_get(key) {
                return Some(value);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.keys.size_hint().1)
    }
}

/// Lazy entry iterator. Each value is looked up when its pair is yielded.
pub struct Iter<'a, K, V, M: ?Sized> {
    map: &'a M,
    keys: Keys<'a, K>,
    _value: PhantomData<fn() -> V>,
}

impl<'a, K, V, M: ?Sized> Iter<'a, K, V, M> {
    pub(crate) fn new(map: &'a M, keys: Keys<'a, K>) -> Self {
        Self {
            map,
            keys,
            _value: PhantomData,
        }
    }
}

impl<'a, K, V, M> Iterator for Iter<'a, K, V, M>
where
    V: Clone + 'a,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    type Item = (&'a K, Cow<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        loop {
            let key = self.keys.next()?;
            if let Some(value) = map.try_get(key) {
                return Some((key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.keys.size_hint().1)
    }
}

impl<K, V, S> ReadOnlyMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn try_get(&self, key: &K) -> Option<Cow<'_, V>> {
        HashMap::get(self, key).map(Cow::Borrowed)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Keys<'_, K> {
        Box::new(HashMap::keys(self))
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K, V> ReadOnlyMap<K, V> for BTreeMap<K, V>
where
    K: Ord,
    V: Clone,
{
    fn try_get(&self, key: &K) -> Option<Cow<'_, V>> {
        BTreeMap::get(self, key).map(Cow::Borrowed)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> Keys<'_, K> {
        Box::new(BTreeMap::keys(self))
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}
