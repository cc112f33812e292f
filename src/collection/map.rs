//! # Collection Map
//!
//! A key-unique associative container with predicate search, in-place
//! filtering and value transformation. Iteration order is unspecified.

use std::collections::hash_map::{Entry, IntoIter};
use std::collections::HashMap;
use std::hash::Hash;

/// Typed map wrapper used to reshape keyed collections
///
/// Mutators (`filter`, `merge`, `clean`) work in place and return `&mut Self`
/// so calls can be chained. Derivations (`transform_values`, `map_values`)
/// return a new container. Absence is always reported through `Option`.
#[derive(Debug, Clone)]
pub struct CollectionMap<K, V> {
    items: HashMap<K, V>,
}

impl<K, V> CollectionMap<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Wrap an existing map, taking ownership of it
    pub fn from_map(items: HashMap<K, V>) -> Self {
        Self { items }
    }

    /// Build a container from values, deriving each key from its value
    pub fn from_values<I, F>(values: I, mut key_of: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        let items = values
            .into_iter()
            .map(|value| (key_of(&value), value))
            .collect();
        Self { items }
    }

    /// Build a container by transforming every value of `items`
    pub fn map_from<T, F>(items: HashMap<K, T>, transform: F) -> Self
    where
        F: FnMut(&K, T) -> V,
    {
        CollectionMap::from_map(items).map_values(transform)
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the value stored under `key`
    pub fn find(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Mutable lookup of the value stored under `key`
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.items.get_mut(key)
    }

    pub fn exists(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Collect every value whose entry satisfies `predicate`
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&V>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.items
            .iter()
            .filter(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
            .collect()
    }

    /// First value (in iteration order) whose entry satisfies `predicate`
    pub fn find_one<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.items
            .iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Keep only the entries satisfying `predicate`
    pub fn filter<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.items.retain(|key, value| predicate(key, value));
        self
    }

    /// Derive a new container with the same keys and transformed values
    pub fn transform_values<E, F>(&self, mut transform: F) -> CollectionMap<K, E>
    where
        K: Clone,
        F: FnMut(&K, &V) -> E,
    {
        let items = self
            .items
            .iter()
            .map(|(key, value)| (key.clone(), transform(key, value)))
            .collect();
        CollectionMap { items }
    }

    /// Consuming form of [`transform_values`](Self::transform_values)
    pub fn map_values<E, F>(self, mut transform: F) -> CollectionMap<K, E>
    where
        F: FnMut(&K, V) -> E,
    {
        let items = self
            .items
            .into_iter()
            .map(|(key, value)| {
                let mapped = transform(&key, value);
                (key, mapped)
            })
            .collect();
        CollectionMap { items }
    }

    /// Insert or replace, returning the previous value if there was one
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.items.insert(key, value)
    }

    /// Insert only when `key` is vacant
    ///
    /// Returns the value already stored under `key`, untouched, or `None`
    /// when the new value was inserted.
    pub fn put_if_absent(&mut self, key: K, value: V) -> Option<&V> {
        match self.items.entry(key) {
            Entry::Occupied(entry) => Some(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Copy every entry of `other` into this container, overwriting
    /// overlapping keys
    pub fn merge<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.items.extend(other);
        self
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.items.remove(key)
    }

    pub fn keys(&self) -> Vec<&K> {
        self.items.keys().collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.items.values().collect()
    }

    pub fn pairs(&self) -> Vec<(&K, &V)> {
        self.items.iter().collect()
    }

    /// Remove every entry
    pub fn clean(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Borrow the backing map for boundary code
    pub(crate) fn collect(&self) -> &HashMap<K, V> {
        &self.items
    }

    /// Hand the backing map over to boundary code
    pub(crate) fn into_inner(self) -> HashMap<K, V> {
        self.items
    }
}

impl<K, V> Default for CollectionMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for CollectionMap<K, V>
where
    K: Eq + Hash,
{
    fn from(items: HashMap<K, V>) -> Self {
        Self::from_map(items)
    }
}

impl<K, V> FromIterator<(K, V)> for CollectionMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for CollectionMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<K, V> IntoIterator for CollectionMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
