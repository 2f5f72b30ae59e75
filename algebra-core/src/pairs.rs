use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sequence of `(K, V)` pairs kept sorted by a caller-supplied total order on `K`,
/// with at most one entry per key.
///
/// The order is not part of the type: every ordered operation takes the comparator explicitly.
/// Using the same comparator for all operations on one instance is the caller's responsibility,
/// mixing comparators leaves the sequence in an unspecified (but memory-safe) order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pairs<K, V>(Vec<(K, V)>);

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSequence {
    #[error("duplicate key at position {index}")]
    DuplicateKey { index: usize },
    #[error("key at position {index} breaks the sort order")]
    Unsorted { index: usize },
}

impl<K, V> Pairs<K, V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Replace the whole sequence with pre-built pairs. Neither order nor uniqueness is checked.
    pub fn set(pairs: Vec<(K, V)>) -> Self {
        Self(pairs)
    }

    /// Like [Pairs::set], but rejects data that is not strictly ascending under `compare`.
    pub fn try_from_vec<F>(pairs: Vec<(K, V)>, compare: F) -> Result<Self, MalformedSequence>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        let seq = Self(pairs);
        seq.validate(compare)?;
        Ok(seq)
    }

    /// Insert `(key, value)` at the position that keeps the sequence sorted under `compare`.
    /// An entry the comparator deems equal is overwritten in place, key included.
    pub fn insert_or_replace<F>(mut self, key: K, value: V, compare: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering,
    {
        match self.0.binary_search_by(|(k, _)| compare(k, &key)) {
            Ok(pos) => self.0[pos] = (key, value),
            Err(pos) => self.0.insert(pos, (key, value)),
        }
        self
    }

    /// Push `(key, value)` to the tail. Ordering is not checked.
    pub fn append(mut self, key: K, value: V) -> Self {
        self.0.push((key, value));
        self
    }

    pub fn remove<F>(mut self, key: &K, compare: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering,
    {
        if let Some(pos) = self.position(key, compare) {
            self.0.remove(pos);
        }
        self
    }

    pub fn get_first<F>(&self, key: &K, compare: F) -> Option<&V>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        self.position(key, compare).map(|pos| &self.0[pos].1)
    }

    pub fn has_key<F>(&self, key: &K, compare: F) -> bool
    where
        F: Fn(&K, &K) -> Ordering,
    {
        self.position(key, compare).is_some()
    }

    /// Check that keys are strictly ascending under `compare`.
    pub fn validate<F>(&self, compare: F) -> Result<(), MalformedSequence>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        for (i, w) in self.0.windows(2).enumerate() {
            match compare(&w[0].0, &w[1].0) {
                Ordering::Less => {}
                Ordering::Equal => return Err(MalformedSequence::DuplicateKey { index: i + 1 }),
                Ordering::Greater => return Err(MalformedSequence::Unsorted { index: i + 1 }),
            }
        }
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position<F>(&self, key: &K, compare: F) -> Option<usize>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        self.0.binary_search_by(|(k, _)| compare(k, key)).ok()
    }
}

impl<K, V> Default for Pairs<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<Vec<(K, V)>> for Pairs<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::set(pairs)
    }
}

impl<K, V> From<Pairs<K, V>> for Vec<(K, V)> {
    fn from(Pairs(pairs): Pairs<K, V>) -> Self {
        pairs
    }
}

impl<K, V> IntoIterator for Pairs<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
