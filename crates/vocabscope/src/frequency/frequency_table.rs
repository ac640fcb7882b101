//! # Frequency Table

use core::borrow::Borrow;
use core::hash::Hash;

use crate::types::{CountType, KeyType, VSHashMap, hash_map_new, hash_map_with_capacity};

/// A `(key, count)` row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyEntry<K, C = usize> {
    /// The counted key.
    pub key: K,

    /// The number of occurrences.
    pub count: C,
}

impl<K, C> FrequencyEntry<K, C> {
    /// Create a new entry.
    pub fn new(
        key: K,
        count: C,
    ) -> Self {
        Self { key, count }
    }
}

impl<K, C> From<(K, C)> for FrequencyEntry<K, C> {
    fn from((key, count): (K, C)) -> Self {
        Self::new(key, count)
    }
}

/// `{ K -> C }` counts which remember first-insertion order.
///
/// Ranked queries ([`top_n`](Self::top_n), [`ranked`](Self::ranked)) sort by
/// descending count; ties keep first-insertion order.
///
/// ## Style Hints
/// Instance names should prefer `{thing}_counts`, or `{thing}_freqs`.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K: KeyType, C: CountType = usize> {
    entries: Vec<FrequencyEntry<K, C>>,
    index: VSHashMap<K, usize>,
}

impl<K: KeyType, C: CountType> Default for FrequencyTable<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyType, C: CountType> PartialEq for FrequencyTable<K, C> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl<K: KeyType, C: CountType> FrequencyTable<K, C> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: hash_map_new(),
        }
    }

    /// Create a new empty table with room for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: hash_map_with_capacity(capacity),
        }
    }

    /// Add one occurrence of `key`.
    pub fn increment(
        &mut self,
        key: K,
    ) {
        self.add(key, C::one());
    }

    /// Add `count` occurrences of `key`.
    pub fn add(
        &mut self,
        key: K,
        count: C,
    ) {
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].count += count,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(FrequencyEntry::new(key, count));
            }
        }
    }

    /// Add one occurrence of each key.
    pub fn update<I>(
        &mut self,
        keys: I,
    ) where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.increment(key);
        }
    }

    /// Get the count for `key`, if it has been seen.
    pub fn get<Q>(
        &self,
        key: &Q,
    ) -> Option<C>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| self.entries[idx].count)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of all counts.
    pub fn total(&self) -> C {
        self.entries
            .iter()
            .fold(C::zero(), |acc, entry| acc + entry.count)
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry<K, C>> {
        self.entries.iter()
    }

    /// All entries, by descending count; ties in first-insertion order.
    pub fn ranked(&self) -> Vec<FrequencyEntry<K, C>> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` highest-count entries; ties in first-insertion order.
    pub fn top_n(
        &self,
        n: usize,
    ) -> Vec<FrequencyEntry<K, C>> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Release the entries, in first-insertion order.
    pub fn into_entries(self) -> Vec<FrequencyEntry<K, C>> {
        self.entries
    }
}

impl<K: KeyType, C: CountType> FromIterator<K> for FrequencyTable<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.update(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let table: FrequencyTable<&str> = ["b", "a", "b", "c", "b", "a"].into_iter().collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
        assert_eq!(table.get("b"), Some(3));
        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("z"), None);

        let order: Vec<&str> = table.iter().map(|e| e.key).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_n_stable_ties() {
        let table: FrequencyTable<char, u32> = "xyzzyx w".chars().collect();

        // x, y, z all have 2; space and w have 1.
        assert_eq!(
            table.top_n(4),
            vec![
                FrequencyEntry::new('x', 2),
                FrequencyEntry::new('y', 2),
                FrequencyEntry::new('z', 2),
                FrequencyEntry::new(' ', 1),
            ]
        );
        assert_eq!(table.ranked().len(), 5);
    }

    #[test]
    fn test_top_n_duplicates() {
        let table: FrequencyTable<String> = ["a</w>", "a</w>", "b</w>"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(table.top_n(1), vec![FrequencyEntry::new("a</w>".to_string(), 2)]);
    }

    #[test]
    fn test_top_n_overlong() {
        let table: FrequencyTable<u8> = [1u8, 2].into_iter().collect();
        assert_eq!(table.top_n(10).len(), 2);
        assert!(table.top_n(0).is_empty());
    }

    #[test]
    fn test_empty() {
        let table: FrequencyTable<String, u64> = FrequencyTable::with_capacity(8);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.top_n(5).is_empty());
        assert_eq!(table, FrequencyTable::default());
    }

    #[test]
    fn test_add() {
        let mut table: FrequencyTable<&str, u16> = FrequencyTable::new();
        table.add("k", 5);
        table.increment("k");
        table.add("j", 7);

        assert_eq!(
            table.into_entries(),
            vec![FrequencyEntry::new("k", 6), FrequencyEntry::new("j", 7)]
        );
    }
}
