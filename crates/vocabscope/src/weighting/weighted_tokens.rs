//! # Weighted Tokens

use crate::types::{VSHashMap, hash_map_new};

/// A surface token and its importance weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedToken {
    /// The surface form (end-of-word marker stripped).
    pub surface: String,

    /// The heuristic weight; always positive for positive factors.
    pub weight: f64,
}

impl WeightedToken {
    /// Create a new weighted token.
    pub fn new(
        surface: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            surface: surface.into(),
            weight,
        }
    }
}

/// `{ surface -> weight }` with insertion order.
///
/// Re-inserting a surface replaces its weight, but keeps the position
/// of its first insertion.
#[derive(Debug, Clone, Default)]
pub struct WeightedTokens {
    entries: Vec<WeightedToken>,
    index: VSHashMap<String, usize>,
}

impl PartialEq for WeightedTokens {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl WeightedTokens {
    /// Create a new empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: hash_map_new(),
        }
    }

    /// Insert a weighted token; last write wins.
    pub fn insert(
        &mut self,
        token: WeightedToken,
    ) {
        match self.index.get(&token.surface) {
            Some(&idx) => self.entries[idx].weight = token.weight,
            None => {
                self.index.insert(token.surface.clone(), self.entries.len());
                self.entries.push(token);
            }
        }
    }

    /// The weight of a surface, if present.
    pub fn get(
        &self,
        surface: &str,
    ) -> Option<f64> {
        self.index.get(surface).map(|&idx| self.entries[idx].weight)
    }

    /// The number of distinct surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedToken> {
        self.entries.iter()
    }

    /// Heaviest first; ties in insertion order.
    pub fn sorted_descending(&self) -> Vec<WeightedToken> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        sorted
    }

    /// Lightest first; ties in insertion order.
    pub fn sorted_ascending(&self) -> Vec<WeightedToken> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        sorted
    }

    /// The `n` heaviest tokens.
    pub fn top(
        &self,
        n: usize,
    ) -> Vec<WeightedToken> {
        let mut sorted = self.sorted_descending();
        sorted.truncate(n);
        sorted
    }

    /// The `n` lightest tokens.
    pub fn bottom(
        &self,
        n: usize,
    ) -> Vec<WeightedToken> {
        let mut sorted = self.sorted_ascending();
        sorted.truncate(n);
        sorted
    }

    /// The mean weight; `None` when empty.
    pub fn average_weight(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: f64 = self.entries.iter().map(|t| t.weight).sum();
        Some(total / self.entries.len() as f64)
    }

    /// Release the entries, in insertion order.
    pub fn into_entries(self) -> Vec<WeightedToken> {
        self.entries
    }
}

impl FromIterator<WeightedToken> for WeightedTokens {
    fn from_iter<I: IntoIterator<Item = WeightedToken>>(iter: I) -> Self {
        let mut weighted = Self::new();
        for token in iter {
            weighted.insert(token);
        }
        weighted
    }
}
