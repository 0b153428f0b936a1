//! Frequency counting with deterministic tie-breaking
//!
//! Counts are kept in key order, so when several values share the highest
//! count the mode is the smallest of them in the key's natural ordering:
//! lowest number, earliest weekday (Monday first), or first string in
//! byte-wise order.
//!
//! Weekdays tie-break by their position in the week, not alphabetically by
//! name: a Monday/Friday tie yields Monday.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A value and how many trips carried it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

impl<T> ValueCount<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// Convert the value, keeping the count
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValueCount<U> {
        ValueCount {
            value: f(self.value),
            count: self.count,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ValueCount<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "trip" } else { "trips" };
        write!(f, "{} ({} {})", self.value, self.count, noun)
    }
}

/// Occurrence counts for a set of values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a value
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of values counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

impl<K: Ord + Clone> FrequencyTable<K> {
    /// Most frequent value, or `None` if nothing was counted
    ///
    /// Ties go to the smallest key.
    pub fn mode(&self) -> Option<ValueCount<K>> {
        let mut best: Option<(&K, usize)> = None;
        for (key, &count) in &self.counts {
            // Strict comparison keeps the earlier (smaller) key on ties
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((key, count));
            }
        }
        best.map(|(key, count)| ValueCount::new(key.clone(), count))
    }

    /// Every value, most frequent first, ties in key order
    pub fn ranked(&self) -> Vec<ValueCount<K>> {
        let mut ranked: Vec<ValueCount<K>> = self
            .counts
            .iter()
            .map(|(key, &count)| ValueCount::new(key.clone(), count))
            .collect();
        // Stable sort keeps ascending key order within equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most frequent values, ranked as in [`FrequencyTable::ranked`]
    pub fn top(&self, n: usize) -> Vec<ValueCount<K>> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Smallest counted value
    pub fn min_key(&self) -> Option<K> {
        self.counts.keys().next().cloned()
    }

    /// Largest counted value
    pub fn max_key(&self) -> Option<K> {
        self.counts.keys().next_back().cloned()
    }
}

impl<K: Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}
