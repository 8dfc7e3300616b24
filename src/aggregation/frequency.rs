use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter that remembers the order keys were first seen.
///
/// The order is part of the contract: [`FrequencyCounter::argmax`] resolves
/// ties in favour of the key inserted first.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    /// Keys in first-insertion order
    keys: Vec<K>,
    /// Occurrences per key
    counts: HashMap<K, u64>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`, returning its new count
    pub fn increment(&mut self, key: K) -> u64 {
        self.add(key, 1)
    }

    fn add(&mut self, key: K, n: u64) -> u64 {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += n;
            return *count;
        }
        self.keys.push(key.clone());
        self.counts.insert(key, n);
        n
    }

    /// Current count for `key`, zero when unseen
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been counted
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys and counts in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.keys.iter().map(move |key| (key, self.get(key)))
    }

    /// Key with the highest count, with that count.
    ///
    /// Among keys sharing the maximum, the one inserted first wins. Returns
    /// `None` when nothing has been counted.
    pub fn argmax(&self) -> Option<(&K, u64)> {
        self.iter().fold(None, |best, (key, count)| match best {
            Some((_, top)) if count <= top => best,
            _ => Some((key, count)),
        })
    }

    /// Add another counter's counts into this one.
    ///
    /// Keys already present keep their position; keys only seen by `other`
    /// are appended in `other`'s insertion order.
    pub fn merge(&mut self, other: FrequencyCounter<K>) {
        let FrequencyCounter { keys, mut counts } = other;
        for key in keys {
            if let Some(n) = counts.remove(&key) {
                self.add(key, n);
            }
        }
    }
}
