//! Most-frequent-value computation.
//!
//! Ties are broken by taking the smallest key in ascending key order. Every report in
//! [`crate::stats`] goes through [`mode`], so the rule is the same for months, weekdays,
//! hours, stations, station pairs and birth years.

use std::collections::BTreeMap;

use serde::Serialize;

/// The most frequent value of a collection together with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode<K> {
    pub value: K,
    pub count: usize,
}

impl<K> Mode<K> {
    /// Convert the value while keeping the frequency.
    pub fn map<T>(self, f: impl FnOnce(K) -> T) -> Mode<T> {
        Mode {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Returns the most frequent key, or `None` for an empty input.
pub fn mode<K, I>(keys: I) -> Option<Mode<K>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for k in keys {
        *counts.entry(k).or_insert(0) += 1;
    }

    // Ascending iteration + strict `>` keeps the smallest key among ties.
    let mut best: Option<(K, usize)> = None;
    for (k, c) in counts {
        let better = match &best {
            Some((_, bc)) => c > *bc,
            None => true,
        };
        if better {
            best = Some((k, c));
        }
    }
    best.map(|(value, count)| Mode { value, count })
}
