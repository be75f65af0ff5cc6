use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Observation counts keyed by label, in first-seen order.
///
/// Serializes as a plain JSON object. Insertion order is kept through a
/// load/save cycle so that ranking ties resolve the same way every session.
#[derive(Debug, Clone, Default)]
pub struct ObservationCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl ObservationCounts {
    /// Create an empty counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `label`, inserting it at the end if new.
    /// Returns the updated count.
    pub fn observe(&mut self, label: &str) -> u64 {
        match self.index.get(label) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count += 1;
                *count
            }
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
                1
            }
        }
    }

    /// Current count for `label`, or 0 if never observed.
    pub fn get(&self, label: &str) -> u64 {
        self.index
            .get(label)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The `n` labels with the highest counts.
    ///
    /// The sort is stable, so equal counts keep insertion order.
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(k, _)| k.clone()).collect()
    }

    fn insert(&mut self, label: String, count: u64) {
        match self.index.get(&label) {
            Some(&i) => self.entries[i].1 = count,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, count));
            }
        }
    }
}

impl PartialEq for ObservationCounts {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for ObservationCounts {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut counts = Self::new();
        for (label, count) in iter {
            counts.insert(label.as_ref().to_string(), count);
        }
        counts
    }
}

impl Serialize for ObservationCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

struct CountsVisitor;

impl<'de> Visitor<'de> for CountsVisitor {
    type Value = ObservationCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping labels to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = ObservationCounts::new();
        while let Some((label, count)) = access.next_entry::<String, u64>()? {
            counts.insert(label, count);
        }
        Ok(counts)
    }
}

impl<'de> Deserialize<'de> for ObservationCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CountsVisitor)
    }
}
