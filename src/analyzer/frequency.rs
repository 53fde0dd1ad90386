use std::collections::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Word counts ordered by descending count, ties in first-seen order.
///
/// Serializes as a JSON object whose key order follows that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
}

impl WordFrequency {
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for word in words {
            match index.get(&word) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(word.clone(), entries.len());
                    entries.push((word, 1));
                }
            }
        }

        // sort_by is stable, so ties keep first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Number of words counted, duplicates included
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}
