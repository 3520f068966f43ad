// Frequency tables — the sparse vector representation of a document.
//
// Building happens in two phases. A `FrequencyCounter` accumulates counts in
// a hash map, then `freeze()` sorts the entries once by word and hands back an
// immutable `FrequencyTable`. Tables are always sorted by word in strictly
// ascending byte order with no duplicate words; the sweep in `angle` relies
// on that.

use std::collections::HashMap;

use serde::Serialize;

/// One distinct word and how many times it occurred in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

/// Mutable accumulation phase of a frequency table.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: HashMap<String, u64>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    /// Count `n` occurrences of `word` at once. Zero is ignored.
    pub fn add_count(&mut self, word: &str, n: u64) {
        if n == 0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(word) {
            *count = count.saturating_add(n);
        } else {
            self.counts.insert(word.to_string(), n);
        }
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    /// Sort the accumulated counts and freeze them into a table.
    pub fn freeze(self) -> FrequencyTable {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .into_iter()
            .map(|(word, count)| FrequencyEntry { word, count })
            .collect();
        // Words are the map keys, so no two entries compare equal
        entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        FrequencyTable { entries }
    }
}

/// Immutable, sorted, deduplicated (word, count) sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count a token sequence and freeze the result.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = FrequencyCounter::new();
        counter.extend(tokens);
        counter.freeze()
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens the table was built from.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Occurrences of `word`, or 0 if it never appeared.
    pub fn count_of(&self, word: &str) -> u64 {
        self.entries
            .binary_search_by(|e| e.word.as_str().cmp(word))
            .map(|idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// The `n` most frequent words, count descending, ties broken alphabetically.
    pub fn most_frequent(&self, n: usize) -> Vec<&FrequencyEntry> {
        let mut ranked: Vec<&FrequencyEntry> = self.entries.iter().collect();
        // Stable sort keeps the alphabetical order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
