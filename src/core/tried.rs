//! Words already submitted to the oracle in this session

use rustc_hash::FxHashSet;

/// Append-only record of submitted words, in submission order
#[derive(Debug, Clone, Default)]
pub struct TriedWords {
    seen: FxHashSet<String>,
    order: Vec<String>,
}

impl TriedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`; returns `false` if it was already recorded
    pub fn insert(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.order.push(word.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The last `n` words submitted, oldest first
    #[must_use]
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.order.len().saturating_sub(n);
        &self.order[start..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
