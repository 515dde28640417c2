//! The word index: dictionary words filed under their keypad encoding.

use log::trace;
use trie::{Trie, TrieNode};

use crate::keypad;
use crate::Result;

/// Read-only view of one digit position in the index.
pub type Node = TrieNode<String>;

pub struct WordIndex {
    trie: Trie<String>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Builds an index from `words`, stopping at the first word that cannot
    /// be encoded.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word)?;
        }
        Ok(index)
    }

    /// Files `word` under its encoding. Returns `false` when the word was
    /// already present.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> Result<bool> {
        let word = word.into();
        let digits = keypad::encode(&word)?;
        trace!("insert {} -> {}", word, digits);
        Ok(self.trie.insert(&digits, word)?)
    }

    /// Words whose encoding is exactly `digits`.
    pub fn words_ending_at(&self, digits: &str) -> &[String] {
        let words = self.trie.get(digits);
        trace!("words ending at {}: {}", digits, words.len());
        words
    }

    /// Whether any indexed word's encoding starts with `digits`.
    pub fn has_path(&self, digits: &str) -> bool {
        let found = self.trie.contains_prefix(digits);
        trace!("path {}: {}", digits, found);
        found
    }

    pub fn root(&self) -> &Node {
        self.trie.root()
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}
