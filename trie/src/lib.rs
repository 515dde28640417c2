//! A prefix tree keyed by decimal digits.
//!
//! Every node owns a fixed array of ten child slots, one per digit `0..=9`,
//! and an ordered set of values whose key ends exactly at that node. Keys are
//! ASCII digit strings such as `"228"`.

use std::fmt;

pub const RADIX: usize = 10;

/// Returned when a key contains something other than an ASCII digit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeyError(pub char);

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trie key digit {:?}", self.0)
    }
}

impl std::error::Error for KeyError {}

#[inline]
fn slot(c: char) -> Option<usize> {
    c.to_digit(RADIX as u32).map(|d| d as usize)
}

pub struct TrieNode<V> {
    children: [Option<Box<TrieNode<V>>>; RADIX],
    values: Vec<V>,
}

impl<V> TrieNode<V> {
    pub fn new_empty() -> Self {
        TrieNode {
            children: Default::default(),
            values: Vec::new(),
        }
    }

    /// Follow a single digit edge.
    #[inline]
    pub fn child(&self, digit: char) -> Option<&TrieNode<V>> {
        slot(digit).and_then(|i| self.children[i].as_deref())
    }

    /// Values whose key ends at this node, in insertion order.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn is_terminal(&self) -> bool {
        !self.values.is_empty()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new_empty()
    }
}

pub struct Trie<V> {
    root: TrieNode<V>,
    len: usize,
}

impl<V: PartialEq> Trie<V> {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new_empty(),
            len: 0,
        }
    }

    /// Adds `value` under `key`. Returns `Ok(false)` if the value was already
    /// stored there. A bad key leaves the trie untouched.
    pub fn insert(&mut self, key: &str, value: V) -> Result<bool, KeyError> {
        let slots = key
            .chars()
            .map(|c| slot(c).ok_or(KeyError(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = &mut self.root;
        for i in slots {
            node = node.children[i]
                .get_or_insert_with(|| Box::new(TrieNode::new_empty()))
                .as_mut();
        }
        if node.values.contains(&value) {
            return Ok(false);
        }
        node.values.push(value);
        self.len += 1;
        Ok(true)
    }
}

impl<V> Trie<V> {
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// The node reached by walking `key` from the root, if every step exists.
    pub fn node(&self, key: &str) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Values stored at exactly `key`; empty when the path is missing.
    pub fn get(&self, key: &str) -> &[V] {
        self.node(key).map(TrieNode::values).unwrap_or(&[])
    }

    pub fn contains_prefix(&self, key: &str) -> bool {
        self.node(key).is_some()
    }

    /// Number of distinct values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V: PartialEq> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}
