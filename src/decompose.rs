//! Word-break search over a single digit segment.
//!
//! [`decompose`] yields every way of covering a segment with consecutive
//! indexed words. The search walks the trie one digit at a time from each
//! word boundary, so a dead prefix is dropped after a single child lookup.

use log::trace;

use crate::index::{Node, WordIndex};

/// Words whose concatenated encodings spell one segment, in order.
pub type Partition<'a> = Vec<&'a str>;

/// One word boundary under exploration.
struct Frame<'a> {
    /// Offset in the segment where this word starts.
    start: usize,
    /// Trie node reached by `segment[start..end]`.
    node: &'a Node,
    end: usize,
    /// Next candidate in `node.values()`.
    next_word: usize,
}

/// Lazy, depth-first enumeration of the partitions of one segment.
///
/// Shorter words at each boundary come first; words that share an encoding
/// come in the order they were indexed.
pub struct Partitions<'a> {
    index: &'a WordIndex,
    segment: Vec<char>,
    stack: Vec<Frame<'a>>,
    partial: Partition<'a>,
}

pub fn decompose<'a>(segment: &str, index: &'a WordIndex) -> Partitions<'a> {
    let segment: Vec<char> = segment.chars().collect();
    let mut stack = Vec::with_capacity(segment.len() + 1);
    if !segment.is_empty() {
        stack.push(Frame {
            start: 0,
            node: index.root(),
            end: 0,
            next_word: 0,
        });
    }
    Partitions {
        index,
        segment,
        stack,
        partial: Vec::new(),
    }
}

impl<'a> Iterator for Partitions<'a> {
    type Item = Partition<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.segment.len();
        loop {
            let frame = self.stack.last_mut()?;

            // words ending here
            let node = frame.node;
            if frame.end > frame.start {
                if let Some(word) = node.values().get(frame.next_word) {
                    frame.next_word += 1;
                    self.partial.push(word.as_str());
                    if frame.end == len {
                        let found = self.partial.clone();
                        self.partial.pop();
                        trace!("partition {:?}", found);
                        return Some(found);
                    }
                    let start = frame.end;
                    self.stack.push(Frame {
                        start,
                        node: self.index.root(),
                        end: start,
                        next_word: 0,
                    });
                    continue;
                }
            }

            // extend the current word by one digit
            if frame.end < len {
                if let Some(child) = node.child(self.segment[frame.end]) {
                    frame.node = child;
                    frame.end += 1;
                    frame.next_word = 0;
                    continue;
                }
            }

            // exhausted; drop the word that led here
            self.stack.pop();
            if !self.stack.is_empty() {
                self.partial.pop();
            }
        }
    }
}
