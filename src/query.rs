//! Whole-number queries.
//!
//! A phone number is split into fixed-length groups, each group is
//! decomposed on its own, and the results are combined into phrases: one
//! partition per group.

use log::debug;

use crate::decompose::{decompose, Partition};
use crate::err::PhonewordErr;
use crate::index::WordIndex;
use crate::Result;

/// Group lengths of a `1-###-###-####` number.
pub const US_LAYOUT: [usize; 4] = [1, 3, 3, 4];

/// One partition per group, in group order.
pub type Phrase<'a> = Vec<Partition<'a>>;

/// Splits `digits` into consecutive groups of the given lengths.
pub fn split_groups<'d>(digits: &'d str, lengths: &[usize]) -> Result<Vec<&'d str>> {
    if !digits.is_ascii() {
        return Err(PhonewordErr::InvalidDigits(digits.to_string()));
    }
    let actual = digits.len();
    let expected: usize = lengths.iter().sum();
    if actual != expected || lengths.contains(&0) {
        return Err(PhonewordErr::InvalidSegmentation { expected, actual });
    }

    let mut groups = Vec::with_capacity(lengths.len());
    let mut rest = digits;
    for &len in lengths {
        let (group, tail) = rest.split_at(len);
        groups.push(group);
        rest = tail;
    }
    Ok(groups)
}

/// A query against a built index.
pub struct Query<'a> {
    index: &'a WordIndex,
    layout: Vec<usize>,
    literal_groups: usize,
}

impl<'a> Query<'a> {
    pub fn new(index: &'a WordIndex, layout: &[usize]) -> Self {
        Self {
            index,
            layout: layout.to_vec(),
            literal_groups: 0,
        }
    }

    /// Passes the first `n` groups through as their digits instead of
    /// spelling them.
    pub fn with_literal_groups(mut self, n: usize) -> Self {
        self.literal_groups = n;
        self
    }

    /// Every phrase that spells `digits`. Empty when some group cannot be
    /// spelled.
    pub fn run(&self, digits: &'a str) -> Result<Phrases<'a>> {
        let groups = split_groups(digits, &self.layout)?;
        let mut choices = Vec::with_capacity(groups.len());
        for (i, group) in groups.into_iter().enumerate() {
            let partitions: Vec<Partition<'a>> = if i < self.literal_groups {
                vec![vec![group]]
            } else {
                decompose(group, self.index).collect()
            };
            debug!("group {} ({}): {} partitions", i, group, partitions.len());
            choices.push(partitions);
        }
        Ok(Phrases::new(choices))
    }
}

/// Phrases for `digits` under `layout`, every group spelled.
pub fn query<'a>(digits: &'a str, layout: &[usize], index: &'a WordIndex) -> Result<Phrases<'a>> {
    Query::new(index, layout).run(digits)
}

/// Lazy cartesian product of per-group partitions. The last group varies
/// fastest. An empty layout yields a single empty phrase.
pub struct Phrases<'a> {
    choices: Vec<Vec<Partition<'a>>>,
    cursor: Vec<usize>,
    done: bool,
}

impl<'a> Phrases<'a> {
    fn new(choices: Vec<Vec<Partition<'a>>>) -> Self {
        let done = choices.iter().any(Vec::is_empty);
        let cursor = vec![0; choices.len()];
        Self {
            choices,
            cursor,
            done,
        }
    }

    /// Number of phrases not yet yielded.
    pub fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let total: usize = self.choices.iter().map(Vec::len).product();
        let yielded = self
            .choices
            .iter()
            .zip(&self.cursor)
            .fold(0, |acc, (group, &at)| acc * group.len() + at);
        total - yielded
    }
}

impl<'a> Iterator for Phrases<'a> {
    type Item = Phrase<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let phrase = self
            .choices
            .iter()
            .zip(&self.cursor)
            .map(|(group, &at)| group[at].clone())
            .collect();

        // advance the odometer
        self.done = true;
        for (group, at) in self.choices.iter().zip(self.cursor.iter_mut()).rev() {
            *at += 1;
            if *at < group.len() {
                self.done = false;
                break;
            }
            *at = 0;
        }
        Some(phrase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for Phrases<'a> {}
