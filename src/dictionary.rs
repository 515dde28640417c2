//! Loading a word list into a [`WordIndex`].
//!
//! The list holds one word per line. Blank lines are ignored and words the
//! index refuses are skipped with a warning, so one bad entry never stops a
//! load. Read errors do.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::index::WordIndex;
use crate::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Words newly added to the index.
    pub indexed: usize,
    pub duplicates: usize,
    pub blank: usize,
    /// Lines rejected by the encoder.
    pub rejected: usize,
}

pub fn load_reader<R: BufRead>(reader: R) -> Result<(WordIndex, LoadStats)> {
    let mut index = WordIndex::new();
    let mut stats = LoadStats::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            stats.blank += 1;
            continue;
        }
        match index.insert(word) {
            Ok(true) => stats.indexed += 1,
            Ok(false) => stats.duplicates += 1,
            Err(e) => {
                warn!("line {}: skipping {:?}: {}", lineno + 1, word, e);
                stats.rejected += 1;
            }
        }
    }

    info!(
        "indexed {} words ({} duplicate, {} blank, {} rejected)",
        stats.indexed, stats.duplicates, stats.blank, stats.rejected
    );
    Ok((index, stats))
}

pub fn load_path<P: AsRef<Path>>(path: P) -> Result<(WordIndex, LoadStats)> {
    let path = path.as_ref();
    info!("loading dictionary {}", path.display());
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}
