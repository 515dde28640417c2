//! Running many lookups against one frozen index.
//!
//! The index is shared read-only through an `Arc`; each phone number is a
//! job on the worker pool and its spellings come back over a channel as
//! owned strings.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use log::{debug, warn};
use thread_pool::ThreadPool;

use crate::index::WordIndex;
use crate::phone::PhoneNumber;
use crate::query::{Phrase, Query};
use crate::Result;

/// How long `run` waits on a quiet channel before checking the workers.
const POLL: Duration = Duration::from_millis(50);

/// A phrase detached from the index it was found in.
pub type OwnedPhrase = Vec<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spellings {
    pub number: PhoneNumber,
    pub phrases: Vec<OwnedPhrase>,
    /// Phrases found before any limit was applied.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub input: String,
    pub outcome: Result<Spellings>,
}

fn detach(phrase: Phrase<'_>) -> OwnedPhrase {
    phrase
        .into_iter()
        .map(|partition| partition.into_iter().map(String::from).collect::<Vec<_>>())
        .collect()
}

#[derive(Clone)]
pub struct Batch {
    index: Arc<WordIndex>,
    literal_groups: usize,
    limit: Option<usize>,
}

impl Batch {
    pub fn new(index: Arc<WordIndex>) -> Self {
        Self {
            index,
            literal_groups: 0,
            limit: None,
        }
    }

    /// Leading groups printed as digits rather than spelled.
    pub fn literal_groups(mut self, n: usize) -> Self {
        self.literal_groups = n;
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    fn spell(&self, input: &str) -> Result<Spellings> {
        let number = PhoneNumber::parse(input)?;
        let phrases = Query::new(&self.index, number.layout())
            .with_literal_groups(self.literal_groups)
            .run(number.digits())?;
        let total = phrases.remaining();
        let phrases = phrases
            .take(self.limit.unwrap_or(usize::MAX))
            .map(detach)
            .collect();
        debug!("{}: {} spellings", number, total);
        Ok(Spellings {
            number,
            phrases,
            total,
        })
    }

    /// Looks up a single number on the calling thread.
    pub fn lookup(&self, input: &str) -> Lookup {
        Lookup {
            input: input.to_string(),
            outcome: self.spell(input),
        }
    }

    /// Looks up every input on `pool`. Results keep the input order.
    ///
    /// Numbers whose job never reports back, because its worker died or the
    /// pool has no live workers left, are looked up on the calling thread.
    pub fn run(&self, inputs: Vec<String>, pool: &ThreadPool) -> Vec<Lookup> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut slots: Vec<Option<Lookup>> = vec![None; inputs.len()];

        for (i, input) in inputs.iter().enumerate() {
            let batch = self.clone();
            let input = input.clone();
            let tx = tx.clone();
            let queued = pool.execute(move || {
                // run may have given up on this job already
                let _ = tx.send((i, batch.lookup(&input)));
            });
            if queued.is_err() {
                warn!("pool closed, looking up {} inline", inputs[i]);
                slots[i] = Some(self.lookup(&inputs[i]));
            }
        }
        drop(tx);

        loop {
            match rx.recv_timeout(POLL) {
                Ok((i, lookup)) => slots[i] = Some(lookup),
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) if pool.alive() == 0 => {
                    warn!("no live workers, finishing batch inline");
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
            }
        }

        slots
            .into_iter()
            .zip(inputs)
            .map(|(slot, input)| slot.unwrap_or_else(|| self.lookup(&input)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::PhonewordErr;

    fn batch() -> Batch {
        let index = WordIndex::from_words(["FLY", "CAT", "BAT", "CALL", "BALL"]).unwrap();
        Batch::new(Arc::new(index)).literal_groups(1)
    }

    #[test]
    fn test_lookup() {
        let lookup = batch().lookup("1-359-228-2255");
        let spellings = lookup.outcome.unwrap();
        assert_eq!(spellings.total, 4);
        assert_eq!(spellings.phrases.len(), 4);
        assert_eq!(
            spellings.phrases[0],
            vec![vec!["1"], vec!["FLY"], vec!["CAT"], vec!["CALL"]]
        );
        assert_eq!(spellings.number.digits(), "13592282255");
    }

    #[test]
    fn test_limit() {
        let spellings = batch()
            .limit(Some(1))
            .lookup("1-359-228-2255")
            .outcome
            .unwrap();
        assert_eq!(spellings.total, 4);
        assert_eq!(spellings.phrases.len(), 1);
    }

    #[test]
    fn test_bad_input() {
        let lookup = batch().lookup("555-1234");
        assert_eq!(
            lookup.outcome,
            Err(PhonewordErr::InvalidFormat("555-1234".to_string()))
        );
    }

    #[test]
    fn test_run_keeps_order() {
        let pool = ThreadPool::new(3).unwrap();
        let inputs: Vec<String> = [
            "1-359-228-2255",
            "1-800-555-1234",
            "bogus",
            "1-359-228-2255",
            "1-228-359-2255",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let lookups = batch().run(inputs.clone(), &pool);
        assert_eq!(pool.shutdown(), 0);

        let got: Vec<_> = lookups.iter().map(|l| l.input.clone()).collect();
        assert_eq!(got, inputs);
        assert_eq!(lookups[0].outcome.as_ref().unwrap().total, 4);
        assert_eq!(lookups[1].outcome.as_ref().unwrap().total, 0);
        assert!(lookups[2].outcome.is_err());
        assert_eq!(lookups[0], lookups[3]);
        assert_eq!(
            lookups[4].outcome.as_ref().unwrap().phrases[0],
            vec![vec!["1"], vec!["CAT"], vec!["FLY"], vec!["CALL"]]
        );
    }

    #[test]
    fn test_run_outlives_dead_workers() {
        let pool = ThreadPool::new(1).unwrap();
        pool.execute(|| {
            std::thread::sleep(Duration::from_millis(20));
            panic!("worker lost");
        })
        .unwrap();

        let inputs: Vec<String> = ["1-359-228-2255", "bogus", "1-228-359-2255"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let batch = batch();
        let lookups = batch.run(inputs.clone(), &pool);

        assert_eq!(pool.shutdown(), 1);
        let expected: Vec<_> = inputs.iter().map(|input| batch.lookup(input)).collect();
        assert_eq!(lookups, expected);
    }
}
