mod err;

pub mod decompose;
pub mod index;
pub mod keypad;
pub mod query;

pub mod batch;
pub mod dictionary;
pub mod phone;

pub mod arg;

pub use arg::Arg;
pub use batch::{Batch, Lookup, Spellings};
pub use decompose::{decompose, Partition, Partitions};
pub use err::PhonewordErr;
pub use index::WordIndex;
pub use keypad::encode;
pub use phone::PhoneNumber;
pub use query::{query, split_groups, Phrase, Phrases, Query, US_LAYOUT};

pub type Result<T> = std::result::Result<T, PhonewordErr>;
