use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum PhonewordErr {
    /// A dictionary word holds something other than a letter.
    #[error("invalid character {ch:?} in word {word:?}")]
    InvalidCharacter { word: String, ch: char },

    #[error("cannot index an empty word")]
    EmptyWord,

    /// The digit string does not match the grouped layout.
    #[error("digit string has {actual} digits but the layout expects {expected}")]
    InvalidSegmentation { expected: usize, actual: usize },

    #[error("digit string {0:?} holds non-ASCII characters")]
    InvalidDigits(String),

    /// A trie key held something other than a decimal digit.
    #[error(transparent)]
    InvalidKey(#[from] trie::KeyError),

    #[error("malformed phone number {0:?}, expected 1-###-###-####")]
    InvalidFormat(String),

    #[error("io error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for PhonewordErr {
    fn from(err: std::io::Error) -> Self {
        PhonewordErr::IOError(err.to_string())
    }
}
