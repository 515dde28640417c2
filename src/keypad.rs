//! The standard telephone keypad letter table.
//!
//! ```text
//! 2 ABC  3 DEF  4 GHI  5 JKL  6 MNO  7 PQRS  8 TUV  9 WXYZ
//! ```
//!
//! `0` and `1` carry no letters.

use crate::err::PhonewordErr;
use crate::Result;

const KEYPAD: [u8; 26] = *b"22233344455566677778889999";

/// Keypad digit for an ASCII letter, case-insensitive.
#[inline]
pub fn digit_of(ch: char) -> Option<char> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    let idx = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
    Some(KEYPAD[idx] as char)
}

/// Encodes `word` into its keypad digits. Fails on the first character that
/// is not a letter.
pub fn encode(word: &str) -> Result<String> {
    if word.is_empty() {
        return Err(PhonewordErr::EmptyWord);
    }
    word.chars()
        .map(|ch| {
            digit_of(ch).ok_or_else(|| PhonewordErr::InvalidCharacter {
                word: word.to_string(),
                ch,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("CAT"), Ok("228".to_string()));
        assert_eq!(encode("cop"), Ok("267".to_string()));
        assert_eq!(encode("Fly"), Ok("359".to_string()));
        assert_eq!(encode("pqrswxyz"), Ok("77779999".to_string()));
    }

    #[test]
    fn test_every_letter() {
        let groups = [
            ('2', "ABC"),
            ('3', "DEF"),
            ('4', "GHI"),
            ('5', "JKL"),
            ('6', "MNO"),
            ('7', "PQRS"),
            ('8', "TUV"),
            ('9', "WXYZ"),
        ];
        for (digit, letters) in groups {
            for ch in letters.chars() {
                assert_eq!(digit_of(ch), Some(digit));
                assert_eq!(digit_of(ch.to_ascii_lowercase()), Some(digit));
            }
        }
    }

    #[test]
    fn test_encode_rejects() {
        assert_eq!(encode(""), Err(PhonewordErr::EmptyWord));
        assert_eq!(
            encode("can't"),
            Err(PhonewordErr::InvalidCharacter {
                word: "can't".to_string(),
                ch: '\''
            })
        );
        assert!(encode("r2d2").is_err());
        assert!(encode("café").is_err());
        assert_eq!(digit_of('1'), None);
        assert_eq!(digit_of(' '), None);
    }
}
