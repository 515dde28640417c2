use std::fmt::Display;

use crate::err::PhonewordErr;
use crate::query::US_LAYOUT;
use crate::Result;

const SEPARATOR: char = '-';

/// A validated `1-###-###-####` phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let bad = || PhonewordErr::InvalidFormat(input.to_string());

        let mut separators = Vec::with_capacity(US_LAYOUT.len() - 1);
        let mut at = 0;
        for len in &US_LAYOUT[..US_LAYOUT.len() - 1] {
            at += len;
            separators.push(at);
            at += 1;
        }
        let width = at + US_LAYOUT[US_LAYOUT.len() - 1];

        if input.chars().count() != width {
            return Err(bad());
        }
        let mut digits = String::with_capacity(width);
        for (i, c) in input.chars().enumerate() {
            match (separators.contains(&i), c) {
                (true, SEPARATOR) => {}
                (false, c) if c.is_ascii_digit() => digits.push(c),
                _ => return Err(bad()),
            }
        }
        Ok(Self { digits })
    }

    /// The number with separators stripped.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn layout(&self) -> &'static [usize] {
        &US_LAYOUT
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhonewordErr;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rest = self.digits.as_str();
        for (i, &len) in US_LAYOUT.iter().enumerate() {
            let (group, tail) = rest.split_at(len);
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(group)?;
            rest = tail;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let number = PhoneNumber::parse("1-800-555-1234").unwrap();
        assert_eq!(number.digits(), "18005551234");
        assert_eq!(number.layout(), &[1, 3, 3, 4]);
        assert_eq!(number.to_string(), "1-800-555-1234");
        assert_eq!("  1-800-555-1234\n".parse::<PhoneNumber>(), Ok(number));
    }

    #[test]
    fn test_parse_rejects() {
        for input in [
            "",
            "18005551234",
            "1-800-555-123",
            "1-800-555-12345",
            "1-8005-55-1234",
            "1 800 555 1234",
            "1-800-FLY-1234",
            "--800-555-1234",
            "1-800-555-12-4",
        ] {
            assert_eq!(
                PhoneNumber::parse(input),
                Err(PhonewordErr::InvalidFormat(input.trim().to_string())),
                "{:?} should be rejected",
                input
            );
        }
    }
}
