use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the phone book, never supplied by callers.
/// Positive and unique within one book; serialized as the bare number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(u32);

impl ContactId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// One phone book entry. All fields are free-form text except the id.
///
/// Decoding is strict: every field is required and unknown fields are
/// rejected, so a file element either maps cleanly onto a record or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Phone: {}, Comment: {}",
            self.id, self.name, self.phone, self.comment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_from_digits() {
        assert_eq!("42".parse::<ContactId>().unwrap(), ContactId::new(42));
    }

    #[test]
    fn id_rejects_non_numeric_text() {
        assert!("abc".parse::<ContactId>().is_err());
        assert!("".parse::<ContactId>().is_err());
        assert!("-1".parse::<ContactId>().is_err());
    }

    #[test]
    fn id_displays_as_bare_number() {
        assert_eq!(ContactId::new(7).to_string(), "7");
    }
}
