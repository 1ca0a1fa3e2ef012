//! The `Pseudonym` newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PseudonymError;

/// A single non-empty alphabetic word, as adjectives and animals must be.
pub(crate) fn is_name_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// An anonymous display name of the form `"<Adjective> <Animal> #<number>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pseudonym(String);

impl Pseudonym {
    pub(crate) fn from_parts(adjective: &str, animal: &str, number: u16) -> Self {
        Self(format!("{adjective} {animal} #{number}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// First letters of the adjective and the animal ("Silent Lemur #234" -> "SL").
    #[must_use]
    pub fn initials(&self) -> String {
        self.0
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The numeric suffix.
    #[must_use]
    pub fn number(&self) -> u16 {
        self.0
            .rsplit_once('#')
            .and_then(|(_, n)| n.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Pseudonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pseudonym {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Pseudonym> for String {
    fn from(value: Pseudonym) -> Self {
        value.0
    }
}

impl FromStr for Pseudonym {
    type Err = PseudonymError;

    /// Accepts any two alphabetic words followed by `#` and a 3-digit number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PseudonymError::InvalidFormat(s.to_string());

        let mut words = s.split(' ');
        let (Some(adjective), Some(animal), Some(tail), None) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            return Err(invalid());
        };

        if !is_name_word(adjective) || !is_name_word(animal) {
            return Err(invalid());
        }

        let digits = tail.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: u16 = digits.parse().map_err(|_| invalid())?;
        if number < 100 {
            return Err(invalid());
        }

        Ok(Self::from_parts(adjective, animal, number))
    }
}

impl TryFrom<String> for Pseudonym {
    type Error = PseudonymError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
