//! Word lists and number range pseudonyms are drawn from.

use std::ops::RangeInclusive;

use crate::error::PseudonymError;
use crate::pseudonym::{Pseudonym, is_name_word};

pub const ADJECTIVES: [&str; 16] = [
    "Quiet", "Curious", "Bold", "Sleepy", "Gentle", "Rapid", "Shy", "Clever", "Brave", "Calm",
    "Swift", "Wise", "Kind", "Noble", "Silent", "Bright",
];

pub const ANIMALS: [&str; 16] = [
    "Fox", "Tiger", "Lemur", "Bear", "Otter", "Hawk", "Gecko", "Badger", "Panda", "Falcon", "Wolf",
    "Owl", "Deer", "Eagle", "Lynx", "Raven",
];

pub const NUMBERS: RangeInclusive<u16> = 100..=999;

/// The combination space: every adjective × animal × number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    adjectives: Vec<String>,
    animals: Vec<String>,
    numbers: RangeInclusive<u16>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            adjectives: ADJECTIVES.iter().map(ToString::to_string).collect(),
            animals: ANIMALS.iter().map(ToString::to_string).collect(),
            numbers: NUMBERS,
        }
    }
}

impl Vocabulary {
    /// Build a custom vocabulary. Empty lists or an empty range give a
    /// vocabulary with zero combinations, which always exhausts.
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidVocabulary` if a word is not a single
    /// alphabetic word or the range reaches outside `100..=999`, since such
    /// names would not parse back as a [`Pseudonym`].
    pub fn new(
        adjectives: &[&str],
        animals: &[&str],
        numbers: RangeInclusive<u16>,
    ) -> Result<Self, PseudonymError> {
        if let Some(word) = adjectives.iter().chain(animals).find(|w| !is_name_word(w)) {
            return Err(PseudonymError::InvalidVocabulary(format!(
                "'{word}' is not a single alphabetic word"
            )));
        }
        let in_range = NUMBERS.contains(numbers.start()) && NUMBERS.contains(numbers.end());
        if !numbers.is_empty() && !in_range {
            return Err(PseudonymError::InvalidVocabulary(format!(
                "numbers {}..={} must stay within {}..={}",
                numbers.start(),
                numbers.end(),
                NUMBERS.start(),
                NUMBERS.end()
            )));
        }

        Ok(Self {
            adjectives: adjectives.iter().map(ToString::to_string).collect(),
            animals: animals.iter().map(ToString::to_string).collect(),
            numbers,
        })
    }

    #[must_use]
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    #[must_use]
    pub fn animals(&self) -> &[String] {
        &self.animals
    }

    #[must_use]
    pub const fn numbers(&self) -> &RangeInclusive<u16> {
        &self.numbers
    }

    fn number_count(&self) -> u64 {
        if self.numbers.is_empty() {
            0
        } else {
            u64::from(*self.numbers.end() - *self.numbers.start()) + 1
        }
    }

    /// Total distinct pseudonyms (230,400 for the default lists).
    #[must_use]
    pub fn combinations(&self) -> u64 {
        self.adjectives.len() as u64 * self.animals.len() as u64 * self.number_count()
    }

    /// Compose the pseudonym for one coordinate of the space.
    ///
    /// Callers must keep indexes in bounds; they come from the generator's
    /// own draws or from [`Self::nth`].
    #[must_use]
    pub fn compose(&self, adjective: usize, animal: usize, number: u16) -> Pseudonym {
        Pseudonym::from_parts(&self.adjectives[adjective], &self.animals[animal], number)
    }

    /// The `index`-th combination in a fixed enumeration order
    /// (number fastest, then animal, then adjective), or `None` past the end.
    #[must_use]
    pub fn nth(&self, index: u64) -> Option<Pseudonym> {
        if index >= self.combinations() {
            return None;
        }
        let numbers = self.number_count();
        let animals = self.animals.len() as u64;

        let number_offset = index % numbers;
        let animal = (index / numbers) % animals;
        let adjective = index / (numbers * animals);

        let number = u16::try_from(u64::from(*self.numbers.start()) + number_offset).ok()?;
        let animal = usize::try_from(animal).ok()?;
        let adjective = usize::try_from(adjective).ok()?;
        Some(self.compose(adjective, animal, number))
    }

    /// Iterate the whole combination space in [`Self::nth`] order.
    pub fn iter(&self) -> impl Iterator<Item = Pseudonym> + '_ {
        (0..self.combinations()).filter_map(|i| self.nth(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_space_size() {
        assert_eq!(Vocabulary::default().combinations(), 16 * 16 * 900);
    }

    #[test]
    fn nth_walks_numbers_first() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.nth(0).unwrap().as_str(), "Quiet Fox #100");
        assert_eq!(vocab.nth(1).unwrap().as_str(), "Quiet Fox #101");
        assert_eq!(vocab.nth(900).unwrap().as_str(), "Quiet Tiger #100");
        assert_eq!(vocab.nth(230_399).unwrap().as_str(), "Bright Raven #999");
        assert!(vocab.nth(230_400).is_none());
    }

    #[test]
    fn empty_lists_have_no_combinations() {
        let vocab = Vocabulary::new(&[], &["Fox"], 100..=101).unwrap();
        assert_eq!(vocab.combinations(), 0);
        assert_eq!(vocab.iter().count(), 0);
    }

    #[rstest]
    #[case(&["Ice-cold"], &["Owl"], 100..=999)]
    #[case(&["Calm"], &["Snow Owl"], 100..=999)]
    #[case(&[""], &["Owl"], 100..=999)]
    #[case(&["Calm"], &["Owl"], 5..=5)]
    #[case(&["Calm"], &["Owl"], 990..=1000)]
    fn words_and_numbers_must_round_trip(
        #[case] adjectives: &[&str],
        #[case] animals: &[&str],
        #[case] numbers: RangeInclusive<u16>,
    ) {
        let err = Vocabulary::new(adjectives, animals, numbers).unwrap_err();
        assert!(matches!(err, PseudonymError::InvalidVocabulary(_)));
    }

    #[test]
    fn every_custom_name_parses_back() {
        let vocab = Vocabulary::new(&["Calm", "Été"], &["Owl"], 998..=999).unwrap();
        for name in vocab.iter() {
            let json = serde_json::to_string(&name).unwrap();
            let back: Pseudonym = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
            assert!(back.number() >= 998);
        }
    }

    #[test]
    fn tiny_vocabulary_enumerates_everything() {
        let vocab = Vocabulary::new(&["Calm"], &["Owl", "Deer"], 100..=101).unwrap();
        let names: Vec<String> = vocab.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            vec!["Calm Owl #100", "Calm Owl #101", "Calm Deer #100", "Calm Deer #101"]
        );
    }
}
