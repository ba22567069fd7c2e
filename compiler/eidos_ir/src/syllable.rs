//! Syllables and words.
//!
//! A syllable is always a consonant followed by a vowel. A word is a
//! non-empty sequence of syllables; the word table decides which sequences
//! mean something.

use std::fmt;

use smallvec::SmallVec;

use crate::phoneme::{Consonant, Phoneme, Vowel};

/// A consonant-vowel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllable {
    consonant: Consonant,
    vowel: Vowel,
}

impl Syllable {
    /// Number of distinct syllables in the grid.
    pub const COUNT: usize = Consonant::ALL.len() * Vowel::ALL.len();

    #[inline]
    pub const fn new(consonant: Consonant, vowel: Vowel) -> Self {
        Syllable { consonant, vowel }
    }

    #[inline]
    pub const fn consonant(self) -> Consonant {
        self.consonant
    }

    #[inline]
    pub const fn vowel(self) -> Vowel {
        self.vowel
    }

    /// Dense index into the consonant × vowel grid (row-major).
    #[inline]
    pub const fn index(self) -> usize {
        self.consonant.index() * Vowel::ALL.len() + self.vowel.index()
    }

    pub const fn phonemes(self) -> [Phoneme; 2] {
        [Phoneme::Consonant(self.consonant), Phoneme::Vowel(self.vowel)]
    }

    /// Every syllable in grid order.
    pub fn all() -> impl Iterator<Item = Syllable> {
        Consonant::ALL
            .into_iter()
            .flat_map(|c| Vowel::ALL.into_iter().map(move |v| Syllable::new(c, v)))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.consonant.as_char(), self.vowel.as_char())
    }
}

/// A non-empty syllable sequence.
///
/// Words in the current language are at most two syllables long, so the
/// inline capacity covers every table entry without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    syllables: SmallVec<[Syllable; 2]>,
}

impl Word {
    /// Build a word. Returns `None` for an empty sequence.
    pub fn new(syllables: impl IntoIterator<Item = Syllable>) -> Option<Self> {
        let syllables: SmallVec<[Syllable; 2]> = syllables.into_iter().collect();
        if syllables.is_empty() {
            None
        } else {
            Some(Word { syllables })
        }
    }

    /// A one-syllable word.
    pub fn single(syllable: Syllable) -> Self {
        let mut syllables = SmallVec::new();
        syllables.push(syllable);
        Word { syllables }
    }

    #[inline]
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    #[inline]
    #[allow(clippy::len_without_is_empty, reason = "words are never empty")]
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Whether `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Word) -> bool {
        self.len() < other.len() && other.syllables.starts_with(&self.syllables)
    }

    pub fn phonemes(&self) -> impl Iterator<Item = Phoneme> + '_ {
        self.syllables.iter().flat_map(|s| s.phonemes())
    }
}

impl From<Syllable> for Word {
    fn from(syllable: Syllable) -> Self {
        Word::single(syllable)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in &self.syllables {
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
