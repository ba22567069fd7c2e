//! The phonetic alphabet of the Old Language.
//!
//! Five vowels and ten consonants. Classification is fixed: every symbol is
//! either a consonant or a vowel, never both.

use std::fmt;

/// A vowel phoneme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    /// All vowels in grid column order.
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Column of this vowel in the syllable grid.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The upper-case letter for this vowel.
    pub const fn as_char(self) -> char {
        match self {
            Vowel::A => 'A',
            Vowel::E => 'E',
            Vowel::I => 'I',
            Vowel::O => 'O',
            Vowel::U => 'U',
        }
    }
}

/// A consonant phoneme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consonant {
    K,
    L,
    M,
    N,
    P,
    R,
    S,
    T,
    V,
    W,
}

impl Consonant {
    /// All consonants in grid row order.
    pub const ALL: [Consonant; 10] = [
        Consonant::K,
        Consonant::L,
        Consonant::M,
        Consonant::N,
        Consonant::P,
        Consonant::R,
        Consonant::S,
        Consonant::T,
        Consonant::V,
        Consonant::W,
    ];

    /// Row of this consonant in the syllable grid.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The upper-case letter for this consonant.
    pub const fn as_char(self) -> char {
        match self {
            Consonant::K => 'K',
            Consonant::L => 'L',
            Consonant::M => 'M',
            Consonant::N => 'N',
            Consonant::P => 'P',
            Consonant::R => 'R',
            Consonant::S => 'S',
            Consonant::T => 'T',
            Consonant::V => 'V',
            Consonant::W => 'W',
        }
    }
}

/// Whether a phoneme is a consonant or a vowel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhonemeClass {
    Consonant,
    Vowel,
}

impl fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonemeClass::Consonant => f.write_str("consonant"),
            PhonemeClass::Vowel => f.write_str("vowel"),
        }
    }
}

/// One symbol of the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phoneme {
    Consonant(Consonant),
    Vowel(Vowel),
}

impl Phoneme {
    /// Classify a letter. Case-insensitive; returns `None` outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        let phoneme = match c.to_ascii_uppercase() {
            'A' => Phoneme::Vowel(Vowel::A),
            'E' => Phoneme::Vowel(Vowel::E),
            'I' => Phoneme::Vowel(Vowel::I),
            'O' => Phoneme::Vowel(Vowel::O),
            'U' => Phoneme::Vowel(Vowel::U),
            'K' => Phoneme::Consonant(Consonant::K),
            'L' => Phoneme::Consonant(Consonant::L),
            'M' => Phoneme::Consonant(Consonant::M),
            'N' => Phoneme::Consonant(Consonant::N),
            'P' => Phoneme::Consonant(Consonant::P),
            'R' => Phoneme::Consonant(Consonant::R),
            'S' => Phoneme::Consonant(Consonant::S),
            'T' => Phoneme::Consonant(Consonant::T),
            'V' => Phoneme::Consonant(Consonant::V),
            'W' => Phoneme::Consonant(Consonant::W),
            _ => return None,
        };
        Some(phoneme)
    }

    pub const fn as_char(self) -> char {
        match self {
            Phoneme::Consonant(c) => c.as_char(),
            Phoneme::Vowel(v) => v.as_char(),
        }
    }

    pub const fn class(self) -> PhonemeClass {
        match self {
            Phoneme::Consonant(_) => PhonemeClass::Consonant,
            Phoneme::Vowel(_) => PhonemeClass::Vowel,
        }
    }
}

impl From<Consonant> for Phoneme {
    fn from(c: Consonant) -> Self {
        Phoneme::Consonant(c)
    }
}

impl From<Vowel> for Phoneme {
    fn from(v: Vowel) -> Self {
        Phoneme::Vowel(v)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
