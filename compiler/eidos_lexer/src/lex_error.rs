//! Lexer error types.
//!
//! Every error carries the offset (in characters of the source text, or in
//! phonemes for pre-classified input) where lexing stopped. Lexing aborts on
//! the first error, before anything executes.

use eidos_ir::{Phoneme, PhonemeClass, Syllable};
use smallvec::SmallVec;
use thiserror::Error;

/// A lexer error with the position it was detected at.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} (at offset {offset})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        LexError { kind, offset }
    }
}

/// What went wrong while lexing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A symbol outside the 15-symbol alphabet.
    #[error("invalid phoneme {symbol:?}")]
    InvalidPhoneme { symbol: char },

    /// A consonant not immediately followed by a vowel, or a vowel where a
    /// syllable should start. `found` is `None` when the stream ended.
    #[error("malformed syllable: expected a {expected}, found {}", describe(*found))]
    MalformedSyllable {
        expected: PhonemeClass,
        found: Option<Phoneme>,
    },

    /// No table entry matches the syllables consumed at this position.
    #[error("unknown word {}", spell(syllables))]
    UnknownWord { syllables: SmallVec<[Syllable; 2]> },
}

fn describe(found: Option<Phoneme>) -> String {
    match found {
        Some(phoneme) => format!("{} {phoneme}", phoneme.class()),
        None => "end of spell".to_string(),
    }
}

fn spell(syllables: &[Syllable]) -> String {
    syllables.iter().map(ToString::to_string).collect()
}
